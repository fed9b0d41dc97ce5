// --- File: crates/sevenbarber_booking/src/catalog.rs ---
//! The shop's fixed offer: bookable hours, services with their prices, and barbers.
//!
//! Every enum serializes to, and parses from, the label shown in the form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Currency every price in the catalog is quoted in.
pub const CURRENCY: &str = "USD";

/// Hour slots a booking can start at. There is no 13:00 slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum TimeSlot {
    #[serde(rename = "09:00")]
    H09,
    #[serde(rename = "10:00")]
    H10,
    #[serde(rename = "11:00")]
    H11,
    #[serde(rename = "12:00")]
    H12,
    #[serde(rename = "14:00")]
    H14,
    #[serde(rename = "15:00")]
    H15,
    #[serde(rename = "16:00")]
    H16,
    #[serde(rename = "17:00")]
    H17,
    #[serde(rename = "18:00")]
    H18,
    #[serde(rename = "19:00")]
    H19,
    #[serde(rename = "20:00")]
    H20,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 11] = [
        TimeSlot::H09,
        TimeSlot::H10,
        TimeSlot::H11,
        TimeSlot::H12,
        TimeSlot::H14,
        TimeSlot::H15,
        TimeSlot::H16,
        TimeSlot::H17,
        TimeSlot::H18,
        TimeSlot::H19,
        TimeSlot::H20,
    ];

    pub fn hour(self) -> u32 {
        match self {
            TimeSlot::H09 => 9,
            TimeSlot::H10 => 10,
            TimeSlot::H11 => 11,
            TimeSlot::H12 => 12,
            TimeSlot::H14 => 14,
            TimeSlot::H15 => 15,
            TimeSlot::H16 => 16,
            TimeSlot::H17 => 17,
            TimeSlot::H18 => 18,
            TimeSlot::H19 => 19,
            TimeSlot::H20 => 20,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::H09 => "09:00",
            TimeSlot::H10 => "10:00",
            TimeSlot::H11 => "11:00",
            TimeSlot::H12 => "12:00",
            TimeSlot::H14 => "14:00",
            TimeSlot::H15 => "15:00",
            TimeSlot::H16 => "16:00",
            TimeSlot::H17 => "17:00",
            TimeSlot::H18 => "18:00",
            TimeSlot::H19 => "19:00",
            TimeSlot::H20 => "20:00",
        }
    }
}

/// Services on the menu, each with a flat price in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum Service {
    #[serde(rename = "Eyebrow profile")]
    EyebrowProfile,
    #[serde(rename = "Shave/Beard")]
    ShaveBeard,
    #[serde(rename = "Classic cut (clipper)")]
    ClassicCutClipper,
    #[serde(rename = "Classic cut (scissor)")]
    ClassicCutScissor,
    #[serde(rename = "Freestyle")]
    Freestyle,
    #[serde(rename = "Wavy/perm")]
    WavyPerm,
    #[serde(rename = "VIP")]
    Vip,
    #[serde(rename = "Apprentice")]
    Apprentice,
}

impl Service {
    pub const ALL: [Service; 8] = [
        Service::EyebrowProfile,
        Service::ShaveBeard,
        Service::ClassicCutClipper,
        Service::ClassicCutScissor,
        Service::Freestyle,
        Service::WavyPerm,
        Service::Vip,
        Service::Apprentice,
    ];

    pub fn price_usd(self) -> u32 {
        match self {
            Service::EyebrowProfile => 1,
            Service::ShaveBeard => 3,
            Service::ClassicCutClipper => 5,
            Service::ClassicCutScissor => 5,
            Service::Freestyle => 7,
            Service::WavyPerm => 20,
            Service::Vip => 8,
            Service::Apprentice => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::EyebrowProfile => "Eyebrow profile",
            Service::ShaveBeard => "Shave/Beard",
            Service::ClassicCutClipper => "Classic cut (clipper)",
            Service::ClassicCutScissor => "Classic cut (scissor)",
            Service::Freestyle => "Freestyle",
            Service::WavyPerm => "Wavy/perm",
            Service::Vip => "VIP",
            Service::Apprentice => "Apprentice",
        }
    }
}

/// Barbers a customer can book with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum Barber {
    #[serde(rename = "Barber A")]
    BarberA,
    #[serde(rename = "Barber B")]
    BarberB,
    /// Trainee. Bookings with the apprentice are not prepaid.
    #[serde(rename = "Apprentice")]
    Apprentice,
}

impl Barber {
    pub const ALL: [Barber; 3] = [Barber::BarberA, Barber::BarberB, Barber::Apprentice];

    pub fn is_apprentice(self) -> bool {
        matches!(self, Barber::Apprentice)
    }

    pub fn requires_payment(self) -> bool {
        !self.is_apprentice()
    }

    pub fn label(self) -> &'static str {
        match self {
            Barber::BarberA => "Barber A",
            Barber::BarberB => "Barber B",
            Barber::Apprentice => "Apprentice",
        }
    }
}

/// A barber's portfolio entry: avatar, tagline and three recent cuts.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioEntry {
    pub barber: Barber,
    pub tagline: &'static str,
    pub avatar: &'static str,
    pub works: [&'static str; 3],
}

pub const PORTFOLIO: [PortfolioEntry; 2] = [
    PortfolioEntry {
        barber: Barber::BarberA,
        tagline: "Modern style and professional precision.",
        avatar: "barber-a-profile.jpg",
        works: ["cut-1.jpg", "cut-2.jpg", "cut-3.jpg"],
    },
    PortfolioEntry {
        barber: Barber::BarberB,
        tagline: "Clean details and professional finishes.",
        avatar: "barber-b-profile.jpg",
        works: ["cut-4.jpg", "cut-5.jpg", "cut-6.jpg"],
    },
];

/// Hours the apprentice takes walk-ins and bookings.
pub const APPRENTICE_HOURS: (&str, &str) = ("16:00", "20:00");

/// Opening hours, every day.
pub const OPENING_HOURS: (&str, &str) = ("09:00", "21:00");

/// Returned when a label is not part of the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown option '{0}'")]
pub struct UnknownLabel(pub String);

macro_rules! label_conversions {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|item| item.label() == s)
                    .ok_or_else(|| UnknownLabel(s.to_string()))
            }
        }
    };
}

label_conversions!(TimeSlot);
label_conversions!(Service);
label_conversions!(Barber);
