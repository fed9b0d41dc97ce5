// --- File: crates/sevenbarber_booking/src/models.rs ---
use crate::catalog::{Barber, Service, TimeSlot};
use crate::error::BookingError;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Booking form exactly as posted. Every field may be empty.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(default)]
pub struct BookingForm {
    #[cfg_attr(feature = "openapi", schema(example = "Ana"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "0991234567"))]
    pub contact: String,
    pub email: String,
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2024-06-01"))]
    pub date: String,
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub time: String,
    #[cfg_attr(feature = "openapi", schema(example = "VIP"))]
    pub service: String,
    #[cfg_attr(feature = "openapi", schema(example = "Barber A"))]
    pub barber: String,
    pub note: String,
}

/// A validated booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub contact: String,
    pub email: Option<String>,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub service: Service,
    pub barber: Barber,
    pub note: Option<String>,
}

/// Appointments always last one hour.
pub const APPOINTMENT_LENGTH_HOURS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    NotApplicable,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "PAID",
            PaymentStatus::NotApplicable => "Not applicable",
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, BookingError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| BookingError::InvalidField {
        field,
        reason: e.to_string(),
    })
}

impl BookingForm {
    /// Names of required fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("contact", &self.contact),
            ("date", &self.date),
            ("time", &self.time),
            ("service", &self.service),
            ("barber", &self.barber),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn validate(&self) -> Result<BookingRequest, BookingError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(BookingError::MissingFields(missing));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            BookingError::InvalidField {
                field: "date",
                reason: format!("'{}' is not a YYYY-MM-DD date", self.date.trim()),
            }
        })?;

        Ok(BookingRequest {
            name: self.name.trim().to_string(),
            contact: self.contact.trim().to_string(),
            email: optional(&self.email),
            date,
            time: parse_field("time", &self.time)?,
            service: parse_field("service", &self.service)?,
            barber: parse_field("barber", &self.barber)?,
            note: optional(&self.note),
        })
    }
}

impl BookingRequest {
    pub fn start(&self) -> NaiveDateTime {
        // Slot hours are 9..=20, always a valid time of day
        let time = NaiveTime::from_hms_opt(self.time.hour(), 0, 0).unwrap_or(NaiveTime::MIN);
        self.date.and_time(time)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.start() + Duration::hours(APPOINTMENT_LENGTH_HOURS)
    }

    pub fn payment_status(&self) -> PaymentStatus {
        if self.barber.requires_payment() {
            PaymentStatus::Paid
        } else {
            PaymentStatus::NotApplicable
        }
    }

    /// Price due up front, or `None` for the apprentice.
    pub fn amount_due(&self) -> Option<u32> {
        self.barber
            .requires_payment()
            .then(|| self.service.price_usd())
    }

    pub fn summary(&self) -> String {
        format!("Booking {} - {}", self.service, self.name)
    }

    pub fn description(&self) -> String {
        format!(
            "Client: {}\nContact: {}\nEmail: {}\nService: {}\nBarber: {}\nNote: {}\nPayment: {}",
            self.name,
            self.contact,
            self.email.as_deref().unwrap_or(""),
            self.service,
            self.barber,
            self.note.as_deref().unwrap_or(""),
            self.payment_status().label(),
        )
    }
}
