use crate::error::BookingError;
use crate::flow::{BookingFlow, BookingSettings, BookingStage};
use crate::models::BookingForm;
use crate::test_support::{ana_form, apprentice_form, RecordingCalendarService};
use chrono::NaiveDate;

fn settings() -> BookingSettings {
    BookingSettings {
        calendar_id: "shop-calendar".to_string(),
        time_zone: "America/Guayaquil".to_string(),
    }
}

#[test]
fn new_flow_is_idle() {
    let flow = BookingFlow::new();
    assert_eq!(flow.stage(), BookingStage::Idle);
    assert!(flow.request().is_none());
    assert!(!flow.show_payment());
    assert!(!flow.payment_confirmed());
    assert_eq!(flow.price(), None);
}

#[test]
fn missing_name_is_rejected_and_flow_untouched() {
    let mut flow = BookingFlow::new();
    let form = BookingForm {
        name: "   ".to_string(),
        ..ana_form()
    };

    let err = flow.submit(&form).unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(err, BookingError::MissingFields(ref fields) if fields == &vec!["name"]));
    assert_eq!(err.to_string(), "Please fill in all required fields: name");
    assert_eq!(flow, BookingFlow::new());
}

#[test]
fn rejected_submit_keeps_earlier_request() {
    let mut flow = BookingFlow::new();
    flow.submit(&ana_form()).unwrap();
    let before = flow.clone();

    let err = flow.submit(&BookingForm::default()).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(flow, before);
}

#[test]
fn only_form_errors_count_as_validation() {
    assert!(BookingError::MissingFields(vec!["name"]).is_validation());
    assert!(!BookingError::InvalidTransition {
        from: BookingStage::Idle,
        action: "confirm payment",
    }
    .is_validation());
}

#[test]
fn unknown_service_is_invalid_field() {
    let form = BookingForm {
        service: "Mohawk".to_string(),
        ..ana_form()
    };

    match form.validate() {
        Err(BookingError::InvalidField { field, .. }) => assert_eq!(field, "service"),
        other => panic!("expected invalid service, got {:?}", other),
    }
}

#[test]
fn thirteen_hundred_is_not_a_slot() {
    let form = BookingForm {
        time: "13:00".to_string(),
        ..ana_form()
    };

    assert!(matches!(
        form.validate(),
        Err(BookingError::InvalidField { field: "time", .. })
    ));
}

#[test]
fn malformed_date_is_rejected() {
    let form = BookingForm {
        date: "01/06/2024".to_string(),
        ..ana_form()
    };

    assert!(matches!(
        form.validate(),
        Err(BookingError::InvalidField { field: "date", .. })
    ));
}

#[test]
fn paid_barber_waits_for_payment() {
    let mut flow = BookingFlow::new();

    let stage = flow.submit(&ana_form()).unwrap();

    assert_eq!(stage, BookingStage::AwaitingPayment);
    assert!(flow.show_payment());
    assert!(!flow.payment_confirmed());
    assert_eq!(flow.price(), Some(8));
    assert!(flow.calendar_event("America/Guayaquil").is_err());
}

#[test]
fn apprentice_skips_payment() {
    let mut flow = BookingFlow::new();

    let stage = flow.submit(&apprentice_form()).unwrap();

    assert_eq!(stage, BookingStage::Ready);
    assert!(!flow.show_payment());
    assert_eq!(flow.price(), None);

    let event = flow.calendar_event("America/Guayaquil").unwrap();
    assert!(event.description.ends_with("Payment: Not applicable"));
}

#[test]
fn confirm_payment_needs_awaiting_payment() {
    let mut idle = BookingFlow::new();
    assert!(matches!(
        idle.confirm_payment(),
        Err(BookingError::InvalidTransition {
            from: BookingStage::Idle,
            ..
        })
    ));

    let mut ready = BookingFlow::new();
    ready.submit(&apprentice_form()).unwrap();
    assert!(matches!(
        ready.confirm_payment(),
        Err(BookingError::InvalidTransition {
            from: BookingStage::Ready,
            ..
        })
    ));
}

#[test]
fn price_follows_the_service_table() {
    let expected = [
        ("Eyebrow profile", 1),
        ("Shave/Beard", 3),
        ("Classic cut (clipper)", 5),
        ("Classic cut (scissor)", 5),
        ("Freestyle", 7),
        ("Wavy/perm", 20),
        ("VIP", 8),
        ("Apprentice", 2),
    ];

    for (service, price) in expected {
        let mut flow = BookingFlow::new();
        let form = BookingForm {
            service: service.to_string(),
            barber: "Barber B".to_string(),
            ..ana_form()
        };
        flow.submit(&form).unwrap();
        assert_eq!(flow.price(), Some(price), "price of {}", service);
    }
}

#[tokio::test]
async fn vip_booking_for_ana_creates_expected_event() {
    let calendar = RecordingCalendarService::new();
    let mut flow = BookingFlow::new();

    flow.submit(&ana_form()).unwrap();
    assert_eq!(flow.confirm_payment().unwrap(), BookingStage::Ready);
    let result = flow.complete(&calendar, &settings()).await.unwrap();

    assert_eq!(result.event_id.as_deref(), Some("evt1"));

    let attempts = calendar.attempts();
    assert_eq!(attempts.len(), 1);
    let (calendar_id, event) = &attempts[0];
    assert_eq!(calendar_id, "shop-calendar");

    let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert_eq!(event.start, day.and_hms_opt(10, 0, 0).unwrap());
    assert_eq!(event.end, day.and_hms_opt(11, 0, 0).unwrap());
    assert_eq!(event.time_zone, "America/Guayaquil");
    assert_eq!(event.summary, "Booking VIP - Ana");
    assert!(event.summary.contains("VIP"));
    assert!(event.summary.contains("Ana"));
    assert!(event.description.contains("Client: Ana"));
    assert!(event.description.contains("Contact: 0991234567"));
    assert!(event.description.contains("Barber: Barber A"));
    assert!(event.description.ends_with("Payment: PAID"));
}

#[tokio::test]
async fn success_resets_to_idle() {
    let calendar = RecordingCalendarService::new();
    let mut flow = BookingFlow::new();

    flow.submit(&apprentice_form()).unwrap();
    flow.complete(&calendar, &settings()).await.unwrap();

    assert_eq!(flow, BookingFlow::new());
    assert_eq!(flow.stage(), BookingStage::Idle);
}

#[tokio::test]
async fn failure_keeps_state_and_retry_sends_same_event() {
    let calendar = RecordingCalendarService::failing(1);
    let mut flow = BookingFlow::new();

    flow.submit(&ana_form()).unwrap();
    flow.confirm_payment().unwrap();
    let before = flow.clone();

    let err = flow.complete(&calendar, &settings()).await.unwrap_err();
    assert!(matches!(err, BookingError::Calendar(_)));
    assert_eq!(err.to_string(), "Error creating event: calendar unavailable");
    assert_eq!(flow, before);
    assert_eq!(flow.stage(), BookingStage::Ready);

    flow.complete(&calendar, &settings()).await.unwrap();

    let attempts = calendar.attempts();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0], attempts[1]);
    assert_eq!(calendar.created().len(), 1);
}

#[tokio::test]
async fn complete_before_ready_sends_nothing() {
    let calendar = RecordingCalendarService::new();
    let mut flow = BookingFlow::new();
    flow.submit(&ana_form()).unwrap();

    let err = flow.complete(&calendar, &settings()).await.unwrap_err();

    assert!(matches!(
        err,
        BookingError::InvalidTransition {
            from: BookingStage::AwaitingPayment,
            ..
        }
    ));
    assert!(calendar.attempts().is_empty());
}

#[test]
fn request_round_trips_through_form() {
    let request = ana_form().validate().unwrap();
    let form = BookingForm::from(&request);
    assert_eq!(form.validate().unwrap(), request);
}
