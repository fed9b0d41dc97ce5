use crate::flow::{BookingFlow, BookingStage};
use crate::models::BookingForm;
use crate::test_support::ana_form;
use proptest::prelude::*;

const REQUIRED: [&str; 6] = ["name", "contact", "date", "time", "service", "barber"];

fn blank(form: &mut BookingForm, field: &str, filler: &str) {
    let slot = match field {
        "name" => &mut form.name,
        "contact" => &mut form.contact,
        "date" => &mut form.date,
        "time" => &mut form.time,
        "service" => &mut form.service,
        "barber" => &mut form.barber,
        _ => unreachable!(),
    };
    *slot = filler.to_string();
}

proptest! {
    #[test]
    fn any_blank_required_field_is_rejected(
        fields in proptest::sample::subsequence(REQUIRED.to_vec(), 1..=REQUIRED.len()),
        filler in "[ \t]{0,3}",
    ) {
        let mut form = ana_form();
        for field in &fields {
            blank(&mut form, field, &filler);
        }

        let mut flow = BookingFlow::new();
        let err = flow.submit(&form).unwrap_err();

        prop_assert!(err.is_validation());
        prop_assert_eq!(flow.stage(), BookingStage::Idle);
        prop_assert!(flow.request().is_none());
        for field in &fields {
            prop_assert!(err.to_string().contains(field));
        }
    }

    #[test]
    fn optional_fields_never_block_a_booking(
        email in "[a-z@. ]{0,12}",
        note in "[A-Za-z ]{0,20}",
    ) {
        let form = BookingForm { email, note, ..ana_form() };

        let mut flow = BookingFlow::new();
        prop_assert_eq!(flow.submit(&form).unwrap(), BookingStage::AwaitingPayment);
    }
}
