//! Ordered field validation for a submission attempt.

use booking_core::{BookingDraft, CatalogSnapshot};
use chrono::NaiveDate;

use crate::error::SubmitError;

fn rejected(field: &'static str, message: &'static str) -> SubmitError {
    SubmitError::Validation { field, message }
}

/// Check the draft in fixed order; the first failure wins. Never touches
/// the network. `today` is passed in so callers own the clock.
pub(crate) fn validate_draft(
    draft: &BookingDraft,
    catalog: &CatalogSnapshot,
    today: NaiveDate,
) -> Result<(), SubmitError> {
    let Some(destination_id) = draft.destination_id.as_deref() else {
        return Err(rejected("destination", "Please select a destination"));
    };

    let Some(date) = draft.date else {
        return Err(rejected("date", "Please select a date"));
    };
    if date < today {
        return Err(rejected("date", "Please select a date that is not in the past"));
    }

    let Some(tour) = draft.tour.as_deref() else {
        return Err(rejected("tour", "Please select a tour type"));
    };
    // Tour variants are per destination. The membership check is skipped
    // when the catalog does not know the destination (mid-reload); the
    // remote re-validates anyway.
    if let Some(destination) = catalog.find(destination_id) {
        if !destination.offers_tour(tour) {
            return Err(rejected(
                "tour",
                "Please select a tour offered at this destination",
            ));
        }
    }

    if draft.contact.full_name.trim().is_empty() {
        return Err(rejected("contact_name", "Please enter your full name"));
    }
    if draft.contact.email.trim().is_empty() {
        return Err(rejected("contact_email", "Please enter your email address"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_core::Destination;

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(vec![Destination {
            id: "giza".to_string(),
            name: "Pyramids of Giza".to_string(),
            unit_price: 150.0,
            tours: vec!["Guided Tour".to_string()],
            image: "giza.jpg".to_string(),
        }])
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn complete_draft() -> BookingDraft {
        BookingDraft::new()
            .with_destination("giza")
            .with_date(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
            .with_tour("Guided Tour")
            .with_contact_name("Ana")
            .with_contact_email("a@x.com")
    }

    fn failed_field(result: Result<(), SubmitError>) -> &'static str {
        match result.expect_err("expected validation failure") {
            SubmitError::Validation { field, .. } => field,
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert_eq!(validate_draft(&complete_draft(), &catalog(), today()), Ok(()));
    }

    #[test]
    fn first_failure_wins_in_fixed_order() {
        let empty = BookingDraft::new();
        assert_eq!(failed_field(validate_draft(&empty, &catalog(), today())), "destination");

        let with_destination = empty.with_destination("giza");
        assert_eq!(
            failed_field(validate_draft(&with_destination, &catalog(), today())),
            "date"
        );

        let with_date = with_destination.with_date(today());
        assert_eq!(failed_field(validate_draft(&with_date, &catalog(), today())), "tour");

        let with_tour = with_date.with_tour("Guided Tour");
        assert_eq!(
            failed_field(validate_draft(&with_tour, &catalog(), today())),
            "contact_name"
        );

        let with_name = with_tour.with_contact_name("Ana");
        assert_eq!(
            failed_field(validate_draft(&with_name, &catalog(), today())),
            "contact_email"
        );
    }

    #[test]
    fn past_date_is_rejected_but_today_passes() {
        let yesterday = complete_draft().with_date(NaiveDate::from_ymd_opt(2026, 8, 29).unwrap());
        assert_eq!(failed_field(validate_draft(&yesterday, &catalog(), today())), "date");

        let same_day = complete_draft().with_date(today());
        assert_eq!(validate_draft(&same_day, &catalog(), today()), Ok(()));
    }

    #[test]
    fn tour_must_be_offered_by_the_destination() {
        let wrong_tour = complete_draft().with_tour("Night Tour");
        assert_eq!(failed_field(validate_draft(&wrong_tour, &catalog(), today())), "tour");
    }

    #[test]
    fn whitespace_only_contact_fields_are_rejected() {
        let blank_name = complete_draft().with_contact_name("   ");
        assert_eq!(
            failed_field(validate_draft(&blank_name, &catalog(), today())),
            "contact_name"
        );
    }
}
