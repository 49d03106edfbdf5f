//! Derived total calculation.

use crate::catalog::Destination;

/// Total price for a draft: unit price times visitor count.
///
/// Zero when no destination is selected. Recomputed on every read; there is
/// nothing worth caching in an O(1) multiplication.
pub fn total(destination: Option<&Destination>, visitors: u32) -> f64 {
    match destination {
        Some(destination) => destination.unit_price * f64::from(visitors),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luxor() -> Destination {
        Destination {
            id: "luxor".to_string(),
            name: "Luxor Temple".to_string(),
            unit_price: 85.0,
            tours: vec!["Sunset Tour".to_string()],
            image: "luxor.jpg".to_string(),
        }
    }

    #[test]
    fn no_destination_means_zero() {
        assert_eq!(total(None, 1), 0.0);
        assert_eq!(total(None, 7), 0.0);
    }

    #[test]
    fn total_is_unit_price_times_visitors() {
        let destination = luxor();
        assert_eq!(total(Some(&destination), 1), 85.0);
        assert_eq!(total(Some(&destination), 4), 340.0);
    }
}
