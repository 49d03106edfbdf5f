//! Destination catalog types, as consumed from the catalog provider.

use serde::{Deserialize, Serialize};

/// A bookable destination supplied by the catalog provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    /// Provider-assigned identifier, referenced by the draft.
    pub id: String,
    pub name: String,
    /// Price per visitor, in the catalog's single currency.
    pub unit_price: f64,
    /// Tour variants offered at this destination.
    pub tours: Vec<String>,
    /// Opaque image reference for presentation layers.
    pub image: String,
}

impl Destination {
    /// Whether `tour` is one of this destination's offered variants.
    pub fn offers_tour(&self, tour: &str) -> bool {
        self.tours.iter().any(|t| t == tour)
    }
}

/// Point-in-time view of the catalog, including its loading flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Destinations in provider order.
    pub destinations: Vec<Destination>,
    /// True while the provider is still fetching; gates rendering upstream.
    pub loading: bool,
}

impl CatalogSnapshot {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self {
            destinations,
            loading: false,
        }
    }

    /// Look up a destination by id.
    pub fn find(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }
}
