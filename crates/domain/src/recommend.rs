//! Recommendation selector for the "AI picks" screen.
//!
//! This is a placeholder, not a personalization engine: the vehicle and
//! purchase-history text are accepted but play no part in the selection. The
//! result is a uniform random sample of the purchasable catalog.

use catalog::{Catalog, Offering};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Number of picks returned when the catalog is large enough.
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

/// Errors returned by [`Recommender`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationError {
    /// The vehicle description is required.
    #[error("Vehicle description is required")]
    VehicleRequired,
}

/// Samples products and services to show as recommendations.
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    catalog: Catalog,
    count: usize,
}

impl Recommender {
    /// Creates a selector over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            count: DEFAULT_RECOMMENDATION_COUNT,
        }
    }

    /// Overrides how many picks are returned.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Picks recommendations using the thread-local random source.
    ///
    /// Two calls with the same input usually return different picks.
    pub fn recommend(
        &self,
        vehicle: &str,
        past_purchases: &str,
    ) -> Result<Vec<Offering>, RecommendationError> {
        self.recommend_with(&mut rand::thread_rng(), vehicle, past_purchases)
    }

    /// Picks recommendations using the given random source.
    ///
    /// Returns `min(count, offerings)` distinct offerings: the combined
    /// product and service list is shuffled and the first picks are kept.
    /// An empty `vehicle` is rejected; `past_purchases` may be empty. Neither
    /// string is trimmed.
    #[tracing::instrument(skip(self, rng))]
    pub fn recommend_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        vehicle: &str,
        past_purchases: &str,
    ) -> Result<Vec<Offering>, RecommendationError> {
        if vehicle.is_empty() {
            return Err(RecommendationError::VehicleRequired);
        }

        let mut picks: Vec<Offering> = self.catalog.offerings().collect();
        picks.shuffle(rng);
        picks.truncate(self.count);

        tracing::debug!(picks = picks.len(), "recommendations selected");
        Ok(picks)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use catalog::{Product, Service, Store};
    use common::Price;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn ids(picks: &[Offering]) -> Vec<&'static str> {
        picks.iter().map(|o| o.id()).collect()
    }

    #[test]
    fn test_returns_five_distinct_catalog_items() {
        let catalog = Catalog::builtin();
        let known: HashSet<_> = catalog.offerings().map(|o| (o.item_type(), o.id())).collect();

        let picks = Recommender::new(catalog)
            .recommend("Renault Clio 2018", "")
            .unwrap();

        assert_eq!(picks.len(), 5);
        let unique: HashSet<_> = picks.iter().map(|o| (o.item_type(), o.id())).collect();
        assert_eq!(unique.len(), 5);
        assert!(unique.is_subset(&known));
    }

    #[test]
    fn test_empty_vehicle_is_rejected() {
        let recommender = Recommender::new(Catalog::builtin());
        assert_eq!(
            recommender.recommend("", "brake pads last year"),
            Err(RecommendationError::VehicleRequired)
        );
    }

    #[test]
    fn test_whitespace_vehicle_is_not_trimmed() {
        let picks = Recommender::new(Catalog::builtin())
            .recommend(" ", "")
            .unwrap();
        assert_eq!(picks.len(), 5);
    }

    #[test]
    fn test_same_seed_gives_same_picks() {
        let recommender = Recommender::new(Catalog::builtin());
        let a = recommender
            .recommend_with(&mut StdRng::seed_from_u64(2018), "Renault Clio 2018", "")
            .unwrap();
        let b = recommender
            .recommend_with(&mut StdRng::seed_from_u64(2018), "Renault Clio 2018", "")
            .unwrap();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_inputs_do_not_influence_selection() {
        let recommender = Recommender::new(Catalog::builtin());
        let a = recommender
            .recommend_with(&mut StdRng::seed_from_u64(9), "Peugeot 208", "")
            .unwrap();
        let b = recommender
            .recommend_with(&mut StdRng::seed_from_u64(9), "Toyota Hilux", "tires, oil")
            .unwrap();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_every_offering_can_be_picked() {
        let catalog = Catalog::builtin();
        let recommender = Recommender::new(catalog);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            for pick in recommender.recommend_with(&mut rng, "Clio", "").unwrap() {
                seen.insert((pick.item_type(), pick.id()));
            }
        }
        assert_eq!(seen.len(), catalog.offering_count());
    }

    static TWO_PRODUCTS: [Product; 2] = [
        Product {
            id: "a",
            name: "Fuse Kit",
            category: "Electronic Systems",
            description: "",
            price: Price::new(300),
            rating: 4.1,
            store: "ElectroCar",
            store_id: "s6",
            location: "Sétif",
            image: "",
        },
        Product {
            id: "b",
            name: "Coolant",
            category: "Oil & Fluids",
            description: "",
            price: Price::new(700),
            rating: 4.3,
            store: "LubriTech",
            store_id: "s2",
            location: "Oran",
            image: "",
        },
    ];
    static NO_SERVICES: [Service; 0] = [];
    static NO_STORES: [Store; 0] = [];

    #[test]
    fn test_small_catalog_returns_everything() {
        let catalog = Catalog::new(&TWO_PRODUCTS, &NO_SERVICES, &NO_STORES);
        let mut picks = ids(&Recommender::new(catalog).recommend("Clio", "").unwrap());
        picks.sort();
        assert_eq!(picks, ["a", "b"]);
    }

    #[test]
    fn test_count_can_be_overridden() {
        let picks = Recommender::new(Catalog::builtin())
            .with_count(3)
            .recommend("Clio", "")
            .unwrap();
        assert_eq!(picks.len(), 3);
    }
}
