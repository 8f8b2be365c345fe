//! Commission calculation business logic.
//!
//! The agency's share of a premium is `premium × rate(product_type)`,
//! rounded to two decimal places at entry time. Rates live in the
//! `commission_rates` table as percentages and are fetched once per
//! process by [`RateCache`]; when the fetch fails or a product type is
//! missing, the built-in default table takes over so policy entry never
//! blocks on the rate lookup.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, EntityTrait};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::entities::CommissionRate;
use crate::errors::Result;

/// Fallback commission rates by product type, as fractions.
///
/// Used whenever the remote rate table cannot be read or does not list the
/// requested type.
pub const DEFAULT_RATES: [(&str, f64); 11] = [
    ("Kasko", 0.15),
    ("Trafik", 0.10),
    ("İMM", 0.12),
    ("Konut", 0.15),
    ("İşyeri", 0.15),
    ("Dask", 0.10),
    ("Sağlık", 0.18),
    ("TSS", 0.18),
    ("Hayat", 0.22),
    ("Seyahat", 0.17),
    ("Ferdi Kaza", 0.16),
];

/// Rate applied to product types absent from both the remote table and
/// [`DEFAULT_RATES`].
pub const FALLBACK_RATE: f64 = 0.15;

/// Rounds a currency amount to two decimal places.
#[must_use]
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Computes the commission amount for a premium at the given rate,
/// rounded to two decimal places.
#[must_use]
pub fn commission(premium: f64, rate: f64) -> f64 {
    round_currency(premium * rate)
}

/// Looks up the fallback rate for a product type.
#[must_use]
pub fn default_rate(product_type: &str) -> f64 {
    DEFAULT_RATES
        .iter()
        .find(|(name, _)| *name == product_type)
        .map_or(FALLBACK_RATE, |(_, rate)| *rate)
}

/// In-memory commission-rate table, fetched once per process.
///
/// Construct one instance at startup and share it through the application
/// state; the first successful [`rate_for`](Self::rate_for) call populates
/// the table for the process lifetime. A failed fetch leaves the cache
/// empty so the next call retries, while the current call falls back to
/// the default table.
#[derive(Debug, Default)]
pub struct RateCache {
    rates: RwLock<Option<HashMap<String, f64>>>,
}

impl RateCache {
    /// Creates an empty cache; the first lookup triggers the fetch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the commission rate for a product type as a fraction.
    ///
    /// Fetches and caches the full rate table on first use. Any product
    /// type the fetched table does not list - including every type when
    /// the fetch itself failed - resolves through [`default_rate`].
    pub async fn rate_for(&self, db: &DatabaseConnection, product_type: &str) -> f64 {
        if let Some(rates) = self.rates.read().await.as_ref() {
            return rates
                .get(product_type)
                .copied()
                .unwrap_or_else(|| default_rate(product_type));
        }

        match self.fetch_rates(db).await {
            Ok(rates) => {
                let rate = rates
                    .get(product_type)
                    .copied()
                    .unwrap_or_else(|| default_rate(product_type));
                *self.rates.write().await = Some(rates);
                rate
            }
            Err(e) => {
                warn!("Failed to load commission rates, using defaults: {e}");
                default_rate(product_type)
            }
        }
    }

    /// Convenience wrapper: resolves the rate and computes the commission
    /// for a premium in one call.
    pub async fn commission_for(
        &self,
        db: &DatabaseConnection,
        premium: f64,
        product_type: &str,
    ) -> f64 {
        let rate = self.rate_for(db, product_type).await;
        commission(premium, rate)
    }

    async fn fetch_rates(&self, db: &DatabaseConnection) -> Result<HashMap<String, f64>> {
        let rows = CommissionRate::find().all(db).await?;
        info!("Loaded {} commission rates from the store", rows.len());

        // Stored as percentages; held as fractions
        Ok(rows
            .into_iter()
            .map(|row| (row.product_type, row.rate_percent / 100.0))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::commission_rate;
    use crate::test_utils::setup_test_db;
    use sea_orm::{ActiveModelTrait, Set};

    #[test]
    fn test_commission_rounds_to_two_decimals() {
        assert_eq!(commission(10000.0, 0.15), 1500.00);
        assert_eq!(commission(333.33, 0.10), 33.33);
        assert_eq!(commission(0.0, 0.22), 0.0);
    }

    #[test]
    fn test_default_rate_known_types() {
        assert_eq!(default_rate("Kasko"), 0.15);
        assert_eq!(default_rate("Trafik"), 0.10);
        assert_eq!(default_rate("Hayat"), 0.22);
        assert_eq!(default_rate("Ferdi Kaza"), 0.16);
    }

    #[test]
    fn test_default_rate_unknown_type_falls_back() {
        assert_eq!(default_rate("Nakliyat"), FALLBACK_RATE);
        assert_eq!(default_rate(""), FALLBACK_RATE);
    }

    #[tokio::test]
    async fn test_rate_for_reads_store_as_percent() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        commission_rate::ActiveModel {
            product_type: Set("Kasko".to_string()),
            rate_percent: Set(20.0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let cache = RateCache::new();
        // Store value (20%) wins over the default table (15%)
        assert_eq!(cache.rate_for(&db, "Kasko").await, 0.20);
        Ok(())
    }

    #[tokio::test]
    async fn test_rate_for_missing_type_uses_default_table() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        commission_rate::ActiveModel {
            product_type: Set("Kasko".to_string()),
            rate_percent: Set(20.0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let cache = RateCache::new();
        assert_eq!(cache.rate_for(&db, "Hayat").await, 0.22);
        assert_eq!(cache.rate_for(&db, "Bilinmeyen Tür").await, FALLBACK_RATE);
        Ok(())
    }

    #[tokio::test]
    async fn test_rate_table_is_fetched_once() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        commission_rate::ActiveModel {
            product_type: Set("Trafik".to_string()),
            rate_percent: Set(10.0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let cache = RateCache::new();
        assert_eq!(cache.rate_for(&db, "Trafik").await, 0.10);

        // A later change to the store is not observed within the process
        commission_rate::ActiveModel {
            product_type: Set("Trafik".to_string()),
            rate_percent: Set(99.0),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        assert_eq!(cache.rate_for(&db, "Trafik").await, 0.10);
        Ok(())
    }

    #[tokio::test]
    async fn test_commission_for_scenario_kasko() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;

        // Empty rate table: the fetch succeeds but yields nothing, so the
        // default table supplies Kasko's 15%
        let cache = RateCache::new();
        assert_eq!(cache.commission_for(&db, 10000.0, "Kasko").await, 1500.00);
        Ok(())
    }
}
