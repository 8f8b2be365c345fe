//! Cross-sell suggestion business logic.
//!
//! For each policy-holding customer, the held product types imply a set
//! of complementary products worth offering: motor cover pairs with
//! liability and personal accident, home cover with the mandatory quake
//! product, health with life. Customers already holding everything their
//! portfolio implies are skipped.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::customer;
use crate::entities::{customer as customer_entity, policy};

/// Held product type mapped to the complementary products it suggests
pub const COMPLEMENTS: [(&str, &[&str]); 7] = [
    ("Kasko", &["Trafik", "Ferdi Kaza"]),
    ("Trafik", &["Kasko", "İMM"]),
    ("Konut", &["Dask", "Ferdi Kaza"]),
    ("Dask", &["Konut"]),
    ("İşyeri", &["Dask"]),
    ("Sağlık", &["Hayat", "Ferdi Kaza"]),
    ("TSS", &["Hayat", "Ferdi Kaza"]),
];

/// One cross-sell opportunity for a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The customer to approach
    pub customer_id: i64,
    /// Customer display name
    pub customer_name: String,
    /// Product types the customer already holds, alphabetical
    pub held: Vec<String>,
    /// Complementary product types not yet held, alphabetical
    pub suggested: Vec<String>,
}

/// Derives cross-sell suggestions from the live policy collection.
///
/// Customers come back in name order; customers whose implied complement
/// set is already fully held produce no entry.
#[must_use]
pub fn suggestions(
    policies: &[policy::Model],
    customers: &[customer_entity::Model],
) -> Vec<Suggestion> {
    let mut result = Vec::new();

    for c in customers {
        let held: BTreeSet<&str> = policies
            .iter()
            .filter(|p| p.customer_id == c.id)
            .map(|p| p.product_type.as_str())
            .collect();
        if held.is_empty() {
            continue;
        }

        let suggested: BTreeSet<&str> = held
            .iter()
            .flat_map(|t| {
                COMPLEMENTS
                    .iter()
                    .find(|(name, _)| name == t)
                    .map_or(&[][..], |(_, complements)| *complements)
            })
            .copied()
            .filter(|t| !held.contains(t))
            .collect();
        if suggested.is_empty() {
            continue;
        }

        result.push(Suggestion {
            customer_id: c.id,
            customer_name: customer::display_name(customers, c.id),
            held: held.into_iter().map(String::from).collect(),
            suggested: suggested.into_iter().map(String::from).collect(),
        });
    }

    result.sort_by(|a, b| a.customer_name.cmp(&b.customer_name));
    result
}
