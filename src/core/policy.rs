//! Policy entry and listing business logic.
//!
//! The entry flow mirrors the back-office form: validate the fields,
//! look the customer up by national id (creating the row when new),
//! default the end date to one year of cover, compute the commission from
//! the cached rate table, and insert the policy. Policies are insert-only
//! in this surface.

use chrono::{Months, NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

use crate::core::{commission::RateCache, customer};
use crate::entities::{Policy, policy};
use crate::errors::{Error, Result};

/// Insurance product categories offered on the entry form
pub const PRODUCT_TYPES: [&str; 15] = [
    "Kasko",
    "Trafik",
    "YeşilKart",
    "İMM",
    "Konut",
    "İşyeri",
    "Dask",
    "TSS",
    "ÖSS",
    "Hayat",
    "YTS",
    "FFL",
    "CMR",
    "Mesleki Sorumluluk",
    "Nakliyat",
];

/// Insurer companies offered on the entry form
pub const COMPANIES: [&str; 13] = [
    "Aksigorta",
    "Allianz Sigorta",
    "Anadolu Sigorta",
    "AXA Sigorta",
    "Corpus Sigorta",
    "HDI Sigorta",
    "Mapfre Sigorta",
    "Neova Sigorta",
    "Quick Sigorta",
    "Ray Sigorta",
    "Türk Nippon Sigorta",
    "Türkiye Sigorta",
    "Unico Sigorta",
];

/// Accepted payment methods; the first is the form default
pub const PAYMENT_METHODS: [&str; 4] = ["Nakit", "Kredi Kartı", "Havale", "Çek"];

/// Renewal workflow state assigned to every newly entered policy
pub const RENEWAL_STATUS_IN_PROGRESS: &str = "Süreç devam ediyor";

/// Everything the entry form submits for one new policy
#[derive(Debug, Clone)]
pub struct NewPolicy {
    /// Customer full name
    pub full_name: String,
    /// Customer national id; must be exactly 11 digits
    pub national_id: String,
    /// Customer phone, optional
    pub phone: Option<String>,
    /// Customer e-mail, optional
    pub email: Option<String>,
    /// Insurer-issued policy number
    pub policy_number: String,
    /// Product category driving the commission rate
    pub product_type: String,
    /// Insurer company
    pub company: String,
    /// Vehicle plate, for motor products
    pub plate: Option<String>,
    /// Document serial number
    pub document_serial: Option<String>,
    /// First day of cover
    pub start_date: NaiveDate,
    /// Last day of cover; defaults to one year after the start
    pub end_date: Option<NaiveDate>,
    /// Premium amount charged for the term
    pub premium: f64,
    /// Payment method; defaults to `"Nakit"`
    pub payment_method: Option<String>,
    /// Assigned sales agent, optional
    pub agent_id: Option<i64>,
    /// Free-form notes
    pub description: Option<String>,
}

/// One year of cover from the given start date.
///
/// Month arithmetic clamps to the last valid day, so a policy starting on
/// Feb 29 ends on Feb 28 of the following year.
#[must_use]
pub fn default_end_date(start: NaiveDate) -> NaiveDate {
    start.checked_add_months(Months::new(12)).unwrap_or(start)
}

fn validate(input: &NewPolicy) -> Result<()> {
    let required = [
        (&input.full_name, "Müşteri adı soyadı zorunludur"),
        (&input.national_id, "TC No zorunludur"),
        (&input.policy_number, "Poliçe No zorunludur"),
        (&input.product_type, "Sigorta türü zorunludur"),
        (&input.company, "Sigorta şirketi zorunludur"),
    ];
    for (value, message) in required {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                message: (*message).to_string(),
            });
        }
    }

    if input.national_id.len() != 11 || !input.national_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Validation {
            message: "TC No 11 haneli olmalıdır".to_string(),
        });
    }

    if input.premium < 0.0 {
        return Err(Error::InvalidAmount {
            amount: input.premium,
        });
    }

    Ok(())
}

/// Runs the full policy entry flow and returns the inserted policy.
///
/// The owning customer is resolved by national id first - an existing row
/// is reused, otherwise one is created - so a policy always references an
/// existing customer. The commission is computed through the shared rate
/// cache at entry time and stored on the row; later rate changes never
/// touch existing policies.
pub async fn create_policy(
    db: &DatabaseConnection,
    rates: &RateCache,
    input: NewPolicy,
) -> Result<policy::Model> {
    validate(&input)?;

    let customer_id = match customer::get_customer_by_national_id(db, &input.national_id).await? {
        Some(existing) => existing.id,
        None => {
            customer::create_customer(
                db,
                input.full_name.trim().to_string(),
                Some(input.national_id.clone()),
                input.phone.clone(),
                input.email.clone(),
            )
            .await?
            .id
        }
    };

    let end_date = input.end_date.unwrap_or_else(|| default_end_date(input.start_date));
    let commission = rates
        .commission_for(db, input.premium, &input.product_type)
        .await;

    let row = policy::ActiveModel {
        customer_id: Set(customer_id),
        agent_id: Set(input.agent_id),
        policy_number: Set(input.policy_number.trim().to_string()),
        product_type: Set(input.product_type),
        company: Set(input.company),
        plate: Set(input.plate),
        document_serial: Set(input.document_serial),
        start_date: Set(input.start_date),
        end_date: Set(end_date),
        premium: Set(input.premium),
        commission: Set(commission),
        payment_method: Set(input
            .payment_method
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| PAYMENT_METHODS[0].to_string())),
        description: Set(input.description),
        renewal_status: Set(RENEWAL_STATUS_IN_PROGRESS.to_string()),
        amount_paid: Set(None),
        payment_date: Set(None),
        registered_at: Set(Utc::now()),
        ..Default::default()
    };

    row.insert(db).await.map_err(Into::into)
}

/// Retrieves all policies, newest registration first.
pub async fn get_all_policies(db: &DatabaseConnection) -> Result<Vec<policy::Model>> {
    Policy::find()
        .order_by_desc(policy::Column::RegisteredAt)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{new_test_policy_input, setup_test_db};
    use crate::core::customer::get_all_customers;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_default_end_date_adds_one_year() {
        assert_eq!(default_end_date(day(2026, 3, 10)), day(2027, 3, 10));
        // Leap day clamps to the last valid day
        assert_eq!(default_end_date(day(2024, 2, 29)), day(2025, 2, 28));
    }

    #[tokio::test]
    async fn test_create_policy_creates_customer_and_commission() -> Result<()> {
        let db = setup_test_db().await?;
        let rates = RateCache::new();

        let input = new_test_policy_input("Ahmet Yılmaz", "12345678901", "P-1001");
        let created = create_policy(&db, &rates, input).await?;

        // Kasko at the default 15% on a 10 000 premium
        assert_eq!(created.premium, 10000.0);
        assert_eq!(created.commission, 1500.00);
        assert_eq!(created.renewal_status, RENEWAL_STATUS_IN_PROGRESS);
        assert_eq!(created.payment_method, "Nakit");
        assert_eq!(created.end_date, default_end_date(created.start_date));

        // The customer row was created as part of the flow
        let customers = get_all_customers(&db).await?;
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].id, created.customer_id);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_policy_reuses_customer_by_national_id() -> Result<()> {
        let db = setup_test_db().await?;
        let rates = RateCache::new();

        let first = create_policy(
            &db,
            &rates,
            new_test_policy_input("Ahmet Yılmaz", "12345678901", "P-1001"),
        )
        .await?;
        let second = create_policy(
            &db,
            &rates,
            new_test_policy_input("Ahmet Yılmaz", "12345678901", "P-1002"),
        )
        .await?;

        assert_eq!(first.customer_id, second.customer_id);
        assert_eq!(get_all_customers(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_policy_rejects_short_national_id() -> Result<()> {
        let db = setup_test_db().await?;
        let rates = RateCache::new();

        let input = new_test_policy_input("Ahmet Yılmaz", "12345", "P-1001");
        let result = create_policy(&db, &rates, input).await;

        assert!(matches!(result, Err(Error::Validation { .. })));
        // Validation failures block everything, including the customer insert
        assert!(get_all_customers(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_policy_rejects_non_digit_national_id() -> Result<()> {
        let db = setup_test_db().await?;
        let rates = RateCache::new();

        let input = new_test_policy_input("Ahmet Yılmaz", "1234567890a", "P-1001");
        assert!(matches!(
            create_policy(&db, &rates, input).await,
            Err(Error::Validation { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_policy_rejects_missing_required_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let rates = RateCache::new();

        let mut input = new_test_policy_input("Ahmet Yılmaz", "12345678901", "P-1001");
        input.company = "   ".to_string();
        assert!(matches!(
            create_policy(&db, &rates, input).await,
            Err(Error::Validation { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_policy_rejects_negative_premium() -> Result<()> {
        let db = setup_test_db().await?;
        let rates = RateCache::new();

        let mut input = new_test_policy_input("Ahmet Yılmaz", "12345678901", "P-1001");
        input.premium = -1.0;
        assert!(matches!(
            create_policy(&db, &rates, input).await,
            Err(Error::InvalidAmount { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_explicit_end_date_is_kept() -> Result<()> {
        let db = setup_test_db().await?;
        let rates = RateCache::new();

        let mut input = new_test_policy_input("Ahmet Yılmaz", "12345678901", "P-1001");
        input.start_date = day(2026, 1, 1);
        input.end_date = Some(day(2026, 6, 30));
        let created = create_policy(&db, &rates, input).await?;

        assert_eq!(created.end_date, day(2026, 6, 30));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_policies_newest_first() -> Result<()> {
        let db = setup_test_db().await?;
        let rates = RateCache::new();

        create_policy(
            &db,
            &rates,
            new_test_policy_input("Ahmet Yılmaz", "12345678901", "P-OLD"),
        )
        .await?;
        create_policy(
            &db,
            &rates,
            new_test_policy_input("Ahmet Yılmaz", "12345678901", "P-NEW"),
        )
        .await?;

        let policies = get_all_policies(&db).await?;
        assert_eq!(policies.len(), 2);
        assert!(policies[0].registered_at >= policies[1].registered_at);
        Ok(())
    }
}
