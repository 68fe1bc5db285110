//! Purchase record tests
//!
//! Pure-logic coverage of the purchase domain rules: derived total cost
//! and rounding, numeric bounds, the received-quantity fallback, status
//! parsing, and pagination math. Transition behavior is covered in
//! `reconciliation_tests.rs`.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::models::{Purchase, PurchaseStatus};
use shared::types::{PaginatedResponse, Pagination, PaginationMeta};
use shared::validation::{compute_total_cost, max_amount, max_total_cost, round2};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn sample_purchase(quantity: &str, received: Option<&str>) -> Purchase {
    Purchase {
        id: uuid::Uuid::new_v4(),
        material_id: uuid::Uuid::new_v4(),
        supplier: "Acme Trading".to_string(),
        quantity: dec(quantity),
        unit: "kg".to_string(),
        price_per_unit: dec("12.50"),
        total_cost: round2(dec(quantity) * dec("12.50")),
        purchase_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        status: PurchaseStatus::Pending,
        invoice_number: "INV-20240115093000-A1B2C3".to_string(),
        delivery_date: None,
        received_quantity: received.map(dec),
        notes: None,
        is_active: true,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

// ============================================================================
// Unit tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn total_cost_is_quantity_times_price_rounded() {
        assert_eq!(compute_total_cost(dec("10"), dec("12.50")).unwrap(), dec("125.00"));
        // 7 * 1.333 = 9.331 -> 9.33
        assert_eq!(compute_total_cost(dec("7"), dec("1.333")).unwrap(), dec("9.33"));
        // 3 * 0.335 = 1.005, midpoint rounds away from zero
        assert_eq!(compute_total_cost(dec("3"), dec("0.335")).unwrap(), dec("1.01"));
    }

    #[test]
    fn rejects_non_positive_quantity_and_price() {
        assert!(compute_total_cost(Decimal::ZERO, dec("1")).is_err());
        assert!(compute_total_cost(dec("-3"), dec("1")).is_err());
        assert!(compute_total_cost(dec("1"), Decimal::ZERO).is_err());
        assert!(compute_total_cost(dec("1"), dec("-0.01")).is_err());
    }

    #[test]
    fn rejects_inputs_over_bound() {
        let over = max_amount() + Decimal::ONE;
        assert!(compute_total_cost(over, dec("1")).is_err());
        assert!(compute_total_cost(dec("1"), over).is_err());
        // At the bound is fine
        assert!(compute_total_cost(max_amount(), dec("1")).is_ok());
    }

    #[test]
    fn rejects_total_over_bound() {
        // Each input passes its own bound but the product does not
        assert!(compute_total_cost(dec("999999999"), dec("99999")).is_err());
        assert_eq!(max_total_cost(), dec("999999999999.99"));
    }

    #[test]
    fn effective_quantity_falls_back_to_ordered() {
        let ordered_only = sample_purchase("10", None);
        assert_eq!(ordered_only.effective_quantity(), dec("10"));

        let partial = sample_purchase("10", Some("8.5"));
        assert_eq!(partial.effective_quantity(), dec("8.5"));
    }

    #[test]
    fn status_parses_lowercase_only() {
        assert_eq!(PurchaseStatus::from_str("pending"), Some(PurchaseStatus::Pending));
        assert_eq!(PurchaseStatus::from_str("received"), Some(PurchaseStatus::Received));
        assert_eq!(PurchaseStatus::from_str("cancelled"), Some(PurchaseStatus::Cancelled));

        assert_eq!(PurchaseStatus::from_str("Received"), None);
        assert_eq!(PurchaseStatus::from_str("shipped"), None);
        assert_eq!(PurchaseStatus::from_str(""), None);
    }

    #[test]
    fn status_round_trips_through_as_str() {
        for status in [
            PurchaseStatus::Pending,
            PurchaseStatus::Received,
            PurchaseStatus::Cancelled,
        ] {
            assert_eq!(PurchaseStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&PurchaseStatus::Received).unwrap();
        assert_eq!(json, "\"received\"");
        let parsed: PurchaseStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, PurchaseStatus::Cancelled);
    }

    #[test]
    fn purchase_serializes_decimals_as_strings() {
        let purchase = sample_purchase("10", None);
        let value = serde_json::to_value(&purchase).unwrap();
        assert_eq!(value["quantity"], serde_json::json!("10"));
        assert_eq!(value["total_cost"], serde_json::json!("125.00"));
        assert_eq!(value["status"], serde_json::json!("pending"));
    }

    #[test]
    fn paginated_response_shape() {
        let pagination = Pagination { page: 2, limit: 10 };
        let page = PaginatedResponse {
            data: vec![sample_purchase("1", None)],
            pagination: PaginationMeta::new(&pagination, 25),
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["pagination"]["page"], 2);
        assert_eq!(value["pagination"]["total_pages"], 3);
        assert_eq!(value["data"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn pagination_clamps_out_of_range_input() {
        let p = Pagination { page: 0, limit: 1000 };
        let n = p.normalized();
        assert_eq!(n.page, 1);
        assert_eq!(n.limit, 100);

        let meta = PaginationMeta::new(&Pagination { page: 1, limit: 20 }, 0);
        assert_eq!(meta.total_pages, 0);
    }
}

// ============================================================================
// Property-based tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        // 0.0001 to 100000.0000
        (1i64..=1_000_000_000i64).prop_map(|n| Decimal::new(n, 4))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Derived total cost always carries exactly 2 decimal places
        /// and never drifts more than half a cent from the raw product
        #[test]
        fn prop_total_cost_rounding(
            quantity in amount_strategy(),
            price in amount_strategy()
        ) {
            let total = compute_total_cost(quantity, price).unwrap();
            prop_assert!(total.scale() <= 2);

            let raw = quantity * price;
            let drift = (total - raw).abs();
            prop_assert!(drift <= dec("0.005"));
        }

        /// Total cost is monotonic in quantity at a fixed price
        #[test]
        fn prop_total_cost_monotonic(
            smaller in amount_strategy(),
            extra in amount_strategy(),
            price in amount_strategy()
        ) {
            let larger = smaller + extra;
            let low = compute_total_cost(smaller, price).unwrap();
            let high = compute_total_cost(larger, price).unwrap();
            prop_assert!(high >= low);
        }

        /// Effective quantity is the received amount when set, the
        /// ordered amount otherwise
        #[test]
        fn prop_effective_quantity(
            ordered in amount_strategy(),
            received in proptest::option::of(amount_strategy())
        ) {
            let purchase = Purchase {
                quantity: ordered,
                received_quantity: received,
                ..sample_purchase("1", None)
            };
            prop_assert_eq!(purchase.effective_quantity(), received.unwrap_or(ordered));
        }

        /// Offset math never overflows or drifts, up to page = u32::MAX
        #[test]
        fn prop_pagination_offset_in_range(page in any::<u32>(), limit in any::<u32>()) {
            let p = Pagination { page, limit };
            let n = p.normalized();
            prop_assert!(n.page >= 1);
            prop_assert!((1..=100).contains(&n.limit));
            prop_assert_eq!(p.offset(), (n.page as u64 - 1) * n.limit as u64);
        }

        /// total_pages * limit always covers total_items
        #[test]
        fn prop_pagination_meta_covers_items(total in 0u64..1_000_000, limit in 1u32..=100) {
            let meta = PaginationMeta::new(&Pagination { page: 1, limit }, total);
            prop_assert!(meta.total_pages as u64 * meta.limit as u64 >= total);
            if total > 0 {
                // Never a fully empty trailing page
                prop_assert!((meta.total_pages as u64 - 1) * (meta.limit as u64) < total);
            }
        }
    }
}
