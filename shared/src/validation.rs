//! Validation utilities for the Warehouse Management Platform
//!
//! Numeric-safety rules for quantities, prices, and derived costs. All
//! money and quantity arithmetic uses `rust_decimal::Decimal`; currency
//! values are rounded to 2 decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

// ============================================================================
// Numeric bounds
// ============================================================================

/// Upper bound for quantity and price-per-unit inputs
pub fn max_amount() -> Decimal {
    Decimal::from(999_999_999i64)
}

/// Upper bound for a derived total cost: 999,999,999,999.99
pub fn max_total_cost() -> Decimal {
    Decimal::new(99_999_999_999_999, 2)
}

/// Round a currency value to 2 decimal places, midpoint away from zero
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// ============================================================================
// Purchase field validations
// ============================================================================

/// Validate a purchase quantity: positive and under the input bound
pub fn validate_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    if quantity > max_amount() {
        return Err("Quantity exceeds the maximum allowed value");
    }
    Ok(())
}

/// Validate a price per unit: positive and under the input bound
pub fn validate_price_per_unit(price: Decimal) -> Result<(), &'static str> {
    if price <= Decimal::ZERO {
        return Err("Price per unit must be positive");
    }
    if price > max_amount() {
        return Err("Price per unit exceeds the maximum allowed value");
    }
    Ok(())
}

/// Compute the derived total cost with bound checks on inputs and result
pub fn compute_total_cost(quantity: Decimal, price_per_unit: Decimal) -> Result<Decimal, &'static str> {
    validate_quantity(quantity)?;
    validate_price_per_unit(price_per_unit)?;

    let total = round2(quantity * price_per_unit);
    if total > max_total_cost() {
        return Err("Total cost exceeds the maximum allowed value");
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn total_cost_rounds_to_two_places() {
        // 3.333 * 3 = 9.999 -> 10.00
        assert_eq!(compute_total_cost(dec("3.333"), dec("3")).unwrap(), dec("10.00"));
        // midpoint rounds away from zero
        assert_eq!(round2(dec("1.005")), dec("1.01"));
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(validate_quantity(Decimal::ZERO).is_err());
        assert!(validate_quantity(dec("-1")).is_err());
        assert!(validate_price_per_unit(Decimal::ZERO).is_err());
    }

    #[test]
    fn rejects_inputs_over_bound() {
        assert!(validate_quantity(dec("1000000000")).is_err());
        assert!(validate_quantity(dec("999999999")).is_ok());
        assert!(validate_price_per_unit(dec("1000000000")).is_err());
    }

    #[test]
    fn rejects_total_over_bound() {
        // Both inputs are individually valid but the product overflows
        // the total bound
        let result = compute_total_cost(dec("999999999"), dec("999999999"));
        assert!(result.is_err());
    }

    #[test]
    fn total_at_bound_is_accepted() {
        assert_eq!(max_total_cost(), dec("999999999999.99"));
        assert!(compute_total_cost(dec("999999999"), dec("1000")).is_ok());
    }
}
