//! Pure reconciliation planning for purchase status transitions
//!
//! The transition table from the reconciliation engine, expressed as a
//! pure function so it can be tested without a database. The backend
//! applies the returned plan inside a single transaction spanning the
//! purchase update, the ledger write/reversal, and the stock delta.

use rust_decimal::Decimal;

use crate::models::PurchaseStatus;

/// The ledger/stock effect a status transition requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerAction {
    /// Update the status field only; no ledger or stock effect
    None,
    /// Create an IN movement and increment the material's stock
    Apply,
    /// Deactivate the active movement and decrement the material's
    /// stock. Must abort if the decrement would drive stock negative.
    Reverse,
}

/// Plan the ledger effect of a `(old, new)` status transition
///
/// `has_active_movement` is whether an active ledger entry currently
/// exists for the purchase. Entering `Received` applies stock only when
/// no entry is active; leaving `Received` reverses only when one is.
/// Every other pair, including same-status no-ops, touches the status
/// field alone.
pub fn plan_transition(
    old: PurchaseStatus,
    new: PurchaseStatus,
    has_active_movement: bool,
) -> LedgerAction {
    match (old, new) {
        (PurchaseStatus::Received, PurchaseStatus::Received) => LedgerAction::None,
        (_, PurchaseStatus::Received) if !has_active_movement => LedgerAction::Apply,
        (_, PurchaseStatus::Received) => LedgerAction::None,
        (PurchaseStatus::Received, _) if has_active_movement => LedgerAction::Reverse,
        _ => LedgerAction::None,
    }
}

/// Signed stock delta a ledger action produces for a movement of
/// `quantity`
pub fn stock_delta(action: LedgerAction, quantity: Decimal) -> Decimal {
    match action {
        LedgerAction::None => Decimal::ZERO,
        LedgerAction::Apply => quantity,
        LedgerAction::Reverse => -quantity,
    }
}

/// Whether a reversal of `quantity` can be applied against the current
/// stock level without going negative
pub fn reversal_allowed(qty_on_hand: Decimal, quantity: Decimal) -> bool {
    qty_on_hand - quantity >= Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use PurchaseStatus::{Cancelled, Pending, Received};

    #[test]
    fn entering_received_applies_when_no_active_movement() {
        assert_eq!(plan_transition(Pending, Received, false), LedgerAction::Apply);
        assert_eq!(plan_transition(Cancelled, Received, false), LedgerAction::Apply);
    }

    #[test]
    fn entering_received_is_noop_when_movement_already_active() {
        assert_eq!(plan_transition(Pending, Received, true), LedgerAction::None);
        assert_eq!(plan_transition(Cancelled, Received, true), LedgerAction::None);
    }

    #[test]
    fn leaving_received_reverses_active_movement() {
        assert_eq!(plan_transition(Received, Pending, true), LedgerAction::Reverse);
        assert_eq!(plan_transition(Received, Cancelled, true), LedgerAction::Reverse);
    }

    #[test]
    fn leaving_received_is_noop_without_active_movement() {
        assert_eq!(plan_transition(Received, Pending, false), LedgerAction::None);
        assert_eq!(plan_transition(Received, Cancelled, false), LedgerAction::None);
    }

    #[test]
    fn received_to_received_never_touches_ledger() {
        assert_eq!(plan_transition(Received, Received, true), LedgerAction::None);
        assert_eq!(plan_transition(Received, Received, false), LedgerAction::None);
    }

    #[test]
    fn transitions_between_pending_and_cancelled_are_status_only() {
        for has_movement in [false, true] {
            assert_eq!(plan_transition(Pending, Cancelled, has_movement), LedgerAction::None);
            assert_eq!(plan_transition(Cancelled, Pending, has_movement), LedgerAction::None);
            assert_eq!(plan_transition(Pending, Pending, has_movement), LedgerAction::None);
            assert_eq!(plan_transition(Cancelled, Cancelled, has_movement), LedgerAction::None);
        }
    }

    #[test]
    fn stock_delta_signs() {
        let ten = Decimal::from(10);
        assert_eq!(stock_delta(LedgerAction::Apply, ten), ten);
        assert_eq!(stock_delta(LedgerAction::Reverse, ten), -ten);
        assert_eq!(stock_delta(LedgerAction::None, ten), Decimal::ZERO);
    }

    #[test]
    fn reversal_guard() {
        let five = Decimal::from(5);
        let ten = Decimal::from(10);
        assert!(reversal_allowed(ten, five));
        assert!(reversal_allowed(ten, ten));
        assert!(!reversal_allowed(five, ten));
    }
}
