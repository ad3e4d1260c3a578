//! # Pricing Module
//!
//! Turns a validated rental request into an itemized invoice.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. base_cost  = units × initial_days × DAILY_RATE (35.000)             │
//! │  2. raw_extra  = units × extra_days   × EXTRA_DAILY_RATE (3.500)        │
//! │  3. extra_cost = raw_extra - 2%                                         │
//! │  4. subtotal   = base_cost + extra_cost                                 │
//! │  5. OutOfCity  → zone_surcharge = 5% of subtotal                        │
//! │     OnPremises → zone_discount  = 5% of subtotal                        │
//! │     InCity / Unset → no adjustment                                      │
//! │  6. total      = subtotal + zone_surcharge - zone_discount              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All steps run in integer centavos and are exact, so the totals equal the
//! web form's floating-point results for every realistic input.
//!
//! The engine does not re-validate. Given an invalid request (zone `Unset`,
//! one unit, negative extra days) it still returns an invoice; the numbers
//! are just meaningless. Integer counts make NaN unrepresentable, and
//! overflow saturates instead of panicking.

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Invoice, RentalRequest, ServiceZone};
use crate::validation::validate;
use crate::{DAILY_RATE, EXTRA_DAILY_RATE, EXTRA_DAY_DISCOUNT, ZONE_ADJUSTMENT};

/// Computes the invoice for a request.
///
/// Callers must only trust the result if [`validate`] returned no errors for
/// the same request; see [`quote`] for the combined flow.
///
/// ## Example
/// ```rust
/// use alquipc_core::{compute, RentalRequest, ServiceZone};
///
/// let request = RentalRequest {
///     name: "Ana".to_string(),
///     client_id: "1".to_string(),
///     phone: "3001234567".to_string(),
///     email: "ana@correo.co".to_string(),
///     service_zone: ServiceZone::OnPremises,
///     equipment_count: 2,
///     initial_days: 1,
///     extra_days: 1,
/// };
///
/// let invoice = compute(&request);
/// assert_eq!(invoice.zone_discount.pesos(), 3_843);
/// assert_eq!(invoice.total.pesos(), 73_017);
/// ```
pub fn compute(request: &RentalRequest) -> Invoice {
    let units = request.equipment_count;

    let base_cost = DAILY_RATE
        .multiply_quantity(units)
        .multiply_quantity(request.initial_days);

    let raw_extra = EXTRA_DAILY_RATE
        .multiply_quantity(units)
        .multiply_quantity(request.extra_days);
    let extra_cost = raw_extra.apply_percentage_discount(EXTRA_DAY_DISCOUNT);

    let subtotal = base_cost + extra_cost;

    let (zone_surcharge, zone_discount) = match request.service_zone {
        ServiceZone::OutOfCity => (subtotal.percentage(ZONE_ADJUSTMENT), Money::zero()),
        ServiceZone::OnPremises => (Money::zero(), subtotal.percentage(ZONE_ADJUSTMENT)),
        ServiceZone::InCity | ServiceZone::Unset => (Money::zero(), Money::zero()),
    };

    Invoice {
        base_cost,
        extra_cost,
        zone_surcharge,
        zone_discount,
        total: subtotal + zone_surcharge - zone_discount,
    }
}

/// Validates the request and, if every field passes, computes its invoice.
///
/// ## Flow
/// ```text
/// quote(request)
///      │
///      ├── validate() not empty ──► Err(CoreError::Validation(result))
///      │
///      └── validate() empty ──────► Ok(compute(request))
/// ```
pub fn quote(request: &RentalRequest) -> CoreResult<Invoice> {
    validate(request).into_result()?;
    Ok(compute(request))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::RentalField;

    fn request(zone: ServiceZone, units: i64, initial: i64, extra: i64) -> RentalRequest {
        RentalRequest {
            name: "Carlos Gómez".to_string(),
            client_id: "79123456".to_string(),
            phone: "3109876543".to_string(),
            email: "carlos@empresa.com.co".to_string(),
            service_zone: zone,
            equipment_count: units,
            initial_days: initial,
            extra_days: extra,
        }
    }

    #[test]
    fn test_scenario_minimum_rental_in_city() {
        let invoice = compute(&request(ServiceZone::InCity, 2, 1, 0));
        assert_eq!(invoice.base_cost, Money::from_pesos(70_000));
        assert_eq!(invoice.extra_cost, Money::zero());
        assert_eq!(invoice.zone_surcharge, Money::zero());
        assert_eq!(invoice.zone_discount, Money::zero());
        assert_eq!(invoice.total, Money::from_pesos(70_000));
    }

    #[test]
    fn test_scenario_extra_day_in_city() {
        let invoice = compute(&request(ServiceZone::InCity, 2, 1, 1));
        assert_eq!(invoice.base_cost, Money::from_pesos(70_000));
        // 7.000 raw, less 2%
        assert_eq!(invoice.extra_cost, Money::from_pesos(6_860));
        assert_eq!(invoice.total, Money::from_pesos(76_860));
        assert!(!invoice.has_zone_adjustment());
    }

    #[test]
    fn test_scenario_extra_day_out_of_city() {
        let invoice = compute(&request(ServiceZone::OutOfCity, 2, 1, 1));
        assert_eq!(invoice.subtotal(), Money::from_pesos(76_860));
        assert_eq!(invoice.zone_surcharge, Money::from_pesos(3_843));
        assert_eq!(invoice.zone_discount, Money::zero());
        assert_eq!(invoice.total, Money::from_pesos(80_703));
    }

    #[test]
    fn test_scenario_extra_day_on_premises() {
        let invoice = compute(&request(ServiceZone::OnPremises, 2, 1, 1));
        assert_eq!(invoice.subtotal(), Money::from_pesos(76_860));
        assert_eq!(invoice.zone_discount, Money::from_pesos(3_843));
        assert_eq!(invoice.zone_surcharge, Money::zero());
        assert_eq!(invoice.total, Money::from_pesos(73_017));
    }

    /// 3 units × 1 extra day: 10.290 discounted, 5% of the subtotal lands on
    /// half a peso, which the centavo representation keeps exactly.
    #[test]
    fn test_half_peso_adjustment_is_exact() {
        let invoice = compute(&request(ServiceZone::OutOfCity, 3, 1, 1));
        assert_eq!(invoice.base_cost, Money::from_pesos(105_000));
        assert_eq!(invoice.extra_cost, Money::from_pesos(10_290));
        assert_eq!(invoice.zone_surcharge, Money::from_centavos(576_450));
        assert_eq!(invoice.total, Money::from_centavos(12_105_450));
        assert_eq!(invoice.total.to_string(), "$121.054,5");
    }

    #[test]
    fn test_compute_is_idempotent() {
        let r = request(ServiceZone::OutOfCity, 4, 3, 2);
        assert_eq!(compute(&r), compute(&r));
    }

    #[test]
    fn test_base_cost_is_monotonic() {
        for zone in ServiceZone::OFFERED {
            let mut previous = compute(&request(zone, 2, 1, 2));
            for days in 2..=30 {
                let next = compute(&request(zone, 2, days, 2));
                assert!(next.base_cost > previous.base_cost);
                assert!(next.total > previous.total);
                previous = next;
            }

            let mut previous = compute(&request(zone, 2, 3, 2));
            for units in 3..=50 {
                let next = compute(&request(zone, units, 3, 2));
                assert!(next.base_cost > previous.base_cost);
                assert!(next.total > previous.total);
                previous = next;
            }
        }
    }

    #[test]
    fn test_zone_adjustments_are_mutually_exclusive() {
        for code in 0..=3 {
            for units in 2..=6 {
                for extra in 0..=10 {
                    let invoice = compute(&request(ServiceZone::from_code(code), units, 2, extra));
                    if invoice.zone_surcharge.is_positive() {
                        assert!(invoice.zone_discount.is_zero());
                    }
                    if invoice.zone_discount.is_positive() {
                        assert!(invoice.zone_surcharge.is_zero());
                    }
                }
            }
        }
    }

    #[test]
    fn test_unset_zone_gets_no_adjustment() {
        let invoice = compute(&request(ServiceZone::Unset, 2, 1, 1));
        assert!(!invoice.has_zone_adjustment());
        assert_eq!(invoice.total, Money::from_pesos(76_860));
    }

    /// Negative extra days are not validated and reduce the total.
    #[test]
    fn test_negative_extra_days_flow_through() {
        let invoice = compute(&request(ServiceZone::InCity, 2, 1, -1));
        assert_eq!(invoice.extra_cost, Money::from_pesos(-6_860));
        assert_eq!(invoice.total, Money::from_pesos(63_140));
    }

    #[test]
    fn test_absurd_counts_saturate_without_panicking() {
        let invoice = compute(&request(ServiceZone::OutOfCity, i64::MAX, i64::MAX, i64::MAX));
        assert_eq!(invoice.base_cost.centavos(), i64::MAX);
        assert_eq!(invoice.total.centavos(), i64::MAX);
    }

    #[test]
    fn test_quote_rejects_invalid_request() {
        let mut r = request(ServiceZone::Unset, 1, 1, 0);
        r.phone = "123".to_string();
        match quote(&r) {
            Err(CoreError::Validation(result)) => {
                assert_eq!(result.len(), 3);
                assert!(result.contains(RentalField::ServiceZone));
                assert!(result.contains(RentalField::EquipmentCount));
                assert!(result.contains(RentalField::Phone));
            }
            Ok(invoice) => panic!("expected validation error, got {:?}", invoice),
        }
    }

    #[test]
    fn test_quote_prices_valid_request() {
        let invoice = quote(&request(ServiceZone::OutOfCity, 2, 1, 1)).unwrap();
        assert_eq!(invoice.total, Money::from_pesos(80_703));
    }
}
