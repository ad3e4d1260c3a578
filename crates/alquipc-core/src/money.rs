//! # Money Module
//!
//! Provides the `Money` type for handling Colombian-peso amounts safely.
//!
//! ## Why Integer Centavos?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In the rental tariff:                                                  │
//! │    5% of 3.430 pesos = 171,5 pesos → not a whole peso                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos (1/100 peso)                            │
//! │    Every invoice line is a whole number of centavos, so every           │
//! │    step of the invoice is exact. No intermediate rounding, ever.        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use alquipc_core::money::Money;
//!
//! let daily = Money::from_pesos(35_000);
//! let two_units = daily * 2;
//! assert_eq!(two_units.pesos(), 70_000);
//! assert_eq!(two_units.to_string(), "$70.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use ts_rs::TS;

use crate::types::Rate;

/// Centavos per peso.
const CENTAVOS_PER_PESO: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (1/100 of a Colombian peso).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative extra days reach the engine unvalidated, so
///   negative amounts must be representable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Saturating arithmetic**: The pricing engine is total and never panics,
///   even on absurd equipment or day counts
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  DAILY_RATE × units × days ────────► Invoice.base_cost                 │
/// │  EXTRA_DAILY_RATE × units × days ──► -2% ──► Invoice.extra_cost        │
/// │                                                                         │
/// │  subtotal ──► ±5% zone adjustment ──► Invoice.total                    │
/// │                                                                         │
/// │  Displayed as "$80.703" by the front ends                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use alquipc_core::money::Money;
    ///
    /// let half_peso = Money::from_centavos(50);
    /// assert_eq!(half_peso.centavos(), 50);
    /// ```
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// ## Example
    /// ```rust
    /// use alquipc_core::money::Money;
    ///
    /// let rate = Money::from_pesos(35_000);
    /// assert_eq!(rate.centavos(), 3_500_000);
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos.saturating_mul(CENTAVOS_PER_PESO))
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion (truncated toward zero).
    ///
    /// ## Example
    /// ```rust
    /// use alquipc_core::money::Money;
    ///
    /// assert_eq!(Money::from_centavos(17_150).pesos(), 171);
    /// assert_eq!(Money::from_centavos(-550).pesos(), -5);
    /// ```
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / CENTAVOS_PER_PESO
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % CENTAVOS_PER_PESO).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity (units, days). Saturates on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use alquipc_core::money::Money;
    ///
    /// let rate = Money::from_pesos(3_500);
    /// assert_eq!(rate.multiply_quantity(2).pesos(), 7_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Returns `rate` percent of this amount.
    ///
    /// ## Implementation
    /// Integer math in i128: `amount * bps / 10000`. A fractional centavo is
    /// rounded half away from zero, but tariff amounts never produce one:
    /// base costs are multiples of 35.000 pesos and discounted extra-day
    /// costs multiples of 3.430 pesos, and 5% of either is whole centavos.
    ///
    /// ## Example
    /// ```rust
    /// use alquipc_core::money::Money;
    /// use alquipc_core::types::Rate;
    ///
    /// let subtotal = Money::from_pesos(76_860);
    /// let surcharge = subtotal.percentage(Rate::from_bps(500)); // 5%
    /// assert_eq!(surcharge.pesos(), 3_843);
    /// ```
    pub fn percentage(&self, rate: Rate) -> Money {
        let scaled = (self.0 as i128).unsigned_abs() * rate.bps() as u128;
        let magnitude = (scaled + 5_000) / 10_000;
        let signed = if self.0 < 0 {
            -(magnitude as i128)
        } else {
            magnitude as i128
        };
        Money(clamp_to_i64(signed))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Example
    /// ```rust
    /// use alquipc_core::money::Money;
    /// use alquipc_core::types::Rate;
    ///
    /// let raw_extra = Money::from_pesos(7_000);
    /// let discounted = raw_extra.apply_percentage_discount(Rate::from_bps(200)); // 2% off
    /// assert_eq!(discounted.pesos(), 6_860);
    /// ```
    pub fn apply_percentage_discount(&self, rate: Rate) -> Money {
        *self - self.percentage(rate)
    }
}

fn clamp_to_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Groups the digits of `value` in thousands with `.` (es-CO convention).
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Colombian-peso presentation: `$` prefix, `.` thousands, `,` decimals.
///
/// Centavos are shown only when non-zero, without trailing zeros, the way
/// `toLocaleString("es-CO")` renders the amounts in the web form:
/// `$80.703`, `$171,5`, `$0,25`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let pesos = magnitude / CENTAVOS_PER_PESO as u64;
        let centavos = magnitude % CENTAVOS_PER_PESO as u64;

        write!(f, "{}${}", sign, group_thousands(pesos))?;
        match centavos {
            0 => Ok(()),
            c if c % 10 == 0 => write!(f, ",{}", c / 10),
            c => write!(f, ",{:02}", c),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
