//! # Form Module
//!
//! Raw form input and its coercion into a [`RentalRequest`].
//!
//! ## Coercion Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field          Raw text     Parsed      Fallback (no number, or 0)    │
//! │  ─────────────  ──────────   ─────────   ──────────────────────────    │
//! │  equipos        "5 pcs"      5           2                             │
//! │  diasIniciales  "abc"        -           1                             │
//! │  diasAdicionales "-2"        -2          0                             │
//! │  servicio       "2"          OutOfCity   Unset                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numbers are read like a lenient integer parse: leading whitespace, an
//! optional sign, then as many ASCII digits as present. Trailing text is
//! ignored. Negative numbers are kept as typed; rejecting them is the
//! validator's job, and extra days have no rule at all.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{RentalField, RentalRequest, ServiceZone};
use crate::{MIN_EQUIPMENT, MIN_INITIAL_DAYS};

const DEFAULT_EXTRA_DAYS: i64 = 0;

/// The rental form exactly as typed, one string per input.
///
/// `Default` is the cleared form: empty texts, no zone, 2 units, 1 initial
/// day, 0 extra days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RentalForm {
    pub name: String,
    pub client_id: String,
    pub phone: String,
    pub email: String,
    pub service_zone: String,
    pub equipment_count: String,
    pub initial_days: String,
    pub extra_days: String,
}

impl Default for RentalForm {
    fn default() -> Self {
        RentalForm {
            name: String::new(),
            client_id: String::new(),
            phone: String::new(),
            email: String::new(),
            service_zone: ServiceZone::Unset.code().to_string(),
            equipment_count: MIN_EQUIPMENT.to_string(),
            initial_days: MIN_INITIAL_DAYS.to_string(),
            extra_days: DEFAULT_EXTRA_DAYS.to_string(),
        }
    }
}

impl RentalForm {
    /// Resets every input to its cleared value.
    pub fn clear(&mut self) {
        *self = RentalForm::default();
    }

    /// The raw text behind a form key, for front ends that bind inputs by key.
    pub fn field_mut(&mut self, field: RentalField) -> &mut String {
        match field {
            RentalField::Name => &mut self.name,
            RentalField::ClientId => &mut self.client_id,
            RentalField::Phone => &mut self.phone,
            RentalField::Email => &mut self.email,
            RentalField::ServiceZone => &mut self.service_zone,
            RentalField::EquipmentCount => &mut self.equipment_count,
            RentalField::InitialDays => &mut self.initial_days,
            RentalField::ExtraDays => &mut self.extra_days,
        }
    }

    /// Builds the request to validate and price.
    ///
    /// Text fields pass through untouched; the validator trims the name.
    ///
    /// ## Example
    /// ```rust
    /// use alquipc_core::{RentalForm, ServiceZone};
    ///
    /// let form = RentalForm {
    ///     service_zone: "3".to_string(),
    ///     equipment_count: "0".to_string(),
    ///     initial_days: "4 días".to_string(),
    ///     extra_days: "".to_string(),
    ///     ..RentalForm::default()
    /// };
    ///
    /// let request = form.to_request();
    /// assert_eq!(request.service_zone, ServiceZone::OnPremises);
    /// assert_eq!(request.equipment_count, 2);
    /// assert_eq!(request.initial_days, 4);
    /// assert_eq!(request.extra_days, 0);
    /// ```
    pub fn to_request(&self) -> RentalRequest {
        RentalRequest {
            name: self.name.clone(),
            client_id: self.client_id.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            service_zone: coerce_service_zone(&self.service_zone),
            equipment_count: coerce_count(&self.equipment_count, MIN_EQUIPMENT),
            initial_days: coerce_count(&self.initial_days, MIN_INITIAL_DAYS),
            extra_days: coerce_count(&self.extra_days, DEFAULT_EXTRA_DAYS),
        }
    }
}

impl From<&RentalForm> for RentalRequest {
    fn from(form: &RentalForm) -> Self {
        form.to_request()
    }
}

/// Reads the leading integer of `raw`, if any.
///
/// Skips leading whitespace, accepts one `+` or `-`, then consumes ASCII
/// digits. Values beyond the i64 range saturate.
///
/// ## Example
/// ```rust
/// use alquipc_core::form::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  42abc"), Some(42));
/// assert_eq!(parse_leading_int("-7"), Some(-7));
/// assert_eq!(parse_leading_int("x1"), None);
/// assert_eq!(parse_leading_int("+"), None);
/// ```
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        let d = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    seen.then_some(value)
}

/// Parses a count, falling back to `default` when nothing parses or the
/// parsed value is zero.
pub fn coerce_count(raw: &str, default: i64) -> i64 {
    match parse_leading_int(raw) {
        Some(0) | None => default,
        Some(value) => value,
    }
}

/// Parses a zone menu code. Unparsable or unknown codes become `Unset`.
pub fn coerce_service_zone(raw: &str) -> ServiceZone {
    parse_leading_int(raw)
        .map(ServiceZone::from_code)
        .unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================
