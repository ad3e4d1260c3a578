//! # Validation Module
//!
//! Field validation for rental requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Flow                                    │
//! │                                                                         │
//! │  RentalRequest                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate() ── runs EVERY rule, no short-circuit                        │
//! │       │                                                                 │
//! │       ├── nombre ─────── letters (incl. ÁÉÍÓÚÑ) and spaces, not blank  │
//! │       ├── idCliente ──── digits only, not empty                         │
//! │       ├── telefono ───── exactly 10 digits                              │
//! │       ├── email ──────── local@domain.tld                               │
//! │       ├── servicio ───── not Unset                                      │
//! │       ├── equipos ────── ≥ 2                                            │
//! │       └── diasIniciales ≥ 1                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ValidationResult { field → message }   empty ⇒ safe to price          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Extra days have no rule: any value, negative included, is accepted.
//!
//! The per-field validators are public so an interactive front end can
//! re-prompt one field at a time.
//!
//! ## Usage
//! ```rust
//! use alquipc_core::validation::{validate_phone, validate_email};
//!
//! assert!(validate_phone("3001234567").is_ok());
//! assert!(validate_phone("12345").is_err());
//! assert!(validate_email("ana@correo.com.co").is_ok());
//! ```

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::btree_map::{self, BTreeMap};
use std::sync::OnceLock;

use crate::error::{CoreError, ValidationError};
use crate::types::{RentalField, RentalRequest, ServiceZone};
use crate::{MIN_EQUIPMENT, MIN_INITIAL_DAYS};

/// Result type for a single field check.
pub type FieldResult = Result<(), ValidationError>;

// =============================================================================
// Patterns
// =============================================================================
// Character classes are spelled out in ASCII: the web form's `\w` and `\d`
// never match non-ASCII letters or digits.

fn name_regex() -> &'static Regex {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ\s]+$").expect("name pattern is valid")
    })
}

fn digits_regex() -> &'static Regex {
    static DIGITS_REGEX: OnceLock<Regex> = OnceLock::new();
    DIGITS_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"))
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z0-9_]+$")
            .expect("email pattern is valid")
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the client name.
///
/// ## Rules
/// - Must not be blank after trimming
/// - Only letters (including accented vowels and Ñ/ñ) and whitespace
///
/// ## Example
/// ```rust
/// use alquipc_core::validation::validate_name;
///
/// assert!(validate_name("  María Núñez ").is_ok());
/// assert!(validate_name("Juan3").is_err());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> FieldResult {
    if name_regex().is_match(name.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName)
    }
}

/// Validates the client ID: non-empty, digits only.
pub fn validate_client_id(client_id: &str) -> FieldResult {
    if digits_regex().is_match(client_id) {
        Ok(())
    } else {
        Err(ValidationError::InvalidClientId)
    }
}

/// Validates the phone number: exactly 10 digits, nothing else.
///
/// No `+` prefix, no spaces, no separators.
pub fn validate_phone(phone: &str) -> FieldResult {
    if phone_regex().is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Validates the email shape `local@domain.tld`.
///
/// Local part and domain are one or more word characters, dots or dashes;
/// the TLD is one or more word characters. The value is not trimmed.
pub fn validate_email(email: &str) -> FieldResult {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates that a service zone was picked.
pub fn validate_service_zone(zone: ServiceZone) -> FieldResult {
    if zone.is_unset() {
        Err(ValidationError::ServiceZoneUnset)
    } else {
        Ok(())
    }
}

/// Validates the equipment count (at least [`MIN_EQUIPMENT`]).
pub fn validate_equipment_count(count: i64) -> FieldResult {
    if count < MIN_EQUIPMENT {
        Err(ValidationError::TooFewEquipment)
    } else {
        Ok(())
    }
}

/// Validates the initial rental days (at least [`MIN_INITIAL_DAYS`]).
pub fn validate_initial_days(days: i64) -> FieldResult {
    if days < MIN_INITIAL_DAYS {
        Err(ValidationError::TooFewInitialDays)
    } else {
        Ok(())
    }
}

// =============================================================================
// Request Validation
// =============================================================================

/// Validates every field of a rental request.
///
/// All rules run, so several errors can be reported at once. An empty result
/// means the request may be handed to [`crate::pricing::compute`].
///
/// ## Example
/// ```rust
/// use alquipc_core::{validate, RentalField, RentalRequest, ServiceZone};
///
/// let request = RentalRequest {
///     name: "Juan3".to_string(),
///     client_id: "".to_string(),
///     phone: "12345".to_string(),
///     email: "bad".to_string(),
///     service_zone: ServiceZone::Unset,
///     equipment_count: 1,
///     initial_days: 0,
///     extra_days: 0,
/// };
///
/// let result = validate(&request);
/// assert_eq!(result.len(), 7);
/// assert!(result.contains(RentalField::ClientId));
/// ```
pub fn validate(request: &RentalRequest) -> ValidationResult {
    let mut result = ValidationResult::default();
    for field in VALIDATED_FIELDS {
        if let Err(err) = validate_field(request, field) {
            result.insert(field, err);
        }
    }
    result
}

/// Fields that carry a validation rule, in form order.
pub const VALIDATED_FIELDS: [RentalField; 7] = [
    RentalField::Name,
    RentalField::ClientId,
    RentalField::Phone,
    RentalField::Email,
    RentalField::ServiceZone,
    RentalField::EquipmentCount,
    RentalField::InitialDays,
];

/// Runs the rule for one field of `request`.
///
/// `ExtraDays` has no rule and always passes.
pub fn validate_field(request: &RentalRequest, field: RentalField) -> FieldResult {
    match field {
        RentalField::Name => validate_name(&request.name),
        RentalField::ClientId => validate_client_id(&request.client_id),
        RentalField::Phone => validate_phone(&request.phone),
        RentalField::Email => validate_email(&request.email),
        RentalField::ServiceZone => validate_service_zone(request.service_zone),
        RentalField::EquipmentCount => validate_equipment_count(request.equipment_count),
        RentalField::InitialDays => validate_initial_days(request.initial_days),
        RentalField::ExtraDays => Ok(()),
    }
}

// =============================================================================
// Validation Result
// =============================================================================

/// Field-keyed validation failures. Empty means valid.
///
/// Serializes as a JSON object of form key to message:
/// `{"telefono": "El teléfono debe tener 10 dígitos"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<RentalField, ValidationError>,
}

impl ValidationResult {
    pub(crate) fn insert(&mut self, field: RentalField, err: ValidationError) {
        self.errors.insert(field, err);
    }

    /// True when no field failed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failure recorded for `field`, if any.
    pub fn get(&self, field: RentalField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: RentalField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Failures in form order.
    pub fn iter(&self) -> btree_map::Iter<'_, RentalField, ValidationError> {
        self.errors.iter()
    }

    /// Form key to message, for routing each message to its input.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(field, err)| (field.as_str(), err.to_string()))
            .collect()
    }

    /// `Ok(())` when valid, otherwise the failures as a [`CoreError`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CoreError::Validation(self))
        }
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = (&'a RentalField, &'a ValidationError);
    type IntoIter = btree_map::Iter<'a, RentalField, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, err) in &self.errors {
            map.serialize_entry(field.as_str(), &err.to_string())?;
        }
        map.end()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RentalRequest {
        RentalRequest {
            name: "María José Núñez".to_string(),
            client_id: "1020304050".to_string(),
            phone: "3001234567".to_string(),
            email: "maria.nunez@correo-co.com".to_string(),
            service_zone: ServiceZone::InCity,
            equipment_count: 2,
            initial_days: 1,
            extra_days: 0,
        }
    }

    fn only_failure(request: &RentalRequest) -> RentalField {
        let result = validate(request);
        assert_eq!(result.len(), 1, "expected one failure, got {:?}", result);
        *result.iter().next().unwrap().0
    }

    #[test]
    fn test_valid_request_passes() {
        let result = validate(&valid_request());
        assert!(result.is_valid());
        assert!(result.is_empty());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_single_field_corruptions() {
        let mut r = valid_request();
        r.name = "Juan3".to_string();
        assert_eq!(only_failure(&r), RentalField::Name);

        let mut r = valid_request();
        r.client_id = "12a4".to_string();
        assert_eq!(only_failure(&r), RentalField::ClientId);

        let mut r = valid_request();
        r.phone = "300123456".to_string();
        assert_eq!(only_failure(&r), RentalField::Phone);

        let mut r = valid_request();
        r.phone = "30012345678".to_string();
        assert_eq!(only_failure(&r), RentalField::Phone);

        let mut r = valid_request();
        r.email = "maria.correo.com".to_string();
        assert_eq!(only_failure(&r), RentalField::Email);

        let mut r = valid_request();
        r.service_zone = ServiceZone::Unset;
        assert_eq!(only_failure(&r), RentalField::ServiceZone);

        let mut r = valid_request();
        r.equipment_count = 1;
        assert_eq!(only_failure(&r), RentalField::EquipmentCount);

        let mut r = valid_request();
        r.initial_days = 0;
        assert_eq!(only_failure(&r), RentalField::InitialDays);
    }

    #[test]
    fn test_invalid_scenario_reports_every_rule() {
        let request = RentalRequest {
            name: "Juan3".to_string(),
            client_id: String::new(),
            phone: "12345".to_string(),
            email: "bad".to_string(),
            service_zone: ServiceZone::Unset,
            equipment_count: 1,
            initial_days: 0,
            extra_days: 0,
        };

        let result = validate(&request);
        let fields: Vec<RentalField> = result.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            fields,
            vec![
                RentalField::Name,
                RentalField::ClientId,
                RentalField::Phone,
                RentalField::Email,
                RentalField::ServiceZone,
                RentalField::EquipmentCount,
                RentalField::InitialDays,
            ]
        );
        assert_eq!(
            result.get(RentalField::ClientId),
            Some(&ValidationError::InvalidClientId)
        );
        assert!(!result.contains(RentalField::ExtraDays));
    }

    /// Extra days have no rule; negative values reach the engine as typed.
    #[test]
    fn test_negative_extra_days_are_not_rejected() {
        let mut r = valid_request();
        r.extra_days = -5;
        assert!(validate(&r).is_valid());
    }

    #[test]
    fn test_validate_field_matches_full_validation() {
        let mut r = valid_request();
        r.phone = "12".to_string();
        r.extra_days = -1;
        let result = validate(&r);
        for field in VALIDATED_FIELDS {
            assert_eq!(validate_field(&r, field).err().as_ref(), result.get(field));
        }
        assert!(validate_field(&r, RentalField::ExtraDays).is_ok());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ñandú Álvarez").is_ok());
        assert!(validate_name("  Ana  ").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(" \t ").is_err());
        assert!(validate_name("Ana-María").is_err());
        assert!(validate_name("O'Brien").is_err());
        // Only the listed accents are letters here
        assert!(validate_name("Zoë").is_err());
    }

    #[test]
    fn test_validate_client_id() {
        assert!(validate_client_id("0").is_ok());
        assert!(validate_client_id("1020304050").is_ok());
        assert!(validate_client_id("").is_err());
        assert!(validate_client_id(" 123").is_err());
        assert!(validate_client_id("-123").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("3001234567").is_ok());
        assert!(validate_phone("+573001234").is_err());
        assert!(validate_phone("300 123 4567").is_err());
        assert!(validate_phone("300123456 ").is_err());
        // Non-ASCII digits are not digits here
        assert!(validate_phone("٣٠٠١٢٣٤٥٦٧").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("first.last-1@sub.domain.org").is_ok());
        assert!(validate_email("under_score@x.y").is_ok());
        assert!(validate_email("no-at.example.com").is_err());
        assert!(validate_email("a@nodot").is_err());
        assert!(validate_email("a b@c.com").is_err());
        assert!(validate_email(" a@b.co").is_err());
        assert!(validate_email("a@b.c-").is_err());
        assert!(validate_email("ñ@b.co").is_err());
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(validate_equipment_count(2).is_ok());
        assert!(validate_equipment_count(1).is_err());
        assert!(validate_equipment_count(-3).is_err());
        assert!(validate_initial_days(1).is_ok());
        assert!(validate_initial_days(0).is_err());
        assert!(validate_service_zone(ServiceZone::OnPremises).is_ok());
    }

    #[test]
    fn test_messages_and_serialization() {
        let mut r = valid_request();
        r.phone = "123".to_string();
        r.equipment_count = 0;
        let result = validate(&r);

        let messages = result.messages();
        assert_eq!(messages["telefono"], "El teléfono debe tener 10 dígitos");
        assert_eq!(messages["equipos"], "Mínimo 2 equipos");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "telefono": "El teléfono debe tener 10 dígitos",
                "equipos": "Mínimo 2 equipos",
            })
        );
    }

    #[test]
    fn test_into_result_wraps_failures() {
        let mut r = valid_request();
        r.email = String::new();
        match validate(&r).into_result() {
            Err(CoreError::Validation(result)) => {
                assert!(result.contains(RentalField::Email));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
