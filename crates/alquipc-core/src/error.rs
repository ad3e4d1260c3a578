//! # Error Types
//!
//! Domain-specific error types for alquipc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  alquipc-core errors (this file)                                       │
//! │  ├── ValidationError  - One field failed its rule                      │
//! │  └── CoreError        - A request was rejected (wraps all failures)    │
//! │                                                                         │
//! │  alquipc CLI errors (separate crate)                                   │
//! │  ├── ConfigError      - Bad ALQUIPC_* environment values               │
//! │  └── SessionError     - Terminal I/O failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → ValidationResult → CoreError → front end      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Messages are the exact Spanish texts the client sees next to a field
//! 3. Every failure is recoverable by re-submitting corrected input
//! 4. The pricing engine itself has no error variants: it is total

use thiserror::Error;

use crate::validation::ValidationResult;
use crate::{MIN_EQUIPMENT, MIN_INITIAL_DAYS};

// =============================================================================
// Validation Error
// =============================================================================

/// A single field validation failure.
///
/// `Display` yields the advisory message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is blank or contains something other than letters and spaces.
    #[error("El nombre no puede estar vacío ni contener números")]
    InvalidName,

    /// Client ID is empty or not all digits.
    #[error("El ID debe ser numérico")]
    InvalidClientId,

    /// Phone is not exactly 10 digits.
    #[error("El teléfono debe tener 10 dígitos")]
    InvalidPhone,

    /// Email does not look like `local@domain.tld`.
    #[error("Email inválido")]
    InvalidEmail,

    /// No service zone was picked.
    #[error("Seleccione un tipo de servicio")]
    ServiceZoneUnset,

    /// Fewer than [`MIN_EQUIPMENT`] units.
    #[error("Mínimo {} equipos", MIN_EQUIPMENT)]
    TooFewEquipment,

    /// Fewer than [`MIN_INITIAL_DAYS`] initial days.
    #[error("Mínimo {} día", MIN_INITIAL_DAYS)]
    TooFewInitialDays,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    /// The request failed one or more field rules. Carries every failure.
    #[error("Invalid rental request: {} field(s) failed validation", .0.len())]
    Validation(ValidationResult),
}

impl CoreError {
    /// Returns the field failures, if this is a validation error.
    pub fn validation(&self) -> Option<&ValidationResult> {
        match self {
            CoreError::Validation(result) => Some(result),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
