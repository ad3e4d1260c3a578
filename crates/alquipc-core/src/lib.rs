//! # alquipc-core: Pure Business Logic for ALQUIPC
//!
//! This crate is the **heart** of the ALQUIPC equipment-rental invoicer. It
//! turns a client/rental request into either field-level validation errors or
//! a fully itemized invoice, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ALQUIPC Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Front ends (web form via TS bindings, alquipc CLI)     │   │
//! │  │    Raw text ──► RentalForm ──► RentalRequest                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ alquipc-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   form    │  │ validation│  │  pricing  │  │   money   │  │   │
//! │  │   │ coercion  │─►│ validate  │─►│  compute  │  │   Money   │  │   │
//! │  │   │ defaults  │  │ per field │  │  Invoice  │  │   Rate    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (RentalRequest, Invoice, ServiceZone, Rate)
//! - [`money`] - Money type with integer centavo arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//! - [`pricing`] - Invoice computation
//! - [`form`] - Raw form input coercion
//!
//! ## Example Usage
//!
//! ```rust
//! use alquipc_core::{pricing, validation, RentalRequest, ServiceZone};
//!
//! let request = RentalRequest {
//!     name: "Juan Pérez".to_string(),
//!     client_id: "1020304050".to_string(),
//!     phone: "3001234567".to_string(),
//!     email: "juan@correo.com".to_string(),
//!     service_zone: ServiceZone::OutOfCity,
//!     equipment_count: 2,
//!     initial_days: 1,
//!     extra_days: 1,
//! };
//!
//! assert!(validation::validate(&request).is_valid());
//!
//! let invoice = pricing::compute(&request);
//! assert_eq!(invoice.total.pesos(), 80_703);
//! assert_eq!(invoice.total.to_string(), "$80.703");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod form;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use form::RentalForm;
pub use money::Money;
pub use pricing::{compute, quote};
pub use types::*;
pub use validation::{validate, ValidationResult};

// =============================================================================
// Tariff Constants
// =============================================================================
// Fixed for the lifetime of the process. Safe to read from any thread.

/// Price per equipment per initial day (35.000 pesos).
pub const DAILY_RATE: Money = Money::from_pesos(35_000);

/// Price per equipment per extra day (3.500 pesos), before the extra-day discount.
pub const EXTRA_DAILY_RATE: Money = Money::from_pesos(3_500);

/// Discount applied to the extra-day cost (2%).
pub const EXTRA_DAY_DISCOUNT: Rate = Rate::from_bps(200);

/// Out-of-city surcharge and on-premises discount (5% of the subtotal).
pub const ZONE_ADJUSTMENT: Rate = Rate::from_bps(500);

/// Minimum number of rented equipment units.
pub const MIN_EQUIPMENT: i64 = 2;

/// Minimum number of initial rental days.
pub const MIN_INITIAL_DAYS: i64 = 1;
