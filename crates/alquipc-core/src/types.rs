//! # Domain Types
//!
//! Core domain types used throughout ALQUIPC.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                        ┌─────────────────┐        │
//! │  │ RentalRequest   │   validate + compute   │    Invoice      │        │
//! │  │  ─────────────  │ ─────────────────────► │  ─────────────  │        │
//! │  │  name           │                        │  base_cost      │        │
//! │  │  client_id      │                        │  extra_cost     │        │
//! │  │  phone, email   │                        │  zone_surcharge │        │
//! │  │  service_zone   │                        │  zone_discount  │        │
//! │  │  equipment/days │                        │  total          │        │
//! │  └─────────────────┘                        └─────────────────┘        │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ServiceZone   │   │   RentalField   │   │      Rate       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Unset (0)      │   │  nombre         │   │  bps (u32)      │       │
//! │  │  InCity (1)     │   │  idCliente      │   │  500 = 5%       │       │
//! │  │  OutOfCity (2)  │   │  telefono ...   │   └─────────────────┘       │
//! │  │  OnPremises (3) │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! A `RentalRequest` is built fresh from raw input for every calculation and
//! never stored. An `Invoice` is created once per successful validate+compute
//! cycle and replaced by the next one.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// Percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 200 bps = 2% (extra-day discount), 500 bps = 5% (zone adjustment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Service Zone
// =============================================================================

/// Where the rented equipment is used. Drives the ±5% zone adjustment.
///
/// The web form stores the selection as a small integer (0 = nothing picked
/// yet); `Unset` makes that sentinel an explicit, checkable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ServiceZone {
    /// No zone selected. Fails validation; priced with no adjustment.
    #[default]
    Unset,
    /// Inside the city. No adjustment.
    InCity,
    /// Outside the city. +5% delivery surcharge.
    OutOfCity,
    /// Used inside the ALQUIPC premises. -5% discount.
    OnPremises,
}

impl ServiceZone {
    /// The selectable zones, in menu order.
    pub const OFFERED: [ServiceZone; 3] = [
        ServiceZone::InCity,
        ServiceZone::OutOfCity,
        ServiceZone::OnPremises,
    ];

    /// Maps a menu code to a zone. Anything other than 1, 2 or 3 is `Unset`.
    ///
    /// ## Example
    /// ```rust
    /// use alquipc_core::ServiceZone;
    ///
    /// assert_eq!(ServiceZone::from_code(2), ServiceZone::OutOfCity);
    /// assert_eq!(ServiceZone::from_code(7), ServiceZone::Unset);
    /// ```
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => ServiceZone::InCity,
            2 => ServiceZone::OutOfCity,
            3 => ServiceZone::OnPremises,
            _ => ServiceZone::Unset,
        }
    }

    /// Returns the menu code (0 for `Unset`).
    pub const fn code(&self) -> i64 {
        match self {
            ServiceZone::Unset => 0,
            ServiceZone::InCity => 1,
            ServiceZone::OutOfCity => 2,
            ServiceZone::OnPremises => 3,
        }
    }

    /// Menu label shown to the client.
    pub const fn label(&self) -> &'static str {
        match self {
            ServiceZone::Unset => "Sin seleccionar",
            ServiceZone::InCity => "Dentro de la Ciudad",
            ServiceZone::OutOfCity => "Fuera de la Ciudad",
            ServiceZone::OnPremises => "Dentro del Establecimiento",
        }
    }

    #[inline]
    pub const fn is_unset(&self) -> bool {
        matches!(self, ServiceZone::Unset)
    }
}

impl fmt::Display for ServiceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Rental Field
// =============================================================================

/// Input field keys, as the web form names them.
///
/// Validation errors are keyed by these so a front end can attach each
/// message to the matching input. Ordered in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RentalField {
    #[serde(rename = "nombre")]
    Name,
    #[serde(rename = "idCliente")]
    ClientId,
    #[serde(rename = "telefono")]
    Phone,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "servicio")]
    ServiceZone,
    #[serde(rename = "equipos")]
    EquipmentCount,
    #[serde(rename = "diasIniciales")]
    InitialDays,
    /// Has no validation rule; never appears in a `ValidationResult`.
    #[serde(rename = "diasAdicionales")]
    ExtraDays,
}

impl RentalField {
    /// Returns the form key for this field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RentalField::Name => "nombre",
            RentalField::ClientId => "idCliente",
            RentalField::Phone => "telefono",
            RentalField::Email => "email",
            RentalField::ServiceZone => "servicio",
            RentalField::EquipmentCount => "equipos",
            RentalField::InitialDays => "diasIniciales",
            RentalField::ExtraDays => "diasAdicionales",
        }
    }
}

impl fmt::Display for RentalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Rental Request
// =============================================================================

/// A client's rental request, as submitted for one calculation.
///
/// Counts are signed on purpose: extra days are not validated, so a negative
/// value typed by the user reaches the engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    /// Client full name.
    pub name: String,
    /// Client identification number (digits only).
    pub client_id: String,
    /// 10-digit phone number.
    pub phone: String,
    pub email: String,
    pub service_zone: ServiceZone,
    /// Number of equipment units (at least 2).
    pub equipment_count: i64,
    /// Initial rental days (at least 1).
    pub initial_days: i64,
    /// Days beyond the initial period. Accepted unconditionally.
    pub extra_days: i64,
}

// =============================================================================
// Invoice
// =============================================================================

/// Itemized cost breakdown for one rental request.
///
/// `zone_surcharge` and `zone_discount` are mutually exclusive: at most one
/// is non-zero, decided by the service zone alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// units × initial days × daily rate.
    pub base_cost: Money,
    /// units × extra days × extra daily rate, less the 2% discount.
    pub extra_cost: Money,
    /// 5% of the subtotal when out of the city.
    pub zone_surcharge: Money,
    /// 5% of the subtotal when on the premises.
    pub zone_discount: Money,
    pub total: Money,
}

impl Invoice {
    /// Base cost plus discounted extra-day cost.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.base_cost + self.extra_cost
    }

    /// True if a surcharge or discount was applied.
    pub fn has_zone_adjustment(&self) -> bool {
        !self.zone_surcharge.is_zero() || !self.zone_discount.is_zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
