//! # Interactive Session
//!
//! Collects one rental request from a terminal, field by field.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Banner                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  for each field:                                                        │
//! │    prompt ──► read line ──► RentalForm ──► validate_field               │
//! │                  ▲                              │                       │
//! │                  └──── WARNING: <message> ◄─────┘ (rejected)            │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  quote(request) ──► IssuedInvoice                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numeric answers go through the same coercion as the web form, so an empty
//! answer takes the default shown in brackets.

use std::io::{self, BufRead, Write};

use alquipc_core::validation::validate_field;
use alquipc_core::{quote, CoreError, RentalField, RentalForm, ServiceZone};
use tracing::{debug, info};

use crate::receipt::IssuedInvoice;

/// Session failures. Field rejections are not errors; they re-prompt.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed while asking for {field}")]
    InputClosed { field: RentalField },

    #[error(transparent)]
    Rejected(#[from] CoreError),
}

/// One interactive invoice session over any line reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    form: RentalForm,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            input,
            output,
            form: RentalForm::default(),
        }
    }

    /// Asks every field, then prices the request.
    pub fn run(&mut self) -> Result<IssuedInvoice, SessionError> {
        self.form.clear();

        writeln!(self.output, "\nBienvenido estimado cliente a 'ALQUIPC'")?;
        writeln!(self.output, "****************************************\n")?;

        self.ask(RentalField::Name, "Nombre Cliente: ")?;
        self.ask(RentalField::ClientId, "Id Cliente: ")?;
        self.ask(RentalField::Phone, "Teléfono Cliente: ")?;
        self.ask(RentalField::Email, "E-mail Cliente: ")?;

        writeln!(self.output, "\nTipos de servicios ofrecidos")?;
        for zone in ServiceZone::OFFERED {
            writeln!(self.output, "[{}] {}", zone.code(), zone.label())?;
        }
        self.ask(RentalField::ServiceZone, "Tipo de servicio tomado por el cliente: ")?;

        self.ask(
            RentalField::EquipmentCount,
            "Número de equipos que desea alquilar [2]: ",
        )?;
        self.ask(
            RentalField::InitialDays,
            "Número de días que desea tomar el alquiler [1]: ",
        )?;
        self.ask(
            RentalField::ExtraDays,
            "Número de días adicionales que toma el alquiler [0]: ",
        )?;

        let request = self.form.to_request();
        let invoice = quote(&request)?;
        info!(
            zone = ?request.service_zone,
            units = request.equipment_count,
            total_centavos = invoice.total.centavos(),
            "Invoice computed"
        );

        Ok(IssuedInvoice { request, invoice })
    }

    /// Prompts until `field` passes its rule.
    fn ask(&mut self, field: RentalField, prompt: &str) -> Result<(), SessionError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let answer = self.read_answer(field)?;
            *self.form.field_mut(field) = answer;

            match validate_field(&self.form.to_request(), field) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    debug!(%field, "Field rejected");
                    writeln!(self.output, "WARNING: {err}")?;
                }
            }
        }
    }

    /// Reads one line, trimmed like a terminal user expects.
    fn read_answer(&mut self, field: RentalField) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed { field });
        }
        Ok(line.trim().to_string())
    }
}
