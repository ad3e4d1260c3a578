//! # Receipt Rendering
//!
//! Prints the invoice the way the ALQUIPC counter hands it out.
//!
//! ```text
//! ---------------------------------------------
//!                 'ALQUIPC'
//! ---------------------------------------------
//! Cliente: Juan Pérez
//! ...
//! Valor Alquiler: $70.000
//! Valor Días adicionales (descontados 2%): $6.860
//! Valor Domicilio (+5%): $3.843            ← only when non-zero
//! ---------------------------------------------
//! TOTAL A PAGAR: $80.703
//! ---------------------------------------------
//! ```

use std::fmt;

use alquipc_core::{Invoice, RentalRequest};
use serde::Serialize;

const RULE: &str = "---------------------------------------------";

/// A priced request, as emitted in JSON mode.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedInvoice {
    pub request: RentalRequest,
    pub invoice: Invoice,
}

/// Renders the text receipt.
pub fn render(request: &RentalRequest, invoice: &Invoice) -> String {
    Receipt { request, invoice }.to_string()
}

/// Text layout of one receipt.
struct Receipt<'a> {
    request: &'a RentalRequest,
    invoice: &'a Invoice,
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Receipt { request, invoice } = self;

        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "\t\t'ALQUIPC'")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Cliente: {}", request.name.trim())?;
        writeln!(f, "Id_Cliente: {}", request.client_id)?;
        writeln!(f, "Teléfono: {}", request.phone)?;
        writeln!(f, "E-mail: {}", request.email)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Tipo de servicio: {}", request.service_zone)?;
        writeln!(f, "Número de Equipos: {}", request.equipment_count)?;
        writeln!(f, "No. de Días Iniciales: {}", request.initial_days)?;
        writeln!(f, "Valor Alquiler: {}", invoice.base_cost)?;
        writeln!(f, "No. de Días adicionales: {}", request.extra_days)?;
        writeln!(
            f,
            "Valor Días adicionales (descontados 2%): {}",
            invoice.extra_cost
        )?;
        if !invoice.zone_surcharge.is_zero() {
            writeln!(f, "Valor Domicilio (+5%): {}", invoice.zone_surcharge)?;
        }
        if !invoice.zone_discount.is_zero() {
            writeln!(
                f,
                "Descuento Establecimiento (-5%): {}",
                invoice.zone_discount
            )?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "TOTAL A PAGAR: {}", invoice.total)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Factura generada por ALQUIPC")?;
        writeln!(f, "Gracias por utilizar nuestros servicios.")
    }
}

/// Renders the JSON document for `--json` mode.
pub fn render_json(request: &RentalRequest, invoice: &Invoice) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&IssuedInvoice {
        request: request.clone(),
        invoice: *invoice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alquipc_core::{compute, ServiceZone};

    fn request(zone: ServiceZone) -> RentalRequest {
        RentalRequest {
            name: "Juan Pérez".to_string(),
            client_id: "1020304050".to_string(),
            phone: "3001234567".to_string(),
            email: "juan@correo.com".to_string(),
            service_zone: zone,
            equipment_count: 2,
            initial_days: 1,
            extra_days: 1,
        }
    }

    #[test]
    fn test_out_of_city_receipt() {
        let r = request(ServiceZone::OutOfCity);
        let text = render(&r, &compute(&r));

        assert!(text.contains("Cliente: Juan Pérez\n"));
        assert!(text.contains("Tipo de servicio: Fuera de la Ciudad\n"));
        assert!(text.contains("Valor Alquiler: $70.000\n"));
        assert!(text.contains("Valor Días adicionales (descontados 2%): $6.860\n"));
        assert!(text.contains("Valor Domicilio (+5%): $3.843\n"));
        assert!(!text.contains("Descuento Establecimiento"));
        assert!(text.contains("TOTAL A PAGAR: $80.703\n"));
        assert!(text.ends_with("Gracias por utilizar nuestros servicios.\n"));
    }

    #[test]
    fn test_on_premises_receipt() {
        let r = request(ServiceZone::OnPremises);
        let text = render(&r, &compute(&r));

        assert!(text.contains("Descuento Establecimiento (-5%): $3.843\n"));
        assert!(!text.contains("Valor Domicilio"));
        assert!(text.contains("TOTAL A PAGAR: $73.017\n"));
    }

    #[test]
    fn test_in_city_receipt_has_no_adjustment_lines() {
        let r = request(ServiceZone::InCity);
        let text = render(&r, &compute(&r));

        assert!(!text.contains("(+5%)"));
        assert!(!text.contains("(-5%)"));
        assert!(text.contains("TOTAL A PAGAR: $76.860\n"));
    }

    #[test]
    fn test_receipt_streams_into_any_formatter() {
        let r = request(ServiceZone::OnPremises);
        let invoice = compute(&r);

        let streamed = format!("{}", Receipt { request: &r, invoice: &invoice });
        assert_eq!(streamed, render(&r, &invoice));
        assert!(streamed.starts_with(&format!("\n{RULE}\n\t\t'ALQUIPC'\n")));
    }

    #[test]
    fn test_json_document() {
        let r = request(ServiceZone::OutOfCity);
        let json = render_json(&r, &compute(&r)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["request"]["serviceZone"], "out_of_city");
        // Money serializes as centavos
        assert_eq!(value["invoice"]["total"], 8_070_300);
        assert_eq!(value["invoice"]["zoneSurcharge"], 384_300);
    }
}
