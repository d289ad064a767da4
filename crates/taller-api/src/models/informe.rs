//! Informe DTO: aggregated counts for the caller's taller.

use serde::Serialize;
use utoipa::ToSchema;

/// Aggregated workshop report.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InformeDto {
    pub vehiculos_registrados: i64,
    pub clientes_registrados: i64,
    pub citas_solicitadas: i64,
    pub citas_atendidas: i64,
    pub citas_pendientes: i64,
    pub citas_canceladas: i64,
    /// Percentage of citas atendidas over total, rounded to 2 decimals.
    /// `0.0` when there are no citas.
    pub tasa_citas_completadas: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let dto = InformeDto {
            vehiculos_registrados: 5,
            clientes_registrados: 3,
            citas_solicitadas: 4,
            citas_atendidas: 3,
            citas_pendientes: 1,
            citas_canceladas: 0,
            tasa_citas_completadas: 75.0,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["vehiculosRegistrados"], 5);
        assert_eq!(json["tasaCitasCompletadas"], 75.0);
    }
}
