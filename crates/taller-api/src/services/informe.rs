//! Aggregated report over the caller's taller.

use crate::error::ApiError;
use crate::models::InformeDto;
use crate::services::cita::ESTADOS;
use sqlx::PgPool;
use taller_core::TallerId;
use taller_db::{Cita, Cliente, Vehiculo};

/// Builds the per-taller informe from live counts.
pub struct InformeService {
    pool: PgPool,
}

impl InformeService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count vehiculos, clientes and citas per estado and derive the
    /// completion rate.
    pub async fn generate(&self, taller_id: TallerId) -> Result<InformeDto, ApiError> {
        let taller = taller_id.into_uuid();

        let vehiculos_registrados = Vehiculo::count(&self.pool, taller).await?;
        let clientes_registrados = Cliente::count(&self.pool, taller).await?;
        let citas_solicitadas = Cita::count(&self.pool, taller).await?;

        let [pendiente, atendida, cancelada] = ESTADOS;
        let citas_pendientes = Cita::count_by_estado(&self.pool, taller, pendiente).await?;
        let citas_atendidas = Cita::count_by_estado(&self.pool, taller, atendida).await?;
        let citas_canceladas = Cita::count_by_estado(&self.pool, taller, cancelada).await?;

        Ok(InformeDto {
            vehiculos_registrados,
            clientes_registrados,
            citas_solicitadas,
            citas_atendidas,
            citas_pendientes,
            citas_canceladas,
            tasa_citas_completadas: completion_rate(citas_atendidas, citas_solicitadas),
        })
    }
}

/// Percentage of atendidas over total, rounded to two decimals.
fn completion_rate(atendidas: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = atendidas as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_with_no_citas_is_zero() {
        assert_eq!(completion_rate(0, 0), 0.0);
    }

    #[test]
    fn test_rate_rounds_to_two_decimals() {
        assert_eq!(completion_rate(3, 4), 75.0);
        assert_eq!(completion_rate(1, 3), 33.33);
        assert_eq!(completion_rate(2, 3), 66.67);
    }

    #[test]
    fn test_rate_all_atendidas() {
        assert_eq!(completion_rate(5, 5), 100.0);
    }
}
