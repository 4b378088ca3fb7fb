use chrono::Duration;
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;

use std::{fs::File, io::BufReader};

use super::{drone_error::DroneError, random_walk::RandomWalk};

/// Periodo maximo entre pasos: un dia.
pub const MAX_TICK_PERIOD_MILLIS: u64 = 86_400_000;

/// Configuracion del movimiento del Drone.
///
/// Todos los campos tienen valor por defecto, asi que un JSON vacio (`{}`) es valido.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DroneConfig {
    /// Cada cuantos milisegundos el Drone da un paso.
    pub tick_period_millis: u64,

    /// Ancho total del offset aleatorio por eje, en grados. Con 5.0 cada paso
    /// mueve la latitud y la longitud entre -2.5 y 2.5.
    pub step_span_degrees: f64,

    /// Si esta prendido, despues de cada paso la posicion se recorta a
    /// [-90, 90] x [-180, 180].
    pub clamp_to_geographic_range: bool,

    /// Semilla del generador aleatorio. Sin semilla, se toma entropia del sistema.
    pub seed: Option<u64>,
}

impl Default for DroneConfig {
    fn default() -> Self {
        DroneConfig {
            tick_period_millis: 1000,
            step_span_degrees: 5.0,
            clamp_to_geographic_range: false,
            seed: None,
        }
    }
}

impl DroneConfig {
    /// Toma un path a un archivo de configuracion y levanta el DroneConfig.
    pub fn read_drone_config(file_path: &str) -> Result<DroneConfig, DroneError> {
        let config_file = File::open(file_path)
            .map_err(|e| DroneError::ReadingConfigFileError(format!("{}: {}", file_path, e)))?;

        let reader: BufReader<File> = BufReader::new(config_file);
        let config: DroneConfig = serde_json::from_reader(reader)
            .map_err(|e| DroneError::ReadingConfigFileError(format!("{}: {}", file_path, e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DroneError> {
        if self.tick_period_millis == 0 || self.tick_period_millis > MAX_TICK_PERIOD_MILLIS {
            return Err(DroneError::InvalidConfig(format!(
                "tick_period_millis debe estar entre 1 y {}, vale {}",
                MAX_TICK_PERIOD_MILLIS, self.tick_period_millis
            )));
        }

        if !self.step_span_degrees.is_finite() || self.step_span_degrees <= 0.0 {
            return Err(DroneError::InvalidConfig(format!(
                "step_span_degrees debe ser finito y positivo, vale {}",
                self.step_span_degrees
            )));
        }

        Ok(())
    }

    pub fn get_tick_period(&self) -> Duration {
        Duration::milliseconds(self.tick_period_millis as i64)
    }

    pub fn get_random_walk(&self) -> RandomWalk {
        RandomWalk::new(self.step_span_degrees, self.clamp_to_geographic_range)
    }

    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
