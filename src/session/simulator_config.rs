use serde::Deserialize;

use std::{fs::File, io::BufReader};

use crate::{
    drones::{drone_config::DroneConfig, drone_error::DroneError},
    points::view_state::ViewState,
    utils::coordinate::Coordinate,
};

/// Mayor zoom que sirven los tiles de OpenStreetMap.
pub const MAX_ZOOM: u8 = 19;

/// Configuracion completa de la aplicacion: la vista inicial del mapa y, en las mismas
/// claves de primer nivel, la del Drone.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Zoom antes de que se cargue cualquier punto.
    pub initial_zoom: u8,

    /// Zoom al que se acerca el mapa al agregar o cargar puntos.
    pub zoomed_in_level: u8,

    pub initial_center: Coordinate,

    #[serde(flatten)]
    pub drone: DroneConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            initial_zoom: 2,
            zoomed_in_level: 13,
            initial_center: Coordinate::default(),
            drone: DroneConfig::default(),
        }
    }
}

impl SimulatorConfig {
    pub fn read_config(file_path: &str) -> Result<SimulatorConfig, DroneError> {
        let config_file = File::open(file_path)
            .map_err(|e| DroneError::ReadingConfigFileError(format!("{}: {}", file_path, e)))?;

        let reader: BufReader<File> = BufReader::new(config_file);
        let config: SimulatorConfig = serde_json::from_reader(reader)
            .map_err(|e| DroneError::ReadingConfigFileError(format!("{}: {}", file_path, e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DroneError> {
        for (name, zoom) in [
            ("initial_zoom", self.initial_zoom),
            ("zoomed_in_level", self.zoomed_in_level),
        ] {
            if zoom > MAX_ZOOM {
                return Err(DroneError::InvalidConfig(format!(
                    "{} no puede superar {}, vale {}",
                    name, MAX_ZOOM, zoom
                )));
            }
        }

        self.drone.validate()
    }

    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.initial_center, self.initial_zoom)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_01_full_config() {
        let file = write_config(
            r#"{
                "initial_zoom": 4,
                "zoomed_in_level": 15,
                "initial_center": {"lat": -34.61716, "long": -58.368925},
                "tick_period_millis": 500,
                "step_span_degrees": 0.01,
                "clamp_to_geographic_range": true,
                "seed": 1234
            }"#,
        );

        let config = SimulatorConfig::read_config(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.initial_zoom, 4);
        assert_eq!(config.zoomed_in_level, 15);
        assert_eq!(
            config.initial_center,
            Coordinate::new(-34.61716, -58.368925)
        );
        assert_eq!(config.drone.tick_period_millis, 500);
        assert_eq!(config.drone.step_span_degrees, 0.01);
        assert!(config.drone.clamp_to_geographic_range);
        assert_eq!(config.drone.seed, Some(1234));
    }

    #[test]
    fn test_02_bundled_config_matches_defaults() {
        let config = SimulatorConfig::read_config("./src/session/simulator_config.json").unwrap();

        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn test_03_empty_object_is_the_default() {
        let file = write_config("{}");

        let config = SimulatorConfig::read_config(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn test_04_zoom_out_of_range() {
        let file = write_config(r#"{"zoomed_in_level": 25}"#);

        let config = SimulatorConfig::read_config(file.path().to_str().unwrap());

        assert!(matches!(config, Err(DroneError::InvalidConfig(_))));
    }

    #[test]
    fn test_05_broken_json() {
        let file = write_config("{ esto no es json");

        let config = SimulatorConfig::read_config(file.path().to_str().unwrap());

        assert!(matches!(
            config,
            Err(DroneError::ReadingConfigFileError(_))
        ));
    }
}
