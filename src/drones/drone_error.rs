use thiserror::Error;

/// Errores que se pueden lanzar desde el simulador del Drone.
#[derive(Debug, Error, PartialEq)]
pub enum DroneError {
    #[error("Error: no se ha podido leer el archivo de configuracion del simulador: {0}")]
    ReadingConfigFileError(String),

    #[error("Error: configuracion invalida: {0}")]
    InvalidConfig(String),

    #[error("Error: la simulacion todavia no empezo.")]
    NotStarted,
}
