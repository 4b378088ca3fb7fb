use std::fmt;

use thiserror::Error;

/// Campo del formulario de carga de puntos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Latitude => write!(f, "latitud"),
            Field::Longitude => write!(f, "longitud"),
        }
    }
}

/// Errores que se pueden lanzar desde la carga de puntos.
#[derive(Debug, Error, PartialEq)]
pub enum PointError {
    #[error("Error: el campo {0} esta vacio.")]
    EmptyField(Field),

    #[error("Error: {input:?} no es una {field} valida.")]
    InvalidNumber { field: Field, input: String },

    #[error("Error: no se ha podido leer el archivo de puntos: {0}")]
    ReadingPointsFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_error_display() {
        let error = PointError::EmptyField(Field::Latitude);
        assert_eq!(format!("{}", error), "Error: el campo latitud esta vacio.");

        let error = PointError::InvalidNumber {
            field: Field::Longitude,
            input: "abc".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Error: \"abc\" no es una longitud valida."
        );

        let error = PointError::ReadingPointsFile("not found".to_string());
        assert_eq!(
            format!("{}", error),
            "Error: no se ha podido leer el archivo de puntos: not found"
        );
    }
}
