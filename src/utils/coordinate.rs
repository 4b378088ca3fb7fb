use serde::{Deserialize, Serialize};

/// Un par (latitud, longitud) en grados.
///
/// No se valida el rango: los valores fuera de [-90, 90] / [-180, 180] y los `NaN`
/// se guardan tal cual llegan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

pub const ORIGIN: Coordinate = Coordinate {
    lat: 0.0,
    long: 0.0,
};

impl Coordinate {
    pub fn new(lat: f64, long: f64) -> Coordinate {
        Coordinate { lat, long }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.long.is_finite()
    }

    /// Devuelve una copia desplazada en los offsets dados.
    pub fn offset_by(&self, delta_lat: f64, delta_long: f64) -> Coordinate {
        Coordinate::new(self.lat + delta_lat, self.long + delta_long)
    }

    /// Recorta la latitud a [-90, 90] y la longitud a [-180, 180].
    pub fn clamped_to_geographic_range(&self) -> Coordinate {
        Coordinate::new(self.lat.clamp(-90.0, 90.0), self.long.clamp(-180.0, 180.0))
    }

    /// Texto que se muestra en el popup de cada marcador.
    pub fn popup_text(&self) -> String {
        format!("Latitude: {}, Longitude: {}", self.lat, self.long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_01_coordinate_new() {
        let coordinate = Coordinate::new(1.0, 2.0);
        assert_eq!(coordinate.lat, 1.0);
        assert_eq!(coordinate.long, 2.0);
    }

    #[test]
    fn test_02_offset_by() {
        let moved = ORIGIN.offset_by(1.5, -2.0);
        assert_eq!(moved, Coordinate::new(1.5, -2.0));
    }

    #[test]
    fn test_03_clamp() {
        let clamped = Coordinate::new(120.0, -200.0).clamped_to_geographic_range();
        assert_eq!(clamped, Coordinate::new(90.0, -180.0));

        let untouched = Coordinate::new(-33.5, 151.2).clamped_to_geographic_range();
        assert_eq!(untouched, Coordinate::new(-33.5, 151.2));
    }

    #[test]
    fn test_04_popup_text() {
        let coordinate = Coordinate::new(-34.6, -58.37);
        assert_eq!(coordinate.popup_text(), "Latitude: -34.6, Longitude: -58.37");
    }

    #[test]
    fn test_05_nan_is_not_finite() {
        assert!(!Coordinate::new(f64::NAN, 1.0).is_finite());
        assert!(Coordinate::new(3.0, 1.0).is_finite());
    }
}
