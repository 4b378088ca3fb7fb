use crate::utils::coordinate::Coordinate;

/// Marcador con su popup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub position: Coordinate,
    pub popup: String,
}

/// Lo que se dibuja del Drone mientras hay una simulacion: el icono y su recorrido.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneOverlay {
    pub marker: MarkerView,
    pub path: Vec<Coordinate>,
}

/// Todo lo que el mapa tiene que dibujar en un frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub center: Coordinate,
    pub zoom: u8,
    /// Cambia cada vez que hay que recentrar el mapa.
    pub view_revision: u64,
    pub markers: Vec<MarkerView>,
    /// Marcador de la ubicacion que se esta tipeando.
    pub locator: Option<Coordinate>,
    pub drone: Option<DroneOverlay>,
}

impl MapScene {
    /// Marcador mas cercano a `position`, si hay alguno a menos de `tolerance` grados.
    /// Se usa para decidir que popup abrir al hacer click.
    pub fn marker_near(&self, position: Coordinate, tolerance: f64) -> Option<&MarkerView> {
        let drone_marker = self.drone.as_ref().map(|drone| &drone.marker);

        self.markers
            .iter()
            .chain(drone_marker)
            .filter(|marker| marker.position.is_finite())
            .map(|marker| (distance(marker.position, position), marker))
            .filter(|(dist, _)| *dist < tolerance)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, marker)| marker)
    }
}

fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let dist_lat = a.lat - b.lat;
    let dist_long = a.long - b.long;
    (dist_lat * dist_lat + dist_long * dist_long).sqrt()
}
