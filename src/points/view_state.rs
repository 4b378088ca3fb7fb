use crate::utils::coordinate::Coordinate;

/// Centro y zoom del mapa.
///
/// `revision` aumenta cada vez que el estado cambia, para que el mapa sepa cuando tiene
/// que recentrarse sin pisar lo que el usuario hizo con el mouse entre medio.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    center: Coordinate,
    zoom: u8,
    revision: u64,
}

impl ViewState {
    pub fn new(center: Coordinate, zoom: u8) -> ViewState {
        ViewState {
            center,
            zoom,
            revision: 0,
        }
    }

    pub fn focus_on(&mut self, center: Coordinate, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
        self.revision += 1;
    }

    pub fn get_center(&self) -> Coordinate {
        self.center
    }

    pub fn get_zoom(&self) -> u8 {
        self.zoom
    }

    pub fn get_revision(&self) -> u64 {
        self.revision
    }
}
