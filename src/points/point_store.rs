use std::{fs, path::Path};

use tracing::{debug, info, warn};

use super::{
    csv_loader::{self, LoadReport},
    point_error::{Field, PointError},
    view_state::ViewState,
};
use crate::utils::{coordinate::Coordinate, number_parser::parse_leading_float};

/// Guarda los puntos que cargo el usuario (a mano o desde un archivo), el formulario
/// pendiente y la vista del mapa que se deriva de ellos.
#[derive(Debug, Clone)]
pub struct PointStore {
    points: Vec<Coordinate>,
    view: ViewState,
    zoomed_in_level: u8,

    /// Texto crudo de los inputs de latitud y longitud.
    pub latitude_input: String,
    pub longitude_input: String,

    /// Se prende despues del primer punto agregado a mano, y desde ahi el marcador
    /// de ubicacion sigue a lo que se va tipeando.
    locator_visible: bool,
}

impl PointStore {
    pub fn new(initial_view: ViewState, zoomed_in_level: u8) -> PointStore {
        PointStore {
            points: Vec::new(),
            view: initial_view,
            zoomed_in_level,
            latitude_input: String::new(),
            longitude_input: String::new(),
            locator_visible: false,
        }
    }

    pub fn get_points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn get_view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_locator_visible(&self) -> bool {
        self.locator_visible
    }

    /// Agrega el punto que esta en el formulario.
    ///
    /// Si algun campo esta vacio o no es un numero finito, no se toca nada y se devuelve
    /// el error. Si sale bien, el mapa se centra en el punto nuevo, se limpian los inputs
    /// y se muestra el marcador de ubicacion.
    pub fn add_point(&mut self) -> Result<Coordinate, PointError> {
        let lat = parse_field(Field::Latitude, &self.latitude_input)?;
        let long = parse_field(Field::Longitude, &self.longitude_input)?;

        let point = Coordinate::new(lat, long);
        self.points.push(point);
        self.view.focus_on(point, self.zoomed_in_level);
        self.latitude_input.clear();
        self.longitude_input.clear();
        self.locator_visible = true;

        debug!(lat, long, total = self.points.len(), "point added");
        Ok(point)
    }

    /// Reemplaza todos los puntos por los que se leen de `text`.
    ///
    /// Si queda al menos un punto, el mapa se centra en el ultimo.
    pub fn load_from_text(&mut self, text: &str) -> LoadReport {
        let (points, report) = csv_loader::parse_points(text);
        self.points = points;

        if let Some(last) = self.points.last() {
            self.view.focus_on(*last, self.zoomed_in_level);
        }

        for row in &report.malformed_rows {
            warn!(line = row.line_number, raw = %row.raw, "malformed row in points file");
        }
        info!(
            loaded = report.loaded,
            malformed = report.malformed_rows.len(),
            "points loaded"
        );
        report
    }

    /// Lee el archivo y delega en `load_from_text`. Si no se puede leer, los puntos
    /// quedan como estaban.
    pub fn load_from_file(&mut self, path: &Path) -> Result<LoadReport, PointError> {
        let text = fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "could not read points file");
            PointError::ReadingPointsFile(format!("{}: {}", path.display(), e))
        })?;

        Ok(self.load_from_text(&text))
    }

    /// La posicion que se esta tipeando, si hay que mostrarla en el mapa.
    pub fn pending_location(&self) -> Option<Coordinate> {
        if !self.locator_visible
            || self.latitude_input.is_empty()
            || self.longitude_input.is_empty()
        {
            return None;
        }

        Some(Coordinate::new(
            parse_leading_float(&self.latitude_input),
            parse_leading_float(&self.longitude_input),
        ))
    }
}

fn parse_field(field: Field, input: &str) -> Result<f64, PointError> {
    if input.trim().is_empty() {
        return Err(PointError::EmptyField(field));
    }

    let value = parse_leading_float(input);
    if !value.is_finite() {
        return Err(PointError::InvalidNumber {
            field,
            input: input.to_string(),
        });
    }
    Ok(value)
}
