use crate::utils::{coordinate::Coordinate, number_parser::parse_leading_float};

/// Fila del archivo que no se pudo leer como `lat,lng`.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedRow {
    /// Numero de linea, empezando en 1.
    pub line_number: usize,
    pub raw: String,
}

/// Resultado de una carga de puntos desde texto.
///
/// Las filas malformadas igual generan un punto (con `NaN`); el reporte solo las informa.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub loaded: usize,
    pub malformed_rows: Vec<MalformedRow>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.malformed_rows.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_clean() {
            format!("Loaded {} points.", self.loaded)
        } else {
            let lines: Vec<String> = self
                .malformed_rows
                .iter()
                .map(|row| row.line_number.to_string())
                .collect();
            format!(
                "Loaded {} points, {} malformed (lines {}).",
                self.loaded,
                self.malformed_rows.len(),
                lines.join(", ")
            )
        }
    }
}

/// Convierte el contenido de un CSV (`lat,lng` por linea, separado por `\n`) en coordenadas.
///
/// Se genera exactamente una coordenada por linea, incluso para las lineas vacias: un
/// campo que no se puede parsear queda como `NaN`.
pub fn parse_points(text: &str) -> (Vec<Coordinate>, LoadReport) {
    let mut points = Vec::new();
    let mut report = LoadReport::default();

    for (index, line) in text.split('\n').enumerate() {
        let mut fields = line.splitn(3, ',');
        let lat = fields.next().map_or(f64::NAN, parse_leading_float);
        let long = fields.next().map_or(f64::NAN, parse_leading_float);

        if lat.is_nan() || long.is_nan() {
            report.malformed_rows.push(MalformedRow {
                line_number: index + 1,
                raw: line.to_string(),
            });
        }
        points.push(Coordinate::new(lat, long));
    }

    report.loaded = points.len();
    (points, report)
}
