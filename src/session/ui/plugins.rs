use drone_simulator::{
    session::map_scene::{MapScene, MarkerView},
    utils::coordinate::Coordinate,
};
use egui::{Color32, Painter, Pos2, Response, Shape, Stroke};
use walkers::{Plugin, Position, Projector};

/// Radio en pixeles dentro del cual un click selecciona un marcador.
const CLICK_RADIUS_PX: f64 = 12.0;

pub fn to_position(coordinate: Coordinate) -> Position {
    Position::from_lon_lat(coordinate.long, coordinate.lat)
}

fn project(projector: &Projector, coordinate: Coordinate) -> Option<Pos2> {
    if !coordinate.is_finite() {
        return None;
    }
    Some(projector.project(to_position(coordinate)).to_pos2())
}

/// Ultimo centro finito de la escena. Es la posicion que se le pasa al mapa cuando
/// todavia no se movio, asi un punto NaN nunca llega a `walkers`.
#[derive(Default, Clone, Copy)]
pub struct MapAnchor {
    last_finite: Coordinate,
}

impl MapAnchor {
    pub fn follow(&mut self, center: Coordinate) -> Position {
        if center.is_finite() {
            self.last_finite = center;
        }
        to_position(self.last_finite)
    }
}

/// Guarda la ultima posicion clickeada en el mapa y el marcador que quedo seleccionado.
#[derive(Default, Clone)]
pub struct ClickWatcher {
    pub clicked_at: Option<Coordinate>,
    pub selected: Option<MarkerView>,
}

impl ClickWatcher {
    /// Elige el marcador mas cercano al ultimo click. Los grados que equivalen a
    /// `CLICK_RADIUS_PX` dependen del zoom, que es el de `MapMemory::zoom`.
    pub fn select(&mut self, scene: &MapScene, zoom: f32) {
        self.selected = self.clicked_at.and_then(|clicked_at| {
            let degrees_per_px = 360.0 / (256.0 * 2f64.powf(f64::from(zoom)));
            scene
                .marker_near(clicked_at, CLICK_RADIUS_PX * degrees_per_px)
                .cloned()
        });
    }

    /// Muestra el popup del marcador seleccionado.
    pub fn show_popup(&self, ui: &egui::Ui) {
        if let Some(selected) = &self.selected {
            egui::Window::new("Popup")
                .collapsible(false)
                .resizable(false)
                .title_bar(false)
                .anchor(egui::Align2::CENTER_BOTTOM, [0., -10.])
                .show(ui.ctx(), |ui| {
                    ui.label(selected.popup.as_str());
                });
        }
    }
}

impl Plugin for &mut ClickWatcher {
    fn run(&mut self, response: &Response, _painter: Painter, projector: &Projector) {
        if !response.changed() && response.clicked_by(egui::PointerButton::Primary) {
            self.clicked_at = response.interact_pointer_pos().map(|p| {
                let position = projector.unproject(p - response.rect.center());
                Coordinate::new(position.lat(), position.lon())
            });
        }
    }
}

/// Un marcador por cada punto cargado, y el de ubicacion si se esta tipeando uno.
pub struct PointMarkers<'a> {
    pub scene: &'a MapScene,
    pub selected: Option<&'a MarkerView>,
}

impl Plugin for PointMarkers<'_> {
    fn run(&mut self, _response: &Response, painter: Painter, projector: &Projector) {
        for marker in &self.scene.markers {
            if let Some(pos) = project(projector, marker.position) {
                let radius = if self.selected == Some(marker) { 9.0 } else { 7.0 };
                painter.circle(
                    pos,
                    radius,
                    Color32::from_rgb(42, 129, 203),
                    Stroke::new(2.0, Color32::WHITE),
                );
            }
        }

        if let Some(pos) = self
            .scene
            .locator
            .and_then(|locator| project(projector, locator))
        {
            painter.circle_stroke(pos, 10.0, Stroke::new(3.0, Color32::from_rgb(230, 126, 34)));
            painter.circle_filled(pos, 3.0, Color32::from_rgb(230, 126, 34));
        }
    }
}

/// Recorrido del Drone en rojo y el icono del Drone en su posicion actual.
pub struct DroneTrail<'a> {
    pub scene: &'a MapScene,
}

impl Plugin for DroneTrail<'_> {
    fn run(&mut self, _response: &Response, painter: Painter, projector: &Projector) {
        let Some(drone) = &self.scene.drone else {
            return;
        };

        let points: Vec<Pos2> = drone
            .path
            .iter()
            .filter_map(|coordinate| project(projector, *coordinate))
            .collect();
        if points.len() > 1 {
            painter.add(Shape::line(points, Stroke::new(3.0, Color32::RED)));
        }

        if let Some(pos) = project(projector, drone.marker.position) {
            draw_drone(&painter, pos);
        }
    }
}

/// Dibuja un cuadricoptero: cuatro rotores unidos por dos brazos en cruz.
fn draw_drone(painter: &Painter, center: Pos2) {
    let arm = 9.0;
    let body = Color32::from_rgb(40, 40, 40);
    let stroke = Stroke::new(2.5, body);

    painter.line_segment(
        [center + egui::vec2(-arm, -arm), center + egui::vec2(arm, arm)],
        stroke,
    );
    painter.line_segment(
        [center + egui::vec2(-arm, arm), center + egui::vec2(arm, -arm)],
        stroke,
    );
    for (dx, dy) in [(-arm, -arm), (arm, -arm), (-arm, arm), (arm, arm)] {
        painter.circle(
            center + egui::vec2(dx, dy),
            4.5,
            Color32::from_gray(200),
            Stroke::new(1.5, body),
        );
    }
    painter.circle_filled(center, 4.0, body);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with_marker(position: Coordinate) -> MapScene {
        MapScene {
            center: position,
            zoom: 2,
            view_revision: 0,
            markers: vec![MarkerView {
                position,
                popup: position.popup_text(),
            }],
            locator: None,
            drone: None,
        }
    }

    #[test]
    fn test_01_click_radius_shrinks_with_zoom() {
        let scene = scene_with_marker(Coordinate::new(1.0, 1.0));
        let mut watcher = ClickWatcher {
            clicked_at: Some(Coordinate::new(2.0, 2.0)),
            selected: None,
        };

        watcher.select(&scene, 2.0_f32);
        assert_eq!(watcher.selected.as_ref(), scene.markers.first());

        watcher.select(&scene, 13.0_f32);
        assert_eq!(watcher.selected, None);
    }

    #[test]
    fn test_02_no_click_no_selection() {
        let scene = scene_with_marker(Coordinate::new(1.0, 1.0));
        let mut watcher = ClickWatcher::default();

        watcher.select(&scene, 2.0);

        assert_eq!(watcher.selected, None);
    }

    #[test]
    fn test_03_anchor_skips_non_finite_centers() {
        let mut anchor = MapAnchor::default();

        let first = anchor.follow(Coordinate::new(-34.6, -58.4));
        let after_nan = anchor.follow(Coordinate::new(f64::NAN, 3.0));

        assert_eq!(first.lat(), -34.6);
        assert_eq!(first.lon(), -58.4);
        assert_eq!(after_nan.lat(), -34.6);
        assert_eq!(after_nan.lon(), -58.4);
    }

    #[test]
    fn test_04_anchor_starts_at_the_origin() {
        let mut anchor = MapAnchor::default();

        let position = anchor.follow(Coordinate::new(f64::NAN, f64::NAN));

        assert_eq!(position.lat(), 0.0);
        assert_eq!(position.lon(), 0.0);
    }
}
