use std::path::Path;

use rand::{rngs::StdRng, Rng};
use tracing::debug;

use super::{
    map_scene::{DroneOverlay, MapScene, MarkerView},
    simulator_config::SimulatorConfig,
};
use crate::{
    drones::{
        drone::DroneSimulator, drone_error::DroneError, drone_state::DroneState,
    },
    points::{
        csv_loader::LoadReport, point_error::PointError, point_store::PointStore,
        view_state::ViewState,
    },
    utils::{
        clock::{Clock, SystemClock},
        coordinate::Coordinate,
    },
};

pub const DRONE_POPUP: &str = "Drone";

/// Estado completo de la pantalla del simulador: los puntos cargados, la vista del mapa
/// y el Drone. Cada control de la UI llama a un metodo de la sesion, y el mapa se dibuja
/// a partir de `scene`.
pub struct SimulatorSession<C: Clock = SystemClock, R: Rng = StdRng> {
    points: PointStore,
    drone: DroneSimulator<R>,
    clock: C,
    last_report: Option<LoadReport>,
}

impl<C: Clock> SimulatorSession<C, StdRng> {
    pub fn new(config: &SimulatorConfig, clock: C) -> Result<SimulatorSession<C, StdRng>, DroneError> {
        SimulatorSession::with_rng(config, clock, config.drone.build_rng())
    }
}

impl<C: Clock, R: Rng> SimulatorSession<C, R> {
    /// Igual que `new`, pero con un generador aleatorio a eleccion.
    pub fn with_rng(
        config: &SimulatorConfig,
        clock: C,
        rng: R,
    ) -> Result<SimulatorSession<C, R>, DroneError> {
        config.validate()?;
        Ok(SimulatorSession {
            points: PointStore::new(config.initial_view(), config.zoomed_in_level),
            drone: DroneSimulator::with_rng(&config.drone, rng)?,
            clock,
            last_report: None,
        })
    }

    pub fn get_points(&self) -> &[Coordinate] {
        self.points.get_points()
    }

    pub fn get_view(&self) -> &ViewState {
        self.points.get_view()
    }

    pub fn get_drone(&self) -> &DroneSimulator<R> {
        &self.drone
    }

    pub fn get_last_report(&self) -> Option<&LoadReport> {
        self.last_report.as_ref()
    }

    pub fn latitude_input_mut(&mut self) -> &mut String {
        &mut self.points.latitude_input
    }

    pub fn longitude_input_mut(&mut self) -> &mut String {
        &mut self.points.longitude_input
    }

    pub fn set_latitude_input(&mut self, value: &str) {
        self.points.latitude_input = value.to_string();
    }

    pub fn set_longitude_input(&mut self, value: &str) {
        self.points.longitude_input = value.to_string();
    }

    /// Boton "Add Data Point".
    pub fn add_point(&mut self) -> Result<Coordinate, PointError> {
        self.points.add_point().map_err(|e| {
            debug!(error = %e, "data point ignored");
            e
        })
    }

    pub fn load_points_from_text(&mut self, text: &str) -> LoadReport {
        let report = self.points.load_from_text(text);
        self.last_report = Some(report.clone());
        report
    }

    /// Carga de archivo, ya sea desde el input de path o soltando el archivo en la ventana.
    pub fn load_points_from_file(&mut self, path: &Path) -> Result<LoadReport, PointError> {
        let report = self.points.load_from_file(path)?;
        self.last_report = Some(report.clone());
        Ok(report)
    }

    /// Boton "Simulate".
    pub fn simulate(&mut self) {
        let now = self.clock.now();
        self.drone.start(now);
    }

    /// Boton "Pause"/"Resume".
    pub fn pause_toggle(&mut self) -> Result<DroneState, DroneError> {
        let now = self.clock.now();
        self.drone.pause_toggle(now)
    }

    pub fn pause_label(&self) -> &'static str {
        match self.drone.get_state() {
            DroneState::Paused => "Resume",
            _ => "Pause",
        }
    }

    /// Se llama en cada frame: avanza el Drone todos los pasos que vencieron.
    pub fn update(&mut self) -> u64 {
        let now = self.clock.now();
        self.drone.update(now)
    }

    /// Cuanto esperar hasta el proximo paso del Drone, para pedir el repintado justo.
    pub fn time_until_next_tick(&self) -> Option<std::time::Duration> {
        self.drone.time_until_next_tick(self.clock.now())
    }

    pub fn scene(&self) -> MapScene {
        let view = self.points.get_view();
        let markers = self
            .points
            .get_points()
            .iter()
            .map(|point| MarkerView {
                position: *point,
                popup: point.popup_text(),
            })
            .collect();

        let drone = if self.drone.get_state().is_active() {
            Some(DroneOverlay {
                marker: MarkerView {
                    position: self.drone.get_position(),
                    popup: DRONE_POPUP.to_string(),
                },
                path: self.drone.get_path().to_vec(),
            })
        } else {
            None
        };

        MapScene {
            center: view.get_center(),
            zoom: view.get_zoom(),
            view_revision: view.get_revision(),
            markers,
            locator: self.points.pending_location(),
            drone,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::utils::clock::ManualClock;

    fn setup_session() -> (SimulatorSession<ManualClock, StdRng>, ManualClock) {
        let clock = ManualClock::default();
        let session = SimulatorSession::with_rng(
            &SimulatorConfig::default(),
            clock.clone(),
            StdRng::seed_from_u64(17),
        )
        .unwrap();
        (session, clock)
    }

    #[test]
    fn test_01_new_session_is_empty() {
        let (session, _clock) = setup_session();
        let scene = session.scene();

        assert!(scene.markers.is_empty());
        assert_eq!(scene.locator, None);
        assert_eq!(scene.drone, None);
        assert_eq!(scene.center, Coordinate::default());
        assert_eq!(scene.zoom, 2);
        assert_eq!(session.pause_label(), "Pause");
    }

    #[test]
    fn test_02_points_become_markers_with_popups() {
        let (mut session, _clock) = setup_session();
        session.set_latitude_input("-34.6");
        session.set_longitude_input("-58.4");
        session.add_point().unwrap();

        let scene = session.scene();

        assert_eq!(
            scene.markers,
            vec![MarkerView {
                position: Coordinate::new(-34.6, -58.4),
                popup: "Latitude: -34.6, Longitude: -58.4".to_string(),
            }]
        );
        assert_eq!(scene.center, Coordinate::new(-34.6, -58.4));
        assert_eq!(scene.zoom, 13);
    }

    #[test]
    fn test_03_locator_follows_typing_after_first_point() {
        let (mut session, _clock) = setup_session();
        session.set_latitude_input("1");
        session.set_longitude_input("2");
        assert_eq!(session.scene().locator, None);

        session.add_point().unwrap();
        session.latitude_input_mut().push_str("5");
        session.longitude_input_mut().push_str("6");

        assert_eq!(session.scene().locator, Some(Coordinate::new(5.0, 6.0)));
    }

    #[test]
    fn test_04_drone_is_drawn_while_simulating() {
        let (mut session, clock) = setup_session();
        session.simulate();
        clock.advance_millis(3000);
        assert_eq!(session.update(), 3);

        let scene = session.scene();
        let drone = scene.drone.unwrap();
        assert_eq!(drone.path.len(), 3);
        assert_eq!(drone.marker.position, *drone.path.last().unwrap());
        assert_eq!(drone.marker.popup, "Drone");
    }

    #[test]
    fn test_05_pause_label_follows_state() {
        let (mut session, _clock) = setup_session();
        assert_eq!(session.pause_toggle(), Err(DroneError::NotStarted));

        session.simulate();
        session.pause_toggle().unwrap();
        assert_eq!(session.pause_label(), "Resume");
        assert!(session.scene().drone.is_some());

        session.pause_toggle().unwrap();
        assert_eq!(session.pause_label(), "Pause");
    }

    #[test]
    fn test_06_simulate_keeps_loaded_points() {
        let (mut session, _clock) = setup_session();
        session.load_points_from_text("1,2\n3,4");

        session.simulate();

        assert_eq!(session.get_points().len(), 2);
        assert!(session.get_last_report().unwrap().is_clean());
    }

    #[test]
    fn test_07_next_tick_deadline() {
        let (mut session, clock) = setup_session();
        assert_eq!(session.time_until_next_tick(), None);

        session.simulate();
        clock.advance_millis(400);

        assert_eq!(
            session.time_until_next_tick(),
            Some(std::time::Duration::from_millis(600))
        );
    }

    #[test]
    fn test_08_invalid_drone_config_is_rejected_by_both_constructors() {
        let mut config = SimulatorConfig::default();
        config.drone.step_span_degrees = 0.0;

        assert!(matches!(
            SimulatorSession::new(&config, ManualClock::default()),
            Err(DroneError::InvalidConfig(_))
        ));
        assert!(matches!(
            SimulatorSession::with_rng(&config, ManualClock::default(), StdRng::seed_from_u64(1)),
            Err(DroneError::InvalidConfig(_))
        ));
    }
}
