use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng};
use tracing::{debug, info};

use super::{
    drone_config::DroneConfig, drone_error::DroneError, drone_state::DroneState,
    random_walk::RandomWalk,
};
use crate::utils::{
    coordinate::{Coordinate, ORIGIN},
    timer::TickTimer,
};

/// Drone simulado que hace un recorrido aleatorio.
///
/// El timer de ticks vive adentro del Drone y esta armado exactamente mientras el
/// estado es `Running`: cada transicion lo arma o lo desarma, y al soltar el Drone
/// no queda ningun timer colgado.
#[derive(Debug, Clone)]
pub struct DroneSimulator<R: Rng = StdRng> {
    ///posicion actual del Drone.
    position: Coordinate,

    /// Todas las posiciones por las que paso desde que empezo la simulacion.
    /// El origen no forma parte del recorrido.
    path: Vec<Coordinate>,

    drone_state: DroneState,

    elapsed_ticks: u64,

    timer: TickTimer,

    walk: RandomWalk,

    rng: R,
}

impl DroneSimulator<StdRng> {
    /// Arma el simulador a partir de la configuracion, con su propio generador.
    pub fn from_config(config: &DroneConfig) -> Result<DroneSimulator<StdRng>, DroneError> {
        DroneSimulator::with_rng(config, config.build_rng())
    }
}

impl<R: Rng> DroneSimulator<R> {
    /// Igual que `from_config`, pero con el generador que se le pase. La semilla de la
    /// configuracion se ignora.
    pub fn with_rng(config: &DroneConfig, rng: R) -> Result<DroneSimulator<R>, DroneError> {
        config.validate()?;
        Ok(DroneSimulator::new(
            TickTimer::new(config.get_tick_period()),
            config.get_random_walk(),
            rng,
        ))
    }

    pub fn new(timer: TickTimer, walk: RandomWalk, rng: R) -> DroneSimulator<R> {
        DroneSimulator {
            position: ORIGIN,
            path: Vec::new(),
            drone_state: DroneState::Idle,
            elapsed_ticks: 0,
            timer,
            walk,
            rng,
        }
    }

    pub fn get_position(&self) -> Coordinate {
        self.position
    }

    pub fn get_path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn get_state(&self) -> DroneState {
        self.drone_state
    }

    pub fn get_elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Empieza una simulacion nueva desde cualquier estado: el Drone vuelve al origen,
    /// se borra el recorrido y el primer paso llega un periodo despues de `now`.
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.position = ORIGIN;
        self.path.clear();
        self.elapsed_ticks = 0;
        self.drone_state = DroneState::Running;
        self.timer.arm(now);

        info!("drone simulation started");
    }

    /// Alterna entre `Running` y `Paused`.
    ///
    /// Al reanudar, el proximo paso llega un periodo completo despues de `now`.
    /// Si la simulacion no empezo, no hace nada y devuelve `DroneError::NotStarted`.
    pub fn pause_toggle(&mut self, now: DateTime<Utc>) -> Result<DroneState, DroneError> {
        match self.drone_state {
            DroneState::Idle => return Err(DroneError::NotStarted),
            DroneState::Running => {
                self.timer.disarm();
                self.drone_state = DroneState::Paused;
                info!(ticks = self.elapsed_ticks, "drone simulation paused");
            }
            DroneState::Paused => {
                self.timer.arm(now);
                self.drone_state = DroneState::Running;
                info!(ticks = self.elapsed_ticks, "drone simulation resumed");
            }
        }
        Ok(self.drone_state)
    }

    /// Ejecuta todos los pasos que vencieron hasta `now` y devuelve cuantos fueron.
    pub fn update(&mut self, now: DateTime<Utc>) -> u64 {
        if self.drone_state != DroneState::Running {
            return 0;
        }

        let due = self.timer.due_ticks(now);
        for _ in 0..due {
            self.tick();
        }
        due
    }

    /// Tiempo hasta el proximo paso, o `None` si el Drone no se esta moviendo.
    pub fn time_until_next_tick(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        self.timer.time_until_next(now)
    }

    fn tick(&mut self) {
        let next = self.walk.next_position(self.position, &mut self.rng);
        self.path.push(next);
        self.position = next;
        self.elapsed_ticks += 1;

        debug!(
            tick = self.elapsed_ticks,
            lat = next.lat,
            long = next.long,
            "drone moved"
        );
    }
}
