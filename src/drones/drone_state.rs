/// El simulador del Drone puede tener distintos estados:
/// - Idle: todavia no se simulo nada, no hay Drone en el mapa.
/// - Running: el Drone se mueve un paso por cada tick del timer.
/// - Paused: el Drone queda quieto en su ultima posicion hasta que se lo reanude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DroneState {
    #[default]
    Idle,
    Running,
    Paused,
}

impl DroneState {
    pub fn is_active(&self) -> bool {
        *self != DroneState::Idle
    }
}
