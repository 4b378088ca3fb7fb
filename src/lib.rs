pub mod drones {
    pub mod drone;
    pub mod drone_config;
    pub mod drone_error;
    pub mod drone_state;
    pub mod random_walk;
}

pub mod points;
pub mod session;
pub mod utils;
