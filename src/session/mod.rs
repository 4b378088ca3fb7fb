pub mod map_scene;
pub mod simulator_config;
pub mod simulator_session;
