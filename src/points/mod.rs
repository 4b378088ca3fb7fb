pub mod csv_loader;
pub mod point_error;
pub mod point_store;
pub mod view_state;
