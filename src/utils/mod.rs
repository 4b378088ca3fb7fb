pub mod clock;
pub mod coordinate;
pub mod number_parser;
pub mod timer;
