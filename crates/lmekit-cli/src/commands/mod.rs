pub mod charges;
pub mod check_distance;
pub mod mapping;
pub mod minimize;
pub mod neighbors;
pub mod resolve;
pub mod substitute;
