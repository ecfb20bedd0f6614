pub mod calculations;
pub mod models;

pub use calculations::calculate;
pub use models::*;
