pub mod controller;
pub mod geometry;
pub mod surface;
pub mod types;
#[cfg(feature = "web")]
pub mod web;

pub use controller::*;
pub use geometry::*;
pub use surface::*;
pub use types::*;
