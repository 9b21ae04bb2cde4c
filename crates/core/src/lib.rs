pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod palette;
pub mod synthetic;

pub use config::Config;
pub use dataset::Dataset;
pub use error::*;
pub use model::*;
