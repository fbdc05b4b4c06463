mod config;
mod analysis;

pub use config::*;
pub use analysis::*;
