mod analysis;
mod presentation;

pub use analysis::*;
pub use presentation::*;
