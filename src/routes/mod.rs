mod contact;
mod healthcheck;

pub use contact::*;
pub use healthcheck::*;
