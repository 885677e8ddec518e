pub mod core;
pub mod host;
pub mod runtime;
pub mod toggler;

// Logging setup for embedders
pub mod logging;
