pub mod generator;
pub mod logger;
pub mod spec_loader;
pub mod types;
