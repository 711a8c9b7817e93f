pub mod config;
pub mod error;
pub mod mockgen;
pub mod offset;
