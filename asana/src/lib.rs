//! Typed client for the slice of the Asana REST API the dashboard reads.

pub mod client;
pub mod config;
pub mod types;

pub use client::{Client, Error};
pub use config::{Config, Credentials};
