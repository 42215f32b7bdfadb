//! Configuration and the user entity model

pub mod config;
pub mod models;
pub mod validation;
