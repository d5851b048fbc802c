pub mod auth;
pub mod config;
pub mod domain;
pub mod export;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
