pub mod application;
pub mod configuration;
pub mod routes;
pub mod telemetry;

pub mod domain;
pub mod email_client;
pub mod forms;
pub mod utils;
