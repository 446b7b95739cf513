pub mod configuration;
pub mod domain;
mod error_handling;
pub mod reservation_form;
pub mod routes;
pub mod sheet_client;
pub mod startup;
pub mod telemetry;
