pub mod configuration;
pub mod contact;
pub mod delivery;
pub mod domain;
pub mod email_client;
pub mod routes;
pub mod startup;
pub mod telemetry;
