pub mod adapters;
pub mod client;
mod common;
pub mod config;
pub mod database;
pub mod dependencies;
pub mod domain;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
