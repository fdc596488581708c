pub mod config;
pub mod content;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod phone;
pub mod pipeline;
pub mod routes;
pub mod services;
pub mod session;
pub mod templates_structs;
