pub mod config;
pub mod engine;
pub mod logging;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
