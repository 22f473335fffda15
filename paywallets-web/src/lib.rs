pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use routes::{RouteContext, RouteTable, View};
pub use server::run_server;
