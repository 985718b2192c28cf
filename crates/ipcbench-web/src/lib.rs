//! HTTP control surface for the IPC bench.
//!
//! Thin delivery layer over [`ipcbench_core`]: a static page, a health
//! endpoint, and a benchmark trigger, all JSON except the page itself.

pub mod page;
pub mod routes;

pub use routes::{AppState, router};
