mod attendance;
mod audit_log;
mod auth;
pub mod client;
mod dashboard;
mod schedule_users;
mod schedules;
pub mod token;
pub mod types;
mod users;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
