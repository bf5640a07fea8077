mod auth;
mod bookings;
pub mod client;
mod contents;
mod dashboard;
mod members;
mod services;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
