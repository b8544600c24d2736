pub mod api;
pub mod auth;
pub mod blood;
pub mod contact;
pub mod data;
pub mod models;
pub mod organ;
pub mod pages;
pub mod responses;
pub mod router;
pub mod state;
pub mod templates;

#[cfg(test)]
mod tests;

pub use state::AppState;
