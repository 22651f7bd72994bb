//! Presentation layer
//!
//! Stateless components that draw [`AppState`](crate::core::state::AppState).

pub mod components;
