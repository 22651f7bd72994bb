//! # Ballotui - On-chain voting TUI client
//!
//! A terminal client for a deployed voting contract, built with Rust and Ratatui.
//! It connects a wallet, lists the contract's candidates and submits vote
//! transactions. The contract itself is an external service reached through a
//! fixed ABI.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (contract calls, terminal control)
//! - **View** (`presentation`): rendering based on current state
//!
//! Contract I/O runs in [`infrastructure::ballot_service::BallotService`], which
//! reports back through [`core::raw_msg::RawMsg`].
//!
//! ## Example Usage
//!
//! ```rust
//! use ballotui::core::{msg::{ballot::BallotMsg, Msg}, state::AppState, update::update, cmd::Cmd};
//!
//! let state = AppState::default();
//! let (state, cmds) = update(Msg::Ballot(BallotMsg::Load), state);
//!
//! assert!(state.system.is_loading);
//! assert_eq!(cmds, vec![Cmd::LoadBallot]);
//! ```

#![deny(warnings)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
