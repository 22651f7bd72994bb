//! Domain logic
//!
//! This module contains the voting domain, independent of terminal and network concerns:
//! - Candidates as read from the contract
//! - User-facing notices
//! - The wallet and contract seams the client talks through
//! - Text helpers for display

pub mod candidate;
pub mod notice;
pub mod text;
pub mod wallet;
