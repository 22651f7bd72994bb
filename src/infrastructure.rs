//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing and configuration
//! - Wallet, contract binding and the ballot service

pub mod ballot_service;
pub mod cli;
pub mod config;
pub mod contract;
pub mod keybindings;
pub mod tui;
pub mod wallet;
