//! Core components, types, and utilities for the saludo-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Fixed reply texts for triggers and commands.
//! - Common types and result handling.

pub mod config;
pub mod replies;
pub mod types;
