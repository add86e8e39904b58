//! Service integrations for saludo-bot.
//!
//! This module contains the collaborators the bot talks to:
//! - Chat services (e.g., the console transport)
//! - Command dispatch (e.g., the prefix dispatcher)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod command;
