//! Event handling and user interactions for saludo-bot.
//!
//! This module provides functionality for handling inbound chat messages:
//! - Running the incidental-message responder
//! - Sending canned replies
//! - Handing every message to command dispatch

pub mod message_event;
