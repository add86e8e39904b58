//! Library root for `saludo-bot`.
//!
//! Saludo-bot is a small chat bot that:
//! - Answers greetings, "how are you" questions and compliments with canned replies
//! - Avoids repeating itself when the same person sends the same text in quick succession
//! - Runs a handful of prefix commands (`!info`, `!dado`, `!moneda`, `!pregunta`, `!numero`)
//!
//! The chat transport and the command dispatcher sit behind traits so that each can be
//! swapped or mocked independently of the responder.

pub mod base;
pub mod interaction;
pub mod responder;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the saludo-bot runtime:
/// - Creates the runtime context with the chat client and command dispatcher
/// - Starts the main event loop for processing messages
pub async fn start(config: Config) -> Void {
    info!("Starting saludo-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
