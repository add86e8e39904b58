//! Command dispatch for saludo-bot.
//!
//! Every inbound message that is not the bot's own is handed here after the responder
//! has run, whether or not it produced a reply.

pub mod prefix;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{InboundMessage, Void};

// Traits.

/// Generic command dispatcher trait that dispatchers must implement.
#[async_trait]
pub trait GenericCommandDispatcher: Send + Sync + 'static {
    /// Run whatever command `message` invokes, if any.
    ///
    /// Messages that are not commands are silently accepted.
    async fn dispatch(&self, message: &InboundMessage) -> Void;
}

// Structs.

/// Command dispatcher for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct CommandDispatcher {
    inner: Arc<dyn GenericCommandDispatcher>,
}

impl Deref for CommandDispatcher {
    type Target = dyn GenericCommandDispatcher;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl CommandDispatcher {
    pub fn new(inner: Arc<dyn GenericCommandDispatcher>) -> Self {
        Self { inner }
    }
}
