pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// A chat message as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// The channel the message was posted in.
    pub channel_id: String,
    /// The author's stable identifier.
    pub author_id: String,
    /// The author's display name, used when greeting back.
    pub author_name: String,
    /// The raw message text, exactly as received.
    pub text: String,
    /// Whether the message was authored by the bot itself (or posted through a webhook).
    pub is_self_authored: bool,
}

impl InboundMessage {
    /// Create a message from a regular (non-bot) author.
    pub fn new(channel_id: impl Into<String>, author_id: impl Into<String>, author_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            author_id: author_id.into(),
            author_name: author_name.into(),
            text: text.into(),
            is_self_authored: false,
        }
    }

    /// Mark the message as self-authored.
    pub fn self_authored(mut self) -> Self {
        self.is_self_authored = true;
        self
    }
}
