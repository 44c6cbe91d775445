//! The chat session capability consumed by commands.

use std::io::Write;

/// Identifies a registered message handler.
pub type HandlerId = usize;

/// A callback invoked for every incoming message.
pub type MessageHandler = Box<dyn Fn(&MessageEvent) + Send + Sync>;

/// Errors raised by a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session has not been opened.
    #[error("session is not open")]
    NotOpen,

    /// The session was opened twice.
    #[error("session is already open")]
    AlreadyOpen,

    /// Writing the message failed.
    #[error("failed to deliver message: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// A message received from a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    /// Channel the message was posted in.
    pub channel_id: String,
    /// Author of the message.
    pub author_id: String,
    /// Raw message text.
    pub content: String,
}

impl MessageEvent {
    /// Create a new message event.
    pub fn new(
        channel_id: impl Into<String>,
        author_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            author_id: author_id.into(),
            content: content.into(),
        }
    }

    /// A mention of the author, e.g. `<@1234>`.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.author_id)
    }
}

/// A message that was delivered to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Channel the message was sent to.
    pub channel_id: String,
    /// Text that was sent.
    pub content: String,
}

/// The capabilities a command needs from a chat connection.
pub trait Session {
    /// Register a handler called for every incoming message.
    fn add_handler(&mut self, handler: MessageHandler) -> HandlerId;

    /// Remove a previously registered handler. Returns false if unknown.
    fn remove_handler(&mut self, id: HandlerId) -> bool;

    /// Send a text message to a channel.
    fn channel_message_send(&mut self, channel_id: &str, content: &str)
    -> SessionResult<SentMessage>;

    /// Establish the connection.
    fn open(&mut self) -> SessionResult<()>;

    /// Close the connection.
    fn close(&mut self) -> SessionResult<()>;
}

/// A session that writes every message, one per line, to a writer.
pub struct ConsoleSession<W: Write> {
    out: W,
    open: bool,
    handlers: Vec<(HandlerId, MessageHandler)>,
    next_handler: HandlerId,
}

impl<W: Write> ConsoleSession<W> {
    /// Create a closed session writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            open: false,
            handlers: Vec::new(),
            next_handler: 0,
        }
    }

    /// Whether the session is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Pass an incoming message to every registered handler.
    pub fn emit(&self, event: &MessageEvent) {
        for (_, handler) in &self.handlers {
            handler(event);
        }
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Session for ConsoleSession<W> {
    fn add_handler(&mut self, handler: MessageHandler) -> HandlerId {
        let id = self.next_handler;
        self.next_handler += 1;
        self.handlers.push((id, handler));
        id
    }

    fn remove_handler(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    fn channel_message_send(
        &mut self,
        channel_id: &str,
        content: &str,
    ) -> SessionResult<SentMessage> {
        if !self.open {
            return Err(SessionError::NotOpen);
        }
        writeln!(self.out, "{content}")?;
        self.out.flush()?;
        Ok(SentMessage {
            channel_id: channel_id.to_string(),
            content: content.to_string(),
        })
    }

    fn open(&mut self) -> SessionResult<()> {
        if self.open {
            return Err(SessionError::AlreadyOpen);
        }
        self.open = true;
        tracing::debug!("console session opened");
        Ok(())
    }

    fn close(&mut self) -> SessionResult<()> {
        if !self.open {
            return Err(SessionError::NotOpen);
        }
        self.open = false;
        tracing::debug!("console session closed");
        Ok(())
    }
}
