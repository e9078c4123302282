use crate::radar::domain::{ChannelParams, DeveloperRecord};
use crate::shared::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Identifies one open live-update subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(Uuid);

impl ChannelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChannelId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something the server pushed over a subscription
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelEvent {
    NewDeveloper(DeveloperRecord),
    Disconnected { reason: String },
}

/// An open subscription, owned by whoever opened it
///
/// Events arrive in the order the server sent them. The receiver yields
/// `None` once the subscription is closed and drained.
#[derive(Debug)]
pub struct ChannelHandle {
    id: ChannelId,
    events: mpsc::UnboundedReceiver<ChannelEvent>,
}

impl ChannelHandle {
    pub fn new(id: ChannelId, events: mpsc::UnboundedReceiver<ChannelEvent>) -> Self {
        Self { id, events }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Waits for the next pushed event
    pub async fn next_event(&mut self) -> Option<ChannelEvent> {
        self.events.recv().await
    }
}

/// PushChannel port for live developer updates
///
/// One subscription is opened per search session and closed before the
/// next one opens.
#[async_trait]
pub trait PushChannel: Send + Sync {
    /// Opens a subscription scoped to `params`
    ///
    /// # Errors
    /// Returns an error if the connection cannot be established
    async fn open(&self, params: &ChannelParams) -> Result<ChannelHandle>;

    /// Tears down the subscription; closing an unknown id is a no-op
    fn close(&self, id: ChannelId);
}
