use async_trait::async_trait;
use devradar::ports::outbound::ChannelId;
use devradar::prelude::*;
use devradar::radar::domain::ChannelParams;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Default)]
struct ChannelLog {
    opened: Vec<(ChannelId, ChannelParams)>,
    closed: Vec<ChannelId>,
}

/// Mock PushChannel that replays scripted events on every subscription
///
/// Delays are measured from the moment the subscription opens.
#[derive(Default, Clone)]
pub struct MockPushChannel {
    script: Vec<(Duration, ChannelEvent)>,
    fail_open: bool,
    never_answers: bool,
    log: Arc<Mutex<ChannelLog>>,
}

impl MockPushChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_push(mut self, delay_ms: u64, event: ChannelEvent) -> Self {
        self.script.push((Duration::from_millis(delay_ms), event));
        self
    }

    pub fn failing() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    /// A channel whose server never answers the subscription request
    pub fn hanging() -> Self {
        Self {
            never_answers: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<(ChannelId, ChannelParams)> {
        self.log.lock().unwrap().opened.clone()
    }

    pub fn closed(&self) -> Vec<ChannelId> {
        self.log.lock().unwrap().closed.clone()
    }
}

#[async_trait]
impl PushChannel for MockPushChannel {
    async fn open(&self, params: &ChannelParams) -> Result<ChannelHandle> {
        if self.fail_open {
            anyhow::bail!("subscription refused");
        }
        if self.never_answers {
            std::future::pending::<()>().await;
        }

        let id = ChannelId::new();
        self.log.lock().unwrap().opened.push((id, params.clone()));

        let (sender, receiver) = mpsc::unbounded_channel();
        let script = self.script.clone();
        tokio::spawn(async move {
            let mut elapsed = Duration::ZERO;
            for (at, event) in script {
                tokio::time::sleep(at.saturating_sub(elapsed)).await;
                elapsed = at.max(elapsed);
                if sender.send(event).is_err() {
                    break;
                }
            }
            // keep the subscription open until it is closed
            sender.closed().await;
        });

        Ok(ChannelHandle::new(id, receiver))
    }

    fn close(&self, id: ChannelId) {
        self.log.lock().unwrap().closed.push(id);
    }
}
