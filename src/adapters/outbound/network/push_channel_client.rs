use super::server_url::{endpoint_url, parse_server_url};
use crate::ports::outbound::{ChannelEvent, ChannelHandle, ChannelId, PushChannel};
use crate::radar::domain::{ChannelParams, DeveloperRecord};
use crate::shared::security::MAX_PUSH_LINE_LENGTH;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::header::ACCEPT;
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::AbortHandle;

/// Event name the server uses for a newly matching developer
const NEW_DEV_EVENT: &str = "new-dev";

/// Splits a byte stream into complete lines
///
/// Bytes after the last newline are kept until more data (or the end of
/// the stream) arrives. A pending line longer than the limit is an error.
#[derive(Debug)]
pub(crate) struct LineDecoder {
    buffer: Vec<u8>,
    limit: usize,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::with_limit(MAX_PUSH_LINE_LENGTH)
    }
}

impl LineDecoder {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            buffer: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<String>> {
        self.buffer.extend_from_slice(chunk);
        let mut lines = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            lines.push(String::from_utf8_lossy(&line).trim().to_string());
        }
        if self.buffer.len() > self.limit {
            self.buffer.clear();
            anyhow::bail!(
                "Push message exceeds the maximum line length of {} bytes",
                self.limit
            );
        }
        Ok(lines)
    }

    pub fn finish(&mut self) -> Option<String> {
        let rest = String::from_utf8_lossy(&self.buffer).trim().to_string();
        self.buffer.clear();
        (!rest.is_empty()).then_some(rest)
    }
}

/// Parses one stream line into an event
///
/// Accepts a bare developer record, an `{"event", "data"}` envelope, or
/// either of those behind an SSE `data:` prefix. Blank lines, SSE comments
/// and other event names yield `Ok(None)`.
pub(crate) fn parse_line(line: &str) -> Result<Option<ChannelEvent>> {
    let line = line.trim();
    let payload = match line.strip_prefix("data:") {
        Some(rest) => rest.trim(),
        None if line.is_empty() || line.starts_with(':') || line.starts_with("event:") => {
            return Ok(None)
        }
        None => line,
    };
    if payload.is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| anyhow::anyhow!("Malformed push message: {}", e))?;

    let record_value = match value.get("event").and_then(|e| e.as_str()) {
        Some(NEW_DEV_EVENT) => match value.get("data") {
            Some(data) => data.clone(),
            None => anyhow::bail!("Push message '{}' has no data", NEW_DEV_EVENT),
        },
        Some(_) => return Ok(None),
        None => value,
    };

    let record = DeveloperRecord::from_value(record_value)
        .map_err(|e| anyhow::anyhow!("Malformed developer in push message: {}", e))?;
    Ok(Some(ChannelEvent::NewDeveloper(record)))
}

/// HttpPushChannel adapter for live developer updates
///
/// Each subscription is a long-lived `GET /subscribe` whose body is a
/// stream of newline-delimited JSON messages. A reader task per
/// subscription forwards parsed events to the handle; closing the
/// subscription aborts the task, which drops the connection.
pub struct HttpPushChannel {
    client: reqwest::Client,
    base_url: Url,
    response_timeout: Duration,
    readers: Arc<DashMap<ChannelId, AbortHandle>>,
}

impl HttpPushChannel {
    /// Creates a channel client
    ///
    /// `timeout` bounds connection setup and the wait for response headers;
    /// the streamed body itself is never timed out.
    pub fn new(server: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("devradar/{}", version);
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: parse_server_url(server)?,
            response_timeout: timeout,
            readers: Arc::new(DashMap::new()),
        })
    }

    fn subscribe_url(&self, params: &ChannelParams) -> Result<Url> {
        endpoint_url(&self.base_url, "subscribe", &params.to_pairs())
    }

    /// Number of subscriptions with a running reader
    pub fn open_count(&self) -> usize {
        self.readers.len()
    }

    async fn pump(
        mut response: reqwest::Response,
        events: &mpsc::UnboundedSender<ChannelEvent>,
    ) -> String {
        let mut decoder = LineDecoder::default();
        loop {
            let lines = match response.chunk().await {
                Ok(Some(bytes)) => match decoder.push(&bytes) {
                    Ok(lines) => lines,
                    Err(e) => return format!("stream error: {}", e),
                },
                Ok(None) => {
                    let rest = decoder.finish().into_iter().collect::<Vec<_>>();
                    if !Self::forward(&rest, events) {
                        return "subscription closed".to_string();
                    }
                    return "server ended the stream".to_string();
                }
                Err(e) => return format!("stream error: {}", e),
            };
            if !Self::forward(&lines, events) {
                return "subscription closed".to_string();
            }
        }
    }

    /// Returns `false` once the handle has been dropped
    fn forward(lines: &[String], events: &mpsc::UnboundedSender<ChannelEvent>) -> bool {
        for line in lines {
            match parse_line(line) {
                Ok(Some(event)) => {
                    if events.send(event).is_err() {
                        return false;
                    }
                }
                Ok(None) => {}
                Err(e) => eprintln!("⚠️  Warning: {}", e),
            }
        }
        true
    }
}

#[async_trait]
impl PushChannel for HttpPushChannel {
    async fn open(&self, params: &ChannelParams) -> Result<ChannelHandle> {
        let url = self.subscribe_url(params)?;
        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/x-ndjson")
            .send();
        let response = tokio::time::timeout(self.response_timeout, request)
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "Radar server did not answer the live-update request within {}s",
                    self.response_timeout.as_secs_f64()
                )
            })??;

        if !response.status().is_success() {
            anyhow::bail!(
                "Radar server refused live updates with status code {}",
                response.status()
            );
        }

        let (sender, receiver) = mpsc::unbounded_channel();
        let (registered, wait_registered) = oneshot::channel::<()>();
        let id = ChannelId::new();
        let readers = Arc::clone(&self.readers);
        let task = tokio::spawn(async move {
            // the reader must be tracked before it can untrack itself
            let _ = wait_registered.await;
            let reason = Self::pump(response, &sender).await;
            let _ = sender.send(ChannelEvent::Disconnected { reason });
            readers.remove(&id);
        });
        self.readers.insert(id, task.abort_handle());
        let _ = registered.send(());

        Ok(ChannelHandle::new(id, receiver))
    }

    fn close(&self, id: ChannelId) {
        if let Some((_, reader)) = self.readers.remove(&id) {
            reader.abort();
        }
    }
}
