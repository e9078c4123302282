use async_trait::async_trait;
use devradar::prelude::*;
use std::collections::VecDeque;
use std::time::Duration;

/// CommandSource replaying user commands at fixed offsets
///
/// Offsets are measured from the first call; input ends after the script.
pub struct ScriptedCommandSource {
    script: VecDeque<(Duration, UserCommand)>,
    started: Option<tokio::time::Instant>,
}

impl ScriptedCommandSource {
    pub fn new(script: Vec<(u64, UserCommand)>) -> Self {
        Self {
            script: script
                .into_iter()
                .map(|(at, command)| (Duration::from_millis(at), command))
                .collect(),
            started: None,
        }
    }
}

#[async_trait]
impl CommandSource for ScriptedCommandSource {
    async fn next_command(&mut self) -> Option<UserCommand> {
        let started = *self.started.get_or_insert_with(tokio::time::Instant::now);
        let (at, _) = self.script.front()?;
        tokio::time::sleep_until(started + *at).await;
        self.script.pop_front().map(|(_, command)| command)
    }
}
