use crate::ports::inbound::{CommandSource, UserCommand};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

/// LineCommandSource adapter reading one command per line
///
/// Works over any buffered async reader; end of input or a read error ends
/// the session.
pub struct LineCommandSource<R> {
    lines: Lines<R>,
}

impl<R> LineCommandSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

#[async_trait]
impl<R> CommandSource for LineCommandSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_command(&mut self) -> Option<UserCommand> {
        match self.lines.next_line().await {
            Ok(Some(line)) => Some(UserCommand::parse(&line)),
            Ok(None) => None,
            Err(e) => {
                eprintln!("⚠️  Warning: failed to read input: {}", e);
                None
            }
        }
    }
}

/// Commands typed on the terminal
pub type StdinCommandSource = LineCommandSource<BufReader<Stdin>>;

impl StdinCommandSource {
    pub fn stdin() -> Self {
        LineCommandSource::new(BufReader::new(tokio::io::stdin()))
    }
}
