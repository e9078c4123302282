use async_trait::async_trait;

/// A user action on the radar screen
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Replace the technology filter text
    SetFilter(String),
    /// Finish a pan/zoom gesture; `None` deltas keep the current span
    Pan {
        latitude: f64,
        longitude: f64,
        deltas: Option<(f64, f64)>,
    },
    /// Tap the search button
    Search,
    /// Tap the callout of the n-th pin (1-based, as shown in the legend)
    Open(usize),
    /// Redraw the screen
    Show,
    /// Leave the screen
    Quit,
    /// Input that could not be understood
    Invalid { input: String, reason: String },
}

impl UserCommand {
    /// Parses one line of terminal input
    ///
    /// Accepted forms: `techs <text>`, `pan <lat> <lon> [<dlat> <dlon>]`,
    /// `search`, `open <n>`, `show`, `quit`. Blank lines redraw.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };

        match verb.to_lowercase().as_str() {
            "" | "show" => UserCommand::Show,
            "techs" | "t" => UserCommand::SetFilter(rest.to_string()),
            "search" | "s" => UserCommand::Search,
            "quit" | "q" | "exit" => UserCommand::Quit,
            "open" | "o" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => UserCommand::Open(n),
                _ => Self::invalid(trimmed, "expected a pin number, e.g. `open 1`"),
            },
            "pan" | "p" => Self::parse_pan(trimmed, rest),
            _ => Self::invalid(
                trimmed,
                "commands: techs <text>, pan <lat> <lon> [dlat dlon], search, open <n>, show, quit",
            ),
        }
    }

    fn parse_pan(input: &str, args: &str) -> Self {
        let numbers: Result<Vec<f64>, _> = args.split_whitespace().map(str::parse::<f64>).collect();
        match numbers.as_deref() {
            Ok([latitude, longitude]) => UserCommand::Pan {
                latitude: *latitude,
                longitude: *longitude,
                deltas: None,
            },
            Ok([latitude, longitude, dlat, dlon]) => UserCommand::Pan {
                latitude: *latitude,
                longitude: *longitude,
                deltas: Some((*dlat, *dlon)),
            },
            _ => Self::invalid(input, "expected `pan <lat> <lon> [<dlat> <dlon>]`"),
        }
    }

    fn invalid(input: &str, reason: &str) -> Self {
        UserCommand::Invalid {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// CommandSource port - where user actions come from
#[async_trait]
pub trait CommandSource: Send {
    /// Waits for the next user action; `None` means the input has ended
    async fn next_command(&mut self) -> Option<UserCommand>;
}
