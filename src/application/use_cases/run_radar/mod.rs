use crate::application::dto::ScreenOptions;
use crate::application::screen::{RadarScreen, SearchOutcome, SearchTicket};
use crate::ports::inbound::{CommandSource, UserCommand};
use crate::ports::outbound::{
    ChannelEvent, ChannelHandle, ChannelId, DeveloperSearch, LocationProvider, MapRenderer,
    Navigator, OutputPresenter, ProgressReporter, PushChannel,
};
use crate::radar::domain::{ChannelParams, DeveloperRecord, ScreenState, SearchFilter};
use crate::shared::security::validate_filter_text;
use crate::shared::Result;
use chrono::Local;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use std::sync::Arc;


/// A search request in flight, resolving to its ticket and the server's answer
type PendingSearch = BoxFuture<'static, (SearchTicket, Result<Vec<DeveloperRecord>>)>;

/// A live-update subscription being opened
type PendingOpen = BoxFuture<'static, Result<ChannelHandle>>;

/// What happened during one radar session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Screen state right before it was unmounted
    pub final_state: ScreenState,
    pub developers_shown: usize,
    pub searches_issued: usize,
    pub live_updates_received: usize,
}

enum Step {
    Command(Option<UserCommand>),
    SearchDone(SearchTicket, Result<Vec<DeveloperRecord>>),
    Opened(Result<ChannelHandle>),
    Push(ChannelId, ChannelEvent),
}

/// RunRadarUseCase - drives a radar screen from user actions and server events
///
/// This use case owns the screen and every connection it opens, using
/// generic dependency injection for all infrastructure dependencies.
/// All screen mutations happen on the task that runs [`execute`](Self::execute);
/// searches and channel opens are polled concurrently, so a slow server
/// never holds up user commands.
///
/// # Type Parameters
/// * `L` - LocationProvider implementation
/// * `S` - DeveloperSearch implementation
/// * `C` - PushChannel implementation
/// * `N` - Navigator implementation
/// * `PR` - ProgressReporter implementation
pub struct RunRadarUseCase<L, S, C, N, PR> {
    location: L,
    search: Arc<S>,
    channel: Arc<C>,
    navigator: N,
    progress_reporter: PR,
    renderer: Box<dyn MapRenderer>,
    presenter: Box<dyn OutputPresenter>,
    screen: RadarScreen,
    pending: FuturesUnordered<PendingSearch>,
    opening: Option<PendingOpen>,
    subscription: Option<ChannelHandle>,
    searches_issued: usize,
    live_updates_received: usize,
}

impl<L, S, C, N, PR> RunRadarUseCase<L, S, C, N, PR>
where
    L: LocationProvider,
    S: DeveloperSearch + 'static,
    C: PushChannel + 'static,
    N: Navigator,
    PR: ProgressReporter,
{
    /// Creates a new RunRadarUseCase with injected dependencies
    pub fn new(
        location: L,
        search: S,
        channel: C,
        navigator: N,
        progress_reporter: PR,
        renderer: Box<dyn MapRenderer>,
        presenter: Box<dyn OutputPresenter>,
    ) -> Self {
        Self {
            location,
            search: Arc::new(search),
            channel: Arc::new(channel),
            navigator,
            progress_reporter,
            renderer,
            presenter,
            screen: RadarScreen::new(ScreenOptions::default()),
            pending: FuturesUnordered::new(),
            opening: None,
            subscription: None,
            searches_issued: 0,
            live_updates_received: 0,
        }
    }

    /// Configures the screen before it is mounted
    pub fn with_screen(mut self, options: ScreenOptions, filter: SearchFilter) -> Self {
        self.screen = RadarScreen::new(options).with_filter(filter);
        self
    }

    pub fn screen(&self) -> &RadarScreen {
        &self.screen
    }

    /// Runs an interactive session until the user quits or input ends
    ///
    /// The screen is unmounted and its channel released however the
    /// session ends.
    ///
    /// # Errors
    /// Returns an error only when rendering or presenting fails;
    /// search and channel failures are shown on screen instead.
    pub async fn execute<CS>(&mut self, commands: &mut CS) -> Result<SessionSummary>
    where
        CS: CommandSource + ?Sized,
    {
        let outcome = self.run_session(commands).await;
        let summary = self.finish();
        outcome.map(|()| summary)
    }

    /// Mounts, runs a single search, renders the result once and unmounts
    ///
    /// Live updates are never opened in this mode.
    pub async fn execute_once(&mut self) -> Result<SessionSummary> {
        let outcome = self.run_single_search().await;
        let summary = self.finish();
        outcome.map(|()| summary)
    }

    async fn run_session<CS>(&mut self, commands: &mut CS) -> Result<()>
    where
        CS: CommandSource + ?Sized,
    {
        let positioned = self.mount_and_report().await;
        self.refresh()?;
        if !positioned {
            return Ok(());
        }

        if self.screen.options().search_on_mount {
            self.start_search();
        }

        loop {
            let step = tokio::select! {
                command = commands.next_command() => Step::Command(command),
                Some((ticket, result)) = self.pending.next(), if !self.pending.is_empty() => {
                    Step::SearchDone(ticket, result)
                }
                result = Self::next_open(&mut self.opening) => Step::Opened(result),
                (id, event) = Self::next_push(&mut self.subscription) => Step::Push(id, event),
            };

            match step {
                Step::Command(None) | Step::Command(Some(UserCommand::Quit)) => return Ok(()),
                Step::Command(Some(command)) => self.handle_command(command)?,
                Step::SearchDone(ticket, result) => self.finish_search(ticket, result)?,
                Step::Opened(result) => self.finish_open(result)?,
                Step::Push(id, event) => self.handle_push(id, event)?,
            }
        }
    }

    async fn run_single_search(&mut self) -> Result<()> {
        if !self.mount_and_report().await {
            return self.refresh();
        }

        self.start_search();
        if let Some((ticket, result)) = self.pending.next().await {
            let outcome = self.screen.complete_search(ticket, result);
            self.report_outcome(&outcome);
        }
        self.refresh()
    }

    /// Returns whether the screen ended up positioned
    async fn mount_and_report(&mut self) -> bool {
        self.progress_reporter
            .report_activity("📍 Requesting location permission...");
        let state = self.screen.mount(&self.location).await;

        if let ScreenState::Blocked(error) = &state {
            self.progress_reporter.report_error(&format!("🚫 {}", error));
            return false;
        }

        if let Some(position) = self.screen.device_position() {
            self.progress_reporter
                .report_completion(&format!("📍 Positioned at {}", position));
        }
        true
    }

    fn handle_command(&mut self, command: UserCommand) -> Result<()> {
        match command {
            UserCommand::SetFilter(text) => match validate_filter_text(&text) {
                Ok(()) => {
                    self.screen.set_filter(text);
                    self.progress_reporter
                        .report(&format!("🔎 Filter: \"{}\"", self.screen.filter()));
                }
                Err(e) => self.progress_reporter.report_error(&format!("⚠️  {}", e)),
            },
            UserCommand::Pan {
                latitude,
                longitude,
                deltas,
            } => match self.screen.pan_to(latitude, longitude, deltas) {
                Ok(true) => self.refresh()?,
                Ok(false) => {}
                Err(e) => self.progress_reporter.report_error(&format!("⚠️  {}", e)),
            },
            UserCommand::Search => self.start_search(),
            UserCommand::Open(number) => match number
                .checked_sub(1)
                .and_then(|index| self.screen.profile_route(index))
            {
                Some(route) => {
                    if let Err(e) = self.navigator.navigate(route) {
                        self.progress_reporter
                            .report_error(&format!("⚠️  Cannot open profile: {}", e));
                    }
                }
                None => self
                    .progress_reporter
                    .report_error(&format!("⚠️  There is no pin #{}", number)),
            },
            UserCommand::Show => self.refresh()?,
            UserCommand::Invalid { input, reason } => self
                .progress_reporter
                .report_error(&format!("⚠️  Unknown command '{}': {}", input, reason)),
            UserCommand::Quit => {}
        }
        Ok(())
    }

    fn start_search(&mut self) {
        let Some(ticket) = self.screen.begin_search() else {
            self.progress_reporter
                .report_error("⚠️  Cannot search before a position is known");
            return;
        };

        self.progress_reporter.report_activity(&format!(
            "🔍 Searching developers near {}, {} ({})",
            ticket.query.latitude, ticket.query.longitude, ticket.generation
        ));
        self.searches_issued += 1;

        let search = Arc::clone(&self.search);
        self.pending.push(
            async move {
                let result = search.search(&ticket.query).await;
                (ticket, result)
            }
            .boxed(),
        );
    }

    fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<DeveloperRecord>>,
    ) -> Result<()> {
        let outcome = self.screen.complete_search(ticket, result);
        self.report_outcome(&outcome);

        match outcome {
            SearchOutcome::Applied { channel, .. } => {
                if let Some(params) = channel {
                    self.reconnect(params);
                }
                self.refresh()
            }
            SearchOutcome::Failed => self.refresh(),
            SearchOutcome::Stale | SearchOutcome::Ignored => Ok(()),
        }
    }

    fn report_outcome(&self, outcome: &SearchOutcome) {
        match outcome {
            SearchOutcome::Applied { count, .. } => self
                .progress_reporter
                .report_completion(&format!("✅ Found {} developer(s)", count)),
            SearchOutcome::Failed => {
                if let Some(error) = self.screen.status() {
                    self.progress_reporter.report_error(&format!("❌ {}", error));
                }
            }
            SearchOutcome::Stale => self
                .progress_reporter
                .report("⏭️  Discarded a response to an older search"),
            SearchOutcome::Ignored => {}
        }
    }

    /// Replaces the live-update subscription with one scoped to `params`
    ///
    /// The previous subscription is closed right away; the new one is
    /// opened in the background and superseded if another search lands
    /// first.
    fn reconnect(&mut self, params: ChannelParams) {
        if let Some(previous) = self.screen.detach_channel() {
            self.channel.close(previous);
        }
        self.subscription = None;

        let channel = Arc::clone(&self.channel);
        self.opening = Some(async move { channel.open(&params).await }.boxed());
    }

    async fn next_open(opening: &mut Option<PendingOpen>) -> Result<ChannelHandle> {
        match opening {
            Some(open) => {
                let result = open.await;
                *opening = None;
                result
            }
            None => std::future::pending().await,
        }
    }

    fn finish_open(&mut self, result: Result<ChannelHandle>) -> Result<()> {
        match result {
            Ok(handle) => {
                let id = handle.id();
                match self.screen.attach_channel(id) {
                    Some(refused) if refused == id => {
                        self.channel.close(id);
                        return Ok(());
                    }
                    replaced => {
                        if let Some(replaced) = replaced {
                            self.channel.close(replaced);
                        }
                        self.subscription = Some(handle);
                        self.progress_reporter.report("📡 Live updates on");
                    }
                }
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                self.progress_reporter
                    .report_error(&format!("⚠️  Live updates unavailable: {}", reason));
                self.screen.channel_failed(reason);
            }
        }
        self.refresh()
    }

    async fn next_push(subscription: &mut Option<ChannelHandle>) -> (ChannelId, ChannelEvent) {
        match subscription {
            Some(handle) => {
                let id = handle.id();
                let event = handle
                    .next_event()
                    .await
                    .unwrap_or_else(|| ChannelEvent::Disconnected {
                        reason: "channel closed".to_string(),
                    });
                (id, event)
            }
            None => std::future::pending().await,
        }
    }

    fn handle_push(&mut self, id: ChannelId, event: ChannelEvent) -> Result<()> {
        let disconnected = matches!(event, ChannelEvent::Disconnected { .. });
        if disconnected && self.subscription.as_ref().map(ChannelHandle::id) == Some(id) {
            self.subscription = None;
            self.channel.close(id);
        }

        let arrival = match &event {
            ChannelEvent::NewDeveloper(dev) => Some(dev.display_name().to_string()),
            ChannelEvent::Disconnected { .. } => None,
        };

        if !self.screen.handle_channel_event(id, event) {
            return Ok(());
        }

        match arrival {
            Some(name) => {
                self.live_updates_received += 1;
                self.progress_reporter.report(&format!(
                    "📡 [{}] {} just showed up",
                    Local::now().format("%H:%M:%S"),
                    name
                ));
            }
            None => {
                if let Some(error) = self.screen.status() {
                    self.progress_reporter.report_error(&format!("⚠️  {}", error));
                }
            }
        }
        self.refresh()
    }

    fn refresh(&self) -> Result<()> {
        let output = self.renderer.render(&self.screen.view())?;
        self.presenter.present(&output)
    }

    /// Unmounts the screen and releases every connection it holds
    fn finish(&mut self) -> SessionSummary {
        let final_state = self.screen.state();
        let developers_shown = self.screen.developers().len();

        let attached = self.screen.unmount();
        if let Some(id) = attached {
            self.channel.close(id);
        }
        if let Some(handle) = self.subscription.take() {
            if attached != Some(handle.id()) {
                self.channel.close(handle.id());
            }
        }
        self.pending = FuturesUnordered::new();
        self.opening = None;

        SessionSummary {
            final_state,
            developers_shown,
            searches_issued: self.searches_issued,
            live_updates_received: self.live_updates_received,
        }
    }
}
