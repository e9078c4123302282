use crate::application::dto::ScreenOptions;
use crate::application::read_models::{ScreenView, StatusBanner};
use crate::ports::outbound::{
    Accuracy, ChannelEvent, ChannelId, LocationProvider, PermissionStatus, Route,
};
use crate::radar::domain::{
    ChannelParams, Coordinate, DeveloperList, DeveloperRecord, GenerationCounter, Marker,
    RequestGeneration, ScreenState, SearchFilter, SearchQuery, ViewportRegion,
};
use crate::shared::{RadarError, Result};

#[cfg(test)]
mod tests;

/// A search that has been issued but not yet answered
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub generation: RequestGeneration,
    pub query: SearchQuery,
}

/// What `RadarScreen::complete_search` did with a response
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The list was replaced; `channel` is set when live updates should be (re)opened
    Applied {
        count: usize,
        channel: Option<ChannelParams>,
    },
    /// The request failed and the error is now shown
    Failed,
    /// A newer search was issued; the response was dropped
    Stale,
    /// The screen is gone; nothing changed
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
enum Lifecycle {
    Unpositioned,
    Blocked(RadarError),
    Positioned,
    Unmounted,
}

/// RadarScreen - state of the developer radar
///
/// The screen owns the viewport, the filter text and the developer list.
/// It never performs I/O itself except for the one-shot geolocation in
/// [`RadarScreen::mount`]; searches and channel traffic are fed in as
/// events by the use case that drives it. Once unmounted, every event is
/// a no-op.
#[derive(Debug)]
pub struct RadarScreen {
    lifecycle: Lifecycle,
    options: ScreenOptions,
    device_position: Option<Coordinate>,
    viewport: Option<ViewportRegion>,
    filter: SearchFilter,
    developers: DeveloperList,
    generations: GenerationCounter,
    active_channel: Option<ChannelId>,
    status: Option<RadarError>,
}

impl RadarScreen {
    pub fn new(options: ScreenOptions) -> Self {
        Self {
            lifecycle: Lifecycle::Unpositioned,
            options,
            device_position: None,
            viewport: None,
            filter: SearchFilter::default(),
            developers: DeveloperList::new(),
            generations: GenerationCounter::new(),
            active_channel: None,
            status: None,
        }
    }

    pub fn with_filter(mut self, filter: SearchFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Acquires the device position once and seeds the viewport
    ///
    /// A denied permission or a failed read leaves the screen blocked; this
    /// method never fails. Calling it again after the first time has no effect.
    pub async fn mount<L>(&mut self, location: &L) -> ScreenState
    where
        L: LocationProvider + ?Sized,
    {
        if self.lifecycle != Lifecycle::Unpositioned {
            return self.state();
        }

        let outcome = match location.request_permission().await {
            Ok(PermissionStatus::Granted) => location
                .current_position(Accuracy::High)
                .await
                .map_err(|e| RadarError::LocationUnavailable {
                    details: format!("{:#}", e),
                }),
            Ok(PermissionStatus::Denied) => Err(RadarError::PermissionDenied),
            Err(e) => Err(RadarError::LocationUnavailable {
                details: format!("{:#}", e),
            }),
        };

        match outcome {
            Ok(position) => {
                self.device_position = Some(position);
                self.viewport = Some(ViewportRegion::around(position));
                self.lifecycle = Lifecycle::Positioned;
            }
            Err(error) => {
                self.lifecycle = Lifecycle::Blocked(error);
            }
        }

        self.state()
    }

    pub fn state(&self) -> ScreenState {
        match &self.lifecycle {
            Lifecycle::Unpositioned => ScreenState::Unpositioned,
            Lifecycle::Blocked(error) => ScreenState::Blocked(error.clone()),
            Lifecycle::Positioned => ScreenState::Positioned {
                has_results: !self.developers.is_empty(),
            },
            Lifecycle::Unmounted => ScreenState::Unmounted,
        }
    }

    fn is_positioned(&self) -> bool {
        self.lifecycle == Lifecycle::Positioned
    }

    pub fn device_position(&self) -> Option<Coordinate> {
        self.device_position
    }

    pub fn viewport(&self) -> Option<ViewportRegion> {
        self.viewport
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    pub fn developers(&self) -> &DeveloperList {
        &self.developers
    }

    pub fn status(&self) -> Option<&RadarError> {
        self.status.as_ref()
    }

    pub fn active_channel(&self) -> Option<ChannelId> {
        self.active_channel
    }

    pub fn options(&self) -> ScreenOptions {
        self.options
    }

    /// Replaces the filter text; accepted in any state but unmounted
    pub fn set_filter(&mut self, text: impl Into<String>) -> bool {
        if self.lifecycle == Lifecycle::Unmounted {
            return false;
        }
        self.filter = SearchFilter::new(text);
        true
    }

    /// Stores the bounds reported when a pan/zoom gesture ends
    pub fn on_region_change_complete(&mut self, region: ViewportRegion) -> bool {
        if !self.is_positioned() {
            return false;
        }
        self.viewport = Some(region);
        true
    }

    /// Pans to a new center, keeping the current span unless `deltas` is given
    ///
    /// # Errors
    /// Returns `InvalidCoordinate` for an out-of-range center
    pub fn pan_to(
        &mut self,
        latitude: f64,
        longitude: f64,
        deltas: Option<(f64, f64)>,
    ) -> std::result::Result<bool, RadarError> {
        let center = Coordinate::new(latitude, longitude)?;
        let Some(current) = self.viewport else {
            return Ok(false);
        };
        let (latitude_delta, longitude_delta) =
            deltas.unwrap_or((current.latitude_delta, current.longitude_delta));
        Ok(self.on_region_change_complete(ViewportRegion::new(
            center,
            latitude_delta,
            longitude_delta,
        )))
    }

    /// Issues a search for the live viewport center and the raw filter text
    ///
    /// Returns `None` when there is no position to search around.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if !self.is_positioned() {
            return None;
        }
        let center = self.viewport?.center();
        Some(SearchTicket {
            generation: self.generations.next(),
            query: SearchQuery::new(center, &self.filter),
        })
    }

    /// Applies (or drops) the response to a previously issued search
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<DeveloperRecord>>,
    ) -> SearchOutcome {
        if !self.is_positioned() {
            return SearchOutcome::Ignored;
        }
        if !self
            .options
            .stale_policy
            .accepts(&self.generations, ticket.generation)
        {
            return SearchOutcome::Stale;
        }

        match result {
            Ok(records) => {
                let count = records.len();
                self.developers.replace(records);
                if matches!(self.status, Some(RadarError::SearchRequestFailed { .. })) {
                    self.status = None;
                }
                let channel = self
                    .options
                    .live_updates
                    .then(|| ChannelParams::from(&ticket.query));
                SearchOutcome::Applied { count, channel }
            }
            Err(e) => {
                self.status = Some(RadarError::SearchRequestFailed {
                    details: format!("{:#}", e),
                });
                SearchOutcome::Failed
            }
        }
    }

    /// Records the channel now feeding the list, returning the one it replaces
    pub fn attach_channel(&mut self, id: ChannelId) -> Option<ChannelId> {
        if !self.is_positioned() {
            return Some(id);
        }
        if matches!(self.status, Some(RadarError::ChannelDisconnected { .. })) {
            self.status = None;
        }
        self.active_channel.replace(id)
    }

    /// Forgets the current channel, returning it so the caller can close it
    pub fn detach_channel(&mut self) -> Option<ChannelId> {
        self.active_channel.take()
    }

    /// Shows that live updates could not be established
    pub fn channel_failed(&mut self, reason: impl Into<String>) {
        if !self.is_positioned() {
            return;
        }
        self.active_channel = None;
        self.status = Some(RadarError::ChannelDisconnected {
            reason: reason.into(),
        });
    }

    /// Handles an event pushed over channel `id`
    ///
    /// Events from any channel other than the attached one are dropped.
    /// Returns whether the screen changed.
    pub fn handle_channel_event(&mut self, id: ChannelId, event: ChannelEvent) -> bool {
        if !self.is_positioned() || self.active_channel != Some(id) {
            return false;
        }
        match event {
            ChannelEvent::NewDeveloper(record) => {
                self.developers.append(record);
            }
            ChannelEvent::Disconnected { reason } => {
                self.channel_failed(reason);
            }
        }
        true
    }

    pub fn markers(&self) -> Vec<Marker> {
        self.developers.iter().map(Marker::from).collect()
    }

    /// Route for tapping the callout of the pin at `index` (0-based)
    pub fn profile_route(&self, index: usize) -> Option<Route> {
        if !self.is_positioned() {
            return None;
        }
        self.developers.get(index).map(|dev| Route::Profile {
            github_username: dev.github_username.clone(),
        })
    }

    /// Tears the screen down, returning the channel that must be closed
    pub fn unmount(&mut self) -> Option<ChannelId> {
        self.lifecycle = Lifecycle::Unmounted;
        self.active_channel.take()
    }

    /// Snapshot for renderers
    pub fn view(&self) -> ScreenView {
        let state = self.state();
        let shows_map = state.shows_map();
        let status = match &self.lifecycle {
            Lifecycle::Blocked(error) => Some(StatusBanner::from(error)),
            _ => self.status.as_ref().map(StatusBanner::from),
        };

        ScreenView {
            state: state.name().to_string(),
            shows_map,
            viewport: if shows_map { self.viewport } else { None },
            filter: self.filter.as_str().to_string(),
            markers: if shows_map { self.markers() } else { Vec::new() },
            live: shows_map && self.active_channel.is_some(),
            status,
        }
    }
}
