use super::*;
use crate::radar::domain::GeoPoint;
use crate::radar::policies::StalePolicy;
use async_trait::async_trait;

// Mock implementations for testing
struct MockLocation {
    permission: PermissionStatus,
    position: Option<Coordinate>,
}

impl MockLocation {
    fn granted(latitude: f64, longitude: f64) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: Some(Coordinate::new(latitude, longitude).unwrap()),
        }
    }

    fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            position: None,
        }
    }

    fn without_fix() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: None,
        }
    }
}

#[async_trait]
impl LocationProvider for MockLocation {
    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(self.permission)
    }

    async fn current_position(&self, accuracy: Accuracy) -> Result<Coordinate> {
        assert_eq!(accuracy, Accuracy::High);
        self.position
            .ok_or_else(|| anyhow::anyhow!("no GPS fix"))
    }
}

fn dev(id: &str, latitude: f64, longitude: f64) -> DeveloperRecord {
    DeveloperRecord {
        id: id.to_string(),
        name: Some(format!("Dev {}", id)),
        github_username: format!("dev{}", id),
        bio: Some("bio".to_string()),
        avatar_url: None,
        techs: vec!["Rust".to_string()],
        location: GeoPoint::from_coordinate(Coordinate::new(latitude, longitude).unwrap()),
    }
}

async fn positioned(options: ScreenOptions) -> RadarScreen {
    let mut screen = RadarScreen::new(options);
    screen.mount(&MockLocation::granted(-23.55, -46.63)).await;
    screen
}

#[tokio::test]
async fn test_permission_denied_blocks_screen() {
    let mut screen = RadarScreen::new(ScreenOptions::default());
    let state = screen.mount(&MockLocation::denied()).await;

    assert_eq!(state, ScreenState::Blocked(RadarError::PermissionDenied));
    assert!(screen.viewport().is_none());
    assert!(screen.begin_search().is_none());

    let view = screen.view();
    assert!(!view.shows_map);
    assert!(view.viewport.is_none());
    assert!(view.markers.is_empty());
    assert_eq!(view.status.unwrap().label, "permission denied");
}

#[tokio::test]
async fn test_missing_fix_blocks_screen() {
    let mut screen = RadarScreen::new(ScreenOptions::default());
    let state = screen.mount(&MockLocation::without_fix()).await;

    match state {
        ScreenState::Blocked(RadarError::LocationUnavailable { details }) => {
            assert!(details.contains("no GPS fix"));
        }
        other => panic!("unexpected state {:?}", other),
    }
}

#[tokio::test]
async fn test_initial_viewport_centered_on_position() {
    let screen = positioned(ScreenOptions::default()).await;

    let viewport = screen.viewport().unwrap();
    assert_eq!(viewport.latitude, -23.55);
    assert_eq!(viewport.longitude, -46.63);
    assert_eq!(viewport.latitude_delta, 0.04);
    assert_eq!(viewport.longitude_delta, 0.04);
    assert_eq!(screen.state(), ScreenState::Positioned { has_results: false });
}

#[tokio::test]
async fn test_mount_is_one_shot() {
    let mut screen = positioned(ScreenOptions::default()).await;
    let state = screen.mount(&MockLocation::granted(10.0, 10.0)).await;

    assert_eq!(state, ScreenState::Positioned { has_results: false });
    assert_eq!(screen.viewport().unwrap().latitude, -23.55);
}

#[tokio::test]
async fn test_search_uses_live_viewport_and_raw_filter() {
    let mut screen = positioned(ScreenOptions::default()).await;
    screen.set_filter(" ReactJS,Node.js ");
    screen.pan_to(-23.6, -46.7, None).unwrap();

    let ticket = screen.begin_search().unwrap();
    assert_eq!(ticket.query.latitude, -23.6);
    assert_eq!(ticket.query.longitude, -46.7);
    assert_eq!(ticket.query.techs, " ReactJS,Node.js ");
    assert_eq!(screen.viewport().unwrap().latitude_delta, 0.04);
}

#[tokio::test]
async fn test_search_result_yields_one_marker_per_record() {
    let mut screen = positioned(ScreenOptions::default()).await;
    let ticket = screen.begin_search().unwrap();
    let records = vec![
        dev("1", -23.55, -46.63),
        dev("2", -23.56, -46.64),
        dev("3", -23.54, -46.62),
    ];

    let outcome = screen.complete_search(ticket, Ok(records.clone()));

    assert!(matches!(outcome, SearchOutcome::Applied { count: 3, .. }));
    let markers = screen.markers();
    assert_eq!(markers.len(), 3);
    for (marker, record) in markers.iter().zip(&records) {
        assert_eq!(marker.coordinate, record.coordinate());
        assert_eq!(marker.developer_id, record.id);
    }
    assert_eq!(screen.state(), ScreenState::Positioned { has_results: true });
}

#[tokio::test]
async fn test_applied_search_requests_channel_for_query_scope() {
    let mut screen = positioned(ScreenOptions::default()).await;
    screen.set_filter("Rust");
    let ticket = screen.begin_search().unwrap();

    match screen.complete_search(ticket, Ok(vec![])) {
        SearchOutcome::Applied { count, channel } => {
            assert_eq!(count, 0);
            let params = channel.unwrap();
            assert_eq!(params.latitude, -23.55);
            assert_eq!(params.longitude, -46.63);
            assert_eq!(params.techs, "Rust");
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn test_no_channel_when_live_updates_disabled() {
    let options = ScreenOptions::new(StalePolicy::Discard, false, false);
    let mut screen = positioned(options).await;
    let ticket = screen.begin_search().unwrap();

    assert_eq!(
        screen.complete_search(ticket, Ok(vec![])),
        SearchOutcome::Applied {
            count: 0,
            channel: None
        }
    );
}

#[tokio::test]
async fn test_overlapping_searches_last_arrival_wins_with_apply() {
    let options = ScreenOptions::new(StalePolicy::Apply, true, false);
    let mut screen = positioned(options).await;
    let first = screen.begin_search().unwrap();
    let second = screen.begin_search().unwrap();

    // second resolves first, then the first arrives late
    screen.complete_search(second, Ok(vec![dev("new", -23.55, -46.63)]));
    screen.complete_search(first, Ok(vec![dev("old", -23.55, -46.63)]));

    assert_eq!(screen.developers().len(), 1);
    assert_eq!(screen.developers().get(0).unwrap().id, "old");
}

#[tokio::test]
async fn test_overlapping_searches_last_issued_wins_with_discard() {
    let mut screen = positioned(ScreenOptions::default()).await;
    let first = screen.begin_search().unwrap();
    let second = screen.begin_search().unwrap();

    screen.complete_search(second, Ok(vec![dev("new", -23.55, -46.63)]));
    let late = screen.complete_search(first, Ok(vec![dev("old", -23.55, -46.63)]));

    assert_eq!(late, SearchOutcome::Stale);
    assert_eq!(screen.developers().get(0).unwrap().id, "new");
}

#[tokio::test]
async fn test_failed_search_keeps_list_and_shows_error() {
    let mut screen = positioned(ScreenOptions::default()).await;
    let ticket = screen.begin_search().unwrap();
    screen.complete_search(ticket, Ok(vec![dev("1", -23.55, -46.63)]));

    let ticket = screen.begin_search().unwrap();
    let outcome = screen.complete_search(ticket, Err(anyhow::anyhow!("connection refused")));

    assert_eq!(outcome, SearchOutcome::Failed);
    assert_eq!(screen.developers().len(), 1);
    match screen.status() {
        Some(RadarError::SearchRequestFailed { details }) => {
            assert!(details.contains("connection refused"))
        }
        other => panic!("unexpected status {:?}", other),
    }

    // a later success clears the banner
    let ticket = screen.begin_search().unwrap();
    screen.complete_search(ticket, Ok(vec![]));
    assert!(screen.status().is_none());
}

#[tokio::test]
async fn test_push_appends_without_dedup() {
    let mut screen = positioned(ScreenOptions::default()).await;
    let ticket = screen.begin_search().unwrap();
    let records = vec![dev("1", -23.55, -46.63), dev("2", -23.56, -46.64)];
    screen.complete_search(ticket, Ok(records.clone()));
    let channel = ChannelId::new();
    assert!(screen.attach_channel(channel).is_none());

    let changed =
        screen.handle_channel_event(channel, ChannelEvent::NewDeveloper(records[0].clone()));

    assert!(changed);
    assert_eq!(screen.developers().len(), 3);
    assert_eq!(&screen.developers().as_slice()[..2], &records[..]);
    assert_eq!(screen.developers().get(2).unwrap().id, "1");
}

#[tokio::test]
async fn test_events_from_replaced_channel_are_ignored() {
    let mut screen = positioned(ScreenOptions::default()).await;
    let old = ChannelId::new();
    let new = ChannelId::new();
    screen.attach_channel(old);
    assert_eq!(screen.attach_channel(new), Some(old));

    let changed = screen.handle_channel_event(old, ChannelEvent::NewDeveloper(dev("x", 0.0, 0.0)));

    assert!(!changed);
    assert!(screen.developers().is_empty());
}

#[tokio::test]
async fn test_disconnect_shows_banner_and_detaches() {
    let mut screen = positioned(ScreenOptions::default()).await;
    let channel = ChannelId::new();
    screen.attach_channel(channel);

    screen.handle_channel_event(
        channel,
        ChannelEvent::Disconnected {
            reason: "stream closed".to_string(),
        },
    );

    assert!(screen.active_channel().is_none());
    assert!(matches!(
        screen.status(),
        Some(RadarError::ChannelDisconnected { .. })
    ));
    assert!(!screen.view().live);

    // reattaching clears the banner
    screen.attach_channel(ChannelId::new());
    assert!(screen.status().is_none());
}

#[tokio::test]
async fn test_unmount_releases_channel_and_freezes_state() {
    let mut screen = positioned(ScreenOptions::default()).await;
    let ticket = screen.begin_search().unwrap();
    let late_ticket = screen.begin_search().unwrap();
    screen.complete_search(ticket, Ok(vec![dev("1", 0.0, 0.0)]));
    let channel = ChannelId::new();
    screen.attach_channel(channel);

    assert_eq!(screen.unmount(), Some(channel));
    assert_eq!(screen.state(), ScreenState::Unmounted);

    assert!(!screen.handle_channel_event(channel, ChannelEvent::NewDeveloper(dev("2", 0.0, 0.0))));
    assert_eq!(
        screen.complete_search(late_ticket, Ok(vec![])),
        SearchOutcome::Ignored
    );
    assert!(!screen.set_filter("Go"));
    assert!(screen.begin_search().is_none());
    assert_eq!(screen.developers().len(), 1);
    assert!(screen.active_channel().is_none());
}

#[tokio::test]
async fn test_profile_route() {
    let mut screen = positioned(ScreenOptions::default()).await;
    let ticket = screen.begin_search().unwrap();
    screen.complete_search(ticket, Ok(vec![dev("7", 0.0, 0.0)]));

    assert_eq!(
        screen.profile_route(0),
        Some(Route::Profile {
            github_username: "dev7".to_string()
        })
    );
    assert!(screen.profile_route(1).is_none());
}

#[tokio::test]
async fn test_pan_rejects_invalid_center() {
    let mut screen = positioned(ScreenOptions::default()).await;
    assert!(screen.pan_to(120.0, 0.0, None).is_err());
    assert_eq!(screen.viewport().unwrap().latitude, -23.55);
}

#[tokio::test]
async fn test_pan_ignored_before_position() {
    let mut screen = RadarScreen::new(ScreenOptions::default());
    assert_eq!(screen.pan_to(1.0, 1.0, None), Ok(false));
    assert!(screen.viewport().is_none());
}
