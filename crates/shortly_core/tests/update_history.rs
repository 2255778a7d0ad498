use shortly_core::{update, AppState, CompletedShortening, Effect, Msg, RequestOutcome};

fn init_logging() {
    shortly_logging::initialize_for_tests();
}

fn shorten(state: AppState, long_url: &str, short_url: &str) -> AppState {
    let (state, _) = update(state, Msg::InputChanged(long_url.to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    let request_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ShortenUrl { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("shorten effect");

    let (state, _) = update(
        state,
        Msg::ShortenCompleted {
            request_id,
            outcome: RequestOutcome::Success {
                short_url: short_url.to_string(),
                shortened_at: "2026-02-01T12:00:00+00:00".to_string(),
            },
        },
    );
    state
}

#[test]
fn completed_shortenings_survive_snapshot_and_restore() {
    init_logging();
    let state = shorten(AppState::new(), "https://example.com/long", "http://s.ly/abc");

    let snapshot = state.history_snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].long_url, "https://example.com/long");
    assert_eq!(snapshot[0].short_url, "http://s.ly/abc");
    assert_eq!(snapshot[0].shortened_at, "2026-02-01T12:00:00+00:00");

    let (restored, _) = update(AppState::new(), Msg::RestoreHistory(snapshot));
    let view = restored.view();
    assert_eq!(view.history.len(), 1);
    assert_eq!(view.history[0].long_url, "https://example.com/long");
    assert_eq!(view.history[0].short_url, "http://s.ly/abc");
}

#[test]
fn history_rows_are_newest_first() {
    init_logging();
    let state = shorten(AppState::new(), "https://example.com/first", "http://s.ly/1");
    let state = shorten(state, "https://example.com/second", "http://s.ly/2");

    let view = state.view();
    assert_eq!(view.history.len(), 2);
    assert_eq!(view.history[0].long_url, "https://example.com/second");
    assert_eq!(view.history[1].long_url, "https://example.com/first");

    // The snapshot keeps arrival order for the persisted file.
    let snapshot = state.history_snapshot();
    assert_eq!(snapshot[0].long_url, "https://example.com/first");
    assert_eq!(snapshot[1].long_url, "https://example.com/second");
}

#[test]
fn restored_history_grows_with_new_shortenings() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::RestoreHistory(vec![CompletedShortening {
            long_url: "https://example.com/old".to_string(),
            short_url: "http://s.ly/old".to_string(),
            shortened_at: "2026-01-01T00:00:00+00:00".to_string(),
        }]),
    );

    let state = shorten(state, "https://example.com/new", "http://s.ly/new");

    assert_eq!(state.history_snapshot().len(), 2);
    assert_eq!(state.view().history[0].short_url, "http://s.ly/new");
}

#[test]
fn restore_empty_history_changes_nothing() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = update(state.clone(), Msg::RestoreHistory(Vec::new()));

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn copy_click_emits_effect_without_state_change() {
    init_logging();
    let state = shorten(AppState::new(), "https://example.com/long", "http://s.ly/abc");
    let before = state.clone();

    let (next, effects) = update(state, Msg::CopyResultClicked);

    assert_eq!(next, before);
    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: "http://s.ly/abc".to_string(),
        }]
    );
}

#[test]
fn copy_click_without_result_is_ignored() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(state.clone(), Msg::CopyResultClicked);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
