use super::*;

fn snapshot(ceiling_height: f64) -> FloorSnapshot {
    FloorSnapshot {
        rooms: Vec::new(),
        beacons: Vec::new(),
        entities: Vec::new(),
        min_height: 0.0,
        ceiling_height,
    }
}

// --- First load ---

#[test]
fn loading_shows_only_before_first_completion() {
    let mut state = FloorState::default();
    assert!(state.show_loading());

    let generation = state.begin_fetch();
    assert!(state.show_loading());

    state.apply_success(generation, snapshot(3.0));
    assert!(!state.show_loading());

    // A later refresh does not bring the indicator back.
    state.begin_fetch();
    assert!(!state.show_loading());
}

#[test]
fn first_failure_also_ends_loading() {
    let mut state = FloorState::default();
    let generation = state.begin_fetch();
    state.apply_failure(generation, "boom".to_owned());
    assert!(!state.show_loading());
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert!(state.snapshot.is_none());
}

// --- Success and failure interplay ---

#[test]
fn success_clears_a_previous_error() {
    let mut state = FloorState::default();
    let generation = state.begin_fetch();
    state.apply_failure(generation, "boom".to_owned());

    let generation = state.begin_fetch();
    assert!(state.apply_success(generation, snapshot(3.0)));
    assert!(state.error.is_none());
    assert!(state.snapshot.is_some());
}

#[test]
fn failure_keeps_the_last_good_snapshot() {
    let mut state = FloorState::default();
    let generation = state.begin_fetch();
    state.apply_success(generation, snapshot(3.0));

    let generation = state.begin_fetch();
    assert!(state.apply_failure(generation, "server away".to_owned()));
    assert!(state.snapshot.is_some(), "stale-but-valid data must survive a failed refresh");
    assert_eq!(state.error.as_deref(), Some("server away"));
}

// --- Staleness ---

#[test]
fn stale_success_is_discarded() {
    let mut state = FloorState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();

    // The newer fetch lands first.
    assert!(state.apply_success(second, snapshot(5.0)));
    // The older one resolves late and must not overwrite it.
    assert!(!state.apply_success(first, snapshot(3.0)));

    let ceiling = state.snapshot.map(|s| s.ceiling_height);
    assert_eq!(ceiling, Some(5.0));
}

#[test]
fn stale_failure_does_not_clobber_a_newer_success() {
    let mut state = FloorState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();

    assert!(state.apply_success(second, snapshot(3.0)));
    assert!(!state.apply_failure(first, "late timeout".to_owned()));
    assert!(state.error.is_none());
}

#[test]
fn generations_increase_monotonically() {
    let mut state = FloorState::default();
    let a = state.begin_fetch();
    let b = state.begin_fetch();
    let c = state.begin_fetch();
    assert!(a < b && b < c);
}
