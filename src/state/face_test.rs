use super::*;
use crate::util::eye_math::EYE_MAX_OFFSET;

#[test]
fn starts_watching_with_centered_pupils() {
    let state = FaceState::default();
    assert!(state.eyes_open());
    assert_eq!(state.eyes, EyeMode::Watching);
    assert!(state.pupil_offset.0.abs() < 1e-9);
    assert!(state.pupil_offset.1.abs() < 1e-9);
}

#[test]
fn tracks_pointer_while_watching() {
    let mut state = FaceState::default();
    state.track_pointer((0.0, 0.0), (400.0, 0.0));
    assert!(state.pupil_offset.0 > 0.0);
    assert!(state.pupil_offset.1.abs() < 1e-9);
}

#[test]
fn shield_closes_the_eyes_and_freezes_the_pupils() {
    let mut state = FaceState::default();
    state.track_pointer((0.0, 0.0), (400.0, 0.0));
    let frozen = state.pupil_offset;

    state.shield();
    assert!(!state.eyes_open());

    state.track_pointer((0.0, 0.0), (-400.0, 123.0));
    assert_eq!(state.pupil_offset, frozen);
}

#[test]
fn unshield_resumes_tracking() {
    let mut state = FaceState::default();
    state.shield();
    state.unshield();
    assert!(state.eyes_open());

    state.track_pointer((0.0, 0.0), (0.0, 400.0));
    assert!(state.pupil_offset.1 > 0.0);
}

#[test]
fn pupils_never_leave_their_sockets() {
    let mut state = FaceState::default();
    state.track_pointer((0.0, 0.0), (1.0e9, -1.0e9));
    let (x, y) = state.pupil_offset;
    assert!(x.hypot(y) <= EYE_MAX_OFFSET + 1e-9);
}
