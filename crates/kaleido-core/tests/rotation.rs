// File: crates/kaleido-core/tests/rotation.rs
// Purpose: Rotation accumulation and displayed direction.

use kaleido_core::Rotation;

#[test]
fn zero_velocity_keeps_last_angle() {
    let mut r = Rotation::new();
    r.set_velocity(1.5);
    r.advance();
    r.advance();
    assert_eq!(r.accumulated(), 6.0);
    r.set_velocity(0.0);
    for _ in 0..500 {
        r.advance();
    }
    assert_eq!(r.accumulated(), 6.0);
    assert_eq!(r.transform(), None);
}

#[test]
fn negative_velocity_rotates_the_other_way() {
    let mut r = Rotation::new();
    r.set_velocity(-2.0);
    r.advance();
    assert_eq!(r.accumulated(), 4.0);
    assert_eq!(r.transform(), Some(-4.0));
}

#[test]
fn sign_flip_mirrors_accumulated_angle() {
    let mut r = Rotation::new();
    r.set_velocity(5.0);
    r.advance();
    assert_eq!(r.transform(), Some(10.0));
    r.set_velocity(-5.0);
    r.advance();
    // Magnitude keeps growing; only the displayed sign changes.
    assert_eq!(r.transform(), Some(-20.0));
}

#[test]
fn resumes_from_accumulated_angle() {
    let mut r = Rotation::new();
    r.set_velocity(1.0);
    r.advance();
    r.set_velocity(0.0);
    r.set_velocity(1.0);
    r.advance();
    assert_eq!(r.transform(), Some(4.0));
}
