use jubi_engine::simulation::TRANSFORM_STRIDE;
use jubi_engine::{kind_dynamic, kind_static, BodyKind, PhysicsError, Vec2, World, WorldCore, WorldSettings};

#[test]
fn facade_handles_survive_removal_of_earlier_bodies() {
    let mut world = World::new();
    let a = world.create_box(0.0, 0.0, 1.0, 1.0, kind_dynamic(), 1.0);
    let b = world.create_box(5.0, 0.0, 1.0, 1.0, kind_dynamic(), 1.0);
    let c = world.create_circle(10.0, 0.0, 2.0, kind_static(), 0.0);
    assert_eq!(world.body_count(), 3);

    assert!(world.remove_body(a));
    assert!(!world.contains(a));
    assert_eq!(world.index_of(a), -1);
    assert_eq!(world.index_of(b), 0);
    assert_eq!(world.index_of(c), 1);

    let transforms = world.body_transforms();
    assert_eq!(transforms.len(), 2 * TRANSFORM_STRIDE);
    assert_eq!(transforms[0], 5.0);
    assert_eq!(transforms[1], 0.0);
}

#[test]
fn failures_return_sentinels_and_latch_codes() {
    let mut world = World::new();
    world.clear_error();

    assert_eq!(world.create_box(0.0, 0.0, 1.0, 1.0, 7, 1.0), 0.0);
    assert_eq!(world.last_error_code(), PhysicsError::InvalidValue.code());

    assert!(!world.step(0.0));
    assert_eq!(world.last_error_code(), PhysicsError::InvalidValue.code());
    assert!(world.last_error_json().contains("step_world"));

    assert!(!world.remove_body(0.0));
    assert_eq!(world.last_error_code(), PhysicsError::NullBody.code());

    world.clear_error();
    assert_eq!(world.last_error_code(), 0);
    assert_eq!(world.last_error_json(), "null");
}

#[test]
fn capacity_is_a_hard_limit() {
    let mut world = World::from_settings_json(r#"{"capacity": 2}"#).unwrap();
    assert_eq!(world.capacity(), 2);
    assert!(world.create_box(0.0, 0.0, 1.0, 1.0, kind_dynamic(), 1.0) != 0.0);
    assert!(world.create_box(9.0, 0.0, 1.0, 1.0, kind_dynamic(), 1.0) != 0.0);
    assert_eq!(world.create_box(18.0, 0.0, 1.0, 1.0, kind_dynamic(), 1.0), 0.0);
    assert_eq!(world.last_error_code(), PhysicsError::WorldFull.code());
    assert_eq!(world.body_count(), 2);
}

#[test]
fn destroyed_world_rejects_everything() {
    let mut world = World::new();
    let h = world.create_box(0.0, 0.0, 1.0, 1.0, kind_dynamic(), 1.0);
    world.destroy();
    world.destroy();

    assert!(world.destroyed());
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.validity_code(), PhysicsError::WorldDestroyed.code());
    assert!(!world.step(1.0 / 60.0));
    assert!(!world.apply_force(h, 1.0, 0.0));
    assert_eq!(world.create_box(0.0, 0.0, 1.0, 1.0, kind_dynamic(), 1.0), 0.0);
    assert!(!world.set_gravity(3.0));
}

#[test]
fn handles_never_cross_worlds() {
    let mut a = WorldCore::new();
    let mut b = WorldCore::new();
    assert_ne!(a.id(), b.id());

    let ha = a.create_box(Vec2::zero(), Vec2::new(1.0, 1.0), BodyKind::Dynamic, 1.0).unwrap();
    let hb = b.create_box(Vec2::zero(), Vec2::new(1.0, 1.0), BodyKind::Dynamic, 1.0).unwrap();

    assert!(!b.contains(ha));
    assert_eq!(b.remove_body(ha), Ok(false));
    assert_eq!(b.len(), 1);
    assert_eq!(b.apply_force(ha, Vec2::new(1.0, 0.0)), Err(PhysicsError::BodyNotInWorld));
    assert!(b.contains(hb));
    assert!(a.contains(ha));
}

#[test]
fn facade_handles_never_cross_worlds() {
    let mut a = World::new();
    let mut b = World::new();
    let ha = a.create_box(0.0, 0.0, 1.0, 1.0, kind_dynamic(), 1.0);
    let hb = b.create_box(0.0, 0.0, 1.0, 1.0, kind_dynamic(), 1.0);
    assert_ne!(ha, hb);

    assert!(!b.contains(ha));
    assert_eq!(b.index_of(ha), -1);
    assert!(!b.remove_body(ha));
    assert_eq!(b.body_count(), 1);
    assert!(!b.apply_impulse(ha, 1.0, 0.0));
    assert_eq!(b.last_error_code(), PhysicsError::BodyNotInWorld.code());
    assert!(a.contains(ha));
}

#[test]
fn settings_round_trip_through_the_facade() {
    let world = World::from_settings_json(r#"{"capacity": 16, "gravity": 0.0}"#).unwrap();
    assert_eq!(world.gravity(), 0.0);
    let settings = WorldSettings::from_json(&world.settings_json()).unwrap();
    assert_eq!(settings.capacity, 16);
    assert!(!settings.enforce_guards);
    assert!(world.core().is_empty());
}
