use car_scene::data_structures::particle::{
    Particle, RAIN_FLOOR, RAIN_TOP, Rain, Smoke, spawn_exhaust, spawn_rain,
};
use cgmath::{Vector3, Vector4};

use crate::common::test_utils::{assert_near, seeded_rng};

mod common;

fn fall() -> Vector4<f32> {
    Vector4::new(0.0, -0.01, 0.0, 0.0)
}

#[test]
fn rain_should_fall_one_step_per_update() {
    let mut drop = Rain::new(Vector4::new(0.3, 0.5, -0.2, 0.0), fall());

    drop.update();

    assert_near(drop.offset.y, 0.49, "y");
    assert_near(drop.offset.x, 0.3, "x");
    assert_near(drop.offset.z, -0.2, "z");
}

#[test]
fn rain_should_wrap_to_the_top_at_the_floor() {
    let mut drop = Rain::new(Vector4::new(0.0, -0.995, 0.0, 0.0), fall());

    drop.update();

    assert_eq!(drop.offset.y, RAIN_TOP);
}

#[test]
fn rain_spawned_on_the_floor_wraps() {
    let mut drop = Rain::new(Vector4::new(0.0, RAIN_FLOOR, 0.0, 0.0), fall());

    drop.update();

    assert_eq!(drop.offset.y, RAIN_TOP);
}

#[test]
fn spawned_rain_should_fill_the_unit_cube_on_a_grid() {
    let mut rng = seeded_rng();
    let drops = spawn_rain(&mut rng, 5000, 0.01);

    assert_eq!(drops.len(), 5000);
    for drop in &drops {
        assert_eq!(drop.speed, fall());
        assert_eq!(drop.offset.w, 0.0);
        for coordinate in [drop.offset.x, drop.offset.y, drop.offset.z] {
            assert!((-1.0..=0.99 + 1e-5).contains(&coordinate), "{coordinate} out of range");
            let steps = (coordinate + 1.0) * 100.0;
            assert!((steps - steps.round()).abs() < 1e-3, "{coordinate} is off the grid");
        }
    }
    // 5000 draws over 200 values per axis should spread out.
    assert!(drops.iter().any(|d| d.offset.x < -0.5));
    assert!(drops.iter().any(|d| d.offset.x > 0.5));
}

#[test]
fn rain_should_stay_in_its_column_forever() {
    let mut rng = seeded_rng();
    let mut drops = spawn_rain(&mut rng, 200, 0.01);
    let columns = drops
        .iter()
        .map(|d| (d.offset.x, d.offset.z))
        .collect::<Vec<_>>();

    for _ in 0..1000 {
        drops.iter_mut().for_each(Particle::update);
    }

    for (drop, (x, z)) in drops.iter().zip(columns) {
        assert!(drop.offset.y > RAIN_FLOOR && drop.offset.y <= RAIN_TOP);
        assert_eq!(drop.offset.x, x);
        assert_eq!(drop.offset.z, z);
    }
}

fn smoke_box() -> (Vector4<f32>, Vector4<f32>) {
    (
        Vector4::new(-1.0, -1.0, -1.0, 0.0),
        Vector4::new(1.0, 1.0, 1.0, 0.0),
    )
}

#[test]
fn smoke_should_drift_while_inside_its_box() {
    let (start, end) = smoke_box();
    let mut puff = Smoke::new(
        Vector4::new(0.0, 0.0, 0.0, 0.0),
        Vector4::new(0.1, 0.2, -0.3, 0.0),
        start,
        end,
    );

    puff.update();
    puff.update();

    assert_near(puff.offset.x, 0.2, "x");
    assert_near(puff.offset.y, 0.4, "y");
    assert_near(puff.offset.z, -0.6, "z");
    assert!(puff.is_inside());
}

#[test]
fn smoke_should_restart_after_leaving_on_any_axis() {
    let (start, end) = smoke_box();
    let origin = Vector4::new(0.5, 0.0, 0.0, 0.0);
    let speeds = [
        Vector4::new(0.6, 0.0, 0.0, 0.0),
        Vector4::new(0.0, 1.5, 0.0, 0.0),
        Vector4::new(0.0, 0.0, -1.5, 0.0),
    ];

    for speed in speeds {
        let mut puff = Smoke::new(origin, speed, start, end);
        puff.update();
        assert_eq!(puff.offset, origin, "speed {speed:?} should have reset the puff");
    }
}

#[test]
fn exhaust_should_start_inside_its_plume() {
    let mut rng = seeded_rng();
    let pipe = Vector3::new(0.3, -0.6, -1.55);
    let puffs = spawn_exhaust(&mut rng, pipe, Vector3::new(0.15, 0.5, 0.6), 150);

    assert_eq!(puffs.len(), 150);
    for puff in &puffs {
        assert_eq!(puff.origin, pipe.extend(0.0));
        assert!(puff.is_inside(), "{:?} starts outside its box", puff.offset);
        assert!(puff.speed.y > 0.0, "smoke rises");
        assert!(puff.speed.z < 0.0, "smoke trails behind the car");
    }
    // Head starts spread the plume out instead of stacking puffs on the pipe.
    assert!(puffs.iter().any(|p| p.offset != p.origin));
}

#[test]
fn exhaust_should_keep_cycling() {
    let mut rng = seeded_rng();
    let mut puffs = spawn_exhaust(
        &mut rng,
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.15, 0.5, 0.6),
        50,
    );

    for _ in 0..500 {
        puffs.iter_mut().for_each(Particle::update);
        assert!(puffs.iter().all(Smoke::is_inside));
    }
}

#[test]
fn raw_particle_should_carry_the_offset() {
    let drop = Rain::new(Vector4::new(0.1, 0.2, 0.3, 0.0), fall());

    assert_eq!(drop.to_raw().offset, [0.1, 0.2, 0.3, 0.0]);
}
