use std::collections::HashSet;

use flocking::boid::separation_contribution;
use flocking::{Boid, Bounds, Flock, SteeringParameters, Vector2, BOID_SIZE_UNIT};

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 300.0;

fn flock() -> Flock {
    Flock::with_seed(Bounds::new(WIDTH, HEIGHT).unwrap(), 0xB01D)
}

fn close(a: Vector2, b: Vector2) -> bool {
    (a - b).length() < 1e-4
}

/// Expected post-tick boids, computed one by one against the pre-tick snapshot
fn expected_after_step(flock: &Flock, params: &SteeringParameters) -> Vec<Boid> {
    let snapshot = flock.snapshot();
    flock
        .boids()
        .iter()
        .map(|boid| {
            let mut next = boid.clone();
            next.run(&snapshot, params, WIDTH, HEIGHT);
            next
        })
        .collect()
}

#[test]
fn isolated_boid_keeps_velocity() {
    let mut flock = flock();
    let velocity = Vector2::new(1.2, -1.6);
    let lonely = flock.insert(Vector2::new(100.0, 100.0), velocity);
    let far = flock.insert(Vector2::new(300.0, 250.0), Vector2::new(0.0, 1.0));

    flock.step(&SteeringParameters::default());

    let boid = flock.get(lonely).unwrap();
    assert_eq!(boid.velocity(), velocity);
    assert_eq!(boid.position(), Vector2::new(100.0, 100.0) + velocity);
    assert_eq!(boid.acceleration(), Vector2::ZERO);

    let other = flock.get(far).unwrap();
    assert_eq!(other.velocity(), Vector2::new(0.0, 1.0));
}

#[test]
fn boid_never_perceives_itself() {
    let mut flock = flock();
    let id = flock.insert(Vector2::new(50.0, 50.0), Vector2::new(2.0, 0.0));
    let params = SteeringParameters {
        perception_radius: 1.0e6,
        separation_radius: 1.0e6,
        ..Default::default()
    };

    let snapshot = flock.snapshot();
    let steering = flock.get(id).unwrap().steer(&snapshot, &params);
    assert_eq!(steering.neighbors, 0);
    assert_eq!(steering.weighted(&params), Vector2::ZERO);

    flock.step(&params);
    assert_eq!(flock.get(id).unwrap().velocity(), Vector2::new(2.0, 0.0));
}

#[test]
fn acceleration_and_velocity_stay_clamped() {
    let parameter_sets = [
        SteeringParameters::default(),
        SteeringParameters {
            max_force: 2.0,
            max_speed: 8.0,
            separation_weight: 10.0,
            ..Default::default()
        },
        SteeringParameters {
            max_force: 0.01,
            max_speed: 0.5,
            perception_radius: 150.0,
            separation_radius: 150.0,
            alignment_weight: 10.0,
            cohesion_weight: 10.0,
            separation_weight: 0.0,
        },
    ];

    for params in parameter_sets {
        let mut flock = flock();
        flock.populate(300);

        for _ in 0..5 {
            let snapshot = flock.snapshot();
            for boid in flock.boids() {
                let mut trial = boid.clone();
                trial.flock(&snapshot, &params);
                assert!(trial.acceleration().length() <= params.max_force * (1.0 + 1e-5));
                trial.update(params.max_speed);
                assert!(trial.velocity().length() <= params.max_speed * (1.0 + 1e-5));
                assert!(trial.position().is_finite());
            }
            flock.step(&params);
        }
    }
}

#[test]
fn closer_neighbor_repels_harder() {
    let position = Vector2::new(100.0, 100.0);
    let near = separation_contribution(position, Vector2::new(105.0, 100.0), 5.0);
    let far = separation_contribution(position, Vector2::new(100.0, 115.0), 15.0);

    assert!(near.length() > far.length());
    // inverse-square: three times the distance, a ninth of the push per unit offset
    assert!((near.length() - 0.2).abs() < 1e-6);
    assert!((far.length() - 1.0 / 15.0).abs() < 1e-6);
}

#[test]
fn boids_wrap_around_every_edge() {
    let r = BOID_SIZE_UNIT;
    let cases = [
        (Vector2::new(WIDTH + r + 1.0, 150.0), Vector2::new(-r, 150.0)),
        (Vector2::new(-r - 1.0, 150.0), Vector2::new(WIDTH + r, 150.0)),
        (Vector2::new(200.0, HEIGHT + r + 1.0), Vector2::new(200.0, -r)),
        (Vector2::new(200.0, -r - 1.0), Vector2::new(200.0, HEIGHT + r)),
    ];

    for (start, expected) in cases {
        let mut flock = flock();
        let id = flock.insert(start, Vector2::ZERO);
        flock.step(&SteeringParameters::default());
        assert_eq!(flock.get(id).unwrap().position(), expected, "start {:?}", start);
    }
}

#[test]
fn alignment_reads_pre_tick_velocity() {
    let mut flock = flock();
    let a = flock.insert(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
    flock.insert(Vector2::new(10.0, 0.0), Vector2::new(-1.0, 0.0));

    let params = SteeringParameters::default();
    let snapshot = flock.snapshot();
    let steering = flock.get(a).unwrap().steer(&snapshot, &params);

    // desired heading is B's velocity scaled to max speed, minus A's own velocity
    assert!(close(steering.alignment, Vector2::new(-5.0, 0.0)));
}

#[test]
fn tick_uses_snapshot_not_updated_neighbors() {
    let mut flock = flock();
    let a = flock.insert(Vector2::new(100.0, 100.0), Vector2::new(1.0, 0.0));
    let b = flock.insert(Vector2::new(110.0, 100.0), Vector2::new(-1.0, 0.0));

    // Alignment only, with a force limit loose enough that the result depends on what B sees.
    let params = SteeringParameters {
        max_force: 100.0,
        cohesion_weight: 0.0,
        separation_weight: 0.0,
        ..Default::default()
    };
    flock.step(&params);

    let a = flock.get(a).unwrap();
    let b = flock.get(b).unwrap();
    assert!(close(a.velocity(), Vector2::new(-4.0, 0.0)));
    assert!(close(a.position(), Vector2::new(96.0, 100.0)));
    // Had B seen A's updated velocity (-4, 0) it would have turned left instead.
    assert!(close(b.velocity(), Vector2::new(4.0, 0.0)));
    assert!(close(b.position(), Vector2::new(114.0, 100.0)));
}

#[test]
fn populated_flock_matches_snapshot_replay() {
    let mut flock = flock();
    flock.populate(120);
    let params = SteeringParameters::default();

    for _ in 0..3 {
        let expected = expected_after_step(&flock, &params);
        flock.step(&params);
        for (boid, want) in flock.boids().iter().zip(expected.iter()) {
            assert_eq!(boid.id(), want.id());
            assert_eq!(boid.position(), want.position());
            assert_eq!(boid.velocity(), want.velocity());
        }
    }
}

#[test]
fn spawned_boids_survive_a_tick() {
    let mut flock = flock();
    let n = 40;
    let ids: Vec<_> = (0..n)
        .map(|i| flock.add_boid(10.0 * i as f32, 7.0 * i as f32))
        .collect();

    let expected = expected_after_step(&flock, &SteeringParameters::default());
    flock.step(&SteeringParameters::default());

    assert_eq!(flock.len(), n);
    assert_eq!(flock.tick_count(), 1);
    let unique: HashSet<_> = flock.boids().iter().map(Boid::id).collect();
    assert_eq!(unique.len(), n);
    for id in ids {
        assert!(unique.contains(&id));
    }
    for (boid, want) in flock.boids().iter().zip(expected.iter()) {
        assert_eq!(boid.position(), want.position());
    }
}

#[test]
fn spawning_between_ticks_grows_the_flock() {
    let mut flock = flock();
    flock.populate(10);
    flock.step(&SteeringParameters::default());

    let spawned = flock.add_boid(200.0, 150.0);
    flock.step(&SteeringParameters::default());

    assert_eq!(flock.len(), 11);
    assert_ne!(flock.get(spawned).unwrap().position(), Vector2::new(200.0, 150.0));
}
