#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use evodrive::simulation::controller::Controller;
use evodrive::simulation::evaluation::{Generation, GenerationStatus};
use evodrive::simulation::params::{Params, RewardPolicy};
use evodrive::simulation::track::TrackMap;
use ndarray::Array1;

/// Controller that always returns the same output vector.
struct FixedOutputs(Vec<f32>);

impl Controller for FixedOutputs {
    fn evaluate(&self, _observation: &Array1<f32>) -> Array1<f32> {
        Array1::from_vec(self.0.clone())
    }
}

/// Surplus index wins the argmax, so no action is ever taken.
fn coast() -> FixedOutputs {
    FixedOutputs(vec![0.0, 0.0, 0.0, 0.0, 1.0])
}

fn speed_up() -> FixedOutputs {
    FixedOutputs(vec![0.0, 0.0, 0.0, 1.0])
}

fn turn_right() -> FixedOutputs {
    FixedOutputs(vec![1.0, 0.0, 0.0, 0.0])
}

fn create_test_params() -> Params {
    Params::default()
}

fn open_map(params: &Params) -> TrackMap {
    TrackMap::open(params.bounds_width as usize, params.bounds_height as usize)
}

#[test]
fn open_map_run_accrues_distance_monotonically() {
    let params = create_test_params();
    let map = open_map(&params);
    let controllers = vec![speed_up()];
    let mut generation = Generation::new(0, 1, &params);

    let mut previous_distance = 0.0;
    let mut previous_delta = 0.0;
    for tick in 1..=40 {
        let status = generation.step(&controllers, &map, &params);
        assert_eq!(status, GenerationStatus::Running);

        let vehicle = &generation.vehicles()[0];
        assert!(vehicle.is_alive());
        assert_eq!(generation.tick(), tick);

        // Each tick covers exactly the current speed, which grows by the
        // speed step under the constant speed-up controller.
        let delta = vehicle.distance_traveled - previous_distance;
        assert_eq!(delta, vehicle.speed);
        assert!(delta > previous_delta);
        previous_distance = vehicle.distance_traveled;
        previous_delta = delta;
    }
}

#[test]
fn driving_into_a_wall_kills_within_bounded_ticks() {
    let params = create_test_params();
    let map = TrackMap::from_fn(
        params.bounds_width as usize,
        params.bounds_height as usize,
        |x, _| x >= 1500,
    );
    let controllers = vec![coast()];
    let mut generation = Generation::new(0, 1, &params);

    generation.run(&controllers, &map, &params);

    // Spawn-to-wall distance over the fixed speed bounds the lifetime.
    let bound = ((1500.0 - params.start_position[0]) / params.start_speed) as u32 + 5;
    assert_eq!(generation.status(), GenerationStatus::Terminated);
    assert!(!generation.vehicles()[0].is_alive());
    assert!(generation.tick() <= bound);
    assert!(generation.tick() < params.tick_budget);
}

#[test]
fn dead_members_accrue_no_further_fitness() {
    let params = create_test_params();
    let map = TrackMap::from_fn(
        params.bounds_width as usize,
        params.bounds_height as usize,
        |x, _| x >= 1500,
    );
    // Member 0 drives straight into the wall; member 1 circles and survives.
    let controllers = vec![coast(), turn_right()];
    let mut generation = Generation::new(0, 2, &params);

    let mut steps = 0;
    while generation.vehicles()[0].is_alive() {
        generation.step(&controllers, &map, &params);
        steps += 1;
        assert!(steps < 60, "straight driver should have hit the wall");
    }

    let frozen = generation.fitness()[0];
    let survivor_before = generation.fitness()[1];
    for _ in 0..20 {
        let status = generation.step(&controllers, &map, &params);
        assert_eq!(status, GenerationStatus::Running);
    }

    assert_eq!(generation.fitness()[0], frozen);
    assert!(generation.fitness()[1] > survivor_before);
    assert_eq!(generation.alive_count(), 1);
}

#[test]
fn generation_ends_as_soon_as_all_vehicles_die() {
    let params = create_test_params();
    let map = TrackMap::from_fn(100, 100, |_, _| true);
    let controllers = vec![coast(), coast(), coast()];
    let mut generation = Generation::new(0, 3, &params);

    generation.run(&controllers, &map, &params);

    assert_eq!(generation.status(), GenerationStatus::Terminated);
    assert_eq!(generation.alive_count(), 0);
    assert_eq!(generation.tick(), 1);
}

#[test]
fn generation_ends_when_the_tick_budget_runs_out() {
    let mut params = create_test_params();
    params.tick_budget = 25;
    let map = open_map(&params);
    let controllers = vec![coast()];
    let mut generation = Generation::new(0, 1, &params);

    generation.run(&controllers, &map, &params);

    assert_eq!(generation.status(), GenerationStatus::Terminated);
    assert_eq!(generation.tick(), 25);
    assert_eq!(generation.alive_count(), 1);

    // Further steps are refused once terminated.
    let tick = generation.tick();
    generation.step(&controllers, &map, &params);
    assert_eq!(generation.tick(), tick);
}

#[test]
fn cumulative_policy_sums_distance_snapshots() {
    let params = create_test_params();
    let map = open_map(&params);
    let controllers = vec![coast()];
    let mut generation = Generation::new(0, 1, &params);

    for _ in 0..5 {
        generation.step(&controllers, &map, &params);
    }

    // Constant speed 20, divisor 30: sum of 20k/30 for k = 1..=5.
    let expected = 20.0 * (1 + 2 + 3 + 4 + 5) as f32 / 30.0;
    assert!((generation.fitness()[0] - expected).abs() < 1e-3);
}

#[test]
fn delta_policy_sums_to_final_distance() {
    let mut params = create_test_params();
    params.reward_policy = RewardPolicy::DeltaPerTick;
    let map = open_map(&params);
    let controllers = vec![coast()];
    let mut generation = Generation::new(0, 1, &params);

    for _ in 0..5 {
        generation.step(&controllers, &map, &params);
    }

    let vehicle = &generation.vehicles()[0];
    let expected = vehicle.distance_traveled / params.reward_divisor();
    assert!((generation.fitness()[0] - expected).abs() < 1e-3);
}

#[test]
fn run_while_aborts_between_ticks_without_corrupting_fitness() {
    let params = create_test_params();
    let map = open_map(&params);
    let controllers = vec![coast()];
    let mut generation = Generation::new(3, 1, &params);

    let status = generation.run_while(&controllers, &map, &params, |g| g.tick() < 10);

    assert_eq!(status, GenerationStatus::Running);
    assert_eq!(generation.tick(), 10);
    assert_eq!(generation.index(), 3);

    let expected = 20.0 * (1..=10).sum::<i32>() as f32 / 30.0;
    assert!((generation.fitness()[0] - expected).abs() < 1e-3);
}
