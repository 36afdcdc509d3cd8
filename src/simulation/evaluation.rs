//! Per-generation evaluation loop coupling vehicles to their controllers.

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::controller::{Action, Controller};
use super::params::{Params, RewardPolicy};
use super::track::TrackMap;
use super::vehicle::Vehicle;

/// Whether a generation is still being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStatus {
    /// At least one vehicle is alive and the tick budget remains.
    Running,
    /// All vehicles died or the tick budget ran out.
    Terminated,
}

/// Evaluation state for one generation.
///
/// Holds one vehicle and one fitness accumulator per population member and
/// steps them in lockstep against a shared read-only track. Vehicles never
/// interact with each other, so the per-member work runs in parallel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    vehicles: Vec<Vehicle>,
    fitness: Vec<f32>,
    tick: u32,
    index: u32,
    status: GenerationStatus,
}

impl Generation {
    /// Creates the evaluation state for `population_size` members.
    ///
    /// The generation index is explicit state owned by the caller, not a
    /// shared counter.
    pub fn new(index: u32, population_size: usize, params: &Params) -> Self {
        info!("generation {index}: evaluating {population_size} members");
        Self {
            vehicles: (0..population_size)
                .map(|_| Vehicle::new(params))
                .collect(),
            fitness: vec![0.0; population_size],
            tick: 0,
            index,
            status: GenerationStatus::Running,
        }
    }

    /// Advances every still-alive member one tick: observe, decide, act,
    /// update, accumulate reward. Dead members are skipped entirely.
    ///
    /// Panics if `controllers` does not match the population size.
    pub fn step<C: Controller>(
        &mut self,
        controllers: &[C],
        map: &TrackMap,
        params: &Params,
    ) -> GenerationStatus {
        assert_eq!(
            controllers.len(),
            self.vehicles.len(),
            "one controller per vehicle"
        );

        if self.status == GenerationStatus::Terminated {
            return self.status;
        }

        self.vehicles
            .par_iter_mut()
            .zip(self.fitness.par_iter_mut())
            .zip(controllers.par_iter())
            .for_each(|((vehicle, fitness), controller)| {
                if !vehicle.is_alive() {
                    return;
                }

                // The observation reflects the previous tick's radar sweep,
                // matching the decide-then-update order of the loop. The
                // first tick therefore sees all zeros.
                let outputs = controller.evaluate(&vehicle.observation(params));
                if let Some(action) = Action::from_outputs(&outputs) {
                    action.apply(vehicle, params);
                }
                vehicle.update(map, params);
                *fitness += reward(vehicle, params);
            });

        self.tick += 1;

        if self.alive_count() == 0 {
            debug!(
                "generation {}: all vehicles dead at tick {}",
                self.index, self.tick
            );
            self.status = GenerationStatus::Terminated;
        } else if self.tick >= params.tick_budget {
            debug!(
                "generation {}: tick budget exhausted ({} ticks)",
                self.index, self.tick
            );
            self.status = GenerationStatus::Terminated;
        }
        self.status
    }

    /// Runs the loop to termination and returns the final fitness scores.
    pub fn run<C: Controller>(
        &mut self,
        controllers: &[C],
        map: &TrackMap,
        params: &Params,
    ) -> &[f32] {
        while self.step(controllers, map, params) == GenerationStatus::Running {}
        &self.fitness
    }

    /// Like [`Generation::run`], but checks `keep_going` between ticks so a
    /// host can abort a generation early. Fitness already accumulated stays
    /// valid either way.
    pub fn run_while<C: Controller>(
        &mut self,
        controllers: &[C],
        map: &TrackMap,
        params: &Params,
        mut keep_going: impl FnMut(&Self) -> bool,
    ) -> GenerationStatus {
        while self.status == GenerationStatus::Running && keep_going(self) {
            self.step(controllers, map, params);
        }
        self.status
    }

    /// The vehicles in population order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Accumulated fitness per population member.
    pub fn fitness(&self) -> &[f32] {
        &self.fitness
    }

    /// Ticks evaluated so far.
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Generation index this state was created with.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Current loop status.
    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// Number of vehicles that have not collided yet.
    pub fn alive_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_alive()).count()
    }
}

/// Per-tick fitness contribution for one vehicle.
///
/// Under the cumulative policy each tick credits a snapshot of total
/// distance; under the delta policy it credits only this tick's increment,
/// which equals the current speed.
fn reward(vehicle: &Vehicle, params: &Params) -> f32 {
    match params.reward_policy {
        RewardPolicy::CumulativePerTick => vehicle.distance_traveled / params.reward_divisor(),
        RewardPolicy::DeltaPerTick => vehicle.speed / params.reward_divisor(),
    }
}
