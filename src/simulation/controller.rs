//! Controller adapter: maps radar observations to discrete vehicle actions.

use ndarray::Array1;

use super::params::Params;
use super::vehicle::Vehicle;

/// An evolved decision function.
///
/// The evaluation loop treats controllers as opaque: given the observation
/// vector it expects one score per candidate action and never inspects the
/// controller's internals. Implementations should be pure functions of their
/// weights.
pub trait Controller: Send + Sync {
    /// Scores every action for the given observation.
    fn evaluate(&self, observation: &Array1<f32>) -> Array1<f32>;
}

impl<C: Controller + ?Sized> Controller for Box<C> {
    fn evaluate(&self, observation: &Array1<f32>) -> Array1<f32> {
        (**self).evaluate(observation)
    }
}

/// Discrete actions a controller can select, in output-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Output index 0: heading increases by the turn step.
    TurnRight,
    /// Output index 1: heading decreases by the turn step.
    TurnLeft,
    /// Output index 2: speed decreases by the speed step, ignored below the
    /// minimum speed.
    SlowDown,
    /// Output index 3: speed increases by the speed step.
    SpeedUp,
}

impl Action {
    /// Selects the action for a controller output vector via stable argmax.
    ///
    /// Output vectors may be longer than four entries; indices past the
    /// defined actions are unreachable surplus and select nothing.
    pub fn from_outputs(outputs: &Array1<f32>) -> Option<Action> {
        match stable_argmax(outputs) {
            0 => Some(Action::TurnRight),
            1 => Some(Action::TurnLeft),
            2 => Some(Action::SlowDown),
            3 => Some(Action::SpeedUp),
            _ => None,
        }
    }

    /// Applies this action to a vehicle.
    pub fn apply(self, vehicle: &mut Vehicle, params: &Params) {
        match self {
            Action::TurnRight => vehicle.heading += params.turn_step,
            Action::TurnLeft => vehicle.heading -= params.turn_step,
            Action::SlowDown => {
                if vehicle.speed >= params.min_speed {
                    vehicle.speed -= params.speed_step;
                }
            }
            Action::SpeedUp => vehicle.speed += params.speed_step,
        }
    }
}

/// First index of the maximum value.
///
/// Ties keep the earlier index, an empty vector yields 0, and NaN entries
/// never win the comparison, so the result is always deterministic.
pub fn stable_argmax(outputs: &Array1<f32>) -> usize {
    let mut best = 0;
    let mut best_value = f32::NEG_INFINITY;
    for (i, &value) in outputs.iter().enumerate() {
        if value > best_value {
            best = i;
            best_value = value;
        }
    }
    best
}
