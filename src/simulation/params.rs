//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// How per-member fitness is accumulated each tick.
///
/// The original evaluator adds a snapshot of cumulative distance every tick,
/// so total fitness grows with the area under the distance-time curve rather
/// than final distance alone. Both readings of that behavior are available
/// here; the cumulative one is the default for compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardPolicy {
    /// Add `distance_traveled / reward_divisor` every tick.
    CumulativePerTick,
    /// Add only the distance covered this tick over the same divisor, so the
    /// total equals final distance over the divisor.
    DeltaPerTick,
}

/// Simulation parameters that control vehicles, sensing, and evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Vehicle bounding-box width in pixels.
    pub car_width: f32,
    /// Vehicle bounding-box height in pixels.
    pub car_height: f32,
    /// Traversable area width in pixels.
    pub bounds_width: f32,
    /// Traversable area height in pixels.
    pub bounds_height: f32,
    /// Spawn position (top-left reference of the vehicle).
    pub start_position: [f32; 2],
    /// Spawn heading in degrees.
    pub start_heading: f32,
    /// Speed every vehicle starts a generation with.
    pub start_speed: f32,
    /// Heading change per turn action, in degrees.
    pub turn_step: f32,
    /// Speed change per throttle action.
    pub speed_step: f32,
    /// Slow-down actions are ignored below this speed.
    pub min_speed: f32,
    /// Lower clamp keeping vehicles away from the area edge.
    pub edge_margin: f32,
    /// Radar directions relative to the heading, in degrees.
    pub sensor_angles: Vec<f32>,
    /// Maximum radar reach in pixels.
    pub sensor_range: f32,
    /// Divisor normalizing radar distances into observation values.
    pub sensor_scale: f32,
    /// Ticks before a generation is cut off (40 s at 30 ticks/s).
    pub tick_budget: u32,
    /// RGBA color that marks boundary pixels in track assets.
    pub boundary_color: [u8; 4],
    /// Fitness accumulation mode.
    pub reward_policy: RewardPolicy,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            car_width: 60.0,
            car_height: 60.0,
            bounds_width: 1920.0,
            bounds_height: 1080.0,
            start_position: [830.0, 920.0],
            start_heading: 0.0,
            start_speed: 20.0,
            turn_step: 10.0,
            speed_step: 2.0,
            min_speed: 14.0,
            edge_margin: 20.0,
            sensor_angles: vec![-90.0, -45.0, 0.0, 45.0, 90.0],
            sensor_range: 300.0,
            sensor_scale: 30.0,
            tick_budget: 1200,
            boundary_color: [255, 255, 255, 255],
            reward_policy: RewardPolicy::CumulativePerTick,
        }
    }
}

impl Params {
    /// Half diagonal of the vehicle bounding box. Corners sit at this
    /// distance from the center.
    pub fn half_diagonal(&self) -> f32 {
        ((self.car_width / 2.0).powi(2) + (self.car_height / 2.0).powi(2)).sqrt()
    }

    /// Divisor applied to traveled distance when computing reward.
    pub fn reward_divisor(&self) -> f32 {
        self.car_width / 2.0
    }
}
