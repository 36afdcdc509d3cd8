//! Vehicle state, kinematic update, and collision detection.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::super::geometric_utils::heading_vector;
use super::super::params::Params;
use super::super::track::TrackMap;
use super::radar::RadarReading;

/// Angular corner offsets relative to the heading, in degrees.
const CORNER_OFFSETS: [f32; 4] = [30.0, 150.0, 210.0, 330.0];

/// A simulated vehicle evaluated against one track for one generation.
///
/// Vehicles advance themselves one tick at a time: move, clamp to the
/// traversable rectangle, recompute corners, check collision, and recast the
/// radars. Death is permanent; a dead vehicle no longer updates anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Top-left reference position in pixels.
    pub position: Array1<f32>,
    /// Center of the bounding box, derived from `position` every tick.
    pub center: Array1<f32>,
    /// Heading in degrees, free-running (never wrapped).
    pub heading: f32,
    /// Forward speed in pixels per tick.
    pub speed: f32,
    /// Bounding-box corners, recomputed every tick.
    pub corners: Vec<Array1<f32>>,
    /// Latest radar sweep, one reading per configured sensor angle.
    pub radars: Vec<RadarReading>,
    /// False once any corner has touched a boundary pixel.
    pub alive: bool,
    /// Distance credited across all ticks.
    pub distance_traveled: f32,
    /// Update ticks survived.
    pub ticks_alive: u32,
}

impl Vehicle {
    /// Creates a vehicle at the configured spawn pose, already moving at the
    /// starting speed.
    pub fn new(params: &Params) -> Self {
        let position = Array1::from_vec(vec![params.start_position[0], params.start_position[1]]);
        Self {
            center: center_of(&position, params),
            position,
            heading: params.start_heading,
            speed: params.start_speed,
            corners: Vec::new(),
            radars: Vec::new(),
            alive: true,
            distance_traveled: 0.0,
            ticks_alive: 0,
        }
    }

    /// Whether the vehicle has not collided yet.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Advances the vehicle one tick. No-op for dead vehicles.
    pub fn update(&mut self, map: &TrackMap, params: &Params) {
        if !self.alive {
            return;
        }

        let direction = heading_vector(self.heading);
        self.position[0] += direction[0] * self.speed;
        self.position[1] += direction[1] * self.speed;
        self.clamp_position(params);

        // Credited even when the clamp discarded motion into an edge.
        self.distance_traveled += self.speed;
        self.ticks_alive += 1;

        self.center = center_of(&self.position, params);
        self.corners = self.corner_points(params);

        self.check_collision(map);
        self.sweep_radars(map, params);
    }

    /// Marks the vehicle dead on the first corner standing on a boundary
    /// pixel. Never resurrects: dead vehicles skip `update` entirely.
    pub fn check_collision(&mut self, map: &TrackMap) {
        for corner in &self.corners {
            if map.boundary_at(corner[0] as i32, corner[1] as i32) {
                self.alive = false;
                break;
            }
        }
    }

    fn clamp_position(&mut self, params: &Params) {
        // The far edges keep twice the sprite extent clear so the vehicle
        // stays fully on screen even before a collision registers.
        let max_x = params.bounds_width - 2.0 * params.car_width;
        let max_y = params.bounds_height - 2.0 * params.car_height;
        self.position[0] = self.position[0].clamp(params.edge_margin, max_x);
        self.position[1] = self.position[1].clamp(params.edge_margin, max_y);
    }

    /// Corner points at fixed angular offsets from the heading, on the
    /// half-diagonal circle around the center.
    fn corner_points(&self, params: &Params) -> Vec<Array1<f32>> {
        let length = params.half_diagonal();
        CORNER_OFFSETS
            .iter()
            .map(|offset| {
                let direction = heading_vector(self.heading + offset);
                Array1::from_vec(vec![
                    self.center[0] + direction[0] * length,
                    self.center[1] + direction[1] * length,
                ])
            })
            .collect()
    }
}

fn center_of(position: &Array1<f32>, params: &Params) -> Array1<f32> {
    Array1::from_vec(vec![
        position[0] + params.car_width / 2.0,
        position[1] + params.car_height / 2.0,
    ])
}
