//! Radar sensing - rays cast from the vehicle center against the track map.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::super::geometric_utils::{heading_vector, point_distance};
use super::super::params::Params;
use super::super::track::TrackMap;
use super::Vehicle;

/// Result of a single radar ray.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarReading {
    /// Where the ray stopped: the first boundary pixel or the maximum range.
    pub endpoint: Array1<f32>,
    /// Euclidean distance from the vehicle center to the endpoint.
    pub distance: f32,
}

impl Vehicle {
    /// Clears and recasts every configured radar.
    pub(super) fn sweep_radars(&mut self, map: &TrackMap, params: &Params) {
        self.radars.clear();
        for degree in &params.sensor_angles {
            let reading = self.cast_radar(*degree, map, params);
            self.radars.push(reading);
        }
    }

    /// Casts one ray at `degree` relative to the heading, stepping in unit
    /// lengths until a boundary pixel or the maximum range. Edge-of-map
    /// queries read as boundary, so rays always terminate.
    fn cast_radar(&self, degree: f32, map: &TrackMap, params: &Params) -> RadarReading {
        let direction = heading_vector(self.heading + degree);
        let mut length = 0.0_f32;
        let mut x = self.center[0] as i32;
        let mut y = self.center[1] as i32;

        while !map.boundary_at(x, y) && length < params.sensor_range {
            length += 1.0;
            x = (self.center[0] + direction[0] * length) as i32;
            y = (self.center[1] + direction[1] * length) as i32;
        }

        let endpoint = Array1::from_vec(vec![x as f32, y as f32]);
        let distance = point_distance(&self.center, &endpoint);
        RadarReading { endpoint, distance }
    }

    /// Observation vector fed to the controller: one floored, normalized
    /// distance per sensor, zero-padded if the last sweep came up short.
    pub fn observation(&self, params: &Params) -> Array1<f32> {
        let mut values = Array1::zeros(params.sensor_angles.len());
        for (slot, reading) in values.iter_mut().zip(&self.radars) {
            *slot = (reading.distance / params.sensor_scale).floor();
        }
        values
    }
}
