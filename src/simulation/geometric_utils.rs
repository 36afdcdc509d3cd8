//! Geometric helpers shared by vehicle motion and radar sensing.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;

/// Unit direction vector for a heading given in degrees.
///
/// Screen coordinates put +y downward, so clockwise-positive headings go
/// through `360 - degrees` before the trigonometry. Motion and radar casting
/// both use this function, which keeps sensor rays aligned with travel.
pub fn heading_vector(degrees: f32) -> Array1<f32> {
    let radians = (360.0 - degrees).to_radians();
    Array1::from_vec(vec![radians.cos(), radians.sin()])
}

/// Euclidean distance between two 2D points.
pub fn point_distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    let pa = Point::new(a[0], a[1]);
    let pb = Point::new(b[0], b[1]);
    Euclidean.distance(&pa, &pb)
}
