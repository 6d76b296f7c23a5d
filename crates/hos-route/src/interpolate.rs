//! Position along a polyline at a cumulative distance.
//!
//! Segment lengths are great-circle miles (see [`GeoPoint::distance_miles`]);
//! within a segment the position is interpolated linearly in degree space.
//!
//! This is a pure, total function: it never fails and knows nothing about
//! time or duty status.  An empty polyline yields [`GeoPoint::UNKNOWN`].

use hos_core::GeoPoint;

/// A polyline with precomputed cumulative vertex distances.
///
/// Build once per route when many positions are needed; each lookup is then
/// a binary search instead of a walk from the first vertex.
#[derive(Clone, Debug, Default)]
pub struct MeasuredPolyline {
    points:     Vec<GeoPoint>,
    /// `cumulative[i]` = miles from vertex 0 to vertex `i`.  Non-decreasing.
    cumulative: Vec<f64>,
}

impl MeasuredPolyline {
    pub fn new(points: &[GeoPoint]) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                total += points[i - 1].distance_miles(*p);
            }
            cumulative.push(total);
        }
        Self { points: points.to_vec(), cumulative }
    }

    /// Total length in miles; `0.0` for empty or single-vertex polylines.
    pub fn length_miles(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position `distance_miles` along the polyline.
    ///
    /// - `distance <= 0` (or NaN) → first vertex
    /// - `distance >= length`     → last vertex
    /// - empty polyline           → [`GeoPoint::UNKNOWN`]
    pub fn position_at(&self, distance_miles: f64) -> GeoPoint {
        let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) else {
            return GeoPoint::UNKNOWN;
        };
        if distance_miles.is_nan() || distance_miles <= 0.0 {
            return first;
        }

        // First vertex whose cumulative distance meets or exceeds the target.
        // cumulative[0] == 0 < target, so idx >= 1 whenever it is in range.
        let idx = self.cumulative.partition_point(|&c| c < distance_miles);
        if idx >= self.points.len() {
            return last;
        }

        let (a, b) = (self.points[idx - 1], self.points[idx]);
        let seg_start = self.cumulative[idx - 1];
        let seg_len = self.cumulative[idx] - seg_start;
        // seg_len > 0: cumulative[idx] >= target > cumulative[idx - 1].
        a.lerp(b, (distance_miles - seg_start) / seg_len)
    }
}

/// One-shot form of [`MeasuredPolyline::position_at`].
pub fn position_at_distance(distance_miles: f64, polyline: &[GeoPoint]) -> GeoPoint {
    MeasuredPolyline::new(polyline).position_at(distance_miles)
}
