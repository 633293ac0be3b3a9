use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{seconds_between, Track};

pub const MIN_ACTIVE_SPEED_MS: f64 = 8.0 / 3.6;
pub const MAX_ACTIVE_SPEED_MS: f64 = 60.0 / 3.6;
pub const MAX_ACCELERATION_MS2: f64 = 4.0 / 3.6;

/// Decides which samples count as riding.
///
/// A sample is active when its speed lies strictly between the min and max
/// and its acceleration against the last reference sample stays under the
/// max. The reference moves to every sample that is not too fast and not
/// too abrupt, including slow ones.
#[derive(Debug, Clone, Default)]
pub struct SpeedFilter {
    prev: Option<(f64, f64)>, // (elapsed s, speed m/s)
}

impl SpeedFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&mut self, elapsed_s: f64, speed_ms: f64) -> bool {
        let acceleration = match self.prev {
            Some((t, v)) if elapsed_s > t => (speed_ms - v) / (elapsed_s - t),
            _ => 0.0,
        };
        let smooth = acceleration < MAX_ACCELERATION_MS2 && speed_ms < MAX_ACTIVE_SPEED_MS;
        if smooth {
            self.prev = Some((elapsed_s, speed_ms));
        }
        smooth && speed_ms > MIN_ACTIVE_SPEED_MS
    }
}

/// Sum of per-point distances (m).
pub fn total_distance(track: &Track) -> f64 {
    track.points.iter().map(|p| p.dist).sum()
}

/// Average speed over active samples only (km/h), 0 when nothing qualifies.
pub fn active_average_speed_kmh(track: &Track) -> f64 {
    let mut filter = SpeedFilter::new();
    let mut active_dist = 0.0;
    let mut active_time = 0.0;
    let mut elapsed = 0.0;

    for w in track.points.windows(2) {
        let dt = seconds_between(w[0].time, w[1].time);
        if dt <= 0.0 {
            continue;
        }
        elapsed += dt;
        let speed = w[1].dist / dt;
        if filter.validate(elapsed, speed) {
            active_dist += w[1].dist;
            active_time += dt;
        }
    }

    if active_time > 0.0 {
        3.6 * active_dist / active_time
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSummary {
    pub start: Option<DateTime<Utc>>,
    pub points: usize,
    pub distance_m: f64,
    pub duration_s: f64,
    pub avg_speed_kmh: f64,
}

pub fn summarize(track: &Track) -> TrackSummary {
    let duration_s = match (track.start_time(), track.end_time()) {
        (Some(a), Some(b)) => seconds_between(a, b),
        _ => 0.0,
    };
    TrackSummary {
        start: track.start_time(),
        points: track.len(),
        distance_m: total_distance(track),
        duration_s,
        avg_speed_kmh: active_average_speed_kmh(track),
    }
}
