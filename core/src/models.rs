use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw timestamped position as it comes out of the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    pub lat: f64, // degrees
    pub lon: f64, // degrees
    pub time: DateTime<Utc>,
}

impl Fix {
    pub fn new(lat: f64, lon: f64, time: DateTime<Utc>) -> Self {
        Self { lat, lon, time }
    }
}

/// Cleaned track sample.
///
/// `dist` is the raw distance from the previous kept point right after
/// ingestion, and the locally averaged step distance after smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,  // degrees
    pub lon: f64,  // degrees
    pub time: DateTime<Utc>,
    pub dist: f64, // meters
}

impl Point {
    pub fn from_fix(fix: Fix, dist: f64) -> Self {
        Self {
            lat: fix.lat,
            lon: fix.lon,
            time: fix.time,
            dist,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub points: Vec<Point>,
}

impl Track {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Timestamp of the first point; the track is keyed by it on export.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.points.first().map(|p| p.time)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.points.last().map(|p| p.time)
    }
}

/// Signed seconds from `a` to `b`, microsecond resolution.
pub fn seconds_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    let d = b - a;
    match d.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => d.num_seconds() as f64,
    }
}
