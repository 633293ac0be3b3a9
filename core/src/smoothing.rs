use crate::config::TrackConfig;
use crate::geodesy::distance;
use crate::models::{Point, Track};

/// Windowed step distance for every point.
///
/// For point `i` the window `[l, m]` reaches at most `smooth_neighbors` points
/// and `smooth_window_s` seconds to each side; the value is the straight
/// distance from `l` to `m` divided by the number of steps between them.
/// Index 0 is always 0. Positions are the only input, stored `dist` is ignored.
pub fn smoothed_distances(points: &[Point], cfg: &TrackConfig) -> Vec<f64> {
    if points.is_empty() {
        return Vec::new();
    }
    let last = points.len() - 1;
    let n = cfg.smooth_neighbors;
    let window = cfg.smooth_window();

    let mut out = Vec::with_capacity(points.len());
    out.push(0.0);

    for i in 1..=last {
        let t = points[i].time;

        // a bound past chrono's range leaves that side limited by count only
        let mut l = i.saturating_sub(n);
        if let Some(min_time) = t.checked_sub_signed(window) {
            while l + 1 < i && points[l].time < min_time {
                l += 1;
            }
        }

        let mut m = (i + n).min(last);
        if let Some(max_time) = t.checked_add_signed(window) {
            while m > i && points[m].time > max_time {
                m -= 1;
            }
        }

        let d = if m > l {
            distance(points[l].lat, points[l].lon, points[m].lat, points[m].lon) / (m - l) as f64
        } else {
            // only reachable with smooth_neighbors == 0: plain step from the previous point
            let prev = &points[i - 1];
            distance(prev.lat, prev.lon, points[i].lat, points[i].lon)
        };
        out.push(d);
    }

    out
}

/// Overwrites `dist` of every point with its smoothed value.
pub fn smooth_track(track: &mut Track, cfg: &TrackConfig) {
    let smoothed = smoothed_distances(&track.points, cfg);
    for (p, d) in track.points.iter_mut().zip(smoothed) {
        p.dist = d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn pt(lat: f64, s: i64) -> Point {
        Point {
            lat,
            lon: 30.0,
            time: Utc.timestamp_opt(1_600_000_000 + s, 0).unwrap(),
            dist: 0.0,
        }
    }

    #[test]
    fn empty_and_single() {
        let cfg = TrackConfig::default();
        assert!(smoothed_distances(&[], &cfg).is_empty());
        assert_eq!(smoothed_distances(&[pt(59.0, 0)], &cfg), vec![0.0]);
    }

    #[test]
    fn uniform_motion_stays_uniform() {
        // 1e-4 degree of latitude per second, about 11.1 m
        let points: Vec<Point> = (0..20).map(|s| pt(59.0 + s as f64 * 1e-4, s)).collect();
        let step = distance(59.0, 30.0, 59.0001, 30.0);
        let out = smoothed_distances(&points, &TrackConfig::default());
        for d in &out[1..] {
            assert!((d - step).abs() < 1e-3, "{d} vs {step}");
        }
    }

    #[test]
    fn zero_neighbors_falls_back_to_raw_step() {
        let cfg = TrackConfig { smooth_neighbors: 0, ..TrackConfig::default() };
        let points = vec![pt(59.0, 0), pt(59.0001, 1), pt(59.0003, 2)];
        let out = smoothed_distances(&points, &cfg);
        assert!((out[2] - distance(59.0001, 30.0, 59.0003, 30.0)).abs() < 1e-9);
    }

    #[test]
    fn time_window_trims_distant_neighbors() {
        // the gap before index 2 is wider than the window, so l moves up to 1
        let points = vec![pt(59.0, 0), pt(59.0001, 1), pt(59.0002, 100)];
        let out = smoothed_distances(&points, &TrackConfig::default());
        assert!((out[2] - distance(59.0001, 30.0, 59.0002, 30.0)).abs() < 1e-9);
    }

    #[test]
    fn window_past_chrono_range_uses_count_only() {
        let cfg = TrackConfig { smooth_window_s: 1e13, ..TrackConfig::default() };
        let points = vec![pt(59.0, 0), pt(59.0001, 1), pt(59.0002, 100)];
        let out = smoothed_distances(&points, &cfg);
        assert!((out[2] - distance(59.0, 30.0, 59.0002, 30.0) / 2.0).abs() < 1e-9);
    }
}
