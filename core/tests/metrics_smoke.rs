use chrono::{TimeZone, Utc};
use cyclegpx_core::metrics::{fixes_with_outcome, gather_text, tracks_total};
use cyclegpx_core::{clean_track, Fix, Outcome, TrackConfig};

#[test]
fn outcomes_are_counted() {
    let t = |s: i64| Utc.timestamp_opt(1_622_728_859 + s, 0).unwrap();
    let before_dup = fixes_with_outcome(Outcome::Duplicate);
    let before_late = fixes_with_outcome(Outcome::OutOfOrder);
    let before_tracks = tracks_total();

    let fixes = vec![
        Ok(Fix::new(59.9, 30.2, t(0))),
        Ok(Fix::new(59.9, 30.2, t(1))),
        Ok(Fix::new(59.9001, 30.2, t(2))),
        Ok(Fix::new(59.9002, 30.2, t(1))),
    ];
    let track = clean_track(fixes, &TrackConfig::default()).unwrap();
    assert_eq!(track.len(), 2);

    assert!(fixes_with_outcome(Outcome::Duplicate) >= before_dup + 1);
    assert!(fixes_with_outcome(Outcome::OutOfOrder) >= before_late + 1);
    assert!(tracks_total() >= before_tracks + 1);

    let text = gather_text().unwrap();
    assert!(text.contains("cyclegpx_fixes_total{outcome=\"duplicate\"}"));
    assert!(text.contains("cyclegpx_tracks_total"));
}
