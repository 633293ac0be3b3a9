use cyclegpx_core::distance;

fn assert_near(d: f64, goal: f64) {
    assert!((d - goal).abs() <= 1.0, "distance {d} not within 1 m of {goal}");
}

#[test]
fn reference_pairs() {
    assert_near(distance(77.1539, -139.398, -77.1804, -139.55), 17_166_029.0);
    assert_near(distance(77.1539, 120.398, 77.1804, 129.55), 225_883.0);
    assert_near(distance(77.1539, -120.398, 77.1804, 129.55), 2_332_669.0);
}

#[test]
fn zero_for_same_point_and_symmetric() {
    let pairs = [
        (59.907581, 30.256245, 59.90762, 30.256319),
        (-33.8688, 151.2093, 51.5074, -0.1278),
        (0.0, 179.9999, 0.0, -179.9999),
    ];
    for (lat1, lon1, lat2, lon2) in pairs {
        assert_eq!(distance(lat1, lon1, lat1, lon1), 0.0);
        let ab = distance(lat1, lon1, lat2, lon2);
        let ba = distance(lat2, lon2, lat1, lon1);
        assert!(ab > 0.0);
        assert!((ab - ba).abs() < 1e-6);
    }
}

#[test]
fn pole_to_pole_is_finite() {
    let d = distance(90.0, 0.0, -90.0, 0.0);
    assert!(d.is_finite());
    assert!((d - std::f64::consts::PI * 6_372_795.0).abs() < 1e-3);
}
