use super::*;

fn coords(lat: f64, lon: f64) -> Coordinates {
    Coordinates::new(lat, lon).expect("test coordinates should be valid")
}

#[test]
fn distance_is_zero_for_identical_points() {
    let p = coords(51.5074, -0.1278);
    assert!(distance_miles(p, p).abs() < 1e-9);
}

#[test]
fn distance_is_symmetric() {
    let a = coords(40.7128, -74.0060);
    let b = coords(34.0522, -118.2437);
    let ab = distance_miles(a, b);
    let ba = distance_miles(b, a);
    assert!(
        (ab - ba).abs() / ab < 1e-9,
        "expected symmetric distances, got {ab} vs {ba}"
    );
}

#[test]
fn one_degree_of_latitude_at_equator_is_about_69_miles() {
    let d = distance_miles(coords(0.0, 0.0), coords(1.0, 0.0));
    assert!(
        (d - 69.09).abs() < 0.05,
        "expected ~69.09 miles per degree of latitude, got {d}"
    );
}

#[test]
fn new_york_to_los_angeles_is_about_2445_miles() {
    let nyc = coords(40.7128, -74.0060);
    let la = coords(34.0522, -118.2437);
    let d = distance_miles(nyc, la);
    assert!(
        (d - 2445.0).abs() < 10.0,
        "expected ~2445 miles NYC-LA, got {d}"
    );
}

#[test]
fn format_distance_collapses_below_a_tenth() {
    assert_eq!(format_distance(0.05), "<0.1 miles");
    assert_eq!(format_distance(0.0), "<0.1 miles");
    assert_eq!(format_distance(0.099), "<0.1 miles");
}

#[test]
fn format_distance_uses_singular_for_exactly_one_mile() {
    assert_eq!(format_distance(1.0), "1.0 mile");
    // Values that round to 1.0 are also singular.
    assert_eq!(format_distance(1.04), "1.0 mile");
    assert_eq!(format_distance(0.96), "1.0 mile");
}

#[test]
fn format_distance_uses_plural_otherwise() {
    assert_eq!(format_distance(2.5), "2.5 miles");
    assert_eq!(format_distance(0.3), "0.3 miles");
    assert_eq!(format_distance(1.1), "1.1 miles");
}
