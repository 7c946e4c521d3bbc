use super::*;

fn origin() -> Coordinates {
    Coordinates::new(40.7128, -74.006).expect("test coordinates should be valid")
}

#[test]
fn query_requests_json_output_with_server_timeout() {
    let query = build_query(origin(), 3000);
    assert!(query.starts_with("[out:json][timeout:25];"), "got: {query}");
}

#[test]
fn query_contains_node_and_way_clauses_for_every_leisure_value() {
    let query = build_query(origin(), 3000);
    for leisure in ["park", "nature_reserve", "garden"] {
        for element in ["node", "way"] {
            let clause = format!("{element}[\"leisure\"=\"{leisure}\"]");
            assert!(query.contains(&clause), "missing clause {clause} in: {query}");
        }
    }
}

#[test]
fn query_embeds_radius_and_origin() {
    let query = build_query(origin(), 1500);
    assert!(query.contains("(around:1500,40.7128,-74.006)"), "got: {query}");
}

#[test]
fn query_asks_for_centers_of_area_elements() {
    let query = build_query(origin(), 3000);
    assert!(query.ends_with("out center;"), "got: {query}");
}
