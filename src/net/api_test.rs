use super::*;

#[test]
fn floor_plan_endpoint_includes_domain_and_floor() {
    assert_eq!(floor_plan_endpoint("floorplan", "ground"), "/api/floorplan/floors/ground");
    assert_eq!(
        floor_plan_endpoint("indoor_tracking", "floor_2"),
        "/api/indoor_tracking/floors/floor_2"
    );
}

#[test]
fn coordinates_endpoint_is_domain_scoped() {
    assert_eq!(coordinates_endpoint("floorplan"), "/api/floorplan/coordinates");
}

#[test]
fn entity_names_endpoint_is_domain_scoped() {
    assert_eq!(entity_names_endpoint("floorplan"), "/api/floorplan/entity_names");
}

#[test]
fn fetch_errors_render_readable_messages() {
    let err = FetchError::Status { url: "/api/floorplan/coordinates".to_owned(), status: 503 };
    assert_eq!(err.to_string(), "/api/floorplan/coordinates returned status 503");

    let err = FetchError::Decode {
        url: "/api/floorplan/entity_names".to_owned(),
        reason: "expected a map".to_owned(),
    };
    assert!(err.to_string().contains("expected a map"));
}
