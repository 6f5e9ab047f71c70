use massclass::{
    Axis, BOX_EDGE_COUNT, Edge, ElementGeometry, FeatureVector, LengthUnit, MassclassError,
    Point3, UnitConverter, edge_axis, extract,
};

fn box_edges(origin: Point3, dx: f64, dy: f64, dz: f64) -> Vec<Edge> {
    ElementGeometry::box_from_dimensions("Mass", origin, dx, dy, dz)
        .boundary_edges()
        .to_vec()
}

// ============================================================================
// Axis-aligned boxes
// ============================================================================

#[test]
fn box_in_millimeters() {
    let edges = box_edges(Point3::ZERO, 4000.0, 3000.0, 2500.0);
    let features = extract(&edges, &LengthUnit::Millimeters).unwrap();
    assert_eq!(features, FeatureVector::new(4000.0, 3000.0, 2500.0));
}

#[test]
fn box_in_feet_is_converted() {
    let edges = box_edges(Point3::new(12.5, -3.0, 40.0), 10.0, 2.0, 1.0);
    let features = extract(&edges, &LengthUnit::Feet).unwrap();
    assert!((features.x() - 3048.0).abs() < 1e-9);
    assert!((features.y() - 609.6).abs() < 1e-9);
    assert!((features.z() - 304.8).abs() < 1e-9);
}

#[test]
fn edge_order_and_direction_do_not_matter() {
    let mut edges = box_edges(Point3::ZERO, 6.0, 2.0, 9.0);
    edges.reverse();
    for edge in edges.iter_mut().step_by(2) {
        std::mem::swap(&mut edge.start, &mut edge.end);
    }
    let features = extract(&edges, &LengthUnit::Millimeters).unwrap();
    assert_eq!(features, FeatureVector::new(6.0, 2.0, 9.0));
}

#[test]
fn every_value_is_a_converted_edge_length() {
    let unit = LengthUnit::Meters;
    for (dx, dy, dz) in [(0.2, 5.0, 3.0), (8.0, 0.3, 0.6), (0.4, 0.4, 3.2)] {
        let edges = box_edges(Point3::new(1.0, 2.0, 3.0), dx, dy, dz);
        let features = extract(&edges, &unit).unwrap();
        for value in features.as_array() {
            assert!(value >= 0.0);
            assert!(
                edges
                    .iter()
                    .any(|e| unit.to_millimeters(e.length) == value),
                "{value} is not the length of any edge"
            );
        }
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn fewer_than_twelve_edges_fails() {
    let edges = box_edges(Point3::ZERO, 1.0, 1.0, 1.0);
    for n in 0..BOX_EDGE_COUNT {
        let err = extract(&edges[..n], &LengthUnit::Feet).unwrap_err();
        assert!(
            matches!(err, MassclassError::OutOfRange { required: 12, actual } if actual == n),
            "unexpected error for {n} edges: {err}"
        );
    }
}

#[test]
fn flat_solid_leaves_z_at_zero() {
    // Twelve edges, none vertical
    let mut edges = Vec::new();
    for _ in 0..6 {
        edges.push(Edge::new(Point3::ZERO, Point3::new(5.0, 0.0, 0.0)));
        edges.push(Edge::new(Point3::ZERO, Point3::new(0.0, 4.0, 0.0)));
    }
    let features = extract(&edges, &LengthUnit::Millimeters).unwrap();
    assert_eq!(features, FeatureVector::new(5.0, 4.0, 0.0));
}

#[test]
fn parallel_edges_of_different_length_keep_the_last() {
    // X edges sit at indices 0, 2, 4 and 6 of a generated box
    let mut edges = box_edges(Point3::ZERO, 10.0, 10.0, 10.0);
    edges[4] = Edge::with_length(edges[4].start, edges[4].end, 11.0);
    let features = extract(&edges, &LengthUnit::Millimeters).unwrap();
    assert_eq!(features.x(), 10.0);

    edges[6] = Edge::with_length(edges[6].start, edges[6].end, 12.0);
    let features = extract(&edges, &LengthUnit::Millimeters).unwrap();
    assert_eq!(features.x(), 12.0);
}

#[test]
fn slanted_edge_counts_as_x() {
    let edge = Edge::new(Point3::ZERO, Point3::new(1.0, 1.0, 1.0));
    assert_eq!(edge_axis(&edge), Axis::X);
}
