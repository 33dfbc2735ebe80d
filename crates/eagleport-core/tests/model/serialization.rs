use eagleport_core::{
    Angle, CircuitIdentifier, Length, Path, Point, SymbolPin, UnsignedLength, Vertex,
};

#[test]
fn test_path_serializes_as_vertex_list() {
    let path = Path::new(vec![
        Vertex::new(Point::from_nm(1, 2), Angle::DEG90),
        Vertex::straight(Point::from_nm(3, 4)),
    ]);
    let json = serde_json::to_value(&path).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "position": { "x": 1, "y": 2 }, "bulge": 90000000 },
            { "position": { "x": 3, "y": 4 }, "bulge": 0 },
        ])
    );
    let back: Path = serde_json::from_value(json).unwrap();
    assert_eq!(back, path);
}

#[test]
fn test_pin_rejects_invalid_name_on_load() {
    let pin = SymbolPin::new(
        CircuitIdentifier::new("VCC").unwrap(),
        Point::default(),
        UnsignedLength::new(Length::from_nm(2_540_000)).unwrap(),
        Angle::DEG0,
    );
    let mut json = serde_json::to_value(&pin).unwrap();
    json["name"] = serde_json::json!("V CC");
    assert!(serde_json::from_value::<SymbolPin>(json).is_err());
}
