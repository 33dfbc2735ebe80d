use eagleport_core::{ComponentSide, Layer, Length, PadShape, Point};
use eagleport_import::eagle::{Circle, Hole, Polygon, SmtPad, Text, ThtPad};
use eagleport_import::{
    convert_circle, convert_hole, convert_polygon, convert_smt_pad, convert_tht_pad,
    try_convert_board_layer, try_convert_board_text,
};

#[test]
fn test_footprint_from_json_records() {
    let pads: Vec<ThtPad> = serde_json::from_str(
        r#"[
            {"name":"P$1","position":{"x":0.0,"y":0.0},"drill":0.8,"shape":"square"},
            {"name":"P$2","position":{"x":2.54,"y":0.0},"drill":0.8}
        ]"#,
    )
    .unwrap();
    let converted: Vec<_> = pads.iter().map(convert_tht_pad).collect();

    assert_eq!(converted[0].0.name, "1");
    assert_eq!(converted[1].0.name, "2");
    assert_ne!(converted[0].0.uuid, converted[1].0.uuid);
    for (package_pad, pad) in &converted {
        assert_eq!(pad.package_pad_uuid, Some(package_pad.uuid));
        assert_eq!(pad.width.get(), Length::from_nm(1_200_000));
        assert_eq!(pad.shape, PadShape::RoundedRect);
        assert_eq!(pad.holes[0].diameter.get(), Length::from_nm(800_000));
    }
    assert_eq!(converted[1].1.position, Point::from_nm(2_540_000, 0));
}

#[test]
fn test_smt_pad_sides() {
    let mut pad: SmtPad = serde_json::from_str(
        r#"{"name":"A 1","position":{"x":1,"y":2},"dx":3,"dy":4,"layer":1}"#,
    )
    .unwrap();
    let (package_pad, top) = convert_smt_pad(&pad);
    assert_eq!(package_pad.name, "A_1");
    assert_eq!(top.component_side, ComponentSide::Top);

    pad.layer = 16;
    assert_eq!(convert_smt_pad(&pad).1.component_side, ComponentSide::Bottom);
}

#[test]
fn test_outline_primitives() {
    let polygon: Polygon = serde_json::from_str(
        r#"{"vertices":[{"position":{"x":0,"y":0}},{"position":{"x":1,"y":0},"curve":-90},{"position":{"x":1,"y":1}}],"width":0.1,"layer":21}"#,
    )
    .unwrap();
    let out = convert_polygon(&polygon, true);
    assert_eq!(out.path.len(), 4);
    assert!(out.path.is_closed());
    assert!(out.grab_area);
    assert_eq!(try_convert_board_layer(out.layer_id), Some(Layer::TopLegend));

    let circle = Circle {
        center: eagleport_import::eagle::Point::new(0.0, 0.0),
        radius: 0.5,
        width: 0.0,
        layer: 21,
    };
    let out = convert_circle(&circle, false);
    assert!(out.filled);
    assert!(out
        .path
        .vertices()
        .iter()
        .all(|v| v.bulge.is_zero() || v.bulge.to_microdeg().abs() == 180_000_000));
    assert_eq!(out.circle.unwrap().1.get(), Length::from_nm(1_000_000));

    let hole = convert_hole(&Hole {
        position: eagleport_import::eagle::Point::new(1.0, 2.0),
        drill: 3.5,
    });
    assert_eq!(hole.path.vertices()[0].position, Point::from_nm(1_000_000, 2_000_000));
}

#[test]
fn test_board_texts() {
    let names: Text = serde_json::from_str(
        r#"{"value":">NAME","position":{"x":1,"y":2},"size":1.27,"layer":25,"rotation":{"angle":90}}"#,
    )
    .unwrap();
    let out = try_convert_board_text(&names).unwrap();
    assert_eq!(out.layer, Layer::TopNames);
    assert_eq!(out.text, "{{NAME}}");
    assert_eq!(out.rotation.to_deg(), 90.0);
    // House style, not the EAGLE size.
    assert_eq!(out.height.get(), Length::from_nm(1_000_000));

    let symbol_text = Text { layer: 94, ..names };
    assert!(try_convert_board_text(&symbol_text).is_none());
}
