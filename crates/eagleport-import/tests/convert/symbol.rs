use eagleport_core::{Layer, Length};
use eagleport_import::eagle::{Pin, PinLength, Rotation, Text};
use eagleport_import::{
    convert_component_name, convert_device_name, convert_element_description,
    convert_gate_name, convert_symbol_pin, try_convert_schematic_text,
    try_convert_schematic_text_with_style, SchematicTextStyle,
};

#[test]
fn test_symbol_pins_from_json() {
    let pins: Vec<Pin> = serde_json::from_str(
        r#"[
            {"name":"P$1","position":{"x":1,"y":2},"length":"point"},
            {"name":"VCC","position":{"x":-7.62,"y":0},"length":"short","rotation":{"angle":180}},
            {"name":"GND","position":{"x":0,"y":0}}
        ]"#,
    )
    .unwrap();
    let out: Vec<_> = pins.iter().map(convert_symbol_pin).collect();

    assert_eq!(out[0].name, "1");
    assert_eq!(out[0].length.get(), Length::ZERO);
    assert_eq!(out[1].name, "VCC");
    assert_eq!(out[1].length.get(), Length::from_nm(2_540_000));
    assert_eq!(out[1].rotation.to_deg(), 180.0);
    assert_eq!(out[2].length.get(), Length::from_nm(7_620_000));
}

#[test]
fn test_pin_length_keyword() {
    let pin = Pin {
        name: "EN".to_string(),
        position: eagleport_import::eagle::Point::default(),
        length: "middle".parse::<PinLength>().unwrap(),
        rotation: Rotation::degrees(270.0),
    };
    let out = convert_symbol_pin(&pin);
    assert_eq!(out.length.get(), Length::from_nm(5_080_000));
    assert_eq!(out.rotation.to_microdeg(), 270_000_000);
}

#[test]
fn test_device_set_names() {
    let component = convert_component_name("LM358-");
    assert_eq!(component, "LM358");
    assert_eq!(convert_device_name("LM358-", "D"), "LM358-D");
    assert_eq!(convert_device_name("LM358", "_SMD"), "LM358_SMD");
    assert_eq!(convert_gate_name("G$1"), "");
    assert_eq!(convert_gate_name("-A"), "A");
    assert_eq!(
        convert_element_description("<b>Dual OpAmp</b><br>\n  Low power  "),
        "Dual OpAmp\nLow power"
    );
}

#[test]
fn test_schematic_texts() {
    let text = Text {
        value: ">VALUE".to_string(),
        position: eagleport_import::eagle::Point::new(0.0, -2.54),
        size: 1.778,
        layer: 96,
        rotation: Rotation::default(),
    };
    let out = try_convert_schematic_text(&text).unwrap();
    assert_eq!(out.layer, Layer::SymbolValues);
    assert_eq!(out.text, "{{VALUE}}");
    assert_eq!(out.height.get(), Length::from_nm(2_500_000));

    let style: SchematicTextStyle = serde_json::from_str(r#"{"height":1.778}"#).unwrap();
    let out = try_convert_schematic_text_with_style(&text, &style).unwrap();
    assert_eq!(out.height.get(), Length::from_nm(1_778_000));

    let copper = Text { layer: 1, ..text };
    assert!(try_convert_schematic_text(&copper).is_none());
}
