use eagleport_import::eagle;
use eagleport_import::{
    convert_and_join_wires, convert_angle, convert_element_name, convert_gate_name,
    convert_length, convert_pin_or_pad_name, convert_rectangle,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn length_scales_and_rounds(mm in -10_000.0f64..10_000.0) {
        let nm = convert_length(mm).to_nm();
        prop_assert_eq!(nm, (mm * 1e6).round() as i64);
        prop_assert!(nm == 0 || (nm > 0) == (mm > 0.0));
    }

    #[test]
    fn angle_scales_and_rounds(deg in -720.0f64..720.0) {
        prop_assert_eq!(convert_angle(deg).to_microdeg(), (deg * 1e6).round() as i64);
    }

    #[test]
    fn element_name_is_never_empty(raw in "\\PC*") {
        let name = convert_element_name(&raw);
        prop_assert!(!name.as_str().is_empty());
        prop_assert_eq!(name.as_str(), name.as_str().trim());
    }

    #[test]
    fn pin_names_have_no_whitespace(raw in "\\PC*") {
        let name = convert_pin_or_pad_name(&raw);
        prop_assert!(!name.as_str().is_empty());
        prop_assert!(!name.as_str().chars().any(char::is_whitespace));
    }

    #[test]
    fn auto_gate_names_are_empty(n in 0u32..100_000) {
        let raw = format!("G${}", n);
        prop_assert!(convert_gate_name(&raw).is_empty());
    }

    #[test]
    fn rectangles_are_closed_and_filled(
        x1 in -100.0f64..100.0,
        y1 in -100.0f64..100.0,
        x2 in -100.0f64..100.0,
        y2 in -100.0f64..100.0,
        quarter in 0i32..4,
        grab_area in any::<bool>(),
    ) {
        let rect = eagle::Rectangle {
            p1: eagle::Point::new(x1, y1),
            p2: eagle::Point::new(x2, y2),
            layer: 21,
            rotation: eagle::Rotation::degrees(f64::from(quarter * 90)),
        };
        let out = convert_rectangle(&rect, grab_area);
        prop_assert!(out.filled);
        prop_assert_eq!(out.grab_area, grab_area);
        prop_assert_eq!(out.path.len(), 5);
        prop_assert!(out.path.is_closed());
    }

    #[test]
    fn joining_keeps_every_valid_wire(
        coords in prop::collection::vec((0i32..4, 0i32..4, 0i32..4, 0i32..4, 0usize..3), 0..40),
    ) {
        const WIDTHS: [f64; 3] = [0.2, 0.254, -1.0];
        let wires: Vec<eagle::Wire> = coords
            .iter()
            .map(|&(x1, y1, x2, y2, w)| {
                eagle::Wire::new(
                    f64::from(x1),
                    f64::from(y1),
                    f64::from(x2),
                    f64::from(y2),
                    WIDTHS[w],
                    1,
                )
            })
            .collect();
        let invalid = coords.iter().filter(|c| c.4 == 2).count();

        let mut errors = Vec::new();
        let out = convert_and_join_wires(&wires, false, &mut errors);
        prop_assert_eq!(errors.len(), invalid);
        let segments: usize = out.iter().map(|g| g.path.len() - 1).sum();
        prop_assert_eq!(segments, wires.len() - invalid);
        for geometry in &out {
            prop_assert!(!geometry.filled);
            prop_assert!(geometry.path.is_straight());
            let windows = geometry.path.vertices().windows(2);
            for pair in windows {
                let touching = wires.iter().any(|w| {
                    let a = eagleport_import::convert_point(w.p1);
                    let b = eagleport_import::convert_point(w.p2);
                    (a == pair[0].position && b == pair[1].position)
                        || (b == pair[0].position && a == pair[1].position)
                });
                prop_assert!(touching);
            }
        }

        let mut again = Vec::new();
        prop_assert_eq!(convert_and_join_wires(&wires, false, &mut again), out);
    }
}
