use eagleport_core::{Length, Path, Point};
use eagleport_import::eagle::Wire;
use eagleport_import::convert_and_join_wires;

fn point(x: i64, y: i64) -> Point {
    Point::from_nm(x * 1_000_000, y * 1_000_000)
}

#[test]
fn test_join_wires_from_library() {
    let wires = vec![
        Wire::new(1.0, 2.0, 3.0, 4.0, 0.254, 1),
        Wire::new(3.0, 4.0, 5.0, 6.0, 0.254, 1),
        Wire::new(5.0, 6.0, 7.0, 8.0, 0.567, 1),
        Wire::new(7.0, 8.0, 9.0, 9.0, 0.567, 2),
        Wire::new(7.0, 8.0, 9.0, 9.0, -1.0, 2),
    ];
    let mut errors = Vec::new();
    let out = convert_and_join_wires(&wires, true, &mut errors);

    assert_eq!(out.len(), 3);
    assert_eq!(errors, vec!["Wire on layer 2 with invalid width -1mm ignored".to_string()]);

    let summary: Vec<(i32, i64, Path)> = out
        .into_iter()
        .map(|g| (g.layer_id, g.line_width.get().to_nm(), g.path))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, 254_000, Path::straight([point(1, 2), point(3, 4), point(5, 6)])),
            (1, 567_000, Path::straight([point(5, 6), point(7, 8)])),
            (2, 567_000, Path::straight([point(7, 8), point(9, 9)])),
        ]
    );
}

#[test]
fn test_same_endpoints_on_other_layer_do_not_join() {
    let wires = vec![
        Wire::new(0.0, 0.0, 1.0, 0.0, 0.2, 21),
        Wire::new(1.0, 0.0, 2.0, 0.0, 0.2, 51),
        Wire::new(2.0, 0.0, 3.0, 0.0, 0.2, 21),
    ];
    let mut errors = Vec::new();
    let out = convert_and_join_wires(&wires, false, &mut errors);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].layer_id, 21);
    assert_eq!(out[1].layer_id, 21);
    assert_eq!(out[2].layer_id, 51);
}

#[test]
fn test_errors_are_appended() {
    let mut errors = vec!["earlier".to_string()];
    let wires = vec![Wire::new(0.0, 0.0, 1.0, 0.0, 0.0, 1)];
    assert!(convert_and_join_wires(&wires, false, &mut errors).is_empty());
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], "earlier");
}

#[test]
fn test_width_is_compared_after_conversion() {
    // Both widths round to the same nanometer value.
    let wires = vec![
        Wire::new(0.0, 0.0, 1.0, 0.0, 0.2, 21),
        Wire::new(1.0, 0.0, 2.0, 0.0, 0.2000000001, 21),
    ];
    let mut errors = Vec::new();
    let out = convert_and_join_wires(&wires, false, &mut errors);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].line_width.get(), Length::from_nm(200_000));
}
