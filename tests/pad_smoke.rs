use pixel_pad::DrawingPad;

#[test]
fn facade_paints_picks_and_exports() {
    let mut pad = DrawingPad::from_config(
        r#"{"surface_width": 400, "surface_height": 400, "columns": 4, "rows": 4}"#.to_string(),
    )
    .unwrap_or_else(|_| panic!("config should parse"));

    assert_eq!(pad.cell_width(), 100.0);
    assert!(pad.press(150.0, 150.0, 0, false));
    assert_eq!(pad.history_color(1, 1).as_deref(), Some("#009578"));

    // Right click does nothing
    assert!(!pad.press(250.0, 250.0, 2, false));
    assert_eq!(pad.history_color(2, 2), None);

    pad.set_active_color("#ff0000");
    assert!(pad.press(150.0, 150.0, 0, true));
    assert_eq!(pad.active_color(), "#009578");

    assert!(!pad.resize("0", "4"));
    assert_eq!(pad.columns(), 4);
    assert!(pad.resize("8", "2"));
    assert_eq!((pad.columns(), pad.rows()), (8, 2));

    let bytes = pad.export_image().unwrap_or_else(|_| panic!("export should succeed"));
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (400, 400));
    assert_eq!(decoded.get_pixel(120, 180).0, [0x00, 0x95, 0x78]);
    assert_eq!(pad.export_filename(), "Pixel_image.png");
}

#[test]
fn facade_dirty_region_tracks_paint() {
    let mut pad = DrawingPad::new();
    assert!(pad.collect_dirty_rect());
    assert_eq!((pad.dirty_w(), pad.dirty_h()), (pad.width(), pad.height()));
    assert!(!pad.collect_dirty_rect());

    pad.press(1.0, 1.0, 0, false);
    assert!(pad.collect_dirty_rect());
    assert_eq!((pad.dirty_x(), pad.dirty_y()), (0, 0));
    assert_eq!(pad.dirty_w() as f64, pad.cell_width());
    assert!(!pad.extract_dirty_pixels().is_null());
}

#[test]
fn facade_clear_needs_confirmation() {
    let mut pad = DrawingPad::new();
    pad.press(1.0, 1.0, 0, false);

    assert!(!pad.clear(false));
    assert!(pad.history_color(0, 0).is_some());

    assert!(pad.clear(true));
    assert!(pad.history_color(0, 0).is_none());
    assert_eq!(pad.history_json(), "{}");
}

#[test]
fn facade_guide_follows_resize() {
    let mut pad = DrawingPad::new();
    let revision = pad.guide_revision();
    pad.set_guide_visible(false);
    assert_eq!(pad.guide_revision(), revision);

    assert!(pad.resize("4", "2"));
    assert_eq!(pad.guide_revision(), revision + 1);
    assert!(!pad.guide_visible());
    assert_eq!(pad.guide_vertical_lines(), vec![100.0, 200.0, 300.0]);
    assert_eq!(pad.guide_horizontal_lines(), vec![200.0]);
}
