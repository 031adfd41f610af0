//! Writer state machine and DXF output format tests.

use dxforge::{
    ConversionConfig, DxfError, DxfWriter, EntityType, Line, Polyline, Text, Vector3,
};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join("dxforge-writer-tests").join(name)
}

fn line_entity() -> EntityType {
    EntityType::Line(Line::from_points(
        Vector3::ZERO,
        Vector3::new(10.0, 5.0, 0.0),
    ))
}

fn save_and_read(writer: &mut DxfWriter, name: &str) -> String {
    let path = writer.save(temp_path(name)).unwrap();
    fs::read_to_string(path).unwrap()
}

#[test]
fn write_entities_before_create_is_usage_error() {
    let mut writer = DxfWriter::new(ConversionConfig::default());
    assert!(matches!(
        writer.write_entities(&[line_entity()]).unwrap_err(),
        DxfError::Usage(_)
    ));
}

#[test]
fn save_before_create_is_usage_error() {
    let mut writer = DxfWriter::new(ConversionConfig::default());
    assert!(matches!(
        writer.save(temp_path("never.dxf")).unwrap_err(),
        DxfError::Usage(_)
    ));
}

#[test]
fn close_then_save_is_usage_error() {
    let mut writer = DxfWriter::new(ConversionConfig::default());
    writer.create_document().unwrap();
    writer.close();
    assert!(matches!(
        writer.save(temp_path("closed.dxf")).unwrap_err(),
        DxfError::Usage(_)
    ));
}

#[test]
fn create_after_close_starts_independent_document() {
    let mut writer = DxfWriter::new(ConversionConfig::default());
    writer.create_document().unwrap();
    writer.write_entities(&[line_entity()]).unwrap();
    writer.close();

    writer.create_document().unwrap();
    assert_eq!(writer.document().unwrap().entity_count(), 0);
    assert_eq!(writer.statistics().unwrap().total_entities, 0);
}

#[test]
fn header_carries_version_and_units() {
    let mut config = ConversionConfig::default();
    config.dxf_version = "R12".to_string();
    config.units = "cm".to_string();

    let mut writer = DxfWriter::new(config);
    writer.create_document().unwrap();
    let output = save_and_read(&mut writer, "header.dxf");

    assert!(output.contains("$ACADVER"));
    assert!(output.contains("AC1009"));
    assert!(output.contains("$INSUNITS\n 70\n3\n"));
    assert!(output.contains("$TDCREATE"));
    assert!(output.contains("$TDUPDATE"));
    assert!(output.ends_with("  0\nEOF\n"));
}

#[test]
fn insunits_codes_per_unit_string() {
    for (units, code) in [("mm", 4), ("cm", 3), ("m", 6), ("in", 1), ("pt", 0)] {
        let mut config = ConversionConfig::default();
        config.units = units.to_string();
        let mut writer = DxfWriter::new(config);
        writer.create_document().unwrap();
        let output = save_and_read(&mut writer, &format!("units-{units}.dxf"));
        assert!(
            output.contains(&format!("$INSUNITS\n 70\n{code}\n")),
            "units {units} should map to code {code}"
        );
    }
}

#[test]
fn default_layer_table_is_serialized() {
    let mut writer = DxfWriter::new(ConversionConfig::default());
    writer.create_document().unwrap();
    let output = save_and_read(&mut writer, "layers.dxf");

    for name in ["LINES", "CURVES", "RECTANGLES", "CIRCLES", "TEXT", "DIMENSIONS"] {
        assert!(output.contains(&format!("  2\n{name}\n")), "missing layer {name}");
    }
    // Layer colors: CIRCLES red (1), CURVES blue (5)
    let stats = writer.statistics().unwrap();
    let color_of = |name: &str| {
        stats
            .layers
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.color)
            .unwrap()
    };
    assert_eq!(color_of("CIRCLES"), 1);
    assert_eq!(color_of("CURVES"), 5);
    assert_eq!(color_of("TEXT"), 2);
    assert_eq!(color_of("DIMENSIONS"), 6);
}

#[test]
fn entity_layers_are_declared_in_table() {
    let mut writer = DxfWriter::new(ConversionConfig::default());
    writer.create_document().unwrap();

    let mut line = Line::from_points(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
    line.common.layer = "PDF_LAYER_LINES".to_string();
    writer.write_entities(&[EntityType::Line(line)]).unwrap();

    let output = save_and_read(&mut writer, "routed.dxf");
    assert!(output.contains("  2\nPDF_LAYER_LINES\n"));
}

#[test]
fn closed_polyline_and_constant_width() {
    let mut writer = DxfWriter::new(ConversionConfig::default());
    writer.create_document().unwrap();

    let mut polyline = Polyline::from_vertices(vec![
        Vector3::ZERO,
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(4.0, 4.0, 0.0),
        Vector3::new(0.0, 4.0, 0.0),
        Vector3::ZERO,
    ]);
    polyline.close();
    polyline.filled = true;
    polyline.width = 0.5;
    writer
        .write_entities(&[EntityType::Polyline(polyline)])
        .unwrap();

    let output = save_and_read(&mut writer, "polyline.dxf");
    assert!(output.contains("  0\nPOLYLINE\n"));
    // Closed flag and constant width pair
    assert!(output.contains(" 70\n1\n"));
    assert!(output.contains(" 40\n0.5\n"));
    assert!(output.contains(" 41\n0.5\n"));
    assert_eq!(output.matches("  0\nVERTEX\n").count(), 5);
    assert_eq!(output.matches("  0\nSEQEND\n").count(), 1);
}

#[test]
fn width_becomes_lineweight_in_hundredths() {
    let mut writer = DxfWriter::new(ConversionConfig::default());
    writer.create_document().unwrap();

    let mut line = Line::from_points(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
    line.width = 0.5;
    writer.write_entities(&[EntityType::Line(line)]).unwrap();

    let output = save_and_read(&mut writer, "lineweight.dxf");
    assert!(output.contains("370\n50\n"));
}

#[test]
fn text_is_written_with_height_and_content() {
    let mut writer = DxfWriter::new(ConversionConfig::default());
    writer.create_document().unwrap();
    writer
        .write_entities(&[EntityType::Text(Text::new(
            Vector3::new(5.0, 5.0, 0.0),
            "SCALE 1:50",
            3.5,
        ))])
        .unwrap();

    let output = save_and_read(&mut writer, "text.dxf");
    assert!(output.contains("  0\nTEXT\n"));
    assert!(output.contains(" 40\n3.5\n"));
    assert!(output.contains("  1\nSCALE 1:50\n"));
}

#[test]
fn save_creates_missing_directories() {
    let dir = temp_path("nested/deeper");
    let _ = fs::remove_dir_all(temp_path("nested"));

    let mut writer = DxfWriter::new(ConversionConfig::default());
    writer.create_document().unwrap();
    let saved = writer.save(dir.join("out.dxf")).unwrap();
    assert!(saved.exists());
}
