//! Integration tests for plydecimate-simplification
//!
//! These tests run whole files through parse, decimate and serialize and
//! check the reduced output against the source file.

use approx::assert_relative_eq;
use plydecimate_core::{Document, Element, Error, PlyFormat, PropertyDef, Record, Scalar, ScalarType, Value};
use plydecimate_io::{PlyReader, PlyWriter};
use plydecimate_simplification::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Text file with ten vertices whose x coordinate is their index
fn ten_vertex_ascii() -> String {
    let mut text = String::from(
        "ply\nformat ascii 1.0\ncomment ten points\nelement vertex 10\nproperty float x\nproperty float y\nproperty float z\nend_header\n",
    );
    for i in 0..10 {
        text.push_str(&format!("{} {} {}\n", i, i as f32 * 0.5, -(i as f32)));
    }
    text
}

/// Binary mesh: a grid of vertices followed by faces over them
fn create_binary_mesh(format: PlyFormat, n: usize) -> Document {
    let mut doc = Document::new(format);
    doc.comments.push("grid mesh".to_string());
    doc.obj_info.push("generated".to_string());

    let mut vertex = Element::new(
        "vertex",
        vec![
            PropertyDef::scalar("x", ScalarType::F32),
            PropertyDef::scalar("y", ScalarType::F32),
            PropertyDef::scalar("z", ScalarType::F32),
            PropertyDef::scalar("nx", ScalarType::F32),
            PropertyDef::scalar("ny", ScalarType::F32),
            PropertyDef::scalar("nz", ScalarType::F32),
            PropertyDef::scalar("red", ScalarType::U8),
            PropertyDef::scalar("confidence", ScalarType::F64),
        ],
    );
    for i in 0..n {
        let t = i as f32;
        vertex
            .push_record(Record::new(vec![
                Value::Scalar(Scalar::F32(t)),
                Value::Scalar(Scalar::F32(t.sin())),
                Value::Scalar(Scalar::F32(t.cos())),
                Value::Scalar(Scalar::F32(0.0)),
                Value::Scalar(Scalar::F32(0.0)),
                Value::Scalar(Scalar::F32(1.0)),
                Value::Scalar(Scalar::U8((i % 256) as u8)),
                Value::Scalar(Scalar::F64(i as f64 / n as f64)),
            ]))
            .unwrap();
    }
    doc.add_element(vertex).unwrap();

    let mut face = Element::new(
        "face",
        vec![PropertyDef::list("vertex_indices", ScalarType::U8, ScalarType::I32)],
    );
    for i in 0..n.saturating_sub(2) {
        let i = i as i32;
        face.push_record(Record::new(vec![Value::List(vec![
            Scalar::I32(i),
            Scalar::I32(i + 1),
            Scalar::I32(i + 2),
        ])]))
        .unwrap();
    }
    doc.add_element(face).unwrap();
    doc
}

#[test]
fn test_ascii_ten_vertices_keep_three() {
    let input = ten_vertex_ascii();
    let options = ReduceOptions::new(0.3);

    let mut rng = StdRng::seed_from_u64(2024);
    let (output, summary) = reduce_bytes_with_rng(input.as_bytes(), &options, &mut rng).unwrap();

    assert_eq!(summary.element, "vertex");
    assert_eq!(summary.original_count, 10);
    assert_eq!(summary.retained_count, 3);
    assert_relative_eq!(summary.effective_fraction, 0.3);

    let text = String::from_utf8(output.clone()).unwrap();
    assert!(text.starts_with("ply\nformat ascii 1.0\ncomment ten points\nelement vertex 3\n"));

    let original_lines: Vec<&str> = input.lines().skip(8).collect();
    let body: Vec<&str> = text.split("end_header\n").nth(1).unwrap().lines().collect();
    assert_eq!(body.len(), 3);
    let positions: Vec<usize> = body
        .iter()
        .map(|line| original_lines.iter().position(|l| l == line).expect("record not in source"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let mut rng = StdRng::seed_from_u64(2024);
    let (again, _) = reduce_bytes_with_rng(input.as_bytes(), &options, &mut rng).unwrap();
    assert_eq!(again, output);
}

#[test]
fn test_seeded_options_are_reproducible() {
    let input = PlyWriter::serialize(&create_binary_mesh(PlyFormat::BinaryLittleEndian, 500)).unwrap();
    let options = ReduceOptions::new(0.4).with_seed(11);

    let (first, summary) = reduce_bytes(&input, &options).unwrap();
    let (second, _) = reduce_bytes(&input, &options).unwrap();
    assert_eq!(first, second);
    assert_eq!(summary.retained_count, 200);
}

#[test]
fn test_binary_mesh_faces_pass_through() {
    for format in [PlyFormat::BinaryLittleEndian, PlyFormat::BinaryBigEndian, PlyFormat::Ascii] {
        let source = create_binary_mesh(format, 300);
        let input = PlyWriter::serialize(&source).unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        let (output, summary) = reduce_bytes_with_rng(&input, &ReduceOptions::new(0.1), &mut rng).unwrap();
        assert_eq!(summary.retained_count, 30);

        let reduced = PlyReader::parse(&output).unwrap();
        assert_eq!(reduced.format, format);
        assert_eq!(reduced.comments, source.comments);
        assert_eq!(reduced.obj_info, source.obj_info);
        assert_eq!(reduced.element_names().collect::<Vec<_>>(), vec!["vertex", "face"]);
        assert_eq!(reduced.element("face"), source.element("face"));

        // Every kept vertex is an untouched source record, in source order.
        let original = source.element("vertex").unwrap();
        let kept = reduced.element("vertex").unwrap();
        assert_eq!(kept.properties(), original.properties());
        let mut last = None;
        for record in kept.records() {
            let index = original
                .records()
                .iter()
                .position(|r| r == record)
                .expect("vertex was altered");
            assert!(last.map_or(true, |prev| prev < index));
            last = Some(index);
        }
    }
}

#[test]
fn test_full_retention_reproduces_input() {
    let input = PlyWriter::serialize(&create_binary_mesh(PlyFormat::BinaryBigEndian, 64)).unwrap();
    let (output, summary) = reduce_bytes(&input, &ReduceOptions::new(1.0)).unwrap();
    assert_eq!(output, input);
    assert_eq!(summary.original_count, summary.retained_count);
}

#[test]
fn test_custom_target_element() {
    let input = PlyWriter::serialize(&create_binary_mesh(PlyFormat::BinaryLittleEndian, 50)).unwrap();
    let options = ReduceOptions::new(0.5).with_element("face").with_seed(1);
    let (output, summary) = reduce_bytes(&input, &options).unwrap();

    assert_eq!(summary.element, "face");
    assert_eq!(summary.original_count, 48);
    assert_eq!(summary.retained_count, 24);

    let reduced = PlyReader::parse(&output).unwrap();
    assert_eq!(reduced.element("vertex").unwrap().len(), 50);
}

#[test]
fn test_unknown_element_is_reported() {
    let input = ten_vertex_ascii();
    let options = ReduceOptions::new(0.5).with_element("face");
    let err = reduce_bytes(input.as_bytes(), &options).unwrap_err();
    assert!(matches!(err, Error::UnknownElement { ref name } if name == "face"));
}

#[test]
fn test_invalid_fraction_checked_before_parsing() {
    let err = reduce_bytes(b"not a ply file", &ReduceOptions::new(0.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidFraction(_)));

    let err = reduce_bytes(b"not a ply file", &ReduceOptions::new(0.5)).unwrap_err();
    assert!(matches!(err, Error::MalformedHeader { line: 1, .. }));
}

#[test]
fn test_single_vertex_is_kept() {
    let text = "ply\nformat ascii 1.0\nelement vertex 1\nproperty float x\nend_header\n7\n";
    let (output, summary) = reduce_bytes(text.as_bytes(), &ReduceOptions::new(0.1)).unwrap();
    assert_eq!(summary.retained_count, 1);
    assert_eq!(String::from_utf8(output).unwrap(), text);
}

#[test]
fn test_reduce_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("grid.ply");
    PlyWriter::write_file(&create_binary_mesh(PlyFormat::BinaryLittleEndian, 100), &input).unwrap();

    let output = default_output_path(&input);
    assert_eq!(output, dir.path().join("reduced_grid.ply"));

    let summary = reduce_file(&input, &output, &ReduceOptions::new(0.25).with_seed(8)).unwrap();
    assert_eq!(summary.retained_count, 25);

    let reduced = PlyReader::read_file(&output).unwrap();
    assert_eq!(reduced.element("vertex").unwrap().len(), 25);
    assert_eq!(reduced.element("face").unwrap().len(), 98);
}
