use scope_shape_lut::diagnostics::{plot_fft, plot_signal, PlotKind, RecordingPlotter};
use scope_shape_lut::quantize::OverflowPolicy;
use scope_shape_lut::{generate_table, render_table, GenerateConfig, OutputFormat, ShapeError, Vertex, VertexList};

// Tables flashed on the board, generated from the built-in cube at 7 points per edge.
const BOARD_XS: [u8; 126] = [
    73, 88, 104, 120, 135, 151, 167, 182, 187, 193, 198, 203, 208, 213, 219, 219,
    219, 219, 219, 219, 219, 219, 203, 187, 172, 156, 141, 125, 109, 104, 99, 94,
    88, 83, 78, 73, 73, 73, 73, 73, 73, 73, 73, 78, 83, 88, 94, 99,
    104, 109, 125, 141, 156, 172, 187, 203, 219, 213, 208, 203, 198, 193, 187, 182,
    182, 182, 182, 182, 182, 182, 182, 187, 193, 198, 203, 208, 213, 219, 203, 187,
    172, 156, 141, 125, 109, 109, 109, 109, 109, 109, 109, 109, 109, 109, 109, 109,
    109, 109, 109, 104, 99, 94, 88, 83, 78, 73, 88, 104, 120, 135, 151, 167,
    182, 182, 182, 182, 182, 182, 182, 182, 167, 151, 135, 120, 104, 88,
];

const BOARD_YS: [u8; 126] = [
    255, 255, 255, 255, 255, 255, 255, 255, 250, 245, 239, 234, 229, 224, 219, 203,
    187, 172, 156, 141, 125, 109, 109, 109, 109, 109, 109, 109, 109, 114, 120, 125,
    130, 135, 141, 146, 161, 177, 193, 208, 224, 239, 255, 250, 245, 239, 234, 229,
    224, 219, 219, 219, 219, 219, 219, 219, 219, 224, 229, 234, 239, 245, 250, 255,
    239, 224, 208, 193, 177, 161, 146, 141, 135, 130, 125, 120, 114, 109, 109, 109,
    109, 109, 109, 109, 109, 125, 141, 156, 172, 187, 203, 219, 203, 187, 172, 156,
    141, 125, 109, 114, 120, 125, 130, 135, 141, 146, 146, 146, 146, 146, 146, 146,
    146, 161, 177, 193, 208, 224, 239, 255, 255, 255, 255, 255, 255, 255,
];

fn config(density: usize) -> GenerateConfig {
    GenerateConfig {
        density,
        ..GenerateConfig::default()
    }
}

fn square() -> VertexList {
    VertexList::new(vec![
        Vertex::new(0, 0),
        Vertex::new(2, 0),
        Vertex::new(2, 2),
        Vertex::new(0, 2),
    ])
    .unwrap()
}

#[test]
fn builtin_cube_matches_board_tables() {
    let table = generate_table(&VertexList::builtin(), &config(7)).unwrap();
    assert_eq!(table.len(), 126);
    assert_eq!(table.norm_max, 7.0);
    assert_eq!(table.xs, BOARD_XS);
    assert_eq!(table.ys, BOARD_YS);
}

#[test]
fn builtin_cube_with_default_density() {
    let table = generate_table(&VertexList::builtin(), &GenerateConfig::default()).unwrap();
    assert_eq!(table.len(), 18 * 15);
    let text = render_table(&table, OutputFormat::C);
    assert!(text.starts_with("#define NUM_POINTS (270)\n#define XS_LENGTH   (270)\n"));
    assert!(text.contains("float xs[XS_LENGTH] = {\n    72.85714285714285, 80.14285714285715, "));
}

#[test]
fn square_renders_exactly() {
    let table = generate_table(&square(), &config(1)).unwrap();
    let expected = concat!(
        "#define NUM_POINTS (4)\n",
        "#define XS_LENGTH   (4)\n",
        "uint8_t xs[XS_LENGTH] = {\n",
        "    0, 255, 255, 0, \n",
        "};\n",
        "#define YS_LENGTH   (4)\n",
        "uint8_t ys[YS_LENGTH] = {\n",
        "    0, 0, 255, 255, \n",
        "};\n",
        "#define XS_LENGTH   (4)\n",
        "float xs[XS_LENGTH] = {\n",
        "    0.0, 255.0, 255.0, 0.0, \n",
        "};\n",
        "#define YS_LENGTH   (4)\n",
        "float ys[YS_LENGTH] = {\n",
        "    0.0, 0.0, 255.0, 255.0, \n",
        "};\n",
    );
    assert_eq!(render_table(&table, OutputFormat::C), expected);
}

#[test]
fn rendering_is_reproducible() {
    let a = generate_table(&VertexList::builtin(), &config(9)).unwrap();
    let b = generate_table(&VertexList::builtin(), &config(9)).unwrap();
    assert_eq!(render_table(&a, OutputFormat::C), render_table(&b, OutputFormat::C));
}

#[test]
fn every_value_is_comma_terminated() {
    let table = generate_table(&VertexList::builtin(), &config(5)).unwrap();
    let text = render_table(&table, OutputFormat::C);
    let value_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("    ")).collect();
    let tokens: usize = value_lines.iter().map(|l| l.matches(", ").count()).sum();
    assert_eq!(tokens, 4 * 90);
    assert!(value_lines.iter().all(|l| l.matches(", ").count() <= 16));
}

#[test]
fn degenerate_shape_is_reported() {
    let origin = VertexList::new(vec![Vertex::new(0, 0), Vertex::new(0, 0)]).unwrap();
    let err = generate_table(&origin, &config(4)).unwrap_err();
    assert!(matches!(err, ShapeError::DegenerateShape { .. }));
    assert!(err.to_string().contains("degenerate shape"));
}

#[test]
fn wrap_reproduces_uint8_truncation() {
    let shape = VertexList::new(vec![Vertex::new(-1, 1), Vertex::new(1, 1)]).unwrap();
    let cfg = GenerateConfig {
        overflow: OverflowPolicy::Wrap,
        ..config(1)
    };
    let table = generate_table(&shape, &cfg).unwrap();
    // -255 + 0.5 truncates to -254, stored as 2.
    assert_eq!(table.xs, vec![2, 255]);
}

#[test]
fn diagnostics_do_not_touch_the_table() {
    let table = generate_table(&square(), &config(8)).unwrap();
    let before = render_table(&table, OutputFormat::C);

    let xs: Vec<f64> = table.xs.iter().map(|&v| f64::from(v)).collect();
    let mut plotter = RecordingPlotter::default();
    plot_signal(&mut plotter, "xs", &xs).unwrap();
    plot_fft(&mut plotter, "xs spectrum", &xs, xs.len() as f64).unwrap();

    assert_eq!(plotter.plots.len(), 2);
    assert_eq!(plotter.plots[0].kind, PlotKind::Signal);
    assert_eq!(plotter.plots[1].kind, PlotKind::Spectrum);
    assert_eq!(render_table(&table, OutputFormat::C), before);
}

#[test]
fn bundled_cube_file_matches_builtin() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("shapes/cube.json");
    assert_eq!(VertexList::load(&path).unwrap(), VertexList::builtin());
}
