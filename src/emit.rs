use std::fmt::Write;

pub const VALUES_PER_LINE: usize = 16;

const INDENT: &str = "    ";

/// Scalar that can be written as an array-literal element.
pub trait TableValue {
    fn write_literal(&self, out: &mut String);
}

impl TableValue for u8 {
    fn write_literal(&self, out: &mut String) {
        let _ = write!(out, "{}", self);
    }
}

impl TableValue for f64 {
    // Shortest round-trip form, always with a fractional part ("0.0", "127.5").
    fn write_literal(&self, out: &mut String) {
        let _ = write!(out, "{:?}", self);
    }
}

/// Named array about to be rendered as source text.
pub struct OutputArray<'a, T> {
    pub name: &'a str,
    pub type_name: &'a str,
    pub values: &'a [T],
}

impl<'a, T: TableValue> OutputArray<'a, T> {
    pub fn new(name: &'a str, type_name: &'a str, values: &'a [T]) -> Self {
        OutputArray {
            name,
            type_name,
            values,
        }
    }

    pub fn length_name(&self) -> String {
        format!("{}_LENGTH", self.name.to_uppercase())
    }

    /// C rendering: a `#define` length plus the array definition.
    pub fn render_c(&self) -> String {
        let length = self.length_name();
        let mut out = format!("#define {}   ({})\n", length, self.values.len());
        let _ = write!(out, "{} {}[{}] = {{\n{}", self.type_name, self.name, length, INDENT);
        self.write_body(&mut out);
        out.push_str("\n};");
        out
    }

    /// Rust rendering: a `usize` length constant plus a `static` array.
    pub fn render_rust(&self) -> String {
        let length = self.length_name();
        let mut out = format!("pub const {}: usize = {};\n", length, self.values.len());
        let _ = write!(
            out,
            "pub static {}: [{}; {}] = [\n{}",
            self.name.to_uppercase(),
            self.type_name,
            length,
            INDENT
        );
        self.write_body(&mut out);
        out.push_str("\n];");
        out
    }

    fn write_body(&self, out: &mut String) {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 && i % VALUES_PER_LINE == 0 {
                out.push('\n');
                out.push_str(INDENT);
            }
            value.write_literal(out);
            out.push_str(", ");
        }
    }
}

pub fn num_points_c(count: usize) -> String {
    format!("#define NUM_POINTS ({})", count)
}

pub fn num_points_rust(count: usize) -> String {
    format!("pub const NUM_POINTS: usize = {};", count)
}
