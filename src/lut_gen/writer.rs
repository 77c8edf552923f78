//! Rust source rendering for generated tables.

use std::fmt::Write;

/// First lines of every generated file.
pub const GENERATED_HEADER: &str = "// @generated by `lut_gen`. Do not edit by hand.\n\
// Regenerate with `cargo run --bin lut_gen` and diff against the committed file.\n";

/// Render `entries` as a `pub static <name>: [i32; N]` item.
///
/// Pure; the output is byte-for-byte what gets committed, so tests compare it
/// directly against the files under `src/lut/generated/`.
pub fn render_table(static_name: &str, entries: &[i32], entries_per_line: usize) -> String {
    let per_line = entries_per_line.max(1);
    // Roughly 8 characters per entry plus the header.
    let mut out = String::with_capacity(entries.len() * 8 + 256);

    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str("#[rustfmt::skip]\n");
    // Writing to a String cannot fail.
    let _ = write!(out, "pub static {}: [i32; {}] = [", static_name, entries.len());

    for (i, entry) in entries.iter().enumerate() {
        out.push_str(if i % per_line == 0 { "\n    " } else { " " });
        let _ = write!(out, "{}", entry);
        if i + 1 != entries.len() {
            out.push(',');
        }
    }

    out.push_str("\n];\n");
    out
}
