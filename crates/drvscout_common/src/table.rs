//! Fixed-width, pipe-delimited table rendering.
//!
//! Rows start with a single space and separate cells with ` | `. Every cell
//! is left-aligned and padded to its column width; a width of `0` leaves the
//! cell unpadded, which keeps the last column free of trailing spaces.
//! Overlong cells are never cut, so URLs stay clickable.

/// Format one row. `fields` and `widths` must have the same length.
pub fn format_row(fields: &[&str], widths: &[usize]) -> String {
    debug_assert_eq!(fields.len(), widths.len());

    let cells: Vec<String> = fields
        .iter()
        .zip(widths)
        .map(|(field, &width)| {
            if width == 0 {
                (*field).to_string()
            } else {
                format!("{field:<width$}")
            }
        })
        .collect();

    format!(" {}", cells.join(" | "))
}

/// Rule line exactly as long as the header, in display characters.
pub fn separator(header: &str) -> String {
    "-".repeat(header.chars().count())
}
