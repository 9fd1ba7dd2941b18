//! Plain-text table rendering.
//!
//! Columns are sized to the widest cell (header included), cells are
//! left-aligned and joined with `" | "`, and a dashed rule joined with
//! `"-+-"` separates the header from the body.

/// Render rows under a header into an aligned table.
///
/// Rows shorter than the header are padded with empty cells; longer rows
/// have their extra cells ignored.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    out.push_str(&header_line.join(" | "));
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!("{cell:<w$}")
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_widest_cell() {
        let rendered = render(
            &["sym", "profit"],
            &[
                vec!["EURUSD".to_string(), "1.5".to_string()],
                vec!["XA".to_string(), "-120.25".to_string()],
            ],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "sym    | profit ");
        assert_eq!(lines[1], "-------+--------");
        assert_eq!(lines[2], "EURUSD | 1.5    ");
        assert_eq!(lines[3], "XA     | -120.25");
    }

    #[test]
    fn header_sets_minimum_width() {
        let rendered = render(&["ticket"], &[vec!["7".to_string()]]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ticket");
        assert_eq!(lines[1], "------");
        assert_eq!(lines[2], "7     ");
    }

    #[test]
    fn short_rows_are_padded() {
        let rendered = render(&["a", "b"], &[vec!["x".to_string()]]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "x | ");
    }

    #[test]
    fn empty_body_still_renders_header_and_rule() {
        let rendered = render(&["time", "close"], &[]);
        assert_eq!(rendered, "time | close\n-----+------\n");
    }
}
