use std::cmp::max;

/// Table row wrapper for the compact file listing.
#[derive(Debug)]
pub struct TableRow(pub Vec<String>);

impl TableRow {
    pub fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

/// Format a small ASCII table with column headers.
pub fn format_table(headers: &[&str], rows: &[TableRow]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for row in rows {
        for (idx, value) in row.0.iter().enumerate().take(widths.len()) {
            widths[idx] = max(widths[idx], value.chars().count());
        }
    }

    let divider: String = widths
        .iter()
        .map(|w| "-".repeat(*w + 2))
        .collect::<Vec<_>>()
        .join("+");

    let render_row = |values: &[String]| {
        let mut parts = Vec::new();
        for (idx, width) in widths.iter().enumerate() {
            let value = values.get(idx).map(String::as_str).unwrap_or("");
            parts.push(format!(" {:width$} ", value, width = *width));
        }
        parts.join("|")
    };

    let mut out = String::new();
    out.push_str(&divider);
    out.push('\n');
    out.push_str(&render_row(
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    out.push('\n');
    out.push_str(&divider);
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(&row.0));
        out.push('\n');
    }
    out.push_str(&divider);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_widen_to_content() {
        let rows = vec![TableRow::from(vec!["1".to_string(), "cmd/server/main.go".to_string()])];
        let table = format_table(&["#", "path"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "---+--------------------");
        assert_eq!(lines[1], " # | path               ");
        assert_eq!(lines[3], " 1 | cmd/server/main.go ");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let rows = vec![TableRow::from(vec!["only".to_string()])];
        let table = format_table(&["a", "b"], &rows);
        assert!(table.lines().nth(3).unwrap().starts_with(" only |"));
    }
}
