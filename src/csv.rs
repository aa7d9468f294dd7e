// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

pub const SEP: char = ',';

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
/// Blank lines are dropped; an unterminated quote runs to end of input.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Split off a leading header row if its first cell names a column we know.
pub fn split_header(
    mut rows: Vec<Vec<String>>,
    first_col: &str,
) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let is_header = rows
        .first()
        .and_then(|r| r.first())
        .is_some_and(|c| c.trim().eq_ignore_ascii_case(first_col));
    if is_header {
        let header = rows.remove(0);
        return (Some(header), rows);
    }
    (None, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer, newline-terminated.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Rows (and optional header) as one string.
pub fn rows_to_string<S: AsRef<str>>(headers: Option<&[S]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_round_trip_through_parser() {
        let text = "timestamp,title,price\n2024-01-01 00:00:00,\"Hello, \"\"World\"\"\",10.5\r\n\n";
        let rows = parse_rows(text, SEP);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], "Hello, \"World\"");

        let mut out = Vec::new();
        write_row(&mut out, &rows[1], SEP).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2024-01-01 00:00:00,\"Hello, \"\"World\"\"\",10.5\n");
    }

    #[test]
    fn unterminated_quote_runs_to_end_of_input() {
        let rows = parse_rows("a,b\nc,\"open, quote\nstill open", SEP);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["c", "open, quote\nstill open"]);
    }

    #[test]
    fn last_row_without_newline_is_kept() {
        assert_eq!(parse_rows("a,b\nc,", SEP), vec![vec!["a", "b"], vec!["c", ""]]);
        assert_eq!(parse_rows("a,b\nc", SEP), vec![vec!["a", "b"], vec!["c"]]);
        assert!(parse_rows("\n\r\n", SEP).is_empty());
    }

    #[test]
    fn header_is_split_only_when_named() {
        let rows = parse_rows("timestamp,title,price\na,b,c", SEP);
        let (h, body) = split_header(rows, "timestamp");
        assert!(h.is_some());
        assert_eq!(body.len(), 1);

        let rows = parse_rows("a,b,c", SEP);
        let (h, body) = split_header(rows, "timestamp");
        assert!(h.is_none());
        assert_eq!(body.len(), 1);
    }
}
