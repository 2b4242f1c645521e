// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{}", sep)?;
        } else {
            first = false;
        }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows as-is, with an optional header line.
pub fn rows_to_string(rows: &[Vec<String>], headers: Option<&[String]>, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    // Writing into a Vec cannot fail.
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

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row(&["COMP 1510", "a,b", "say \"hi\"", ""]), ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "COMP 1510,\"a,b\",\"say \"\"hi\"\"\",\n");
    }

    #[test]
    fn tsv_does_not_quote_commas() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row(&["a,b", "c\td"]), '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\t\"c\td\"\n");
    }

    #[test]
    fn header_first() {
        let h = row(&["Course", "CRN"]);
        let s = rows_to_string(&[row(&["X 1", "2"])], Some(&h), ',');
        assert_eq!(s, "Course,CRN\nX 1,2\n");
        assert_eq!(rows_to_string(&[], None, ','), "");
    }
}
