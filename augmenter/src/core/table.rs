//! In-memory CSV table parsed from a fixture literal.
//!
//! Fields are split on `,` only. The fixture format has no quoting or
//! escaping, so splitting and re-joining a line reproduces it exactly.

/// Header plus data rows, each as an ordered list of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV text into a table.
    ///
    /// The block is trimmed, split on `\n`, and each line trimmed. Returns
    /// `None` when nothing remains to form a header line.
    pub fn parse(csv: &str) -> Option<Self> {
        let trimmed = csv.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut lines = trimmed.split('\n').map(str::trim);
        let header = split_fields(lines.next()?);
        let rows = lines.map(split_fields).collect();
        Some(Self { header, rows })
    }

    /// Render back to CSV text (header and rows joined by `\n`).
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.header.join(","));
        lines.extend(self.rows.iter().map(|row| row.join(",")));
        lines.join("\n")
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let table = Table::parse("ID,sex\n1,M\n2,F").expect("table");
        assert_eq!(table.header, vec!["ID", "sex"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1], vec!["2", "F"]);
    }

    #[test]
    fn trims_block_and_lines() {
        let table = Table::parse("\n  ID,sex \r\n1,M\r\n\n").expect("table");
        assert_eq!(table.render(), "ID,sex\n1,M");
    }

    #[test]
    fn header_only_block_has_no_rows() {
        let table = Table::parse("ID,sex,age").expect("table");
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn blank_block_has_no_header() {
        assert_eq!(Table::parse(" \n\t\n"), None);
    }

    #[test]
    fn render_keeps_ragged_rows_verbatim() {
        let csv = "ID,sex,age\n1\n2,F,30,extra";
        let table = Table::parse(csv).expect("table");
        assert_eq!(table.rows[0], vec!["1"]);
        assert_eq!(table.render(), csv);
    }
}
