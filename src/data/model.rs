use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// DatasetKind – the five corpus files
// ---------------------------------------------------------------------------

/// One of the five fixed categories of input file in the GoodReads corpus.
///
/// The derived `Ord` follows declaration order, which is also the fixed
/// load and reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatasetKind {
    Ratings,
    Books,
    ToRead,
    BookTags,
    Tags,
}

impl DatasetKind {
    /// All kinds, in load order.
    pub const ALL: [DatasetKind; 5] = [
        DatasetKind::Ratings,
        DatasetKind::Books,
        DatasetKind::ToRead,
        DatasetKind::BookTags,
        DatasetKind::Tags,
    ];

    /// Snake-case key used in the collection and in preview headings.
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Ratings => "ratings",
            DatasetKind::Books => "books",
            DatasetKind::ToRead => "to_read",
            DatasetKind::BookTags => "book_tags",
            DatasetKind::Tags => "tags",
        }
    }

    /// Sentence-case label used in error messages ("Ratings file not found…").
    pub fn title(self) -> &'static str {
        match self {
            DatasetKind::Ratings => "Ratings",
            DatasetKind::Books => "Books",
            DatasetKind::ToRead => "To-read",
            DatasetKind::BookTags => "Book tags",
            DatasetKind::Tags => "Tags",
        }
    }

    /// Plural noun for row counts ("Loaded 42 book tag entries").
    pub fn noun(self) -> &'static str {
        match self {
            DatasetKind::Ratings => "ratings",
            DatasetKind::Books => "books",
            DatasetKind::ToRead => "to-read entries",
            DatasetKind::BookTags => "book tag entries",
            DatasetKind::Tags => "tags",
        }
    }

    /// Filename looked up under the raw-data directory when none is given.
    pub fn default_filename(self) -> &'static str {
        match self {
            DatasetKind::Ratings => "ratings.csv",
            DatasetKind::Books => "books.csv",
            DatasetKind::ToRead => "to_read.csv",
            DatasetKind::BookTags => "book_tags.csv",
            DatasetKind::Tags => "tags.csv",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Table – one parsed CSV file
// ---------------------------------------------------------------------------

/// An in-memory table: named columns plus rows of string cells, exactly as
/// they appeared in the source CSV. Nothing is typed or validated at load
/// time; numeric interpretation happens on demand in [`Table::numeric_range`].
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Column names from the header row.
    pub columns: Vec<String>,
    /// Data rows, each cell aligned with `columns` by position.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Table { columns, rows }
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of distinct values in a column, or `None` when the column
    /// does not exist.
    pub fn distinct_count(&self, column: &str) -> Option<usize> {
        let idx = self.column_index(column)?;
        let values: BTreeSet<&str> = self
            .rows
            .iter()
            .filter_map(|row| row.get(idx))
            .map(String::as_str)
            .collect();
        Some(values.len())
    }

    /// Minimum and maximum over the cells of a column that parse as
    /// numbers. `None` when the column is missing or holds no numeric cell.
    pub fn numeric_range(&self, column: &str) -> Option<(f64, f64)> {
        let idx = self.column_index(column)?;
        let mut range: Option<(f64, f64)> = None;
        for row in &self.rows {
            let Some(value) = row.get(idx).and_then(|cell| cell.trim().parse::<f64>().ok())
            else {
                continue;
            };
            range = Some(match range {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
        range
    }

    /// Render the header and the first `max_rows` rows, columns
    /// left-aligned and separated by two spaces.
    pub fn preview(&self, max_rows: usize) -> String {
        let rows = &self.rows[..self.rows.len().min(max_rows)];

        let mut widths: Vec<usize> = self.columns.iter().map(String::len).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.len());
                }
            }
        }

        let mut out = String::new();
        render_row(&mut out, &self.columns, &widths);
        for row in rows {
            render_row(&mut out, row, &widths);
        }
        out
    }
}

fn render_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        if i + 1 < cells.len() {
            let width = widths.get(i).copied().unwrap_or(cell.len());
            out.push_str(&format!("{cell:<width$}"));
        } else {
            // Last column is never padded so lines carry no trailing spaces.
            out.push_str(cell);
        }
    }
    out.push('\n');
}

// ---------------------------------------------------------------------------
// DatasetCollection – the result of one batch load
// ---------------------------------------------------------------------------

/// Mapping from dataset kind to loaded table. A kind is present iff its
/// backing file existed and parsed without error at load time.
pub type DatasetCollection = BTreeMap<DatasetKind, Table>;

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn kind_order_matches_load_order() {
        let mut sorted = DatasetKind::ALL;
        sorted.sort();
        assert_eq!(sorted, DatasetKind::ALL);
    }

    #[test]
    fn distinct_count_ignores_duplicates() {
        let t = table(
            &["user_id", "book_id"],
            &[&["1", "10"], &["2", "10"], &["1", "11"]],
        );
        assert_eq!(t.distinct_count("user_id"), Some(2));
        assert_eq!(t.distinct_count("book_id"), Some(2));
        assert_eq!(t.distinct_count("missing"), None);
    }

    #[test]
    fn numeric_range_skips_non_numeric_cells() {
        let t = table(&["rating"], &[&["3"], &["n/a"], &["5"], &["1"]]);
        assert_eq!(t.numeric_range("rating"), Some((1.0, 5.0)));
    }

    #[test]
    fn numeric_range_is_none_without_numbers() {
        let t = table(&["rating"], &[&["low"], &["high"]]);
        assert_eq!(t.numeric_range("rating"), None);
        assert_eq!(t.numeric_range("missing"), None);
    }

    #[test]
    fn preview_caps_rows_and_keeps_header() {
        let t = table(
            &["user_id", "rating"],
            &[&["1", "3"], &["2", "5"], &["3", "4"]],
        );
        let text = t.preview(2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "user_id  rating");
        assert_eq!(lines[1], "1        3");
        assert_eq!(lines[2], "2        5");
    }

    #[test]
    fn preview_of_empty_table_is_header_only() {
        let t = table(&["tag_id", "tag_name"], &[]);
        assert_eq!(t.preview(5), "tag_id  tag_name\n");
    }
}
