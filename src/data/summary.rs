use super::model::{DatasetCollection, DatasetKind, Table};

/// Build the "Dataset Summary:" report, one block per table present in the
/// collection, in load order. Absent datasets are simply omitted, so an
/// empty collection yields the header line alone.
///
/// Expected columns that are missing from a table are skipped rather than
/// reported; the tables are assumed to be well formed.
pub fn summarize(collection: &DatasetCollection) -> String {
    let mut out = String::from("Dataset Summary:\n");

    if let Some(table) = collection.get(&DatasetKind::Ratings) {
        out.push_str(&format!("- Ratings: {} entries\n", table.len()));
        push_distinct(&mut out, table, "user_id", "Unique users");
        push_distinct(&mut out, table, "book_id", "Unique books");
        if let Some((min, max)) = table.numeric_range("rating") {
            out.push_str(&format!(
                "  - Rating range: {} to {}\n",
                format_number(min),
                format_number(max)
            ));
        }
    }

    if let Some(table) = collection.get(&DatasetKind::Books) {
        out.push_str(&format!("- Books: {} entries\n", table.len()));
        push_distinct(&mut out, table, "authors", "Unique authors");
    }

    if let Some(table) = collection.get(&DatasetKind::ToRead) {
        out.push_str(&format!("- To-read: {} entries\n", table.len()));
        push_distinct(&mut out, table, "user_id", "Unique users");
        push_distinct(&mut out, table, "book_id", "Unique books");
    }

    if let Some(table) = collection.get(&DatasetKind::BookTags) {
        out.push_str(&format!("- Book tags: {} entries\n", table.len()));
        push_distinct(&mut out, table, "goodreads_book_id", "Unique books");
        push_distinct(&mut out, table, "tag_id", "Unique tags");
    }

    if let Some(table) = collection.get(&DatasetKind::Tags) {
        out.push_str(&format!("- Tags: {} entries\n", table.len()));
    }

    out
}

fn push_distinct(out: &mut String, table: &Table, column: &str, label: &str) {
    if let Some(count) = table.distinct_count(column) {
        out.push_str(&format!("  - {label}: {count}\n"));
    }
}

/// Ratings are integers in practice; keep them printed without a decimal
/// point while still handling fractional values.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

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
    fn ratings_block_reports_counts_and_range() {
        let mut collection = DatasetCollection::new();
        collection.insert(
            DatasetKind::Ratings,
            table(
                &["user_id", "book_id", "rating"],
                &[&["1", "10", "3"], &["2", "10", "5"]],
            ),
        );

        let text = summarize(&collection);
        assert_eq!(
            text,
            "Dataset Summary:\n\
             - Ratings: 2 entries\n\
             \x20 - Unique users: 2\n\
             \x20 - Unique books: 1\n\
             \x20 - Rating range: 3 to 5\n"
        );
    }

    #[test]
    fn empty_collection_is_header_only() {
        assert_eq!(summarize(&DatasetCollection::new()), "Dataset Summary:\n");
    }

    #[test]
    fn books_without_authors_column_omits_author_count() {
        let mut collection = DatasetCollection::new();
        collection.insert(
            DatasetKind::Books,
            table(&["book_id", "title"], &[&["1", "Dune"]]),
        );

        let text = summarize(&collection);
        assert_eq!(text, "Dataset Summary:\n- Books: 1 entries\n");
    }

    #[test]
    fn blocks_follow_load_order() {
        let mut collection = DatasetCollection::new();
        collection.insert(DatasetKind::Tags, table(&["tag_id", "tag_name"], &[&["0", "fiction"]]));
        collection.insert(
            DatasetKind::BookTags,
            table(
                &["goodreads_book_id", "tag_id", "count"],
                &[&["1", "0", "7"], &["1", "3", "2"]],
            ),
        );

        let text = summarize(&collection);
        assert_eq!(
            text,
            "Dataset Summary:\n\
             - Book tags: 2 entries\n\
             \x20 - Unique books: 1\n\
             \x20 - Unique tags: 2\n\
             - Tags: 1 entries\n"
        );
    }

    #[test]
    fn to_read_block_reports_user_and_book_cardinality() {
        let mut collection = DatasetCollection::new();
        collection.insert(
            DatasetKind::ToRead,
            table(
                &["user_id", "book_id"],
                &[&["1", "10"], &["1", "11"], &["2", "10"]],
            ),
        );

        let text = summarize(&collection);
        assert_eq!(
            text,
            "Dataset Summary:\n\
             - To-read: 3 entries\n\
             \x20 - Unique users: 2\n\
             \x20 - Unique books: 2\n"
        );
    }
}
