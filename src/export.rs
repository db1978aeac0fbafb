use std::path::Path;

use crate::review::ReviewRow;
use crate::{Error, Result};

/// Output column order, shared by both writers.
const COLUMNS: [&str; 5] = ["date", "userName", "review", "rating", "country"];

const SHEET_NAME: &str = "Sheet1";

/// Writes the rows as CSV, overwriting `path`.
/// The header row is written even when there are no rows.
pub fn write_csv(path: &Path, rows: &[ReviewRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the rows as an XLSX workbook with the same layout as the CSV.
/// Every cell is written as a string, dates in RFC 3339.
pub fn write_xlsx(path: &Path, rows: &[ReviewRow]) -> Result<()> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_by_name_mut(SHEET_NAME)
        .ok_or(Error::MissingSheet(SHEET_NAME))?;

    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.get_cell_mut((col as u32 + 1, 1)).set_value(*name);
    }
    for (idx, row) in rows.iter().enumerate() {
        let row_num = idx as u32 + 2;
        sheet
            .get_cell_mut((1, row_num))
            .set_value(row.date.to_rfc3339());
        sheet
            .get_cell_mut((2, row_num))
            .set_value(row.user_name.as_str());
        sheet
            .get_cell_mut((3, row_num))
            .set_value(row.review.as_str());
        sheet
            .get_cell_mut((4, row_num))
            .set_value(row.rating.to_string());
        sheet
            .get_cell_mut((5, row_num))
            .set_value(row.country.as_str());
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn row(date: &str, user: &str, country: &str) -> ReviewRow {
        ReviewRow {
            date: DateTime::parse_from_rfc3339(date).unwrap(),
            user_name: user.to_owned(),
            review: format!("review by {user}"),
            rating: 5,
            country: country.to_owned(),
        }
    }

    #[test]
    fn csv_has_fixed_header_and_row_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        let rows = [
            row("2023-01-03T00:00:00+00:00", "ayan", "az"),
            row("2023-01-02T00:00:00+00:00", "deniz", "tr"),
        ];

        write_csv(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "date,userName,review,rating,country",
                "2023-01-03T00:00:00+00:00,ayan,review by ayan,5,az",
                "2023-01-02T00:00:00+00:00,deniz,review by deniz,5,tr",
            ]
        );
    }

    #[test]
    fn csv_header_is_written_for_an_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");

        write_csv(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "date,userName,review,rating,country\n");
    }

    #[test]
    fn xlsx_mirrors_the_csv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.xlsx");
        let rows = [
            row("2023-01-03T00:00:00+00:00", "ayan", "az"),
            row("2023-01-02T00:00:00+00:00", "deniz", "tr"),
        ];

        write_xlsx(&path, &rows).unwrap();

        let book = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
        let sheet = book.get_sheet_by_name(SHEET_NAME).unwrap();
        let cell = |addr: &str| {
            sheet
                .get_cell(addr)
                .map(|c| c.get_value().to_string())
                .unwrap_or_default()
        };

        assert_eq!(cell("A1"), "date");
        assert_eq!(cell("E1"), "country");
        assert_eq!(cell("A2"), "2023-01-03T00:00:00+00:00");
        assert_eq!(cell("B2"), "ayan");
        assert_eq!(cell("C3"), "review by deniz");
        assert_eq!(cell("D3"), "5");
        assert_eq!(cell("E3"), "tr");
    }
}
