use {
    crate::{
        config::{DF, WORKBOOK},
        domain::DemandRecord,
        models::DemandDataset,
    },
    anyhow::{Context, Result, bail},
    calamine::{Data, Range, Reader, open_workbook_auto},
    std::path::Path,
};

/// Reads the demand sheet from `path` and builds the dataset.
/// Nothing is returned unless every row parsed.
pub fn load_workbook(path: &Path) -> Result<DemandDataset> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let range = workbook
        .worksheet_range(WORKBOOK.sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", WORKBOOK.sheet_name))?;

    let records = records_from_range(&range)?;

    if DF.log_loading {
        log::info!(
            "Loaded {} rows from '{}' in {}",
            records.len(),
            WORKBOOK.sheet_name,
            path.display()
        );
    }

    DemandDataset::from_records(records)
}

/// Converts the worksheet cells into records.
///
/// The first `WORKBOOK.header_rows` rows are skipped and blank rows are ignored.
/// Column order is fixed; header text is never inspected.
pub fn records_from_range(range: &Range<Data>) -> Result<Vec<DemandRecord>> {
    let width = range.width();
    if !range.is_empty() && width < WORKBOOK.column_count {
        bail!(
            "Sheet '{}' has {} columns, expected {}.",
            WORKBOOK.sheet_name,
            width,
            WORKBOOK.column_count
        );
    }

    // Sheet row numbers are 1-based; the range may start below row 1.
    let first_row = range.start().map_or(0, |(row, _)| row as usize);

    let mut records = Vec::new();
    for (idx, row) in range.rows().enumerate().skip(WORKBOOK.header_rows) {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let row_no = first_row + idx + 1;

        records.push(DemandRecord {
            month_label: row[0].to_string().trim().to_string(),
            demand: required(&row[1], row_no, 1)?,
            price: required(&row[2], row_no, 2)?,
            revenue: required(&row[3], row_no, 3)?,
            cumulative_demand: required(&row[4], row_no, 4)?,
            growth_rate_pct: optional(&row[5], row_no, 5)?,
            stored_forecast: optional(&row[6], row_no, 6)?,
        });
    }

    if records.is_empty() {
        bail!("Sheet '{}' contains no data rows.", WORKBOOK.sheet_name);
    }

    Ok(records)
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn required(cell: &Data, row_no: usize, col: usize) -> Result<f64> {
    match cell_number(cell) {
        Some(v) => Ok(v),
        None => bail!(
            "Row {}: column '{}' must be numeric, found '{}'.",
            row_no,
            WORKBOOK.column_names[col],
            cell
        ),
    }
}

fn optional(cell: &Data, row_no: usize, col: usize) -> Result<Option<f64>> {
    match cell {
        Data::Empty => Ok(None),
        Data::String(s) if s.trim().is_empty() => Ok(None),
        _ => required(cell, row_no, col).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[[Data; 7]]) -> Range<Data> {
        let mut range = Range::new((0, 0), (rows.len() as u32, 6));
        for (c, name) in WORKBOOK.column_names.iter().enumerate() {
            range.set_value((0, c as u32), Data::String(name.to_string()));
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32 + 1, c as u32), cell.clone());
            }
        }
        range
    }

    fn row(label: &str, demand: f64, growth: Data) -> [Data; 7] {
        [
            Data::String(label.to_string()),
            Data::Float(demand),
            Data::Int(3500),
            Data::Float(demand * 3500.0),
            Data::Float(demand),
            growth,
            Data::Empty,
        ]
    }

    #[test]
    fn test_records_from_range_reads_positional_columns() {
        let range = sheet(&[
            row("Ianuarie", 120.0, Data::Empty),
            row("Februarie", 130.0, Data::String("8.3".to_string())),
        ]);

        let records = records_from_range(&range).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].month_label, "Ianuarie");
        assert_eq!(records[0].price, 3500.0);
        assert_eq!(records[0].growth_rate_pct, None);
        assert_eq!(records[1].growth_rate_pct, Some(8.3));
        assert_eq!(records[1].stored_forecast, None);
    }

    #[test]
    fn test_records_from_range_skips_blank_rows() {
        let blank: [Data; 7] = std::array::from_fn(|_| Data::Empty);
        let range = sheet(&[row("Ianuarie", 120.0, Data::Empty), blank]);
        assert_eq!(records_from_range(&range).unwrap().len(), 1);
    }

    #[test]
    fn test_records_from_range_rejects_text_demand() {
        let mut bad = row("Martie", 0.0, Data::Empty);
        bad[1] = Data::String("n/a".to_string());
        let err = records_from_range(&sheet(&[bad])).unwrap_err();
        assert!(err.to_string().contains("Cerere"));
    }

    #[test]
    fn test_row_numbers_count_from_top_of_sheet() {
        // Header on sheet row 3, first data row on sheet row 4.
        let mut range = Range::new((2, 0), (3, 6));
        for (c, name) in WORKBOOK.column_names.iter().enumerate() {
            range.set_value((2, c as u32), Data::String(name.to_string()));
        }
        let mut bad = row("Martie", 0.0, Data::Empty);
        bad[1] = Data::String("n/a".to_string());
        for (c, cell) in bad.iter().enumerate() {
            range.set_value((3, c as u32), cell.clone());
        }

        let err = records_from_range(&range).unwrap_err().to_string();
        assert!(err.starts_with("Row 4:"), "{}", err);
    }

    #[test]
    fn test_records_from_range_rejects_narrow_sheet() {
        let mut range = Range::new((0, 0), (2, 3));
        range.set_value((1, 0), Data::String("Ianuarie".to_string()));
        assert!(records_from_range(&range).is_err());
    }

    #[test]
    fn test_records_from_range_rejects_header_only() {
        let range = sheet(&[]);
        assert!(records_from_range(&range).is_err());
    }
}
