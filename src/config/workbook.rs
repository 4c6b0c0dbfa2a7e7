//! Input workbook schema

/// Fixed layout of the demand worksheet.
pub struct WorkbookConfig {
    /// Sheet that must exist in the workbook
    pub sheet_name: &'static str,
    /// Number of leading header rows skipped before data
    pub header_rows: usize,
    /// Minimum number of cells per data row
    pub column_count: usize,
    /// Positional column names, used only in error messages
    pub column_names: [&'static str; 7],
    /// File picker filter
    pub file_filter_name: &'static str,
    pub file_extensions: &'static [&'static str],
}

pub const WORKBOOK: WorkbookConfig = WorkbookConfig {
    sheet_name: "Prognoza_Cerere_Laptopuri",
    header_rows: 1,
    column_count: 7,
    column_names: [
        "Luna",
        "Cerere",
        "Preț",
        "Venituri",
        "Cerere Cumulată",
        "Rata de Creștere",
        "Prognoză Cerere",
    ],
    file_filter_name: "Excel Files",
    file_extensions: &["xlsx"],
};
