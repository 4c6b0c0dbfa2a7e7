mod workbook;

pub use workbook::{load_workbook, records_from_range};
