// ============================================================
// CSV DOMAIN MODULE
// ============================================================
// Column layout and row shapes for student CSV import/export

mod columns;
mod csv_row;

pub use columns::{StudentColumns, EXPORT_HEADERS, IMPORT_HEADERS};
pub use csv_row::{ExportRow, StudentCsvRow};
