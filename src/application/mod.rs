pub mod use_cases;

pub use use_cases::csv_export::{CsvExportUseCase, ExportSummary};
pub use use_cases::csv_import::{CsvImportUseCase, ImportSummary};
pub use use_cases::list_students::ListStudentsUseCase;
pub use use_cases::manage_student::ManageStudentUseCase;
pub use use_cases::upload::{UploadSummary, UploadUseCase};
