pub mod csv_export;
pub mod csv_import;
pub mod list_students;
pub mod manage_student;
pub mod upload;
