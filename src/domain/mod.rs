pub mod error;
pub mod repository;
pub mod student;

// CSV import/export module
pub mod csv;
