pub mod sqlite;

pub use sqlite::SqliteStudentRepository;
