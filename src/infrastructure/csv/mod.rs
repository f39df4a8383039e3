// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Student CSV parsing, encoding detection, and export writing

mod csv_parser;
mod csv_writer;

pub use csv_parser::CsvParser;
pub use csv_writer::write_students;
