pub mod error;
pub mod loader;
pub mod table;

pub use error::InputError;
pub use loader::{load_course_table, load_course_table_from_reader, ColumnNames};
pub use table::{CourseTable, HoleRecord, RawHole};
