pub mod args;
pub mod course;
pub mod model;
pub mod report;
pub mod utils;
