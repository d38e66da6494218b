pub mod reader;
pub mod report_writer;
