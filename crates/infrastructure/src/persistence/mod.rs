//! Report persistence

mod report_file_store;

pub use report_file_store::ReportFileStore;
