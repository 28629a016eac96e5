pub mod line_classifier;
pub mod log_scanner;
pub mod login_aggregator;
pub mod report_printer;


pub use line_classifier::classify;
pub use log_scanner::LogScanner;
pub use login_aggregator::{LoginStatistics, ScanSummary};
pub use report_printer::ReportPrinter;
