//! Export collaborators: CSV and printable report rendering of saved history

pub mod csv;
pub mod report;

pub use self::csv::{history_to_csv_string, write_history_csv};
pub use report::render_history_report;
