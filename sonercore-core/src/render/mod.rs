//! Text rendering for the summary and details screens.
//!
//! Every renderer is a pure function returning a `String`; callers decide
//! where it is printed.

pub mod table;
pub mod terminal;

pub use table::{format_table, TableRow};
pub use terminal::{render_detail, render_file_table, render_results, render_summary, Style};
