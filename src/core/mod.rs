//! Core rendering modules
//!
//! This module contains the rendering pipeline:
//! - `escape`: LaTeX escaping for plain-text cells
//! - `table`: paginated LaTeX table + compile step
//! - `export`: quoted CSV export
//! - `pipeline`: runs the stages in order

pub mod escape;
pub mod export;
pub mod pipeline;
pub mod table;

pub use escape::{escape_latex, RESERVED};
pub use export::{render_csv, ExportRenderer};
pub use pipeline::{Pipeline, PipelineOutput, Stage};
pub use table::{count_tables, render_row, render_source, TableRenderer};
