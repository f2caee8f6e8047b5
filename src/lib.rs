//! # opsheet
//!
//! Reference-sheet generator for the symbols of the TLA+ notation.
//!
//! ## Features
//!
//! - **Curated Catalog**: 112 symbols with typeset form, ASCII aliases and descriptions
//! - **Typeset Table**: paginated LaTeX source compiled to PDF by `pdflatex`
//! - **CSV Export**: one fully quoted row per symbol
//! - **Audit**: reports shared aliases and repeated entries without rewriting data
//! - **Injectable Effects**: file system and compiler sit behind traits
//!
//! ## Usage Examples
//!
//! ### Rendering in memory
//!
//! ```rust
//! use opsheet::{render_csv, render_source, Catalog, ExportColumns, SymbolEntry};
//!
//! let catalog = Catalog::new(vec![
//!     SymbolEntry::new(r"\land", r"/\ or \land", "and, conjunction"),
//! ]);
//!
//! let csv = render_csv(&catalog, ExportColumns::Base).unwrap();
//! assert_eq!(csv, "\"\\land\",\"/\\ or \\land\",\"and, conjunction\"\r\n");
//!
//! let tex = render_source(&catalog, "", 50);
//! assert!(tex.contains(r"/$\backslash$\ or $\backslash$land"));
//! ```
//!
//! ### Full pipeline
//!
//! ```rust,no_run
//! use opsheet::{generate, RenderConfig, Stage};
//!
//! let output = generate(&RenderConfig::default(), &Stage::ALL).unwrap();
//! println!("{:?}", output.artifacts);
//! ```

/// Core rendering modules
pub mod core;

/// Data layer - the symbol catalog
pub mod data;

/// Feature modules - catalog tooling
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core rendering
pub use crate::core::escape::escape_latex;
pub use crate::core::export::{render_csv, ExportRenderer};
pub use crate::core::pipeline::{Pipeline, PipelineOutput, Stage};
pub use crate::core::table::{render_source, TableRenderer};

// Re-export symbol data
pub use data::catalog::{lookup_alias, Catalog, SymbolEntry, SYMBOLS};

// Re-export feature modules
pub use features::audit;

// Re-export utilities
pub use utils::compiler::{Compiler, PdfLatex};
pub use utils::config::{CompilerConfig, ExportColumns, RenderConfig};
pub use utils::error::{RenderError, RenderResult, WorkspaceError};
pub use utils::files::{MemoryWorkspace, StdWorkspace, Workspace};

/// Render the built-in catalog onto the real file system.
///
/// Runs `stages` in order with `pdflatex` configured from `config.compiler`.
/// The CLI's `build`, `table` and `export` commands go through here.
pub fn generate(config: &RenderConfig, stages: &[Stage]) -> RenderResult<PipelineOutput> {
    let compiler = PdfLatex::from_config(&config.compiler);
    Pipeline::new(config)
        .with_stages(stages)
        .run(&Catalog::builtin(), &mut StdWorkspace::new(), &compiler)
}
