//! Utility modules
//!
//! This module contains the side-effect adapters and shared types:
//! - Error types and result types
//! - Configuration
//! - File-system access
//! - External compiler invocation

pub mod compiler;
pub mod config;
pub mod error;
pub mod files;

// Re-export commonly used items
pub use compiler::{Compiler, PdfLatex};
pub use config::{CompilerConfig, ExportColumns, RenderConfig};
pub use error::{RenderError, RenderResult, WorkspaceError};
pub use files::{MemoryWorkspace, StdWorkspace, Workspace};
