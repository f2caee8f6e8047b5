//! Feature modules - catalog tooling beyond rendering
//!
//! - Catalog audit (shared aliases, repeated entries, missing descriptions)

pub mod audit;

pub use audit::{audit_catalog, format_report, AuditDiagnostic, AuditLevel, AuditReport};
