//! Catalog audit
//!
//! Reports data-entry problems in a catalog without touching it:
//!
//! - aliases shared by several entries (warning)
//! - entries that exactly repeat an earlier one (warning)
//! - empty or non-ASCII aliases, empty typeset forms (error)
//! - missing descriptions (note)
//!
//! ## Example
//!
//! ```rust
//! use opsheet::audit::{audit_catalog, AuditLevel};
//! use opsheet::Catalog;
//!
//! let report = audit_catalog(&Catalog::builtin());
//! assert!(!report.has_errors());
//! assert!(report.diagnostics.iter().any(|d| d.level == AuditLevel::Warning));
//! ```

use indexmap::IndexMap;
use std::fmt;

use crate::data::catalog::{Catalog, SymbolEntry};

/// Audit severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AuditLevel {
    /// Informational note
    Info,
    /// Warning - suspicious but renderable
    Warning,
    /// Error - the entry breaks a catalog invariant
    Error,
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditLevel::Info => write!(f, "info"),
            AuditLevel::Warning => write!(f, "warning"),
            AuditLevel::Error => write!(f, "error"),
        }
    }
}

/// A single audit finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditDiagnostic {
    pub level: AuditLevel,
    pub message: String,
    /// 1-indexed catalog positions involved
    pub entries: Vec<usize>,
    pub suggestion: Option<String>,
}

impl AuditDiagnostic {
    pub fn new(level: AuditLevel, message: impl Into<String>, entries: Vec<usize>) -> Self {
        Self {
            level,
            message: message.into(),
            entries,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl AuditDiagnostic {
    /// Catalog positions as `#1, #3`, or `-` for catalog-wide findings
    pub fn positions(&self) -> String {
        if self.entries.is_empty() {
            return "-".to_string();
        }
        self.entries
            .iter()
            .map(|n| format!("#{}", n))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AuditDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.level, self.positions(), self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (help: {})", suggestion)?;
        }
        Ok(())
    }
}

/// Audit result with summary
#[derive(Debug, Default)]
pub struct AuditReport {
    /// Number of catalog entries audited
    pub entries_checked: usize,
    pub diagnostics: Vec<AuditDiagnostic>,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diag: AuditDiagnostic) {
        match diag.level {
            AuditLevel::Error => self.errors += 1,
            AuditLevel::Warning => self.warnings += 1,
            AuditLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(plural(self.errors, "error", "errors"));
        }
        if self.warnings > 0 {
            parts.push(plural(self.warnings, "warning", "warnings"));
        }
        if self.infos > 0 {
            parts.push(plural(self.infos, "note", "notes"));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

/// Audit every entry of `catalog`.
pub fn audit_catalog(catalog: &Catalog) -> AuditReport {
    let mut report = AuditReport::new();
    report.entries_checked = catalog.len();

    for (i, entry) in catalog.iter().enumerate() {
        check_entry(i + 1, entry, &mut report);
    }
    check_exact_duplicates(catalog, &mut report);
    check_shared_aliases(catalog, &mut report);

    report
}

fn check_entry(position: usize, entry: &SymbolEntry, report: &mut AuditReport) {
    if entry.typeset_form().trim().is_empty() {
        report.add(AuditDiagnostic::new(
            AuditLevel::Error,
            "empty typeset form",
            vec![position],
        ));
    }

    let alias = entry.plain_text_alias();
    if alias.trim().is_empty() {
        report.add(AuditDiagnostic::new(
            AuditLevel::Error,
            format!("`{}` has no plain-text alias", entry.typeset_form()),
            vec![position],
        ));
    } else if !alias.is_ascii() {
        report.add(
            AuditDiagnostic::new(
                AuditLevel::Error,
                format!("alias `{}` is not ASCII", alias),
                vec![position],
            )
            .with_suggestion("aliases must be typeable on a plain keyboard"),
        );
    }

    if entry.description().trim().is_empty() {
        report.add(AuditDiagnostic::new(
            AuditLevel::Info,
            format!("`{}` has no description", entry.typeset_form()),
            vec![position],
        ));
    }
}

fn check_exact_duplicates(catalog: &Catalog, report: &mut AuditReport) {
    let mut seen: IndexMap<&SymbolEntry, Vec<usize>> = IndexMap::new();
    for (i, entry) in catalog.iter().enumerate() {
        seen.entry(entry).or_default().push(i + 1);
    }

    for (entry, positions) in seen {
        if positions.len() > 1 {
            report.add(AuditDiagnostic::new(
                AuditLevel::Warning,
                format!(
                    "`{}` appears {} times with identical fields",
                    entry.typeset_form(),
                    positions.len()
                ),
                positions,
            ));
        }
    }
}

fn check_shared_aliases(catalog: &Catalog, report: &mut AuditReport) {
    let mut owners: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (i, entry) in catalog.iter().enumerate() {
        for alias in entry.aliases() {
            let slots = owners.entry(alias).or_default();
            if slots.last() != Some(&(i + 1)) {
                slots.push(i + 1);
            }
        }
    }

    for (alias, positions) in owners {
        if positions.len() > 1 {
            let forms: Vec<&str> = positions
                .iter()
                .map(|&p| catalog.entries()[p - 1].typeset_form())
                .collect();
            report.add(
                AuditDiagnostic::new(
                    AuditLevel::Warning,
                    format!("alias `{}` is shared by {}", alias, forms.join(", ")),
                    positions,
                )
                .with_suggestion("readers typing this alias cannot tell the symbols apart"),
            );
        }
    }
}

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Format an audit report for the terminal.
///
/// Findings are grouped by severity, most severe first, each group under a
/// counted heading. Every finding is one line led by the catalog positions
/// it concerns, with an indented `help:` line when it carries a suggestion.
/// The last line counts the entries checked and summarizes the findings.
pub fn format_report(report: &AuditReport, use_color: bool) -> String {
    let paint = |color: &str, text: String| {
        if use_color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text
        }
    };

    let groups = [
        (AuditLevel::Error, "Errors", RED),
        (AuditLevel::Warning, "Warnings", YELLOW),
        (AuditLevel::Info, "Notes", CYAN),
    ];

    let mut output = String::new();
    for (level, heading, color) in groups {
        let found: Vec<&AuditDiagnostic> = report
            .diagnostics
            .iter()
            .filter(|d| d.level == level)
            .collect();
        if found.is_empty() {
            continue;
        }

        let width = found.iter().map(|d| d.positions().len()).max().unwrap_or(0);
        output.push_str(&paint(color, format!("{} ({})", heading, found.len())));
        output.push('\n');
        for diag in found {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                diag.positions(),
                diag.message,
                width = width
            ));
            if let Some(ref suggestion) = diag.suggestion {
                output.push_str(&format!(
                    "  {:<width$}  help: {}\n",
                    "",
                    suggestion,
                    width = width
                ));
            }
        }
        output.push('\n');
    }

    let color = if report.has_errors() {
        RED
    } else if report.warnings > 0 {
        YELLOW
    } else {
        GREEN
    };
    output.push_str(&paint(
        color,
        format!(
            "Checked {}: {}",
            plural(report.entries_checked, "entry", "entries"),
            report.summary()
        ),
    ));

    output
}
