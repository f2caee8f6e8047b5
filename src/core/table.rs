//! LaTeX reference table
//!
//! The catalog becomes a sequence of three-column `tabular` blocks, one per
//! page, appended to a preamble that sets up the document and the `\@x`,
//! `\@y` and `\.` cell macros. The source is then handed to the external
//! compiler.

use std::fmt::Write;
use std::path::PathBuf;

use crate::core::escape::escape_latex;
use crate::data::catalog::{Catalog, SymbolEntry};
use crate::utils::compiler::Compiler;
use crate::utils::config::RenderConfig;
use crate::utils::error::{RenderError, RenderResult, WorkspaceError};
use crate::utils::files::Workspace;

pub const TABULAR_BEGIN: &str = r"\begin{tabular}{ |c|c|c }";
pub const TABULAR_END: &str = r"\end{tabular}";
pub const PAGE_BREAK: &str = r"\newpage";
pub const DOCUMENT_END: &str = r"\end{document}";

/// Render one catalog entry as a table row.
///
/// The typeset form is markup and goes in as-is; alias and description
/// are escaped.
pub fn render_row(entry: &SymbolEntry) -> String {
    format!(
        "\\@x{{ \\.{{{}}} }} &\n    \\@y{{ {} }} &\n    {} \\\\\n    ",
        entry.typeset_form(),
        escape_latex(entry.plain_text_alias()),
        escape_latex(entry.description()),
    )
}

/// Build the complete LaTeX source for `catalog`.
///
/// A page break follows every `rows_per_page`-th row unless it is the last
/// row, so no page ends up with an empty table.
pub fn render_source(catalog: &Catalog, preamble: &str, rows_per_page: usize) -> String {
    let rows_per_page = rows_per_page.max(1);
    let mut out = String::with_capacity(preamble.len() + catalog.len() * 96);

    out.push_str(preamble);
    let _ = writeln!(out, "{}", TABULAR_BEGIN);

    for (i, entry) in catalog.iter().enumerate() {
        let row = i + 1;
        let _ = writeln!(out, "{}", render_row(entry));

        if row % rows_per_page == 0 && row < catalog.len() {
            let _ = writeln!(out, "{}", TABULAR_END);
            let _ = writeln!(out, "{}", PAGE_BREAK);
            let _ = writeln!(out, "{}", TABULAR_BEGIN);
        }
    }

    let _ = writeln!(out, "{}", TABULAR_END);
    let _ = writeln!(out, "{}", DOCUMENT_END);
    out
}

/// Count `tabular` blocks in generated source
pub fn count_tables(source: &str) -> usize {
    source.lines().filter(|l| *l == TABULAR_BEGIN).count()
}

/// Generates the `.tex` source and compiles it into a PDF.
pub struct TableRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> TableRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Write the source, clear the stale PDF, compile.
    ///
    /// Returns the path of the compiled document. Nothing is written when
    /// the preamble is missing.
    pub fn generate(
        &self,
        catalog: &Catalog,
        workspace: &mut dyn Workspace,
        compiler: &dyn Compiler,
    ) -> RenderResult<PathBuf> {
        let preamble_path = self.config.preamble_path();
        let preamble = workspace.read_file(&preamble_path).map_err(|e| match e {
            WorkspaceError::NotFound(path) => RenderError::PreambleNotFound { path },
            other => other.into(),
        })?;

        let source = render_source(catalog, &preamble, self.config.rows_per_page);
        let tex_path = self.config.tex_path();
        workspace.write_file(&tex_path, &source)?;
        log::info!(
            "wrote {} ({} entries, {} pages)",
            tex_path.display(),
            catalog.len(),
            count_tables(&source)
        );

        let pdf_path = self.config.pdf_path();
        if workspace.remove_file(&pdf_path)? {
            log::debug!("removed stale {}", pdf_path.display());
        }

        // the compiler runs inside output_dir, so it gets the bare file name
        let source_name = tex_path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| tex_path.clone());
        let code = compiler.compile(&source_name, &self.config.output_dir)?;

        if code == Some(0) {
            log::info!("generated {}", pdf_path.display());
            Ok(pdf_path)
        } else {
            let err = RenderError::CompilerFailed {
                program: compiler.program().to_string(),
                code,
                log: self.config.log_path(),
            };
            log::warn!("{}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbered(n: usize) -> Catalog {
        (0..n)
            .map(|i| SymbolEntry::new(format!("s{}", i), format!("a{}", i), ""))
            .collect()
    }

    #[test]
    fn test_render_row_layout() {
        let entry = SymbolEntry::new(r"\land", r"/\ or \land", "and, conjunction");
        assert_eq!(
            render_row(&entry),
            "\\@x{ \\.{\\land} } &\n    \\@y{ /$\\backslash$\\ or $\\backslash$land } &\n    and, conjunction \\\\\n    "
        );
    }

    #[test]
    fn test_typeset_form_not_escaped() {
        let entry = SymbolEntry::new(r"[A]_{ v}", "[A]_v", "action operator, 'square A sub v'");
        let row = render_row(&entry);
        assert!(row.contains(r"\.{[A]_{ v}}"));
        assert!(row.contains(r"\@y{ [A]\_v }"));
    }

    #[test]
    fn test_description_escaped() {
        let entry = SymbolEntry::new(r"\models", "|=", "satisfies (a temporal formula)");
        let row = render_row(&entry);
        assert!(row.contains(r"satisfies {\char40}a temporal formula{\char41} \\"));
    }

    #[test]
    fn test_source_frame() {
        let source = render_source(&numbered(2), "PREAMBLE\n", 50);
        assert!(source.starts_with("PREAMBLE\n\\begin{tabular}{ |c|c|c }\n"));
        assert!(source.ends_with("\\end{tabular}\n\\end{document}\n"));
        assert_eq!(count_tables(&source), 1);
        assert!(!source.contains(PAGE_BREAK));
    }

    #[test]
    fn test_pagination_101_entries() {
        let source = render_source(&numbered(101), "", 50);
        assert_eq!(count_tables(&source), 3);
        assert_eq!(source.matches(PAGE_BREAK).count(), 2);

        // the first break sits right after the 50th row
        let first_break = source.find(PAGE_BREAK).unwrap();
        assert!(source[..first_break].contains(r"\.{s49}"));
        assert!(!source[..first_break].contains(r"\.{s50}"));
    }

    #[test]
    fn test_pagination_exact_multiple() {
        let source = render_source(&numbered(100), "", 50);
        assert_eq!(count_tables(&source), 2);
        assert_eq!(source.matches(TABULAR_END).count(), 2);
    }

    #[test]
    fn test_pagination_small_pages() {
        assert_eq!(count_tables(&render_source(&numbered(7), "", 3)), 3);
        assert_eq!(count_tables(&render_source(&numbered(0), "", 3)), 1);
    }

    #[test]
    fn test_rows_keep_catalog_order() {
        let source = render_source(&numbered(60), "", 50);
        let positions: Vec<usize> = (0..60)
            .map(|i| source.find(&format!(r"\.{{s{}}}", i)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
