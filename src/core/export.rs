//! CSV export of the catalog
//!
//! One record per entry, in catalog order, every field quoted. No LaTeX
//! escaping happens here; CSV quoting alone keeps commas, quotes and
//! backslashes in their fields.

use std::path::PathBuf;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::data::catalog::{Catalog, SymbolEntry};
use crate::utils::config::{ExportColumns, RenderConfig};
use crate::utils::error::{RenderError, RenderResult};
use crate::utils::files::Workspace;

/// Fields of one entry for the chosen column layout
pub fn record(entry: &SymbolEntry, columns: ExportColumns) -> Vec<&str> {
    let base = [
        entry.typeset_form(),
        entry.plain_text_alias(),
        entry.description(),
    ];
    match columns {
        ExportColumns::Base => base.to_vec(),
        ExportColumns::Canonical => {
            let mut fields = Vec::with_capacity(4);
            fields.push(entry.canonical_form());
            fields.extend(base);
            fields
        }
    }
}

/// Serialize `catalog` as CSV text.
pub fn render_csv(catalog: &Catalog, columns: ExportColumns) -> RenderResult<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    for entry in catalog {
        writer.write_record(record(entry, columns))?;
    }

    let bytes = writer.into_inner().map_err(|e| RenderError::Export {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| RenderError::Export {
        message: e.to_string(),
    })
}

/// Writes the `.csv` export.
pub struct ExportRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> ExportRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Render and write the export, replacing any previous file.
    pub fn generate(
        &self,
        catalog: &Catalog,
        workspace: &mut dyn Workspace,
    ) -> RenderResult<PathBuf> {
        let text = render_csv(catalog, self.config.columns)?;
        let path = self.config.csv_path();
        workspace.write_file(&path, &text)?;
        log::info!("generated {} ({} rows)", path.display(), catalog.len());
        Ok(path)
    }
}
