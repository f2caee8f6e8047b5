//! Output and compiler configuration
//!
//! ## Example
//!
//! ```rust
//! use opsheet::utils::config::{ExportColumns, RenderConfig};
//!
//! let config = RenderConfig::from_toml_str(r#"
//!     output_dir = "build"
//!     columns = "canonical"
//!
//!     [compiler]
//!     program = "lualatex"
//! "#).unwrap();
//!
//! assert_eq!(config.columns, ExportColumns::Canonical);
//! assert_eq!(config.rows_per_page, 50);
//! assert!(config.csv_path().ends_with("all-operators.csv"));
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::utils::error::{RenderError, RenderResult};

/// Default file stem for every artifact
pub const DEFAULT_BASENAME: &str = "all-operators";

/// Rows per tabular before a page break
pub const DEFAULT_ROWS_PER_PAGE: usize = 50;

/// Which columns the CSV export carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportColumns {
    /// typeset form, alias, description
    #[default]
    Base,
    /// canonical form, typeset form, alias, description
    Canonical,
}

/// External compiler settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    pub program: String,
    pub args: Vec<String>,
    /// Discard the compiler's stdout
    pub quiet: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "pdflatex".to_string(),
            args: vec!["-interaction=nonstopmode".to_string()],
            quiet: false,
        }
    }
}

/// Where artifacts go and how they are produced
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub output_dir: PathBuf,
    pub basename: String,
    /// Preamble fragment; `<basename>-preamble.tex` in the working directory
    /// when unset, independent of `output_dir`
    pub preamble: Option<PathBuf>,
    pub rows_per_page: usize,
    pub columns: ExportColumns,
    pub compiler: CompilerConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            basename: DEFAULT_BASENAME.to_string(),
            preamble: None,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            columns: ExportColumns::Base,
            compiler: CompilerConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> RenderResult<Self> {
        let config: RenderConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and parse a TOML file from disk.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RenderError::io(path, e.to_string()))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.rows_per_page == 0 {
            return Err(RenderError::invalid_config("rows_per_page must be at least 1"));
        }
        if self.basename.trim().is_empty() {
            return Err(RenderError::invalid_config("basename must not be empty"));
        }
        if self.compiler.program.trim().is_empty() {
            return Err(RenderError::invalid_config("compiler program must not be empty"));
        }
        Ok(())
    }

    fn artifact(&self, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.basename, extension))
    }

    /// Preamble fragment to read. Relative paths resolve against the
    /// working directory, not `output_dir`.
    pub fn preamble_path(&self) -> PathBuf {
        match &self.preamble {
            Some(p) => p.clone(),
            None => PathBuf::from(format!("{}-preamble.tex", self.basename)),
        }
    }

    /// Generated LaTeX source
    pub fn tex_path(&self) -> PathBuf {
        self.artifact("tex")
    }

    /// Compiled document, written by the compiler
    pub fn pdf_path(&self) -> PathBuf {
        self.artifact("pdf")
    }

    /// Compiler log, written by the compiler
    pub fn log_path(&self) -> PathBuf {
        self.artifact("log")
    }

    pub fn csv_path(&self) -> PathBuf {
        self.artifact("csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = RenderConfig::default();
        assert_eq!(config.tex_path(), PathBuf::from("./all-operators.tex"));
        assert_eq!(config.pdf_path(), PathBuf::from("./all-operators.pdf"));
        assert_eq!(config.log_path(), PathBuf::from("./all-operators.log"));
        assert_eq!(config.csv_path(), PathBuf::from("./all-operators.csv"));
        assert_eq!(
            config.preamble_path(),
            PathBuf::from("all-operators-preamble.tex")
        );
    }

    #[test]
    fn test_preamble_ignores_output_dir() {
        let config = RenderConfig {
            output_dir: PathBuf::from("build"),
            ..Default::default()
        };
        assert_eq!(config.tex_path(), PathBuf::from("build/all-operators.tex"));
        assert_eq!(
            config.preamble_path(),
            PathBuf::from("all-operators-preamble.tex")
        );

        let renamed = RenderConfig {
            output_dir: PathBuf::from("build"),
            basename: "ops".to_string(),
            ..Default::default()
        };
        assert_eq!(renamed.preamble_path(), PathBuf::from("ops-preamble.tex"));
    }

    #[test]
    fn test_explicit_preamble() {
        let config = RenderConfig {
            preamble: Some(PathBuf::from("tex/head.tex")),
            ..Default::default()
        };
        assert_eq!(config.preamble_path(), PathBuf::from("tex/head.tex"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = RenderConfig::from_toml_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_partial_compiler_table() {
        let config = RenderConfig::from_toml_str(
            r#"
            basename = "ops"
            rows_per_page = 40

            [compiler]
            quiet = true
            "#,
        )
        .unwrap();
        assert_eq!(config.basename, "ops");
        assert_eq!(config.rows_per_page, 40);
        assert_eq!(config.compiler.program, "pdflatex");
        assert!(config.compiler.quiet);
        assert_eq!(config.tex_path(), PathBuf::from("./ops.tex"));
    }

    #[test]
    fn test_rejects_zero_rows_per_page() {
        let err = RenderConfig::from_toml_str("rows_per_page = 0").unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_unknown_columns() {
        let err = RenderConfig::from_toml_str(r#"columns = "wide""#).unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig { .. }));
    }
}
