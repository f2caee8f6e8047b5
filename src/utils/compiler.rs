//! External typesetting compiler
//!
//! The table stage hands its generated source to a `Compiler`. The real
//! implementation shells out to `pdflatex`; tests substitute a scripted one.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::utils::config::CompilerConfig;
use crate::utils::error::{RenderError, RenderResult};

/// Runs a typesetting compiler over one source file.
pub trait Compiler {
    /// Executable name, used in messages
    fn program(&self) -> &str;

    /// Compile `source` with `working_dir` as the current directory.
    ///
    /// Returns the exit code, or `None` when the process was killed by a
    /// signal. Failing to start the process at all is an error.
    fn compile(&self, source: &Path, working_dir: &Path) -> RenderResult<Option<i32>>;
}

/// `pdflatex` (or a compatible engine) run as a subprocess
#[derive(Debug, Clone)]
pub struct PdfLatex {
    program: String,
    args: Vec<String>,
    quiet: bool,
}

impl PdfLatex {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            quiet: false,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Discard the compiler's stdout
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn from_config(config: &CompilerConfig) -> Self {
        Self::new(config.program.clone())
            .with_args(config.args.clone())
            .quiet(config.quiet)
    }
}

impl Default for PdfLatex {
    fn default() -> Self {
        Self::from_config(&CompilerConfig::default())
    }
}

impl Compiler for PdfLatex {
    fn program(&self) -> &str {
        &self.program
    }

    fn compile(&self, source: &Path, working_dir: &Path) -> RenderResult<Option<i32>> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(source);
        if !working_dir.as_os_str().is_empty() {
            cmd.current_dir(working_dir);
        }
        if self.quiet {
            cmd.stdout(Stdio::null());
        }

        log::debug!(
            "running {} {} {} in {}",
            self.program,
            self.args.join(" "),
            source.display(),
            working_dir.display()
        );

        let status = cmd
            .status()
            .map_err(|e| RenderError::CompilerUnavailable {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        Ok(status.code())
    }
}
