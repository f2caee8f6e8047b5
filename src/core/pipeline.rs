//! Stage sequencing
//!
//! Runs the table stage, then the export stage, against one catalog. The
//! first failure stops everything after it.

use std::fmt;
use std::path::PathBuf;

use crate::core::export::ExportRenderer;
use crate::core::table::TableRenderer;
use crate::data::catalog::Catalog;
use crate::utils::compiler::Compiler;
use crate::utils::config::RenderConfig;
use crate::utils::error::RenderResult;
use crate::utils::files::Workspace;

/// One renderer run by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// LaTeX source + compiled PDF
    Table,
    /// CSV export
    Export,
}

impl Stage {
    /// Both stages in their fixed order
    pub const ALL: [Stage; 2] = [Stage::Table, Stage::Export];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Table => write!(f, "table"),
            Stage::Export => write!(f, "export"),
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    pub artifacts: Vec<(Stage, PathBuf)>,
}

impl PipelineOutput {
    pub fn artifact(&self, stage: Stage) -> Option<&PathBuf> {
        self.artifacts
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, p)| p)
    }
}

/// Sequential renderer driver
pub struct Pipeline<'a> {
    config: &'a RenderConfig,
    stages: Vec<Stage>,
}

impl<'a> Pipeline<'a> {
    /// A pipeline running every stage
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            stages: Stage::ALL.to_vec(),
        }
    }

    /// Restrict to `stages`; they still run table-before-export.
    pub fn with_stages(mut self, stages: &[Stage]) -> Self {
        self.stages = Stage::ALL
            .iter()
            .copied()
            .filter(|s| stages.contains(s))
            .collect();
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn run(
        &self,
        catalog: &Catalog,
        workspace: &mut dyn Workspace,
        compiler: &dyn Compiler,
    ) -> RenderResult<PipelineOutput> {
        self.config.validate()?;

        let mut output = PipelineOutput::default();
        for &stage in &self.stages {
            log::debug!("running {} stage", stage);
            let path = match stage {
                Stage::Table => {
                    TableRenderer::new(self.config).generate(catalog, workspace, compiler)?
                }
                Stage::Export => ExportRenderer::new(self.config).generate(catalog, workspace)?,
            };
            output.artifacts.push((stage, path));
        }
        Ok(output)
    }
}
