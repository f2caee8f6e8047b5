//! opsheet CLI - TLA+ operator reference sheet generator

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use opsheet::{
    audit::{audit_catalog, format_report},
    generate, lookup_alias, Catalog, ExportColumns, RenderConfig, RenderError, Stage,
};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "opsheet")]
#[command(version)]
#[command(about = "Generate the TLA+ operator reference table (PDF) and CSV export", long_about = None)]
struct Cli {
    /// Subcommand to run (defaults to `build`)
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for every generated file
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// File stem for generated files
    #[arg(long, global = true)]
    basename: Option<String>,

    /// Preamble fragment prepended to the LaTeX source
    #[arg(long, global = true)]
    preamble: Option<PathBuf>,

    /// Typesetting compiler executable
    #[arg(long, global = true)]
    compiler: Option<String>,

    /// Table rows per page
    #[arg(long, global = true)]
    rows_per_page: Option<usize>,

    /// CSV column layout
    #[arg(long, value_enum, global = true)]
    columns: Option<Columns>,

    /// Quiet mode: suppress progress output and compiler chatter
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Generate the PDF table and the CSV export (default action)
    Build,

    /// Generate only the PDF table
    Table,

    /// Generate only the CSV export
    Export,

    /// Audit the catalog for shared aliases and repeated entries
    Check {
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show the entries that list an ASCII alias
    Lookup {
        /// Alias alternative, e.g. `/\` or `[]`
        alias: String,
    },

    /// Show version and catalog info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Columns {
    /// typeset form, alias, description
    Base,
    /// canonical form first, then the base columns
    Canonical,
}

#[cfg(feature = "cli")]
impl From<Columns> for ExportColumns {
    fn from(c: Columns) -> Self {
        match c {
            Columns::Base => ExportColumns::Base,
            Columns::Canonical => ExportColumns::Canonical,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let quiet = cli.quiet;

    if let Err(err) = run(cli) {
        if !quiet {
            eprintln!("✗ {}", err);
        }
        std::process::exit(err.exit_code());
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<(), RenderError> {
    let catalog = Catalog::builtin();

    match cli.command {
        Some(Commands::Check { no_color }) => {
            let report = audit_catalog(&catalog);
            println!("{}", format_report(&report, !no_color));
            if report.has_errors() {
                return Err(RenderError::AuditFailed {
                    errors: report.errors,
                });
            }
            Ok(())
        }

        Some(Commands::Lookup { ref alias }) => {
            let found = lookup_alias(alias);
            if found.is_empty() {
                return Err(RenderError::UnknownAlias {
                    alias: alias.clone(),
                });
            }
            for entry in found {
                println!("{}", entry);
            }
            Ok(())
        }

        Some(Commands::Info) => {
            println!("opsheet - TLA+ operator reference sheet generator");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Catalog: {} symbols", catalog.len());
            println!();
            println!("Outputs:");
            println!("  ✓ <basename>.tex / .pdf (via pdflatex)");
            println!("  ✓ <basename>.csv");
            Ok(())
        }

        Some(Commands::Table) => build(&cli, catalog.len(), &[Stage::Table]),
        Some(Commands::Export) => build(&cli, catalog.len(), &[Stage::Export]),
        Some(Commands::Build) | None => build(&cli, catalog.len(), &Stage::ALL),
    }
}

/// Merge the config file (if any) with command-line overrides
#[cfg(feature = "cli")]
fn resolve_config(cli: &Cli) -> Result<RenderConfig, RenderError> {
    let mut config = match cli.config {
        Some(ref path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    if let Some(ref dir) = cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(ref name) = cli.basename {
        config.basename = name.clone();
    }
    if let Some(ref preamble) = cli.preamble {
        config.preamble = Some(preamble.clone());
    }
    if let Some(ref program) = cli.compiler {
        config.compiler.program = program.clone();
    }
    if let Some(rows) = cli.rows_per_page {
        config.rows_per_page = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns.into();
    }
    if cli.quiet {
        config.compiler.quiet = true;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(feature = "cli")]
fn build(cli: &Cli, symbols: usize, stages: &[Stage]) -> Result<(), RenderError> {
    let config = resolve_config(cli)?;

    eprintln_unless(cli.quiet, &format!("{} symbols", symbols));

    let output = generate(&config, stages)?;

    for (_, path) in &output.artifacts {
        eprintln_unless(cli.quiet, &format!("✓ Generated {}", path.display()));
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn eprintln_unless(quiet: bool, message: &str) {
    if !quiet {
        eprintln!("{}", message);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install opsheet --features cli");
    eprintln!("  opsheet [OPTIONS] [COMMAND]");
}
