//! Permatrix CLI - inspect and edit a role permission matrix.
//!
//! # Configuration
//!
//! Configuration is loaded from multiple sources with priority:
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`PERMATRIX_*`)
//! 3. Project config (`.permatrix/config.toml` in the project directory)
//! 4. Global config (`~/.permatrix/config.toml`)
//! 5. Default values (lowest priority)
//!
//! # Environment Variables
//!
//! - `PERMATRIX_DEBUG`: Enable debug logging (`true`/`false`)
//! - `PERMATRIX_VERBOSE`: Enable verbose output
//! - `PERMATRIX_ROLE`: Role to evaluate as
//! - `PERMATRIX_SEED`: Seed file (`.json` / `.toml`)

mod render;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use permatrix_auth::{AccessDenied, AccessPolicy, AccessState, Actor, PermissionId, Role};
use permatrix_runtime::{
    AccessEvaluator, ConfigLoader, ConfigResolver, MatrixConfig, MatrixEditor, NavigationGate,
    PermissionRegistry, RouteTable, SeedFormat,
};
use permatrix_types::ErrorCode;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Permatrix CLI - inspect and edit a role permission matrix
#[derive(Parser, Debug)]
#[command(name = "permatrix")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project root directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    project: Option<PathBuf>,

    /// Role to act as (admin, manager, user, viewer)
    #[arg(long, global = true)]
    role: Option<String>,

    /// Seed file to load instead of the builtin matrix
    #[arg(long, global = true, value_name = "PATH")]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print GRANTED if every named permission is held, DENIED otherwise
    Check {
        /// Permission names, e.g. "Access CRM Module"
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        names: Vec<String>,
        /// List every permission the role holds instead
        #[arg(long)]
        all: bool,
    },
    /// Print the visible routes and the landing route
    Routes,
    /// Print the matrix grouped by module
    Matrix {
        /// Only show this module
        #[arg(long)]
        module: Option<String>,
    },
    /// Flip one cell of the matrix (admin only)
    Toggle {
        /// Permission id, e.g. "hr-salary-view"
        id: String,
        /// Column to flip
        column: String,
        /// Save the edited matrix back to the seed file
        #[arg(long)]
        write: bool,
    },
    /// Print the matrix in seed format
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
    /// Report route/permission inconsistencies (non-zero exit on problems)
    Audit,
    /// Print the resolved configuration as TOML
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ExportFormat {
    Json,
    Toml,
}

impl From<ExportFormat> for SeedFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => Self::Json,
            ExportFormat::Toml => Self::Toml,
        }
    }
}

/// CLI-based configuration resolver.
///
/// Applies CLI argument overrides on top of the file/env config loaded
/// by [`ConfigLoader`].
struct CliConfigResolver {
    project_root: PathBuf,
    debug: bool,
    verbose: bool,
    role: Option<String>,
    seed: Option<PathBuf>,
}

impl CliConfigResolver {
    fn from_args(args: &Args) -> Self {
        let project_root = args.project.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to get current directory, using '.'");
                PathBuf::from(".")
            })
        });

        Self {
            project_root,
            debug: args.debug,
            verbose: args.verbose,
            role: args.role.clone(),
            seed: args.seed.clone(),
        }
    }

    fn resolve(&self) -> Result<MatrixConfig> {
        let mut config = ConfigLoader::new()
            .with_project_root(&self.project_root)
            .load()
            .map_err(coded)?;
        self.apply(&mut config);
        Ok(config)
    }
}

impl ConfigResolver for CliConfigResolver {
    fn apply(&self, config: &mut MatrixConfig) {
        if self.debug {
            config.debug = true;
        }
        if self.verbose {
            config.ui.verbose = true;
        }
        if let Some(ref role) = self.role {
            config.actor.role = Some(role.clone());
        }
        if let Some(ref seed) = self.seed {
            config.seed.path = Some(seed.clone());
        }
    }
}

/// Attaches the error code to a library error.
fn coded<E: ErrorCode + std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow!("[{}] {err}", err.code())
}

fn load_registry(config: &MatrixConfig) -> Result<Arc<PermissionRegistry>> {
    let registry = match config.seed.path {
        Some(ref path) => {
            let registry = PermissionRegistry::load(path)
                .map_err(coded)
                .with_context(|| format!("cannot load seed {}", path.display()))?;
            info!(path = %path.display(), records = registry.len(), "Loaded seed");
            registry
        }
        None => {
            debug!("No seed configured, using builtin matrix");
            PermissionRegistry::builtin().map_err(coded)?
        }
    };
    Ok(Arc::new(registry))
}

fn actor_role(config: &MatrixConfig) -> Result<&str> {
    config
        .actor
        .role
        .as_deref()
        .ok_or_else(|| anyhow!("no role configured; pass --role or set PERMATRIX_ROLE"))
}

fn parse_role(text: &str) -> Result<Role> {
    text.parse::<Role>().map_err(|e| coded(AccessDenied::from(e)))
}

fn evaluator(config: &MatrixConfig, registry: &Arc<PermissionRegistry>) -> Result<AccessEvaluator> {
    AccessEvaluator::for_raw_role(Arc::clone(registry), actor_role(config)?).map_err(coded)
}

/// Seed file a `toggle --write` saves to, checked before anything is flipped.
fn write_target(config: &MatrixConfig, write: bool) -> Result<Option<&PathBuf>> {
    if !write {
        return Ok(None);
    }
    config
        .seed
        .path
        .as_ref()
        .map(Some)
        .ok_or_else(|| anyhow!("--write needs a seed file; pass --seed"))
}

fn run(command: Command, config: &MatrixConfig) -> Result<ExitCode> {
    if matches!(command, Command::Config) {
        print!("{}", config.to_toml().context("cannot render config")?);
        return Ok(ExitCode::SUCCESS);
    }

    let registry = load_registry(config)?;
    let table = RouteTable::builtin();

    match command {
        Command::Check { names, all } => {
            let eval = evaluator(config, &registry)?;
            if all {
                for name in eval.granted_names() {
                    println!("{name}");
                }
            } else {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                println!("{}", AccessState::from(eval.check_all(&names)));
            }
        }
        Command::Routes => {
            let eval = evaluator(config, &registry)?;
            print!("{}", render::routes(&NavigationGate::new(&table, &eval)));
        }
        Command::Matrix { module } => {
            let text = render::matrix(&registry, module.as_deref())
                .ok_or_else(|| anyhow!("unknown module '{}'", module.unwrap_or_default()))?;
            print!("{text}");
        }
        Command::Toggle { id, column, write } => {
            let caller = Actor::new(parse_role(actor_role(config)?)?);
            let column = parse_role(&column)?;
            let target = write_target(config, write)?;

            let outcome = MatrixEditor::new(Arc::clone(&registry))
                .toggle_permission(&caller, &PermissionId::new(id), column)
                .map_err(coded)?;

            match target {
                Some(path) if outcome.is_mutation() => {
                    registry.save(path).map_err(coded)?;
                    println!("{outcome}");
                    println!("saved {}", path.display());
                }
                _ => println!("{outcome}"),
            }
        }
        Command::Export { format } => {
            println!("{}", registry.export(format.into()).map_err(coded)?);
        }
        Command::Audit => {
            let problems = render::audit(&registry, &table);
            if !problems.is_empty() {
                for problem in &problems {
                    println!("{problem}");
                }
                return Ok(ExitCode::FAILURE);
            }
            println!(
                "ok: {} records, {} routes",
                registry.len(),
                table.entries().len()
            );
        }
        Command::Config => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let resolver = CliConfigResolver::from_args(&args);
    let config = resolver.resolve().context("Config error")?;

    // Terminal filter: --debug > --verbose > RUST_LOG env > default "warn".
    // Output goes to stderr so exports on stdout stay clean.
    let terminal_filter = if config.debug {
        EnvFilter::new("debug")
    } else if config.ui.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let terminal_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(terminal_layer.with_filter(terminal_filter))
        .init();

    debug!(path = %resolver.project_root.display(), "Project root");

    run(args.command, &config)
}
