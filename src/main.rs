//! navmenu CLI - render and validate menu definition files
//!
//! Usage: navmenu <COMMAND>
//!
//! Commands:
//!   render  Render a menu definition to HTML
//!   check   Validate a menu definition

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use navmenu::{DefinitionWarning, MenuDefinition};

/// navmenu - hierarchical HTML navigation menus
#[derive(Parser, Debug)]
#[command(name = "navmenu")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a menu definition to HTML on stdout
    Render {
        /// Definition file (.toml, .yaml, .yml or .json)
        file: PathBuf,

        /// Mark an item and its ancestors active (repeatable)
        #[arg(long)]
        active: Vec<String>,

        /// Only render the subitems of active items
        #[arg(long)]
        no_subitems: bool,

        /// Render icons without labels
        #[arg(long)]
        only_icons: bool,

        /// Icon position: left or right
        #[arg(long)]
        icon_position: Option<String>,
    },

    /// Validate a menu definition and report unknown keys
    Check {
        /// Definition file (.toml, .yaml, .yml or .json)
        file: PathBuf,

        /// Output a JSON report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            file,
            active,
            no_subitems,
            only_icons,
            icon_position,
        } => cmd_render(&file, &active, no_subitems, only_icons, icon_position),
        Commands::Check { file, json } => cmd_check(&file, json),
    }
}

/// `NAVMENU_LOG` wins over `-v`; logs go to stderr so stdout stays markup.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("NAVMENU_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn load(file: &Path) -> Result<(MenuDefinition, Vec<DefinitionWarning>)> {
    let (definition, warnings) = MenuDefinition::load_with_warnings(file)
        .with_context(|| format!("failed to load menu definition {}", file.display()))?;
    Ok((definition.with_env_overrides(), warnings))
}

fn cmd_render(
    file: &Path,
    active: &[String],
    no_subitems: bool,
    only_icons: bool,
    icon_position: Option<String>,
) -> Result<()> {
    let (definition, warnings) = load(file)?;
    for warning in &warnings {
        tracing::warn!(key = %warning.key, line = ?warning.line, "ignoring unknown key");
    }

    let mut menu = definition.build();
    if no_subitems {
        menu.subitems(false);
    }
    if only_icons {
        menu.only_icons(true);
    }
    if let Some(position) = icon_position {
        menu.icon_position(position);
    }
    for id in active {
        menu.active(id);
    }

    let html = menu
        .render()
        .with_context(|| format!("failed to render menu '{}'", menu.name()))?;
    println!("{html}");
    Ok(())
}

fn cmd_check(file: &Path, json: bool) -> Result<()> {
    let (definition, warnings) = load(file)?;
    let mut menu = definition.build();
    let items = menu.all().len();
    let tree = menu.create();

    if json {
        let output = serde_json::json!({
            "event": "check",
            "file": file.display().to_string(),
            "menu": menu.name(),
            "status": if tree.is_ok() { "success" } else { "error" },
            "items": items,
            "roots": tree.as_ref().map(|t| t.roots().len()).unwrap_or(0),
            "warnings": warnings,
            "error": tree.as_ref().err().map(ToString::to_string),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Menu '{}' ({})", menu.name(), file.display());
        for warning in &warnings {
            let line = warning
                .line
                .map(|line| format!(" (line {line})"))
                .unwrap_or_default();
            match &warning.suggestion {
                Some(suggestion) => println!(
                    "  ⚠ Unknown key '{}'{line}, did you mean '{suggestion}'?",
                    warning.key
                ),
                None => println!("  ⚠ Unknown key '{}'{line}", warning.key),
            }
        }
        if let Ok(tree) = &tree {
            println!(
                "  ✓ {} items, {} top-level entries",
                items,
                tree.roots().len()
            );
        }
    }

    tree.map(|_| ())
        .with_context(|| format!("menu definition {} is invalid", file.display()))
}
