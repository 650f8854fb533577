//! Command-line surface: `use`, `list` and `where`.

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use console::Emoji;

use crate::app::Themepark;
use crate::config::{Config, DIR_ENV};
use crate::error::Error;

static SWITCHED: Emoji<'_, '_> = Emoji("✅ ", "");

/// Apply a color theme to terminal and editor configuration files
#[derive(Debug, Parser)]
#[command(name = "themepark", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory receiving rendered files [default: ~/.themepark]
    #[arg(short, long, global = true, env = DIR_ENV, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Fail when a template uses a role the theme does not define
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a theme into every target's configuration file
    Use {
        /// Theme name, as shown by `themepark list`
        theme: String,
    },
    /// List available themes
    List,
    /// Print the output file path for a target
    Where {
        /// Target name (ghostty, nvim)
        target: String,
    },
}

/// Runs a parsed command, writing its normal output to `out`.
///
/// Errors are returned as [`anyhow::Error`] wrapping [`crate::Error`].
/// `list` only reads the bundled themes and never resolves the output
/// directory.
pub fn execute(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let app = || -> Result<Themepark, Error> {
        let config = Config::resolve(cli.dir.as_deref(), cli.strict)?;
        Ok(Themepark::bundled(config))
    };

    match &cli.command {
        Command::Use { theme } => {
            app()?.apply(theme)?;
            writeln!(out, "{}Theme switched!", SWITCHED)?;
        }
        Command::List => {
            writeln!(out, "Available themes:")?;
            for name in Themepark::bundled_theme_names() {
                writeln!(out, "- {}", name)?;
            }
        }
        Command::Where { target } => {
            let path = app()?.locate(target)?;
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}
