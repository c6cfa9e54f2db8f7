//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Post-page layout and scroll-spy table of contents for static blogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path [default: folio.toml, searched upward]
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented default folio.toml
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Render a post bundle into an HTML page
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Print the table of contents of a post bundle
    #[command(visible_alias = "o")]
    Outline {
        #[command(flatten)]
        args: OutlineArgs,
    },

    /// Replay a scroll trace and print the active heading per step
    #[command(visible_alias = "s")]
    Spy {
        #[command(flatten)]
        args: SpyArgs,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Post bundle (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub bundle: PathBuf,

    /// Write the page to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Heading id to pre-select in the table of contents
    #[arg(short, long)]
    pub active: Option<String>,
}

/// Outline command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct OutlineArgs {
    /// Post bundle (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub bundle: PathBuf,

    /// Print the outline forest as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Heading id whose path is marked
    #[arg(short, long)]
    pub active: Option<String>,
}

/// Spy command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SpyArgs {
    /// Scroll trace (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub trace: PathBuf,

    /// Override `[toc] root_margin`, e.g. "0px 0px -40% 0px"
    #[arg(short, long, allow_hyphen_values = true)]
    pub root_margin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from([
            "folio",
            "render",
            "post.json",
            "-o",
            "out.html",
            "--active",
            "intro",
        ]);
        let Commands::Render { args } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.bundle, PathBuf::from("post.json"));
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert_eq!(args.active.as_deref(), Some("intro"));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_parse_spy_negative_margin() {
        let cli = Cli::parse_from(["folio", "spy", "trace.json", "--root-margin", "-10% 0px"]);
        let Commands::Spy { args } = cli.command else {
            panic!("expected spy");
        };
        assert_eq!(args.root_margin.as_deref(), Some("-10% 0px"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "folio",
            "outline",
            "post.json",
            "--json",
            "-v",
            "-C",
            "site.toml",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert!(matches!(&cli.command, Commands::Outline { args } if args.json));
    }
}
