//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sphinx xmlpipe2 search feed generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content collection file (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: sphinxfeed.toml)
    #[arg(short = 'C', long, default_value = "sphinxfeed.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the search feed into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build records without writing and report identifier collisions
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the xmlpipe2 schema preamble
    Schema,
}

/// Shared arguments for Build and Check commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Override site URL.
    ///
    /// Document identifiers hash the absolute URL, so the feed indexed in
    /// production should be built with the production URL:
    ///   sphinxfeed build --site-url "https://example.com"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable search feed generation
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub search: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sphinxfeed").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_build_args() {
        let cli = parse(&["build", "-U", "https://example.com", "--search", "false", "-V"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.site_url.as_deref(), Some("https://example.com"));
        assert_eq!(build_args.search, Some(false));
        assert!(build_args.verbose);
    }

    #[test]
    fn test_bare_search_flag_enables() {
        let cli = parse(&["check", "--search"]);
        let Commands::Check { build_args } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(build_args.search, Some(true));
    }

    #[test]
    fn test_global_options() {
        let cli = parse(&["-C", "site/sphinxfeed.toml", "-o", "public", "schema", "--color", "never"]);
        assert_eq!(cli.config, PathBuf::from("site/sphinxfeed.toml"));
        assert_eq!(cli.output, Some(PathBuf::from("public")));
        assert!(matches!(cli.color, ColorChoice::Never));
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn test_default_config_name() {
        let cli = parse(&["build"]);
        assert_eq!(cli.config, PathBuf::from("sphinxfeed.toml"));
        assert!(cli.content.is_none());
    }
}
