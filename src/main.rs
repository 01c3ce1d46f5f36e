//! CLI entry point for lstree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use lstree::{RenderConfig, RenderMode, render_listing};
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lstree")]
#[command(about = "List directory contents as grouped blocks or an indented tree")]
#[command(version)]
// -h selects human-readable sizes, so help is only reachable as --help
#[command(disable_help_flag = true)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Use a long listing format
    #[arg(short = 'l')]
    long: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't')]
    time_sort: bool,

    /// With -l, print human readable sizes (e.g. 2.0K, 15M)
    #[arg(short = 'h', long = "human-readable")]
    human_readable: bool,

    /// Print entries inline as an indented tree instead of one block per directory
    #[arg(long = "tree")]
    tree: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            show_details: self.long,
            recursive: self.recursive,
            sort_by_time: self.time_sort,
            human_readable_sizes: self.human_readable,
            mode: if self.tree {
                RenderMode::Tree
            } else {
                RenderMode::Grouped
            },
            use_color: should_use_color(self.color),
        }
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the default `warn` level.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let config = args.render_config();
    let choice = if config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let stdout = StandardStream::stdout(choice);

    if let Err(e) = render_listing(&args.path, &config, stdout.lock()) {
        eprintln!("lstree: {}", e);
        process::exit(1);
    }
}
