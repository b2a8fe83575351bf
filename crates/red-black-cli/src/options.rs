use clap::Parser;
use tracing::level_filters::LevelFilter;

/// Interactive red-black tree shell.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Options {
    /// Default tracing level; `RUST_LOG` directives take precedence.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Keys inserted before the first prompt.
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    pub preload: Vec<i64>,

    /// Do not print the menu or input prompts (for scripted use).
    #[arg(long)]
    pub no_menu: bool,

    /// Check every red-black invariant after each insert and delete.
    #[arg(long)]
    pub validate: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::WARN,
            preload: Vec::new(),
            no_menu: false,
            validate: false,
        }
    }
}
