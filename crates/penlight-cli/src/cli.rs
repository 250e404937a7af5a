use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use penlight_core::TextSize;

/// Base URL used for share links when none is given.
pub const DEFAULT_BASE_URL: &str = "https://penlight-app.github.io/penlight/";

#[derive(Parser)]
#[command(name = "penlight")]
#[command(about = "Virtual glow stick: configure, save, and share your display")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the local data directory
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current display settings and presets
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update display settings; every change is persisted immediately
    Set {
        /// Panel color as #rrggbb
        #[arg(long, value_name = "COLOR")]
        color: Option<String>,
        /// Label text
        #[arg(long, value_name = "TEXT")]
        text: Option<String>,
        /// Font identifier (see `penlight fonts`)
        #[arg(long, value_name = "FONT")]
        font: Option<String>,
        /// Label size
        #[arg(long, value_enum, value_name = "SIZE")]
        size: Option<SizeArg>,
        /// Vertical (tategaki) label
        #[arg(long, conflicts_with = "horizontal")]
        vertical: bool,
        /// Horizontal label
        #[arg(long)]
        horizontal: bool,
    },
    /// Print a shareable URL carrying the current settings and presets
    Share {
        /// Base URL the query string is appended to
        #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
    /// Apply settings and presets from a share URL or raw query string
    Apply {
        /// Share URL or query string
        url: String,
    },
    /// Manage preset slots
    Preset {
        #[command(subcommand)]
        command: PresetCommands,
    },
    /// List the available fonts in catalog order
    Fonts,
    /// Show the template color palette
    Palette,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum PresetCommands {
    /// Save the current settings into a slot
    Save {
        /// Slot number (1-5)
        slot: usize,
    },
    /// Load a slot into the current settings
    Load {
        /// Slot number (1-5)
        slot: usize,
    },
    /// List all preset slots
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SizeArg {
    Small,
    Medium,
    Large,
}

impl From<SizeArg> for TextSize {
    fn from(size: SizeArg) -> Self {
        match size {
            SizeArg::Small => Self::Small,
            SizeArg::Medium => Self::Medium,
            SizeArg::Large => Self::Large,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
