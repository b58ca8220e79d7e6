//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the itemcat binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Digital Item Catalog command-line client.
#[derive(Parser, Debug)]
#[command(name = "itemcat", about = "Browse the item catalog and send feedback", version)]
pub struct Cli {
    /// Output results as JSON instead of rendered pages.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Base URL of the catalog API.
    #[arg(
        long,
        global = true,
        env = "ITEMCAT_API_URL",
        default_value = "http://localhost:8000"
    )]
    pub api_url: String,

    /// Settings file holding the theme preference.
    #[arg(long, global = true, env = "ITEMCAT_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List items with optional search and paging.
    List {
        /// Case-insensitive search over name and short description.
        #[arg(long, short)]
        search: Option<String>,

        /// Page number (1-indexed, clamped into range).
        #[arg(long)]
        page: Option<usize>,
    },

    /// Show a single item.
    Get {
        /// The item id.
        id: String,
    },

    /// Send the feedback form for an item.
    Submit {
        /// The item id.
        id: String,

        /// Your name (at least 2 characters).
        #[arg(long, default_value = "")]
        name: String,

        /// Your email address.
        #[arg(long, default_value = "")]
        email: String,

        /// The message (at least 10 characters).
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Show or change the colour theme.
    Theme {
        /// What to do with the theme.
        #[arg(default_value = "show")]
        action: ThemeAction,
    },

    /// Interactive session: search, page, open items and submit feedback.
    Browse,
}

/// Theme subcommand actions.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the current theme.
    Show,
    /// Switch between light and dark.
    Toggle,
    /// Use the light theme.
    Light,
    /// Use the dark theme.
    Dark,
}
