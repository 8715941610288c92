use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cipherteams", about = "End-to-end encrypted team chat workspace (CLI + TUI)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start TUI shell
    Run,
    /// Print the chat list, optionally filtered
    Chats {
        /// Case-insensitive match on chat name or last message preview
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print the messages of one chat
    Messages {
        /// Chat identifier, e.g. c1
        chat_id: String,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}
