use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flash", version, about = "Flash notes from the terminal")]
pub struct Cli {
    /// Base URL of the notes service.
    #[arg(long, global = true, env = "FLASH_API_URL")]
    pub api_url: Option<String>,

    /// Directory holding persisted credential state.
    #[arg(long, global = true, env = "FLASH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version.
    Version,

    /// Create an account and sign in with it.
    Signup {
        #[arg(long, env = "FLASH_USERNAME")]
        username: String,
        #[arg(long, env = "FLASH_PASSWORD", hide_env_values = true)]
        password: String,
        /// Repeat the password.
        #[arg(long)]
        confirm: String,
    },

    /// Check that the credentials are accepted.
    Login(AuthArgs),

    /// Manage notes.
    Notes {
        #[command(flatten)]
        auth: AuthArgs,

        #[command(subcommand)]
        command: NotesCommand,
    },
}

#[derive(Args, Debug)]
pub struct AuthArgs {
    #[arg(long, env = "FLASH_USERNAME")]
    pub username: String,
    #[arg(long, env = "FLASH_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum NotesCommand {
    /// List notes, newest first.
    List {
        /// Only notes whose title or content contains this text.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one note with its summary.
    Show { id: i64 },
    /// Create a note; the service summarises it.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Delete a note.
    Delete { id: i64 },
}
