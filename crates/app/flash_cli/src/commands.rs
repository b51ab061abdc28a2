//! Command execution over a freshly bootstrapped client session.

use std::path::PathBuf;
use std::sync::Arc;

use flash_api_client::{ApiError, ClientConfig, FlashClient, Notebook};
use flash_core::auth::{CredentialStorage, FileCredentialStorage};
use flash_core::models::notes::Note;
use log::{debug, info};

use crate::cli::{AuthArgs, Cli, Commands, NotesCommand};
use crate::{Error, Result};

pub async fn execute(args: Cli) -> Result<()> {
    match args.command {
        Commands::Version => {
            println!("flash {}", flash_core::version());
        }
        Commands::Signup {
            username,
            password,
            confirm,
        } => {
            let flash = connect(args.api_url, args.data_dir)?;
            let identity = flash
                .auth
                .sign_up(&flash.store, &username, &password, &confirm)
                .await?;
            info!("Signed up as {}", identity.username);
        }
        Commands::Login(auth) => {
            let flash = connect(args.api_url, args.data_dir)?;
            let username = sign_in(&flash, &auth).await?;
            info!("Signed in as {}", username);
        }
        Commands::Notes { auth, command } => {
            let flash = connect(args.api_url, args.data_dir)?;
            sign_in(&flash, &auth).await?;
            let notebook = flash.notebook();
            run_notes(&notebook, command)
                .await
                .map_err(|e| session_policy(&flash, e))?;
        }
    }

    Ok(())
}

fn connect(api_url: Option<String>, data_dir: Option<PathBuf>) -> Result<FlashClient> {
    let config = api_url
        .map(ClientConfig::new)
        .unwrap_or_else(ClientConfig::from_env);

    let storage = match data_dir {
        Some(dir) => FileCredentialStorage::new(dir.join("token")),
        None => FileCredentialStorage::in_data_dir(),
    };
    debug!("credential storage at {}", storage.path().display());
    let storage: Arc<dyn CredentialStorage> = Arc::new(storage);

    Ok(FlashClient::bootstrap(&config, storage)?)
}

async fn sign_in(flash: &FlashClient, auth: &AuthArgs) -> Result<String> {
    let identity = flash
        .auth
        .sign_in(&flash.store, &auth.username, &auth.password)
        .await?;
    Ok(identity.username)
}

async fn run_notes(notebook: &Notebook, command: NotesCommand) -> Result<()> {
    match command {
        NotesCommand::List { search } => {
            notebook.refresh().await?;
            let notes = match search.as_deref() {
                Some(term) => notebook.search(term),
                None => notebook.notes(),
            };
            for note in &notes {
                println!("{}", list_line(note));
            }
            info!(
                "{} notes, {} summarized",
                notes.len(),
                notes.iter().filter(|n| n.has_summary()).count()
            );
        }
        NotesCommand::Show { id } => {
            let note = notebook.fetch(id).await?;
            print!("{}", detail(&note));
        }
        NotesCommand::Create { title, content } => {
            let note = notebook.create(&title, &content).await?;
            info!("Created note {}", note.id);
            print!("{}", detail(&note));
        }
        NotesCommand::Delete { id } => {
            notebook.delete(id).await?;
            info!("Deleted note {}", id);
        }
    }
    Ok(())
}

/// A rejected session is reported as expired; other errors pass through.
fn session_policy(flash: &FlashClient, err: Error) -> Error {
    match err {
        Error::Api(ApiError::Unauthorized(_)) if flash.store.view().was_rejected() => {
            Error::SessionExpired
        }
        other => other,
    }
}

fn list_line(note: &Note) -> String {
    format!(
        "{:>5}  {}  {}",
        note.id,
        note.created_at.format("%Y-%m-%d %H:%M"),
        note.title
    )
}

fn detail(note: &Note) -> String {
    let mut out = format!(
        "#{} {}\n{}\n\n{}\n",
        note.id,
        note.title,
        note.created_at.format("%Y-%m-%d %H:%M"),
        note.content
    );
    if let Some(summary) = note.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        out.push_str(&format!("\nSummary: {summary}\n"));
    }
    out
}
