//! `meetq` CLI: find meeting times and manage the comment board from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots (stdin → stdout)
//! echo '{"events":[],"request":{"duration":30,"attendees":["alice"]}}' | meetq find
//!
//! # From file to file, reporting which attendee tier was satisfied
//! meetq find -i day.json -o slots.json --with-tier
//!
//! # Comment board (writes require MEETQ_USER)
//! MEETQ_USER=alice meetq comment add "nice site, see you soon"
//! meetq comment list --limit 5
//! meetq comment clear
//!
//! # Login status
//! meetq login-status
//! ```

mod store;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meeting_engine::auth::DEFAULT_LOGIN_URL;
use meeting_engine::comments::{parse_comment_limit, MAX_COMMENT_LIMIT};
use meeting_engine::{
    find_meeting_availability, login_status, post_comments, CommentStore, Event, LoginStatus,
    MeetingRequest, StaticAuthenticator,
};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::store::JsonFileCommentStore;

/// Page the login flow returns to after a comment write is rejected.
const COMMENT_REDIRECT: &str = "/index.html";
/// Page the login flow returns to after a status check.
const STATUS_REDIRECT: &str = "/login-status";
/// Path argument that stands for stdin or stdout.
const STDIO_PATH: &str = "-";

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Meeting availability queries and comment board"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Comment store file
    #[arg(long, global = true, env = "MEETQ_STORE", default_value = "comments.json")]
    store: PathBuf,

    /// Logged-in user; unset means logged out
    #[arg(long, global = true, env = "MEETQ_USER")]
    user: Option<String>,

    /// Base URL of the external login page
    #[arg(long, global = true, env = "MEETQ_LOGIN_URL", default_value = DEFAULT_LOGIN_URL)]
    login_url: String,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every slot in the day that fits a meeting request
    Find {
        /// Input JSON file with `events` and `request` (stdin if omitted or `-`)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (stdout if omitted or `-`)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Wrap slots in an object that also names the satisfied attendee tier
        #[arg(long)]
        with_tier: bool,
    },
    /// Add, list, or clear comments
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },
    /// Print whether a user is logged in
    LoginStatus,
}

#[derive(Subcommand)]
enum CommentAction {
    /// Add comments; commas separate multiple entries
    Add { text: String },
    /// List the most recent comments
    List {
        /// How many comments to show (1-10)
        #[arg(short, long)]
        limit: Option<String>,
    },
    /// Delete every comment
    Clear,
}

/// Input document for `meetq find`.
#[derive(Deserialize)]
struct FindInput {
    #[serde(default)]
    events: Vec<Event>,
    request: MeetingRequest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let auth = match &cli.user {
        Some(user) => StaticAuthenticator::logged_in(user.clone()),
        None => StaticAuthenticator::logged_out(),
    }
    .with_login_base(cli.login_url.clone());

    match cli.command {
        Commands::Find {
            input,
            output,
            with_tier,
        } => {
            let raw = read_input(input.as_deref())?;
            let doc: FindInput =
                serde_json::from_str(&raw).context("Failed to parse meeting query JSON")?;
            tracing::debug!(events = doc.events.len(), "running meeting query");

            let availability = find_meeting_availability(&doc.events, &doc.request);
            let json = if with_tier {
                serde_json::to_string_pretty(&availability)?
            } else {
                serde_json::to_string_pretty(&availability.slots)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Comment { action } => {
            let store = JsonFileCommentStore::new(&cli.store);
            tracing::debug!(store = %store.path().display(), "opened comment store");
            run_comment(action, &store, &auth)?;
        }
        Commands::LoginStatus => match login_status(&auth, STATUS_REDIRECT) {
            LoginStatus::LoggedIn { .. } => println!("true"),
            LoginStatus::LoggedOut { login_url } => {
                println!("false");
                eprintln!("Sign in at {}", login_url);
            }
        },
    }

    Ok(())
}

fn run_comment(
    action: CommentAction,
    store: &JsonFileCommentStore,
    auth: &StaticAuthenticator,
) -> Result<()> {
    match action {
        CommentAction::Add { text } => {
            let stored = post_comments(store, auth, &text, COMMENT_REDIRECT)
                .context("Failed to add comment")?;
            println!("Stored {} comment(s)", stored);
        }
        CommentAction::List { limit } => {
            let limit = match limit {
                Some(raw) => parse_comment_limit(&raw)?,
                None => MAX_COMMENT_LIMIT,
            };
            let comments = store.list(limit).context("Failed to list comments")?;
            println!("{}", serde_json::to_string_pretty(&comments)?);
        }
        CommentAction::Clear => {
            store.clear().context("Failed to clear comments")?;
            println!("Cleared comments");
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read the query document from `path`, or from stdin when the path is
/// absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path.filter(|p| *p != Path::new(STDIO_PATH)) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading query");
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read query file: {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read query from stdin")?;
            Ok(buf)
        }
    }
}

/// Write `json` followed by a newline to `path`, or to stdout when the path
/// is absent or `-`.
fn write_output(path: Option<&Path>, json: &str) -> Result<()> {
    match path.filter(|p| *p != Path::new(STDIO_PATH)) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "writing slots");
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write slots file: {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write slots to stdout")
        }
    }
}
