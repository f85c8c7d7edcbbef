use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use horizon_tui::{LogoutContext, RouteState, ShellConfig, WriterNotifier, logout, restore_identity};
use horizon_util::{SessionBackend, SessionStore, UserPreferences, cache_file_path, open_session_store};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOG_PATH_ENV: &str = "HORIZON_LOG_PATH";
const LOG_FILE_NAME: &str = "horizon.log";

/// Terminal shell for the Global Horizon alumni portal
#[derive(Debug, Parser)]
#[command(name = "horizon", version, about)]
struct Cli {
    /// Route to open on start (for example `/events`)
    #[arg(long)]
    route: Option<String>,

    /// Theme id or alias (`horizon`, `ansi256`)
    #[arg(long)]
    theme: Option<String>,

    /// Where session credentials live: keychain, file or memory
    #[arg(long, global = true)]
    session_backend: Option<SessionBackend>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Clear the stored session without opening the shell
    Logout,
    /// Print the stored member, if any
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none());

    let backend = cli.session_backend.unwrap_or_else(SessionBackend::from_env);
    let session_store: Arc<dyn SessionStore> = Arc::from(
        open_session_store(backend).with_context(|| format!("open {} session store", backend.as_str()))?,
    );

    match cli.command {
        Some(Command::Logout) => run_logout(session_store.as_ref()),
        Some(Command::Whoami) => run_whoami(session_store.as_ref()),
        None => {
            let preferences = UserPreferences::new().unwrap_or_else(|error| {
                warn!(error = %error, "Preferences unavailable; using in-memory defaults");
                UserPreferences::ephemeral()
            });
            horizon_tui::run(ShellConfig {
                route: cli.route,
                theme: cli.theme,
                session_store,
                preferences,
            })
            .await
        }
    }
}

/// Installs the global subscriber. The shell owns the terminal, so in TUI
/// mode logs go to a file instead of stderr.
fn init_tracing(tui_mode: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if !tui_mode {
        let _ = builder.with_writer(io::stderr).try_init();
        return;
    }

    let log_path = cache_file_path(LOG_PATH_ENV, LOG_FILE_NAME);
    match open_log_file(&log_path) {
        Ok(file) => {
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
        Err(_) => {
            let _ = builder.with_writer(io::sink).try_init();
        }
    }
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Runs the shared logout flow headlessly. Failed steps are logged by the
/// flow itself and do not change the exit status.
fn run_logout(store: &dyn SessionStore) -> Result<()> {
    let mut identity = restore_identity(store);
    let mut notifier = WriterNotifier::new(io::stderr());
    let mut router = RouteState::default();

    let report = logout(LogoutContext {
        store,
        identity: &mut identity,
        notifier: &mut notifier,
        router: &mut router,
    });
    info!(clean = report.is_clean(), backend = store.backend().as_str(), "Headless logout finished");
    Ok(())
}

fn run_whoami(store: &dyn SessionStore) -> Result<()> {
    match restore_identity(store) {
        Some(user) => println!("{} <{}>", user.full_name, user.email),
        None => println!("Not signed in"),
    }
    Ok(())
}
