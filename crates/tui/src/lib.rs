//! # Horizon Portal Shell
//!
//! Terminal navigation shell for the alumni portal: a sidebar listing the
//! portal sections with the active one highlighted, a toggle that shows the
//! sidebar on narrow terminals, and a logout action that clears the stored
//! session and returns to the landing route.
//!
//! ## Architecture
//!
//! Components handle input and render themselves; they return `Effect`s that
//! `cmd` executes against the router, the session store and the toast stack.
//! The session termination flow lives in [`session`] and is shared with the
//! headless `horizon logout` command.

mod app;
mod cmd;
pub mod router;
pub mod session;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use horizon_util::{SessionStore, UserPreferences};

pub use app::restore_identity;
pub use router::{RouteState, Router};
pub use session::{LogoutContext, LogoutReport, NotificationSink, WriterNotifier, logout};

/// Everything the shell needs from the outside.
#[derive(Debug)]
pub struct ShellConfig {
    /// Route requested on the command line
    pub route: Option<String>,
    /// Theme requested on the command line
    pub theme: Option<String>,
    pub session_store: Arc<dyn SessionStore>,
    pub preferences: UserPreferences,
}

/// Runs the interactive shell until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or drawn to.
pub async fn run(config: ShellConfig) -> Result<()> {
    ui::runtime::run_app(config).await
}
