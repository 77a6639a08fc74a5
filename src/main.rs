//! DocHub — in-memory document and folder management core.
//!
//! Entry point that wires the crates together and walks through a demo
//! session: login, browse, mutate, list, logout.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use dochub_auth::directory::{UserDirectory, UserQuery};
use dochub_auth::session::{MemorySessionStore, SessionManager};
use dochub_core::config::AppConfig;
use dochub_core::result::AppResult;
use dochub_core::types::PageRequest;
use dochub_entity::document::UploadedFile;
use dochub_query::{ListRequest, list_entries};
use dochub_store::{DocumentStore, Navigator};

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config) {
        tracing::error!("DocHub error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> AppResult<AppConfig> {
    let env = std::env::var("DOCHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Wire the components and walk one demo session.
fn run(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting DocHub v{}", env!("CARGO_PKG_VERSION"));

    let directory = UserDirectory::seeded(&config.seed);
    let store_backend = Arc::new(MemorySessionStore::new());
    let mut sessions = SessionManager::new(store_backend, &config.session);
    let mut store = if config.seed.sample_data {
        DocumentStore::with_sample_data()
    } else {
        DocumentStore::new()
    };
    let mut navigator = Navigator::new();

    let session = sessions
        .login(
            &directory,
            &config.seed.admin_username,
            &config.seed.admin_password,
        )?
        .clone();
    tracing::info!(user = %session.username(), "Logged in");

    let reports = store.create_folder(&session, "Reports", None)?;
    navigator.enter_folder(&store.snapshot(), reports.id)?;

    let added = store.add_documents(
        &session,
        vec![UploadedFile::new("Quarterly Report.pdf", "PDF", 64 * 1024)],
        navigator.current_folder(),
    )?;
    store.toggle_favorite(&session, added[0].id)?;

    let page = list_entries(
        &store.snapshot(),
        navigator.current_folder(),
        &ListRequest::default(),
    );
    for entry in &page.items {
        tracing::info!(kind = ?entry.kind(), name = %entry.name(), "Entry");
    }

    navigator.go_back();
    let root_page = list_entries(
        &store.snapshot(),
        navigator.current_folder(),
        &ListRequest::searching("proj"),
    );
    tracing::info!(matches = root_page.total_items, "Search for 'proj'");

    let users = directory.list_users(&UserQuery {
        search: String::new(),
        direction: Default::default(),
        page: PageRequest::new(1, config.query.users_per_page),
    });
    tracing::info!(
        users = users.total_items,
        pages = users.total_pages,
        "User directory"
    );

    sessions.logout()?;
    tracing::info!("Logged out");

    Ok(())
}
