use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use focusdeck::config::Config;
use focusdeck::constants::NO_USER_MESSAGE;
use focusdeck::dashboard::Dashboard;
use focusdeck::identity::resolve_user;
use focusdeck::logger::Logger;
use focusdeck::notify::ToastQueue;
use focusdeck::storage::LocalStorage;
use focusdeck::store::Store;
use focusdeck::ui;

/// Terminal productivity dashboard: task board, notes editor and habit tracker
#[derive(Parser, Debug)]
#[command(name = "focusdeck", version, about)]
struct Cli {
    /// Write a default config file to the user config directory and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    let logger = Logger::from_config(&config.logging)?;

    let user = resolve_user(&config.identity);
    match &user {
        Some(user) => log::info!("Signed in as {}", user.email),
        None => log::warn!("{}", NO_USER_MESSAGE),
    }

    let database_path = config.storage.database_path();
    let storage = LocalStorage::new(database_path.as_deref()).await?;
    let store: Arc<dyn Store> = Arc::new(storage);

    let toasts = ToastQueue::default();
    let dashboard = Dashboard::new(store, user, Arc::new(toasts.clone()));

    // Run the TUI application
    ui::run_app(dashboard, toasts, logger, &config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_config_flag() {
        let cli = Cli::try_parse_from(["focusdeck", "--init-config"]).unwrap();
        assert!(cli.init_config);

        let cli = Cli::try_parse_from(["focusdeck"]).unwrap();
        assert!(!cli.init_config);
    }

    #[test]
    fn test_stray_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["focusdeck", "--init-config", "stray"]).is_err());
        assert!(Cli::try_parse_from(["focusdeck", "stray", "--help"]).is_err());
        assert!(Cli::try_parse_from(["focusdeck", "--bogus"]).is_err());
    }
}
