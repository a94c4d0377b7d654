//! Operator entry point: prepares the database the ordering service runs on.

use aio_core::settings::{Secrets, Settings};
use aio_db::accounts::{AccountManager, LocalManager};
use aio_db::Store;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "aio-bootstrap", version, about = "Schema and data maintenance")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the schema and any missing tables.
    CreateAll,
    /// Create the schema, then load the starter users, catalog and menu.
    Seed,
    /// Delete session tokens older than the configured lifetime.
    PurgeTokens,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aio_bootstrap=info,aio_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    let secrets = Secrets::from_env()?;

    let store = Store::connect(settings, &secrets).await?;
    tracing::info!("Database connection pool created");

    aio_db::health_check(store.pool()).await?;
    tracing::info!("Database health check passed");

    let local = LocalManager::new(store.clone());

    match cli.command {
        Command::CreateAll => local.create_all().await?,
        Command::Seed => {
            local.create_all().await?;
            let pack = aio_db::seed::starter_pack(&store).await?;
            tracing::info!(
                admin = pack.admin,
                guest = pack.guest,
                tree = pack.tree,
                "Starter data ready"
            );
        }
        Command::PurgeTokens => {
            let deleted = local.purge_expired_tokens().await?;
            tracing::info!(deleted, "Token purge finished");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["aio-bootstrap", "purge-tokens"]).unwrap();
        assert!(matches!(cli.command, Command::PurgeTokens));

        let cli = Cli::try_parse_from(["aio-bootstrap", "create-all"]).unwrap();
        assert!(matches!(cli.command, Command::CreateAll));

        assert!(Cli::try_parse_from(["aio-bootstrap"]).is_err());
    }
}
