use std::fs::File;

use jwt_simple::prelude::HS256Key;
use tender_axum::{router_with_docs, start_server};
use tender_sqlite::Db;
use tenderdemo::{AppConfig, Cli, impls::DemoApp, seed_tenders};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Every crate in the workspace reports through `tracing`; write it to stdio.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args and extract the JWT key
    let cli = Cli::import()?;
    let key = HS256Key::from_bytes(cli.secret.as_bytes());

    let AppConfig {
        server,
        database,
        seed,
    } = AppConfig::load(&cli)?;

    let db = Db::open(&database).await?;
    let app = DemoApp { db, key };

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let (_, schema) = router_with_docs(app, server);
        serde_json::to_writer_pretty(File::create(path)?, schema.as_ref())?;
        return Ok(());
    }

    if let Some(path) = seed {
        let count = seed_tenders(&app.db, File::open(&path)?).await?;
        tracing::info!(count, "Seeded tenders from {}", path.display());
    }

    start_server(server, app).await?;
    Ok(())
}
