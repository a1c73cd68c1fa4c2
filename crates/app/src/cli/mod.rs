use clap::{Args, Parser, Subcommand};
use stockpile_app::{
    context::{AppContext, DatabaseOptions, initialise_database},
    database::Db,
};

mod db;
mod products;

#[derive(Debug, Parser)]
#[command(name = "stockpile-app", about = "Stockpile CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Products(products::ProductsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Products(command) => products::run(command).await,
        }
    }
}

/// Connection arguments shared by every command.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://inventory.db")]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn open(&self, seed_demo_data: bool) -> Result<(Db, AppContext), String> {
        let db = initialise_database(&DatabaseOptions {
            url: self.database_url.clone(),
            max_connections: 1,
            seed_demo_data,
        })
        .await
        .map_err(|error| format!("failed to open database: {error}"))?;

        let app = AppContext::from_db(&db);

        Ok((db, app))
    }
}
