use clap::{Args, Subcommand};

mod export;
mod import;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    Export(export::ExportArgs),
    Import(import::ImportArgs),
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::Export(args) => export::run(args).await,
        ProductsSubcommand::Import(args) => import::run(args).await,
    }
}
