use clap::Args;
use stockpile_app::domain::products::models::ProductFilter;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct InitArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Insert the demonstration catalog when no products exist
    #[arg(long)]
    seed: bool,
}

pub(crate) async fn run(args: InitArgs) -> Result<(), String> {
    let (db, app) = args.database.open(args.seed).await?;

    let products = app
        .products
        .list_products(ProductFilter::default())
        .await
        .map_err(|error| format!("failed to count products: {error}"))?;

    db.close().await;

    println!("schema ready");
    println!("products: {}", products.len());

    Ok(())
}
