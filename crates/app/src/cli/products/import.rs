use std::{fs, path::PathBuf};

use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ImportArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// CSV file with a `sku,name,category,price,stock,supplier` header
    #[arg(long)]
    file: PathBuf,
}

pub(crate) async fn run(args: ImportArgs) -> Result<(), String> {
    let csv = fs::read_to_string(&args.file)
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let (db, app) = args.database.open(false).await?;

    let report = app
        .transfer
        .import_csv(csv)
        .await
        .map_err(|error| format!("failed to import products: {error}"))?;

    db.close().await;

    println!("imported: {}", report.imported);
    println!("duplicates: {}", report.duplicates.len());

    for sku in &report.duplicates {
        println!("  {sku}");
    }

    println!("errors: {}", report.errors.len());

    for error in &report.errors {
        println!("  {error}");
    }

    Ok(())
}
