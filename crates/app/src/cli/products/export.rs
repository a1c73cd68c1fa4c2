use std::{fs, path::PathBuf};

use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// File to write; the CSV goes to stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) async fn run(args: ExportArgs) -> Result<(), String> {
    let (db, app) = args.database.open(false).await?;

    let csv = app
        .transfer
        .export_products()
        .await
        .map_err(|error| format!("failed to export products: {error}"))?;

    db.close().await;

    match args.output {
        Some(path) => {
            fs::write(&path, csv)
                .map_err(|error| format!("failed to write {}: {error}", path.display()))?;

            println!("wrote {}", path.display());
        }
        None => print!("{csv}"),
    }

    Ok(())
}
