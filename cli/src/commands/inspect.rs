//! # Linkstamp Inspect Command
//!
//! File: cli/src/commands/inspect.rs
//!
//! `linkstamp inspect <PATH>` reports what currently sits at a link file
//! destination (`missing`, `symlink`, `directory`, `generated` or `foreign`)
//! without writing anything. Useful to predict what `linkstamp write` would do.
//!
use clap::Parser;
use linkstamp::common::fs::io::expand_tilde;
use linkstamp::core::error::Result;
use linkstamp::link::LinkFileWriter;
use tracing::info;

/// Arguments accepted by `linkstamp inspect`.
#[derive(Parser, Debug)]
#[command(about = "Show whether a link file destination is missing, generated or hand-edited")]
pub struct InspectArgs {
    /// Destination path to classify.
    path: String,
}

pub async fn handle_inspect(args: InspectArgs, writer: &LinkFileWriter) -> Result<()> {
    info!("Handling inspect command (Path: {})", args.path);
    let path = expand_tilde(&args.path);
    let kind = writer.inspect(&path).await?;
    println!("{}: {}", kind, path.display());
    Ok(())
}
