//! # Linkstamp Write Command
//!
//! File: cli/src/commands/write.rs
//!
//! ## Overview
//!
//! This module implements `linkstamp write`, which writes a single link file
//! through `LinkFileWriter`. It is the entry point a pipeline step (or a person
//! debugging one) uses when the content is already rendered.
//!
//! ## Architecture
//!
//! 1. Expand `~` in the destination and base paths
//! 2. Read the content from `--content`, `--content-file`, or stdin
//! 3. Build an immutable `LinkFileDescriptor` from the flags
//! 4. Run the write and print `<action>: <path>`
//!
//! ## Examples
//!
//! ```bash
//! # Write a re-export stub, creating dist/ if needed
//! linkstamp write dist/index.js --content "export * from './a';"
//!
//! # Overwrite whatever is there (except a symlink), without the header
//! linkstamp write dist/index.js --content-file stub.js --override --no-header
//!
//! # Content from stdin
//! render-stub | linkstamp write dist/index.js --component ui/button
//! ```
//!
//! Example output:
//!
//! ```text
//! created: dist/index.js
//! ```
//!
use anyhow::Context;
use clap::Parser;
use linkstamp::common::fs::io::expand_tilde;
use linkstamp::core::error::Result;
use linkstamp::link::{LinkFileDescriptor, LinkFileWriter};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Arguments accepted by `linkstamp write`.
#[derive(Parser, Debug)]
#[command(about = "Write a generated link file, preserving hand-edited files")]
pub struct WriteArgs {
    /// Destination path of the link file.
    path: String,

    /// Link file content. Read from stdin when neither this nor --content-file is given.
    #[arg(long, conflicts_with = "content_file")]
    content: Option<String>,

    /// Read the link file content from this file.
    #[arg(long, value_name = "FILE")]
    content_file: Option<String>,

    /// Logical root for relative paths in log output (defaults to the destination's parent).
    #[arg(long, value_name = "DIR")]
    base: Option<String>,

    /// Overwrite an existing file even if it was not generated.
    #[arg(long = "override")]
    override_existing: bool,

    /// Do not prepend the generated-file header.
    #[arg(long)]
    no_header: bool,

    /// Path the link points to (informational).
    #[arg(long, value_name = "PATH")]
    source: Option<String>,

    /// Component that owns the link (informational).
    #[arg(long, value_name = "ID")]
    component: Option<String>,
}

/// Handles `linkstamp write`.
pub async fn handle_write(args: WriteArgs, writer: &LinkFileWriter) -> Result<()> {
    info!(
        "Handling write command (Path: {}, Override: {}, Header: {})",
        args.path, args.override_existing, !args.no_header
    );

    let content = read_content(&args).await?;
    debug!("Read {} bytes of link file content", content.len());

    let mut builder = LinkFileDescriptor::builder(expand_tilde(&args.path), content)
        .override_existing(args.override_existing)
        .auto_generated_message(!args.no_header);
    if let Some(base) = &args.base {
        builder = builder.base(expand_tilde(base));
    }
    if let Some(source) = args.source {
        builder = builder.source_path(source);
    }
    if let Some(component) = args.component {
        builder = builder.component_id(component);
    }

    let outcome = writer.write_detailed(builder.build()).await?;
    println!("{}: {}", outcome.action, outcome.path.display());
    Ok(())
}

async fn read_content(args: &WriteArgs) -> Result<Vec<u8>> {
    if let Some(content) = &args.content {
        return Ok(content.clone().into_bytes());
    }
    if let Some(file) = &args.content_file {
        let file = expand_tilde(file);
        return tokio::fs::read(&file)
            .await
            .with_context(|| format!("Failed to read content file {:?}", file));
    }
    let mut buffer = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut buffer)
        .await
        .context("Failed to read link file content from stdin")?;
    Ok(buffer)
}
