//! scaffolder's main application entry point.
//! Parses arguments, wires signal handling to cooperative cancellation and
//! runs every discovered project description.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use scaffolder::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    resolver::Resolver,
    shutdown::shutdown_signal,
};

/// Main application entry point.
#[tokio::main]
async fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args).await {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Discovers configuration documents
/// 2. Requests cancellation on an interrupt or termination signal
/// 3. Generates every project and reports the created roots
async fn run(args: Args) -> Result<()> {
    let resolver = Arc::new(Resolver::new(CancellationToken::new(), &args.config)?);

    let signal_resolver = Arc::clone(&resolver);
    tokio::spawn(async move {
        shutdown_signal().await;
        eprintln!("Received stop signal, finishing in-flight projects.");
        signal_resolver.stop();
    });

    let roots = resolver.start().await?;
    for root in &roots {
        println!("Generated: '{}'", root.display());
    }
    println!("Project generation completed successfully ({} project(s)).", roots.len());
    Ok(())
}
