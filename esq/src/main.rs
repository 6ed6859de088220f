//! esq - Elasticsearch query runner.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use esq::{Cli, SearchClient, render, run};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the response.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = cli.resolve_config()?;

    if cli.print_query {
        config.validate()?;
        let client = SearchClient::connect(&config.host, config.port)?;
        println!(
            "{} {}",
            "POST".bold(),
            client.search_path(&config.index, config.document_type.as_deref())?
        );
        println!("{}", serde_json::to_string_pretty(&config.payload())?);
        return Ok(());
    }

    let response = run(&config)?;
    println!("{}", render(&response, cli.format)?);

    Ok(())
}
