//! CLI entrypoint for kagi-tools
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use kagi_application::{
    SUMMARIZE, SummarizeTool, ToolRegistry, ToolSchemaPort, WEB_SEARCH, WebSearchTool,
};
use kagi_domain::ToolCall;
use kagi_infrastructure::{ConfigLoader, JsonSchemaToolConverter, KagiClient, TempOutputStore};
use kagi_presentation::{Cli, Command, ConsoleFormatter, Theme};
use std::io::{IsTerminal, Write};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout carries tool output only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Run `kagi-tools --help` for usage.");
    };

    info!("Starting kagi-tools");

    let file_config = ConfigLoader::load(cli.config.as_ref(), cli.no_config)?;
    let tools_config = Arc::new(file_config.to_tools_config()?);
    if !tools_config.has_api_key() {
        warn!("No Kagi API key configured");
    }

    // === Dependency Injection ===
    let gateway = Arc::new(KagiClient::with_base_url(
        &file_config.kagi.base_url,
        file_config.kagi.timeout(),
    )?);
    let store = Arc::new(TempOutputStore::new());

    let registry = ToolRegistry::new()
        .register(Arc::new(WebSearchTool::new(
            gateway.clone(),
            store.clone(),
            tools_config.clone(),
        )))
        .register(Arc::new(SummarizeTool::new(gateway, store, tools_config)));

    let call = match command {
        Command::Schema => {
            let schemas = JsonSchemaToolConverter.all_tools_schema(registry.spec());
            println!("{}", ConsoleFormatter::format_schema(&schemas));
            return Ok(());
        }
        Command::Search { queries } => {
            ToolCall::new(WEB_SEARCH).with_arg("queries", serde_json::json!(queries))
        }
        Command::Summarize {
            url,
            summary_type,
            engine,
            target_language,
        } => {
            let mut call = ToolCall::new(SUMMARIZE).with_arg("url", url);
            if let Some(summary_type) = summary_type {
                call = call.with_arg("summary_type", summary_type.as_str());
            }
            if let Some(engine) = engine {
                call = call.with_arg("engine", engine.as_str());
            }
            if let Some(language) = target_language {
                call = call.with_arg("target_language", language);
            }
            call
        }
    };

    let color = !cli.no_color && file_config.output.color && std::io::stdout().is_terminal();
    let theme = Theme::new(color);

    // Ctrl-C aborts the in-flight request
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    if !cli.json
        && std::io::stderr().is_terminal()
        && let Some(pending) = ConsoleFormatter::format_pending(&call, &theme)
    {
        eprintln!("{}", pending);
    }

    let result = registry.execute(&call, &cancel).await;

    let output = if cli.json {
        ConsoleFormatter::format_json(&result)
    } else {
        ConsoleFormatter::format(&call, &result, cli.expanded, &theme)
    };
    print!("{}", output);
    if cli.json {
        println!();
    }

    if result.is_error {
        std::io::stdout().flush()?;
        std::process::exit(1);
    }

    Ok(())
}
