//! Developer Toolbox Entry Point
//!
//! Initializes logging, loads configuration, builds the application context
//! and runs one CLI command against it.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::json;
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt};

use cli::{Cli, Commands, ThemeSetting};
use dev_toolbox::core::{AppContext, Config};
use dev_toolbox::domains::preferences::ThemeMode;
use dev_toolbox::domains::tools::{LoadedToolInfo, ToolDescriptor};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level, config.logging.with_timestamps);

    let ctx = AppContext::new(config, cli.system_dark).context("cannot start toolbox")?;

    run(&ctx, cli.command, cli.json).await
}

async fn run(ctx: &AppContext, command: Commands, as_json: bool) -> Result<()> {
    debug!("Running {:?}", command);

    match command {
        Commands::List { tag, favorites } => {
            let tools = ctx.registry().get_all().await?;
            let mut view = if favorites {
                ctx.preferences().favorites_view(&tools)
            } else {
                ctx.preferences().sorted_view(&tools)
            };
            if let Some(tag) = tag {
                view.retain(|tool| tool.has_tag(&tag));
            }
            print_tools(ctx, &view, as_json)?;
        }

        Commands::Search { query } => {
            let found = ctx.registry().search(&query).await?;
            print_tools(ctx, &found, as_json)?;
        }

        Commands::Show { id } => {
            let tool = ctx.registry().get_by_identifier(&id).await?;
            let details = json!({
                "id": tool.id,
                "uuid": tool.uuid(),
                "githubUser": tool.github_username(),
                "pinned": ctx.preferences().is_pinned(&tool.id),
                "favorite": ctx.preferences().is_favorite(&tool.id),
                "descriptor": tool.descriptor,
            });
            println!("{}", serde_json::to_string_pretty(&details)?);
        }

        Commands::Open { path } => {
            let nav = ctx.router().navigate(&path).await;
            if let Some(tool) = &nav.tool {
                ctx.preferences().record_usage(&tool.id);
            }

            if as_json {
                let out = json!({
                    "requested": nav.requested,
                    "route": nav.route.path(),
                    "notFound": nav.is_not_found(),
                    "title": nav.title,
                    "tool": nav.tool,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", nav.title);
                println!("  route: {}", nav.route);
            }
        }

        Commands::Pin { id } => {
            let tool = ctx.registry().get_by_identifier(&id).await?;
            let pinned = ctx.preferences().toggle_pin(&tool.id);
            println!("{} {}", tool.name(), if pinned { "pinned" } else { "unpinned" });
        }

        Commands::Favorite { id } => {
            let tool = ctx.registry().get_by_identifier(&id).await?;
            let favorite = ctx.preferences().toggle_favorite(&tool.id);
            println!(
                "{} {}",
                tool.name(),
                if favorite { "added to favorites" } else { "removed from favorites" }
            );
        }

        Commands::Reorder { from, to } => {
            let tools = ctx.registry().get_all().await?;
            if !ctx.preferences().reorder(&from, &to, &tools) {
                bail!("cannot move '{from}' onto '{to}': both must be distinct known tools");
            }
            let view = ctx.preferences().sorted_view(&tools);
            print_tools(ctx, &view, as_json)?;
        }

        Commands::Use { id } => {
            let tool = ctx.registry().get_by_identifier(&id).await?;
            ctx.preferences().record_usage(&tool.id);
            println!("Recorded use of {}", tool.name());
        }

        Commands::Recent => {
            let tools = ctx.registry().get_all().await?;
            let recent = ctx.preferences().recent_view(&tools);
            if as_json {
                let out: Vec<_> = recent
                    .iter()
                    .map(|(tool, at)| json!({ "id": tool.id, "usedAt": at.to_rfc3339() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for (tool, at) in recent {
                    println!("{:<28} {}", tool.id, at.format("%Y-%m-%d %H:%M:%S UTC"));
                }
            }
        }

        Commands::Tags => {
            let stats = ctx.registry().tag_stats().await?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                for (tag, count) in stats {
                    println!("{:<12} {}", tag, count);
                }
            }
        }

        Commands::Theme { setting } => {
            let mut theme = ctx.theme().lock();
            match setting {
                Some(ThemeSetting::Light) => theme.change_mode(ThemeMode::Light),
                Some(ThemeSetting::Dark) => theme.change_mode(ThemeMode::Dark),
                Some(ThemeSetting::Auto) => {
                    theme.toggle_auto();
                }
                None => {}
            }
            println!("theme: {} (follow system: {})", theme.mode(), theme.auto());
        }

        Commands::Schema => {
            let schema = schemars::schema_for!(ToolDescriptor);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }

        Commands::Reset => {
            ctx.preferences().clear();
            println!("Tool preferences cleared");
        }
    }

    Ok(())
}

fn print_tools(ctx: &AppContext, tools: &[LoadedToolInfo], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(tools)?);
        return Ok(());
    }

    for tool in tools {
        let marks = format!(
            "{}{}",
            if ctx.preferences().is_pinned(&tool.id) { "*" } else { " " },
            if ctx.preferences().is_favorite(&tool.id) { "♥" } else { " " },
        );
        println!(
            "{} {:<28} {:<24} [{}]",
            marks,
            tool.id,
            tool.name(),
            tool.descriptor.tags.join(", ")
        );
    }
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level. Logs go to stderr so
/// command output on stdout stays machine-readable.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
