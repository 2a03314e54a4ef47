// NEXTGEN Studio Main Entry Point
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::{error, info};

use nextgen_studio::config::StudioConfig;
use nextgen_studio::studio::{
    require_input, GenerateOutcome, GenerationReport, Generator, StudioController, ToolKind,
};
use nextgen_studio::window;

#[derive(Parser)]
#[command(name = "nextgen-studio")]
#[command(about = "NEXTGEN STUDIO - AI Creation Platform", long_about = None)]
struct Cli {
    /// Override the simulated generation delay (milliseconds)
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the studio window (default)
    Gui,

    /// Run a single generation without a window
    Generate {
        /// Generation tool
        #[arg(short, long, value_enum, default_value_t = ToolKind::Video)]
        tool: ToolKind,

        /// Description or idea to generate from
        #[arg(short, long)]
        input: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Keep the renderer stack quiet unless the user asks otherwise.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var(
            "RUST_LOG",
            "info,wgpu_core=error,wgpu_hal=error,naga=error,winit=error,eframe=warn",
        );
    }
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        error!("[STUDIO PANIC] at {}: {}", location, message);
    }));

    let args = Cli::parse();
    let config = StudioConfig::from_env()?.with_delay_override(args.delay_ms);
    let controller = StudioController::new(Generator::new(config.generation_delay));

    info!("--- NEXTGEN STUDIO v{} ---", env!("CARGO_PKG_VERSION"));
    info!(
        "[STUDIO] Simulated generation delay: {:?}",
        controller.generator().delay()
    );

    match args.command.unwrap_or(Commands::Gui) {
        Commands::Gui => {
            let handle = tokio::runtime::Handle::current();
            tokio::task::block_in_place(|| window::run_gui(controller, handle, &config))?;
            info!("[GUI] Window closed.");
        }
        Commands::Generate { tool, input, json } => {
            let input = require_input(&input)?;
            controller.select_tool(tool);
            controller.set_input(input);

            let result = match controller.generate().await {
                GenerateOutcome::Completed(result) => result,
                other => bail!("generation did not complete: {:?}", other),
            };

            let report = GenerationReport::new(tool, input, &result);
            if json {
                println!("{}", report.to_json()?);
            } else {
                println!("{}", report.to_text());
            }
        }
    }

    Ok(())
}
