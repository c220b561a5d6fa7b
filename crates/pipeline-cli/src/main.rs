mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("PIPELINE_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stdout carries the JSON responses
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "pipeline", &mut std::io::stdout());
        return Ok(());
    }

    let mut ctx = match CliContext::load(cli.file.as_deref(), cli.config.as_deref(), &cli.user) {
        Ok(ctx) => ctx,
        Err(e) => output::output_error(&e.to_string()),
    };

    match cli.command {
        Commands::Show(args) => handlers::board::handle_show(&mut ctx, args)?,
        Commands::Assignees => handlers::board::handle_assignees(&ctx)?,
        Commands::Move { moves } => handlers::item::handle_move(&mut ctx, moves)?,
        Commands::Drag(args) => handlers::item::handle_drag(&mut ctx, args)?,
        Commands::Add(args) => handlers::item::handle_add(&mut ctx, args)?,
        Commands::Completions { .. } => {}
    }

    ctx.page.close();
    Ok(())
}
