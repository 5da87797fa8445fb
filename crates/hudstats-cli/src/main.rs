mod cli;
mod clipboard;
mod commands;
mod context;

use anyhow::Result;
use clap::Parser;
use cli::{Args, ColorsAction, Command, HudAction};
use context::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hudstats=warn,hudstats_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context::load(&args)?;

    match args.command {
        Command::Hud { action } => match action {
            HudAction::Show { section, elevated } => commands::hud::show(&ctx, section, elevated),
            HudAction::Toggle { section, id } => commands::hud::toggle(&ctx, section, &id),
            HudAction::AutoCopy { id } => commands::hud::auto_copy(&ctx, &id),
            HudAction::Order { section, ids } => commands::hud::order(&ctx, section, &ids),
            HudAction::Reset => commands::hud::reset(&ctx),
        },
        Command::Colors { action } => match action {
            ColorsAction::List => commands::colors::list(&ctx),
            ColorsAction::Toggle { id } => commands::colors::toggle(&ctx, &id),
            ColorsAction::Set { id, color } => commands::colors::set(&ctx, &id, &color),
            ColorsAction::Global { color } => commands::colors::global(&ctx, &color),
            ColorsAction::UseGlobal => commands::colors::use_global(&ctx),
            ColorsAction::ApplyAll { color } => commands::colors::apply_all(&ctx, &color),
            ColorsAction::Clear => commands::colors::clear(&ctx),
            ColorsAction::Export { output } => commands::colors::export(&ctx, output.as_deref()),
            ColorsAction::Import { file } => commands::colors::import(&ctx, &file),
        },
        Command::Copy {
            player,
            add,
            remove,
        } => commands::copy::run(&ctx, &player, &add, &remove).await,
        Command::Search { queries } => commands::search::run(&ctx, &queries).await,
        Command::Login { token } => commands::session::login(&ctx, &token),
        Command::Logout => commands::session::logout(&ctx),
        Command::Catalog { section } => commands::catalog::run(section),
    }
}
