//! # easypanel: EasyGo panel watcher
//!
//! Composition root that wires the adapters together and runs one
//! subcommand.
//!
//! ## Responsibilities
//! - Parse the command line and load configuration (file, env vars)
//! - Install the tracing subscriber
//! - Construct the HTTP panel client, the board and the notification center
//! - Construct the status poller and command dispatcher over them
//! - Run `watch`, `status` or a one-shot service command
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod cli;
mod commands;
mod config;
mod input;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use easypanel_adapter_console::render::{render_board, render_notification};
use easypanel_adapter_console::{AssumeYes, MemoryBoard, TerminalPrompt};
use easypanel_app::notification_center::NotificationCenter;
use easypanel_app::services::command_dispatcher::CommandDispatcher;
use easypanel_app::services::status_poller::StatusPoller;
use easypanel_domain::action::ServiceAction;
use easypanel_domain::notification::NotificationEvent;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::{
    Poller, exit_code, handle_line, refresh_bound, run_command, status, until_interrupted,
};
use crate::config::Config;
use crate::input::HELP;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter).context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Adapters
    let api = config
        .panel
        .build()
        .context("failed to create panel client")?;
    tracing::debug!(base_url = api.base_url(), "panel client ready");
    let board = MemoryBoard::new(config.bindings());
    let notifications = NotificationCenter::new(config.dismiss_after());

    // Services
    let poller = Arc::new(StatusPoller::new(
        api,
        board.clone(),
        config.poll_intervals(),
    ));

    let outcome = match &cli.command {
        Command::Watch => return watch(&poller, &board, &notifications).await,
        Command::Status => {
            print!("{}", status(&poller, &board).await?);
            return Ok(ExitCode::SUCCESS);
        }
        Command::Stop { name, yes: true } => {
            let dispatcher = CommandDispatcher::new(poller, AssumeYes, notifications.clone());
            run_command(&dispatcher, &board, &notifications, ServiceAction::Stop, name).await
        }
        Command::Stop { name, yes: false } => {
            let dispatcher =
                CommandDispatcher::new(poller, TerminalPrompt::stdin(), notifications.clone());
            run_command(&dispatcher, &board, &notifications, ServiceAction::Stop, name).await
        }
        Command::Start { name } => {
            let dispatcher =
                CommandDispatcher::new(poller, TerminalPrompt::stdin(), notifications.clone());
            run_command(&dispatcher, &board, &notifications, ServiceAction::Start, name).await
        }
        Command::Restart { name } => {
            let dispatcher =
                CommandDispatcher::new(poller, TerminalPrompt::stdin(), notifications.clone());
            run_command(&dispatcher, &board, &notifications, ServiceAction::Restart, name).await
        }
    };
    Ok(exit_code(&outcome))
}

async fn watch(
    poller: &Arc<Poller>,
    board: &MemoryBoard,
    notifications: &NotificationCenter,
) -> anyhow::Result<ExitCode> {
    let prompt = TerminalPrompt::stdin();
    let dispatcher = CommandDispatcher::new(
        Arc::clone(poller),
        prompt.clone(),
        notifications.clone(),
    );

    refresh_bound(poller).await;
    print!("{}", render_board(&board.elements()));

    let mut revisions = board.subscribe();
    let mut events = notifications.subscribe();
    let mut timers = Arc::clone(poller).start();
    tracing::info!(timers = timers.timers(), "watching panel");
    eprintln!("{HELP}");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = revisions.changed() => {
                if changed.is_err() {
                    break;
                }
                print!("{}", render_board(&board.elements()));
            }
            event = events.recv() => match event {
                Ok(NotificationEvent::Shown(notification)) => {
                    println!("{}", render_notification(&notification));
                }
                Ok(NotificationEvent::Dismissed(_)) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "notifications dropped");
                }
                Err(RecvError::Closed) => break,
            },
            line = prompt.read_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    break;
                };
                // a hung command or pending confirmation must not swallow Ctrl-C
                let handled = until_interrupted(
                    tokio::signal::ctrl_c(),
                    handle_line(&line, &dispatcher, poller, board, notifications),
                )
                .await;
                if handled != Some(true) {
                    break;
                }
            }
        }
    }

    timers.stop();
    Ok(ExitCode::SUCCESS)
}
