//! Subcommand bodies and the handling of lines typed while watching.

use std::future::Future;
use std::process::ExitCode;

use anyhow::Context;
use easypanel_adapter_console::MemoryBoard;
use easypanel_adapter_console::render::{render_board, render_notification};
use easypanel_adapter_http_reqwest::ReqwestPanelApi;
use easypanel_app::notification_center::NotificationCenter;
use easypanel_app::ports::{BindingResolver, Confirmer, PanelApi};
use easypanel_app::services::command_dispatcher::{CommandDispatcher, DispatchOutcome};
use easypanel_app::services::status_poller::StatusPoller;
use easypanel_domain::action::ServiceAction;
use easypanel_domain::binding::{Binding, BindingKind};
use easypanel_domain::service::validate_service_name;

use crate::input::{HELP, Input};

pub type Poller = StatusPoller<ReqwestPanelApi, MemoryBoard>;
pub type Dispatcher<C> = CommandDispatcher<ReqwestPanelApi, MemoryBoard, C, NotificationCenter>;

/// Fetch both snapshots once and render the board. Without configured
/// bindings every entry the panel reports is shown.
pub async fn status(poller: &Poller, board: &MemoryBoard) -> anyhow::Result<String> {
    let services = poller
        .api()
        .service_statuses()
        .await
        .context("failed to fetch service statuses")?;
    let stats = poller
        .api()
        .system_stats()
        .await
        .context("failed to fetch system stats")?;

    if board.elements().is_empty() {
        for service in &services {
            board.bind(Binding::service(&service.name));
        }
        for (key, _) in stats.display_entries() {
            board.bind(Binding::stat(key));
        }
    }
    poller.render_services(&services);
    poller.render_stats(&stats);

    Ok(render_board(&board.elements()))
}

/// Send one service command, print the notifications it produced and, on
/// success, the service's refreshed row.
pub async fn run_command<C: Confirmer>(
    dispatcher: &Dispatcher<C>,
    board: &MemoryBoard,
    notifications: &NotificationCenter,
    action: ServiceAction,
    name: &str,
) -> DispatchOutcome {
    let binding = Binding::service(name);
    bind_valid(board, name);

    let outcome = dispatcher.dispatch(name, action).await;
    for notification in notifications.active().iter().rev() {
        println!("{}", render_notification(notification));
    }

    match &outcome {
        DispatchOutcome::Succeeded => {
            if let Some(state) = board.get(&binding) {
                print!("{}", render_board(&[(binding, state)]));
            }
        }
        DispatchOutcome::Cancelled => eprintln!("cancelled"),
        DispatchOutcome::Rejected(_) | DispatchOutcome::Failed(_) | DispatchOutcome::Invalid => {}
    }
    outcome
}

/// Whether the process should exit non-zero after `outcome`.
#[must_use]
pub fn is_failure(outcome: &DispatchOutcome) -> bool {
    matches!(
        outcome,
        DispatchOutcome::Rejected(_) | DispatchOutcome::Failed(_) | DispatchOutcome::Invalid
    )
}

#[must_use]
pub fn exit_code(outcome: &DispatchOutcome) -> ExitCode {
    if is_failure(outcome) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Run one typed line. Returns `false` when the user asked to quit.
pub async fn handle_line<C: Confirmer>(
    line: &str,
    dispatcher: &Dispatcher<C>,
    poller: &Poller,
    board: &MemoryBoard,
    notifications: &NotificationCenter,
) -> bool {
    match line.parse::<Input>() {
        Ok(Input::Service(action, name)) => {
            bind_valid(board, &name);
            let outcome = dispatcher.dispatch(&name, action).await;
            tracing::debug!(?outcome, %action, %name, "command finished");
        }
        Ok(Input::Status) => {
            refresh_bound(poller).await;
            print!("{}", render_board(&board.elements()));
        }
        Ok(Input::Dismiss) => {
            for notification in notifications.active() {
                notifications.dismiss(notification.id);
            }
        }
        Ok(Input::Help) => eprintln!("{HELP}"),
        Ok(Input::Empty) => {}
        Ok(Input::Quit) => return false,
        Err(message) => eprintln!("{message}"),
    }
    true
}

/// Drive `work` to completion unless `interrupt` resolves first, in which
/// case `work` is dropped and `None` returned.
pub async fn until_interrupted<I, W>(interrupt: I, work: W) -> Option<W::Output>
where
    I: Future,
    W: Future,
{
    tokio::select! {
        _ = interrupt => None,
        output = work => Some(output),
    }
}

/// Poll each kind that has at least one bound element.
pub async fn refresh_bound(poller: &Poller) {
    // failures are already logged by the poller
    if poller.resolver().has_bindings(BindingKind::ServiceStatus) {
        let _ = poller.refresh_services().await;
    }
    if poller.resolver().has_bindings(BindingKind::Stat) {
        let _ = poller.refresh_stats().await;
    }
}

/// Show a row for `name` only if a command for it can actually be sent.
fn bind_valid(board: &MemoryBoard, name: &str) {
    if validate_service_name(name).is_ok() {
        board.bind(Binding::service(name));
    }
}
