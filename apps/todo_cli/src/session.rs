use std::io::Write;

use anyhow::Context;
use client_core::{AlertBoard, RowAction, SyncController};
use shared::domain::TodoId;
use tokio::io::AsyncBufRead;
use tracing::debug;

use crate::{
    commands::{parse_command, Command, HELP},
    terminal::TerminalView,
};

/// Renders once, loads, then serves commands until `quit` or end of input.
pub async fn run_session<R, W>(
    controller: &SyncController,
    terminal: &TerminalView<R, W>,
    alerts: &AlertBoard,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: Write + Send + 'static,
{
    controller.render().await;
    controller.load().await;
    terminal.print_alerts(&alerts.active());
    terminal.print_line("type 'help' for commands");

    loop {
        terminal.print_prompt();
        let Some(line) = terminal
            .read_line()
            .await
            .context("failed to read command")?
        else {
            break;
        };

        let command = parse_command(&line);
        debug!(?command, "terminal command");
        match command {
            Command::Quit => break,
            Command::Help => terminal.print_line(HELP),
            Command::List => controller.render().await,
            Command::Reload => {
                controller.load().await;
            }
            Command::Add(title) => {
                controller.create(&title).await;
            }
            Command::Toggle(row) => row_action(controller, terminal, row, RowAction::Toggle).await,
            Command::Edit(row) => row_action(controller, terminal, row, RowAction::Edit).await,
            Command::Delete(row) => row_action(controller, terminal, row, RowAction::Delete).await,
        }
        terminal.print_alerts(&alerts.active());
    }

    Ok(())
}

async fn row_action<R, W>(
    controller: &SyncController,
    terminal: &TerminalView<R, W>,
    row: usize,
    make: fn(TodoId) -> RowAction,
) where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: Write + Send + 'static,
{
    match controller.id_at(row - 1).await {
        Some(id) => {
            controller.dispatch(make(id)).await;
        }
        None => terminal.print_line(format_args!("no todo at row {row}")),
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
