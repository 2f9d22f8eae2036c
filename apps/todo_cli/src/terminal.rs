//! Line-oriented terminal front end: renders rows, answers confirm/prompt
//! requests from the same input stream the commands come from.

use std::{
    fmt,
    io::{self, Write},
    sync::Mutex as StdMutex,
};

use async_trait::async_trait;
use client_core::{Interaction, ListView, Notification, Severity, TodoRow};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, Lines},
    sync::Mutex,
};

pub struct TerminalView<R, W> {
    input: Mutex<Lines<R>>,
    output: StdMutex<W>,
}

impl<R, W> TerminalView<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: Write + Send + 'static,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input.lines()),
            output: StdMutex::new(output),
        }
    }

    /// Next input line, `None` at end of input.
    pub async fn read_line(&self) -> io::Result<Option<String>> {
        self.input.lock().await.next_line().await
    }

    pub fn print_line(&self, line: impl fmt::Display) {
        self.write(format_args!("{line}\n"));
    }

    pub fn print_prompt(&self) {
        self.write(format_args!("> "));
    }

    pub fn print_alerts(&self, alerts: &[Notification]) {
        for alert in alerts {
            let tag = match alert.severity {
                Severity::Success => "ok",
                Severity::Error => "error",
            };
            self.write(format_args!("[{tag}] {}\n", alert.message));
        }
    }

    fn write(&self, args: fmt::Arguments<'_>) {
        let mut out = self
            .output
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // A closed terminal is not worth failing an action over.
        let _ = out.write_fmt(args).and_then(|()| out.flush());
    }

    async fn ask(&self, question: String) -> Option<String> {
        self.write(format_args!("{question}"));
        match self.read_line().await {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read answer from terminal");
                None
            }
        }
    }
}

pub fn format_row(position: usize, row: &TodoRow) -> String {
    let mark = if row.completed { 'x' } else { ' ' };
    format!("{position:>3}. [{mark}] {}", row.title)
}

impl<R, W> ListView for TerminalView<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: Write + Send + 'static,
{
    fn render(&self, rows: &[TodoRow]) {
        if rows.is_empty() {
            self.print_line("  (no todos)");
            return;
        }
        for (index, row) in rows.iter().enumerate() {
            self.print_line(format_row(index + 1, row));
        }
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            self.print_line("loading...");
        }
    }

    // Submitted lines are consumed by the reader; there is no draft to clear.
    fn clear_input(&self) {}
}

#[async_trait]
impl<R, W> Interaction for TerminalView<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: Write + Send + 'static,
{
    async fn confirm(&self, message: &str) -> bool {
        let answer = self.ask(format!("{message} [y/N] ")).await;
        matches!(
            answer.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
            Some("y" | "yes")
        )
    }

    async fn prompt(&self, message: &str, initial: &str) -> Option<String> {
        let answer = self
            .ask(format!("{message} (was \"{initial}\", empty keeps it) "))
            .await?;
        let answer = answer.trim();
        if answer.is_empty() {
            None
        } else {
            Some(answer.to_string())
        }
    }
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
