use super::*;
use std::sync::Arc;

use shared::domain::TodoId;

/// Cloneable sink so the test can read what the view wrote.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<StdMutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("lock").clone()).expect("utf8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn view(input: &'static str) -> (TerminalView<&'static [u8], SharedBuffer>, SharedBuffer) {
    let out = SharedBuffer::default();
    (TerminalView::new(input.as_bytes(), out.clone()), out)
}

fn row(id: i64, title: &str, completed: bool) -> TodoRow {
    TodoRow {
        id: TodoId::Number(id),
        title: title.to_string(),
        completed,
    }
}

#[test]
fn renders_numbered_rows_with_checkboxes() {
    let (view, out) = view("");
    view.render(&[row(1, "first", true), row(2, "second", false)]);

    assert_eq!(out.contents(), "  1. [x] first\n  2. [ ] second\n");
}

#[test]
fn renders_placeholder_for_empty_list() {
    let (view, out) = view("");
    view.render(&[]);
    assert_eq!(out.contents(), "  (no todos)\n");
}

#[test]
fn alerts_are_tagged_by_severity() {
    let (view, out) = view("");
    view.print_alerts(&[
        Notification::success("Todo created successfully"),
        Notification::error("Failed to delete todo"),
    ]);
    assert_eq!(
        out.contents(),
        "[ok] Todo created successfully\n[error] Failed to delete todo\n"
    );
}

#[tokio::test]
async fn confirm_accepts_yes_and_treats_anything_else_as_no() {
    let (view, out) = view("Y\nno\n");
    assert!(view.confirm("Delete?").await);
    assert!(!view.confirm("Delete?").await);
    // End of input declines.
    assert!(!view.confirm("Delete?").await);
    assert!(out.contents().starts_with("Delete? [y/N] "));
}

#[tokio::test]
async fn prompt_returns_trimmed_answer_or_none() {
    let (view, _out) = view("  new title  \n\n");
    assert_eq!(
        view.prompt("Update todo:", "old").await,
        Some("new title".to_string())
    );
    assert_eq!(view.prompt("Update todo:", "old").await, None);
    assert_eq!(view.prompt("Update todo:", "old").await, None);
}

#[tokio::test]
async fn read_line_reports_end_of_input() {
    let (view, _out) = view("one\n");
    assert_eq!(view.read_line().await.expect("read"), Some("one".to_string()));
    assert_eq!(view.read_line().await.expect("read"), None);
}
