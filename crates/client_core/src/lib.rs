//! Client side of the todo collection: talks to the remote store, owns the
//! local list and drives the view and alert boundaries.

pub mod controller;
pub mod list_state;
pub mod notification;
pub mod presentation;
pub mod remote;

pub use controller::{ActionOutcome, SyncController};
pub use list_state::{TodoList, TodoPatch};
pub use notification::{AlertBoard, Notification, Notifier, Severity, DEFAULT_ALERT_DURATION};
pub use presentation::{render_rows, Interaction, ListView, RowAction, TodoRow};
pub use remote::{HttpRemoteStore, RemoteStore, StoreOperation};
