//! Sync controller: one entry point per user action.
//!
//! Every action validates locally, calls the remote store, and only then
//! mutates the owned [`TodoList`], re-renders and reports the outcome. A failed
//! call leaves the list exactly as it was.

use std::{collections::HashSet, sync::Arc};

use shared::{
    domain::TodoId,
    error::TransportError,
    protocol::{Todo, TodoDraft},
};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::{
    list_state::{TodoList, TodoPatch},
    notification::{Notification, Notifier},
    presentation::{render_rows, Interaction, ListView, RowAction, TodoRow},
    remote::RemoteStore,
};

pub const EMPTY_TITLE_MESSAGE: &str = "Please enter a todo title";
pub const NOT_FOUND_MESSAGE: &str = "Todo not found";
pub const BUSY_MESSAGE: &str = "Another change to this todo is still in progress";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this todo?";
pub const RENAME_PROMPT: &str = "Update todo:";

const LOADED_MESSAGE: &str = "Todos loaded successfully";
const CREATED_MESSAGE: &str = "Todo created successfully";
const UPDATED_MESSAGE: &str = "Todo updated successfully";
const TOGGLED_MESSAGE: &str = "Todo status updated successfully";
const DELETED_MESSAGE: &str = "Todo deleted successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The store acknowledged the change and the list was updated.
    Applied,
    /// The user backed out (declined confirmation, empty or cancelled input).
    Cancelled,
    /// A local precondition failed; nothing was sent.
    Rejected(&'static str),
    /// The store call failed; the list is unchanged.
    Failed(TransportError),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

#[derive(Default)]
struct ControllerState {
    todos: TodoList,
    inflight: HashSet<TodoId>,
}

pub struct SyncController {
    store: Arc<dyn RemoteStore>,
    view: Arc<dyn ListView>,
    notifier: Arc<dyn Notifier>,
    interaction: Arc<dyn Interaction>,
    inner: Mutex<ControllerState>,
}

impl SyncController {
    pub fn new(
        store: Arc<dyn RemoteStore>,
        view: Arc<dyn ListView>,
        notifier: Arc<dyn Notifier>,
        interaction: Arc<dyn Interaction>,
    ) -> Self {
        Self {
            store,
            view,
            notifier,
            interaction,
            inner: Mutex::new(ControllerState::default()),
        }
    }

    pub async fn rows(&self) -> Vec<TodoRow> {
        render_rows(&self.inner.lock().await.todos)
    }

    pub async fn snapshot(&self) -> TodoList {
        self.inner.lock().await.todos.clone()
    }

    /// Id of the record rendered at `index` (zero based).
    pub async fn id_at(&self, index: usize) -> Option<TodoId> {
        self.inner.lock().await.todos.id_at(index).cloned()
    }

    /// Pushes the current rows to the view without touching the store.
    pub async fn render(&self) {
        let state = self.inner.lock().await;
        self.view.render(&render_rows(&state.todos));
    }

    pub async fn dispatch(&self, action: RowAction) -> ActionOutcome {
        match action {
            RowAction::Toggle(id) => self.toggle(&id).await,
            RowAction::Edit(id) => self.edit(&id).await,
            RowAction::Delete(id) => self.delete(&id).await,
        }
    }

    pub async fn load(&self) -> ActionOutcome {
        self.view.set_loading(true);
        let result = self.store.list_all().await;
        let outcome = self
            .complete("load", None, result, LOADED_MESSAGE, |todos, records| {
                todos.replace_all(records)
            })
            .await;
        self.view.set_loading(false);
        outcome
    }

    pub async fn create(&self, title: &str) -> ActionOutcome {
        let title = title.trim();
        if title.is_empty() {
            return self.reject("create", None, EMPTY_TITLE_MESSAGE);
        }

        self.view.set_loading(true);
        let result = self.store.create(&TodoDraft::new(title)).await;
        let outcome = self
            .complete("create", None, result, CREATED_MESSAGE, |todos, record| {
                todos.prepend(record)
            })
            .await;
        if outcome.is_applied() {
            self.view.clear_input();
        }
        self.view.set_loading(false);
        outcome
    }

    /// Asks the user for a new title, then renames.
    pub async fn edit(&self, id: &TodoId) -> ActionOutcome {
        let current = match self.available("edit", id).await {
            Ok(todo) => todo.title,
            Err(outcome) => return outcome,
        };
        let answer = self.interaction.prompt(RENAME_PROMPT, &current).await;
        self.rename(id, answer.as_deref()).await
    }

    /// `None` is a cancelled prompt. Cancelled or empty input changes nothing.
    pub async fn rename(&self, id: &TodoId, new_title: Option<&str>) -> ActionOutcome {
        let Some(new_title) = new_title.map(str::trim).filter(|title| !title.is_empty()) else {
            return ActionOutcome::Cancelled;
        };

        let (record, patch) = match self
            .begin("rename", id, |_| TodoPatch::title(new_title))
            .await
        {
            Ok(prepared) => prepared,
            Err(outcome) => return outcome,
        };

        self.view.set_loading(true);
        let result = self.store.update(id, &record).await;
        let outcome = self
            .complete("rename", Some(id), result, UPDATED_MESSAGE, |todos, _| {
                todos.patch(id, &patch);
            })
            .await;
        self.view.set_loading(false);
        outcome
    }

    pub async fn toggle(&self, id: &TodoId) -> ActionOutcome {
        let (record, patch) = match self
            .begin("toggle", id, |todo| TodoPatch::completed(!todo.completed))
            .await
        {
            Ok(prepared) => prepared,
            Err(outcome) => return outcome,
        };

        self.view.set_loading(true);
        let result = self.store.update(id, &record).await;
        let outcome = self
            .complete("toggle", Some(id), result, TOGGLED_MESSAGE, |todos, _| {
                todos.patch(id, &patch);
            })
            .await;
        self.view.set_loading(false);
        outcome
    }

    pub async fn delete(&self, id: &TodoId) -> ActionOutcome {
        if let Err(outcome) = self.available("delete", id).await {
            return outcome;
        }
        if !self.interaction.confirm(DELETE_CONFIRMATION).await {
            info!(%id, "delete declined");
            return ActionOutcome::Cancelled;
        }
        if let Err(outcome) = self.begin("delete", id, |_| TodoPatch::default()).await {
            return outcome;
        }

        self.view.set_loading(true);
        let result = self.store.remove(id).await;
        let outcome = self
            .complete("delete", Some(id), result, DELETED_MESSAGE, |todos, ()| {
                todos.remove(id);
            })
            .await;
        self.view.set_loading(false);
        outcome
    }

    /// Current record, checked before the user is asked anything. `begin`
    /// checks again once the answer is in.
    async fn available(&self, action: &'static str, id: &TodoId) -> Result<Todo, ActionOutcome> {
        let state = self.inner.lock().await;
        let Some(todo) = state.todos.get(id).cloned() else {
            return Err(self.reject(action, Some(id), NOT_FOUND_MESSAGE));
        };
        if state.inflight.contains(id) {
            return Err(self.reject(action, Some(id), BUSY_MESSAGE));
        }
        Ok(todo)
    }

    /// Marks `id` as in flight and returns the full record to send together
    /// with the patch that produced it. Fails if the record is gone or already
    /// being changed.
    async fn begin(
        &self,
        action: &'static str,
        id: &TodoId,
        make_patch: impl FnOnce(&Todo) -> TodoPatch,
    ) -> Result<(Todo, TodoPatch), ActionOutcome> {
        let mut state = self.inner.lock().await;
        let prepared = state.todos.get(id).map(|current| {
            let patch = make_patch(current);
            (patch.apply_to(current), patch)
        });
        let Some(prepared) = prepared else {
            return Err(self.reject(action, Some(id), NOT_FOUND_MESSAGE));
        };
        if !state.inflight.insert(id.clone()) {
            return Err(self.reject(action, Some(id), BUSY_MESSAGE));
        }
        Ok(prepared)
    }

    async fn complete<T>(
        &self,
        action: &'static str,
        id: Option<&TodoId>,
        result: Result<T, TransportError>,
        success_message: &'static str,
        apply: impl FnOnce(&mut TodoList, T),
    ) -> ActionOutcome {
        let mut state = self.inner.lock().await;
        if let Some(id) = id {
            state.inflight.remove(id);
        }

        match result {
            Ok(value) => {
                apply(&mut state.todos, value);
                // Rendered under the lock so concurrent actions cannot paint out of order.
                self.view.render(&render_rows(&state.todos));
                info!(action, id = ?id, count = state.todos.len(), "todo action applied");
                drop(state);
                self.notifier.notify(Notification::success(success_message));
                ActionOutcome::Applied
            }
            Err(err) => {
                drop(state);
                error!(action, id = ?id, error = %err, kind = ?err.kind, "todo action failed");
                self.notifier.notify(Notification::error(err.message.clone()));
                ActionOutcome::Failed(err)
            }
        }
    }

    fn reject(
        &self,
        action: &'static str,
        id: Option<&TodoId>,
        message: &'static str,
    ) -> ActionOutcome {
        warn!(action, id = ?id, reason = message, "todo action rejected");
        self.notifier.notify(Notification::error(message));
        ActionOutcome::Rejected(message)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
