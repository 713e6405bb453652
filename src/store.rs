//! The task-list reducer.
//!
//! Every transition consumes the current [`TaskListState`] and returns the next
//! one. Nothing here touches the runtime, so the screen shell can hold a single
//! instance and swap it after each intent.

use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TaskListState {
    tasks: Vec<Task>,
    editing_task: Option<TaskId>,
    auto_delete_done: bool,
    draft_title: String,
    #[serde(skip)]
    next_id: u64,
}

impl Default for TaskListState {
    fn default() -> Self {
        Self::new(false)
    }
}

/// One user action forwarded by the screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    EditDraft { text: String },
    AddTask { title: String },
    ToggleDone { id: TaskId },
    RemoveTask { id: TaskId },
    BeginEdit { id: TaskId },
    UpdateDetails { id: TaskId, details: String },
    FinishEdit,
    SetAutoDelete { enabled: bool },
}

impl TaskListState {
    pub fn new(auto_delete_done: bool) -> Self {
        Self {
            tasks: Vec::new(),
            editing_task: None,
            auto_delete_done,
            draft_title: String::new(),
            next_id: 1,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn editing_task(&self) -> Option<TaskId> {
        self.editing_task
    }

    pub fn auto_delete_done(&self) -> bool {
        self.auto_delete_done
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn apply(self, intent: Intent) -> Self {
        match intent {
            Intent::EditDraft { text } => self.edit_draft(text),
            Intent::AddTask { title } => self.add_task(&title),
            Intent::ToggleDone { id } => self.toggle_done(id),
            Intent::RemoveTask { id } => self.remove_task(id),
            Intent::BeginEdit { id } => self.begin_edit(id),
            Intent::UpdateDetails { id, details } => self.update_details(id, details),
            Intent::FinishEdit => self.finish_edit(),
            Intent::SetAutoDelete { enabled } => self.set_auto_delete(enabled),
        }
    }

    pub fn edit_draft(mut self, text: impl Into<String>) -> Self {
        self.draft_title = text.into();
        self
    }

    /// Blank titles are dropped silently and leave the draft in place.
    pub fn add_task(mut self, title: &str) -> Self {
        if title.trim().is_empty() {
            return self;
        }
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, title));
        self.draft_title.clear();
        self
    }

    /// Flips the target, then (with auto-delete on) sweeps every done task,
    /// including ones completed before this call. The sweep runs even when the
    /// id is stale.
    pub fn toggle_done(mut self, id: TaskId) -> Self {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.is_done = !task.is_done;
        }
        if self.auto_delete_done {
            self.tasks.retain(|task| !task.is_done);
            self.release_missing_editor();
        }
        self
    }

    pub fn remove_task(mut self, id: TaskId) -> Self {
        self.tasks.retain(|task| task.id != id);
        self.release_missing_editor();
        self
    }

    /// Switching targets mid-edit is allowed; details are already committed per
    /// keystroke so nothing is lost. Unknown ids leave the state unchanged.
    pub fn begin_edit(mut self, id: TaskId) -> Self {
        if self.task(id).is_some() {
            self.editing_task = Some(id);
        }
        self
    }

    pub fn update_details(mut self, id: TaskId, details: impl Into<String>) -> Self {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.details = details.into();
        }
        self
    }

    pub fn finish_edit(mut self) -> Self {
        self.editing_task = None;
        self
    }

    /// Only affects later toggles; already-done tasks stay.
    pub fn set_auto_delete(mut self, enabled: bool) -> Self {
        self.auto_delete_done = enabled;
        self
    }

    fn release_missing_editor(&mut self) {
        if let Some(id) = self.editing_task {
            if self.task(id).is_none() {
                self.editing_task = None;
            }
        }
    }
}
