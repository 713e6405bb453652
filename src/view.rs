use crate::labels::ScreenLabels;
use crate::models::{Task, TaskId};
use crate::store::TaskListState;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub is_done: bool,
    pub is_editing: bool,
    /// The editor text while editing; `None` otherwise.
    pub editor_text: Option<String>,
    /// Rendered under the title when not editing and the details are not blank.
    pub details_preview: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ScreenView {
    pub labels: ScreenLabels,
    pub auto_delete_done: bool,
    pub draft_title: String,
    pub can_add: bool,
    pub rows: Vec<TaskRow>,
}

pub fn task_row(task: &Task, editing: Option<TaskId>, labels: &ScreenLabels) -> TaskRow {
    let is_editing = editing == Some(task.id);
    let details_preview = if !is_editing && !task.details.trim().is_empty() {
        Some(format!("{} {}", labels.details_prefix, task.details))
    } else {
        None
    };
    TaskRow {
        id: task.id,
        title: task.title.clone(),
        is_done: task.is_done,
        is_editing,
        editor_text: is_editing.then(|| task.details.clone()),
        details_preview,
    }
}

pub fn screen_view(state: &TaskListState, labels: ScreenLabels) -> ScreenView {
    let rows = state
        .tasks()
        .iter()
        .map(|task| task_row(task, state.editing_task(), &labels))
        .collect();
    ScreenView {
        auto_delete_done: state.auto_delete_done(),
        draft_title: state.draft_title().to_string(),
        can_add: !state.draft_title().trim().is_empty(),
        rows,
        labels,
    }
}
