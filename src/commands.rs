// Without the runtime only the tests drive the `*_impl` bodies.
#![cfg_attr(not(feature = "app"), allow(dead_code))]

use crate::events::StatePayload;
#[cfg(all(feature = "app", not(test)))]
use crate::events::EVENT_STATE_UPDATED;
use crate::labels::{resolve_language, screen_labels};
#[cfg(any(feature = "app", test))]
use crate::models::TaskId;
use crate::state::AppState;
use crate::store::Intent;
use crate::view::{screen_view, ScreenView};

#[cfg(all(feature = "app", not(test)))]
use tauri::{AppHandle, Emitter, Runtime, State};

#[derive(Debug, serde::Serialize)]
pub struct CommandResult<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

trait CommandCtx {
    fn emit_state_updated(&self, payload: StatePayload);
}

fn ok<T>(data: T) -> CommandResult<T> {
    CommandResult {
        ok: true,
        data: Some(data),
        error: None,
    }
}

#[cfg(all(feature = "app", not(test)))]
struct TauriCommandCtx<'a, R: Runtime> {
    app: &'a AppHandle<R>,
}

#[cfg(all(feature = "app", not(test)))]
impl<R: Runtime> CommandCtx for TauriCommandCtx<'_, R> {
    fn emit_state_updated(&self, payload: StatePayload) {
        if let Err(err) = self.app.emit(EVENT_STATE_UPDATED, payload) {
            log::warn!("commands: failed to emit state update: {err}");
        }
    }
}

/// Runs one intent through the reducer and pushes the result to the screen.
fn dispatch_impl(
    ctx: &impl CommandCtx,
    state: &AppState,
    intent: Intent,
) -> CommandResult<StatePayload> {
    log::debug!("commands: dispatch {intent:?}");
    let next = state.dispatch(intent);
    ctx.emit_state_updated(next.clone());
    ok(next)
}

fn load_state_impl(state: &AppState) -> CommandResult<StatePayload> {
    ok(state.snapshot())
}

fn load_screen_impl(state: &AppState) -> CommandResult<ScreenView> {
    let labels = screen_labels(resolve_language(&state.settings().language));
    ok(screen_view(&state.snapshot(), labels))
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn load_state(state: State<AppState>) -> CommandResult<StatePayload> {
    load_state_impl(state.inner())
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn load_screen(state: State<AppState>) -> CommandResult<ScreenView> {
    load_screen_impl(state.inner())
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn edit_draft(
    app: AppHandle,
    state: State<AppState>,
    text: String,
) -> CommandResult<StatePayload> {
    let ctx = TauriCommandCtx { app: &app };
    dispatch_impl(&ctx, state.inner(), Intent::EditDraft { text })
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn add_task(
    app: AppHandle,
    state: State<AppState>,
    title: String,
) -> CommandResult<StatePayload> {
    let ctx = TauriCommandCtx { app: &app };
    dispatch_impl(&ctx, state.inner(), Intent::AddTask { title })
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn toggle_done(
    app: AppHandle,
    state: State<AppState>,
    task_id: TaskId,
) -> CommandResult<StatePayload> {
    let ctx = TauriCommandCtx { app: &app };
    dispatch_impl(&ctx, state.inner(), Intent::ToggleDone { id: task_id })
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn remove_task(
    app: AppHandle,
    state: State<AppState>,
    task_id: TaskId,
) -> CommandResult<StatePayload> {
    let ctx = TauriCommandCtx { app: &app };
    dispatch_impl(&ctx, state.inner(), Intent::RemoveTask { id: task_id })
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn begin_edit(
    app: AppHandle,
    state: State<AppState>,
    task_id: TaskId,
) -> CommandResult<StatePayload> {
    let ctx = TauriCommandCtx { app: &app };
    dispatch_impl(&ctx, state.inner(), Intent::BeginEdit { id: task_id })
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn update_details(
    app: AppHandle,
    state: State<AppState>,
    task_id: TaskId,
    details: String,
) -> CommandResult<StatePayload> {
    let ctx = TauriCommandCtx { app: &app };
    dispatch_impl(
        &ctx,
        state.inner(),
        Intent::UpdateDetails {
            id: task_id,
            details,
        },
    )
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn finish_edit(app: AppHandle, state: State<AppState>) -> CommandResult<StatePayload> {
    let ctx = TauriCommandCtx { app: &app };
    dispatch_impl(&ctx, state.inner(), Intent::FinishEdit)
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn set_auto_delete(
    app: AppHandle,
    state: State<AppState>,
    enabled: bool,
) -> CommandResult<StatePayload> {
    let ctx = TauriCommandCtx { app: &app };
    dispatch_impl(&ctx, state.inner(), Intent::SetAutoDelete { enabled })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Settings;
    use std::sync::Mutex;

    struct TestCtx {
        emitted: Mutex<Vec<StatePayload>>,
    }

    impl TestCtx {
        fn new() -> Self {
            Self {
                emitted: Mutex::new(Vec::new()),
            }
        }
    }

    impl CommandCtx for TestCtx {
        fn emit_state_updated(&self, payload: StatePayload) {
            self.emitted.lock().unwrap().push(payload);
        }
    }

    fn make_state() -> AppState {
        AppState::new(Settings::default())
    }

    fn add(ctx: &TestCtx, state: &AppState, title: &str) -> TaskId {
        let res = dispatch_impl(
            ctx,
            state,
            Intent::AddTask {
                title: title.into(),
            },
        );
        assert!(res.ok);
        res.data.unwrap().tasks().last().unwrap().id
    }

    #[test]
    fn ok_helper_constructs_expected_shape() {
        let r = ok(123);
        assert!(r.ok);
        assert_eq!(r.data, Some(123));
        assert_eq!(r.error, None);
    }

    #[test]
    fn every_dispatch_emits_the_returned_state() {
        let ctx = TestCtx::new();
        let state = make_state();

        let res = dispatch_impl(
            &ctx,
            &state,
            Intent::EditDraft {
                text: "Buy milk".into(),
            },
        );
        assert!(res.ok);
        assert_eq!(res.data.as_ref().unwrap().draft_title(), "Buy milk");

        let id = add(&ctx, &state, "Buy milk");
        let emitted = ctx.emitted.lock().unwrap();
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[1].draft_title(), "");
        assert_eq!(emitted[1].task(id).unwrap().title, "Buy milk");
    }

    #[test]
    fn blank_add_is_ok_and_changes_nothing() {
        let ctx = TestCtx::new();
        let state = make_state();

        let res = dispatch_impl(&ctx, &state, Intent::AddTask { title: "  ".into() });
        assert!(res.ok);
        assert!(res.data.unwrap().tasks().is_empty());
        // The screen still re-renders after a rejected add.
        assert_eq!(ctx.emitted.lock().unwrap().len(), 1);
    }

    #[test]
    fn auto_delete_cascade_through_commands() {
        let ctx = TestCtx::new();
        let state = make_state();
        let a = add(&ctx, &state, "A");
        let b = add(&ctx, &state, "B");

        dispatch_impl(&ctx, &state, Intent::ToggleDone { id: a });
        dispatch_impl(&ctx, &state, Intent::SetAutoDelete { enabled: true });
        let res = dispatch_impl(&ctx, &state, Intent::ToggleDone { id: b });
        assert!(res.ok);
        assert!(res.data.unwrap().tasks().is_empty());
        assert!(state.snapshot().tasks().is_empty());
    }

    #[test]
    fn edit_flow_through_commands() {
        let ctx = TestCtx::new();
        let state = make_state();
        let a = add(&ctx, &state, "A");

        dispatch_impl(&ctx, &state, Intent::BeginEdit { id: a });
        let res = dispatch_impl(
            &ctx,
            &state,
            Intent::UpdateDetails {
                id: a,
                details: "note".into(),
            },
        );
        let payload = res.data.unwrap();
        assert_eq!(payload.editing_task(), Some(a));
        assert_eq!(payload.task(a).unwrap().details, "note");

        let res = dispatch_impl(&ctx, &state, Intent::RemoveTask { id: a });
        assert_eq!(res.data.unwrap().editing_task(), None);

        let res = dispatch_impl(&ctx, &state, Intent::FinishEdit);
        assert!(res.ok);
        assert_eq!(res.data.unwrap().editing_task(), None);
    }

    #[test]
    fn load_state_reads_without_emitting() {
        let ctx = TestCtx::new();
        let state = make_state();
        add(&ctx, &state, "A");
        let emitted_before = ctx.emitted.lock().unwrap().len();

        let res = load_state_impl(&state);
        assert!(res.ok);
        assert_eq!(res.data.unwrap().tasks().len(), 1);
        assert_eq!(ctx.emitted.lock().unwrap().len(), emitted_before);
    }

    #[test]
    fn load_screen_uses_configured_language() {
        let ctx = TestCtx::new();
        let settings = Settings {
            language: "en".into(),
            auto_delete_done: true,
        };
        let state = AppState::new(settings);
        let a = add(&ctx, &state, "A");
        dispatch_impl(
            &ctx,
            &state,
            Intent::UpdateDetails {
                id: a,
                details: "note".into(),
            },
        );

        let res = load_screen_impl(&state);
        assert!(res.ok);
        let view = res.data.unwrap();
        assert_eq!(view.labels.add, "Add");
        assert!(view.auto_delete_done);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].details_preview.as_deref(), Some("📝 note"));
    }

    #[test]
    fn command_result_serializes_payload_shape() {
        let ctx = TestCtx::new();
        let state = make_state();
        add(&ctx, &state, "A");

        let value = serde_json::to_value(load_state_impl(&state)).unwrap();
        assert_eq!(value["ok"], serde_json::json!(true));
        assert_eq!(value["error"], serde_json::Value::Null);
        assert_eq!(value["data"]["tasks"][0]["title"], serde_json::json!("A"));
        assert_eq!(value["data"]["auto_delete_done"], serde_json::json!(false));
    }
}
