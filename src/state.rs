use std::sync::{Arc, Mutex};

use crate::models::Settings;
use crate::store::{Intent, TaskListState};

/// The screen's single mutable instance. Commands may run on any runtime thread,
/// so the reducer state sits behind a mutex and is swapped once per intent.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let screen = TaskListState::new(settings.auto_delete_done);
        Self {
            inner: Arc::new(Mutex::new(AppData { screen, settings })),
        }
    }

    pub fn snapshot(&self) -> TaskListState {
        let guard = self.inner.lock().expect("state poisoned");
        guard.screen.clone()
    }

    pub fn dispatch(&self, intent: Intent) -> TaskListState {
        let mut guard = self.inner.lock().expect("state poisoned");
        let current = std::mem::take(&mut guard.screen);
        guard.screen = current.apply(intent);
        guard.screen.clone()
    }

    pub fn settings(&self) -> Settings {
        let guard = self.inner.lock().expect("state poisoned");
        guard.settings.clone()
    }
}

#[derive(Debug)]
struct AppData {
    screen: TaskListState,
    settings: Settings,
}
