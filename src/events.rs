use crate::store::TaskListState;

pub const EVENT_STATE_UPDATED: &str = "state_updated";

pub type StatePayload = TaskListState;
