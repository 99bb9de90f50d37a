//! ToolContext - per-session execution context for tools

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use foodcatalog::FoodCatalog;

use crate::state::MealPlannerState;

/// Shared context handed to every tool call in a session.
///
/// One conversation owns one context: the state sits behind a mutex only
/// because tool execution is async, not because calls race - the
/// orchestration layer serializes tool calls within a session. The catalog
/// is read-only and shared across sessions.
#[derive(Clone)]
pub struct ToolContext {
    /// Session identifier (mirrors the state's id)
    pub session_id: String,
    /// The session's mutable planner state
    pub state: Arc<Mutex<MealPlannerState>>,
    /// Process-wide read-only food catalog
    pub catalog: Arc<FoodCatalog>,
}

impl ToolContext {
    /// Start a fresh session against a shared catalog
    pub fn new(catalog: Arc<FoodCatalog>) -> Self {
        let state = MealPlannerState::new();
        let session_id = state.id.clone();
        debug!(%session_id, "ToolContext::new: session created");
        Self {
            session_id,
            state: Arc::new(Mutex::new(state)),
            catalog,
        }
    }

    /// Resume a session from a checkpointed state
    pub fn with_state(state: MealPlannerState, catalog: Arc<FoodCatalog>) -> Self {
        let session_id = state.id.clone();
        debug!(%session_id, "ToolContext::with_state: session resumed");
        Self {
            session_id,
            state: Arc::new(Mutex::new(state)),
            catalog,
        }
    }

    /// Snapshot the current state (for checkpointing or prompt context)
    pub async fn snapshot(&self) -> MealPlannerState {
        self.state.lock().await.clone()
    }
}
