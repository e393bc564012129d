//! Flow states and the trail of states a run has visited

use std::fmt;

/// Steps of one run, in the only order they can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FlowState {
    Idle,
    LoggedIn,
    Searched,
    AppSelected,
    DepotsListed,
    DepotSelected,
    ManifestsListed,
    ManifestSelected,
    Done,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowState::Idle => "idle",
            FlowState::LoggedIn => "logged-in",
            FlowState::Searched => "searched",
            FlowState::AppSelected => "app-selected",
            FlowState::DepotsListed => "depots-listed",
            FlowState::DepotSelected => "depot-selected",
            FlowState::ManifestsListed => "manifests-listed",
            FlowState::ManifestSelected => "manifest-selected",
            FlowState::Done => "done",
        };
        f.write_str(name)
    }
}

/// Forward-only record of visited states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTrail {
    visited: Vec<FlowState>,
}

impl Default for StateTrail {
    fn default() -> Self {
        Self {
            visited: vec![FlowState::Idle],
        }
    }
}

impl StateTrail {
    pub fn current(&self) -> FlowState {
        self.visited.last().copied().unwrap_or(FlowState::Idle)
    }

    /// Move to `next`. Transitions that do not move forward are ignored.
    pub fn advance(&mut self, next: FlowState) -> bool {
        let current = self.current();
        if next <= current {
            tracing::warn!(%current, %next, "Ignoring backward flow transition");
            return false;
        }
        tracing::debug!(%current, %next, "Flow transition");
        self.visited.push(next);
        true
    }

    pub fn visited(&self) -> &[FlowState] {
        &self.visited
    }

    pub fn into_visited(self) -> Vec<FlowState> {
        self.visited
    }
}
