pub mod engine;
pub mod pipeline;
pub mod policy;
pub mod types;
pub mod web;

use types::ActionRule;

/// Fully compiled card-action policy, built once at process start.
/// Immutable after construction — every query handler shares it read-only,
/// so no synchronization is required.
#[derive(Debug)]
pub struct ActionPolicy {
    /// One rule per action, in table order. Lookups are by name; result
    /// ordering is imposed at resolve time, not here.
    pub rules: Vec<ActionRule>,
}

impl ActionPolicy {
    pub fn action_count(&self) -> usize {
        self.rules.len()
    }

    pub fn rule(&self, action: &str) -> Option<&ActionRule> {
        self.rules.iter().find(|r| r.name == action)
    }
}
