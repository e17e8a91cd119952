//! The `ActionSource` trait — actions chosen outside the planners.
//!
//! A human at a terminal, a replay file or a test script all look the same to
//! the simulation: something that is shown the agent's situation and hands
//! back one [`Action`] at a time.  Nothing it returns is trusted; the
//! simulation checks legality with [`Action::apply`] and reports rejections
//! through [`ActionSource::on_rejected`].

use std::collections::VecDeque;

use crate::{Action, AgentView, IllegalAction};

/// Supplier of externally chosen actions.
///
/// Only [`next_action`][Self::next_action] is required.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysEquip;
///
/// impl ActionSource for AlwaysEquip {
///     fn next_action(&mut self, _view: &AgentView<'_>) -> Option<Action> {
///         Some(Action::Equip)
///     }
/// }
/// ```
pub trait ActionSource {
    /// Return the next action, or `None` to resign.
    fn next_action(&mut self, view: &AgentView<'_>) -> Option<Action>;

    /// Called when the action last returned was illegal.  The turn charged
    /// nothing; the source will be asked again on the agent's next turn.
    ///
    /// Default: ignore.
    fn on_rejected(&mut self, _action: &Action, _reason: &IllegalAction) {}
}

/// An [`ActionSource`] that replays a fixed list, then resigns.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    actions:  VecDeque<Action>,
    rejected: Vec<(Action, IllegalAction)>,
}

impl Scripted {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self { actions: actions.into_iter().collect(), rejected: Vec::new() }
    }

    /// Rejections received so far, oldest first.
    pub fn rejected(&self) -> &[(Action, IllegalAction)] {
        &self.rejected
    }
}

impl ActionSource for Scripted {
    fn next_action(&mut self, _view: &AgentView<'_>) -> Option<Action> {
        self.actions.pop_front()
    }

    fn on_rejected(&mut self, action: &Action, reason: &IllegalAction) {
        self.rejected.push((*action, reason.clone()));
    }
}
