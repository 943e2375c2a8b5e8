pub mod controls;
pub mod readings;

use super::events::Action;

/// Outcome of offering an input event to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Not handled; fall through to the next handler.
    Ignored,
    /// Handled entirely inside the view.
    Consumed,
    /// Handled, and the app should run this action.
    Action(Action),
}
