//! View layer: the mutually exclusive view states and the presentation seam.

pub mod terminal;

use crate::optimize_client::OptimizationResult;
use crate::submission::validate::ValidationError;

/// Empty-state line for the changes section.
pub const NO_CHANGES_PLACEHOLDER: &str = "No specific changes documented.";
/// Empty-state line for the recommendations section.
pub const NO_RECOMMENDATIONS_PLACEHOLDER: &str = "No additional recommendations at this time.";

/// Which of the four views is on screen. A single enum value, so exactly one
/// view is visible and mutual exclusion holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    /// Owns the decoded result for as long as it is displayed; replaced
    /// wholesale by the next submission.
    Results(OptimizationResult),
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Presentation seam. The controller reports transitions; implementations
/// decide how they look. Cosmetics (spinners, counters, highlights) belong
/// behind this trait, never in the controller.
pub trait Presenter: Send {
    fn show_loading(&mut self);
    fn show_results(&mut self, result: &OptimizationResult);
    fn show_error(&mut self, message: &str);
    /// Validation failures render inline next to the form; the active view
    /// does not change.
    fn show_validation_error(&mut self, error: &ValidationError);
    fn reset(&mut self);
}

/// Renders a list-valued result field: one line per item in input order, or
/// the section's empty-state placeholder.
pub fn render_list(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items
            .iter()
            .map(|item| format!("  - {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list_empty_uses_placeholder() {
        assert_eq!(render_list(&[], NO_CHANGES_PLACEHOLDER), NO_CHANGES_PLACEHOLDER);
    }

    #[test]
    fn test_render_list_preserves_order() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render_list(&items, NO_CHANGES_PLACEHOLDER), "  - a\n  - b");
    }

    #[test]
    fn test_only_loading_is_loading() {
        assert!(ViewState::Loading.is_loading());
        assert!(!ViewState::Idle.is_loading());
        assert!(!ViewState::Error("boom".to_string()).is_loading());
    }
}
