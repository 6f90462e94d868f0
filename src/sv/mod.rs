//! Service Virtualization value types.
//!
//! Currently just the performance-model selection a deploy task reads from
//! its virtual-service configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

// ─── Selection tokens (external contract) ─────────────────────────────────────

// The only accepted external representations of a selection mode. Anything
// else is ignored by `set_selection_type`.
pub const TOKEN_BY_NAME: &str = "BY_NAME";
pub const TOKEN_NONE: &str = "NONE";
pub const TOKEN_OFFLINE: &str = "OFFLINE";
pub const TOKEN_DEFAULT: &str = "DEFAULT";

/// Display name reported for the offline pseudo-model.
pub const OFFLINE_MODEL_NAME: &str = "Offline";

// ─── SelectionType ────────────────────────────────────────────────────────────

/// How a performance model is chosen for a virtual service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionType {
    /// An explicitly named model.
    ByName,
    /// No performance model.
    None,
    /// The service runs offline.
    Offline,
    /// First model in alphabetical order by model name, picked at use time
    /// by the consumer — this type only signals the mode.
    Default,
}

impl SelectionType {
    /// Map an external token to a selection type; unknown tokens map to
    /// `Option::None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            TOKEN_BY_NAME => Some(SelectionType::ByName),
            TOKEN_NONE => Some(SelectionType::None),
            TOKEN_OFFLINE => Some(SelectionType::Offline),
            TOKEN_DEFAULT => Some(SelectionType::Default),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            SelectionType::ByName => TOKEN_BY_NAME,
            SelectionType::None => TOKEN_NONE,
            SelectionType::Offline => TOKEN_OFFLINE,
            SelectionType::Default => TOKEN_DEFAULT,
        }
    }
}

// ─── PerformanceModelSelection ────────────────────────────────────────────────

/// Selection mode plus (for [`SelectionType::ByName`]) the model name.
///
/// Constructed once per virtual-service configuration read. The model name
/// is trimmed at construction and immutable afterwards; only the selection
/// type may be reassigned, via [`set_selection_type`].
///
/// [`set_selection_type`]: PerformanceModelSelection::set_selection_type
#[derive(Debug, Clone)]
pub struct PerformanceModelSelection {
    selection_type: SelectionType,
    performance_model: String,
}

impl PerformanceModelSelection {
    pub fn new(selection_type: SelectionType, performance_model: &str) -> Self {
        Self {
            selection_type,
            performance_model: performance_model.trim().to_string(),
        }
    }

    pub fn selection_type(&self) -> SelectionType {
        self.selection_type
    }

    /// Reassign the selection type from an external token.
    ///
    /// Unknown tokens leave the current type unchanged. This matches the
    /// stored-configuration contract: failing hard here would reject
    /// otherwise-loadable task configs (see DESIGN.md).
    pub fn set_selection_type(&mut self, token: &str) {
        match SelectionType::from_token(token) {
            Some(selection_type) => self.selection_type = selection_type,
            None => {
                debug!(token, "unrecognized selection token — keeping current mode");
            }
        }
    }

    /// The stored model name, or `None` when blank.
    pub fn performance_model(&self) -> Option<&str> {
        (!self.performance_model.is_empty()).then_some(self.performance_model.as_str())
    }

    pub fn is_selected(&self, token: &str) -> bool {
        SelectionType::from_token(token) == Some(self.selection_type)
    }

    pub fn is_none_selected(&self) -> bool {
        self.selection_type == SelectionType::None
    }

    pub fn is_default_selected(&self) -> bool {
        self.selection_type == SelectionType::Default
    }

    /// Human-readable rendering for logs and the host UI.
    pub fn display_value(&self) -> &str {
        match self.selection_type {
            SelectionType::ByName => self.performance_model.as_str(),
            SelectionType::None => "<none>",
            SelectionType::Offline => "<offline>",
            SelectionType::Default => "<default>",
        }
    }

    /// The model name the deploy step should request from the server.
    ///
    /// `Offline` reports the fixed pseudo-model name; `None`/`Default`
    /// report nothing (the default pick happens at use time, elsewhere).
    pub fn selected_model_name(&self) -> Option<&str> {
        match self.selection_type {
            SelectionType::ByName => self.performance_model(),
            SelectionType::Offline => Some(OFFLINE_MODEL_NAME),
            SelectionType::None | SelectionType::Default => None,
        }
    }
}

impl fmt::Display for PerformanceModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_trims_and_reports_the_model() {
        let selection = PerformanceModelSelection::new(SelectionType::ByName, "  Foo  ");
        assert_eq!(selection.selected_model_name(), Some("Foo"));
        assert_eq!(selection.display_value(), "Foo");
    }

    #[test]
    fn none_reports_no_model_regardless_of_stored_name() {
        let selection = PerformanceModelSelection::new(SelectionType::None, "Ignored");
        assert_eq!(selection.selected_model_name(), None);
        assert_eq!(selection.display_value(), "<none>");
        assert!(selection.is_none_selected());
    }

    #[test]
    fn offline_reports_fixed_pseudo_model() {
        let selection = PerformanceModelSelection::new(SelectionType::Offline, "");
        assert_eq!(selection.selected_model_name(), Some("Offline"));
        assert_eq!(selection.display_value(), "<offline>");
    }

    #[test]
    fn default_signals_mode_only() {
        let selection = PerformanceModelSelection::new(SelectionType::Default, "");
        assert!(selection.is_default_selected());
        assert_eq!(selection.selected_model_name(), None);
        assert_eq!(selection.display_value(), "<default>");
    }

    #[test]
    fn blank_by_name_model_reads_as_no_model() {
        let selection = PerformanceModelSelection::new(SelectionType::ByName, "   ");
        assert_eq!(selection.performance_model(), None);
        assert_eq!(selection.selected_model_name(), None);
    }

    #[test]
    fn set_selection_type_maps_known_tokens() {
        let mut selection = PerformanceModelSelection::new(SelectionType::None, "");
        selection.set_selection_type(TOKEN_OFFLINE);
        assert_eq!(selection.selection_type(), SelectionType::Offline);
        selection.set_selection_type(TOKEN_DEFAULT);
        assert!(selection.is_default_selected());
    }

    #[test]
    fn unknown_token_leaves_type_unchanged() {
        let mut selection = PerformanceModelSelection::new(SelectionType::ByName, "Foo");
        selection.set_selection_type("SOMETIMES");
        assert_eq!(selection.selection_type(), SelectionType::ByName);
        selection.set_selection_type("");
        assert_eq!(selection.selection_type(), SelectionType::ByName);
    }

    #[test]
    fn is_selected_matches_on_token_vocabulary() {
        let selection = PerformanceModelSelection::new(SelectionType::Offline, "");
        assert!(selection.is_selected(TOKEN_OFFLINE));
        assert!(!selection.is_selected(TOKEN_NONE));
        assert!(!selection.is_selected("not-a-token"));
    }
}
