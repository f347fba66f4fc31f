//! Records of entries the registry dropped or repaired.
//!
//! The registry never reports these as errors. They are collected per
//! operation and logged, so callers and tests can see what happened.

use super::validator::InvalidReason;
use crate::models::Selection;
use std::fmt;
use tracing::{info, warn};

/// Something the registry dropped, repaired, or ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A bundled layout failed validation and is not offered
    EmbeddedSkipped {
        /// Bundled id
        id: String,
        /// Why validation failed
        reason: InvalidReason,
    },
    /// A custom layout failed validation and was removed from history
    CustomPruned {
        /// Layout uri
        uri: String,
        /// Why validation failed
        reason: InvalidReason,
    },
    /// The oldest custom layout was dropped to respect the history limit
    HistoryEvicted {
        /// Layout uri
        uri: String,
    },
    /// A custom layout could not be added because it failed validation
    CustomRejected {
        /// Layout uri
        uri: String,
        /// Why validation failed
        reason: InvalidReason,
    },
    /// A custom layout could not be added because a bundled layout already
    /// uses its display name
    CustomShadowed {
        /// Layout uri
        uri: String,
        /// The display name in conflict
        name: String,
    },
    /// The persisted selection pointed at a layout that no longer exists
    StaleSelectionCleared {
        /// The stale selection
        selection: Selection,
    },
    /// `select_layout` was called with a position outside the list
    SelectionOutOfRange {
        /// Requested position
        position: usize,
        /// Number of selectable layouts
        total: usize,
    },
    /// Writing to the preference store failed
    StoreWriteFailed {
        /// Error message
        message: String,
    },
}

impl Diagnostic {
    /// Logs the diagnostic at the level matching its severity.
    pub fn log(&self) {
        match self {
            Self::EmbeddedSkipped { .. } | Self::HistoryEvicted { .. } => info!("{self}"),
            _ => warn!("{self}"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmbeddedSkipped { id, reason } => {
                write!(f, "Skipping bundled layout '{id}': {reason}")
            }
            Self::CustomPruned { uri, reason } => {
                write!(f, "Removing custom layout {uri} from history: {reason}")
            }
            Self::HistoryEvicted { uri } => {
                write!(f, "Custom layout history is full, forgetting {uri}")
            }
            Self::CustomRejected { uri, reason } => {
                write!(f, "Not adding custom layout {uri}: {reason}")
            }
            Self::CustomShadowed { uri, name } => write!(
                f,
                "Not adding custom layout {uri}: a bundled layout is already named \"{name}\""
            ),
            Self::StaleSelectionCleared { selection } => match selection {
                Selection::Embedded(id) => {
                    write!(f, "Selected bundled layout '{id}' no longer exists, clearing selection")
                }
                Selection::Custom(uri) => {
                    write!(f, "Selected custom layout {uri} no longer exists, clearing selection")
                }
                Selection::None => f.write_str("Clearing stale selection"),
            },
            Self::SelectionOutOfRange { position, total } => write!(
                f,
                "Ignoring selection of position {position}, only {total} layouts available"
            ),
            Self::StoreWriteFailed { message } => {
                write!(f, "Failed to write preferences: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diagnostic = Diagnostic::CustomPruned {
            uri: "file:///a.yaml".to_string(),
            reason: InvalidReason::Empty,
        };
        assert_eq!(
            diagnostic.to_string(),
            "Removing custom layout file:///a.yaml from history: layout declares no layers"
        );

        let stale = Diagnostic::StaleSelectionCleared {
            selection: Selection::Embedded("xx".to_string()),
        };
        assert!(stale.to_string().contains("'xx'"));
    }
}
