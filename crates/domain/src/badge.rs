//! Status badge: the label and colour category an element shows for a state.

use std::fmt;

/// Colour category of a rendered badge.
///
/// Maps onto the panel's `bg-*` CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Success,
    Danger,
    Warning,
    Secondary,
}

impl Category {
    /// Lowercase category name (`success`, `danger`, …).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Secondary => "secondary",
        }
    }

    /// CSS background class applied next to the base `badge` class.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-success",
            Self::Danger => "bg-danger",
            Self::Warning => "bg-warning",
            Self::Secondary => "bg-secondary",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visible label plus category for a service status element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusBadge {
    pub label: &'static str,
    pub category: Category,
}

impl StatusBadge {
    pub const RUNNING: Self = Self {
        label: "Running",
        category: Category::Success,
    };
    pub const STOPPED: Self = Self {
        label: "Stopped",
        category: Category::Danger,
    };
    pub const STARTING: Self = Self {
        label: "Starting",
        category: Category::Warning,
    };
    pub const UNKNOWN: Self = Self {
        label: "Unknown",
        category: Category::Secondary,
    };

    /// Full class attribute value, e.g. `badge bg-success`.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("badge {}", self.category.css_class())
    }
}
