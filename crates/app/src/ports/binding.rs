//! Binding port: looks up the element bound to a snapshot key.
//!
//! In a browser this is an attribute query over the document; the console
//! adapter keeps an in-memory table. The poller only ever talks to this
//! trait, so rendering can be tested without a real view.

use easypanel_domain::badge::StatusBadge;
use easypanel_domain::binding::{Binding, BindingKind};

/// A handle on one bound element. Only its text and class are mutable.
pub trait ElementHandle {
    /// Replace the element's class with the badge class and its text with
    /// the badge label.
    fn set_badge(&self, badge: StatusBadge);

    /// Replace the element's text.
    fn set_text(&self, text: &str);
}

/// Resolves bindings to element handles.
pub trait BindingResolver: Send + Sync {
    type Element: ElementHandle;

    /// Find the element bound to `binding`, if the view shows it.
    fn resolve(&self, binding: &Binding) -> Option<Self::Element>;

    /// Whether at least one element of `kind` is bound.
    fn has_bindings(&self, kind: BindingKind) -> bool;
}
