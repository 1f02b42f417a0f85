//! In-memory binding board.
//!
//! Holds one [`ElementState`] per [`Binding`]. Only bindings registered up
//! front (or through [`MemoryBoard::bind`]) resolve; the poller skips every
//! other snapshot entry.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use easypanel_app::ports::{BindingResolver, ElementHandle};
use easypanel_domain::badge::{Category, StatusBadge};
use easypanel_domain::binding::{Binding, BindingKind};
use tokio::sync::watch;

/// What a bound element currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    /// Badge category; `None` for plain text elements and before the first
    /// render.
    pub category: Option<Category>,
}

struct Shared {
    elements: Mutex<BTreeMap<Binding, ElementState>>,
    revision: watch::Sender<u64>,
}

/// Shared table of bound elements. Clones see the same table.
#[derive(Clone)]
pub struct MemoryBoard {
    shared: Arc<Shared>,
}

impl MemoryBoard {
    /// Create a board with `bindings` registered and blank.
    pub fn new(bindings: impl IntoIterator<Item = Binding>) -> Self {
        let elements = bindings
            .into_iter()
            .map(|binding| (binding, ElementState::default()))
            .collect();
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                elements: Mutex::new(elements),
                revision,
            }),
        }
    }

    fn elements_mut(&self) -> MutexGuard<'_, BTreeMap<Binding, ElementState>> {
        self.shared
            .elements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a binding. Returns `false` if it already existed.
    pub fn bind(&self, binding: Binding) -> bool {
        let mut elements = self.elements_mut();
        if elements.contains_key(&binding) {
            return false;
        }
        elements.insert(binding, ElementState::default());
        true
    }

    #[must_use]
    pub fn get(&self, binding: &Binding) -> Option<ElementState> {
        self.elements_mut().get(binding).cloned()
    }

    /// All elements, services first, each group ordered by key.
    #[must_use]
    pub fn elements(&self) -> Vec<(Binding, ElementState)> {
        self.elements_mut()
            .iter()
            .map(|(binding, state)| (binding.clone(), state.clone()))
            .collect()
    }

    /// Current revision; bumped whenever an element's visible state changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.shared.revision.borrow()
    }

    /// Watch the revision counter.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    fn update(&self, binding: &Binding, apply: impl FnOnce(&mut ElementState)) {
        let changed = {
            let mut elements = self.elements_mut();
            match elements.get_mut(binding) {
                Some(element) => {
                    let before = element.clone();
                    apply(element);
                    *element != before
                }
                None => false,
            }
        };
        if changed {
            self.shared.revision.send_modify(|revision| *revision += 1);
        }
    }
}

impl BindingResolver for MemoryBoard {
    type Element = BoardElement;

    fn resolve(&self, binding: &Binding) -> Option<BoardElement> {
        if !self.elements_mut().contains_key(binding) {
            return None;
        }
        Some(BoardElement {
            board: self.clone(),
            binding: binding.clone(),
        })
    }

    fn has_bindings(&self, kind: BindingKind) -> bool {
        self.elements_mut().keys().any(|binding| binding.kind == kind)
    }
}

/// Handle on one board element.
pub struct BoardElement {
    board: MemoryBoard,
    binding: Binding,
}

impl ElementHandle for BoardElement {
    fn set_badge(&self, badge: StatusBadge) {
        self.board.update(&self.binding, |element| {
            element.text = badge.label.to_string();
            element.category = Some(badge.category);
        });
    }

    fn set_text(&self, text: &str) {
        self.board.update(&self.binding, |element| {
            element.text = text.to_string();
        });
    }
}
