//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod binding;
pub mod confirm;
pub mod notifier;
pub mod panel_api;

pub use binding::{BindingResolver, ElementHandle};
pub use confirm::Confirmer;
pub use notifier::Notifier;
pub use panel_api::PanelApi;
