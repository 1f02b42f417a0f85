//! # easypanel-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PanelApi`: read the status endpoints, send service commands
//!   - `BindingResolver` / `ElementHandle`: find and update bound elements
//!   - `Confirmer`: ask the user before destructive commands
//!   - `Notifier`: surface the outcome of a command
//! - Provide the **use-cases**:
//!   - `StatusPoller`: timer-driven snapshot polling and rendering
//!   - `CommandDispatcher`: start/stop/restart with notification and re-poll
//!   - `NotificationCenter`: stackable, auto-dismissing notifications
//!
//! ## Dependency rule
//! Depends on `easypanel-domain` only (plus `tokio` for timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod notification_center;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
