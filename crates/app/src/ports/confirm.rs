//! Confirmation port: asks the user a yes/no question.

use std::future::Future;

/// Gate for commands that need an explicit "yes" before being sent.
pub trait Confirmer: Send + Sync {
    /// Show `prompt` and resolve to `true` only if the user accepted.
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send;
}
