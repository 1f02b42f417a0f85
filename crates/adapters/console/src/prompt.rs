//! Confirmation prompts.

use std::future::Future;
use std::sync::Arc;

use easypanel_app::ports::Confirmer;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Whether a typed answer means "yes" (`y` or `yes`, any case).
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Line-based input shared between a command loop and the confirmer.
///
/// Both read through the same lock, so a confirmation question consumes the
/// next line the user types instead of racing the command loop for it.
pub struct LinePrompt<R> {
    lines: Arc<Mutex<Lines<R>>>,
}

/// [`LinePrompt`] over the process's standard input.
pub type TerminalPrompt = LinePrompt<BufReader<Stdin>>;

impl<R> Clone for LinePrompt<R> {
    fn clone(&self) -> Self {
        Self {
            lines: Arc::clone(&self.lines),
        }
    }
}

impl TerminalPrompt {
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: Arc::new(Mutex::new(reader.lines())),
        }
    }

    /// Next input line, or `None` at end of input.
    ///
    /// Cancel safe: dropping the future before it completes loses no input.
    ///
    /// # Errors
    ///
    /// Propagates read errors from the underlying reader.
    pub async fn read_line(&self) -> std::io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }
}

impl<R: AsyncBufRead + Unpin + Send> Confirmer for LinePrompt<R> {
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send {
        let lines = Arc::clone(&self.lines);
        let question = format!("{prompt} [y/N] ");
        async move {
            eprint!("{question}");
            match lines.lock().await.next_line().await {
                Ok(Some(answer)) => is_yes(&answer),
                Ok(None) => false,
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read confirmation");
                    false
                }
            }
        }
    }
}

/// Confirms everything without asking (the `--yes` flag).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send {
        tracing::debug!(prompt, "confirmation assumed");
        async { true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_yes_answers() {
        for answer in ["y", "Y", "yes", " YES ", "Yes\r"] {
            assert!(is_yes(answer), "{answer:?}");
        }
    }

    #[test]
    fn should_reject_everything_else() {
        for answer in ["", "n", "no", "yep", "y e s"] {
            assert!(!is_yes(answer), "{answer:?}");
        }
    }

    #[tokio::test]
    async fn should_confirm_from_next_line() {
        let prompt = LinePrompt::new(&b"yes\nno\n"[..]);
        assert!(prompt.confirm("Are you sure you want to stop nginx?").await);
        assert!(!prompt.confirm("Are you sure you want to stop nginx?").await);
    }

    #[tokio::test]
    async fn should_decline_at_end_of_input() {
        let prompt = LinePrompt::new(&b""[..]);
        assert!(!prompt.confirm("Are you sure you want to stop nginx?").await);
    }

    #[tokio::test]
    async fn should_share_lines_between_reader_and_confirmer() {
        let prompt = LinePrompt::new(&b"stop nginx\ny\nstatus\n"[..]);
        assert_eq!(prompt.read_line().await.unwrap().as_deref(), Some("stop nginx"));
        assert!(prompt.clone().confirm("sure?").await);
        assert_eq!(prompt.read_line().await.unwrap().as_deref(), Some("status"));
        assert_eq!(prompt.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_always_confirm_with_assume_yes() {
        assert!(AssumeYes.confirm("Are you sure you want to stop nginx?").await);
    }
}
