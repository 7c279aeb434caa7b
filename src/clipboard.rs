//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Lazily opened clipboard handle.
///
/// The context is kept for the life of the handle: on X11 the copied text is
/// served by this process, so dropping it early loses the contents.
#[derive(Default)]
pub struct Clipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `text` verbatim as plain text.
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => ClipboardContext::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        let ctx = self.ctx.insert(ctx);

        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        // Reading back makes the selection owner settle before we return.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}
