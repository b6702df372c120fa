//! Modal filename prompt.
//!
//! This is a deliberately simple chooser. The files live on the
//! interpreter's side of the network connection, so there is no local list
//! to enumerate or filter; the dialog only asks for a bare name and hands
//! it back.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tracing::debug;

use shared::domain::{usage_label, DialogMode};

use crate::error::DialogError;
use crate::types::{HostPage, DEFAULT_WINDOWPORT};
use crate::view;

/// How long to wait before moving focus into a freshly mounted element.
/// Some hosts reject focus changes made synchronously after an insertion,
/// so the request is deferred until control has returned to the scheduler.
const FOCUS_DELAY: Duration = Duration::from_millis(10);

/// Run a closure once control has returned to the scheduler. Best-effort:
/// the closure is dropped if the runtime shuts down first.
pub fn defer<F>(f: F)
where
    F: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(FOCUS_DELAY).await;
        f();
    });
}

/// Result of feeding the accept action to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// The trimmed filename was handed to the waiting receiver; the dialog
    /// is closed.
    Submitted,
    /// The input was empty after trimming; the dialog stays open.
    Ignored,
    /// No dialog is open; nothing happened.
    NotOpen,
}

struct OpenSession {
    mode: DialogMode,
    reply: oneshot::Sender<Option<String>>,
}

/// A file-choosing dialog. One instance per page; at most one session open
/// at a time.
pub struct Dialog {
    host: Arc<dyn HostPage>,
    session: Mutex<Option<OpenSession>>,
}

impl Dialog {
    pub fn new(host: Arc<dyn HostPage>) -> Self {
        Self {
            host,
            session: Mutex::new(None),
        }
    }

    /// Open the file-choosing dialog.
    ///
    /// `to_save` selects a save prompt over a load prompt. `usage` and
    /// `gameid` describe the file the interpreter is asking about; they are
    /// accepted for interface compatibility but do not filter anything
    /// here.
    ///
    /// The returned receiver resolves exactly once: `Some(filename)` when
    /// the user accepts, `None` when they cancel.
    ///
    /// Opening while a session is already open is a caller bug and fails
    /// with [`DialogError::AlreadyOpen`] without touching the open session.
    pub async fn open(
        &self,
        to_save: bool,
        usage: Option<&str>,
        gameid: Option<&str>,
    ) -> Result<oneshot::Receiver<Option<String>>, DialogError> {
        let mut session = self.session.lock().await;
        if session.is_some() {
            return Err(DialogError::AlreadyOpen);
        }

        let mode = if to_save {
            DialogMode::Save
        } else {
            DialogMode::Load
        };
        debug!(?usage, ?gameid, label = usage_label(usage), "opening filename dialog");

        let container = self
            .host
            .windowport()
            .unwrap_or_else(|| DEFAULT_WINDOWPORT.to_string());

        self.host
            .mount(&container, view::overlay())
            .map_err(|_| DialogError::HostContainer(container.clone()))?;
        if self.host.mount(&container, view::modal(mode)).is_err() {
            self.host.unmount(view::SCREEN_ID);
            return Err(DialogError::HostContainer(container));
        }

        let (tx, rx) = oneshot::channel();
        *session = Some(OpenSession { mode, reply: tx });

        let host = Arc::clone(&self.host);
        defer(move || host.focus(view::INFIELD_ID));

        Ok(rx)
    }

    /// Feed the accept (Save/Load) action with the text field's contents.
    ///
    /// Whitespace-only input is ignored and the dialog stays open for
    /// correction. Otherwise the view is torn down and the receiver
    /// resolves with the trimmed filename.
    pub async fn accept(&self, typed: &str) -> AcceptOutcome {
        let mut session = self.session.lock().await;
        let Some(open) = session.take() else {
            return AcceptOutcome::NotOpen;
        };

        let filename = typed.trim();
        if filename.is_empty() {
            *session = Some(open);
            return AcceptOutcome::Ignored;
        }

        debug!(mode = ?open.mode, filename, "filename accepted");
        self.teardown();
        let _ = open.reply.send(Some(filename.to_string()));
        AcceptOutcome::Submitted
    }

    /// Feed the Cancel action. The receiver resolves with `None`. No-op
    /// when the dialog is closed.
    pub async fn cancel(&self) {
        let mut session = self.session.lock().await;
        let Some(open) = session.take() else {
            return;
        };

        debug!(mode = ?open.mode, "filename dialog cancelled");
        self.teardown();
        let _ = open.reply.send(None);
    }

    pub async fn is_open(&self) -> bool {
        self.session.lock().await.is_some()
    }

    /// Remove the dialog box, frame, and grey-out screen. Unmounting
    /// elements that are already gone is a no-op by the host contract.
    fn teardown(&self) {
        self.host.unmount(view::DIALOG_ID);
        self.host.unmount(view::FRAME_ID);
        self.host.unmount(view::SCREEN_ID);
    }
}

#[cfg(test)]
#[path = "tests/dialog_tests.rs"]
mod tests;
