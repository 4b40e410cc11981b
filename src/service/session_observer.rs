use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::model::session::{AuthEvent, Identity, Session};
use crate::service::session_store::SessionSource;

/// Keeps the current identity in step with the session source.
///
/// The listener runs until [`SessionObserver::teardown`] is called or the
/// observer is dropped.
pub struct SessionObserver {
    identity: watch::Receiver<Option<Identity>>,
    listener: Option<JoinHandle<()>>,
}

impl SessionObserver {
    /// Subscribes, then reads the current session once. Events published
    /// while the read is in flight are buffered and applied after it.
    pub async fn start(source: Arc<dyn SessionSource>) -> Self {
        let events = source.subscribe();

        let initial = match source.current_session().await {
            Ok(session) => session.as_ref().map(Session::identity),
            Err(e) => {
                warn!("Initial session fetch failed, continuing signed out: {}", e);
                None
            }
        };
        debug!(signed_in = initial.is_some(), "Session observer started");

        let (tx, rx) = watch::channel(initial);
        let listener = tokio::spawn(listen(events, tx));

        SessionObserver {
            identity: rx,
            listener: Some(listener),
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.borrow().is_some()
    }

    /// Receiver that resolves `changed()` whenever an event replaces the identity.
    pub fn changes(&self) -> watch::Receiver<Option<Identity>> {
        self.identity.clone()
    }

    pub fn is_listening(&self) -> bool {
        self.listener.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn teardown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(handle) = self.listener.take() {
            handle.abort();
            debug!("Session observer unsubscribed");
        }
    }
}

impl Drop for SessionObserver {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn listen(mut events: broadcast::Receiver<AuthEvent>, identity: watch::Sender<Option<Identity>>) {
    loop {
        match events.recv().await {
            Ok(event) => {
                let next = event.session().map(Session::identity);
                debug!(signed_in = next.is_some(), "Session changed");
                identity.send_replace(next);
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "Session observer fell behind, skipped events");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
