use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use super::{FetchError, SchemeSource};
use crate::types::{ColorRecord, SchemeRequest};

/// Result of one finished fetch, delivered back to the event loop.
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: SchemeRequest,
    pub result: Result<Vec<ColorRecord>, FetchError>,
}

/// Runs scheme fetches off the event loop and hands results back over a channel.
pub struct Fetcher {
    source: Arc<dyn SchemeSource>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

/// Sends exactly one outcome, even if the worker unwinds before it gets the chance.
struct CompletionGuard {
    tx: Sender<FetchOutcome>,
    request: Option<SchemeRequest>,
}

impl CompletionGuard {
    fn complete(mut self, result: Result<Vec<ColorRecord>, FetchError>) {
        if let Some(request) = self.request.take() {
            let _ = self.tx.send(FetchOutcome { request, result });
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(request) = self.request.take() {
            let _ = self.tx.send(FetchOutcome {
                request,
                result: Err(FetchError::Network(
                    "fetch worker exited without a response".to_string(),
                )),
            });
        }
    }
}

impl Fetcher {
    pub fn new(source: Arc<dyn SchemeSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    /// Starts a fetch in the background. Exactly one outcome is queued per
    /// call; if the thread cannot be started, the dropped guard reports it.
    pub fn spawn(&self, request: SchemeRequest) {
        let source = Arc::clone(&self.source);
        let guard = CompletionGuard {
            tx: self.tx.clone(),
            request: Some(request),
        };
        let spawned = thread::Builder::new()
            .name("scheme-fetch".to_string())
            .spawn(move || {
                let request = match guard.request.as_ref() {
                    Some(request) => request.clone(),
                    None => return,
                };
                let result = source.fetch_scheme(&request);
                debug!(ok = result.is_ok(), "scheme fetch finished");
                guard.complete(result);
            });
        if let Err(err) = spawned {
            warn!("could not start fetch worker: {err}");
        }
    }

    /// Returns a finished outcome if one is waiting.
    pub fn try_recv(&self) -> Option<FetchOutcome> {
        self.rx.try_recv().ok()
    }

    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<FetchOutcome> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::types::SchemeMode;

    struct Fixed(Vec<&'static str>);

    impl SchemeSource for Fixed {
        fn fetch_scheme(&self, _request: &SchemeRequest) -> Result<Vec<ColorRecord>, FetchError> {
            Ok(self
                .0
                .iter()
                .map(|hex| ColorRecord {
                    hex: hex.to_string(),
                })
                .collect())
        }
    }

    struct Panicking;

    impl SchemeSource for Panicking {
        fn fetch_scheme(&self, _request: &SchemeRequest) -> Result<Vec<ColorRecord>, FetchError> {
            panic!("boom");
        }
    }

    #[test]
    fn outcome_arrives_with_its_request() {
        let fetcher = Fetcher::new(Arc::new(Fixed(vec!["#111111", "#222222"])));
        let request = SchemeRequest::from_input("#123456", SchemeMode::Triad, 2);
        fetcher.spawn(request.clone());

        let outcome = fetcher.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.request, request);
        assert_eq!(outcome.result.unwrap().len(), 2);
        assert!(fetcher.try_recv().is_none());
    }

    #[test]
    fn panicking_source_still_completes_once() {
        let fetcher = Fetcher::new(Arc::new(Panicking));
        fetcher.spawn(SchemeRequest::from_input("123456", SchemeMode::Quad, 5));

        let outcome = fetcher.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(outcome.result, Err(FetchError::Network(_))));
        assert!(fetcher.recv_timeout(Duration::from_millis(100)).is_none());
    }
}
