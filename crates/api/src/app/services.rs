//! Shared per-process state behind the handlers.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use sudood_catalog::Catalog;
use sudood_quotes::{Mailer, QuoteRequest, QuoteSender};

/// Application services: the read-only catalog handle, the quote sender, and
/// the in-flight submission guard.
pub struct AppServices {
    catalog: &'static Catalog,
    quotes: QuoteSender,
    // Keyed on (submitter email, product id). Locked only to insert/remove,
    // never across an await.
    inflight: Mutex<HashSet<(String, String)>>,
}

/// A claimed in-flight slot. Releasing happens in `Drop`, so the key is
/// freed whether the submission succeeds, fails, or the request is
/// cancelled mid-send (hyper drops the handler future on disconnect).
pub struct SubmissionGuard {
    services: Arc<AppServices>,
    key: (String, String),
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.services
            .inflight
            .lock()
            .expect("inflight lock poisoned")
            .remove(&self.key);
    }
}

impl AppServices {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self {
            catalog: Catalog::builtin(),
            quotes: QuoteSender::new(mailer),
            inflight: Mutex::new(HashSet::new()),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn quotes(&self) -> &QuoteSender {
        &self.quotes
    }

    /// Claim the in-flight slot for a submission. Returns `None` when an
    /// identical submission is still settling, in which case the caller must
    /// reject the duplicate instead of dispatching more email. The returned
    /// guard releases the slot when dropped.
    pub fn begin_submission(self: &Arc<Self>, request: &QuoteRequest) -> Option<SubmissionGuard> {
        let key = submission_key(request);
        let claimed = self
            .inflight
            .lock()
            .expect("inflight lock poisoned")
            .insert(key.clone());
        claimed.then(|| SubmissionGuard {
            services: Arc::clone(self),
            key,
        })
    }
}

fn submission_key(request: &QuoteRequest) -> (String, String) {
    (request.email.trim().to_owned(), request.product_id.clone())
}
