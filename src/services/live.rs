//! Instant-feedback filtering over a page already in hand.
//!
//! [`LiveSearch`] models the between-keystrokes experience: the roster page
//! fetched last is kept as an immutable snapshot, and every submitted term
//! re-derives the visible subset through
//! [`ClientMirrorMatch`](crate::domain::filter::ClientMirrorMatch) without
//! another store round trip. Submissions are debounced: applying waits out a
//! quiescence window, and a newer submission aborts the pending one. Single
//! threaded cooperative scheduling only; there is no shared state across
//! threads.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use actix_web::rt;
use actix_web::rt::task::JoinHandle;

use crate::domain::advocate::Advocate;
use crate::domain::filter::ClientMirrorMatch;

/// Quiescence window before a submitted term is applied.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Cancellable delayed apply: each `schedule` aborts the previous pending
/// task and starts a fresh timer.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Runs `apply` after the configured delay unless superseded or
    /// cancelled first. Must be called from within an Actix runtime.
    pub fn schedule<F>(&mut self, apply: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(rt::spawn(async move {
            rt::time::sleep(delay).await;
            apply();
        }));
    }

    /// Aborts the pending apply, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Holds the fetched page and the currently visible subset of it.
pub struct LiveSearch {
    page: Rc<Vec<Advocate>>,
    visible: Rc<RefCell<Vec<Advocate>>>,
    debouncer: Debouncer,
}

impl LiveSearch {
    /// Starts with every record of the fetched page visible.
    pub fn new(page: Vec<Advocate>) -> Self {
        Self::with_debounce(page, DEBOUNCE_WINDOW)
    }

    pub fn with_debounce(page: Vec<Advocate>, delay: Duration) -> Self {
        let visible = page.clone();
        Self {
            page: Rc::new(page),
            visible: Rc::new(RefCell::new(visible)),
            debouncer: Debouncer::new(delay),
        }
    }

    /// The records currently passing the filter.
    pub fn visible(&self) -> Vec<Advocate> {
        self.visible.borrow().clone()
    }

    /// Applies the term synchronously, bypassing the debounce window.
    pub fn apply_now(&self, term: &str) {
        *self.visible.borrow_mut() = ClientMirrorMatch::filter_page(&self.page, term);
    }

    /// Submits a keystroke's worth of input: the filter is applied once the
    /// debounce window elapses without a newer submission.
    pub fn submit(&mut self, term: &str) {
        let page = Rc::clone(&self.page);
        let visible = Rc::clone(&self.visible);
        let term = term.to_string();

        self.debouncer.schedule(move || {
            *visible.borrow_mut() = ClientMirrorMatch::filter_page(&page, &term);
        });
    }

    /// Drops any pending submission, leaving the visible set as it is.
    pub fn cancel_pending(&mut self) {
        self.debouncer.cancel();
    }
}
