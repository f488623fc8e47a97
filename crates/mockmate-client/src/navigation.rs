//! Login-redirect seam.
//!
//! The gateway never renders anything itself. When a session expires it asks
//! the host, through a [`Navigator`], to send the user back to the login
//! screen.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Host callback invoked once per call that failed with 401.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

impl<F> Navigator for F
where
    F: Fn() + Send + Sync,
{
    fn redirect_to_login(&self) {
        self();
    }
}

/// Navigator for hosts without a login screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_login(&self) {}
}

/// Navigator that counts redirects; useful for hosts that poll for expiry.
#[derive(Debug, Default)]
pub struct CountingNavigator {
    redirects: AtomicUsize,
}

impl CountingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}
