use std::sync::Mutex;

use heimdall::auth::guard::RedirectSink;

/// Redirect sink that records every target it receives.
///
/// Tests assert against [`count`](Self::count) and
/// [`targets`](Self::targets) to verify the gate issues exactly the
/// redirects the contract requires.
pub struct RecordingRedirects<R> {
    targets: Mutex<Vec<R>>,
}

impl<R: Clone> RecordingRedirects<R> {
    pub fn new() -> Self {
        Self {
            targets: Mutex::new(Vec::new()),
        }
    }

    /// Number of redirects issued so far.
    pub fn count(&self) -> usize {
        self.targets.lock().unwrap().len()
    }

    /// Every redirect target issued so far, in order.
    pub fn targets(&self) -> Vec<R> {
        self.targets.lock().unwrap().clone()
    }
}

impl<R: Clone> Default for RecordingRedirects<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone> RedirectSink<R> for RecordingRedirects<R> {
    fn redirect(&self, target: R) {
        self.targets.lock().unwrap().push(target);
    }
}
