//! [`Context`]: how a front end stops a search that is running.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Stop flag for one search run.
///
/// The front end keeps a clone and calls [`cancel`](Self::cancel) from its
/// step callback or another thread; the search polls it between
/// expansions and after every `on_step` call. A cancelled context stays
/// cancelled, so make a fresh one per run.
#[derive(Clone, Debug, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Ask every search holding this context to stop at its next check.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// `Break` once cancelled, for use with `?` inside step loops.
    #[inline]
    pub fn checkpoint(&self) -> ControlFlow<()> {
        if self.is_cancelled() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_seen_through_clones() {
        let ctx = Context::new();
        let held_by_search = ctx.clone();
        assert!(held_by_search.checkpoint().is_continue());
        ctx.cancel();
        assert!(held_by_search.is_cancelled());
        assert!(held_by_search.checkpoint().is_break());
    }

    #[test]
    fn cancel_from_another_thread() {
        let ctx = Context::new();
        let remote = ctx.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(ctx.is_cancelled());
    }
}
