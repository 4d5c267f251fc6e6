//! The per-thread stack of active loggers.
//!
//! Each thread has its own stack, so two threads traversing with different loggers never see
//! each other's events. Activation pushes an entry tagged with a fresh per-thread token; the
//! returned [`LoggerScope`] removes its own entry, and everything above it, when it ends. This
//! restores whichever logger was current before. Only the top of the stack receives events.
//!
//! A scope whose entry is already gone (because an enclosing scope ended first) leaves the
//! stack untouched when it ends.
//!
//! A [`LoggerScope`] is tied to the thread that created it and cannot be sent elsewhere. To log
//! work done on another thread, pass a [`VisitLogger`] clone there (or look it up with
//! [`current`] before spawning) and activate it on that thread.

use std::{
    cell::{Cell, RefCell},
    marker::PhantomData,
};

use tracing::{debug, warn};

use crate::{logger::VisitLogger, Result};

struct Entry {
    token: u64,
    logger: VisitLogger,
}

thread_local! {
    static ACTIVE: RefCell<Vec<Entry>> = const { RefCell::new(Vec::new()) };
    static NEXT_TOKEN: Cell<u64> = const { Cell::new(0) };
}

/// Returns the innermost logger active on the calling thread, if any.
#[must_use]
pub fn current() -> Option<VisitLogger> {
    ACTIVE
        .try_with(|stack| stack.borrow().last().map(|entry| entry.logger.clone()))
        .ok()
        .flatten()
}

/// Returns how many logger scopes are open on the calling thread.
#[must_use]
pub fn depth() -> usize {
    ACTIVE.try_with(|stack| stack.borrow().len()).unwrap_or(0)
}

/// Guard for one activation of a [`VisitLogger`].
///
/// While the guard lives, its logger is the current logger of this thread (unless a nested
/// scope is opened on top of it). Ending the scope, either through [`LoggerScope::finish`] or
/// by dropping the guard on any exit path, restores the previous logger and closes the file the
/// logger opened itself, if any.
#[must_use = "the logger is deactivated as soon as the scope is dropped"]
pub struct LoggerScope {
    logger: VisitLogger,
    token: u64,
    ended: bool,
    _thread_bound: PhantomData<*const ()>,
}

impl LoggerScope {
    pub(crate) fn enter(logger: VisitLogger) -> Self {
        let token = NEXT_TOKEN
            .try_with(|next| {
                let token = next.get();
                next.set(token.wrapping_add(1));
                token
            })
            .unwrap_or(u64::MAX);
        let depth = ACTIVE
            .try_with(|stack| {
                let mut stack = stack.borrow_mut();
                stack.push(Entry {
                    token,
                    logger: logger.clone(),
                });
                stack.len()
            })
            .unwrap_or(0);
        debug!(depth, token, mode = ?logger.mode(), "visit logger activated");

        LoggerScope {
            logger,
            token,
            ended: false,
            _thread_bound: PhantomData,
        }
    }

    /// Returns the logger this scope activated.
    #[must_use]
    pub const fn logger(&self) -> &VisitLogger {
        &self.logger
    }

    /// Ends the scope, surfacing any error from closing an owned log file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`](crate::Error::FileError) if flushing the owned file fails,
    /// or [`Error::LockError`](crate::Error::LockError) if the sink lock is poisoned. The
    /// previous logger is restored either way.
    pub fn finish(mut self) -> Result<()> {
        self.end()
    }

    fn end(&mut self) -> Result<()> {
        if self.ended {
            return Ok(());
        }
        self.ended = true;

        // Entries above ours belong to scopes nested inside this one that are still alive or
        // were leaked; they end with it. A missing entry was already removed that way.
        let removed = ACTIVE
            .try_with(|stack| {
                let mut stack = stack.borrow_mut();
                match stack.iter().rposition(|entry| entry.token == self.token) {
                    Some(position) => {
                        stack.truncate(position);
                        true
                    }
                    None => false,
                }
            })
            .unwrap_or(false);
        debug!(token = self.token, removed, "visit logger deactivated");

        self.logger.release()
    }
}

impl Drop for LoggerScope {
    fn drop(&mut self) {
        if let Err(error) = self.end() {
            warn!(%error, "failed to release visit log sink");
        }
    }
}
