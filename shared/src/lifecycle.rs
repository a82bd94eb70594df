//! Liveness tracking for work that outlives a single render.

use std::{cell::Cell, rc::Rc};

/// Shared flag telling an async task whether its owner is still mounted.
///
/// The owning component keeps one clone and calls [`MountGuard::release`]
/// on teardown; the task keeps another and only applies results through
/// [`MountGuard::run_if_alive`]. Clones share the flag.
#[derive(Debug, Clone)]
pub struct MountGuard {
    alive: Rc<Cell<bool>>,
}

impl MountGuard {
    /// A guard for a freshly mounted owner.
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    /// Mark the owner as gone. Idempotent.
    pub fn release(&self) {
        self.alive.set(false);
    }

    /// Whether the owner is still mounted.
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Run `apply` only while the owner is mounted.
    pub fn run_if_alive<T>(&self, apply: impl FnOnce() -> T) -> Option<T> {
        if self.is_alive() {
            Some(apply())
        } else {
            None
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_while_mounted() {
        let guard = MountGuard::new();
        let task = guard.clone();
        assert_eq!(task.run_if_alive(|| 42), Some(42));
    }

    #[test]
    fn discards_after_release() {
        let guard = MountGuard::new();
        let task = guard.clone();
        let applied = Cell::new(false);

        guard.release();
        assert!(!task.is_alive());
        assert_eq!(task.run_if_alive(|| applied.set(true)), None);
        assert!(!applied.get());
    }

    #[test]
    fn each_mount_gets_its_own_flag() {
        let first = MountGuard::new();
        first.release();
        let second = MountGuard::default();
        assert!(second.is_alive());
    }
}
