//! Asset readiness gate
//!
//! A one-shot gate between an asynchronous load and the consumers that must
//! not start before the asset exists. Callbacks registered before readiness
//! are queued; callbacks registered after readiness fire immediately on the
//! registering thread. Each callback fires exactly once, in registration
//! order. A failed load never resolves the gate as ready.

use parking_lot::Mutex;

use crate::loader::LoadError;

/// Observable gate state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Load still in flight; callbacks are queued
    Pending,
    /// Asset available; new callbacks fire immediately
    Ready,
    /// Load failed; ready callbacks will never fire
    Failed,
}

type ReadyCallback = Box<dyn FnOnce() + Send>;

enum Inner {
    Pending(Vec<ReadyCallback>),
    Ready,
    Failed(LoadError),
}

/// One-shot readiness gate for the showcase model
pub struct AssetGate {
    inner: Mutex<Inner>,
}

impl Default for AssetGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetGate {
    /// Create a pending gate
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::Pending(Vec::new())),
        }
    }

    /// Current gate state
    pub fn state(&self) -> GateState {
        match *self.inner.lock() {
            Inner::Pending(_) => GateState::Pending,
            Inner::Ready => GateState::Ready,
            Inner::Failed(_) => GateState::Failed,
        }
    }

    /// The load error, if the gate failed
    pub fn failure(&self) -> Option<LoadError> {
        match &*self.inner.lock() {
            Inner::Failed(err) => Some(err.clone()),
            _ => None,
        }
    }

    /// Register a callback invoked exactly once when the asset becomes ready
    ///
    /// If the asset is already ready the callback fires immediately. If the
    /// load failed, or fails later, the callback is dropped without firing.
    pub fn on_ready<F>(&self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut inner = self.inner.lock();
            match &mut *inner {
                Inner::Pending(queue) => {
                    queue.push(Box::new(callback));
                    return;
                }
                Inner::Ready => {}
                Inner::Failed(_) => {
                    log::debug!("on_ready after load failure; callback dropped");
                    return;
                }
            }
        }
        // Already ready: fire outside the lock so the callback may register
        // further callbacks
        callback();
    }

    /// Resolve the gate as ready, draining queued callbacks in order
    ///
    /// Idempotent; resolving a non-pending gate is ignored.
    pub fn mark_ready(&self) {
        let queued = {
            let mut inner = self.inner.lock();
            match core::mem::replace(&mut *inner, Inner::Ready) {
                Inner::Pending(queue) => queue,
                previous => {
                    // Keep the original outcome
                    *inner = previous;
                    log::warn!("mark_ready on a resolved gate; ignoring");
                    return;
                }
            }
        };

        log::info!("asset gate ready ({} queued callbacks)", queued.len());
        for callback in queued {
            callback();
        }
    }

    /// Resolve the gate as failed; ready callbacks never fire
    pub fn mark_failed(&self, err: LoadError) {
        let mut inner = self.inner.lock();
        match &*inner {
            Inner::Pending(queue) => {
                log::error!("asset gate failed, dropping {} callbacks: {}", queue.len(), err);
                *inner = Inner::Failed(err);
            }
            _ => log::warn!("mark_failed on a resolved gate; ignoring"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_callbacks_fire_once_in_registration_order() {
        let gate = AssetGate::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let order = order.clone();
            gate.on_ready(move || order.lock().push(i));
        }

        assert_eq!(gate.state(), GateState::Pending);
        gate.mark_ready();

        assert_eq!(gate.state(), GateState::Ready);
        assert_eq!(*order.lock(), vec![0, 1, 2]);

        // A second resolution does not re-fire anything
        gate.mark_ready();
        assert_eq!(order.lock().len(), 3);
    }

    #[test]
    fn test_late_registration_fires_immediately() {
        let gate = AssetGate::new();
        gate.mark_ready();

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        gate.on_ready(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Synchronous, not deferred
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_never_resolves_ready() {
        let gate = AssetGate::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        gate.on_ready(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        gate.mark_failed(LoadError::EmptyDocument {
            path: "missing.gltf".into(),
        });

        assert_eq!(gate.state(), GateState::Failed);
        assert!(gate.failure().is_some());
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        // Readiness after failure is ignored, and so are new callbacks
        gate.mark_ready();
        let counter = fired.clone();
        gate.on_ready(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(gate.state(), GateState::Failed);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_callback_may_register_another() {
        let gate = Arc::new(AssetGate::new());
        let fired = Arc::new(AtomicUsize::new(0));

        let inner_gate = gate.clone();
        let counter = fired.clone();
        gate.on_ready(move || {
            let counter2 = counter.clone();
            inner_gate.on_ready(move || {
                counter2.fetch_add(10, Ordering::SeqCst);
            });
            counter.fetch_add(1, Ordering::SeqCst);
        });

        gate.mark_ready();
        assert_eq!(fired.load(Ordering::SeqCst), 11);
    }
}
