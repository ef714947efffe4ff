use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    // Undelivered posts per live subscription.
    pending: BTreeMap<u64, u32>,
}

/// A single-threaded source of device orientation change notifications.
///
/// Handles are cheap to clone and share the same observer registry. Observers hold an
/// [`OrientationSubscription`] which deregisters itself on drop.
#[derive(Clone, Debug, Default)]
pub struct OrientationCenter {
    inner: Rc<RefCell<Registry>>,
}

impl OrientationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> OrientationSubscription {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id = reg.next_id.wrapping_add(1);
        reg.pending.insert(id, 0);
        vtrace!(id, "orientation observer registered");
        OrientationSubscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Records a rotation for every live subscription.
    pub fn post(&self) {
        let mut reg = self.inner.borrow_mut();
        vtrace!(observers = reg.pending.len(), "orientation change posted");
        for pending in reg.pending.values_mut() {
            *pending = pending.saturating_add(1);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

#[derive(Debug)]
pub struct OrientationSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl OrientationSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns `true` if at least one rotation was posted since the last call.
    ///
    /// Several posts between two calls coalesce into one.
    pub fn take_pending(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut reg = registry.borrow_mut();
        reg.pending
            .get_mut(&self.id)
            .map(|p| core::mem::replace(p, 0) > 0)
            .unwrap_or(false)
    }
}

impl Drop for OrientationSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().pending.remove(&self.id);
            vtrace!(id = self.id, "orientation observer deregistered");
        }
    }
}
