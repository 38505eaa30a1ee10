//! Process wide construction counters for [`Vec2`](crate::Vec2) and
//! [`Vec2Builder`](crate::Vec2Builder), plus an optional observer hook.

use lazy_static::lazy_static;
use log::trace;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// which vector type was constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VecKind {
    Vec2,
    Vec2Builder,
}

/// Receives a notification every time a vector is constructed.
///
/// Copies of a `Vec2` are not constructions and are not reported.
pub trait ConstructionObserver: Send + Sync {
    fn constructed(&self, kind: VecKind);
}

static VEC2_COUNT: AtomicUsize = AtomicUsize::new(0);
static VEC2_BUILDER_COUNT: AtomicUsize = AtomicUsize::new(0);

// use lazy_static initialize observer slot
lazy_static! {
    static ref OBSERVER: RwLock<Option<Arc<dyn ConstructionObserver>>> = RwLock::new(None);
}

/// install `observer`, replacing any previous one
pub fn set_construction_observer(observer: Arc<dyn ConstructionObserver>) {
    trace!("installing construction observer");
    match OBSERVER.write() {
        Ok(mut slot) => *slot = Some(observer),
        Err(poisoned) => *poisoned.into_inner() = Some(observer),
    }
}

/// remove the installed observer, returning it if there was one
pub fn clear_construction_observer() -> Option<Arc<dyn ConstructionObserver>> {
    trace!("clearing construction observer");
    match OBSERVER.write() {
        Ok(mut slot) => slot.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    }
}

pub(crate) fn record_construction(kind: VecKind) {
    let counter = match kind {
        VecKind::Vec2 => &VEC2_COUNT,
        VecKind::Vec2Builder => &VEC2_BUILDER_COUNT,
    };
    counter.fetch_add(1, Ordering::Relaxed);

    // observer runs outside the lock
    let observer = match OBSERVER.read() {
        Ok(slot) => slot.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    if let Some(observer) = observer {
        observer.constructed(kind);
    }
}

pub(crate) fn construction_count(kind: VecKind) -> usize {
    match kind {
        VecKind::Vec2 => VEC2_COUNT.load(Ordering::Relaxed),
        VecKind::Vec2Builder => VEC2_BUILDER_COUNT.load(Ordering::Relaxed),
    }
}
