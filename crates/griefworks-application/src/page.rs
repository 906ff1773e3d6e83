//! Presentation state with a mount guard.
//!
//! A flow keeps running after its page goes away; when it finishes, the
//! session store is still updated but the page's view is left alone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Shared "is this page on screen" flag.
#[derive(Debug, Clone)]
pub struct PageMount(Arc<AtomicBool>);

impl PageMount {
    /// A mounted page.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn mount(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Default for PageMount {
    fn default() -> Self {
        Self::new()
    }
}

/// View state of one page, only writable while the page is mounted.
#[derive(Debug)]
pub struct PageState<V> {
    mount: PageMount,
    view: Mutex<V>,
}

impl<V: Clone + Default> PageState<V> {
    pub fn new(mount: PageMount) -> Self {
        Self {
            mount,
            view: Mutex::new(V::default()),
        }
    }

    pub fn mount(&self) -> &PageMount {
        &self.mount
    }

    /// Applies `f` to the view. Returns `false` if the page is unmounted.
    pub fn update(&self, f: impl FnOnce(&mut V)) -> bool {
        if !self.mount.is_mounted() {
            tracing::debug!("Page unmounted, dropping view update");
            return false;
        }
        match self.view.lock() {
            Ok(mut view) => {
                f(&mut view);
                true
            }
            Err(_) => false,
        }
    }

    pub fn snapshot(&self) -> V {
        self.view
            .lock()
            .map(|view| view.clone())
            .unwrap_or_default()
    }
}

impl<V: Clone + Default> Default for PageState<V> {
    fn default() -> Self {
        Self::new(PageMount::new())
    }
}
