use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

///
/// Per-session presentation state: the member currently looking at
/// the screen and their sound toggle. This process simulates a single
/// active session; a server deployment would hold one of these per
/// connection instead of one per process.
///
pub struct Session {
    viewer: RwLock<Option<Uuid>>,
    sound_enabled: AtomicBool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            viewer: RwLock::new(None),
            sound_enabled: AtomicBool::new(true),
        }
    }

    pub async fn viewer(&self) -> Option<Uuid> {
        *self.viewer.read().await
    }

    pub async fn set_viewer(&self, viewer: Option<Uuid>) {
        *self.viewer.write().await = viewer;
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled.load(Ordering::Relaxed)
    }

    pub fn set_sound_enabled(&self, enabled: bool) {
        self.sound_enabled.store(enabled, Ordering::Relaxed);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
