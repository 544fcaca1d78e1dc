//! Global pointer-move/up subscription, held only while a gesture is active.
//!
//! The host implements [`PointerCapture`] to start routing document-wide
//! pointer events to the controller. The returned guard stops that routing
//! when dropped, so every path back to idle (pointer-up, cancel, disabling,
//! dropping the controller) releases the subscription.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

/// Source of global pointer-move/up events.
pub trait PointerCapture {
    /// Releases the subscription on drop.
    type Guard;

    fn acquire(&mut self) -> Self::Guard;
}

/// For hosts that deliver every pointer event to the controller anyway.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    type Guard = ();

    fn acquire(&mut self) {}
}

/// Guard that runs a release closure exactly once, on drop.
pub struct CaptureGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl CaptureGuard {
    #[must_use]
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }
}

impl std::fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureGuard").field("armed", &self.release.is_some()).finish()
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Capture built from a closure that subscribes and returns its guard.
pub struct FnCapture<F>(pub F);

impl<F> PointerCapture for FnCapture<F>
where
    F: FnMut() -> CaptureGuard,
{
    type Guard = CaptureGuard;

    fn acquire(&mut self) -> CaptureGuard {
        (self.0)()
    }
}
