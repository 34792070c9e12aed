use alloc::sync::Arc;

use crate::ViewModel;

/// A callback fired when the engine's visible window or dataset changes.
///
/// Emissions are de-duplicated on the `(window, generation)` key, so a
/// subscriber only sees snapshots that actually differ from the previous
/// one.
pub type OnViewChangeCallback<T> = Arc<dyn Fn(&ViewModel<T>) + Send + Sync>;

/// Configuration for [`crate::WindowEngine`].
///
/// Cheap to clone: the callback is stored in an `Arc` so adapters can tweak
/// a field and rebuild without reallocating closures.
pub struct WindowEngineOptions<T> {
    /// Fixed pixel height of every row. Must be nonzero.
    pub row_height: u32,
    /// Pixel height of the scrollable viewport; drives window capacity.
    pub viewport_height: u32,
    /// Scroll offset the engine starts at.
    pub initial_offset: u64,
    /// Optional observer for de-duplicated view-model emissions.
    pub on_view_change: Option<OnViewChangeCallback<T>>,
}

impl<T> WindowEngineOptions<T> {
    pub fn new(row_height: u32, viewport_height: u32) -> Self {
        Self {
            row_height,
            viewport_height,
            initial_offset: 0,
            on_view_change: None,
        }
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_on_view_change(
        mut self,
        on_view_change: Option<impl Fn(&ViewModel<T>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_view_change = on_view_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<T> Clone for WindowEngineOptions<T> {
    fn clone(&self) -> Self {
        Self {
            row_height: self.row_height,
            viewport_height: self.viewport_height,
            initial_offset: self.initial_offset,
            on_view_change: self.on_view_change.clone(),
        }
    }
}

impl<T> core::fmt::Debug for WindowEngineOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowEngineOptions")
            .field("row_height", &self.row_height)
            .field("viewport_height", &self.viewport_height)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
