use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::window::{visible_window, window_capacity};
use crate::{EmitKey, RowWindow, ViewModel, ViewRow, WindowEngineOptions};

/// A headless scroll-window engine over a wholesale-replaced dataset.
///
/// The engine owns the full logical row sequence and the current scroll
/// position. Whenever either changes it recomputes the visible window and,
/// if the `(window, generation)` key differs from the previous emission,
/// publishes a fresh [`ViewModel`] through `on_view_change`.
///
/// This type is intentionally UI-agnostic:
/// - It holds no UI objects.
/// - Your adapter drives it by reporting scroll offsets and viewport
///   geometry, and applies `total_size()` to the real scroll container so
///   native scrollbar geometry matches the logical length.
#[derive(Debug)]
pub struct WindowEngine<T> {
    options: WindowEngineOptions<T>,
    data: Vec<T>,
    generation: u64,
    scroll_offset: u64,

    last_emitted: Cell<Option<EmitKey>>,
    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<T: Clone> WindowEngine<T> {
    pub fn new(options: WindowEngineOptions<T>) -> Self {
        debug_assert!(options.row_height > 0, "row_height must be nonzero");
        let scroll_offset = options.initial_offset;
        wdebug!(
            row_height = options.row_height,
            viewport_height = options.viewport_height,
            "WindowEngine::new"
        );
        Self {
            options,
            data: Vec::new(),
            generation: 0,
            scroll_offset,
            last_emitted: Cell::new(None),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &WindowEngineOptions<T> {
        &self.options
    }

    /// Replaces the dataset wholesale and bumps the generation.
    ///
    /// No diffing is attempted: a search cycle always supplies a complete
    /// result set. Replacement always counts as a change, even when the
    /// scroll offset (and therefore the window) is untouched.
    pub fn set_data(&mut self, data: Vec<T>) {
        wdebug!(len = data.len(), "set_data");
        self.data = data;
        self.generation = self.generation.wrapping_add(1);
        self.notify();
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, absolute_index: usize) -> Option<&T> {
        self.data.get(absolute_index)
    }

    /// Dataset revision counter; bumped by every `set_data`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        wtrace!(offset, "set_scroll_offset");
        self.scroll_offset = offset;
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    pub fn row_height(&self) -> u32 {
        self.options.row_height
    }

    pub fn set_row_height(&mut self, row_height: u32) {
        debug_assert!(row_height > 0, "row_height must be nonzero");
        if self.options.row_height == row_height {
            return;
        }
        self.options.row_height = row_height;
        self.notify();
    }

    pub fn viewport_height(&self) -> u32 {
        self.options.viewport_height
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        if self.options.viewport_height == viewport_height {
            return;
        }
        self.options.viewport_height = viewport_height;
        self.notify();
    }

    /// Installs or replaces the emission observer and re-arms emission so
    /// the new observer receives the current snapshot on the next change
    /// check.
    pub fn set_on_view_change(
        &mut self,
        on_view_change: Option<impl Fn(&ViewModel<T>) + Send + Sync + 'static>,
    ) {
        self.options.on_view_change = on_view_change.map(|f| Arc::new(f) as _);
        self.last_emitted.set(None);
        self.notify();
    }

    /// Total scrollable extent in pixels: `len * row_height`.
    ///
    /// Adapters apply this to the scroll container after every dataset
    /// replacement so the native scrollbar matches the logical length even
    /// though only a window of rows is materialized.
    pub fn total_size(&self) -> u64 {
        self.data.len() as u64 * self.options.row_height as u64
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size()
            .saturating_sub(self.options.viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Rows the viewport can hold, including the single buffer row.
    pub fn capacity(&self) -> usize {
        window_capacity(self.options.viewport_height, self.options.row_height)
    }

    /// The current clamped window.
    pub fn window(&self) -> RowWindow {
        visible_window(
            self.scroll_offset,
            self.options.row_height,
            self.options.viewport_height,
            self.data.len(),
        )
    }

    /// Builds a snapshot for the current state.
    ///
    /// Each row carries its absolute index and its pixel position
    /// (`absolute_index * row_height`), increasing from the window's first
    /// row.
    pub fn view_model(&self) -> ViewModel<T> {
        let window = self.window();
        let row_height = self.options.row_height as u64;
        let mut rows = Vec::with_capacity(window.len());
        for absolute_index in window.first_index..window.end_index {
            rows.push(ViewRow {
                origin: self.data[absolute_index].clone(),
                absolute_index,
                pixel_offset: absolute_index as u64 * row_height,
            });
        }
        ViewModel {
            rows,
            window,
            generation: self.generation,
            dataset_len: self.data.len(),
            total_size: self.total_size(),
        }
    }

    /// Batches multiple updates into at most one emission.
    ///
    /// Recommended whenever a single external event touches several fields,
    /// e.g. a search completion that replaces the dataset and resets the
    /// scroll offset together.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    fn notify_now(&self) {
        let key = EmitKey {
            window: self.window(),
            generation: self.generation,
        };
        if self.last_emitted.get() == Some(key) {
            return;
        }
        self.last_emitted.set(Some(key));
        if let Some(cb) = &self.options.on_view_change {
            let vm = self.view_model();
            cb(&vm);
        }
    }
}
