//! Pure window math: scroll offset + viewport geometry → row window.
//!
//! Everything here is a pure function of its arguments. Callers that need
//! change detection compare outputs; identical inputs always produce
//! identical windows.

use crate::RowWindow;

/// How many rows a viewport can show at once, plus one buffer row so a
/// partially scrolled viewport never exposes a blank strip at its edge.
///
/// `row_height` must be nonzero; configuration layers validate that before
/// any window math runs.
pub fn window_capacity(viewport_px: u32, row_height: u32) -> usize {
    let full = (viewport_px / row_height) as usize;
    let partial = usize::from(viewport_px % row_height != 0);
    full + partial + 1
}

/// The unclamped window for a scroll position: the first row whose top edge
/// is at or above `scroll_offset`, extended by the viewport capacity.
pub fn compute_window(scroll_offset: u64, row_height: u32, viewport_px: u32) -> RowWindow {
    let first_index = (scroll_offset / row_height as u64) as usize;
    RowWindow {
        first_index,
        end_index: first_index.saturating_add(window_capacity(viewport_px, row_height)),
    }
}

/// Clamps a window to a dataset of `len` rows.
///
/// A window entirely past the end collapses to the empty window at `len`;
/// an empty dataset always yields the empty window at 0.
pub fn clamp_window(window: RowWindow, len: usize) -> RowWindow {
    let end_index = window.end_index.min(len);
    RowWindow {
        first_index: window.first_index.min(end_index),
        end_index,
    }
}

/// Convenience composition of [`compute_window`] and [`clamp_window`].
pub fn visible_window(scroll_offset: u64, row_height: u32, viewport_px: u32, len: usize) -> RowWindow {
    clamp_window(compute_window(scroll_offset, row_height, viewport_px), len)
}
