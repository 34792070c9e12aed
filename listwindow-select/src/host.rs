use listwindow::ViewRow;

use crate::options::PanelWidth;

/// The embedding-UI side of the widget.
///
/// The consumer owns a pre-existing text input and attaches a dropdown
/// panel with a scrollable list container beneath it; the widget drives
/// every presentation effect through this trait and never touches UI state
/// directly. Slots are addressed by their position in the reuse pool.
///
/// Implementations stay dumb: the widget guarantees ordering (window math
/// before slot updates, highlights last) and never issues a call that
/// repeats the current state.
pub trait SelectHost<T> {
    /// A new physical slot is needed. Slots are created lazily with a fixed
    /// height and are only ever hidden afterwards, never destroyed.
    fn create_slot(&mut self, slot: usize, row_height: u32);

    /// Fills a slot with a row: content, pixel position, and the active
    /// keyword so hosts can emphasize the matched prefix of the label.
    fn update_slot(&mut self, slot: usize, row: &ViewRow<T>, keyword: &str);

    /// Takes a stale slot out of view when the window shrinks.
    fn hide_slot(&mut self, slot: usize);

    fn set_slot_highlight(&mut self, slot: usize, focused: bool, selected: bool);

    /// Sizes the scrollable container so native scrollbar geometry matches
    /// the logical dataset length.
    fn set_content_height(&mut self, px: u64);

    /// Moves the physical scroll position: forced scrolls from keyboard
    /// navigation and the reset when an asynchronous search starts.
    fn set_scroll_offset(&mut self, px: u64);

    fn set_panel_open(&mut self, open: bool);

    fn set_panel_width(&mut self, width: &PanelWidth);

    fn set_panel_max_height(&mut self, px: u32);

    fn set_empty_visible(&mut self, visible: bool);

    fn set_loading_visible(&mut self, visible: bool);

    /// Writes a confirmed item's label back into the text input.
    fn set_input_value(&mut self, text: &str);
}
