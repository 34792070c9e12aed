use alloc::string::String;

use listwindow::RowWindow;

use crate::SelectionKey;

/// A snapshot of the keyboard/selection state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationState<K> {
    /// `None` means nothing is focused yet.
    pub focused: Option<usize>,
    /// Value key of the confirmed item, if any.
    pub selected: Option<K>,
    pub keyword: String,
}

/// The keyboard/selection state machine.
///
/// `focused` ranges over the full logical dataset and is meaningful
/// independently of which rows happen to be materialized. Movement
/// transitions return the scroll offset the viewport must be forced to (if
/// any) so the focused row lands inside the window; callers apply it
/// through the engine's clamp so a wrap to the end stops at the last full
/// page.
#[derive(Clone, Debug)]
pub struct Navigator<K> {
    focused: Option<usize>,
    selected: Option<K>,
    keyword: String,
}

impl<K: SelectionKey> Navigator<K> {
    pub fn new() -> Self {
        Self {
            focused: None,
            selected: None,
            keyword: String::new(),
        }
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword.clear();
        self.keyword.push_str(keyword);
    }

    /// Applied on every dataset replacement: asynchronous resolutions focus
    /// the first row, synchronous filters clear the focus.
    pub fn reset_focus(&mut self, focused: Option<usize>) {
        self.focused = focused;
    }

    pub fn focus(&mut self, index: usize) {
        self.focused = Some(index);
    }

    pub fn set_selected(&mut self, key: Option<K>) {
        self.selected = key;
    }

    /// Moves the focus down one row, wrapping past the end back to the top.
    ///
    /// `window` is the currently materialized window. Returns the scroll
    /// offset to force when the new focus is not materialized.
    pub fn move_down(&mut self, len: usize, window: RowWindow, row_height: u32) -> Option<u64> {
        if len == 0 {
            self.focused = None;
            return None;
        }
        let next = match self.focused {
            None => 0,
            Some(i) => i + 1,
        };
        if next >= len {
            self.focused = Some(0);
            return Some(0);
        }
        self.focused = Some(next);
        match window.last_index() {
            Some(last) if next <= last => None,
            _ => Some(next as u64 * row_height as u64),
        }
    }

    /// Moves the focus up one row, wrapping above the top to the last row.
    ///
    /// The wrap requests `len * row_height`; the engine clamp turns that
    /// into the last-page offset.
    pub fn move_up(&mut self, len: usize, window: RowWindow, row_height: u32) -> Option<u64> {
        if len == 0 {
            self.focused = None;
            return None;
        }
        match self.focused {
            None | Some(0) => {
                self.focused = Some(len - 1);
                Some(len as u64 * row_height as u64)
            }
            Some(i) => {
                let prev = i - 1;
                self.focused = Some(prev);
                if window.is_empty() || prev < window.first_index {
                    Some(prev as u64 * row_height as u64)
                } else {
                    None
                }
            }
        }
    }

    /// The index a confirm acts on: the focused index, when it is in range.
    pub fn confirm_index(&self, len: usize) -> Option<usize> {
        self.focused.filter(|&i| i < len)
    }

    /// Highlight policy for one materialized row: focused-styled iff its
    /// absolute index is the focus, selected-styled iff its value key
    /// equals the selected key. Pure; never stored on the dataset.
    pub fn highlight_for(&self, absolute_index: usize, key: &K) -> (bool, bool) {
        let focused = self.focused == Some(absolute_index);
        let selected = self.selected.as_ref() == Some(key);
        (focused, selected)
    }

    pub fn state(&self) -> NavigationState<K> {
        NavigationState {
            focused: self.focused,
            selected: self.selected.clone(),
            keyword: self.keyword.clone(),
        }
    }
}

impl<K: SelectionKey> Default for Navigator<K> {
    fn default() -> Self {
        Self::new()
    }
}
