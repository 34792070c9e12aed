use alloc::vec::Vec;

use listwindow::{EmitKey, ViewModel};

use crate::navigator::Navigator;
use crate::{SelectHost, SelectionKey};

#[derive(Clone, Debug)]
struct SlotEntry<K> {
    absolute_index: usize,
    key: K,
    visible: bool,
    focused: bool,
    selected: bool,
}

/// A bounded pool of reusable physical slots.
///
/// Slot `i` always displays row `i` of the current view-model. The pool
/// records which absolute index and value key each slot is showing, so
/// click lookups and highlight decisions never reach back into the host.
///
/// The pool never exceeds the window capacity: slots are created lazily as
/// the first full window materializes and are reused for the widget's
/// lifetime. When the window shrinks, the stale tail is hidden rather than
/// destroyed.
#[derive(Debug)]
pub struct SlotPool<K> {
    entries: Vec<SlotEntry<K>>,
    last_reconciled: Option<EmitKey>,
}

impl<K: SelectionKey> SlotPool<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_reconciled: None,
        }
    }

    /// Physical slots created so far.
    pub fn slot_count(&self) -> usize {
        self.entries.len()
    }

    /// The (absolute index, value key) a slot currently displays, for click
    /// lookups. Hidden slots yield nothing.
    pub fn lookup(&self, slot: usize) -> Option<(usize, &K)> {
        let entry = self.entries.get(slot)?;
        entry.visible.then_some((entry.absolute_index, &entry.key))
    }

    /// Maps a view-model onto physical slots: reuse slot `i` when it
    /// exists, create it otherwise, and hide the stale tail left behind by
    /// a shrinking window.
    ///
    /// Re-invoking with an unchanged view-model (same window, same dataset
    /// generation) performs no host mutations.
    pub fn reconcile<T>(
        &mut self,
        host: &mut impl SelectHost<T>,
        vm: &ViewModel<T>,
        keyword: &str,
        row_height: u32,
        key_of: impl Fn(&T) -> K,
    ) {
        let key = vm.emit_key();
        if self.last_reconciled == Some(key) {
            return;
        }
        self.last_reconciled = Some(key);
        seltrace!(
            first = vm.window.first_index,
            rows = vm.rows.len(),
            generation = vm.generation,
            "reconcile"
        );

        for (slot, row) in vm.rows.iter().enumerate() {
            if slot >= self.entries.len() {
                host.create_slot(slot, row_height);
                host.update_slot(slot, row, keyword);
                self.entries.push(SlotEntry {
                    absolute_index: row.absolute_index,
                    key: key_of(&row.origin),
                    visible: true,
                    focused: false,
                    selected: false,
                });
            } else {
                host.update_slot(slot, row, keyword);
                let entry = &mut self.entries[slot];
                entry.absolute_index = row.absolute_index;
                entry.key = key_of(&row.origin);
                entry.visible = true;
            }
        }

        for slot in vm.rows.len()..self.entries.len() {
            let entry = &mut self.entries[slot];
            if entry.visible {
                host.hide_slot(slot);
                entry.visible = false;
            }
        }
    }

    /// Recomputes highlighting for every materialized slot as a pure
    /// function of the navigation state. Flags are cached per slot so
    /// unchanged highlights issue no host calls.
    pub fn apply_highlights<T>(
        &mut self,
        host: &mut impl SelectHost<T>,
        navigator: &Navigator<K>,
    ) {
        for (slot, entry) in self.entries.iter_mut().enumerate() {
            if !entry.visible {
                continue;
            }
            let (focused, selected) = navigator.highlight_for(entry.absolute_index, &entry.key);
            if focused != entry.focused || selected != entry.selected {
                entry.focused = focused;
                entry.selected = selected;
                host.set_slot_highlight(slot, focused, selected);
            }
        }
    }
}

impl<K: SelectionKey> Default for SlotPool<K> {
    fn default() -> Self {
        Self::new()
    }
}
