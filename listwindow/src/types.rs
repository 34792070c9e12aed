use alloc::vec::Vec;

/// The slice of row indexes a viewport can currently see.
///
/// Half-open: `first_index..end_index`. An empty window (`first_index >=
/// end_index`) means nothing is materialized, e.g. for an empty dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowWindow {
    pub first_index: usize,
    pub end_index: usize, // exclusive
}

impl RowWindow {
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.first_index)
    }

    pub fn is_empty(&self) -> bool {
        self.first_index >= self.end_index
    }

    pub fn contains(&self, absolute_index: usize) -> bool {
        absolute_index >= self.first_index && absolute_index < self.end_index
    }

    /// The last materialized index, when the window is non-empty.
    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }
}

/// One row of a view-model snapshot.
///
/// `pixel_offset` is the row's absolute position in the scroll axis
/// (`absolute_index * row_height`), so a renderer can place the row without
/// knowing anything about the rest of the dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewRow<T> {
    pub origin: T,
    pub absolute_index: usize,
    pub pixel_offset: u64,
}

/// An ephemeral snapshot of everything a renderer needs for one frame.
///
/// `rows` covers exactly the clamped window. `generation` identifies the
/// dataset revision the snapshot was built from; together with `window` it
/// forms the de-duplication key for emissions and reconciliation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewModel<T> {
    pub rows: Vec<ViewRow<T>>,
    pub window: RowWindow,
    pub generation: u64,
    pub dataset_len: usize,
    /// Total scrollable extent in pixels (`dataset_len * row_height`).
    pub total_size: u64,
}

impl<T> ViewModel<T> {
    pub fn emit_key(&self) -> EmitKey {
        EmitKey {
            window: self.window,
            generation: self.generation,
        }
    }
}

/// De-duplication key for view emissions: a snapshot is a repeat iff both
/// the clamped window and the dataset generation are unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmitKey {
    pub window: RowWindow,
    pub generation: u64,
}
