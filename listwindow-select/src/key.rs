/// Bound for selection value keys.
///
/// Highlight policy compares a row's value key against the selected key, and
/// the slot pool caches one key per materialized slot.
pub trait SelectionKey: Clone + PartialEq {}
impl<T: Clone + PartialEq> SelectionKey for T {}
