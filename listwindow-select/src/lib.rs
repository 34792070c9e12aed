//! A searchable select state machine built on the `listwindow` engine.
//!
//! The `listwindow` crate answers "which rows exist right now"; this crate
//! adds everything a searchable dropdown needs on top: a bounded pool of
//! reusable row slots, wrap-around keyboard navigation whose focus ranges
//! over the full logical dataset, prefix filtering over an in-memory list
//! or an external asynchronous lookup with stale-response discard, and
//! debounced search triggering.
//!
//! It is framework-neutral (no DOM/ratatui bindings). The embedding layer
//! owns a text input and a dropdown panel, forwards events
//! (`on_input`/`on_key`/`on_scroll`/`tick`/...), and implements
//! [`SelectHost`] to receive the presentation effects.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod debounce;
mod error;
mod filter;
mod host;
mod key;
mod navigator;
mod options;
mod select;
mod slots;

#[cfg(test)]
mod tests;

pub use debounce::{DEFAULT_DEBOUNCE_MS, SearchDebouncer};
pub use error::{SearchFailure, SelectError};
pub use filter::{FilterSource, SearchHook, SearchToken, filter_by_prefix, prefix_matches};
pub use host::SelectHost;
pub use key::SelectionKey;
pub use navigator::{NavigationState, Navigator};
pub use options::{
    DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT, KeyOf, LabelOf, OnSelectCallback, PanelWidth,
    SelectOptions,
};
pub use select::{Key, Select};
pub use slots::SlotPool;
