//! A headless scroll-window engine for virtualized dropdown lists.
//!
//! For the searchable select state machine built on top, see the
//! `listwindow-select` crate.
//!
//! This crate focuses on the core problem of keeping a huge logical list
//! responsive: mapping a scroll offset and viewport geometry to the exact
//! slice of rows that must exist, and emitting de-duplicated view-model
//! snapshots when (and only when) that slice actually changes.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the viewport height and fixed row height
//! - scroll offsets as the user scrolls
//! - a scroll container whose height it sets from `total_size()`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod options;
mod types;
pub mod window;


pub use engine::WindowEngine;
pub use options::{OnViewChangeCallback, WindowEngineOptions};
pub use types::{EmitKey, RowWindow, ViewModel, ViewRow};
