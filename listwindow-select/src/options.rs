use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::filter::{SearchHook, SearchToken};

/// Accessor for an item's display label (the configurable label field).
pub type LabelOf<T> = Arc<dyn for<'a> Fn(&'a T) -> &'a str + Send + Sync>;

/// Accessor for an item's value key (the configurable value field), used
/// for selection-highlight equality.
pub type KeyOf<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Callback invoked with the raw item when a selection is confirmed.
pub type OnSelectCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

pub const DEFAULT_ROW_HEIGHT: u32 = 32;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 300;

/// How wide the dropdown panel renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelWidth {
    /// Match the host input's width.
    #[default]
    Full,
    Px(u32),
}

/// Configuration for [`crate::Select`].
///
/// Cheap to clone: accessors and callbacks are stored in `Arc`s. Exactly
/// one of `data` (synchronous mode) and `on_search` (asynchronous mode)
/// must be set; construction rejects anything else.
pub struct SelectOptions<T, K = u64> {
    pub label_of: LabelOf<T>,
    pub key_of: KeyOf<T, K>,
    /// Fixed pixel height of every row; drives the window math and the
    /// scroll container's total height.
    pub row_height: u32,
    /// Pixel height of the dropdown viewport; drives window capacity.
    pub viewport_height: u32,
    pub panel_width: PanelWidth,
    /// Quiet period after the last keystroke before a search fires.
    pub debounce_ms: u64,
    /// Master list for synchronous mode.
    pub data: Option<Vec<T>>,
    /// Lookup hook for asynchronous mode.
    pub on_search: Option<SearchHook>,
    /// Invoked with the confirmed item.
    pub on_select: Option<OnSelectCallback<T>>,
}

impl<T, K> SelectOptions<T, K> {
    pub fn new(
        label_of: impl for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
        key_of: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            label_of: Arc::new(label_of),
            key_of: Arc::new(key_of),
            row_height: DEFAULT_ROW_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            panel_width: PanelWidth::Full,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            data: None,
            on_search: None,
            on_select: None,
        }
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_panel_width(mut self, panel_width: PanelWidth) -> Self {
        self.panel_width = panel_width;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Enables synchronous mode with an in-memory master list.
    pub fn with_data(mut self, data: Vec<T>) -> Self {
        self.data = Some(data);
        self
    }

    /// Enables asynchronous mode with an external lookup hook.
    pub fn with_on_search(
        mut self,
        on_search: impl Fn(&str, SearchToken) + Send + Sync + 'static,
    ) -> Self {
        self.on_search = Some(Arc::new(on_search));
        self
    }

    pub fn with_on_select(mut self, on_select: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Arc::new(on_select));
        self
    }
}

impl<T, K> Clone for SelectOptions<T, K>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            label_of: Arc::clone(&self.label_of),
            key_of: Arc::clone(&self.key_of),
            row_height: self.row_height,
            viewport_height: self.viewport_height,
            panel_width: self.panel_width,
            debounce_ms: self.debounce_ms,
            data: self.data.clone(),
            on_search: self.on_search.clone(),
            on_select: self.on_select.clone(),
        }
    }
}

impl<T, K> core::fmt::Debug for SelectOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectOptions")
            .field("row_height", &self.row_height)
            .field("viewport_height", &self.viewport_height)
            .field("panel_width", &self.panel_width)
            .field("debounce_ms", &self.debounce_ms)
            .field("sync", &self.data.is_some())
            .field("async", &self.on_search.is_some())
            .finish_non_exhaustive()
    }
}
