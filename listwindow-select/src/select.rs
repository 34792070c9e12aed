use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use listwindow::{WindowEngine, WindowEngineOptions};

use crate::debounce::SearchDebouncer;
use crate::error::{SearchFailure, SelectError};
use crate::filter::{FilterSource, SearchToken, filter_by_prefix};
use crate::navigator::{NavigationState, Navigator};
use crate::options::{KeyOf, LabelOf, OnSelectCallback, SelectOptions};
use crate::slots::SlotPool;
use crate::{SelectHost, SelectionKey};

/// The control keys the widget recognizes. Everything else stays with the
/// native text input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Escape,
    Enter,
}

/// A searchable select over a windowed list.
///
/// The controller holds no UI objects; the embedding layer forwards its
/// events (keystrokes, scrolls, clicks, timer ticks, search resolutions)
/// and passes a [`SelectHost`] for the presentation effects each event
/// produces. Everything runs on the caller's thread; nothing blocks.
///
/// Event ordering inside the controller is fixed: a dataset or scroll
/// change always passes through the window math before slots are touched,
/// and highlights are reconciled last.
pub struct Select<T, K = u64> {
    label_of: LabelOf<T>,
    key_of: KeyOf<T, K>,
    on_select: Option<OnSelectCallback<T>>,

    engine: WindowEngine<T>,
    navigator: Navigator<K>,
    debouncer: SearchDebouncer,
    pool: SlotPool<K>,
    source: FilterSource<T>,

    open: bool,
    loading: bool,
    disposed: bool,
    next_token: u64,
    latest_token: Option<SearchToken>,

    last_content_height: Option<u64>,
    last_empty: Option<bool>,
}

impl<T: Clone, K: SelectionKey> Select<T, K> {
    /// Validates the configuration, wires the host panel, and runs the
    /// initial search (synchronous mode starts with the unfiltered list).
    pub fn new(
        options: SelectOptions<T, K>,
        host: &mut impl SelectHost<T>,
    ) -> Result<Self, SelectError> {
        let SelectOptions {
            label_of,
            key_of,
            row_height,
            viewport_height,
            panel_width,
            debounce_ms,
            data,
            on_search,
            on_select,
        } = options;

        if row_height == 0 {
            return Err(SelectError::InvalidRowHeight);
        }
        if viewport_height == 0 {
            return Err(SelectError::InvalidViewport);
        }
        let source = match (data, on_search) {
            (Some(data), None) => FilterSource::Sync { data },
            (None, Some(hook)) => FilterSource::Async { hook },
            (None, None) => return Err(SelectError::NoDataSource),
            (Some(_), Some(_)) => return Err(SelectError::ConflictingDataSources),
        };
        seldebug!(
            row_height,
            viewport_height,
            sync = matches!(source, FilterSource::Sync { .. }),
            "Select::new"
        );

        host.set_panel_width(&panel_width);
        host.set_panel_max_height(viewport_height);
        host.set_panel_open(false);
        host.set_loading_visible(false);

        let mut select = Self {
            label_of,
            key_of,
            on_select,
            engine: WindowEngine::new(WindowEngineOptions::new(row_height, viewport_height)),
            navigator: Navigator::new(),
            debouncer: SearchDebouncer::new(debounce_ms),
            pool: SlotPool::new(),
            source,
            open: false,
            loading: false,
            disposed: false,
            next_token: 0,
            latest_token: None,
            last_content_height: None,
            last_empty: None,
        };

        if matches!(select.source, FilterSource::Sync { .. }) {
            select.apply_sync_filter(host, String::new());
        } else {
            select.render(host);
        }
        Ok(select)
    }

    /// Records a keystroke from the host input. Searches fire from
    /// [`Self::tick`] once the debounce window elapses.
    pub fn on_input(&mut self, text: &str, now_ms: u64) {
        if self.disposed {
            return;
        }
        self.debouncer.note_input(text, now_ms);
    }

    /// Advances the debounce clock; call this from the embedding event
    /// loop's timer. A fired keyword triggers the configured search path.
    pub fn tick(&mut self, host: &mut impl SelectHost<T>, now_ms: u64) {
        if self.disposed {
            return;
        }
        if let Some(keyword) = self.debouncer.poll(now_ms) {
            self.run_search(host, keyword);
        }
    }

    /// The viewport scrolled (user wheel/drag). Recomputes the window and
    /// updates the slots that changed.
    pub fn on_scroll(&mut self, host: &mut impl SelectHost<T>, offset_px: u64) {
        if self.disposed {
            return;
        }
        self.engine.set_scroll_offset_clamped(offset_px);
        self.render(host);
    }

    /// A recognized control key arrived from the host input.
    pub fn on_key(&mut self, host: &mut impl SelectHost<T>, key: Key) {
        if self.disposed {
            return;
        }
        match key {
            Key::ArrowDown => {
                let forced = self.navigator.move_down(
                    self.engine.len(),
                    self.engine.window(),
                    self.engine.row_height(),
                );
                self.apply_forced_scroll(host, forced);
            }
            Key::ArrowUp => {
                let forced = self.navigator.move_up(
                    self.engine.len(),
                    self.engine.window(),
                    self.engine.row_height(),
                );
                self.apply_forced_scroll(host, forced);
            }
            Key::Escape => self.set_open(host, false),
            Key::Enter => {
                if let Some(index) = self.navigator.confirm_index(self.engine.len()) {
                    self.confirm(host, index);
                }
            }
        }
        self.render(host);
    }

    /// A direct click on a materialized row.
    pub fn on_row_click(&mut self, host: &mut impl SelectHost<T>, slot: usize) {
        if self.disposed {
            return;
        }
        let Some((index, _)) = self.pool.lookup(slot) else {
            return;
        };
        self.confirm(host, index);
        self.render(host);
    }

    /// The host input gained focus: open the panel.
    pub fn on_input_focus(&mut self, host: &mut impl SelectHost<T>) {
        if self.disposed {
            return;
        }
        self.set_open(host, true);
    }

    /// A click landed outside the widget: dismiss. Focus and selection are
    /// untouched.
    pub fn on_outside_click(&mut self, host: &mut impl SelectHost<T>) {
        if self.disposed {
            return;
        }
        self.set_open(host, false);
    }

    /// Delivers the outcome of an asynchronous search started through the
    /// `on_search` hook.
    ///
    /// Resolutions for anything but the latest issued token are discarded,
    /// so a slow response can never overwrite fresher data. A failure
    /// clears the loading indicator and shows the empty state; it never
    /// escapes to the embedding page. Dismissing the panel does not cancel
    /// an in-flight search; its resolution still applies here.
    pub fn resolve_search(
        &mut self,
        host: &mut impl SelectHost<T>,
        token: SearchToken,
        result: Result<Vec<T>, SearchFailure>,
    ) {
        if self.disposed {
            return;
        }
        if self.latest_token != Some(token) {
            seltrace!(token = token.0, "discarding stale search resolution");
            return;
        }
        self.latest_token = None;
        self.loading = false;
        host.set_loading_visible(false);
        match result {
            Ok(items) => {
                seldebug!(len = items.len(), "search resolved");
                self.replace_data(host, items, Some(0), None);
            }
            Err(failure) => {
                selwarn!(message = failure.message.as_str(), "search failed");
                let _ = failure;
                self.replace_data(host, Vec::new(), None, None);
            }
        }
    }

    /// Tears the widget down: the panel closes and every later entry point
    /// becomes a no-op. The host releases its event listeners in turn.
    pub fn dispose(&mut self, host: &mut impl SelectHost<T>) {
        if self.disposed {
            return;
        }
        self.debouncer.flush();
        self.set_open(host, false);
        self.disposed = true;
    }

    pub fn keyword(&self) -> &str {
        self.navigator.keyword()
    }

    pub fn navigation_state(&self) -> NavigationState<K> {
        self.navigator.state()
    }

    pub fn engine(&self) -> &WindowEngine<T> {
        &self.engine
    }

    /// Token of the in-flight search, if one is outstanding.
    pub fn pending_search(&self) -> Option<SearchToken> {
        self.latest_token
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn run_search(&mut self, host: &mut impl SelectHost<T>, keyword: String) {
        let hook = match &self.source {
            FilterSource::Async { hook } => Some(Arc::clone(hook)),
            FilterSource::Sync { .. } => None,
        };
        let Some(hook) = hook else {
            self.apply_sync_filter(host, keyword);
            return;
        };
        self.navigator.set_keyword(&keyword);
        self.loading = true;
        host.set_loading_visible(true);
        self.set_empty(host, false);
        self.engine.set_scroll_offset(0);
        host.set_scroll_offset(0);
        let token = self.issue_token();
        seldebug!(keyword = keyword.as_str(), token = token.0, "search issued");
        hook(&keyword, token);
        self.render(host);
    }

    fn apply_sync_filter(&mut self, host: &mut impl SelectHost<T>, keyword: String) {
        let filtered = match &self.source {
            FilterSource::Sync { data } => filter_by_prefix(data, &keyword, &self.label_of),
            FilterSource::Async { .. } => return,
        };
        seldebug!(
            keyword = keyword.as_str(),
            matches = filtered.len(),
            "sync filter"
        );
        self.navigator.set_keyword(&keyword);
        self.replace_data(host, filtered, None, None);
    }

    /// Replaces the dataset wholesale and re-renders. The scroll offset is
    /// re-clamped against the new total height, mirroring what a real
    /// scroll container does when its content shrinks, and the focus target
    /// is dropped when it falls outside the new dataset.
    fn replace_data(
        &mut self,
        host: &mut impl SelectHost<T>,
        items: Vec<T>,
        focused: Option<usize>,
        scroll_to: Option<u64>,
    ) {
        let focused = focused.filter(|&index| index < items.len());
        let before = self.engine.scroll_offset();
        self.engine.batch_update(|engine| {
            engine.set_data(items);
            let target = scroll_to.unwrap_or_else(|| engine.scroll_offset());
            engine.set_scroll_offset_clamped(target);
        });
        if self.engine.scroll_offset() != before {
            host.set_scroll_offset(self.engine.scroll_offset());
        }
        self.navigator.reset_focus(focused);
        self.render(host);
    }

    fn confirm(&mut self, host: &mut impl SelectHost<T>, index: usize) {
        let Some(item) = self.engine.get(index).cloned() else {
            return;
        };
        let label = String::from((self.label_of)(&item));
        seldebug!(index, label = label.as_str(), "confirm");
        self.navigator.set_selected(Some((self.key_of)(&item)));
        self.navigator.focus(index);
        host.set_input_value(&label);
        self.set_open(host, false);
        if let Some(callback) = &self.on_select {
            callback(&item);
        }
    }

    fn apply_forced_scroll(&mut self, host: &mut impl SelectHost<T>, target: Option<u64>) {
        let Some(target) = target else {
            return;
        };
        let clamped = self.engine.clamp_scroll_offset(target);
        self.engine.set_scroll_offset(clamped);
        host.set_scroll_offset(clamped);
    }

    fn set_open(&mut self, host: &mut impl SelectHost<T>, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        host.set_panel_open(open);
    }

    fn set_empty(&mut self, host: &mut impl SelectHost<T>, visible: bool) {
        if self.last_empty == Some(visible) {
            return;
        }
        self.last_empty = Some(visible);
        host.set_empty_visible(visible);
    }

    fn issue_token(&mut self) -> SearchToken {
        self.next_token += 1;
        let token = SearchToken(self.next_token);
        self.latest_token = Some(token);
        token
    }

    /// One frame of presentation: window math, then slot reconciliation,
    /// then highlights. Each stage skips itself when nothing it owns
    /// changed, so re-rendering an unchanged state issues no host calls.
    fn render(&mut self, host: &mut impl SelectHost<T>) {
        let vm = self.engine.view_model();
        if self.last_content_height != Some(vm.total_size) {
            self.last_content_height = Some(vm.total_size);
            host.set_content_height(vm.total_size);
        }
        self.set_empty(host, vm.dataset_len == 0 && !self.loading);

        let row_height = self.engine.row_height();
        self.pool.reconcile(host, &vm, self.navigator.keyword(), row_height, |item| {
            (self.key_of)(item)
        });
        self.pool.apply_highlights(host, &self.navigator);
    }
}
