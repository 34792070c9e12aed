use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;

use listwindow::{RowWindow, ViewModel, ViewRow};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Opt {
    label: String,
    value: u64,
}

fn opt(label: &str, value: u64) -> Opt {
    Opt {
        label: String::from(label),
        value,
    }
}

fn rows(n: usize) -> Vec<Opt> {
    (0..n).map(|i| opt(&format!("Row {i:05}"), i as u64)).collect()
}

fn label_of(item: &Opt) -> &str {
    &item.label
}

fn key_of(item: &Opt) -> u64 {
    item.value
}

fn sync_options(data: Vec<Opt>) -> SelectOptions<Opt, u64> {
    SelectOptions::new(label_of, key_of).with_data(data)
}

type SearchLog = Arc<Mutex<Vec<(String, SearchToken)>>>;

fn async_options(calls: &SearchLog) -> SelectOptions<Opt, u64> {
    let calls = Arc::clone(calls);
    SelectOptions::new(label_of, key_of).with_on_search(move |keyword, token| {
        calls.lock().unwrap().push((String::from(keyword), token));
    })
}

#[derive(Clone, Debug, Default)]
struct SlotView {
    label: String,
    absolute_index: usize,
    pixel_offset: u64,
    visible: bool,
    focused: bool,
    selected: bool,
}

/// Records every presentation effect so tests can assert both final state
/// and how many mutations it took to get there.
#[derive(Debug, Default)]
struct MockHost {
    ops: Vec<String>,
    created: usize,
    slots: Vec<SlotView>,
    content_height: u64,
    scroll_offset: u64,
    panel_open: bool,
    empty_visible: bool,
    loading_visible: bool,
    input_value: String,
    panel_width: Option<PanelWidth>,
    panel_max_height: u32,
}

impl MockHost {
    fn visible_labels(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.label.as_str())
            .collect()
    }

    fn slot_showing(&self, absolute_index: usize) -> Option<&SlotView> {
        self.slots
            .iter()
            .find(|s| s.visible && s.absolute_index == absolute_index)
    }
}

impl SelectHost<Opt> for MockHost {
    fn create_slot(&mut self, slot: usize, _row_height: u32) {
        assert_eq!(slot, self.slots.len(), "slots must be created in order");
        self.created += 1;
        self.slots.push(SlotView::default());
        self.ops.push(format!("create:{slot}"));
    }

    fn update_slot(&mut self, slot: usize, row: &ViewRow<Opt>, _keyword: &str) {
        let view = &mut self.slots[slot];
        view.label = row.origin.label.clone();
        view.absolute_index = row.absolute_index;
        view.pixel_offset = row.pixel_offset;
        view.visible = true;
        self.ops.push(format!("update:{slot}:{}", view.label));
    }

    fn hide_slot(&mut self, slot: usize) {
        self.slots[slot].visible = false;
        self.ops.push(format!("hide:{slot}"));
    }

    fn set_slot_highlight(&mut self, slot: usize, focused: bool, selected: bool) {
        let view = &mut self.slots[slot];
        view.focused = focused;
        view.selected = selected;
        self.ops.push(format!("highlight:{slot}:{focused}:{selected}"));
    }

    fn set_content_height(&mut self, px: u64) {
        self.content_height = px;
        self.ops.push(format!("content_height:{px}"));
    }

    fn set_scroll_offset(&mut self, px: u64) {
        self.scroll_offset = px;
        self.ops.push(format!("scroll:{px}"));
    }

    fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
        self.ops.push(format!("panel:{open}"));
    }

    fn set_panel_width(&mut self, width: &PanelWidth) {
        self.panel_width = Some(*width);
    }

    fn set_panel_max_height(&mut self, px: u32) {
        self.panel_max_height = px;
    }

    fn set_empty_visible(&mut self, visible: bool) {
        self.empty_visible = visible;
        self.ops.push(format!("empty:{visible}"));
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
        self.ops.push(format!("loading:{visible}"));
    }

    fn set_input_value(&mut self, text: &str) {
        self.input_value = String::from(text);
        self.ops.push(format!("input:{text}"));
    }
}

#[test]
fn construction_rejects_bad_configuration() {
    let mut host = MockHost::default();

    let err = Select::new(SelectOptions::new(label_of, key_of), &mut host).err();
    assert_eq!(err, Some(SelectError::NoDataSource));

    let err = Select::new(
        sync_options(vec![]).with_on_search(|_, _| {}),
        &mut host,
    )
    .err();
    assert_eq!(err, Some(SelectError::ConflictingDataSources));

    let err = Select::new(sync_options(vec![]).with_row_height(0), &mut host).err();
    assert_eq!(err, Some(SelectError::InvalidRowHeight));

    let err = Select::new(sync_options(vec![]).with_viewport_height(0), &mut host).err();
    assert_eq!(err, Some(SelectError::InvalidViewport));
}

#[test]
fn sync_mode_starts_with_the_full_list() {
    let mut host = MockHost::default();
    let select = Select::new(
        sync_options(vec![opt("Apple", 1), opt("Banana", 2), opt("Apricot", 3)]),
        &mut host,
    )
    .unwrap();

    assert_eq!(select.keyword(), "");
    assert_eq!(select.engine().len(), 3);
    assert_eq!(host.content_height, 96);
    assert_eq!(host.visible_labels(), ["Apple", "Banana", "Apricot"]);
    assert!(!host.empty_visible);
    assert!(!host.panel_open);
    assert_eq!(host.panel_width, Some(PanelWidth::Full));
    assert_eq!(host.panel_max_height, 300);
    assert_eq!(select.navigation_state().focused, None);
}

#[test]
fn prefix_match_rules() {
    assert!(prefix_matches("Apple", "Ap"));
    assert!(prefix_matches("Apple", "ap"));
    assert!(prefix_matches("Apple", "AP"));
    assert!(prefix_matches("Apple", ""));
    assert!(!prefix_matches("Banana", "Ap"));
    assert!(!prefix_matches("Ap", "Apple"));
    // Multi-byte labels compare per character, never by byte offset.
    assert!(prefix_matches("éclair", "É"));
    assert!(prefix_matches("日本語", "日"));
    assert!(!prefix_matches("日本語", "本"));
}

#[test]
fn sync_search_filters_by_prefix() {
    let mut host = MockHost::default();
    let mut select = Select::new(
        sync_options(vec![opt("Apple", 1), opt("Banana", 2), opt("Apricot", 3)]),
        &mut host,
    )
    .unwrap();

    select.on_input("Ap", 0);
    select.tick(&mut host, 499);
    assert_eq!(select.engine().len(), 3, "debounce window still open");

    select.tick(&mut host, 500);
    assert_eq!(host.visible_labels(), ["Apple", "Apricot"]);
    assert_eq!(select.keyword(), "Ap");
    assert_eq!(select.navigation_state().focused, None);

    // A lowercase keyword yields the same result set.
    select.on_input("ap", 600);
    select.tick(&mut host, 1100);
    assert_eq!(host.visible_labels(), ["Apple", "Apricot"]);
    assert_eq!(select.keyword(), "ap");
}

#[test]
fn stale_slots_hide_when_results_shrink() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(rows(100)), &mut host).unwrap();
    assert_eq!(host.created, 11); // ceil(300/32) + 1 buffer row

    select.on_input("Row 00001", 0);
    select.tick(&mut host, 500);

    assert_eq!(select.engine().len(), 1);
    assert_eq!(host.visible_labels(), ["Row 00001"]);
    assert!(host.slots[1..].iter().all(|s| !s.visible));
    assert!(host.ops.iter().any(|op| op == "hide:1"));
    // The pool is reused, not rebuilt.
    assert_eq!(host.created, 11);
}

#[test]
fn pool_stays_bounded_under_scroll_storm() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(rows(10_000)), &mut host).unwrap();

    let mut rng = Lcg::new(0xACE);
    for _ in 0..500 {
        let offset = rng.gen_range_u64(0, 400_000);
        select.on_scroll(&mut host, offset);
        assert!(host.visible_labels().len() <= 11);
    }
    assert_eq!(host.created, 11);
    assert_eq!(host.slots.len(), 11);
}

#[test]
fn keyboard_focus_stays_in_bounds_and_materialized() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(rows(100)), &mut host).unwrap();

    let mut rng = Lcg::new(7);
    for _ in 0..1_000 {
        let key = if rng.gen_bool() {
            Key::ArrowDown
        } else {
            Key::ArrowUp
        };
        select.on_key(&mut host, key);

        let focused = select.navigation_state().focused.expect("focus set after first move");
        assert!(focused < 100);
        assert!(select.engine().window().contains(focused));
        let slot = host
            .slot_showing(focused)
            .expect("focused row must be materialized");
        assert!(slot.focused);
        // Exactly one slot carries the focus style.
        assert_eq!(host.slots.iter().filter(|s| s.visible && s.focused).count(), 1);
    }
}

#[test]
fn focus_wraps_at_both_ends() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(rows(100)), &mut host).unwrap();

    // Up from the initial unfocused state wraps to the last row; the
    // requested end offset clamps to the last page.
    select.on_key(&mut host, Key::ArrowUp);
    assert_eq!(select.navigation_state().focused, Some(99));
    assert_eq!(host.scroll_offset, 2_900); // 100*32 - 300
    assert!(host.slot_showing(99).unwrap().focused);

    // Down from the last row wraps to the top.
    select.on_key(&mut host, Key::ArrowDown);
    assert_eq!(select.navigation_state().focused, Some(0));
    assert_eq!(host.scroll_offset, 0);
    assert!(host.slot_showing(0).unwrap().focused);
}

#[test]
fn arrow_down_pulls_the_window_forward() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(rows(100)), &mut host).unwrap();

    // Rows 0..=10 are materialized; walking onto them forces no scroll.
    for _ in 0..11 {
        select.on_key(&mut host, Key::ArrowDown);
    }
    assert_eq!(select.navigation_state().focused, Some(10));
    assert_eq!(host.scroll_offset, 0);

    // One more step leaves the window: the viewport jumps to the focus.
    select.on_key(&mut host, Key::ArrowDown);
    assert_eq!(select.navigation_state().focused, Some(11));
    assert_eq!(host.scroll_offset, 352);
    assert_eq!(select.engine().window().first_index, 11);
    assert!(host.slot_showing(11).unwrap().focused);
}

#[test]
fn arrow_up_above_the_window_pulls_it_back() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(rows(100)), &mut host).unwrap();

    for _ in 0..12 {
        select.on_key(&mut host, Key::ArrowDown);
    }
    assert_eq!(select.engine().window().first_index, 11);

    select.on_key(&mut host, Key::ArrowUp);
    assert_eq!(select.navigation_state().focused, Some(10));
    assert_eq!(host.scroll_offset, 320);
    assert_eq!(select.engine().window().first_index, 10);
    assert!(host.slot_showing(10).unwrap().focused);
}

#[test]
fn enter_confirms_the_focused_row() {
    let picked: Arc<Mutex<Option<Opt>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&picked);

    let mut host = MockHost::default();
    let mut select = Select::new(
        sync_options(vec![opt("A", 1), opt("B", 2)])
            .with_on_select(move |item: &Opt| *sink.lock().unwrap() = Some(item.clone())),
        &mut host,
    )
    .unwrap();

    select.on_input_focus(&mut host);
    assert!(host.panel_open);

    select.on_key(&mut host, Key::ArrowDown);
    select.on_key(&mut host, Key::ArrowDown);
    select.on_key(&mut host, Key::Enter);

    assert_eq!(host.input_value, "B");
    assert!(!host.panel_open);
    assert_eq!(picked.lock().unwrap().as_ref().unwrap().value, 2);
    assert_eq!(select.navigation_state().selected, Some(2));
    assert_eq!(select.navigation_state().focused, Some(1));

    // Exactly the row with value 2 is selected-styled.
    let selected: Vec<_> = host.slots.iter().filter(|s| s.visible && s.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].absolute_index, 1);
}

#[test]
fn enter_without_focus_is_ignored() {
    let picked: Arc<Mutex<Option<Opt>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&picked);

    let mut host = MockHost::default();
    let mut select = Select::new(
        sync_options(rows(5)).with_on_select(move |item: &Opt| {
            *sink.lock().unwrap() = Some(item.clone());
        }),
        &mut host,
    )
    .unwrap();

    select.on_key(&mut host, Key::Enter);
    assert_eq!(host.input_value, "");
    assert!(picked.lock().unwrap().is_none());
    assert_eq!(select.navigation_state().selected, None);
}

#[test]
fn row_click_confirms_by_slot() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(rows(10)), &mut host).unwrap();
    select.on_input_focus(&mut host);

    select.on_row_click(&mut host, 3);
    assert_eq!(host.input_value, "Row 00003");
    assert_eq!(select.navigation_state().selected, Some(3));
    assert_eq!(select.navigation_state().focused, Some(3));
    assert!(!host.panel_open);

    // A slot that was never materialized cannot confirm anything.
    select.on_row_click(&mut host, 99);
    assert_eq!(select.navigation_state().selected, Some(3));
}

#[test]
fn dismissal_keeps_focus_and_selection() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(rows(10)), &mut host).unwrap();

    select.on_input_focus(&mut host);
    assert!(select.is_open());
    select.on_key(&mut host, Key::ArrowDown);
    select.on_key(&mut host, Key::ArrowDown);
    let before = select.navigation_state();

    select.on_key(&mut host, Key::Escape);
    assert!(!select.is_open());
    assert!(!host.panel_open);
    assert_eq!(select.navigation_state(), before);

    select.on_input_focus(&mut host);
    assert!(host.panel_open);
    select.on_outside_click(&mut host);
    assert!(!host.panel_open);
    assert_eq!(select.navigation_state(), before);
}

#[test]
fn async_search_lifecycle() {
    let calls: SearchLog = Arc::new(Mutex::new(Vec::new()));
    let mut host = MockHost::default();
    let mut select = Select::new(async_options(&calls), &mut host).unwrap();

    assert!(host.empty_visible, "no data before the first search");

    select.on_input("a", 0);
    select.tick(&mut host, 500);

    assert!(select.is_loading());
    assert!(host.loading_visible);
    assert!(!host.empty_visible);
    assert_eq!(host.scroll_offset, 0);
    let (keyword, token) = calls.lock().unwrap()[0].clone();
    assert_eq!(keyword, "a");
    assert_eq!(select.pending_search(), Some(token));

    select.resolve_search(&mut host, token, Ok(rows(20)));

    assert!(!select.is_loading());
    assert!(!host.loading_visible);
    assert_eq!(select.pending_search(), None);
    assert_eq!(select.engine().len(), 20);
    assert_eq!(host.content_height, 640);
    assert_eq!(select.navigation_state().focused, Some(0));
    assert!(host.slot_showing(0).unwrap().focused);
}

#[test]
fn stale_async_response_is_discarded() {
    let calls: SearchLog = Arc::new(Mutex::new(Vec::new()));
    let mut host = MockHost::default();
    let mut select = Select::new(async_options(&calls), &mut host).unwrap();

    select.on_input("a", 0);
    select.tick(&mut host, 500);
    select.on_input("ab", 600);
    select.tick(&mut host, 1_100);

    let issued = calls.lock().unwrap().clone();
    assert_eq!(issued.len(), 2);
    let (_, first_token) = issued[0].clone();
    let (_, second_token) = issued[1].clone();

    // The newer request resolves first and wins.
    select.resolve_search(&mut host, second_token, Ok(vec![opt("ab-result", 1)]));
    assert_eq!(host.visible_labels(), ["ab-result"]);

    // The older response arrives late and must not overwrite it.
    select.resolve_search(&mut host, first_token, Ok(vec![opt("a-result", 9)]));
    assert_eq!(host.visible_labels(), ["ab-result"]);
    assert_eq!(select.engine().len(), 1);
    assert_eq!(select.engine().data()[0].label, "ab-result");
    assert!(!host.loading_visible);
}

#[test]
fn failed_search_clears_loading_and_shows_empty() {
    let calls: SearchLog = Arc::new(Mutex::new(Vec::new()));
    let mut host = MockHost::default();
    let mut select = Select::new(async_options(&calls), &mut host).unwrap();

    select.on_input("a", 0);
    select.tick(&mut host, 500);
    let (_, token) = calls.lock().unwrap()[0].clone();
    select.resolve_search(&mut host, token, Ok(rows(5)));
    assert_eq!(select.engine().len(), 5);

    select.on_input("x", 1_000);
    select.tick(&mut host, 1_500);
    let (_, token) = calls.lock().unwrap()[1].clone();
    select.resolve_search(
        &mut host,
        token,
        Err(SearchFailure::new("backend unavailable")),
    );

    assert!(!host.loading_visible, "never a frozen spinner");
    assert!(host.empty_visible);
    assert!(select.engine().is_empty());
    assert_eq!(select.navigation_state().focused, None);
}

#[test]
fn dismissal_does_not_cancel_an_inflight_search() {
    let calls: SearchLog = Arc::new(Mutex::new(Vec::new()));
    let mut host = MockHost::default();
    let mut select = Select::new(async_options(&calls), &mut host).unwrap();

    select.on_input_focus(&mut host);
    select.on_input("a", 0);
    select.tick(&mut host, 500);
    select.on_outside_click(&mut host);
    assert!(!host.panel_open);

    let (_, token) = calls.lock().unwrap()[0].clone();
    select.resolve_search(&mut host, token, Ok(rows(3)));

    // The resolution still lands; only presentation was dismissed.
    assert_eq!(select.engine().len(), 3);
    assert!(!host.panel_open);
}

#[test]
fn debounce_coalesces_and_dedupes_keywords() {
    let calls: SearchLog = Arc::new(Mutex::new(Vec::new()));
    let mut host = MockHost::default();
    let mut select = Select::new(async_options(&calls), &mut host).unwrap();

    select.on_input("a", 0);
    select.on_input("ab", 100);
    select.on_input("abc", 300);
    select.tick(&mut host, 700);
    assert!(calls.lock().unwrap().is_empty(), "window re-armed at 300");

    select.tick(&mut host, 800);
    {
        let issued = calls.lock().unwrap();
        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].0, "abc");
    }

    // Retyping the fired keyword is consumed silently.
    select.on_input("abc", 1_000);
    select.tick(&mut host, 1_600);
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn rerendering_unchanged_state_is_quiet() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(rows(100)), &mut host).unwrap();

    host.ops.clear();
    let offset = select.engine().scroll_offset();
    select.on_scroll(&mut host, offset);
    assert!(host.ops.is_empty());

    // A scroll inside the same row window changes no slot.
    select.on_scroll(&mut host, 5);
    assert!(host.ops.is_empty());

    select.tick(&mut host, 10_000);
    assert!(host.ops.is_empty());
}

#[test]
fn content_height_follows_every_replacement() {
    let calls: SearchLog = Arc::new(Mutex::new(Vec::new()));
    let mut host = MockHost::default();
    let mut select = Select::new(async_options(&calls), &mut host).unwrap();

    let mut now = 0u64;
    for (i, len) in [7usize, 1_000, 0, 3].into_iter().enumerate() {
        select.on_input(&format!("q{i}"), now);
        now += 500;
        select.tick(&mut host, now);
        let (_, token) = calls.lock().unwrap()[i].clone();
        select.resolve_search(&mut host, token, Ok(rows(len)));
        assert_eq!(host.content_height, len as u64 * 32);
        now += 100;
    }
}

#[test]
fn empty_async_result_leaves_nothing_focused() {
    let calls: SearchLog = Arc::new(Mutex::new(Vec::new()));
    let mut host = MockHost::default();
    let mut select = Select::new(async_options(&calls), &mut host).unwrap();

    select.on_input("zz", 0);
    select.tick(&mut host, 500);
    let (_, token) = calls.lock().unwrap()[0].clone();
    select.resolve_search(&mut host, token, Ok(Vec::new()));

    assert_eq!(select.navigation_state().focused, None);
    assert!(host.empty_visible);
    assert!(!host.loading_visible);
}

#[test]
fn navigation_over_an_empty_result_set_is_inert() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(vec![opt("Apple", 1)]), &mut host).unwrap();

    select.on_input("zzz", 0);
    select.tick(&mut host, 500);
    assert_eq!(select.engine().len(), 0);
    assert!(host.empty_visible);

    select.on_key(&mut host, Key::ArrowDown);
    select.on_key(&mut host, Key::ArrowUp);
    select.on_key(&mut host, Key::Enter);

    assert_eq!(select.navigation_state().focused, None);
    assert_eq!(select.navigation_state().selected, None);
}

#[test]
fn dispose_turns_every_entry_point_into_a_noop() {
    let mut host = MockHost::default();
    let mut select = Select::new(sync_options(rows(10)), &mut host).unwrap();
    select.on_input_focus(&mut host);

    select.dispose(&mut host);
    assert!(select.is_disposed());
    assert!(!host.panel_open);

    host.ops.clear();
    select.on_input("x", 0);
    select.tick(&mut host, 1_000);
    select.on_key(&mut host, Key::ArrowDown);
    select.on_scroll(&mut host, 100);
    select.on_row_click(&mut host, 0);
    select.on_input_focus(&mut host);
    select.resolve_search(&mut host, SearchToken(1), Ok(rows(5)));

    assert!(host.ops.is_empty());
    assert_eq!(select.engine().len(), 10);
    assert_eq!(select.navigation_state().focused, None);
}

#[test]
fn debouncer_fires_once_per_window() {
    let mut debouncer = SearchDebouncer::with_default();
    assert_eq!(debouncer.delay_ms(), DEFAULT_DEBOUNCE_MS);

    debouncer.note_input("a", 0);
    assert!(debouncer.has_pending());
    assert_eq!(debouncer.poll(499), None);
    assert_eq!(debouncer.poll(500).as_deref(), Some("a"));
    assert_eq!(debouncer.poll(501), None, "nothing pending after firing");

    // Same keyword again: consumed without firing.
    debouncer.note_input("a", 600);
    assert_eq!(debouncer.poll(1_200), None);
    assert!(!debouncer.has_pending());

    debouncer.note_input("ab", 1_300);
    debouncer.flush();
    assert_eq!(debouncer.poll(2_000), None);
}

#[test]
fn panel_width_override_is_forwarded() {
    let mut host = MockHost::default();
    let _select = Select::new(
        sync_options(rows(1)).with_panel_width(PanelWidth::Px(240)),
        &mut host,
    )
    .unwrap();
    assert_eq!(host.panel_width, Some(PanelWidth::Px(240)));
}

#[test]
fn slot_pool_reconcile_is_idempotent() {
    let vm = ViewModel {
        rows: vec![
            ViewRow {
                origin: opt("A", 1),
                absolute_index: 0,
                pixel_offset: 0,
            },
            ViewRow {
                origin: opt("B", 2),
                absolute_index: 1,
                pixel_offset: 32,
            },
        ],
        window: RowWindow {
            first_index: 0,
            end_index: 2,
        },
        generation: 1,
        dataset_len: 2,
        total_size: 64,
    };

    let mut pool: SlotPool<u64> = SlotPool::new();
    let mut host = MockHost::default();

    pool.reconcile(&mut host, &vm, "", 32, key_of);
    assert_eq!(pool.slot_count(), 2);
    assert_eq!(pool.lookup(0), Some((0, &1)));
    assert_eq!(pool.lookup(1), Some((1, &2)));
    assert_eq!(pool.lookup(2), None);

    let ops_before = host.ops.len();
    pool.reconcile(&mut host, &vm, "", 32, key_of);
    assert_eq!(host.ops.len(), ops_before, "unchanged view-model mutates nothing");
}

#[test]
fn navigator_is_inert_without_rows() {
    let mut navigator: Navigator<u64> = Navigator::new();
    assert_eq!(navigator.focused(), None);
    assert_eq!(navigator.selected(), None);

    let window = RowWindow::default();
    assert_eq!(navigator.move_down(0, window, 32), None);
    assert_eq!(navigator.move_up(0, window, 32), None);
    assert_eq!(navigator.focused(), None);
    assert_eq!(navigator.confirm_index(0), None);
}

#[test]
fn filter_by_prefix_preserves_order() {
    let data = vec![opt("Apple", 1), opt("Banana", 2), opt("Apricot", 3)];
    let label_accessor: LabelOf<Opt> = Arc::new(label_of);

    let matched = filter_by_prefix(&data, "Ap", &label_accessor);
    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0].label, "Apple");
    assert_eq!(matched[1].label, "Apricot");

    let matched = filter_by_prefix(&data, "ap", &label_accessor);
    assert_eq!(matched.len(), 2);

    assert_eq!(filter_by_prefix(&data, "", &label_accessor).len(), 3);
}
