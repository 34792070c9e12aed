//! The "massive dataset" scenario: a parameterized mock generator stands in
//! for a backend behind the asynchronous search path, and two racing
//! searches show the stale-response discard.

use std::sync::{Arc, Mutex};

use listwindow::ViewRow;
use listwindow_select::{Key, PanelWidth, SearchToken, Select, SelectHost, SelectOptions};

#[derive(Clone, Debug)]
struct Record {
    label: String,
    value: u64,
}

/// Generates `total` records sharing the requested prefix.
fn mock_results(keyword: &str, total: usize) -> Vec<Record> {
    (0..total)
        .map(|i| Record {
            label: format!("{keyword}{i}"),
            value: i as u64,
        })
        .collect()
}

struct QuietHost;

impl SelectHost<Record> for QuietHost {
    fn create_slot(&mut self, _slot: usize, _row_height: u32) {}

    fn update_slot(&mut self, slot: usize, row: &ViewRow<Record>, _keyword: &str) {
        println!("slot {slot} <- [{}] {}", row.absolute_index, row.origin.label);
    }

    fn hide_slot(&mut self, _slot: usize) {}

    fn set_slot_highlight(&mut self, _slot: usize, _focused: bool, _selected: bool) {}

    fn set_content_height(&mut self, px: u64) {
        println!("content height: {px}px");
    }

    fn set_scroll_offset(&mut self, _px: u64) {}

    fn set_panel_open(&mut self, _open: bool) {}

    fn set_panel_width(&mut self, _width: &PanelWidth) {}

    fn set_panel_max_height(&mut self, _px: u32) {}

    fn set_empty_visible(&mut self, _visible: bool) {}

    fn set_loading_visible(&mut self, visible: bool) {
        println!("loading: {visible}");
    }

    fn set_input_value(&mut self, text: &str) {
        println!("input: {text:?}");
    }
}

fn label(record: &Record) -> &str {
    &record.label
}

fn key(record: &Record) -> u64 {
    record.value
}

fn main() {
    let requests: Arc<Mutex<Vec<(String, SearchToken)>>> = Arc::new(Mutex::new(Vec::new()));
    let queue = Arc::clone(&requests);

    let mut host = QuietHost;
    let mut select = Select::new(
        SelectOptions::new(label, key).with_on_search(move |keyword, token| {
            queue.lock().unwrap().push((keyword.to_string(), token));
        }),
        &mut host,
    )
    .expect("valid configuration");

    // Two searches race; the older one resolves last and is discarded.
    select.on_input("a", 0);
    select.tick(&mut host, 500);
    select.on_input("ab", 600);
    select.tick(&mut host, 1_100);

    let issued = requests.lock().unwrap().clone();
    let (first_kw, first_token) = issued[0].clone();
    let (second_kw, second_token) = issued[1].clone();

    select.resolve_search(&mut host, second_token, Ok(mock_results(&second_kw, 2_000_000)));
    println!("after {second_kw:?}: {} rows", select.engine().len());

    select.resolve_search(&mut host, first_token, Ok(mock_results(&first_kw, 10)));
    println!(
        "after stale {first_kw:?}: {} rows (unchanged)",
        select.engine().len()
    );

    select.on_key(&mut host, Key::ArrowDown);
    select.on_key(&mut host, Key::Enter);
}
