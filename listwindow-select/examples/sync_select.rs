//! A scripted session against the synchronous mode: type a prefix, walk the
//! results with the arrow keys, confirm with Enter.

use listwindow::ViewRow;
use listwindow_select::{Key, PanelWidth, Select, SelectHost, SelectOptions};

#[derive(Clone, Debug)]
struct City {
    name: String,
    id: u64,
}

struct PrintHost;

impl SelectHost<City> for PrintHost {
    fn create_slot(&mut self, slot: usize, row_height: u32) {
        println!("create slot {slot} ({row_height}px)");
    }

    fn update_slot(&mut self, slot: usize, row: &ViewRow<City>, keyword: &str) {
        println!(
            "slot {slot} <- [{}] {} (keyword {keyword:?})",
            row.absolute_index, row.origin.name
        );
    }

    fn hide_slot(&mut self, slot: usize) {
        println!("hide slot {slot}");
    }

    fn set_slot_highlight(&mut self, slot: usize, focused: bool, selected: bool) {
        println!("slot {slot}: focused={focused} selected={selected}");
    }

    fn set_content_height(&mut self, px: u64) {
        println!("content height {px}px");
    }

    fn set_scroll_offset(&mut self, px: u64) {
        println!("scroll to {px}px");
    }

    fn set_panel_open(&mut self, open: bool) {
        println!("panel open={open}");
    }

    fn set_panel_width(&mut self, width: &PanelWidth) {
        println!("panel width {width:?}");
    }

    fn set_panel_max_height(&mut self, px: u32) {
        println!("panel max height {px}px");
    }

    fn set_empty_visible(&mut self, visible: bool) {
        println!("empty={visible}");
    }

    fn set_loading_visible(&mut self, visible: bool) {
        println!("loading={visible}");
    }

    fn set_input_value(&mut self, text: &str) {
        println!("input := {text:?}");
    }
}

fn label(city: &City) -> &str {
    &city.name
}

fn key(city: &City) -> u64 {
    city.id
}

fn main() {
    let cities: Vec<City> = [
        "Amsterdam",
        "Athens",
        "Berlin",
        "Bern",
        "Bratislava",
        "Brussels",
        "Bucharest",
        "Budapest",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, name)| City {
        name: name.into(),
        id: i as u64,
    })
    .collect();

    let mut host = PrintHost;
    let mut select = Select::new(
        SelectOptions::new(label, key)
            .with_data(cities)
            .with_on_select(|city: &City| println!("-> picked {}", city.name)),
        &mut host,
    )
    .expect("valid configuration");

    select.on_input_focus(&mut host);
    select.on_input("B", 0);
    select.tick(&mut host, 500);

    select.on_key(&mut host, Key::ArrowDown);
    select.on_key(&mut host, Key::ArrowDown);
    select.on_key(&mut host, Key::Enter);
}
