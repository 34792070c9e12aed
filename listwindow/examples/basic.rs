use listwindow::{WindowEngine, WindowEngineOptions};

fn main() {
    let mut engine = WindowEngine::new(WindowEngineOptions::new(32, 300));
    engine.set_data((0..1_000_000u64).collect());
    engine.set_scroll_offset_clamped(123_456);

    let vm = engine.view_model();
    println!("total_size={}", engine.total_size());
    println!("window={:?}", vm.window);
    println!(
        "first_visible={:?}",
        vm.rows.first().map(|row| (row.absolute_index, row.pixel_offset))
    );

    engine.set_scroll_offset_clamped(u64::MAX);
    println!("clamped_to={}", engine.scroll_offset());
}
