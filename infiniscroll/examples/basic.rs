// Example: minimal usage, initial centering and a drag past the re-centering threshold.
use infiniscroll::{LoopOptions, LoopingScroller, Point, Size};

fn main() {
    let mut s = LoopingScroller::new(
        LoopOptions::with_item_size(10, Size::new(100.0, 60.0))
            .with_initial_viewport(Some(Size::new(100.0, 60.0))),
    );
    println!("slot_count={} content_size={:?}", s.slot_count(), s.content_size());

    let first = s.on_layout();
    println!("after layout: offset={:?} update={first:?}", s.content_offset());

    // Drag forward one cell at a time; the strip silently re-centers along the way.
    let mut x = s.content_offset().x;
    for _ in 0..20 {
        x += 100.0;
        let update = s.on_scroll(Point::new(x, 0.0));
        if let Some(r) = update.recentered {
            println!("recentered: shift={} new_offset={:?}", r.shift, r.to);
            x = r.to.x;
        }
        println!("page_index={:?} index_offset={}", update.page_index, s.index_offset());
    }

    let visible: Vec<_> = s.visible_slots().iter().map(|v| (v.slot, v.logical)).collect();
    println!("visible (slot, logical)={visible:?}");
}
