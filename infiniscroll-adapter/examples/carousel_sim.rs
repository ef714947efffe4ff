use infiniscroll::{LoopOptions, Point, Size};
use infiniscroll_adapter::{
    Controller, DataSource, Delegate, Easing, OrientationCenter, ScrollView,
};

// Simulates a toolkit binding: a fake scroll view, a string data source and a printing delegate.
struct Photos(Vec<&'static str>);

impl DataSource for Photos {
    type Cell = String;

    fn item_count(&self) -> usize {
        self.0.len()
    }

    fn cell(&mut self, logical: usize, _slot: usize) -> Option<String> {
        self.0.get(logical).map(|s| s.to_string())
    }
}

struct Printer;

impl Delegate for Printer {
    fn did_select(&mut self, logical: usize, slot: usize) {
        println!("selected logical={logical} slot={slot}");
    }

    fn did_settle(&mut self, page_index: usize) {
        println!("settled on page {page_index}");
    }
}

struct FakeView {
    bounds: Size,
    offset: Point,
}

impl ScrollView for FakeView {
    fn bounds_size(&self) -> Size {
        self.bounds
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point, _animated: bool) {
        self.offset = offset;
    }

    fn reload_data(&mut self) {
        println!("reload");
    }

    fn select_slot(&mut self, slot: usize, animated: bool) {
        println!("select slot={slot} animated={animated}");
    }
}

fn main() {
    let center = OrientationCenter::new();
    let mut c = Controller::new(
        LoopOptions::with_item_size(0, Size::new(320.0, 200.0)),
        Photos(vec!["dunes", "harbor", "glacier", "canyon", "meadow"]),
        Printer,
    )
    .with_orientation(&center);
    let mut view = FakeView {
        bounds: Size::new(320.0, 200.0),
        offset: Point::ZERO,
    };

    c.layout_subviews(&mut view);
    println!("slots={} offset={:?}", c.number_of_slots(), view.offset);

    // Swipe backwards through two full cycles, one page per frame.
    for _ in 0..10 {
        view.offset.x -= 320.0;
        c.did_scroll(&mut view);
        let cells: Vec<String> = c.visible_cells().into_iter().map(|(_, cell)| cell).collect();
        println!("page={} offset={:.1} cells={cells:?}", c.page_index(), view.offset.x);
    }
    c.did_end_decelerating();

    c.did_select_item_at(7);
    c.select_item(&mut view, 3, true);

    c.start_tween_to_page(1, 0, 240, Easing::EaseInOutCubic);
    let mut now_ms = 0;
    while let Some(off) = c.tick(&mut view, now_ms) {
        println!("t={now_ms} offset={:.1}", off.x);
        now_ms += 16;
    }

    view.bounds = Size::new(568.0, 200.0);
    center.post();
    c.poll_notifications(&mut view);
    println!("after rotation: offset={:?} page={}", view.offset, c.page_index());
}
