//! A headless counter: one coordinator, a label, two buttons, driven by
//! simulated taps. After every flushed pass the label text and the
//! computed frames are printed, so the reuse and layout behavior is
//! visible from the terminal.

use render_core::widgets::{Button, Component, HStack, Label, VStack};
use render_core::{Context, Coordinator, NodeDescriptor};
use render_flex::Size;
use render_testing::RenderHost;
use render_view::{PropId, PropValue};

struct CounterCoordinator {
    count: i64,
}

impl Coordinator for CounterCoordinator {
    type State = i64;
    type Props = ();

    fn create(count: i64, _props: ()) -> Self {
        Self { count }
    }

    fn on_mount(&mut self) {
        log::info!("counter mounted at {}", self.count);
    }
}

impl CounterCoordinator {
    fn increase(&mut self) {
        self.count += 1;
    }

    fn decrease(&mut self) {
        self.count -= 1;
    }
}

fn counter(context: &Context) -> NodeDescriptor {
    Component::<CounterCoordinator>(context, "counter", 0, (), |_context, coordinator| {
        let count = coordinator.with(|c| c.count);
        let inc = coordinator.clone();
        let dec = coordinator.clone();
        VStack()
            .child(
                HStack()
                    .child(
                        Label(format!("Count: {count}"))
                            .key("count-label")
                            .set(PropId::FlexGrow, PropValue::Float(1.0))
                            .build(),
                    )
                    .child(
                        Button("increment", "+", move || {
                            inc.with_mut(|c| c.increase());
                            inc.set_needs_reconcile();
                        })
                        .set(PropId::Width, PropValue::Float(80.0))
                        .build(),
                    )
                    .child(
                        Button("decrement", "-", move || {
                            dec.with_mut(|c| c.decrease());
                            dec.set_needs_reconcile();
                        })
                        .set(PropId::Width, PropValue::Float(80.0))
                        .build(),
                    )
                    .set(PropId::Height, PropValue::Float(44.0))
                    .build(),
            )
            .child(if count % 2 == 0 {
                Label("even").key("parity").build()
            } else {
                NodeDescriptor::null()
            })
    })
}

fn report(host: &RenderHost) {
    let label = host.label_text("count-label").unwrap_or_default();
    let frame = host.frame("count-label").unwrap_or_default();
    let parity = host.label_text("parity");
    println!(
        "  {label:<12} frame={:?} parity={:?} views={}",
        frame,
        parity.as_deref().unwrap_or("-"),
        host.view_count()
    );
}

fn main() {
    env_logger::init();

    println!("=== Render counter demo ===");
    let mut host = RenderHost::new(Size::new(320.0, 480.0), counter);
    let stats = host.render();
    println!("initial pass: {stats:?}");
    report(&host);

    for _ in 0..3 {
        host.tap_and_flush("increment");
        report(&host);
    }
    host.tap_and_flush("decrement");
    report(&host);
}
