//! Example: Counter Widget Object
//!
//! Demonstrates: a typed widget wrapping a bound counter component,
//! driven through the full find / read / interact / re-read protocol.
//!
//! Run with: `cargo run --example counter_widget`

use std::cell::Cell;
use std::rc::Rc;
use tantear::prelude::*;

struct CounterWidget<D: LocatorDriver> {
    count: ChildLocator<D>,
    increment: ChildLocator<D>,
    base: BaseWidget<D>,
}

impl<D: LocatorDriver> Widget<D> for CounterWidget<D> {
    const ROOT_SELECTOR: &'static str = ".counter";

    fn from_base(base: BaseWidget<D>) -> Self {
        Self {
            count: base.child(".count"),
            increment: base.child("button.increment"),
            base,
        }
    }
}

impl<D: LocatorDriver> CounterWidget<D> {
    fn value(&self) -> TantearResult<String> {
        self.count.resolve()?.text()
    }

    fn click_increment(&self) -> TantearResult<()> {
        self.increment.resolve()?.click()
    }
}

fn main() -> TantearResult<()> {
    println!("=== Counter Widget Example ===\n");

    // 1. Build a counter component with a text binding
    println!("1. Building the counter tree...");
    let count = Rc::new(Cell::new(0));
    let label = Element::builder("span").class("count").build();
    let handler_count = Rc::clone(&count);
    let root = Element::builder("main")
        .child(
            Element::builder("div")
                .class("counter")
                .child(label.clone())
                .child(
                    Element::builder("button")
                        .class("increment")
                        .text("+")
                        .on_click(move || handler_count.set(handler_count.get() + 1))
                        .build(),
                )
                .build(),
        )
        .build();
    let ctx = RenderContext::new(root);
    let source = Rc::clone(&count);
    ctx.bind_text(&label, move || source.get().to_string());
    println!("   Tree: main > div.counter > (span.count, button.increment)");

    // 2. Find the widget
    println!("\n2. Finding CounterWidget...");
    let finder = WidgetFinder::new(HeadlessDriver::document(&ctx));
    let counter: CounterWidget<HeadlessDriver> = finder.find()?;
    println!("   Root scope: {}", counter.base.driver().description());
    println!("   Initial value: {}", counter.value()?);

    // 3. Interact and observe re-renders
    println!("\n3. Clicking increment twice...");
    counter.click_increment()?;
    println!("   After one click:  {}", counter.value()?);
    counter.click_increment()?;
    println!("   After two clicks: {}", counter.value()?);
    println!("   Update passes so far: {}", ctx.update_passes());

    // 4. The widget reads the live tree, never a cache
    println!("\n4. Mutating state behind the widget's back...");
    count.set(40);
    ctx.detect_changes();
    println!("   Widget now reads: {}", counter.value()?);

    // 5. Snapshot the rendered tree
    println!("\n5. Capturing a tree snapshot...");
    let snapshot = ctx.snapshot();
    println!("{}", snapshot.to_json()?);

    println!("\n=== Counter example complete ===");
    Ok(())
}
