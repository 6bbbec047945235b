//! Example: Widget Discovery and Queries
//!
//! Demonstrates: finding widgets by selector, text content, scope, and
//! position, plus graceful handling of absent widgets.
//!
//! Run with: `cargo run --example finder_demo`

use tantear::prelude::*;

struct CardWidget<D: LocatorDriver> {
    title: ChildLocator<D>,
    base: BaseWidget<D>,
}

impl<D: LocatorDriver> Widget<D> for CardWidget<D> {
    const ROOT_SELECTOR: &'static str = "section.card";

    fn from_base(base: BaseWidget<D>) -> Self {
        Self {
            title: base.child("h2"),
            base,
        }
    }
}

impl<D: LocatorDriver> CardWidget<D> {
    fn title(&self) -> TantearResult<String> {
        self.title.resolve()?.text()
    }
}

fn card(id: &str, title: &str, tagline: &str) -> Element {
    Element::builder("section")
        .class("card")
        .id(id)
        .child(Element::builder("h2").text(title).build())
        .child(Element::builder("p").class("tagline").text(tagline).build())
        .build()
}

fn main() -> TantearResult<()> {
    println!("=== Finder Demo ===\n");

    // 1. Build a board of cards
    println!("1. Building a board with three cards...");
    let root = Element::builder("main")
        .child(card("inbox", "Inbox", "unsorted work"))
        .child(card("doing", "Doing", "work in flight"))
        .child(card("done", "Done", "shipped work"))
        .build();
    let ctx = RenderContext::new(root);
    let finder = WidgetFinder::new(HeadlessDriver::document(&ctx));

    // 2. First match in document order
    println!("\n2. find() takes the first card...");
    let first: CardWidget<HeadlessDriver> = finder.find()?;
    println!("   First card: {}", first.title()?);

    // 3. All matches, each independently scoped
    println!("\n3. find_all() returns every card...");
    let cards: Vec<CardWidget<HeadlessDriver>> = finder.find_all()?;
    for card in &cards {
        println!("   {} ({})", card.title()?, card.base.driver().description());
    }

    // 4. Narrow by selector or by text
    println!("\n4. Narrowing queries...");
    let doing: CardWidget<HeadlessDriver> = finder.find_with("#doing")?;
    println!("   By id:   {}", doing.title()?);
    let shipped: CardWidget<HeadlessDriver> = finder
        .query()
        .with_text(TextFilter::contains("shipped"))
        .first()?;
    println!("   By text: {}", shipped.title()?);
    let last: CardWidget<HeadlessDriver> = finder.query().nth(2)?;
    println!("   By position: {}", last.title()?);

    // 5. Absence is an error for find, an empty vec for find_all
    println!("\n5. Asking for a widget that is not there...");
    struct MissingWidget<D: LocatorDriver> {
        #[allow(dead_code)]
        base: BaseWidget<D>,
    }
    impl<D: LocatorDriver> Widget<D> for MissingWidget<D> {
        const ROOT_SELECTOR: &'static str = ".missing";
        fn from_base(base: BaseWidget<D>) -> Self {
            Self { base }
        }
    }
    match finder.find::<MissingWidget<HeadlessDriver>>() {
        Ok(_) => println!("   Unexpectedly found one!"),
        Err(err) => println!("   find() error: {err}"),
    }
    let none: Vec<MissingWidget<HeadlessDriver>> = finder.find_all()?;
    println!("   find_all() length: {}", none.len());

    println!("\n=== Finder demo complete ===");
    Ok(())
}
