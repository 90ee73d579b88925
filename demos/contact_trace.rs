/// Walkthrough of the contact-tracing engine:
/// 1. Ingest timestamped contact events
/// 2. Query direct contacts
/// 3. Run an exposure trace with the default incubation window
/// 4. Run the same trace with a custom window
use epitrace::{ContactEvent, ContactGraph, ExposurePropagator, PropagateConfig};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Epitrace Contact Tracing Example ===\n");

    // 1. Ingest a small outbreak's worth of contact events
    let mut graph = ContactGraph::new();
    graph.add_trace(ContactEvent::new("Anna", "Sanni", 100)?);
    graph.add_trace(ContactEvent::new("Anna", "Matt", 110)?);
    graph.add_trace(ContactEvent::new("Sanni", "Kenton", 165)?);
    graph.add_trace(ContactEvent::new("Matt", "Kristian", 140)?);
    graph.add_trace(ContactEvent::new("Kenton", "Kristian", 300)?);
    // Duplicate report from a second data source: silently ignored
    graph.add_trace(ContactEvent::new("Sanni", "Anna", 100)?);

    println!(
        "Ingested {} events across {} people\n",
        graph.store().event_count(),
        graph.store().person_count()
    );

    // 2. Direct contact queries
    println!("Anna <-> Sanni contact times: {:?}", graph.contact_times("Anna", "Sanni"));
    println!("Anna's direct contacts: {:?}", graph.direct_contacts("Anna"));
    println!(
        "Anna's contacts at or after 110: {:?}\n",
        graph.direct_contacts_after("Anna", 110)
    );

    // 3. Exposure trace: Anna contagious from time 90
    let result = ExposurePropagator::with_defaults().compute(&graph, "Anna", 90);
    println!("Exposure trace from Anna at t=90 ({}ms):", result.time_ms);
    for (person, time) in result.timeline() {
        println!("  {} exposed at {}", person, time);
    }

    // 4. Same trace with a tighter incubation window
    let config = PropagateConfig::new().with_incubation_window(20);
    config.validate()?;
    let result = ExposurePropagator::new(config).compute(&graph, "Anna", 90);
    println!("\nWith a 20-unit window, {} people are exposed:", result.len());
    for (person, time) in result.timeline() {
        println!("  {} exposed at {}", person, time);
    }

    Ok(())
}
