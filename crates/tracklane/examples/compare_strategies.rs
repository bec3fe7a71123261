//! Example: Comparing layout strategies on one track
//!
//! This example lays out a small gene model with each strategy and prints the
//! resulting rows, then streams the individual heuristic trials.

use tracklane::{
    LayoutBuilder,
    interval::Interval,
    layout::Heuristic,
    strategy::LayoutStrategy,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let intervals = [
        Interval::new("gene", 1_000.0, 9_000.0),
        Interval::new("mrna-1", 1_000.0, 6_500.0),
        Interval::new("mrna-2", 2_400.0, 9_000.0),
        Interval::new("exon-1", 1_000.0, 1_400.0),
        Interval::new("exon-2", 2_400.0, 2_900.0),
        Interval::new("exon-3", 6_100.0, 6_500.0),
        Interval::new("exon-4", 8_600.0, 9_000.0),
        Interval::new("repeat", 3_000.0, 3_300.0),
    ];

    for strategy in [
        LayoutStrategy::Sweep,
        LayoutStrategy::Greedy,
        LayoutStrategy::Heuristic,
    ] {
        let assignment = LayoutBuilder::default()
            .with_strategy(strategy)
            .with_tolerance(50.0)
            .with_seed(2024)
            .layout(&intervals)?;

        println!("{strategy}: {} rows", assignment.row_count());
        for (row, ids) in assignment.rows().iter().enumerate() {
            let names: Vec<String> = ids.iter().map(|id| id.name()).collect();
            println!("  row {row}: {}", names.join(", "));
        }
    }

    let graph = LayoutBuilder::default()
        .with_tolerance(50.0)
        .overlap_graph(&intervals)?;
    let mut engine = Heuristic::new();
    engine.set_trials(5).set_seed(2024);

    println!("\nHeuristic trials:");
    for outcome in engine.trials(&graph) {
        println!(
            "  trial {} (seed {:#018x}): {} rows",
            outcome.trial,
            outcome.seed,
            outcome.assignment.row_count()
        );
    }

    Ok(())
}
