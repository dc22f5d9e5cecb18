//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, pluralize};
use crate::commands::{BenchmarkResult, GraphStats, NeighborsResult, SolveResult};
use crate::search::PathResult;
use colored::Colorize;

/// Print the result of solving a ladder
///
/// The chain is printed target first: `target <- ... <- source`.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    match &result.outcome {
        PathResult::Found(ladder) => {
            println!("{}", "✅ Found a solution!".green().bold());
            println!("{}", ladder.to_string().bright_white().bold());
            println!("{}.", pluralize(ladder.len(), "step"));
        }
        PathResult::NoPath { source, target } => {
            println!(
                "{}",
                format!("❌ There is no path from {source} to {target}")
                    .red()
                    .bold()
            );
        }
    }

    if verbose {
        println!(
            "   {}",
            format!("Searched in {}", format_duration(result.duration)).bright_black()
        );
    }
}

/// Print the neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    let note = if result.in_dictionary {
        String::new()
    } else {
        format!(" {}", "(not in dictionary)".bright_black())
    };
    println!(
        "{}{}: {}",
        result.word.bright_yellow().bold(),
        note,
        pluralize(result.neighbors.len(), "neighbor")
    );
    for neighbor in &result.neighbors {
        println!("  • {neighbor}");
    }
}

/// Print graph statistics
pub fn print_graph_stats(stats: &GraphStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD GRAPH:".bright_cyan().bold(),
        format!("{}-letter words", stats.word_length)
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Structure:".bright_cyan().bold());
    println!("   Words:              {}", stats.vertices);
    println!("   Links:              {}", stats.edges);
    println!("   Isolated words:     {}", stats.isolated);
    println!("   Components:         {}", stats.components);

    let share = if stats.vertices == 0 {
        0.0
    } else {
        stats.largest_component as f64 / stats.vertices as f64 * 100.0
    };
    println!(
        "   Largest component:  [{}] {} ({share:.1}%)",
        create_progress_bar(share, 100.0, 20).green(),
        stats.largest_component
    );
    println!("   Average degree:     {:.2}", stats.average_degree);
    if let Some((word, degree)) = &stats.most_connected {
        println!(
            "   Most connected:     {} ({})",
            word.bright_yellow(),
            pluralize(*degree, "neighbor")
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Connected:        {}",
        format!("{}", result.connected).green()
    );
    println!(
        "   No path:          {}",
        format!("{}", result.disconnected).yellow()
    );
    if result.timed_out > 0 {
        println!(
            "   Timed out:        {}",
            format!("{}", result.timed_out).red()
        );
    }
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_length)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {}", format_duration(result.duration));
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if let Some(longest) = &result.longest {
        println!("\n🪜 {}", "Longest ladder:".bright_cyan().bold());
        println!("   {longest}");
        println!("   {}", pluralize(longest.len(), "step"));
    }

    if result.connected > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&length, &count) in &result.distribution {
            let pct = (count as f64 / result.connected as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {length:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
