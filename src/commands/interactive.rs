//! Interactive query mode
//!
//! Builds the graph once and answers repeated ladder queries from stdin.

use super::solve::{SolveConfig, solve_ladder};
use crate::graph::Graph;
use crate::output::print_solve_result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// One parsed line of user input
#[derive(Debug, PartialEq, Eq)]
pub enum Query {
    Solve { source: String, target: String },
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl Query {
    /// Parse a line: `source target`, `help`, or `quit`
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => Self::Empty,
            [cmd] => match cmd.to_lowercase().as_str() {
                "quit" | "q" | "exit" => Self::Quit,
                "help" | "h" | "?" => Self::Help,
                _ => Self::Invalid(format!("Expected two words, got only {cmd:?}")),
            },
            [source, target] => Self::Solve {
                source: (*source).to_string(),
                target: (*target).to_string(),
            },
            _ => Self::Invalid(format!("Expected two words, got {}", parts.len())),
        }
    }
}

/// Run the interactive loop on stdin until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_interactive(graph: &Graph, deadline: Option<Duration>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Ladder - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Loaded {} {}-letter words ({} links).",
        graph.len(),
        graph.word_length(),
        graph.edge_count()
    );
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "ladder>".bright_cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };

        match Query::parse(&line) {
            Query::Empty => {}
            Query::Help => print_help(),
            Query::Quit => break,
            Query::Invalid(message) => println!("{} {message}", "❌".red()),
            Query::Solve { source, target } => {
                let config = SolveConfig::new(&source, &target).with_deadline(deadline);
                match solve_ladder(&config, graph) {
                    Ok(result) => print_solve_result(&result, false),
                    Err(e) => println!("{} {e}", "❌".red()),
                }
            }
        }
    }

    println!("\n👋 Bye!\n");
    Ok(())
}

fn print_help() {
    println!("\nEnter two words separated by a space to find a ladder between them.");
    println!("Commands: 'help' for this message, 'quit' to exit\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_word_pair() {
        assert_eq!(
            Query::parse("  cold   warm "),
            Query::Solve {
                source: "cold".to_string(),
                target: "warm".to_string()
            }
        );
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Query::parse("quit"), Query::Quit);
        assert_eq!(Query::parse("Q"), Query::Quit);
        assert_eq!(Query::parse("help"), Query::Help);
        assert_eq!(Query::parse("   "), Query::Empty);
    }

    #[test]
    fn rejects_wrong_word_count() {
        assert!(matches!(Query::parse("cold"), Query::Invalid(_)));
        assert!(matches!(Query::parse("cold warm hot"), Query::Invalid(_)));
    }
}
