//! Word Ladder
//!
//! Finds the shortest chain of dictionary words between two words of equal
//! length, changing one letter per step.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::LadderConfig;
//! use word_ladder::dictionary::{DictionarySource, load_words};
//! use word_ladder::graph::build;
//! use word_ladder::search::find_path;
//!
//! let config = LadderConfig::new(4).unwrap();
//! let words = load_words(&config, &DictionarySource::BuiltIn).unwrap();
//! let graph = build(&words);
//!
//! let result = find_path(&graph, "cold", "warm").unwrap();
//! if let Some(ladder) = result.ladder() {
//!     println!("{ladder} ({} steps)", ladder.len());
//! }
//! ```

// Core domain types
pub mod core;

// Word sources
pub mod dictionary;

// Graph construction
pub mod graph;

// Shortest-path search
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
