//! Msgcat - user-facing message catalog extractor
//!
//! Msgcat walks the Flutter desktop/mobile trees and the .NET backend tree of a
//! project, extracts string literals that look like user-facing feedback
//! (SnackBars, form validators, dialogs, backend exception messages), filters
//! the UI candidates to a Bosnian/Croatian vocabulary, and writes a grouped
//! Markdown catalog of every distinct message and the places it appears.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and command dispatch)
//! - `config`: Heuristic configuration (areas, markers, vocabulary) and file loading
//! - `scanner`: Directory traversal and lossy line reading
//! - `extract`: Per-dialect line extraction heuristics
//! - `vocabulary`: Target-language vocabulary filter for UI candidates
//! - `catalog`: Occurrence aggregation and situation classification
//! - `render`: Markdown catalog rendering

pub mod catalog;
pub mod cli;
pub mod config;
pub mod extract;
pub mod render;
pub mod scanner;
pub mod vocabulary;
