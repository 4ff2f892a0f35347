// ABOUTME: DOM analysis module for readability-based content selection.
// ABOUTME: Houses the block scoring heuristics used by the extractor.

pub mod scoring;
