// Content scoring — heuristic rule table and the analyzer that applies it.

pub mod analyzer;
pub mod rules;
