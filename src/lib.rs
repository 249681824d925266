// Undertone: multi-engine sentiment, keyword, and entity analysis for short text.
//
// This is the library root. Each module corresponds to one analysis stage;
// `pipeline` composes them behind a single facade loaded once at startup.

pub mod config;
pub mod entities;
pub mod keywords;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod text;
