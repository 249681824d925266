// Colored terminal output for analysis reports.
//
// This module handles all terminal-specific formatting; main.rs delegates
// here. It is the Rust stand-in for the original dashboard's chart tabs:
// one panel per analysis.

use colored::Colorize;

use crate::entities::grouping::group_by_label;
use crate::entities::Entity;
use crate::pipeline::AnalysisReport;
use crate::sentiment::{AnalysisResult, Sentiment};

/// Display a full analysis report: both sentiment panels, the keyword
/// table, and the grouped entity view.
pub fn display_report(report: &AnalysisReport) {
    display_sentiment_panel("Pattern engine", &report.pattern);
    display_sentiment_panel("Valence engine", &report.valence);
    display_keywords(&report.keywords);
    display_entities(&report.entities);
}

/// Display one classifier's result.
pub fn display_sentiment_panel(engine: &str, result: &AnalysisResult) {
    println!("\n{}", format!("=== Sentiment ({engine}) ===").bold());

    println!("  Sentiment: {}", colorize_sentiment(result.sentiment));
    println!("  Polarity: {:+.3}", result.polarity);

    match result.subjectivity {
        Some(subjectivity) => println!("  Subjectivity: {subjectivity:.3}"),
        None => println!("  Subjectivity: {}", "not measured".dimmed()),
    }

    if let Some(raw) = &result.raw_scores {
        println!(
            "  Components: pos {:.3}  neg {:.3}  neu {:.3}  compound {:+.4}",
            raw.pos, raw.neg, raw.neu, raw.compound
        );
    }
}

/// Display the keyword frequency table with proportional bars.
pub fn display_keywords(keywords: &[(String, usize)]) {
    println!("\n{}", "=== Top Keywords ===".bold());

    if keywords.is_empty() {
        println!("  {}", "No keywords survived stopword filtering.".dimmed());
        return;
    }

    let max_count = keywords.iter().map(|(_, c)| *c).max().unwrap_or(1);
    for (word, count) in keywords {
        let bar_len = (count * 30).div_ceil(max_count);
        println!(
            "  {:<20} {:>4}  {}",
            word,
            count,
            "#".repeat(bar_len).cyan()
        );
    }
}

/// Display entities grouped by label, deduplicated and lexically sorted.
pub fn display_entities(entities: &[Entity]) {
    println!("\n{}", "=== Named Entities ===".bold());

    if entities.is_empty() {
        println!(
            "  {}",
            "No significant entities identified in the provided text.".dimmed()
        );
        return;
    }

    for (label, texts) in group_by_label(entities) {
        println!("  {}", label.bold());
        for text in texts {
            // Pattern spans are normally short, but a degenerate match
            // (a long run-on capitalized phrase) shouldn't wreck the panel.
            println!("    - {}", super::truncate_chars(&text, 60));
        }
    }
}

/// Colorize a sentiment label.
fn colorize_sentiment(sentiment: Sentiment) -> colored::ColoredString {
    let label = sentiment.to_string();
    match sentiment {
        Sentiment::Positive => label.green().bold(),
        Sentiment::Negative => label.red().bold(),
        Sentiment::Neutral => label.yellow(),
    }
}
