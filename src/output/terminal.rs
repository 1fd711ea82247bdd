// Colored terminal output for similarity results.
//
// This module handles all terminal-specific formatting: colors, tables,
// score bands. The main.rs display functions delegate here.

use colored::Colorize;

use crate::pipeline::compare::CompareOutcome;
use crate::profile::word_profile::WordProfile;
use crate::similarity::overlap;

/// Display the ranked pair table in the terminal.
pub fn display_ranked_pairs(outcome: &CompareOutcome) {
    if outcome.document_count < 2 {
        println!("Need at least two documents to compare.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Top Similar Pairs ({} documents, {} pairs scored) ===",
            outcome.document_count, outcome.pair_count
        )
        .bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:>7}  {}",
        "Rank".dimmed(),
        "Score".dimmed(),
        "Documents".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());

    for pair in &outcome.ranked {
        let score_str = format!("{:>6.2}%", pair.score);
        println!(
            "  {:>4}. {}  {}",
            pair.rank,
            colorize_score(pair.score, &score_str),
            super::tail_chars(&pair.left, 52),
        );
        println!(
            "  {:>4}  {:>7}  {}",
            "",
            "",
            super::tail_chars(&pair.right, 52).dimmed(),
        );
    }

    println!();

    // Summary
    let near = outcome.ranked.iter().filter(|p| p.score >= 90.0).count();
    let strong = outcome
        .ranked
        .iter()
        .filter(|p| p.score >= 60.0 && p.score < 90.0)
        .count();

    if near > 0 {
        println!(
            "  {} {} near-duplicate pairs (>= 90%)",
            "!!".red().bold(),
            near
        );
    }
    if strong > 0 {
        println!(
            "  {} {} strongly overlapping pairs (>= 60%)",
            "~".yellow(),
            strong
        );
    }
    if !outcome.degenerate.is_empty() {
        println!(
            "  {} {} documents had no countable words (scored 0 in every pair)",
            "?".dimmed(),
            outcome.degenerate.len()
        );
    }
}

/// Display a single pair's detailed comparison.
pub fn display_pair_detail(
    left_id: &str,
    right_id: &str,
    left: &WordProfile,
    right: &WordProfile,
) {
    let score = overlap::score(left, right);

    println!("\n{}", "=== Pair Comparison ===".bold());
    println!("  Left:  {left_id}");
    println!("  Right: {right_id}");
    println!();

    let score_str = format!("{score:.2}%");
    println!("  Similarity: {}", colorize_score(score, &score_str));
    println!("  Profile sizes: {} / {}", left.len(), right.len());

    let common = overlap::common_tokens(left, right);
    let smaller = left.len().min(right.len());
    println!(
        "  Common tokens: {} of the smaller profile's {}",
        common.len(),
        smaller
    );

    if !common.is_empty() {
        println!();
        for chunk in common.chunks(8) {
            println!("    {}", chunk.join("  ").dimmed());
        }
    }
}

/// Colorize a formatted score string by similarity band.
fn colorize_score(score: f64, text: &str) -> colored::ColoredString {
    if score >= 90.0 {
        text.red().bold()
    } else if score >= 60.0 {
        text.yellow()
    } else {
        text.normal()
    }
}
