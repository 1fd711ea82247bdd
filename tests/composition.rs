// Composition tests — verifying the pieces chain together correctly.
//
// These tests exercise the data flow between modules:
//   Loader -> Profiler -> Matrix -> Ranking -> Report
// with real files in temporary directories and no other side effects.

use std::fs;

use doppel::corpus::document::Document;
use doppel::corpus::loader::load_corpus;
use doppel::output::report::write_report;
use doppel::output::tail_chars;
use doppel::pipeline::compare::{profile_corpus, rank_pairs, run};
use doppel::profile::frequency::FrequencyProfiler;
use doppel::profile::stopwords::StopwordSet;
use doppel::similarity::matrix::score_matrix;

fn doc(id: &str, content: &str) -> Document {
    Document::new(id.to_string(), content.to_string())
}

// ============================================================
// Chain: Profiler -> Matrix -> Ranking
// ============================================================

#[test]
fn identical_documents_rank_first() {
    let documents = vec![
        doc(
            "a.txt",
            "The storm broke over the harbor and the ships scattered.",
        ),
        doc(
            "b.txt",
            "Quarterly earnings exceeded expectations across divisions.",
        ),
        doc(
            "c.txt",
            "The storm broke over the harbor and the ships scattered.",
        ),
    ];
    let outcome = run(&FrequencyProfiler::default(), &documents, 10);

    assert_eq!(outcome.document_count, 3);
    assert_eq!(outcome.pair_count, 3);
    assert_eq!(outcome.ranked[0].left, "a.txt");
    assert_eq!(outcome.ranked[0].right, "c.txt");
    assert_eq!(outcome.ranked[0].score, 100.0);
    assert_eq!(outcome.ranked[0].rank, 1);
}

#[test]
fn profile_corpus_preserves_document_order() {
    let documents = vec![
        doc("first", "falcon falcon falcon"),
        doc("second", "heron heron"),
        doc("third", "osprey"),
    ];
    let profiles = profile_corpus(&FrequencyProfiler::default(), &documents);

    assert_eq!(profiles.len(), 3);
    assert!(profiles[0].contains("FALCON"));
    assert!(profiles[1].contains("HERON"));
    assert!(profiles[2].contains("OSPREY"));
}

#[test]
fn degenerate_documents_are_flagged_not_fatal() {
    let documents = vec![
        doc("real.txt", "granite slate marble"),
        doc("noise.txt", "!!! ... ???"),
        doc("stop.txt", "the and of in"),
    ];
    let outcome = run(&FrequencyProfiler::default(), &documents, 10);

    assert_eq!(outcome.degenerate, ["noise.txt", "stop.txt"]);
    assert_eq!(outcome.ranked.len(), 3, "degenerate pairs still ranked");
    for pair in &outcome.ranked {
        assert_eq!(pair.score, 0.0);
    }
}

#[test]
fn rank_pairs_attaches_ids_and_sequential_ranks() {
    let documents = vec![
        doc("wolves.txt", "wolf pack howl wolf"),
        doc("bears.txt", "bear den honey"),
        doc("wolves_copy.txt", "wolf pack howl"),
    ];
    let profiles = profile_corpus(&FrequencyProfiler::default(), &documents);
    let ranked = rank_pairs(&score_matrix(&profiles), &documents, 2);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].rank, 2);
    assert_eq!(ranked[0].left, "wolves.txt");
    assert_eq!(ranked[0].right, "wolves_copy.txt");
    assert_eq!(ranked[0].score, 100.0);
}

#[test]
fn empty_corpus_is_a_valid_empty_outcome() {
    let outcome = run(&FrequencyProfiler::default(), &[], 10);

    assert_eq!(outcome.document_count, 0);
    assert_eq!(outcome.pair_count, 0);
    assert!(outcome.ranked.is_empty());
    assert!(outcome.degenerate.is_empty());
}

#[test]
fn single_document_yields_no_pairs() {
    let outcome = run(&FrequencyProfiler::default(), &[doc("only.txt", "alone")], 10);

    assert_eq!(outcome.document_count, 1);
    assert_eq!(outcome.pair_count, 0);
    assert!(outcome.ranked.is_empty());
}

#[test]
fn stopword_choice_changes_what_counts_as_overlap() {
    let documents = vec![
        doc("a.txt", "the ancient map and the sealed letter"),
        doc("b.txt", "the modern chart and the open envelope"),
    ];

    let strict = run(&FrequencyProfiler::default(), &documents, 10);
    assert_eq!(strict.ranked[0].score, 0.0, "only function words are shared");

    let lax = run(&FrequencyProfiler::new(StopwordSet::none()), &documents, 10);
    assert!(
        lax.ranked[0].score > 0.0,
        "with filtering off, THE and AND count as overlap"
    );
}

// ============================================================
// Chain: Loader -> Pipeline -> Report
// ============================================================

#[test]
fn directory_to_report_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "alpha beta gamma delta epsilon").unwrap();
    fs::write(dir.path().join("two.txt"), "alpha beta gamma delta zeta").unwrap();
    fs::write(dir.path().join("three.txt"), "omega psi chi").unwrap();

    let documents = load_corpus(dir.path(), "txt", false).unwrap();
    assert_eq!(documents.len(), 3);
    // Lexicographic path order fixes the corpus indices
    assert!(documents[0].id.ends_with("one.txt"));
    assert!(documents[1].id.ends_with("three.txt"));
    assert!(documents[2].id.ends_with("two.txt"));

    let outcome = run(&FrequencyProfiler::default(), &documents, 5);
    assert_eq!(
        outcome.ranked[0].score, 80.0,
        "4 of the smaller profile's 5 tokens are shared"
    );
    assert!(outcome.ranked[0].left.ends_with("one.txt"));
    assert!(outcome.ranked[0].right.ends_with("two.txt"));

    let report_path = dir.path().join("results.txt");
    write_report(&outcome, &report_path).unwrap();
    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("1. Similarity Score: 80.00%"));
    assert!(report.contains("Document 1:"));
    assert!(report.contains(&outcome.ranked[0].left));
}

#[test]
fn loader_excludes_unreadable_files_from_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), "stone arch bridge").unwrap();
    fs::write(dir.path().join("bin.txt"), [0xFFu8, 0xFE, 0x80, 0x80]).unwrap();

    let documents = load_corpus(dir.path(), "txt", false).unwrap();
    assert_eq!(documents.len(), 1);
    assert!(documents[0].id.ends_with("good.txt"));

    // The excluded file never shows up as a degenerate all-zero profile
    let outcome = run(&FrequencyProfiler::default(), &documents, 10);
    assert!(outcome.degenerate.is_empty());
}

#[test]
fn recursive_discovery_expands_the_corpus() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("top.txt"), "surface words").unwrap();
    let nested = dir.path().join("archive");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("deep.txt"), "buried words").unwrap();

    assert_eq!(load_corpus(dir.path(), "txt", false).unwrap().len(), 1);
    assert_eq!(load_corpus(dir.path(), "txt", true).unwrap().len(), 2);
}

#[test]
fn missing_corpus_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_corpus(&dir.path().join("absent"), "txt", false).unwrap_err();
    assert!(err.to_string().contains("absent"));
}

// ============================================================
// Serialization and display helpers
// ============================================================

#[test]
fn outcome_serializes_with_ranks_and_scores() {
    let documents = vec![
        doc("left.txt", "mirror mirror wall"),
        doc("right.txt", "mirror mirror wall"),
    ];
    let outcome = run(&FrequencyProfiler::default(), &documents, 10);
    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["document_count"], 2);
    assert_eq!(value["ranked"][0]["rank"], 1);
    assert_eq!(value["ranked"][0]["left"], "left.txt");
    assert_eq!(value["ranked"][0]["score"], 100.0);
}

#[test]
fn tail_chars_keeps_the_distinguishing_tail() {
    assert_eq!(tail_chars("short.txt", 16), "short.txt");
    assert_eq!(
        tail_chars("corpus/novels/a_very_long_novel.txt", 16),
        "...ong_novel.txt"
    );
}
