//! Tests for CLI output formatting helpers
//!
//! - Duration formatting (ms, s, m)
//! - Relative time formatting (just now, minutes ago, hours ago, days ago)
//! - Character-safe truncation
//! - Match rendering

use chrono::{Duration, Utc};
use medibot::cli::output::{
    format_duration, format_relative_time, format_score, truncate_chars, write_match,
};
use medibot::core::types::{MatchResult, MatchTier};

#[test]
fn test_format_duration_ranges() {
    assert_eq!(format_duration(0.0), "0ms");
    assert_eq!(format_duration(0.042), "42ms");
    assert_eq!(format_duration(2.0), "2.00s");
    assert_eq!(format_duration(125.0), "2m 5.0s");
}

#[test]
fn test_format_relative_time_ranges() {
    let now = Utc::now();
    assert_eq!(format_relative_time(&now), "just now");
    assert_eq!(format_relative_time(&(now - Duration::minutes(5))), "5m ago");
    assert_eq!(format_relative_time(&(now - Duration::hours(3))), "3h ago");
    assert_eq!(format_relative_time(&(now - Duration::days(2))), "2d ago");
    assert_eq!(
        format_relative_time(&(now + Duration::hours(1))),
        "in the future"
    );
}

#[test]
fn test_format_score_three_decimals() {
    assert_eq!(format_score(0.5), "0.500");
    assert_eq!(format_score(0.1234), "0.123");
}

#[test]
fn test_truncate_chars_boundaries() {
    assert_eq!(truncate_chars("short", 10), "short");
    assert_eq!(truncate_chars("exactly10!", 10), "exactly10!");
    assert_eq!(truncate_chars("this is too long", 10), "this is...");
    assert_eq!(truncate_chars("🤒🤒🤒🤒🤒", 4), "🤒...");
}

#[test]
fn test_write_match_renders_details() {
    colored::control::set_override(false);
    let result = MatchResult {
        answer: "Rest and fluids.".to_string(),
        score: 0.512,
        matched_question: Some("What should I do for fever?".to_string()),
        tags: vec!["General Physician".to_string()],
        tier: MatchTier::BestMatch,
    };

    let mut buf = Vec::new();
    write_match(&mut buf, &result).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.starts_with("Rest and fluids.\n"));
    assert!(text.contains("score 0.512, best-match"));
    assert!(text.contains("matched \"What should I do for fever?\""));
    assert!(text.contains("Tags: General Physician"));
}
