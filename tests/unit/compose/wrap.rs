use super::*;

/// Ten units per character, including the joining space.
fn char_metrics(s: &str) -> f32 {
    s.chars().count() as f32 * 10.0
}

#[test]
fn fills_each_line_greedily() {
    let lines = wrap_greedy("aa bb cc dd", 50.0, char_metrics);
    assert_eq!(lines, vec!["aa bb", "cc dd"]);
}

#[test]
fn break_positions_are_reproducible() {
    let text = "the quick brown fox jumps over the lazy dog";
    let first = wrap_greedy(text, 120.0, char_metrics);
    let second = wrap_greedy(text, 120.0, char_metrics);
    assert_eq!(first, second);
    for line in &first {
        assert!(char_metrics(line) <= 120.0);
    }
}

#[test]
fn overwide_word_gets_its_own_line_unsplit() {
    let lines = wrap_greedy("hi incomprehensibilities yo", 80.0, char_metrics);
    assert_eq!(lines, vec!["hi", "incomprehensibilities", "yo"]);
}

#[test]
fn single_fitting_line_is_not_broken() {
    let lines = wrap_greedy("short text", 200.0, char_metrics);
    assert_eq!(lines, vec!["short text"]);
}

#[test]
fn empty_and_whitespace_text_produce_no_lines() {
    assert!(wrap_greedy("", 100.0, char_metrics).is_empty());
    assert!(wrap_greedy("   \t  ", 100.0, char_metrics).is_empty());
}

#[test]
fn collapses_runs_of_whitespace() {
    let lines = wrap_greedy("a   b\t c", 1000.0, char_metrics);
    assert_eq!(lines, vec!["a b c"]);
}
