//! Tests for card filename sanitization and generation.

use deckmd::files::filename::{self, card_filename, MAX_FRAGMENT_LENGTH};

// ============================================================================
// Invalid Character Replacement Tests
// ============================================================================

#[test]
fn sanitize_replaces_forward_slash() {
    assert_eq!(filename::sanitize("path/to/file"), "path_to_file");
}

#[test]
fn sanitize_replaces_backslash() {
    assert_eq!(filename::sanitize("path\\to\\file"), "path_to_file");
}

#[test]
fn sanitize_replaces_colon() {
    assert_eq!(filename::sanitize("file:name"), "file_name");
}

#[test]
fn sanitize_replaces_question_mark() {
    assert_eq!(filename::sanitize("why?"), "why_");
}

#[test]
fn sanitize_replaces_all_invalid_chars() {
    assert_eq!(
        filename::sanitize("a/b\\c:d*e?f\"g<h>i|j"),
        "a_b_c_d_e_f_g_h_i_j"
    );
}

#[test]
fn sanitize_keeps_markdown_punctuation() {
    assert_eq!(
        filename::sanitize("![Image](files/ab12.png)"),
        "![Image](files_ab12.png)"
    );
}

// ============================================================================
// Whitespace Tests
// ============================================================================

#[test]
fn sanitize_replaces_spaces_with_underscores() {
    assert_eq!(filename::sanitize("my card"), "my_card");
}

#[test]
fn sanitize_collapses_mixed_whitespace() {
    assert_eq!(filename::sanitize("my \t\n card"), "my_card");
}

#[test]
fn sanitize_trims_edges() {
    assert_eq!(filename::sanitize("  padded  "), "padded");
}

#[test]
fn sanitize_of_blank_is_empty() {
    assert_eq!(filename::sanitize(""), "");
    assert_eq!(filename::sanitize("   "), "");
}

// ============================================================================
// Length and Unicode Tests
// ============================================================================

#[test]
fn sanitize_truncates_to_max_length() {
    let long = "x".repeat(250);
    assert_eq!(filename::sanitize(&long).chars().count(), MAX_FRAGMENT_LENGTH);
}

#[test]
fn sanitize_truncates_by_chars_not_bytes() {
    let long = "é".repeat(150);
    let result = filename::sanitize(&long);
    assert_eq!(result.chars().count(), MAX_FRAGMENT_LENGTH);
    assert!(result.chars().all(|c| c == 'é'));
}

#[test]
fn sanitize_keeps_unicode() {
    assert_eq!(filename::sanitize("café über"), "café_über");
}

#[test]
fn sanitize_output_is_always_safe() {
    let repeated = "?/".repeat(80);
    let inputs = [
        "<script>alert(\"x\")</script>",
        "C:\\Windows\\System32",
        "a | b ? c * d",
        repeated.as_str(),
        "What is gradient descent? ![Image](files/ab12.png)",
    ];
    for input in inputs {
        let result = filename::sanitize(input);
        assert!(
            !result.contains(['<', '>', ':', '"', '/', '\\', '|', '?', '*']),
            "unsafe output {:?} for {:?}",
            result,
            input
        );
        assert!(result.chars().count() <= MAX_FRAGMENT_LENGTH);
        assert_eq!(filename::sanitize(input), result, "deterministic");
    }
}

// ============================================================================
// Card Filename Tests
// ============================================================================

#[test]
fn card_filename_pads_ordinal() {
    assert_eq!(card_filename(1, "Hello"), "001_Hello.md");
    assert_eq!(card_filename(42, "Hello"), "042_Hello.md");
    assert_eq!(card_filename(1234, "Hello"), "1234_Hello.md");
}

#[test]
fn card_filename_falls_back_when_front_is_blank() {
    assert_eq!(card_filename(3, ""), "003_card.md");
    assert_eq!(card_filename(3, "  \n "), "003_card.md");
}

#[test]
fn card_filename_uses_first_fifty_chars() {
    let front = format!("{}{}", "a".repeat(50), "TAIL");
    assert_eq!(card_filename(1, &front), format!("001_{}.md", "a".repeat(50)));
}

#[test]
fn card_filename_for_resolved_image_reference() {
    assert_eq!(
        card_filename(1, "What is gradient descent? ![Image](files/ab12.png)"),
        "001_What_is_gradient_descent__![Image](files_ab12.png).md"
    );
}
