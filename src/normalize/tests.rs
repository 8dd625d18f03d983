use super::*;

#[test]
fn test_remove_diacritics() {
    assert_eq!(remove_diacritics("áčďéěíňóřšťúůýž"), "acdeeinorstuuyz"); // Czech
    assert_eq!(remove_diacritics("àâéèêëïîôùûüÿ"), "aaeeeeiiouuuy"); // French
    assert_eq!(remove_diacritics("äöü"), "aou"); // German
    assert_eq!(remove_diacritics("ąęńźż"), "aenzz"); // Polish
    assert_eq!(remove_diacritics("ãáàâçéêíõóôúü"), "aaaaceeiooouu"); // Portuguese
    assert_eq!(remove_diacritics("äåéö"), "aaeo"); // Swedish
}

#[test]
fn test_remove_diacritics_from_sentence() {
    assert_eq!(
        remove_diacritics("Parlez-vous Français?"),
        "Parlez-vous Francais?"
    );
}

#[test]
fn test_remove_diacritics_empty_returns_empty() {
    assert_eq!(remove_diacritics(""), "");
}

#[test]
fn test_remove_diacritics_whitespace_returns_whitespace() {
    assert_eq!(remove_diacritics("   "), "   ");
}

#[test]
fn test_remove_diacritics_is_idempotent() {
    let samples = [
        "áčďéěíňóřšťúůýž",
        "Parlez-vous Français?",
        "already plain",
        "ąęńźż mixed avec ü",
    ];
    for sample in samples {
        let once = remove_diacritics(sample);
        assert_eq!(remove_diacritics(&once), once);
    }
}

#[test]
fn test_collapse_whitespace() {
    assert_eq!(
        collapse_whitespace("Test\tCollapse\r\nWhite Space"),
        "Test Collapse White Space"
    );
}

#[test]
fn test_collapse_whitespace_trims_spaces() {
    assert_eq!(
        collapse_whitespace(" Test Collapse White Space "),
        "Test Collapse White Space"
    );
    assert_eq!(
        collapse_whitespace("   Test Collapse White Space   "),
        "Test Collapse White Space"
    );
}

#[test]
fn test_collapse_whitespace_trims_newlines_and_tabs() {
    assert_eq!(
        collapse_whitespace("\nTest Collapse White Space\t"),
        "Test Collapse White Space"
    );
}

#[test]
fn test_collapse_whitespace_removes_consecutive_spaces() {
    assert_eq!(
        collapse_whitespace("Test  Collapse White Space"),
        "Test Collapse White Space"
    );
    assert_eq!(
        collapse_whitespace("Test \t  \t Collapse White Space"),
        "Test Collapse White Space"
    );
}

#[test]
fn test_collapse_whitespace_handles_non_breaking_space() {
    assert_eq!(collapse_whitespace("a\u{a0}b"), "a b");
}

#[test]
fn test_collapse_whitespace_empty_returns_empty() {
    assert_eq!(collapse_whitespace(""), "");
}

#[test]
fn test_trim_end_whitespace_and_punctuation() {
    assert_eq!(trim_end_whitespace_and_punctuation("Test "), "Test");
    assert_eq!(trim_end_whitespace_and_punctuation("Test\r\n"), "Test");
    assert_eq!(trim_end_whitespace_and_punctuation("Test?"), "Test");
    assert_eq!(trim_end_whitespace_and_punctuation("Test? ! @ "), "Test");
}

#[test]
fn test_trim_end_only_strips_end_punctuation() {
    assert_eq!(
        trim_end_whitespace_and_punctuation("?est of punc!uation!"),
        "?est of punc!uation"
    );
}

#[test]
fn test_trim_end_empty_returns_empty() {
    assert_eq!(trim_end_whitespace_and_punctuation(""), "");
}

#[test]
fn test_trim_start_whitespace_and_punctuation() {
    assert_eq!(trim_start_whitespace_and_punctuation(" Test"), "Test");
    assert_eq!(trim_start_whitespace_and_punctuation("\r\nTest"), "Test");
    assert_eq!(trim_start_whitespace_and_punctuation("?Test"), "Test");
    assert_eq!(trim_start_whitespace_and_punctuation("? ! @ Test"), "Test");
}

#[test]
fn test_trim_start_only_strips_start_punctuation() {
    assert_eq!(
        trim_start_whitespace_and_punctuation("!Test of punc!uation@"),
        "Test of punc!uation@"
    );
}

#[test]
fn test_trim_start_empty_returns_empty() {
    assert_eq!(trim_start_whitespace_and_punctuation(""), "");
}
