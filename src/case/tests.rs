use super::*;

#[test]
fn test_to_title_case() {
    assert_eq!(
        to_title_case("test of to title case"),
        "Test Of To Title Case"
    );
}

#[test]
fn test_to_title_case_single_word() {
    assert_eq!(to_title_case("test"), "Test");
}

#[test]
fn test_to_title_case_single_letter() {
    assert_eq!(to_title_case("t"), "T");
}

#[test]
fn test_to_title_case_already_title_case() {
    assert_eq!(
        to_title_case("Test Of To Title Case"),
        "Test Of To Title Case"
    );
}

#[test]
fn test_to_title_case_acronym_not_modified() {
    assert_eq!(to_title_case("this is a HTML test"), "This Is A HTML Test");
}

#[test]
fn test_to_title_case_acronym_with_digits_not_modified() {
    assert_eq!(to_title_case("the HTML5 era"), "The HTML5 Era");
}

#[test]
fn test_to_title_case_preserves_leading_and_trailing_spaces() {
    assert_eq!(
        to_title_case(" test of to title case "),
        " Test Of To Title Case "
    );
}

#[test]
fn test_to_title_case_preserves_inner_separators() {
    assert_eq!(to_title_case("two  spaces\tand tab"), "Two  Spaces\tAnd Tab");
}

#[test]
fn test_to_title_case_specify_locale() {
    // Azerbaijani
    assert_eq!(
        to_title_case_in("ingilis dili danışmaq edirsiniz?", Locale::Turkic),
        "İngilis Dili Danışmaq Edirsiniz?"
    );
}

#[test]
fn test_to_title_case_empty_returns_empty() {
    assert_eq!(to_title_case(""), "");
}

#[test]
fn test_to_title_case_whitespace_returns_whitespace() {
    assert_eq!(to_title_case("   "), "   ");
}

#[test]
fn test_to_title_case_word_starting_with_punctuation() {
    assert_eq!(to_title_case("\"quoted\" words"), "\"Quoted\" Words");
}

#[test]
fn test_to_upper_first() {
    assert_eq!(to_upper_first("test"), "Test");
}

#[test]
fn test_to_upper_first_single_letter() {
    assert_eq!(to_upper_first("t"), "T");
}

#[test]
fn test_to_upper_first_only_affects_first_word() {
    assert_eq!(to_upper_first("test of casing"), "Test of casing");
}

#[test]
fn test_to_upper_first_first_letter_already_uppercase() {
    assert_eq!(to_upper_first("Test"), "Test");
}

#[test]
fn test_to_upper_first_preserves_leading_whitespace() {
    assert_eq!(to_upper_first("  test  of casing"), "  Test  of casing");
}

#[test]
fn test_to_upper_first_acronym_first_word_not_modified() {
    assert_eq!(to_upper_first("HTML test"), "HTML test");
}

#[test]
fn test_to_upper_first_specify_locale() {
    // Azerbaijani
    assert_eq!(to_upper_first_in("ingilis", Locale::Turkic), "İngilis");
}

#[test]
fn test_to_upper_first_empty_returns_empty() {
    assert_eq!(to_upper_first(""), "");
}

#[test]
fn test_to_upper_first_whitespace_returns_whitespace() {
    assert_eq!(to_upper_first("   "), "   ");
}

#[test]
fn test_locale_default_is_neutral() {
    assert_eq!(Locale::default(), Locale::Neutral);
}

#[test]
fn test_neutral_locale_uppercases_dotted_i_plainly() {
    assert_eq!(to_upper_first("istanbul"), "Istanbul");
}

#[test]
fn test_turkic_locale_maps_dotless_i() {
    assert_eq!(to_upper_first_in("ılık", Locale::Turkic), "Ilık");
}
