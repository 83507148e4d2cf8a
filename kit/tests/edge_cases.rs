//! Edge case tests for row filtering, header checks, and resource limits.
use au::*;

#[test_case::test_case(&[""]; "single empty cell")]
#[test_case::test_case(&["   "]; "single blank cell")]
#[test_case::test_case(&["\t "]; "tab and space")]
fn test_empty_rows(cells: &[&str]) {
    assert!(is_empty_row(cells));
}

#[test_case::test_case(&[]; "no cells")]
#[test_case::test_case(&["", ""]; "two empty cells")]
#[test_case::test_case(&["x"]; "one word")]
#[test_case::test_case(&[" x "]; "padded word")]
fn test_non_empty_rows(cells: &[&str]) {
    assert!(!is_empty_row(cells));
}

#[test_case::test_case("id,translation", &["generator"]; "no generator")]
#[test_case::test_case("translation,generator", &["id"]; "no id")]
#[test_case::test_case("ID,Translation,Generator", &["id", "translation", "generator"]; "names are case sensitive")]
#[test_case::test_case(" id,translation,generator", &["id"]; "names are not trimmed")]
fn test_missing_header_columns(raw: &str, missing: &[&'static str]) {
    assert_eq!(
        parse_lexicon(raw),
        Err(Error::MissingHeaderColumns(missing.to_vec()))
    );
}

#[test]
fn test_header_can_follow_blank_lines() {
    let parsed = parse_lexicon("\n\n \nid,translation,generator");
    assert_eq!(parsed.map(|l| l.column_order.len()), Ok(3));
}

#[test]
fn test_crlf_line_endings() {
    let parsed = parse_lexicon("id,translation,generator\r\nfoo,bar,baz\r\n");
    assert_eq!(
        parsed.map(|l| l.lexemes.into_iter().map(|x| x.generator).collect::<Vec<_>>()),
        Ok(vec!["baz".to_owned()])
    );
}

#[test]
fn test_row_limit() {
    let raw = "id,translation,generator\na,b,c\n\nd,e,f\ng,h,i";
    let config = ParseConfig::new().with_max_rows(2);
    assert_eq!(
        parse_lexicon_with(raw, &config),
        Err(Error::RowLimitExceeded {
            consumed: 3,
            limit: 2
        })
    );
    assert_eq!(
        parse_lexicon_with(raw, &ParseConfig::new().with_max_rows(3)).map(|l| l.lexemes.len()),
        Ok(3)
    );
}

#[test]
fn test_row_limit_zero_allows_header() {
    let config = ParseConfig::new().with_max_rows(0);
    assert!(parse_lexicon_with("id,translation,generator\n\n", &config).is_ok());
}

#[test]
fn test_overlong_rows_rejected() {
    let config = ParseConfig::new().reject_overlong_rows();
    let raw = "id,translation,generator\nfoo,bar,baz\n\nx,y,z,extra";
    let err = parse_lexicon_with(raw, &config);
    assert_eq!(
        err,
        Err(Error::RowTooLong {
            line: 4,
            found: 4,
            expected: 3
        })
    );
    assert_eq!(
        err.err().map(|e| e.to_string()),
        Some("row on line 4 has 4 cells but the header has 3".to_owned())
    );
}

#[test]
fn test_short_rows_pass_under_reject() {
    let config = ParseConfig::new().reject_overlong_rows();
    let parsed = parse_lexicon_with("id,translation,generator,note\nfoo", &config);
    assert_eq!(
        parsed.map(|l| l.lexemes.into_iter().map(|x| x.user_columns).collect::<Vec<_>>()),
        Ok(vec![vec![String::new()]])
    );
}

#[test]
fn test_segment_limit_counts_every_piece() {
    // "a ", "__", "b", "__", ""
    let raw = "a __b__";
    assert!(parse_text_with(raw, &ParseConfig::new().with_max_segments(5)).is_ok());
    assert_eq!(
        parse_text_with(raw, &ParseConfig::new().with_max_segments(4)),
        Err(Error::SegmentLimitExceeded {
            consumed: 5,
            limit: 4
        })
    );
}

#[test_case::test_case(""; "empty")]
#[test_case::test_case("_"; "lone underscore")]
#[test_case::test_case("___"; "odd underscores")]
#[test_case::test_case("__ __"; "blank zone")]
#[test_case::test_case("__\u{1F43B}__"; "emoji word")]
#[test_case::test_case("__caf\u{e9}#PL__ ok"; "non-ascii id")]
fn test_text_never_loses_bytes(raw: &str) {
    let rendered = parse_text(raw).map(|text| {
        text.render(|gloss| serialize_gloss(GlossMode::ImplicitPointers, gloss))
    });
    assert_eq!(rendered, Ok(raw.to_owned()));
}

#[test]
fn test_error_location_does_not_change_message() {
    let plain = parse_gloss(GlossMode::ImplicitPointers, "[[").map_err(Error::from);
    let located = parse_text("__[[__");
    assert_eq!(
        plain.err().map(|e| e.to_string()),
        located.err().map(|e| e.to_string())
    );
}

#[test]
fn test_root_strips_locations() {
    let err = parse_text("  __#__").err();
    assert_eq!(err.as_ref().and_then(Error::location), Some(&Location::Offset(4)));
    assert!(matches!(err.as_ref().map(Error::root), Some(Error::Gloss(_))));
}
