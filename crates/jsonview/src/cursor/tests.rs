use rstest::rstest;

use super::*;

fn cursor(text: &str) -> Cursor<'_, u8> {
    Cursor::new(text.as_bytes(), ViewOptions::default())
}

fn section(text: &str, pos: usize) -> &str {
    let c = cursor(text);
    &text[pos..c.end_of_section(pos)]
}

#[test]
fn skip_whitespace_covers_all_six_characters() {
    let c = cursor(" \t\n\r\x0b\x0c1");
    assert_eq!(c.skip_whitespace(0), 6);
    assert_eq!(c.skip_whitespace(6), 6);
    assert_eq!(c.skip_whitespace(7), 7);
    assert_eq!(c.skip_whitespace(100), 7);
}

#[test]
fn strict_whitespace_stops_at_form_feed() {
    let text = " \x0c1";
    let c = Cursor::new(
        text.as_bytes(),
        ViewOptions {
            strict_whitespace: true,
        },
    );
    assert_eq!(c.skip_whitespace(0), 1);
}

#[test]
fn skip_whitespace_on_empty_span() {
    let c = cursor("");
    assert_eq!(c.skip_whitespace(0), 0);
}

#[rstest]
#[case::plain(r#""abc" tail"#, r#""abc""#)]
#[case::empty(r#""""#, r#""""#)]
#[case::escaped_quote(r#""a\"b" tail"#, r#""a\"b""#)]
#[case::escaped_backslash(r#""a\\" tail"#, r#""a\\""#)]
#[case::delimiters_inside(r#""{[,:]}" tail"#, r#""{[,:]}""#)]
#[case::unterminated(r#""abc"#, r#""abc"#)]
#[case::trailing_escape(r#""abc\"#, r#""abc\"#)]
fn end_of_string_cases(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(section(text, 0), expected);
}

#[rstest]
#[case::object(r#"{"a":1} , 2"#, r#"{"a":1}"#)]
#[case::array("[1,[2,3],4]]", "[1,[2,3],4]")]
#[case::brackets_in_strings(r#"{"k":"}]"}x"#, r#"{"k":"}]"}"#)]
#[case::escaped_quote_in_string(r#"["\"]"] "#, r#"["\"]"]"#)]
#[case::empty_object("{}", "{}")]
#[case::unclosed(r#"{"a":[1,2"#, r#"{"a":[1,2"#)]
fn matching_structure_cases(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(section(text, 0), expected);
}

#[test]
fn matching_close_reports_missing_close() {
    assert_eq!(cursor("[1, [2]").matching_close(0), None);
    assert_eq!(cursor("[1, [2]]").matching_close(0), Some(7));
}

#[rstest]
#[case::scalar_before_comma("12 , 3", 0, "12")]
#[case::member(r#""k" : {"a":[1,2]} , "x":1"#, 0, r#""k" : {"a":[1,2]}"#)]
#[case::stops_at_unopened_close("true ]", 0, "true")]
#[case::comma_in_string(r#""a,b", 2"#, 0, r#""a,b""#)]
#[case::runs_to_end("null  ", 0, "null")]
#[case::empty_before_comma(", 2", 0, "")]
fn element_scan_cases(
    #[case] text: &str,
    #[case] pos: usize,
    #[case] expected: &str,
) {
    let c = cursor(text);
    let end = c.end_of_structure(pos, ScanMode::Element);
    assert_eq!(&text[pos..end], expected);
}

#[rstest]
#[case::integer("123,", "123")]
#[case::literal("true}", "true")]
#[case::before_space("null ]", "null")]
#[case::to_end("-1.5e3", "-1.5e3")]
#[case::garbage_is_kept("12abc,", "12abc")]
fn end_of_value_cases(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(section(text, 0), expected);
}

#[test]
fn end_of_value_always_progresses() {
    let c = cursor(",]");
    assert_eq!(c.end_of_value(0), 1);
    assert_eq!(c.end_of_value(1), 2);
    assert_eq!(c.end_of_value(2), 2);
}

#[test]
fn end_of_section_past_end_is_len() {
    let c = cursor("[]");
    assert_eq!(c.end_of_section(2), 2);
    assert_eq!(c.end_of_section(9), 2);
}

#[test]
fn section_classification() {
    assert_eq!(Section::classify(b'{'), Section::Object);
    assert_eq!(Section::classify(b'['), Section::Array);
    assert_eq!(Section::classify(b'"'), Section::String);
    assert_eq!(Section::classify(b't'), Section::Scalar);
    assert_eq!(Section::classify(b':'), Section::Scalar);
}

#[test]
fn next_occurrence_skips_guarded_delimiters() {
    let text = r#""a:b" , {"x":1} : 2"#;
    let c = cursor(text);
    assert_eq!(c.next_occurrence(0, COLON), Some(16));
    assert_eq!(c.next_occurrence(0, COMMA), Some(6));
}

#[test]
fn next_occurrence_misses() {
    let c = cursor(r#""a:b" [":"] "#);
    assert_eq!(c.next_occurrence(0, COLON), None);
    assert_eq!(cursor("").next_occurrence(0, COLON), None);
}

#[test]
fn trim_end_never_crosses_start() {
    let c = cursor("  x  ");
    assert_eq!(c.trim_end(2, 5), 3);
    assert_eq!(c.trim_end(4, 5), 4);
    assert_eq!(c.trim_end(0, 2), 0);
}

#[test]
fn wide_units_scan_like_bytes() {
    let text: alloc::vec::Vec<u16> = r#"{"ключ":[1,"]"]} "#.encode_utf16().collect();
    let c = Cursor::new(&text, ViewOptions::default());
    let end = c.end_of_section(0);
    assert_eq!(end, text.len() - 1);
    assert_eq!(c.next_occurrence(1, COLON), Some(7));
}
