//! Style-sheet formatting end to end through the public API.

use rstest::rstest;
use std::path::PathBuf;
use uitk_fmt::style::{format_style_sheet, format_style_sheet_range, tokenize, StyleKind};
use uitk_fmt::FormattingOptions;

fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).expect("Failed to read fixture")
}

#[rstest]
#[case::nested_selector(
    ".a{ .b{color:red;} }",
    ".a {\n\t.b {\n\t\tcolor:red;\n\t}\n\n}\n"
)]
#[case::comment_braces_inert(
    "/* a { b } */ .x{color:blue;}",
    "/* a { b } */\n.x {\n\tcolor:blue;\n}\n"
)]
#[case::string_braces_inert(
    ".a{content:\"};{\";}",
    ".a {\n\tcontent:\"};{\";\n}\n"
)]
#[case::single_quoted_string(
    ".a{font:'x;y' ;}",
    ".a {\n\tfont:'x;y' ;\n}\n"
)]
#[case::missing_final_semicolon(".a{color:red}", ".a {\n\tcolor:red\n}\n")]
#[case::rules_separated_by_one_blank_line(
    ".a{}\n\n\n\n.b{}",
    ".a {\n}\n\n.b {\n}\n"
)]
#[case::selector_list(
    ".a,\n.b{x:1;}",
    ".a,\n.b {\n\tx:1;\n}\n"
)]
#[case::brace_on_own_line(".a\n{\nx:1;\n}", ".a\n{\n\tx:1;\n}\n")]
#[case::excess_close_braces("}}.a{x:1;}", "}\n\n}\n\n.a {\n\tx:1;\n}\n")]
#[case::unterminated_comment(
    ".a{x:1;} /* open {",
    ".a {\n\tx:1;\n}\n\n/* open {\n"
)]
#[case::unterminated_string(".a{content:\"x;}", ".a {\n\tcontent:\"x;}\n")]
#[case::backslash_before_quote_keeps_string_open(
    ".a{content:\"\\\\\";b:c;}",
    ".a {\n\tcontent:\"\\\\\";b:c;}\n"
)]
fn formats_style_sheet(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_style_sheet(input, &FormattingOptions::tabs()), expected);
}

#[test]
fn uses_spaces_when_requested() {
    assert_eq!(
        format_style_sheet(".a{.b{x:1;}}", &FormattingOptions::spaces(3)),
        ".a {\n   .b {\n      x:1;\n   }\n\n}\n"
    );
}

#[test]
fn comment_token_is_unmodified() {
    let source = "/* a { b } */ .x{color:blue;}";
    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens[0].text, "/* a { b } */");
    assert_eq!(tokens[0].kind(), StyleKind::Comment);
    assert_eq!(tokens[1].kind(), StyleKind::OpenBrace);
    assert_eq!(tokens[2].kind(), StyleKind::Declaration);
    assert_eq!(tokens[3].kind(), StyleKind::CloseBrace);
}

#[test]
fn multiline_comment_kept_verbatim() {
    let source = ".a{\n/* first\n   second */\nx:1;}";
    let out = format_style_sheet(source, &FormattingOptions::spaces(2));
    assert_eq!(out, ".a {\n  /* first\n   second */\n  x:1;\n}\n");
    assert_eq!(format_style_sheet(&out, &FormattingOptions::spaces(2)), out);
}

#[test]
fn range_text_formats_from_depth_zero() {
    let out = format_style_sheet_range("    color: red;\n    margin: 0;", &FormattingOptions::spaces(2));
    assert_eq!(out, "color: red;\nmargin: 0;\n");
}

#[test]
fn formats_unity_style_sheet() {
    let source = read_fixture("main_menu.uss");
    let formatted = format_style_sheet(&source, &FormattingOptions::spaces(2));
    insta::assert_snapshot!("main_menu_uss", formatted);
}

#[test]
fn unity_style_sheet_is_idempotent() {
    let options = FormattingOptions::spaces(2);
    let once = format_style_sheet(&read_fixture("main_menu.uss"), &options);
    assert_eq!(format_style_sheet(&once, &options), once);
}
