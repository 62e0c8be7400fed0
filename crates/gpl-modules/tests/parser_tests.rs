//! Integration tests for module boundary scanning.

use gpl_modules::parser::{UNKNOWN_MODULE, parse_modules};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_no_modules_returns_empty_vec() {
    let content = "' header comment\nDim x As Integer\n\nx = 1";
    assert!(parse_modules(content).is_empty());
}

#[test]
fn test_single_module_parsed_correctly() {
    let content = "Module MAIN\n    Public Sub MAIN()\n    End Sub\nEnd Module";

    let modules = parse_modules(content);
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].name, "MAIN");
    assert_eq!(modules[0].leading_comments, "");
    assert_eq!(modules[0].body, content);
}

#[test]
fn test_multiple_modules_in_order() {
    let content = r#"Module MAIN
End Module
' Gripper control
Module Gripper
End Module

Module Vision
End Module"#;

    let names: Vec<_> = parse_modules(content).into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["MAIN", "Gripper", "Vision"]);
}

#[test]
fn test_only_contiguous_comment_run_attaches() {
    let content = "'c1\n'c2\n\n'c3\nModule X\nEnd Module";

    let modules = parse_modules(content);
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].name, "X");
    assert_eq!(modules[0].leading_comments, "'c3\n");
}

#[test]
fn test_code_line_breaks_comment_run() {
    let content = "' about x\nDim x\nModule X\nEnd Module";

    let modules = parse_modules(content);
    assert_eq!(modules[0].leading_comments, "");
    assert!(!modules[0].text().contains("about x"));
}

#[test]
fn test_multi_line_comment_run_attaches() {
    let content = "' Robot: arm 1\n' Author: cell team\n  ' indented note\nModule Arm\nEnd Module";

    let modules = parse_modules(content);
    assert_eq!(
        modules[0].leading_comments,
        "' Robot: arm 1\n' Author: cell team\n  ' indented note\n"
    );
    assert_eq!(modules[0].start_line, 1);
    assert_eq!(modules[0].end_line, 5);
}

#[test]
fn test_body_ends_at_nearest_closing_marker() {
    let content = "Module Outer\n  ' Module Inner looks like a marker\nModule Inner\nEnd Module\nEnd Module";

    let modules = parse_modules(content);
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].name, "Outer");
    assert_eq!(
        modules[0].body,
        "Module Outer\n  ' Module Inner looks like a marker\nModule Inner\nEnd Module"
    );
}

#[rstest]
#[case("Module Foo.Bar\nEnd Module", "Foo")]
#[case("Module Robot-1\nEnd Module", "Robot")]
#[case("Module Arm(2)\nEnd Module", "Arm")]
#[case("Module _private: x\nEnd Module", "_private")]
fn test_name_is_leading_word_run(#[case] content: &str, #[case] expected: &str) {
    let modules = parse_modules(content);
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].name, expected);
}

#[test]
fn test_punctuated_names_do_not_collide() {
    let content = "Module Foo.Bar\nEnd Module\nModule Robot-1\nEnd Module";

    let names: Vec<_> = parse_modules(content).into_iter().map(|m| m.file_name()).collect();
    assert_eq!(names, vec!["Foo.gpl", "Robot.gpl"]);
}

#[rstest]
#[case("Module 123\nEnd Module")]
#[case("Module 9lives\nEnd Module")]
#[case("Module $weird\nEnd Module")]
fn test_unusable_name_falls_back_to_sentinel(#[case] content: &str) {
    let modules = parse_modules(content);
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].name, UNKNOWN_MODULE);
    assert_eq!(modules[0].file_name(), "UnknownModule.gpl");
}

#[test]
fn test_text_outside_modules_is_dropped() {
    let content = "HEADER_TEXT\n\nModule A\nEnd Module\nBETWEEN_TEXT\nModule B\nEnd Module ' trailing remark\nFOOTER_TEXT\n";

    let modules = parse_modules(content);
    assert_eq!(modules.len(), 2);
    for module in &modules {
        let text = module.text();
        assert!(!text.contains("HEADER_TEXT"));
        assert!(!text.contains("BETWEEN_TEXT"));
        assert!(!text.contains("FOOTER_TEXT"));
        assert!(!text.contains("trailing remark"));
    }
}

#[test]
fn test_crlf_input_is_accepted() {
    let content = "' note\r\nModule Arm\r\n  Dim x\r\nEnd Module\r\n";

    let modules = parse_modules(content);
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].leading_comments, "' note\n");
    assert_eq!(modules[0].body, "Module Arm\n  Dim x\nEnd Module");
}

#[test]
fn test_indented_markers_keep_indentation() {
    let content = "\tModule Tabbed\n\tEnd Module";

    let modules = parse_modules(content);
    assert_eq!(modules[0].name, "Tabbed");
    assert_eq!(modules[0].body, "\tModule Tabbed\n\tEnd Module");
}

#[test]
fn test_line_positions_correct() {
    let content = "Line 1\nLine 2\nModule Pos\nLine 4\nEnd Module\nLine 6";

    let modules = parse_modules(content);
    assert_eq!(modules[0].start_line, 3);
    assert_eq!(modules[0].end_line, 5);
}

#[test]
fn test_duplicate_names_are_all_reported() {
    let content = "Module Same\nEnd Module\nModule Same\n  x = 2\nEnd Module";

    let modules = parse_modules(content);
    assert_eq!(modules.len(), 2);
    assert!(modules.iter().all(|m| m.name == "Same"));
}

#[test]
fn test_comment_after_previous_module_attaches_to_next() {
    let content = "Module First\nEnd Module\n' second\nModule Second\nEnd Module";

    let modules = parse_modules(content);
    let module = &modules[1];
    assert_eq!(module.name, "Second");
    assert_eq!(module.leading_comments, "' second\n");
    assert_eq!(module.start_line, 3);
}
