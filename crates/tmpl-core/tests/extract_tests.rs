//! Integration tests for section extraction, run against both lookup strategies.

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::{Cursor, Seek};
use tmpl_core::{
    Config, Extraction, MatchMode, SectionExtractor, SectionIndex, SectionSource, Strategy,
};

fn extract(config: &Config, source: &str, name: &str) -> (String, Extraction) {
    let mut out = Vec::new();
    let extraction = match config.strategy() {
        Strategy::Rescan => {
            let mut sections = SectionExtractor::new(config, Cursor::new(source.as_bytes())).unwrap();
            sections.extract_name(name.as_bytes(), &mut out).unwrap()
        }
        Strategy::Indexed => {
            let mut sections = SectionIndex::build(config, source.as_bytes()).unwrap();
            sections.extract_name(name.as_bytes(), &mut out).unwrap()
        }
    };
    (String::from_utf8(out).unwrap(), extraction)
}

fn config(strategy: Strategy) -> Config {
    Config::default().with_strategy(strategy)
}

#[rstest]
fn test_whole_file_without_boundaries(#[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy) {
    let source = "first line\nsecond line\nno trailing newline";
    let (out, extraction) = extract(&config(strategy), source, "@CONTENT");
    assert_eq!(out, source);
    assert_eq!(extraction, Extraction::WholeFile { bytes: source.len() as u64 });
}

#[rstest]
fn test_whole_file_keeps_boundary_lines(#[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy) {
    let source = "lead\n#a\nA\n#b\nB\n";
    assert_eq!(extract(&config(strategy), source, "@CONTENT").0, source);
}

#[rstest]
#[case("greeting", "World\n")]
#[case("other", "X\n")]
#[case("missing", "")]
fn test_named_sections(
    #[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy,
    #[case] name: &str,
    #[case] expected: &str,
) {
    let source = "#greeting\nWorld\n#other\nX\n";
    assert_eq!(extract(&config(strategy), source, name).0, expected);
}

#[rstest]
fn test_section_runs_to_end_of_stream(#[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy) {
    let source = "#a\nA\n#last\none\ntwo\nthree";
    let (out, extraction) = extract(&config(strategy), source, "last");
    assert_eq!(out, "one\ntwo\nthree");
    assert_eq!(extraction, Extraction::Section { lines: 3 });
}

#[rstest]
fn test_empty_section_is_matched(#[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy) {
    let (out, extraction) = extract(&config(strategy), "#empty\n#full\nF\n", "empty");
    assert_eq!(out, "");
    assert_eq!(extraction, Extraction::Section { lines: 0 });
}

#[rstest]
fn test_preamble_never_leaks_into_named_sections(
    #[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy,
) {
    let source = "preamble 1\npreamble 2\n#intro\nbody\n";
    let config = config(strategy);
    assert_eq!(extract(&config, source, "intro").0, "body\n");
    assert_eq!(extract(&config, source, "@HEADER").0, "preamble 1\npreamble 2\n");
}

#[rstest]
fn test_indented_delimiter_is_not_a_boundary(
    #[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy,
) {
    let source = "#code\nfn main() {\n    #[inline]\n}\n";
    assert_eq!(
        extract(&config(strategy), source, "code").0,
        "fn main() {\n    #[inline]\n}\n"
    );
}

#[rstest]
fn test_duplicate_boundaries_concatenate(#[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy) {
    let source = "#part\none\n#other\nskip\n#part\ntwo\n";
    assert_eq!(extract(&config(strategy), source, "part").0, "one\ntwo\n");
}

#[rstest]
fn test_crlf_boundaries(#[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy) {
    let source = "#win\r\nline one\r\n#next\r\nline two\r\n";
    assert_eq!(extract(&config(strategy), source, "win").0, "line one\r\n");
}

#[rstest]
#[case(MatchMode::Strict, "int", "")]
#[case(MatchMode::Legacy, "int", "I\n")]
#[case(MatchMode::Strict, "intro", "I\n")]
#[case(MatchMode::Legacy, "introduction", "I\n")]
#[case(MatchMode::Strict, "introduction", "")]
#[case(MatchMode::Legacy, "@CON", "#intro\nI\n#outro\nO\n")]
#[case(MatchMode::Strict, "@CON", "")]
fn test_match_modes(
    #[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy,
    #[case] mode: MatchMode,
    #[case] name: &str,
    #[case] expected: &str,
) {
    let config = config(strategy).with_match_mode(mode);
    assert_eq!(extract(&config, "#intro\nI\n#outro\nO\n", name).0, expected);
}

#[rstest]
fn test_custom_delimiter(#[values(Strategy::Rescan, Strategy::Indexed)] strategy: Strategy) {
    let config = Config::new('%').unwrap().with_strategy(strategy);
    let source = "%intro\n# a heading, not a boundary\n%end\n";
    assert_eq!(extract(&config, source, "intro").0, "# a heading, not a boundary\n");
}

#[test]
fn test_repeated_lookups_are_idempotent() {
    let config = Config::default();
    let mut sections =
        SectionExtractor::new(&config, Cursor::new(b"#a\nA1\nA2\n#b\nB\n".to_vec())).unwrap();

    let mut first = Vec::new();
    let mut second = Vec::new();
    sections.extract_name(b"a", &mut first).unwrap();
    sections.extract_name(b"a", &mut second).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, b"A1\nA2\n");

    let mut cursor = sections.into_inner();
    assert_eq!(cursor.stream_position().unwrap(), 0);
}

#[test]
fn test_non_utf8_lines_pass_through() {
    let config = Config::default();
    let source: &[u8] = b"#bin\n\xff\xfe raw\n#end\n";
    let mut sections = SectionExtractor::new(&config, Cursor::new(source)).unwrap();

    let mut out = Vec::new();
    sections.extract_name(b"bin", &mut out).unwrap();
    assert_eq!(out, b"\xff\xfe raw\n");
}
