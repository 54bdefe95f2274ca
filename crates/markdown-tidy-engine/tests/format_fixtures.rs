use markdown_tidy_engine::{
    BlankDocument, FormatOptions, format, format_str,
    parsing::{
        blocks::{BlockClass, BlockKind},
        inline::InlineNode,
        links::LinkTable,
        parse_document, parse_inline_for_block,
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn load_sample() -> String {
    std::fs::read_to_string(format!("{}/sample.md", fixtures_dir())).unwrap()
}

fn render_html(md: &str) -> String {
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, pulldown_cmark::Parser::new(md));
    html
}

/// Source text of every block of the given class, in order.
fn blocks_where(md: &str, keep: impl Fn(&BlockKind) -> bool) -> Vec<String> {
    let rope = Rope::from(md);
    parse_document(&rope)
        .blocks
        .iter()
        .filter(|b| keep(&b.kind))
        .map(|b| rope.slice_to_cow(b.span.range()).into_owned())
        .collect()
}

/// Every escaped character pair found in headings and paragraphs.
fn escapes(md: &str) -> Vec<String> {
    let rope = Rope::from(md);
    let blocks = parse_document(&rope).blocks;
    let links = LinkTable::build(&blocks);
    blocks
        .iter()
        .flat_map(|b| parse_inline_for_block(&rope, b, &links))
        .filter(|n| matches!(n, InlineNode::EscapedChar { .. }))
        .map(|n| rope.slice_to_cow(n.span().range()).into_owned())
        .collect()
}

/// Asserts each needle occurs in `haystack`, in order, without overlap.
fn assert_in_order(haystack: &str, needles: &[String]) {
    let mut from = 0;
    for needle in needles {
        let needle = needle.trim_end_matches(['\r', '\n']);
        match haystack[from..].find(needle) {
            Some(at) => from += at + needle.len(),
            None => panic!("{needle:?} missing (or out of order) in output:\n{haystack}"),
        }
    }
}

#[test]
fn sample_fixture_snapshot() {
    init_logging();
    let formatted = format_str(&load_sample(), &FormatOptions::default());

    insta::with_settings!({
        snapshot_path => fixtures_dir(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!("sample", formatted.output);
    });
}

#[test]
fn sample_fixture_properties() {
    init_logging();
    let md = load_sample();
    let formatted = format_str(&md, &FormatOptions::default());
    let out = &formatted.output;

    assert!(formatted.changed);
    assert!(out.starts_with("# Some rust code\n\nHere is a main function\n"));
    assert!(out.contains("```rust\nfn main() { println!(\"Hello world!\") }\n```\n"));
    assert!(out.contains(
        "\n    fn main()   {\n          println!(\"Hello world!\");\n    }\n"
    ));
    assert!(out.contains(r"\[esacpe the bracket\]"));
    assert!(out.ends_with("trait.Debug.html\n"));

    let defs = [
        "[commonmark spec]: https://spec.commonmark.org/".to_string(),
        "[a dead link]: https://example.com/gone".to_string(),
        "[`Debug`]: https://doc.rust-lang.org/std/fmt/trait.Debug.html".to_string(),
    ];
    assert_in_order(out, &defs);
    assert!(out.lines().any(|l| l == defs[1]), "unreferenced definition dropped");

    assert!(!md.contains("][a dead link]"));
    assert_eq!(formatted.report.unused_definitions, ["a dead link"]);
    assert!(formatted.report.unresolved.is_empty());
}

const CASES: &[&str] = &[
    "",
    "\n\n\n",
    "# Title",
    "# Title   \nBody text\n\n\n\nMore text  ",
    "Intro\n```\ncode   \n\n\n```\nOutro\n",
    "Intro\n~~~~\nunclosed   \n\n\n# not a heading  \n",
    "  ## Indented heading ##  \nparagraph\n#no-space heading\n",
    "text\n    looks like code   \n\n\n\tand tabs\t\n\nafter\n",
    "[a]: /url  \n\n\n\n[b]: /other 'T'\n\nUse [a] and [x][b].\n",
    "text with `code  ` and \\* escaped \\*  \n",
    "`unclosed tick  \nand ``double`` ticks  \n",
    "# A\n# B\n## C\ntext\n",
    "line one\r\nline two  \r\n\r\n\r\n# Head\r\nbody",
    "\r\ntext\n# Title\n",
    "a\r\nb\n\n\n# T\r\nx\n",
    "# A\nb\r\n\r\n\n\nc",
    "a \r \nb\n  \r \n\ntext  \r",
    "#\r \n[a]: /x \r \nUse [a].\n",
    "- ```rust\n  let x = 1;   \n  ```\n",
    "> ```\n> code  \n> ```\n> quote  \n",
    "- ```\n  code  \ntext  \n",
];

#[rstest]
#[case::empty(CASES[0])]
#[case::blank_only(CASES[1])]
#[case::heading_only(CASES[2])]
#[case::heading_and_paragraphs(CASES[3])]
#[case::fenced_code(CASES[4])]
#[case::unclosed_fence(CASES[5])]
#[case::heading_variants(CASES[6])]
#[case::indented_code(CASES[7])]
#[case::definitions(CASES[8])]
#[case::code_spans_and_escapes(CASES[9])]
#[case::unmatched_ticks(CASES[10])]
#[case::stacked_headings(CASES[11])]
#[case::crlf(CASES[12])]
#[case::mixed_leading_blank(CASES[13])]
#[case::mixed_gaps(CASES[14])]
#[case::mixed_last_line(CASES[15])]
#[case::stray_carriage_returns(CASES[16])]
#[case::carriage_return_heading_and_definition(CASES[17])]
#[case::fence_in_list_item(CASES[18])]
#[case::fence_in_block_quote(CASES[19])]
#[case::fence_ends_with_list_item(CASES[20])]
fn formatting_is_idempotent(#[case] md: &str) {
    init_logging();
    let once = format(md);
    let twice = format_str(&once, &FormatOptions::default());
    assert_eq!(twice.output, once);
    assert!(!twice.changed);
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(3)]
fn idempotent_with_custom_heading_spacing(#[case] n: usize) {
    let options = FormatOptions {
        blank_lines_around_headings: n,
        blank_document: BlankDocument::Empty,
    };
    for md in CASES {
        let once = format_str(md, &options).output;
        assert_eq!(format_str(&once, &options).output, once, "input: {md:?}");
    }
}

/// Every case plus the sample fixture.
fn all_inputs() -> Vec<String> {
    let mut inputs: Vec<String> = CASES.iter().map(|s| s.to_string()).collect();
    inputs.push(load_sample());
    inputs
}

#[test]
fn code_blocks_survive_byte_for_byte() {
    for md in &all_inputs() {
        let out = format(md);
        let code = blocks_where(md, |k| BlockClass::of(k).is_opaque());
        assert_in_order(&out, &code);
    }
}

#[test]
fn escapes_survive() {
    for md in &all_inputs() {
        let out = format(md);
        assert_in_order(&out, &escapes(md));
    }
}

#[test]
fn definitions_survive_in_order() {
    for md in &all_inputs() {
        let out = format(md);
        let defs = blocks_where(md, |k| matches!(k, BlockKind::LinkRefDef { .. }));
        assert_in_order(&out, &defs);
        for def in &defs {
            let line = def.trim_end_matches(['\r', '\n']);
            assert!(out.lines().any(|l| l == line), "{line:?} not kept verbatim");
        }
    }
}

#[test]
fn output_ends_with_one_newline() {
    for md in CASES.iter().skip(2) {
        let out = format(md);
        assert!(out.ends_with('\n'), "{out:?}");
        assert!(!out.ends_with("\n\n") && !out.ends_with("\n\r\n"), "{out:?}");
    }
}

#[rstest]
#[case::sample(None)]
#[case::heading_spacing(Some("# Title   \nBody text\n\n\n\nMore text  "))]
#[case::fenced_code(Some("Intro\n```\ncode   \n```\nOutro\n"))]
#[case::heading_variants(Some("  ## Indented heading ##  \nparagraph\n"))]
#[case::definitions(Some("[a]: /url\n\n\n\n[b]: /other 'T'\n\nUse [a] and [x][b].\n"))]
#[case::escapes(Some("text with `code  ` and \\* escaped \\*  \n"))]
#[case::lists(Some("- one\n\n\n\n- two\n"))]
#[case::fence_in_list_item(Some("- ```rust\n  let x = 1;   \n  ```\n"))]
#[case::fence_in_block_quote(Some("> ```\n> code  \n> ```\n> quote  \n"))]
#[case::fence_ends_with_list_item(Some("- ```\n  code  \ntext  \n"))]
#[case::indented_code_in_block_quote(Some("> text\n>\n>     code  \n"))]
fn rendered_html_is_unchanged(#[case] md: Option<&str>) {
    let md = md.map_or_else(load_sample, str::to_string);
    let out = format(&md);
    assert_eq!(render_html(&out), render_html(&md));
}

#[test]
fn crlf_document_keeps_crlf() {
    let out = format("# Head\r\nbody  \r\n\r\n\r\nmore");
    assert_eq!(out, "# Head\r\n\r\nbody\r\n\r\nmore\r\n");
}

#[test]
fn mixed_line_endings_follow_the_preceding_line() {
    assert_eq!(format("\r\ntext\n# Title\n"), "text\n\n# Title\n");
    assert_eq!(format("# A\nb\r\n\r\n\n\nc"), "# A\n\nb\r\n\r\nc\r\n");
}

#[test]
fn stray_carriage_returns_trimmed_as_whitespace() {
    assert_eq!(format("a \r \nb\n"), "a\nb\n");
    assert_eq!(format("a\n  \r \n\nb\n"), "a\n\nb\n");
}

#[test]
fn code_inside_containers_is_untouched() {
    let md = "- ```rust\n  let x = 1;   \n  ```\n";
    assert_eq!(format(md), md);

    let out = format("> ```\n> code  \n> ```\n> quote  \n");
    assert_eq!(out, "> ```\n> code  \n> ```\n> quote\n");
}

#[test]
fn blank_document_output() {
    assert_eq!(format("  \n\n"), "\n");
    let options = FormatOptions {
        blank_document: BlankDocument::Empty,
        ..Default::default()
    };
    assert_eq!(format_str("  \n\n", &options).output, "");
}

#[test]
fn unterminated_fence_makes_rest_opaque() {
    let md = "# Title\n```\n# kept   \n\n\n\ntext  ";
    let out = format(md);
    assert_eq!(out, "# Title\n\n```\n# kept   \n\n\n\ntext  \n");
}
