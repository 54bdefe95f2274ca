//! Fixture tests for the parsing module.
//!
//! Each fixture (.md) in `fixtures/` is scanned, checked against the
//! structural invariants, and summarized as a `Snap` whose block and inline
//! kinds are compared with the expected sequence.

use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::parsing::{
    blocks::BlockKind,
    inline::InlineNode,
    links::LinkTable,
    parse_document, parse_inline_for_block,
    snapshot::{self, Snap},
};

fn load_fixture(name: &str) -> Rope {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(&path).unwrap();
    Rope::from(md.as_str())
}

/// Scans a fixture, runs every invariant check and returns its summary.
fn snap_fixture(name: &str) -> Snap {
    let rope = load_fixture(name);
    let doc = parse_document(&rope);
    snapshot::invariants(&rope, &doc.blocks);

    let links = LinkTable::build(&doc.blocks);
    for b in &doc.blocks {
        let nodes = parse_inline_for_block(&rope, b, &links);
        if b.kind.has_inline() {
            snapshot::check_inline(b, &nodes);
        }
    }
    snapshot::normalize(&rope, &doc.blocks, &links)
}

#[test]
fn fixture_mixed_blocks() {
    let snap = snap_fixture("mixed_blocks");
    assert_eq!(
        snap.kinds(),
        [
            "Heading(1)",
            "Paragraph",
            "BlankLines(1)",
            "FencedCode(Backtick, 3, rust)",
            "BlankLines(2)",
            "IndentedCode",
            "BlankLines(1)",
            "LinkRefDef(commonmark spec)",
        ]
    );
    assert_eq!(snap.blocks[5].text, "    indented\n     code\n");

    let para: Vec<_> = snap.blocks[1].inline.iter().map(|n| n.kind.as_str()).collect();
    assert_eq!(
        para,
        ["Text", "CodeSpan(1)", "Text", "Escaped([)", "Text", "Escaped(])", "Text"]
    );
}

#[test]
fn fixture_unclosed_fence() {
    let snap = snap_fixture("unclosed_fence");
    assert_eq!(
        snap.kinds(),
        ["Paragraph", "FencedCode(Tilde, 4, unclosed)"]
    );
    assert!(snap.blocks[1].text.ends_with("[x]: /not-a-def\n"));
}

#[test]
fn fixture_containers() {
    let snap = snap_fixture("containers");
    assert_eq!(
        snap.kinds(),
        [
            "Paragraph",
            "FencedCode(Backtick, 3, rust)",
            "FencedCode(Backtick, 3, unclosed)",
            "Paragraph",
            "IndentedCode",
        ]
    );
    assert_eq!(snap.blocks[1].text, "- ```rust\n  let x = 1;   \n\n  ```\n");
    assert_eq!(snap.blocks[3].text, "still a paragraph\n");
}

#[test]
fn fixture_references() {
    let snap = snap_fixture("references");
    assert_eq!(
        snap.kinds(),
        [
            "Paragraph",
            "BlankLines(1)",
            "LinkRefDef(commonmark spec)",
            "LinkRefDef(`Debug`)",
        ]
    );

    let inline: Vec<_> = snap.blocks[0].inline.iter().map(|n| n.kind.as_str()).collect();
    assert_eq!(
        inline,
        [
            "Text",
            "Ref(Full, commonmark spec, resolved)",
            "Text",
            "Ref(Shortcut, debug, unresolved)",
            "Text",
            "Ref(Collapsed, `debug`, resolved)",
            "Text",
            "CodeSpan(1)",
            "Text",
            "Escaped([)",
            "Text",
            "Escaped(])",
            "Text",
        ]
    );
    assert_eq!(snap.blocks[0].inline[12].text, " and [inline](http://x).");
}

/// Slicing every block span from the rope reproduces the document.
#[test]
fn lossless_span_invariant() {
    let md = "# Head  \r\ntext\n\n\n    code\n[a]: /a\n```\nx";
    let rope = Rope::from(md);
    let doc = parse_document(&rope);

    let rebuilt: String = doc
        .blocks
        .iter()
        .map(|b| rope.slice_to_cow(b.span.range()))
        .collect();
    assert_eq!(rebuilt, md);
}

/// Code spans are raw zones: brackets inside them are not references.
#[test]
fn raw_zones_suppress_references() {
    let rope = Rope::from("`[not a link]`");
    let doc = parse_document(&rope);
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(doc.blocks[0].kind, BlockKind::Paragraph));

    let inlines = parse_inline_for_block(&rope, &doc.blocks[0], &LinkTable::default());
    assert_eq!(inlines.len(), 1);
    assert!(matches!(inlines[0], InlineNode::CodeSpan { .. }));
}

/// Unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let rope = Rope::from("[unclosed and `also unclosed");
    let doc = parse_document(&rope);
    let inlines = parse_inline_for_block(&rope, &doc.blocks[0], &LinkTable::default());

    assert_eq!(inlines.len(), 1);
    assert!(matches!(inlines[0], InlineNode::Text(_)));
}

/// Code blocks have no inline content.
#[test]
fn code_blocks_skip_inline_scan() {
    let rope = Rope::from("    `code` [x]\n");
    let doc = parse_document(&rope);
    assert!(matches!(doc.blocks[0].kind, BlockKind::IndentedCode));
    assert!(parse_inline_for_block(&rope, &doc.blocks[0], &LinkTable::default()).is_empty());
}

#[test]
fn empty_document() {
    let rope = Rope::from("");
    let doc = parse_document(&rope);
    assert!(doc.blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    let rope = Rope::from("\n \n\t\n");
    let doc = parse_document(&rope);
    snapshot::invariants(&rope, &doc.blocks);
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind, BlockKind::BlankLines { count: 3 });
}
