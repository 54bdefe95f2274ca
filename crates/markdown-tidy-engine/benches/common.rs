// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title   \n## Section\nParagraph with `some  ` content and \\[escapes\\].  \n\n\n\n```rust\nfn example() {\n    println!(\"Hello\");   \n}\n```\n    indented   code\n\nSee [the docs][docs] and [docs].\n\n[docs]: https://example.com/docs \"Docs\"\n\n";
    base.repeat(size)
}

/// A single paragraph full of unmatched backtick runs of varying length,
/// the worst case for code span matching.
#[allow(dead_code)]
pub fn generate_tick_heavy_paragraph(runs: usize) -> String {
    let mut content = String::with_capacity(runs * 8);
    for i in 0..runs {
        content.push_str(&"`".repeat(i % 7 + 1));
        content.push_str(" word [x] ");
    }
    content.push('\n');
    content
}
