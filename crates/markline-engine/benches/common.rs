// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n- Bullet point\n  - Nested item\n- Another item\n\n";
    base.repeat(size)
}

/// One long ordered list, with nested bullets under every item, so the
/// ordinal scan has to walk back over nested lines.
#[allow(dead_code)]
pub fn generate_ordered_list(items: usize) -> String {
    let mut content = String::new();
    for i in 1..=items {
        content.push_str(&format!("{i}. Item {i}\n"));
        content.push_str("   - nested note\n");
        content.push_str("     continuation\n");
    }
    content
}
