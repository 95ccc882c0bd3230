// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nSetext heading\n==============\n\nParagraph with *some* **content** and `code`.\n\n- Bullet point with [a link][ref]\n- Another _item_\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n[ref]: https://example.com \"Example\"\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_emphasis_heavy_line(size: usize) -> String {
    "*a **b _c_ d** e* [f ![g] h] \\* ".repeat(size)
}

#[allow(dead_code)]
pub fn generate_bracket_bomb(size: usize) -> String {
    format!("{}{}", "[".repeat(size), "]".repeat(size / 2))
}
