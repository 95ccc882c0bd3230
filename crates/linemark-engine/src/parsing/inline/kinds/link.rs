#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Link,
    Image,
}

impl LinkKind {
    pub const CLOSE: char = ']';
    pub const LABEL_OPEN: char = '[';
    pub const ESCAPE: char = '\\';

    /// Type class used in generated markup.
    pub fn class(self) -> &'static str {
        match self {
            LinkKind::Link => "TMLink",
            LinkKind::Image => "TMImage",
        }
    }

    /// Markup for a `[label]` suffix following the link text.
    pub fn label_markup(self, label: &str) -> String {
        let class = self.class();
        format!(
            r#"<span class="TMMark TMMark_{class}">[</span><span class="TMLinkLabel">{}</span><span class="TMMark TMMark_{class}">]</span>"#,
            html_escape::encode_text(label)
        )
    }
}
