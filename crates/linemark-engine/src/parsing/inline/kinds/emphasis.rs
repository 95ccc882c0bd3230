pub struct Emphasis;

impl Emphasis {
    pub const STAR: char = '*';
    pub const UNDERSCORE: char = '_';

    pub fn is_delimiter(c: char) -> bool {
        c == Self::STAR || c == Self::UNDERSCORE
    }

    /// Wraps `inner` using `width` delimiters from each side: 2 for strong,
    /// anything else for emphasis.
    pub fn wrap(delimiter: char, width: usize, inner: &str) -> String {
        let (tag, marks) = if width >= 2 {
            ("strong", delimiter.to_string().repeat(2))
        } else {
            ("em", delimiter.to_string())
        };
        format!(
            r#"<span class="TMMark">{marks}</span><{tag}>{inner}</{tag}><span class="TMMark">{marks}</span>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_emphasis() {
        assert_eq!(
            Emphasis::wrap('*', 1, "x"),
            r#"<span class="TMMark">*</span><em>x</em><span class="TMMark">*</span>"#
        );
    }

    #[test]
    fn wraps_strong() {
        assert_eq!(
            Emphasis::wrap('_', 2, "x"),
            r#"<span class="TMMark">__</span><strong>x</strong><span class="TMMark">__</span>"#
        );
    }

    #[test]
    fn delimiters() {
        assert!(Emphasis::is_delimiter('*'));
        assert!(Emphasis::is_delimiter('_'));
        assert!(!Emphasis::is_delimiter('~'));
    }
}
