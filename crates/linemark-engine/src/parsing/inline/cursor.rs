/// A cursor over one line of inline text.
///
/// Positions are byte offsets into `s` and always sit on char boundaries.
/// The full string stays reachable so flanking checks can look at the
/// original characters around the cursor.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed suffix.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character just before the cursor, if any.
    pub fn prev(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }

    /// The character at byte offset `at`, if any.
    pub fn char_at(&self, at: usize) -> Option<char> {
        self.s.get(at..)?.chars().next()
    }

    /// Byte length of the run of `c` starting at the cursor.
    pub fn run_len(&self, c: char) -> usize {
        self.rest()
            .chars()
            .take_while(|&x| x == c)
            .map(char::len_utf8)
            .sum()
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
