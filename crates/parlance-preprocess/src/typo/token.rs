//! Splits a whitespace token into leading punctuation, word core, and
//! trailing punctuation so corrections can be reattached cleanly.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TokenParts<'a> {
    pub prefix: &'a str,
    /// Starts and ends with a letter; may contain inner marks ("don't").
    pub core: &'a str,
    pub suffix: &'a str,
}

impl<'a> TokenParts<'a> {
    pub fn split(token: &'a str) -> Self {
        let start = token.find(char::is_alphabetic);
        let end = token
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, c)| i + c.len_utf8());

        match (start, end) {
            (Some(start), Some(end)) => Self {
                prefix: &token[..start],
                core: &token[start..end],
                suffix: &token[end..],
            },
            _ => Self {
                prefix: token,
                core: "",
                suffix: "",
            },
        }
    }

    /// Lowercased letters of the core, everything else stripped.
    pub fn clean(&self) -> String {
        self.core
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// True when the core is letters only.
    pub fn is_plain(&self) -> bool {
        self.core.chars().all(char::is_alphabetic)
    }
}
