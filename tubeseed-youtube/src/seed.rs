use std::fmt;

/// Marker that turns a seed line into a free-text query.
pub const QUERY_PREFIX: char = '^';

/// One line of seed input, driving exactly one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedToken {
    /// Free-text search; the leading `^` markers are already stripped.
    Query(String),
    /// Existing video id; the search asks for videos related to it.
    RelatedId(String),
}

impl SeedToken {
    /// Classify a raw input line. Never fails: any line is a valid seed.
    ///
    /// ```
    /// use tubeseed_youtube::SeedToken;
    ///
    /// assert_eq!(SeedToken::parse("^^rust talks"), SeedToken::Query("rust talks".into()));
    /// assert_eq!(SeedToken::parse(" dQw4w9WgXcQ"), SeedToken::RelatedId(" dQw4w9WgXcQ".into()));
    /// ```
    pub fn parse(line: &str) -> Self {
        if line.starts_with(QUERY_PREFIX) {
            SeedToken::Query(line.trim_start_matches(QUERY_PREFIX).to_string())
        } else {
            SeedToken::RelatedId(line.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SeedToken::Query(q) => q,
            SeedToken::RelatedId(id) => id,
        }
    }

    /// Short label used in log events.
    pub fn variant(&self) -> &'static str {
        match self {
            SeedToken::Query(_) => "query",
            SeedToken::RelatedId(_) => "related",
        }
    }
}

impl From<&str> for SeedToken {
    fn from(line: &str) -> Self {
        SeedToken::parse(line)
    }
}

impl fmt::Display for SeedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedToken::Query(q) => write!(f, "{QUERY_PREFIX}{q}"),
            SeedToken::RelatedId(id) => f.write_str(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_is_related_id_verbatim() {
        for line in ["abc123", "  padded  ", "", "has^caret", "\tx"] {
            assert_eq!(SeedToken::parse(line), SeedToken::RelatedId(line.to_string()));
        }
    }

    #[test]
    fn caret_prefix_strips_all_leading_carets_only() {
        assert_eq!(SeedToken::parse("^cats"), SeedToken::Query("cats".into()));
        assert_eq!(SeedToken::parse("^^^cats"), SeedToken::Query("cats".into()));
        assert_eq!(SeedToken::parse("^a^b^"), SeedToken::Query("a^b^".into()));
        assert_eq!(SeedToken::parse("^ spaced "), SeedToken::Query(" spaced ".into()));
        assert_eq!(SeedToken::parse("^"), SeedToken::Query(String::new()));
    }

    #[test]
    fn display_restores_single_marker() {
        assert_eq!(SeedToken::parse("^^cats").to_string(), "^cats");
        assert_eq!(SeedToken::parse("abc").to_string(), "abc");
        assert_eq!(SeedToken::from("^x").variant(), "query");
        assert_eq!(SeedToken::from("x").variant(), "related");
    }
}
