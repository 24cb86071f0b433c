/// Truncated, escaped rendering of an input for the trace log.
pub(crate) fn snippet(s: &str) -> String {
    let end = s
        .char_indices()
        .nth(24)
        .map(|(i, _c)| i)
        .unwrap_or(s.len());
    let mut out = s[..end].escape_default().to_string();
    if end < s.len() {
        out.push_str("..");
    }
    format!("|{out}|")
}

#[cfg(test)]
mod tests {
    use super::snippet;

    #[test]
    fn test_snippet() {
        assert_eq!(snippet("abc"), "|abc|");
        assert_eq!(snippet("a\tb"), "|a\\tb|");
        assert_eq!(
            snippet("0123456789012345678901234567890"),
            "|012345678901234567890123..|"
        );
    }
}
