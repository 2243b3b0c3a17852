pub fn quote(text: &str) -> String {
    // Serializing a `&str` cannot fail.
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// Simple (one-to-one) upper-case mapping. Characters whose upper-case form
/// expands to several characters, like `ß`, are kept as they are.
pub fn to_upper_simple(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Upper-case the first character of `word` and keep the rest untouched.
pub fn uppercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => to_upper_simple(first).to_string() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes_like_json() {
        assert_eq!(quote("a/b.proto"), "\"a/b.proto\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_uppercase_first() {
        assert_eq!(uppercase_first("status"), "Status");
        assert_eq!(uppercase_first("é"), "É");
        assert_eq!(uppercase_first("ßa"), "ßa");
        assert_eq!(uppercase_first(""), "");
    }
}
