use std::collections::BTreeSet;
use std::fmt::Write;

use crate::{
    classifier::{is_valid_continuation, is_valid_head},
    utils::uppercase_first,
};

/// Words upper-cased as a whole instead of only on their first letter.
pub const DEFAULT_ABBREVIATIONS: [&str; 4] = ["url", "http", "https", "id"];

/// The set of words rendered fully upper-case (`http_status` → `HTTPStatus`).
/// Entries are stored lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abbreviations(BTreeSet<String>);

impl Abbreviations {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Abbreviations(words.into_iter().map(|w| w.as_ref().to_lowercase()).collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(&word.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl Default for Abbreviations {
    fn default() -> Self {
        Abbreviations::new(DEFAULT_ABBREVIATIONS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Digit,
    Lower,
    Upper,
    Underscore,
    Other,
}

impl CharKind {
    fn of(c: char) -> CharKind {
        match c {
            '0'..='9' => CharKind::Digit,
            'a'..='z' => CharKind::Lower,
            'A'..='Z' => CharKind::Upper,
            '_' => CharKind::Underscore,
            _ => CharKind::Other,
        }
    }
}

/// Accumulates words into the output identifier.
struct Words<'a> {
    result:             String,
    current:            String,
    initial_upper_case: bool,
    abbreviations:      &'a Abbreviations,
}

impl Words<'_> {
    fn finish_word(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.current);
        if self.result.is_empty() && !self.initial_upper_case {
            self.result.push_str(&word);
        } else if self.abbreviations.contains(&word) {
            self.result.push_str(&word.to_uppercase());
        } else {
            self.result.push_str(&uppercase_first(&word));
        }
    }
}

/// Split `name` into words and join them back camel-cased.
///
/// A word starts when a digit run begins or ends, when an upper-case letter
/// follows a non-upper-case character, when a lower-case letter follows
/// something that is not a letter, and at every underscore or other
/// character. Runs of upper-case letters form a single word, so acronyms
/// survive as `Http` (or `HTTP` when listed in `abbreviations`). Two or more
/// consecutive underscores leave a single `_` in the output. Characters that
/// can not appear in a Swift identifier at their position are written as
/// `_u<decimal code point>`.
pub fn transform(name: &str, initial_upper_case: bool, abbreviations: &Abbreviations) -> String {
    let mut words = Words {
        result: String::with_capacity(name.len()),
        current: String::new(),
        initial_upper_case,
        abbreviations,
    };
    let mut last_kind = CharKind::Other;
    let mut underscore_emitted = false;

    for c in name.chars() {
        let kind = CharKind::of(c);
        match kind {
            CharKind::Digit => {
                if last_kind != CharKind::Digit {
                    words.finish_word();
                }
                words.current.push(c);
            }
            CharKind::Upper => {
                if last_kind != CharKind::Upper {
                    words.finish_word();
                }
                words.current.push(c.to_ascii_lowercase());
            }
            CharKind::Lower => {
                if last_kind != CharKind::Lower && last_kind != CharKind::Upper {
                    words.finish_word();
                }
                words.current.push(c);
            }
            CharKind::Underscore => {
                words.finish_word();
                if last_kind == CharKind::Underscore && !underscore_emitted {
                    words.result.push('_');
                    underscore_emitted = true;
                }
            }
            CharKind::Other => {
                words.finish_word();
                let valid = if words.result.is_empty() {
                    is_valid_head(c)
                } else {
                    is_valid_continuation(c)
                };
                if valid {
                    words.current.push(c);
                } else {
                    // Writing to a String never fails.
                    let _ = write!(words.result, "_u{}", c as u32);
                }
            }
        }
        if kind != CharKind::Underscore {
            underscore_emitted = false;
        }
        last_kind = kind;
    }
    words.finish_word();

    let mut result = words.result;
    if last_kind == CharKind::Underscore {
        result.push('_');
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

pub fn to_upper_camel_case(name: &str, abbreviations: &Abbreviations) -> String {
    transform(name, true, abbreviations)
}

pub fn to_lower_camel_case(name: &str, abbreviations: &Abbreviations) -> String {
    transform(name, false, abbreviations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(name: &str) -> String {
        to_upper_camel_case(name, &Abbreviations::default())
    }

    fn lower(name: &str) -> String {
        to_lower_camel_case(name, &Abbreviations::default())
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(upper("http_status"), "HTTPStatus");
        assert_eq!(upper("user_id"), "UserID");
        assert_eq!(upper("URL"), "URL");
        assert_eq!(upper("https_url"), "HTTPSURL");
        assert_eq!(lower("url_path"), "urlPath");
        assert_eq!(lower("path_url"), "pathURL");
    }

    #[test]
    fn test_configured_abbreviations() {
        let abbreviations = Abbreviations::new(["json"]);
        assert_eq!(to_upper_camel_case("json_id", &abbreviations), "JSONId");
        assert_eq!(to_upper_camel_case("json_id", &Abbreviations::default()), "JsonID");
    }

    #[test]
    fn test_digits_form_words() {
        assert_eq!(upper("foo2bar"), "Foo2Bar");
        assert_eq!(upper("foo_bar2"), "FooBar2");
        assert_eq!(upper("v10beta"), "V10Beta");
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(upper("123abc"), "_123Abc");
        assert_eq!(upper("_1"), "_1");
        assert_eq!(lower("1abc"), "_1Abc");
    }

    #[test]
    fn test_upper_case_runs() {
        assert_eq!(upper("HTTPStatus"), "Httpstatus");
        assert_eq!(upper("fooBAR"), "FooBar");
        assert_eq!(upper("FooBar"), "FooBar");
        assert_eq!(lower("FooBar"), "fooBar");
        assert_eq!(upper("SCREAMING_CASE"), "ScreamingCase");
    }

    #[test]
    fn test_underscores() {
        assert_eq!(upper("foo_bar"), "FooBar");
        assert_eq!(upper("_foo"), "Foo");
        assert_eq!(upper("foo__bar"), "Foo_Bar");
        assert_eq!(upper("foo___bar"), "Foo_Bar");
        assert_eq!(upper("foo_"), "Foo_");
        assert_eq!(upper("foo__"), "Foo__");
        assert_eq!(upper("_"), "_");
        assert_eq!(upper("__"), "__");
    }

    #[test]
    fn test_other_characters() {
        assert_eq!(upper("café"), "CafÉ");
        assert_eq!(upper("naïve"), "NaÏVe");
        assert_eq!(upper("a$b"), "A_u36B");
        assert_eq!(upper("$"), "_u36");
        assert_eq!(upper("a-b"), "A_u45B");
    }

    #[test]
    fn test_combining_mark_depends_on_position() {
        // U+0301 is not an identifier head, but may continue one.
        assert_eq!(upper("\u{301}a"), "_u769A");
        assert_eq!(upper("a\u{301}"), "A\u{301}");
    }

    #[test]
    fn test_empty() {
        assert_eq!(upper(""), "");
    }
}
