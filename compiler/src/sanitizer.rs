use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::types::EntityKind;

/// Names generated code already uses on or next to every message.
pub const SWIFT_PROTOBUF_RESERVED: [&str; 13] = [
    "SwiftProtobuf", "Extensions", "protoMessageName", "decodeMessage", "traverse",
    "isInitialized", "unknownFields", "debugDescription", "description", "dynamicType",
    "hashValue", "Type", "Protocol",
];

pub const KEYWORDS_USED_IN_DECLARATIONS: [&str; 22] = [
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "open", "operator", "private", "protocol", "public",
    "static", "struct", "subscript", "typealias", "var",
];

pub const KEYWORDS_USED_IN_STATEMENTS: [&str; 17] = [
    "break", "case", "continue", "default", "defer", "do", "else", "fallthrough", "for", "guard",
    "if", "in", "repeat", "return", "switch", "where", "while",
];

pub const KEYWORDS_USED_IN_EXPRESSIONS_AND_TYPES: [&str; 14] = [
    "as", "Any", "catch", "false", "is", "nil", "rethrows", "super", "self", "Self", "throw",
    "throws", "true", "try",
];

pub const COMMON_TYPES: [&str; 11] = [
    "Bool", "Data", "Double", "Float", "Int", "Int32", "Int64", "String", "UInt", "UInt32",
    "UInt64",
];

pub const SPECIAL_VARIABLES: [&str; 4] = ["__COLUMN__", "__FILE__", "__FUNCTION__", "__LINE__"];

lazy_static! {
    static ref RESERVED_NAMES: HashSet<&'static str> = SWIFT_PROTOBUF_RESERVED
        .iter()
        .chain(KEYWORDS_USED_IN_DECLARATIONS.iter())
        .chain(KEYWORDS_USED_IN_STATEMENTS.iter())
        .chain(KEYWORDS_USED_IN_EXPRESSIONS_AND_TYPES.iter())
        .chain(COMMON_TYPES.iter())
        .chain(SPECIAL_VARIABLES.iter())
        .copied()
        .collect();
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(name)
}

/// Empty names count too: they are what is left of a name made only of
/// disambiguators.
fn is_all_underscore(name: &str) -> bool {
    name.chars().all(|c| c == '_')
}

/// Append the kind's disambiguator to names that collide with a reserved word
/// or consist only of underscores.
///
/// A name that already ends in the disambiguator is sanitized without it and
/// gets it back afterwards, so `TypeMessage` (→ `TypeMessageMessage`) never
/// collides with the sanitized form of `Type` (→ `TypeMessage`).
pub fn sanitize(name: &str, kind: EntityKind) -> String {
    let suffix = kind.disambiguator();
    let mut stem = name;
    let mut stripped = 0;

    // Every iteration shortens `stem` by `suffix.len()`.
    loop {
        if is_reserved(stem) || is_all_underscore(stem) {
            stripped += 1;
            break;
        }
        match stem.strip_suffix(suffix) {
            Some(shorter) => {
                stem = shorter;
                stripped += 1;
            }
            None => break,
        }
    }

    let mut sanitized = String::with_capacity(stem.len() + suffix.len() * stripped);
    sanitized.push_str(stem);
    for _ in 0..stripped {
        sanitized.push_str(suffix);
    }
    sanitized
}
