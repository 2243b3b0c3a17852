//! Swift identifier grammar, as published in "The Swift Programming
//! Language" (Lexical Structure > Identifiers).

use std::cmp::Ordering;

/// Inclusive code point ranges allowed as the first character of an
/// identifier. Sorted and non-overlapping.
const IDENTIFIER_HEAD: &[(u32, u32)] = &[
    (0x41, 0x5a),
    (0x5f, 0x5f),
    (0x61, 0x7a),
    (0xa8, 0xa8),
    (0xaa, 0xaa),
    (0xad, 0xad),
    (0xaf, 0xaf),
    (0xb2, 0xb5),
    (0xb7, 0xba),
    (0xbc, 0xbe),
    (0xc0, 0xd6),
    (0xd8, 0xf6),
    (0xf8, 0xff),
    (0x100, 0x2ff),
    (0x370, 0x167f),
    (0x1681, 0x180d),
    (0x180f, 0x1dbf),
    (0x1e00, 0x1fff),
    (0x200b, 0x200d),
    (0x202a, 0x202e),
    (0x203f, 0x2040),
    (0x2054, 0x2054),
    (0x2060, 0x206f),
    (0x2070, 0x20cf),
    (0x2100, 0x218f),
    (0x2460, 0x24ff),
    (0x2776, 0x2793),
    (0x2c00, 0x2dff),
    (0x2e80, 0x2fff),
    (0x3004, 0x3007),
    (0x3021, 0x302f),
    (0x3031, 0x303f),
    (0x3040, 0xd7ff),
    (0xf900, 0xfd3d),
    (0xfd40, 0xfdcf),
    (0xfdf0, 0xfe1f),
    (0xfe30, 0xfe44),
    (0xfe47, 0xfffd),
    (0x10000, 0x1fffd),
    (0x20000, 0x2fffd),
    (0x30000, 0x3fffd),
    (0x40000, 0x4fffd),
    (0x50000, 0x5fffd),
    (0x60000, 0x6fffd),
    (0x70000, 0x7fffd),
    (0x80000, 0x8fffd),
    (0x90000, 0x9fffd),
    (0xa0000, 0xafffd),
    (0xb0000, 0xbfffd),
    (0xc0000, 0xcfffd),
    (0xd0000, 0xdfffd),
    (0xe0000, 0xefffd),
];

/// Ranges allowed after the first character in addition to the head ranges:
/// decimal digits and combining marks.
const IDENTIFIER_CONTINUATION: &[(u32, u32)] = &[
    (0x30, 0x39),
    (0x300, 0x36f),
    (0x1dc0, 0x1dff),
    (0x20d0, 0x20ff),
    (0xfe20, 0xfe2f),
];

fn in_ranges(ranges: &[(u32, u32)], c: char) -> bool {
    let code = c as u32;
    ranges
        .binary_search_by(|&(low, high)| {
            if high < code {
                Ordering::Less
            } else if low > code {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

pub fn is_valid_head(c: char) -> bool {
    in_ranges(IDENTIFIER_HEAD, c)
}

pub fn is_valid_continuation(c: char) -> bool {
    in_ranges(IDENTIFIER_CONTINUATION, c) || is_valid_head(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(ranges: &[(u32, u32)]) {
        for pair in ranges.windows(2) {
            assert!(pair[0].0 <= pair[0].1, "bad range {:x?}", pair[0]);
            assert!(pair[0].1 < pair[1].0, "unsorted ranges {:x?}", pair);
        }
    }

    #[test]
    fn test_tables_are_sorted() {
        assert_sorted(IDENTIFIER_HEAD);
        assert_sorted(IDENTIFIER_CONTINUATION);
    }

    #[test]
    fn test_ascii() {
        assert!(is_valid_head('a'));
        assert!(is_valid_head('Z'));
        assert!(is_valid_head('_'));
        assert!(!is_valid_head('0'));
        assert!(!is_valid_head('$'));
        assert!(!is_valid_head('-'));
        assert!(!is_valid_head(' '));

        assert!(is_valid_continuation('0'));
        assert!(is_valid_continuation('9'));
        assert!(!is_valid_continuation('$'));
        assert!(!is_valid_continuation('.'));
    }

    #[test]
    fn test_non_ascii() {
        assert!(is_valid_head('é'));
        assert!(is_valid_head('λ'));
        assert!(is_valid_head('中'));
        assert!(is_valid_head('😀'));
        assert!(!is_valid_head('×'));
        assert!(!is_valid_head('\u{2028}'));
        assert!(!is_valid_head('\u{fffe}'));
    }

    #[test]
    fn test_combining_marks_only_continue() {
        // U+0301 COMBINING ACUTE ACCENT
        assert!(!is_valid_head('\u{301}'));
        assert!(is_valid_continuation('\u{301}'));
        // U+20D7 COMBINING RIGHT ARROW ABOVE
        assert!(!is_valid_head('\u{20d7}'));
        assert!(is_valid_continuation('\u{20d7}'));
    }
}
