use crate::utils::to_upper_simple;

/// Prefix prepended to top-level type names of a file.
///
/// A non-empty `swift_prefix` option wins and is used verbatim. Otherwise the
/// package is camel-cased segment by segment, `.` becomes `_`, and a trailing
/// `_` separates the prefix from the type name: `foo.bar_baz` → `Foo_BarBaz_`.
/// An empty package has no prefix at all.
pub fn type_prefix(package: &str, swift_prefix: Option<&str>) -> String {
    if let Some(prefix) = swift_prefix.filter(|p| !p.is_empty()) {
        return prefix.to_string();
    }
    if package.is_empty() {
        return String::new();
    }

    let mut prefix = String::with_capacity(package.len() + 1);
    let mut make_upper = true;
    for c in package.chars() {
        match c {
            '_' => make_upper = true,
            '.' => {
                make_upper = true;
                prefix.push('_');
            }
            _ => {
                if prefix.is_empty() && c.is_numeric() {
                    prefix.push('_');
                }
                if make_upper {
                    prefix.push(to_upper_simple(c));
                    make_upper = false;
                } else {
                    prefix.push(c);
                }
            }
        }
    }
    prefix.push('_');
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_prefix() {
        assert_eq!(type_prefix("foo.bar_baz", None), "Foo_BarBaz_");
        assert_eq!(type_prefix("a.b", None), "A_B_");
        assert_eq!(type_prefix("google.protobuf", None), "Google_Protobuf_");
        assert_eq!(type_prefix("fooBar", None), "FooBar_");
    }

    #[test]
    fn test_empty_package() {
        assert_eq!(type_prefix("", None), "");
        assert_eq!(type_prefix("", Some("")), "");
    }

    #[test]
    fn test_swift_prefix_override() {
        assert_eq!(type_prefix("foo.bar", Some("XYZ")), "XYZ");
        assert_eq!(type_prefix("", Some("XYZ")), "XYZ");
        assert_eq!(type_prefix("foo.bar", Some("")), "Foo_Bar_");
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(type_prefix("9lives.cat", None), "_9lives_Cat_");
        assert_eq!(type_prefix("v1.api", None), "V1_Api_");
    }

    #[test]
    fn test_separator_edges() {
        assert_eq!(type_prefix("_foo", None), "Foo_");
        assert_eq!(type_prefix(".foo", None), "_Foo_");
    }
}
