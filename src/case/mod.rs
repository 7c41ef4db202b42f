//! Character-level case conversion between separator-delimited names
//! (`this_is_a_test`, `this-is-a-test`) and compound names (`thisIsATest`,
//! `ThisIsATest`).

/// Casing applied to the first emitted character when composing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstLetter {
    Lower,
    Upper,
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

/// Render a separator-delimited name into compound form: separators are
/// dropped, the character after each separator is upper-cased, and the first
/// character gets `first_letter`.
///
/// The decision for "character follows a separator" is made against the raw
/// input, so a name that *starts* with a separator never has its first
/// character visited by the first-letter rule: `compose("_foo", Lower)` is
/// `"Foo"`, not `"foo"`. Callers that need a lower-case guarantee must
/// enforce it themselves (see [`from_camel_case`]).
fn compose(input: &str, first_letter: FirstLetter) -> String {
    let mut output = String::with_capacity(input.len());
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if is_separator(c) {
            prev = Some(c);
            continue;
        }

        match prev {
            None => match first_letter {
                FirstLetter::Lower => output.extend(c.to_lowercase()),
                FirstLetter::Upper => output.extend(c.to_uppercase()),
            },
            Some(p) if is_separator(p) => output.extend(c.to_uppercase()),
            Some(_) => output.push(c),
        }

        prev = Some(c);
    }

    output
}

/// Convert a string with underscores (`this_is_a_test`) or hyphens
/// (`this-is-a-test`) to camel case (`thisIsATest`). Camel case is the same
/// as Pascal case, except the first letter is lowercase.
pub fn to_camel_case(input: &str) -> String {
    compose(input, FirstLetter::Lower)
}

/// Convert a string with underscores (`this_is_a_test`) or hyphens
/// (`this-is-a-test`) to Pascal case (`ThisIsATest`). Pascal case is the
/// same as camel case, except the first letter is uppercase.
pub fn to_pascal_case(input: &str) -> String {
    compose(input, FirstLetter::Upper)
}

/// Convert a string from camel case (`thisIsATest`) to a separator-delimited
/// form (`this_is_a_test`, `this-is-a-test`), inserting `separator` before
/// each upper-case word boundary and lower-casing everything.
///
/// The input is normalized through camel case first, so mixed inputs like
/// `Already_mixed-Name` decompose the same way their camel rendering would.
/// An empty `separator` just lower-cases the whole name.
pub fn from_camel_case(input: &str, separator: &str) -> String {
    let camel = compose(input, FirstLetter::Lower);
    let mut output = String::with_capacity(camel.len());

    for (i, c) in camel.chars().enumerate() {
        // First letter is forced lowercase: compose can still emit an
        // upper-case first character when the input led with a separator.
        if i == 0 {
            output.extend(c.to_lowercase());
        } else if c.is_uppercase() {
            output.push_str(separator);
            output.extend(c.to_lowercase());
        } else {
            output.push(c);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_from_underscored() {
        assert_eq!(to_camel_case("this_is_a_test"), "thisIsATest");
    }

    #[test]
    fn test_camel_from_hyphenated() {
        assert_eq!(to_camel_case("this-is-a-test"), "thisIsATest");
    }

    #[test]
    fn test_pascal_from_underscored() {
        assert_eq!(to_pascal_case("this_is_a_test"), "ThisIsATest");
    }

    #[test]
    fn test_pascal_from_hyphenated() {
        assert_eq!(to_pascal_case("this-is-a-test"), "ThisIsATest");
    }

    #[test]
    fn test_from_camel_underscored() {
        assert_eq!(from_camel_case("thisIsATest", "_"), "this_is_a_test");
    }

    #[test]
    fn test_from_camel_hyphenated() {
        assert_eq!(from_camel_case("thisIsATest", "-"), "this-is-a-test");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(from_camel_case("", "_"), "");
    }

    #[test]
    fn test_leading_separator_defeats_first_letter_policy() {
        // Regression pin: the character after the dropped leading separator
        // is upper-cased by the boundary rule, not lower-cased by the
        // first-letter rule.
        assert_eq!(to_camel_case("_foo"), "Foo");
        assert_eq!(to_camel_case("-foo"), "Foo");
        assert_eq!(to_pascal_case("_foo"), "Foo");
        // The decomposer's forced-lowercase first letter absorbs the quirk.
        assert_eq!(from_camel_case("_foo", "_"), "foo");
    }

    #[test]
    fn test_camel_idempotent_without_separators() {
        for s in ["thisIsATest", "already", "X", "", "with1Digit"] {
            assert_eq!(to_camel_case(&to_camel_case(s)), to_camel_case(s));
        }
    }

    #[test]
    fn test_round_trip_underscored() {
        for s in ["this_is_a_test", "single", "two_words", "a_b_c"] {
            assert_eq!(from_camel_case(&to_camel_case(s), "_"), s);
        }
    }

    #[test]
    fn test_from_camel_is_all_lowercase() {
        for s in ["ThisIsATest", "SCREAMING", "Mixed_Input-Name", "abc123Def"] {
            let out = from_camel_case(s, "_");
            assert!(out.chars().all(|c| !c.is_uppercase()), "not lower: {}", out);
        }
    }

    #[test]
    fn test_empty_separator_lowercases() {
        assert_eq!(from_camel_case("thisIsATest", ""), "thisisatest");
    }

    #[test]
    fn test_multi_char_separator() {
        assert_eq!(from_camel_case("thisIsATest", "::"), "this::is::a::test");
    }

    #[test]
    fn test_non_letter_characters_pass_through() {
        assert_eq!(to_camel_case("field_1_name"), "field1Name");
        assert_eq!(to_camel_case("x.y_z"), "x.yZ");
    }

    #[test]
    fn test_adjacent_separators() {
        // Both are dropped; the character after the run is upper-cased once.
        assert_eq!(to_camel_case("foo__bar"), "fooBar");
        assert_eq!(to_camel_case("foo-_bar"), "fooBar");
    }

    #[test]
    fn test_trailing_separator_dropped() {
        assert_eq!(to_camel_case("foo_"), "foo");
        assert_eq!(to_pascal_case("foo-"), "Foo");
    }

    #[test]
    fn test_pascal_input_to_camel() {
        assert_eq!(to_camel_case("ThisIsATest"), "thisIsATest");
    }

    #[test]
    fn test_from_camel_pascal_input() {
        assert_eq!(from_camel_case("ThisIsATest", "-"), "this-is-a-test");
    }
}
