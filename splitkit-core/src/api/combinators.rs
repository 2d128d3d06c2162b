//! Ready-made splitters and one-call split functions
//!
//! Everything here is a short composition of [`Splitter`] transformers.

use crate::api::splitter::Splitter;
use crate::domain::Delimiter;

/// Split on any single element contained in `elements`
pub fn one_of<T>(elements: impl Into<Vec<T>>) -> Splitter<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Splitter::new(Delimiter::one_of(elements))
}

/// Split on the exact subsequence `sublist`
///
/// An empty `sublist` splits between every element.
pub fn on<T>(sublist: impl Into<Vec<T>>) -> Splitter<T> {
    Splitter::new(Delimiter::on(sublist))
}

/// Split on every element accepted by `predicate`
pub fn when<T, F>(predicate: F) -> Splitter<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Splitter::new(Delimiter::when(predicate))
}

/// A splitter that never splits
pub fn never<T>() -> Splitter<T> {
    Splitter::default()
}

/// Split into chunks that each begin with `sublist`
///
/// ```rust
/// use splitkit_core::starts_with;
///
/// let chunks = starts_with(vec![0]).split(&[1, 0, 2, 3, 0, 4]);
/// assert_eq!(chunks, vec![&[1][..], &[0, 2, 3], &[0, 4]]);
/// ```
pub fn starts_with<T>(sublist: impl Into<Vec<T>>) -> Splitter<T> {
    on(sublist).keep_delims_left().drop_init_blank()
}

/// Split into chunks that each begin with one of `elements`
pub fn starts_with_one_of<T>(elements: impl Into<Vec<T>>) -> Splitter<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    one_of(elements).keep_delims_left().drop_init_blank()
}

/// Split into chunks that each end with `sublist`
pub fn ends_with<T>(sublist: impl Into<Vec<T>>) -> Splitter<T> {
    on(sublist).keep_delims_right().drop_final_blank()
}

/// Split into chunks that each end with one of `elements`
pub fn ends_with_one_of<T>(elements: impl Into<Vec<T>>) -> Splitter<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    one_of(elements).keep_delims_right().drop_final_blank()
}

/// Split on any of `elements`, dropping them
pub fn split_one_of<'a, T>(elements: impl Into<Vec<T>>, input: &'a [T]) -> Vec<&'a [T]>
where
    T: PartialEq + Send + Sync + 'static,
{
    one_of(elements).drop_delims().split(input)
}

/// Split on the subsequence `sublist`, dropping it
///
/// ```rust
/// use splitkit_core::split_on;
///
/// let input: Vec<char> = "aazbxyzcxd".chars().collect();
/// let chunks = split_on(vec!['x', 'y', 'z'], &input);
/// assert_eq!(chunks, vec![&input[..4], &input[7..]]);
/// ```
pub fn split_on<'a, T>(sublist: impl Into<Vec<T>>, input: &'a [T]) -> Vec<&'a [T]>
where
    T: PartialEq,
{
    on(sublist).drop_delims().split(input)
}

/// Split on every element accepted by `predicate`, dropping it
pub fn split_when<'a, T, F>(predicate: F, input: &'a [T]) -> Vec<&'a [T]>
where
    T: PartialEq,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    when(predicate).drop_delims().split(input)
}

/// Split on `sublist` used as a terminator
///
/// No trailing blank chunk is produced when the input ends with `sublist`.
pub fn end_by<'a, T>(sublist: impl Into<Vec<T>>, input: &'a [T]) -> Vec<&'a [T]>
where
    T: PartialEq,
{
    on(sublist).drop_delims().drop_final_blank().split(input)
}

/// Split on any of `elements` used as terminators
pub fn end_by_one_of<'a, T>(elements: impl Into<Vec<T>>, input: &'a [T]) -> Vec<&'a [T]>
where
    T: PartialEq + Send + Sync + 'static,
{
    one_of(elements)
        .drop_delims()
        .drop_final_blank()
        .split(input)
}

/// Split into non-empty words separated by runs of matching elements
///
/// ```rust
/// use splitkit_core::words_by;
///
/// let input: Vec<char> = "dogxxxcatxbirdxx".chars().collect();
/// let words: Vec<String> = words_by(|c| *c == 'x', &input)
///     .into_iter()
///     .map(|w| w.iter().collect())
///     .collect();
/// assert_eq!(words, ["dog", "cat", "bird"]);
/// ```
pub fn words_by<'a, T, F>(predicate: F, input: &'a [T]) -> Vec<&'a [T]>
where
    T: PartialEq,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    when(predicate).drop_delims().drop_blanks().split(input)
}

/// Split into lines terminated by matching elements
///
/// Blank lines are kept; a final terminator does not open a new line.
pub fn lines_by<'a, T, F>(predicate: F, input: &'a [T]) -> Vec<&'a [T]>
where
    T: PartialEq,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    when(predicate)
        .drop_delims()
        .drop_final_blank()
        .split(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn strings(chunks: Vec<&[char]>) -> Vec<String> {
        chunks.into_iter().map(|c| c.iter().collect()).collect()
    }

    #[test]
    fn test_lines_by_keeps_inner_blank_lines() {
        let input = chars("dogxxxcatxbirdxx");
        assert_eq!(
            strings(lines_by(|c| *c == 'x', &input)),
            ["dog", "", "", "cat", "bird", ""]
        );
    }

    #[test]
    fn test_end_by() {
        let input = chars("a;b;c;");
        assert_eq!(strings(end_by(vec![';'], &input)), ["a", "b", "c"]);

        let input = chars("a;b;c");
        assert_eq!(strings(end_by(vec![';'], &input)), ["a", "b", "c"]);
    }

    #[test]
    fn test_end_by_one_of() {
        let input = chars("a.b!c?");
        assert_eq!(
            strings(end_by_one_of(chars(".!?"), &input)),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn test_ends_with_keeps_terminator() {
        let input = chars("a;b;c;");
        assert_eq!(
            strings(ends_with(vec![';']).split(&input)),
            ["a;", "b;", "c;"]
        );
    }

    #[test]
    fn test_ends_with_one_of_keeps_terminators() {
        let input = chars("Hi. Bye! Ok");
        assert_eq!(
            strings(ends_with_one_of(chars(".!")).split(&input)),
            ["Hi.", " Bye!", " Ok"]
        );
    }

    #[test]
    fn test_starts_with_one_of() {
        let input = chars("+a-b+c");
        assert_eq!(
            strings(starts_with_one_of(chars("+-")).split(&input)),
            ["+a", "-b", "+c"]
        );
    }

    #[test]
    fn test_split_when_and_one_of_agree() {
        let input = chars("a1b22c");
        assert_eq!(
            split_when(|c: &char| c.is_ascii_digit(), &input),
            split_one_of(chars("0123456789"), &input)
        );
    }

    #[test]
    fn test_never_returns_whole_input() {
        let input = [1, 2, 3];
        assert_eq!(never().split(&input), vec![&input[..]]);
    }

    #[test]
    fn test_on_empty_sublist_splits_every_element() {
        let input = chars("abc");
        assert_eq!(strings(on(Vec::new()).split(&input)), ["", "a", "b", "c"]);
    }
}
