//! Splitting configuration and the split entry points

use std::ops::Range;

use crate::application::post_process;
use crate::domain::{
    resolve_spans, tag, tag_spans, BlankPolicy, Delimiter, DelimiterDisposition, RunPolicy,
    Segment, Span, SplitPolicy, TextIndex,
};

/// A complete splitting strategy: a delimiter plus the policies applied to
/// what it matches
///
/// `Splitter` is immutable in use. Every transformer consumes the value and
/// returns a modified copy, so derived strategies compose by chaining and a
/// shared base can be cloned first:
///
/// ```rust
/// use splitkit_core::{one_of, Splitter};
///
/// let base: Splitter<char> = one_of(vec![':']);
/// let trimmed = base.clone().drop_init_blank().drop_final_blank();
///
/// let input: Vec<char> = ":a:b:".chars().collect();
/// assert_eq!(base.split(&input).len(), 4);
/// assert_eq!(trimmed.split(&input).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Splitter<T> {
    delimiter: Delimiter<T>,
    policy: SplitPolicy,
}

impl<T> Default for Splitter<T> {
    /// Never-matching delimiter, delimiters dropped, blank fields kept, both
    /// end blanks kept. Splitting with it returns the input as one chunk.
    fn default() -> Self {
        Self {
            delimiter: Delimiter::never(),
            policy: SplitPolicy::default(),
        }
    }
}

impl<T> Splitter<T> {
    /// The default strategy with `delimiter`
    pub fn new(delimiter: Delimiter<T>) -> Self {
        Self {
            delimiter,
            policy: SplitPolicy::default(),
        }
    }

    /// The delimiter in use
    pub fn delimiter(&self) -> &Delimiter<T> {
        &self.delimiter
    }

    /// All pipeline settings
    pub fn policy(&self) -> SplitPolicy {
        self.policy
    }

    /// What happens to matched delimiters
    pub fn delimiter_disposition(&self) -> DelimiterDisposition {
        self.policy.disposition
    }

    /// How consecutive delimiters are treated
    pub fn run_policy(&self) -> RunPolicy {
        self.policy.runs
    }

    /// Whether a leading blank chunk survives
    pub fn leading_blank_policy(&self) -> BlankPolicy {
        self.policy.leading_blank
    }

    /// Whether a trailing blank chunk survives
    pub fn trailing_blank_policy(&self) -> BlankPolicy {
        self.policy.trailing_blank
    }

    /// Replace the delimiter
    pub fn with_delimiter(self, delimiter: Delimiter<T>) -> Self {
        Self { delimiter, ..self }
    }

    /// Replace all pipeline settings
    pub fn with_policy(self, policy: SplitPolicy) -> Self {
        Self { policy, ..self }
    }

    /// Set the delimiter disposition
    pub fn with_disposition(mut self, disposition: DelimiterDisposition) -> Self {
        self.policy.disposition = disposition;
        self
    }

    /// Set the run policy
    pub fn with_run_policy(mut self, runs: RunPolicy) -> Self {
        self.policy.runs = runs;
        self
    }

    /// Set the leading blank policy
    pub fn with_leading_blank_policy(mut self, policy: BlankPolicy) -> Self {
        self.policy.leading_blank = policy;
        self
    }

    /// Set the trailing blank policy
    pub fn with_trailing_blank_policy(mut self, policy: BlankPolicy) -> Self {
        self.policy.trailing_blank = policy;
        self
    }

    /// Remove delimiters from the output (the default)
    pub fn drop_delims(self) -> Self {
        self.with_disposition(DelimiterDisposition::Drop)
    }

    /// Keep delimiters as separate chunks
    pub fn keep_delims(self) -> Self {
        self.with_disposition(DelimiterDisposition::Keep)
    }

    /// Attach each delimiter to the start of the following chunk
    pub fn keep_delims_left(self) -> Self {
        self.with_disposition(DelimiterDisposition::KeepWithFollowing)
    }

    /// Attach each delimiter to the end of the preceding chunk
    pub fn keep_delims_right(self) -> Self {
        self.with_disposition(DelimiterDisposition::KeepWithPreceding)
    }

    /// Treat a run of consecutive delimiters as a single delimiter
    pub fn condense(self) -> Self {
        self.with_run_policy(RunPolicy::Condense)
    }

    /// Do not produce blank chunks between consecutive delimiters
    ///
    /// Blank chunks at the two ends are unaffected; see
    /// [`drop_init_blank`](Self::drop_init_blank) and
    /// [`drop_final_blank`](Self::drop_final_blank).
    pub fn drop_inner_blanks(self) -> Self {
        self.with_run_policy(RunPolicy::DropBlankFields)
    }

    /// Drop a blank chunk at the start of the output
    pub fn drop_init_blank(self) -> Self {
        self.with_leading_blank_policy(BlankPolicy::DropBlank)
    }

    /// Drop a blank chunk at the end of the output
    pub fn drop_final_blank(self) -> Self {
        self.with_trailing_blank_policy(BlankPolicy::DropBlank)
    }

    /// Drop every blank chunk
    ///
    /// Same as `condense().drop_final_blank().drop_init_blank()`.
    pub fn drop_blanks(self) -> Self {
        self.condense().drop_final_blank().drop_init_blank()
    }
}

impl<T: PartialEq> Splitter<T> {
    /// Tag `input` without applying any policy
    pub fn tag<'a>(&self, input: &'a [T]) -> Vec<Segment<&'a [T]>> {
        tag(&self.delimiter, input)
    }

    /// Split `input` and return the span of each output chunk
    ///
    /// Spans are ordered and never overlap; blank chunks are empty spans.
    pub fn split_spans(&self, input: &[T]) -> Vec<Span> {
        post_process(&self.policy, tag_spans(&self.delimiter, input))
    }

    /// Split `input` into borrowed chunks
    ///
    /// # Example
    ///
    /// ```rust
    /// use splitkit_core::one_of;
    ///
    /// let input: Vec<char> = "aazbxyzcxd".chars().collect();
    /// let splitter = one_of("xyz".chars().collect::<Vec<_>>());
    ///
    /// let chunks: Vec<String> = splitter
    ///     .split(&input)
    ///     .into_iter()
    ///     .map(|chunk| chunk.iter().collect())
    ///     .collect();
    /// assert_eq!(chunks, ["aa", "b", "", "", "c", "d"]);
    /// ```
    pub fn split<'a>(&self, input: &'a [T]) -> Vec<&'a [T]> {
        resolve_spans(input, &self.split_spans(input))
    }

    /// Split `input` into owned chunks
    pub fn split_to_vec(&self, input: &[T]) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.split(input)
            .into_iter()
            .map(<[T]>::to_vec)
            .collect()
    }
}

impl Splitter<char> {
    /// Split a string, matching the delimiter against its chars
    ///
    /// ```rust
    /// use splitkit_core::one_of;
    ///
    /// let splitter = one_of(vec![':']).drop_init_blank();
    /// assert_eq!(splitter.split_str(":a:b"), vec!["a", "b"]);
    /// ```
    pub fn split_str<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split_str_ranges(text)
            .into_iter()
            .map(|range| &text[range])
            .collect()
    }

    /// Split a string and return the byte range of each piece
    pub fn split_str_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let index = TextIndex::new(text);
        self.split_index(&index)
            .iter()
            .map(|span| index.byte_range(span))
            .collect()
    }

    /// Split an indexed string and return char spans
    pub fn split_index(&self, index: &TextIndex) -> Vec<Span> {
        self.split_spans(index.chars())
    }
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
    fn test_default_splitter_settings() {
        let splitter: Splitter<char> = Splitter::default();
        assert_eq!(splitter.delimiter_disposition(), DelimiterDisposition::Drop);
        assert_eq!(splitter.run_policy(), RunPolicy::KeepBlankFields);
        assert_eq!(splitter.leading_blank_policy(), BlankPolicy::KeepBlank);
        assert_eq!(splitter.trailing_blank_policy(), BlankPolicy::KeepBlank);
    }

    #[test]
    fn test_default_is_identity() {
        let splitter: Splitter<char> = Splitter::default();
        let input = chars("a:b");
        assert_eq!(splitter.split(&input), vec![&input[..]]);

        let empty: Vec<&[char]> = splitter.split(&[]);
        assert_eq!(empty, vec![&[] as &[char]]);
    }

    #[test]
    fn test_transformers_override_one_field() {
        let base = Splitter::new(Delimiter::one_of(vec![':']));

        let condensed = base.clone().condense();
        assert_eq!(condensed.run_policy(), RunPolicy::Condense);
        assert_eq!(condensed.delimiter_disposition(), base.delimiter_disposition());
        assert_eq!(base.run_policy(), RunPolicy::KeepBlankFields);

        let keep = base.clone().keep_delims_right();
        assert_eq!(
            keep.delimiter_disposition(),
            DelimiterDisposition::KeepWithPreceding
        );
        assert_eq!(keep.run_policy(), RunPolicy::KeepBlankFields);
    }

    #[test]
    fn test_later_transformer_wins() {
        let splitter = Splitter::new(Delimiter::one_of(vec![',']))
            .condense()
            .drop_inner_blanks();
        assert_eq!(splitter.run_policy(), RunPolicy::DropBlankFields);
    }

    #[test]
    fn test_drop_blanks_composition() {
        let splitter: Splitter<char> = Splitter::default().drop_blanks();
        assert_eq!(
            splitter.policy(),
            SplitPolicy {
                disposition: DelimiterDisposition::Drop,
                runs: RunPolicy::Condense,
                leading_blank: BlankPolicy::DropBlank,
                trailing_blank: BlankPolicy::DropBlank,
            }
        );
    }

    #[test]
    fn test_keep_delims_standalone() {
        let input = chars("a,,b");
        let splitter = Splitter::new(Delimiter::one_of(vec![','])).keep_delims();
        assert_eq!(strings(splitter.split(&input)), ["a", ",", "", ",", "b"]);
    }

    #[test]
    fn test_drop_inner_blanks_with_keep_left() {
        let input = chars("a,,b");
        let splitter = Splitter::new(Delimiter::one_of(vec![',']))
            .drop_inner_blanks()
            .keep_delims_left();
        assert_eq!(strings(splitter.split(&input)), ["a", ",", ",b"]);
    }

    #[test]
    fn test_split_to_vec() {
        let splitter = Splitter::new(Delimiter::on(vec![0, 0]));
        assert_eq!(
            splitter.split_to_vec(&[1, 0, 0, 2, 0, 3]),
            vec![vec![1], vec![2, 0, 3]]
        );
    }

    #[test]
    fn test_split_str_multibyte() {
        let splitter = Splitter::new(Delimiter::one_of(vec!['、']));
        assert_eq!(splitter.split_str("日本、語、"), vec!["日本", "語", ""]);
        assert_eq!(
            splitter.split_str_ranges("日本、語"),
            vec![0..6, 9..12]
        );
    }

    #[test]
    fn test_tag_through_splitter() {
        let splitter = Splitter::new(Delimiter::one_of(vec![1]));
        let segments = splitter.tag(&[0, 1, 2]);
        assert_eq!(
            segments,
            vec![
                Segment::Chunk(&[0][..]),
                Segment::Delim(&[1][..]),
                Segment::Chunk(&[2][..]),
            ]
        );
    }

    #[test]
    fn test_splitter_is_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Splitter<char>>();
        assert_send_sync::<Splitter<String>>();
    }
}
