//! Delimiter representation and matching
//!
//! A delimiter decides whether a separator occurs at the front of the
//! remaining input. It is either a single-element predicate or an exact
//! subsequence of elements.

use std::fmt;
use std::sync::Arc;

/// Shared single-element test used by predicate delimiters
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// What separates the chunks of a sequence
pub enum Delimiter<T> {
    /// Matches exactly one element when the predicate holds for it
    Predicate(Predicate<T>),
    /// Matches this exact run of elements as a unit
    ///
    /// An empty sublist matches the empty sequence at every position.
    Sublist(Vec<T>),
}

impl<T> Delimiter<T> {
    /// A delimiter that never matches
    pub fn never() -> Self {
        Delimiter::Predicate(Arc::new(|_: &T| false))
    }

    /// A delimiter matching any single element accepted by `predicate`
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Delimiter::Predicate(Arc::new(predicate))
    }

    /// A delimiter matching the exact subsequence `sublist`
    pub fn on(sublist: impl Into<Vec<T>>) -> Self {
        Delimiter::Sublist(sublist.into())
    }

    /// A delimiter matching any single element contained in `elements`
    pub fn one_of(elements: impl Into<Vec<T>>) -> Self
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let elements = elements.into();
        Delimiter::Predicate(Arc::new(move |x: &T| elements.contains(x)))
    }

    /// Returns true if this delimiter can match without consuming input
    pub fn is_empty_sublist(&self) -> bool {
        matches!(self, Delimiter::Sublist(sublist) if sublist.is_empty())
    }
}

impl<T: PartialEq> Delimiter<T> {
    /// Attempt a match at the front of `input`
    ///
    /// On success returns the matched prefix and the remainder. Absence of a
    /// match is `None`, never an error.
    pub fn match_at<'a>(&self, input: &'a [T]) -> Option<(&'a [T], &'a [T])> {
        self.match_len(input).map(|len| input.split_at(len))
    }

    /// Length of the match at the front of `input`, if any
    pub(crate) fn match_len(&self, input: &[T]) -> Option<usize> {
        match self {
            Delimiter::Predicate(predicate) => match input.first() {
                Some(first) if predicate(first) => Some(1),
                _ => None,
            },
            Delimiter::Sublist(sublist) => input.starts_with(sublist).then_some(sublist.len()),
        }
    }
}

impl<T> Default for Delimiter<T> {
    fn default() -> Self {
        Self::never()
    }
}

impl<T: Clone> Clone for Delimiter<T> {
    fn clone(&self) -> Self {
        match self {
            Delimiter::Predicate(predicate) => Delimiter::Predicate(Arc::clone(predicate)),
            Delimiter::Sublist(sublist) => Delimiter::Sublist(sublist.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Delimiter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Predicate(_) => f.debug_tuple("Predicate").field(&"<fn>").finish(),
            Delimiter::Sublist(sublist) => f.debug_tuple("Sublist").field(sublist).finish(),
        }
    }
}
