use crate::errors::{OrderError, Result};

/// Result of a query that yields at most one item
///
/// A missing item is a normal outcome, not an error. Reading the payload of a
/// not-found result is an error, so check `result_was_found` first or use
/// `into_option`.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleSearchResult<T> {
    result: Option<T>,
}

impl<T> SingleSearchResult<T> {
    pub fn found(result: T) -> Self {
        Self {
            result: Some(result),
        }
    }

    pub fn not_found() -> Self {
        Self { result: None }
    }

    pub fn result_was_found(&self) -> bool {
        self.result.is_some()
    }

    /// Borrow the payload
    ///
    /// # Errors
    /// `InvalidOperation` if nothing was found.
    pub fn result(&self) -> Result<&T> {
        self.result
            .as_ref()
            .ok_or_else(|| OrderError::ResultNotPresent.into())
    }

    /// Take the payload
    ///
    /// # Errors
    /// `InvalidOperation` if nothing was found.
    pub fn into_result(self) -> Result<T> {
        self.result.ok_or_else(|| OrderError::ResultNotPresent.into())
    }

    pub fn into_option(self) -> Option<T> {
        self.result
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SingleSearchResult<U> {
        SingleSearchResult {
            result: self.result.map(f),
        }
    }
}

impl<T> From<Option<T>> for SingleSearchResult<T> {
    fn from(result: Option<T>) -> Self {
        Self { result }
    }
}

impl<T> IntoIterator for SingleSearchResult<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.result.into_iter()
    }
}

/// Result of a query that yields any number of items, in store order
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<T> {
    results: Vec<T>,
}

impl<T> SearchResult<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self { results }
    }

    pub fn result_was_found(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.results
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchResult<U> {
        SearchResult {
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
        }
    }
}

impl<T> FromIterator<T> for SearchResult<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for SearchResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SearchResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
