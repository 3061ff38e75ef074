use crate::error::InputError;
use std::fmt;

/// Immutable cursor into a slice of elements
///
/// An input never copies or mutates its source. Consuming an element returns a new
/// cursor one position further along, so suffixing is constant time no matter how
/// long a repetition runs. Inputs are `Copy`, which lets a combinator hold on to the
/// position it started from while trying an alternative.
pub struct Input<'code, T> {
    source: &'code [T],
    position: usize,
}

impl<'code, T> Input<'code, T> {
    /// Create a cursor positioned at the start of `source`
    pub fn new(source: &'code [T]) -> Self {
        Input {
            source,
            position: 0,
        }
    }

    /// The first remaining element, or `None` at the end of the input
    pub fn head(&self) -> Option<&'code T> {
        self.source.get(self.position)
    }

    /// The input after its first element
    ///
    /// # Panics
    ///
    /// Panics if the input is empty. Every parser in this crate checks `head` first;
    /// use [`Input::try_tail`] when that is not known.
    pub fn tail(self) -> Self {
        match self.try_tail() {
            Ok(rest) => rest,
            Err(e) => panic!("{}", e),
        }
    }

    /// The input after its first element, or an error if there is none
    pub fn try_tail(self) -> Result<Self, InputError> {
        if self.is_empty() {
            return Err(InputError::AlreadyAtEnd {
                position: self.position,
            });
        }
        Ok(Input {
            source: self.source,
            position: self.position + 1,
        })
    }

    /// Whether every element has been consumed
    pub fn is_empty(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Number of elements remaining
    pub fn len(&self) -> usize {
        self.source.len().saturating_sub(self.position)
    }

    /// Number of elements consumed since the start of the source
    pub fn position(&self) -> usize {
        self.position
    }

    /// The whole source, including the consumed prefix
    pub fn source(&self) -> &'code [T] {
        self.source
    }

    /// The remaining elements
    pub fn as_slice(&self) -> &'code [T] {
        &self.source[self.position.min(self.source.len())..]
    }

    /// Consume the cursor and return its source and position
    pub fn inner(self) -> (&'code [T], usize) {
        (self.source, self.position)
    }
}

impl<T> Clone for Input<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Input<'_, T> {}

// Two inputs are equal when the sequences they have left are equal.
impl<T: PartialEq> PartialEq for Input<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Input<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Input<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("position", &self.position)
            .field("rest", &self.as_slice())
            .finish()
    }
}
