/// Which branch of an [`alternative`](crate::alternative()) matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The left value, if this is `Left`
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The right value, if this is `Right`
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    pub fn map_left<U, F: FnOnce(L) -> U>(self, f: F) -> Either<U, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn map_right<U, F: FnOnce(R) -> U>(self, f: F) -> Either<L, U> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Collapse both branches into one value
    pub fn either<U>(self, on_left: impl FnOnce(L) -> U, on_right: impl FnOnce(R) -> U) -> U {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }
}

impl<T> Either<T, T> {
    /// The value of whichever branch matched
    pub fn into_inner(self) -> T {
        match self {
            Either::Left(value) | Either::Right(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let left: Either<char, u32> = Either::Left('a');
        let right: Either<char, u32> = Either::Right(7);

        assert!(left.is_left());
        assert!(!left.is_right());
        assert!(right.is_right());
        assert_eq!(left.left(), Some('a'));
        assert_eq!(left.right(), None);
        assert_eq!(right.right(), Some(7));
    }

    #[test]
    fn test_map_only_touches_one_side() {
        let left: Either<u32, u32> = Either::Left(2);

        assert_eq!(left.map_left(|n| n * 10), Either::Left(20));
        assert_eq!(left.map_right(|n| n * 10), Either::Left(2));
    }

    #[test]
    fn test_either_fold() {
        let value: Either<char, u32> = Either::Right(42);
        let text = value.either(|c| c.to_string(), |n| format!("#{}", n));
        assert_eq!(text, "#42");
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(Either::<char, char>::Left('x').into_inner(), 'x');
        assert_eq!(Either::<char, char>::Right('y').into_inner(), 'y');
    }
}
