use core::fmt;

use crate::option::into_opt::IntoOpt;

/// An explicit optional value.
///
/// `Present` always holds a real value.  Absence is only representable as
/// the zero-sized `Absent` variant, so the nullable form (`Option`) never
/// leaks into the container: every constructor collapses it at the
/// boundary.
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Opt<T> {
    Present(T),
    Absent,
}

impl<T> Opt<T> {
    /// Collapses the nullable form into a variant.  `Some(v)` becomes
    /// `Present(v)`, `None` becomes `Absent`.  Total - never fails.
    #[inline]
    pub fn of(value: Option<T>) -> Opt<T> {
        match value {
            Some(value) => Opt::Present(value),
            None => Opt::Absent,
        }
    }

    /// Constructs a `Present` directly.
    #[inline]
    pub const fn present(value: T) -> Opt<T> {
        return Opt::Present(value);
    }

    /// The empty value.
    #[inline]
    pub const fn absent() -> Opt<T> {
        return Opt::Absent;
    }

    /// Returns true if a value is held.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        return matches!(self, Opt::Present(_));
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        return !self.is_defined();
    }

    /// Transforms the held value.  `Absent` short-circuits without
    /// invoking `f`.  The result of `f` is collapsed through [`IntoOpt`],
    /// so a mapping function that produces `None` (or an absent foreign
    /// value) empties the container.  The container never holds a null.
    #[inline]
    pub fn map<U, R, F>(self, f: F) -> Opt<U>
    where
        R: IntoOpt<U>,
        F: FnOnce(T) -> R,
    {
        match self {
            Opt::Present(value) => f(value).into_opt(),
            Opt::Absent => Opt::Absent,
        }
    }

    /// Chains a computation that is itself optional.  The result of `f`
    /// is returned as-is, with no further collapsing.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        match self {
            Opt::Present(value) => f(value),
            Opt::Absent => Opt::Absent,
        }
    }

    /// Keeps the value only if the predicate holds.  `Absent`
    /// short-circuits without invoking the predicate.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Opt<T>
    where
        P: FnOnce(&T) -> bool,
    {
        if let Opt::Present(value) = self {
            if predicate(&value) {
                return Opt::Present(value);
            }
        }
        return Opt::Absent;
    }

    /// Returns self if `Present`.  The alternative is only evaluated for
    /// `Absent` - it may be expensive or have side effects.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Opt<T>
    where
        F: FnOnce() -> Opt<T>,
    {
        if self.is_defined() {
            return self;
        }
        return alternative();
    }

    /// Returns the held value, or the eagerly evaluated alternative.
    #[inline]
    pub fn get_or_else(self, alternative: T) -> T {
        match self {
            Opt::Present(value) => value,
            Opt::Absent => alternative,
        }
    }

    /// Dispatches on the variant.  Exactly one of the two branches runs.
    #[inline]
    pub fn fold<R, A, P>(self, absent: A, present: P) -> R
    where
        A: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Opt::Present(value) => present(value),
            Opt::Absent => absent(),
        }
    }

    /// Runs `f` for its side effect if a value is held.
    #[inline]
    pub fn for_each<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        if let Opt::Present(value) = self {
            f(value);
        }
    }

    /// Reads the value back out as the nullable form.  Total for both
    /// variants - this is also the plain-data projection.
    #[inline]
    pub fn get(self) -> Option<T> {
        match self {
            Opt::Present(value) => Some(value),
            Opt::Absent => None,
        }
    }

    #[inline]
    pub const fn get_ref(&self) -> Option<&T> {
        match self {
            Opt::Present(value) => Some(value),
            Opt::Absent => None,
        }
    }

    /// Converts from `&Opt<T>` to `Opt<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Present(value) => Opt::Present(value),
            Opt::Absent => Opt::Absent,
        }
    }

    /// Converts from `&mut Opt<T>` to `Opt<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Opt<&mut T> {
        match self {
            Opt::Present(value) => Opt::Present(value),
            Opt::Absent => Opt::Absent,
        }
    }

    /// Returns the held value, panicking with `msg` on `Absent`.  For
    /// callers that have already established presence.
    #[inline]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Opt::Present(value) => value,
            Opt::Absent => panic!("{}", msg),
        }
    }
}

impl<T> Default for Opt<T> {
    #[inline]
    fn default() -> Opt<T> {
        return Opt::Absent;
    }
}

impl<T> From<T> for Opt<T> {
    #[inline]
    fn from(value: T) -> Opt<T> {
        return Opt::Present(value);
    }
}

impl<T> From<Option<T>> for Opt<T> {
    #[inline]
    fn from(value: Option<T>) -> Opt<T> {
        return Opt::of(value);
    }
}

impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Opt::Present(value) => write!(f, "Some({})", value),
            Opt::Absent => write!(f, "None"),
        }
    }
}
