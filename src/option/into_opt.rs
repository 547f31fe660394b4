use crate::option::opt::Opt;

/// Conversion into an [`Opt`], directed by the expected element type.
///
/// This is the static answer to "is this already an optional?": plain
/// values are always present, the nullable form collapses `None` to
/// `Absent`, and an `Opt` passes through untouched.  Foreign optional
/// types can implement this to interoperate with [`Opt::map`] and
/// `combine_all!` - a best-effort migration shim, not a core contract.
///
/// Because a container type can convert both as itself (a plain value)
/// and by unwrapping, callers annotate the destination element type when
/// it is not otherwise constrained.
pub trait IntoOpt<T> {
    fn into_opt(self) -> Opt<T>;
}

impl<T> IntoOpt<T> for Opt<T> {
    #[inline]
    fn into_opt(self) -> Opt<T> {
        return self;
    }
}

impl<T> IntoOpt<T> for Option<T> {
    #[inline]
    fn into_opt(self) -> Opt<T> {
        return Opt::of(self);
    }
}

impl<T> IntoOpt<T> for T {
    #[inline]
    fn into_opt(self) -> Opt<T> {
        return Opt::Present(self);
    }
}

#[cfg(test)]
mod test;
