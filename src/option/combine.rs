/// Combines several optional-or-plain inputs into one optional tuple.
///
/// Each input is converted through [`IntoOpt`](crate::option::IntoOpt),
/// so `Opt`, `Option`, plain values and interop types mix freely.
/// Inputs are evaluated strictly left-to-right and the first `Absent`
/// short-circuits: later input expressions are never evaluated at all.
/// If every input is present the unwrapped values are returned as
/// `Present((v1, v2, ..))`, preserving input order.
///
/// `combine_all!()` is `Present(())` - vacuously all-present.  Up to 12
/// inputs are supported, matching the tuple sizes the standard library
/// implements its traits for.
#[macro_export]
macro_rules! combine_all {
    ($($input:expr),* $(,)?) => {
        $crate::__combine_all!(
            [__cv0 __cv1 __cv2 __cv3 __cv4 __cv5 __cv6 __cv7 __cv8 __cv9 __cv10 __cv11]
            [] $($input,)*
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __combine_all {
    ([$($_spare:ident)*] [$($bound:ident)*]) => {
        $crate::option::Opt::Present(($($bound,)*))
    };
    ([$next:ident $($spare:ident)*] [$($bound:ident)*] $head:expr, $($rest:expr,)*) => {
        match $crate::option::IntoOpt::into_opt($head) {
            $crate::option::Opt::Present($next) => {
                $crate::__combine_all!([$($spare)*] [$($bound)* $next] $($rest,)*)
            }
            $crate::option::Opt::Absent => $crate::option::Opt::Absent,
        }
    };
}
