/// Converts errors from their error type (of the submodule) to that of
/// a `railcast::Error` variant, or into any other enum variant when the
/// target is named explicitly.
///
/// ```rust,ignore
/// use railcast::path::PathError;
/// railcast::impl_err!(PathError, Path);
/// railcast::impl_err!(GeoError, PathError, Geo);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $variant:ident) => {
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        };
        ($from:ty, $to:ty, $variant:ident) => {
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    Self::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}
