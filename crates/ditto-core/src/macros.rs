//! Compile-time shorthand accessors

/// Declare an extension trait with typed shorthand methods for metadata keys
///
/// Each line `"key" => has_key, with_key, key;` generates:
/// - `has_key(&self) -> bool`
/// - `with_key(&self, value) -> DittoResult<Self>`
/// - `key(&self) -> DittoResult<&MetaValue>`
///
/// The trait is implemented for every [`Dto`](crate::Dto).
///
/// # Example
/// ```rust
/// use ditto_core::{ditto_accessors, Dto, Envelope};
///
/// ditto_accessors! {
///     pub trait StatusAccessors {
///         "status" => has_status, with_status, status;
///     }
/// }
///
/// let dto = Envelope::<serde_json::Value>::create_for(["status"]).with_status("ok")?;
/// assert!(dto.has_status());
/// assert_eq!(dto.status()?.as_str(), Some("ok"));
/// # Ok::<(), ditto_core::DittoError>(())
/// ```
#[macro_export]
macro_rules! ditto_accessors {
    (
        $(#[$attr:meta])*
        $vis:vis trait $name:ident {
            $( $key:literal => $has:ident, $with:ident, $get:ident; )*
        }
    ) => {
        $(#[$attr])*
        $vis trait $name: $crate::Dto {
            $(
                #[doc = concat!("Check if `", $key, "` metadata is set")]
                #[inline]
                fn $has(&self) -> bool {
                    $crate::Dto::has_metadata(self, $key)
                }

                #[doc = concat!("Copy with `", $key, "` metadata set")]
                #[inline]
                fn $with<V: ::std::any::Any + Send + Sync>(
                    &self,
                    value: V,
                ) -> $crate::DittoResult<Self> {
                    $crate::Dto::with_metadata(self, $key, value)
                }

                #[doc = concat!("Value of `", $key, "` metadata")]
                #[inline]
                fn $get(&self) -> $crate::DittoResult<&$crate::MetaValue> {
                    $crate::Dto::metadata(self, $key)
                }
            )*
        }

        impl<D: $crate::Dto> $name for D {}
    };
}
