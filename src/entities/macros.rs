//! Macros for reducing boilerplate when defining rendering contexts

/// Implement [`Placeholders`](crate::core::placeholders::Placeholders) for a
/// struct by listing the fields exposed to templates
///
/// Each listed field becomes one path segment; the rest of the path is
/// resolved by the field's own `Placeholders` implementation. Fields that are
/// not listed are invisible to templates.
///
/// # Example
///
/// ```rust,ignore
/// use leasedoc::prelude::*;
///
/// struct Unit {
///     number: String,
///     floor: i32,
/// }
///
/// impl_placeholders!(Unit { number, floor });
///
/// // {{unit.number}} resolves through `number`
/// ```
#[macro_export]
macro_rules! impl_placeholders {
    ( $type:ty { $( $field:ident ),* $(,)? } ) => {
        impl $crate::core::placeholders::Placeholders for $type {
            fn resolve(&self, path: &[&str]) -> Option<$crate::core::field::FieldValue> {
                let (head, rest) = path.split_first()?;
                $(
                    if *head == stringify!($field) {
                        return $crate::core::placeholders::Placeholders::resolve(&self.$field, rest);
                    }
                )*
                let _ = (head, rest);
                None
            }
        }
    };
}
