//! Placeholder resolution over rendering contexts
//!
//! A rendering context is anything implementing [`Placeholders`]: it receives
//! the already-split segments of a `{{dotted.path}}` and returns the value at
//! that path, or `None` when any segment is missing.
//!
//! Typed records implement the trait through the [`impl_placeholders!`]
//! macro, which maps each named field to the next path segment. Scalars are
//! leaves: they only resolve for an empty remaining path. `serde_json::Value`
//! implements it too, for ad-hoc contexts.
//!
//! [`impl_placeholders!`]: crate::impl_placeholders

use crate::core::field::FieldValue;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A context that can resolve dotted placeholder paths
pub trait Placeholders {
    /// Resolve the given path segments to a value
    ///
    /// An empty `path` asks for the value itself. Returns `None` when the
    /// path does not exist in this context.
    fn resolve(&self, path: &[&str]) -> Option<FieldValue>;
}

impl<T: Placeholders + ?Sized> Placeholders for &T {
    fn resolve(&self, path: &[&str]) -> Option<FieldValue> {
        (**self).resolve(path)
    }
}

impl<T: Placeholders> Placeholders for Option<T> {
    fn resolve(&self, path: &[&str]) -> Option<FieldValue> {
        self.as_ref()?.resolve(path)
    }
}

impl Placeholders for serde_json::Value {
    fn resolve(&self, path: &[&str]) -> Option<FieldValue> {
        let mut current = self;
        for segment in path {
            current = current.as_object()?.get(*segment)?;
        }
        Some(FieldValue::from_json(current))
    }
}

macro_rules! impl_leaf {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl Placeholders for $type {
                fn resolve(&self, path: &[&str]) -> Option<FieldValue> {
                    path.is_empty().then(|| FieldValue::from(self.clone()))
                }
            }
        )*
    };
}

impl_leaf!(String, i32, i64, u32, u64, f64, bool, Uuid, NaiveDate, DateTime<Utc>);

impl Placeholders for str {
    fn resolve(&self, path: &[&str]) -> Option<FieldValue> {
        path.is_empty().then(|| FieldValue::from(self))
    }
}
