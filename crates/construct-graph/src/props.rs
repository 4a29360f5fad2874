/*
 * props.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Opaque, serializable property values.

use serde::Serialize;
use serde_json::Value;
use std::any::Any;

/// An opaque props value a construct carries.
///
/// Implemented for every `Serialize + 'static` type, so providers pass their
/// own props structs straight to [`set_props`](crate::set_props). Conversion
/// to JSON is deferred until synthesis.
pub trait PropsValue: Any {
    /// Convert to a JSON value, keeping the type's field order.
    fn to_json(&self) -> serde_json::Result<Value>;

    fn as_any(&self) -> &dyn Any;

    /// Rust type name of the concrete value, used in diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: Serialize + Any> PropsValue for T {
    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}
