//! Collection destinations
//!
//! `Vec<T>` appends one coerced element per assignment. Fixed-size arrays,
//! maps and indirection destinations are rejected.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::slot::{Slot, reject};
use crate::jsonpath::error::JsonPathResult;
use crate::value::{DynamicValue, ValueKind};

impl<T: Slot + Default> Slot for Vec<T> {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        let src = src.resolve();
        if src.kind() == ValueKind::Sequence {
            return reject(src, self);
        }
        let mut element = T::default();
        element.assign(src)?;
        self.push(element);
        Ok(())
    }
}

impl<T, const N: usize> Slot for [T; N] {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        reject(src, self)
    }
}

impl<T> Slot for Option<T> {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        reject(src, self)
    }
}

impl<T> Slot for Box<T> {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        reject(src, self)
    }
}

impl Slot for Map<String, Value> {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        reject(src, self)
    }
}

impl<T, S> Slot for HashMap<String, T, S> {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        reject(src, self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::value::AsDynamic;

    #[test]
    fn vec_appends_without_reset() {
        let mut out: Vec<i64> = vec![7];
        out.assign(json!(1).as_dynamic()).expect("append 1");
        out.assign(json!(2).as_dynamic()).expect("append 2");
        assert_eq!(out, vec![7, 1, 2]);
    }

    #[test]
    fn vec_rejects_sequences_and_bad_elements() {
        let mut out: Vec<i64> = Vec::new();
        let err = out
            .assign(json!([1, 2]).as_dynamic())
            .expect_err("sequence source is unsupported");
        assert!(err.is_type());

        assert!(out.assign(json!("x").as_dynamic()).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn unsupported_destinations() {
        let src = json!(1);
        let mut array = [0i32; 2];
        assert!(array.assign(src.as_dynamic()).is_err());

        let mut opt: Option<i32> = None;
        assert!(opt.assign(src.as_dynamic()).is_err());

        let mut map = Map::new();
        assert!(map.assign(json!({"a": 1}).as_dynamic()).is_err());

        let mut hash: HashMap<String, i32> = HashMap::new();
        assert!(hash.assign(json!({"a": 1}).as_dynamic()).is_err());
    }
}
