//! Applying a compiled `Path` to values and raw documents

use super::core::Path;
use crate::coercion::Slot;
use crate::config::PathOptions;
use crate::jsonpath::core_evaluator::PathEvaluator;
use crate::jsonpath::error::JsonPathResult;
use crate::value::AsDynamic;

impl Path {
    /// Apply the path to `value` and write matches into `dest`
    ///
    /// A selector that finds no field leaves `dest` untouched and succeeds.
    /// Fan-out segments (`[*]`, `..name`) may write many times; use a `Vec`
    /// destination to collect every match.
    ///
    /// # Errors
    ///
    /// Returns a `Match` error when a segment cannot be applied to the value
    /// it meets and a `Type` error when a match does not fit `dest`.
    #[inline]
    pub fn get<V, D>(&self, value: &V, dest: &mut D) -> JsonPathResult<()>
    where
        V: AsDynamic + ?Sized,
        D: Slot + ?Sized,
    {
        self.get_with(value, dest, &PathOptions::default())
    }

    /// Like [`Path::get`], with explicit evaluation options
    ///
    /// # Errors
    ///
    /// See [`Path::get`]. With [`PathOptions::strict_missing`] a missing field
    /// is a `Match` error, and recursive descent deeper than
    /// [`PathOptions::max_depth`] is a `DepthLimit` error.
    pub fn get_with<V, D>(&self, value: &V, dest: &mut D, options: &PathOptions) -> JsonPathResult<()>
    where
        V: AsDynamic + ?Sized,
        D: Slot + ?Sized,
    {
        log::trace!("applying path '{}'", self.original());
        PathEvaluator::new(options).get(self.root(), value.as_dynamic(), dest)
    }

    /// Decode `data` as JSON and apply the path to it
    ///
    /// # Errors
    ///
    /// Returns an `InvalidJson` error when `data` is not a JSON document,
    /// otherwise see [`Path::get`].
    #[inline]
    pub fn unmarshal<D: Slot + ?Sized>(&self, data: &[u8], dest: &mut D) -> JsonPathResult<()> {
        self.unmarshal_with(data, dest, &PathOptions::default())
    }

    /// Like [`Path::unmarshal`], with explicit evaluation options
    ///
    /// # Errors
    ///
    /// See [`Path::unmarshal`] and [`Path::get_with`].
    pub fn unmarshal_with<D: Slot + ?Sized>(
        &self,
        data: &[u8],
        dest: &mut D,
        options: &PathOptions,
    ) -> JsonPathResult<()> {
        let document: serde_json::Value = serde_json::from_slice(data)?;
        self.get_with(&document, dest, options)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::jsonpath::error::ErrorKind;

    #[test]
    fn get_assigns_terminal_match() {
        let doc = json!({"a": {"b": 10, "c": true}, "b": "text"});
        let mut n = 0i64;
        Path::new("a.b").expect("valid").get(&doc, &mut n).expect("match");
        assert_eq!(n, 10);

        let mut flag = false;
        Path::new("a.c").expect("valid").get(&doc, &mut flag).expect("match");
        assert!(flag);
    }

    #[test]
    fn missing_field_leaves_destination() {
        let doc = json!({"a": {"b": 10}});
        let path = Path::new("a.zzz").expect("valid");

        let mut n = 7i64;
        path.get(&doc, &mut n).expect("silent miss");
        assert_eq!(n, 7);

        let strict = PathOptions::new().strict_missing(true);
        let err = path.get_with(&doc, &mut n, &strict).expect_err("strict miss");
        assert!(err.is_match());
    }

    #[test]
    fn unmarshal_decodes_first() {
        let path = Path::new("a[*].b").expect("valid");
        let mut values: Vec<i64> = Vec::new();
        path.unmarshal(br#"{"a":[{"b":1},{"b":2},{"b":3}]}"#, &mut values)
            .expect("match");
        assert_eq!(values, vec![1, 2, 3]);

        let err = path.unmarshal(b"{not json", &mut values).expect_err("bad json");
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
    }
}
