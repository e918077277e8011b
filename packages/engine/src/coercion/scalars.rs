//! Scalar destinations: integers, floats, strings, booleans and `Value`

use serde_json::{Number, Value};

use super::slot::{Slot, reject};
use crate::jsonpath::error::JsonPathResult;
use crate::value::DynamicValue;

/// Truncate a JSON number toward zero as a signed 64-bit integer
#[inline]
fn number_as_i64(number: &Number) -> i64 {
    match number.as_i64() {
        Some(n) => n,
        None => match number.as_u64() {
            Some(n) => n as i64,
            None => number.as_f64().map_or(0, |f| f as i64),
        },
    }
}

/// Truncate a JSON number toward zero as an unsigned 64-bit integer
#[inline]
fn number_as_u64(number: &Number) -> u64 {
    match number.as_u64() {
        Some(n) => n,
        None => match number.as_i64() {
            Some(n) => n as u64,
            // Truncate as signed first so negative fractions wrap like integers.
            None => number.as_f64().map_or(0, |f| f as i64 as u64),
        },
    }
}

macro_rules! signed_slot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Slot for $ty {
                fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
                    match src.resolve() {
                        DynamicValue::Json(Value::Number(number)) => {
                            // Narrowing wraps like native integer truncation.
                            *self = number_as_i64(number) as $ty;
                            Ok(())
                        }
                        other => reject(other, self),
                    }
                }
            }
        )*
    };
}

macro_rules! unsigned_slot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Slot for $ty {
                fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
                    match src.resolve() {
                        DynamicValue::Json(Value::Number(number)) => {
                            *self = number_as_u64(number) as $ty;
                            Ok(())
                        }
                        other => reject(other, self),
                    }
                }
            }
        )*
    };
}

signed_slot!(i8, i16, i32, i64, isize);
unsigned_slot!(u8, u16, u32, u64, usize);

impl Slot for f64 {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        match src.resolve() {
            DynamicValue::Json(Value::Number(number)) => {
                *self = number.as_f64().unwrap_or_default();
                Ok(())
            }
            other => reject(other, self),
        }
    }
}

impl Slot for f32 {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        match src.resolve() {
            DynamicValue::Json(Value::Number(number)) => {
                *self = number.as_f64().unwrap_or_default() as f32;
                Ok(())
            }
            other => reject(other, self),
        }
    }
}

impl Slot for String {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        match src.resolve() {
            DynamicValue::Json(Value::String(s)) => {
                self.clone_from(s);
                Ok(())
            }
            other => reject(other, self),
        }
    }
}

impl Slot for bool {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        match src.resolve() {
            DynamicValue::Json(Value::Bool(b)) => {
                *self = *b;
                Ok(())
            }
            other => reject(other, self),
        }
    }
}

/// Any-typed destination: stores the source as-is.
impl Slot for Value {
    fn assign(&mut self, src: DynamicValue<'_>) -> JsonPathResult<()> {
        *self = src.to_json();
        Ok(())
    }

    fn slot_kind(&self) -> &'static str {
        "any"
    }
}
