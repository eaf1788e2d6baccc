//! Range checks shared by calculator `validate()` methods, plus the
//! finiteness guard every calculator result passes through.

use std::fmt;

use serde::ser::{self, Serialize};

use crate::errors::{CalcError, CalcResult};

pub fn ensure_positive(field: &str, value: f64) -> CalcResult<()> {
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be greater than zero"));
    }
    Ok(())
}

pub fn ensure_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Cannot be negative"));
    }
    Ok(())
}

/// Inclusive range check
pub fn ensure_range(field: &str, value: f64, min: f64, max: f64) -> CalcResult<()> {
    if value < min || value > max {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Guard a computed value so NaN or infinity never reaches a report
pub fn ensure_finite(calculation: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::domain(calculation, "the result is not a finite number"))
    }
}

/// Reject a computed result that holds NaN or infinity anywhere.
///
/// `serde_json` writes non-finite floats as `null`, which is
/// indistinguishable from an absent `Option`, so the check walks the
/// value's `Serialize` impl directly.
pub fn ensure_finite_output<T: Serialize + ?Sized>(calculation: &str, output: &T) -> CalcResult<()> {
    let mut check = FiniteCheck { field: None };
    match output.serialize(&mut check) {
        Ok(()) => Ok(()),
        Err(NotFinite::Value(Some(field))) => Err(CalcError::domain(
            calculation,
            format!("{} is too large or undefined for these inputs", field),
        )),
        Err(NotFinite::Value(None)) => Err(CalcError::domain(calculation, "the result is not a finite number")),
        Err(NotFinite::Other(reason)) => Err(CalcError::serialization(reason)),
    }
}

#[derive(Debug)]
enum NotFinite {
    /// Name of the innermost struct field, if any
    Value(Option<&'static str>),
    Other(String),
}

impl fmt::Display for NotFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFinite::Value(Some(field)) => write!(f, "{} is not finite", field),
            NotFinite::Value(None) => f.write_str("value is not finite"),
            NotFinite::Other(reason) => f.write_str(reason),
        }
    }
}

impl std::error::Error for NotFinite {}

impl ser::Error for NotFinite {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        NotFinite::Other(msg.to_string())
    }
}

struct FiniteCheck {
    field: Option<&'static str>,
}

impl FiniteCheck {
    fn float(&self, value: f64) -> Result<(), NotFinite> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(NotFinite::Value(self.field))
        }
    }
}

impl<'a> ser::Serializer for &'a mut FiniteCheck {
    type Ok = ();
    type Error = NotFinite;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _: bool) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_i8(self, _: i8) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_i16(self, _: i16) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_i32(self, _: i32) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_i64(self, _: i64) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_u8(self, _: u8) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_u16(self, _: u16) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_u32(self, _: u32) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_u64(self, _: u64) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_f32(self, v: f32) -> Result<(), NotFinite> {
        self.float(f64::from(v))
    }
    fn serialize_f64(self, v: f64) -> Result<(), NotFinite> {
        self.float(v)
    }
    fn serialize_char(self, _: char) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_str(self, _: &str) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_bytes(self, _: &[u8]) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_none(self) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), NotFinite> {
        value.serialize(self)
    }
    fn serialize_unit(self) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_unit_struct(self, _: &'static str) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Result<(), NotFinite> {
        Ok(())
    }
    fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _: &'static str, value: &T) -> Result<(), NotFinite> {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Result<(), NotFinite> {
        value.serialize(self)
    }
    fn serialize_seq(self, _: Option<usize>) -> Result<Self, NotFinite> {
        Ok(self)
    }
    fn serialize_tuple(self, _: usize) -> Result<Self, NotFinite> {
        Ok(self)
    }
    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self, NotFinite> {
        Ok(self)
    }
    fn serialize_tuple_variant(self, _: &'static str, _: u32, _: &'static str, _: usize) -> Result<Self, NotFinite> {
        Ok(self)
    }
    fn serialize_map(self, _: Option<usize>) -> Result<Self, NotFinite> {
        Ok(self)
    }
    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self, NotFinite> {
        Ok(self)
    }
    fn serialize_struct_variant(self, _: &'static str, _: u32, _: &'static str, _: usize) -> Result<Self, NotFinite> {
        Ok(self)
    }
}

impl<'a> ser::SerializeSeq for &'a mut FiniteCheck {
    type Ok = ();
    type Error = NotFinite;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NotFinite> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<(), NotFinite> {
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for &'a mut FiniteCheck {
    type Ok = ();
    type Error = NotFinite;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NotFinite> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<(), NotFinite> {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for &'a mut FiniteCheck {
    type Ok = ();
    type Error = NotFinite;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NotFinite> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<(), NotFinite> {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleVariant for &'a mut FiniteCheck {
    type Ok = ();
    type Error = NotFinite;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NotFinite> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<(), NotFinite> {
        Ok(())
    }
}

impl<'a> ser::SerializeMap for &'a mut FiniteCheck {
    type Ok = ();
    type Error = NotFinite;
    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), NotFinite> {
        key.serialize(&mut **self)
    }
    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NotFinite> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<(), NotFinite> {
        Ok(())
    }
}

impl<'a> ser::SerializeStruct for &'a mut FiniteCheck {
    type Ok = ();
    type Error = NotFinite;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<(), NotFinite> {
        let outer = self.field.replace(key);
        value.serialize(&mut **self)?;
        self.field = outer;
        Ok(())
    }
    fn end(self) -> Result<(), NotFinite> {
        Ok(())
    }
}

impl<'a> ser::SerializeStructVariant for &'a mut FiniteCheck {
    type Ok = ();
    type Error = NotFinite;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<(), NotFinite> {
        let outer = self.field.replace(key);
        value.serialize(&mut **self)?;
        self.field = outer;
        Ok(())
    }
    fn end(self) -> Result<(), NotFinite> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_positive() {
        assert!(ensure_positive("x", 0.0).is_err());
        assert!(ensure_positive("x", 0.1).is_ok());
    }

    #[test]
    fn test_range_inclusive() {
        assert!(ensure_range("n", 1.0, 1.0, 10.0).is_ok());
        assert!(ensure_range("n", 10.0, 1.0, 10.0).is_ok());
        assert!(ensure_range("n", 10.5, 1.0, 10.0).is_err());
    }

    #[test]
    fn test_finite() {
        assert!(ensure_finite("calc", f64::NAN).is_err());
        assert!(ensure_finite("calc", f64::INFINITY).is_err());
        assert_eq!(ensure_finite("calc", 2.0), Ok(2.0));
    }

    #[derive(Serialize)]
    struct Sample {
        total: f64,
        parts: Vec<f64>,
        pace: Option<f64>,
    }

    #[test]
    fn test_finite_output_walks_nested_values() {
        let ok = Sample { total: 1.0, parts: vec![0.5, 0.5], pace: None };
        assert!(ensure_finite_output("sample", &ok).is_ok());

        let bad = Sample { total: 1.0, parts: vec![0.5, f64::INFINITY], pace: None };
        let err = ensure_finite_output("sample", &bad).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        assert!(err.to_string().contains("parts"), "{}", err);

        let bad = Sample { total: 1.0, parts: vec![], pace: Some(f64::NAN) };
        assert!(ensure_finite_output("sample", &bad).is_err());
    }
}
