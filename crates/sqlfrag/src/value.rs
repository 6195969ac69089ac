//! Bind parameter values.
//!
//! [`Value`] is the closed set of types a fragment can carry as a bound
//! parameter. Anything outside that set has to be converted explicitly at the
//! boundary (`From` for lossless conversions, `TryFrom` for unsigned integers
//! that may not fit into `i64`).
//!
//! `Value` implements [`ToSql`], so a rendered [`Statement`](crate::Statement)
//! can be handed straight to `tokio-postgres`. Integers and floats are narrowed
//! to the parameter type Postgres inferred for the placeholder; a value that
//! does not fit is reported as a [`SqlError::Conversion`].

use crate::error::{SqlError, SqlResult};
use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use tokio_postgres::types::{IsNull, ToSql, Type};

/// A single bound parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Timestamp without time zone.
    Timestamp(NaiveDateTime),
    /// Timestamp with time zone, normalized to UTC.
    TimestampTz(DateTime<Utc>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the variant, used in error messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::Timestamp(_) => "timestamp",
            Value::TimestampTz(_) => "timestamptz",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "'{}'", v.replace('\'', "''")),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Value::Date(v) => write!(f, "'{v}'"),
            Value::Time(v) => write!(f, "'{v}'"),
            Value::Timestamp(v) => write!(f, "'{v}'"),
            Value::TimestampTz(v) => write!(f, "'{}'", v.to_rfc3339()),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<u64> for Value {
    type Error = SqlError;

    fn try_from(v: u64) -> SqlResult<Self> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| SqlError::validation(format!("{v} does not fit into a signed 64-bit parameter")))
    }
}

impl TryFrom<usize> for Value {
    type Error = SqlError;

    fn try_from(v: usize) -> SqlResult<Self> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| SqlError::validation(format!("{v} does not fit into a signed 64-bit parameter")))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Time(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::TimestampTz(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => encode_as(v, self, ty, out),
            Value::Int(v) => encode_int(*v, ty, out),
            Value::Float(v) => encode_float(*v, ty, out),
            Value::Text(v) => encode_as(v, self, ty, out),
            Value::Bytes(v) => encode_as(v, self, ty, out),
            Value::Date(v) => encode_as(v, self, ty, out),
            Value::Time(v) => encode_as(v, self, ty, out),
            Value::Timestamp(v) => encode_as(v, self, ty, out),
            Value::TimestampTz(v) => encode_as(v, self, ty, out),
        }
    }

    // Per-variant checks happen in `to_sql`; NULL is valid for every type.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

fn mismatch(value: &Value, ty: &Type) -> Box<dyn Error + Sync + Send> {
    Box::new(SqlError::conversion(value.kind(), ty.name()))
}

fn encode_as<T: ToSql>(
    inner: &T,
    value: &Value,
    ty: &Type,
    out: &mut BytesMut,
) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
    if !T::accepts(ty) {
        return Err(mismatch(value, ty));
    }
    inner.to_sql(ty, out)
}

fn encode_int(
    v: i64,
    ty: &Type,
    out: &mut BytesMut,
) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
    let out_of_range = || -> Box<dyn Error + Sync + Send> {
        Box::new(SqlError::conversion(v.to_string(), ty.name()))
    };
    match *ty {
        Type::INT2 => i16::try_from(v).map_err(|_| out_of_range())?.to_sql(ty, out),
        Type::INT4 => i32::try_from(v).map_err(|_| out_of_range())?.to_sql(ty, out),
        Type::INT8 => v.to_sql(ty, out),
        Type::OID => u32::try_from(v).map_err(|_| out_of_range())?.to_sql(ty, out),
        // Integer literals compared against float columns; must convert exactly.
        Type::FLOAT4 => {
            let f = v as f32;
            if f as i128 != i128::from(v) {
                return Err(out_of_range());
            }
            f.to_sql(ty, out)
        }
        Type::FLOAT8 => {
            let f = v as f64;
            if f as i128 != i128::from(v) {
                return Err(out_of_range());
            }
            f.to_sql(ty, out)
        }
        _ => Err(mismatch(&Value::Int(v), ty)),
    }
}

fn encode_float(
    v: f64,
    ty: &Type,
    out: &mut BytesMut,
) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
    match *ty {
        Type::FLOAT4 => (v as f32).to_sql(ty, out),
        Type::FLOAT8 => v.to_sql(ty, out),
        _ => Err(mismatch(&Value::Float(v), ty)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_widen_to_int() {
        assert_eq!(Value::from(7_i8), Value::Int(7));
        assert_eq!(Value::from(7_u32), Value::Int(7));
        assert_eq!(Value::from(-7_i64), Value::Int(-7));
    }

    #[test]
    fn u64_out_of_range_is_rejected() {
        assert!(Value::try_from(u64::MAX).is_err());
        assert_eq!(Value::try_from(5_u64).unwrap(), Value::Int(5));
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".into()));
    }

    #[test]
    fn int_narrows_to_int4() {
        let mut buf = BytesMut::new();
        let res = Value::Int(42).to_sql_checked(&Type::INT4, &mut buf).unwrap();
        assert!(matches!(res, IsNull::No));
        assert_eq!(&buf[..], &42_i32.to_be_bytes());
    }

    #[test]
    fn int_overflowing_int2_is_an_error() {
        let mut buf = BytesMut::new();
        assert!(Value::Int(70_000).to_sql_checked(&Type::INT2, &mut buf).is_err());
    }

    #[test]
    fn int_into_float_column_must_be_exact() {
        let mut buf = BytesMut::new();
        let res = Value::Int(1 << 24).to_sql_checked(&Type::FLOAT4, &mut buf).unwrap();
        assert!(matches!(res, IsNull::No));
        assert_eq!(&buf[..], &16_777_216_f32.to_be_bytes());

        let mut buf = BytesMut::new();
        let err = Value::Int((1 << 24) + 1)
            .to_sql_checked(&Type::FLOAT4, &mut buf)
            .err().expect("expected a type mismatch error");
        assert!(err.to_string().contains("float4"));

        let mut buf = BytesMut::new();
        assert!(Value::Int(1 << 53).to_sql_checked(&Type::FLOAT8, &mut buf).is_ok());
        let mut buf = BytesMut::new();
        assert!(Value::Int((1 << 53) + 1).to_sql_checked(&Type::FLOAT8, &mut buf).is_err());
        let mut buf = BytesMut::new();
        assert!(Value::Int(i64::MAX).to_sql_checked(&Type::FLOAT8, &mut buf).is_err());
    }

    #[test]
    fn text_into_int_column_is_an_error() {
        let mut buf = BytesMut::new();
        assert!(Value::Text("x".into()).to_sql_checked(&Type::INT8, &mut buf).is_err());
    }

    #[test]
    fn null_is_accepted_for_any_type() {
        let mut buf = BytesMut::new();
        let res = Value::Null.to_sql_checked(&Type::DATE, &mut buf).unwrap();
        assert!(matches!(res, IsNull::Yes));
        assert!(buf.is_empty());
    }

    #[test]
    fn display_escapes_quotes() {
        assert_eq!(Value::from("it's").to_string(), "'it''s'");
        assert_eq!(Value::Null.to_string(), "NULL");
    }

    #[test]
    fn serde_is_tagged() {
        let json = serde_json::to_string(&Value::Int(3)).unwrap();
        assert_eq!(json, r#"{"type":"int","value":3}"#);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Int(3));
    }
}
