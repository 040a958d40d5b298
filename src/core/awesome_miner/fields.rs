//! Typed field access over decoded Awesome Miner JSON.
//!
//! Every accessor names the entity being built so a missing or mistyped
//! key surfaces as [`RigmonError::MalformedResponse`] with both the entity
//! and the field.

use serde_json::{Map, Value};

use crate::error::{RigmonError, Result};

/// Borrowed view over one JSON object while an entity is built from it
pub(crate) struct Fields<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wrap `value`, failing if it is not a JSON object
    pub fn of(entity: &'static str, value: &'a Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| RigmonError::malformed(entity, "<object>"))?;
        Ok(Self { entity, map })
    }

    fn malformed(&self, field: &'static str) -> RigmonError {
        RigmonError::malformed(self.entity, field)
    }

    /// Raw value of a required key
    pub fn value(&self, field: &'static str) -> Result<&'a Value> {
        self.map.get(field).ok_or_else(|| self.malformed(field))
    }

    /// Required JSON array
    pub fn array(&self, field: &'static str) -> Result<&'a Vec<Value>> {
        self.value(field)?
            .as_array()
            .ok_or_else(|| self.malformed(field))
    }

    /// Required display text. Numbers and booleans are rendered as their JSON text.
    pub fn string(&self, field: &'static str) -> Result<String> {
        match self.value(field)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(self.malformed(field)),
        }
    }

    /// Required floating point value, accepting numeric strings
    pub fn float(&self, field: &'static str) -> Result<f64> {
        match self.value(field)? {
            Value::Number(n) => n.as_f64().ok_or_else(|| self.malformed(field)),
            Value::String(s) => s.trim().parse().map_err(|_| self.malformed(field)),
            _ => Err(self.malformed(field)),
        }
    }

    /// Required integral value. `4007` and `4007.0` are accepted, `4007.5` is not.
    pub fn integer(&self, field: &'static str) -> Result<i64> {
        match self.value(field)? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(i);
                }
                // Integers above i64::MAX and out-of-range floats never saturate
                if n.is_u64() {
                    return Err(self.malformed(field));
                }
                match n.as_f64() {
                    Some(f)
                        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 =>
                    {
                        Ok(f as i64)
                    }
                    _ => Err(self.malformed(field)),
                }
            }
            Value::String(s) => s.trim().parse().map_err(|_| self.malformed(field)),
            _ => Err(self.malformed(field)),
        }
    }
}
