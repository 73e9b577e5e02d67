//! Marshaling traits and the built-in implementations.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::error::Error;
use crate::value::AttributeValue;

/// A database record: attribute name to value.
pub type Item = HashMap<String, AttributeValue>;

/// A type that can encode itself as an attribute value.
pub trait MarshalAttribute {
    /// Encodes the value.
    fn marshal_attribute(&self) -> AttributeValue;
}

/// A type that can decode an attribute value into itself.
///
/// `None` stands for a missing record. Implementations leave `self` untouched
/// when the record is missing or does not carry the field they read.
pub trait UnmarshalAttribute {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decodes `av` into `self`.
    fn unmarshal_attribute(&mut self, av: Option<&AttributeValue>) -> Result<(), Self::Error>;
}

/// Encodes a value as an attribute value.
pub fn marshal<T: MarshalAttribute + ?Sized>(v: &T) -> AttributeValue {
    v.marshal_attribute()
}

/// Decodes an attribute value into a fresh `T`.
pub fn unmarshal<T: UnmarshalAttribute + Default>(av: &AttributeValue) -> Result<T, T::Error> {
    let mut v = T::default();
    v.unmarshal_attribute(Some(av))?;
    Ok(v)
}

/// Encodes a value into the named attribute of a record.
pub fn marshal_field<T: MarshalAttribute + ?Sized>(
    item: &mut Item,
    name: impl Into<String>,
    v: &T,
) {
    item.insert(name.into(), v.marshal_attribute());
}

/// Decodes the named attribute of a record into `dst`.
///
/// A record without the attribute leaves `dst` untouched.
pub fn unmarshal_field<T: UnmarshalAttribute + ?Sized>(
    item: &Item,
    name: &str,
    dst: &mut T,
) -> Result<(), T::Error> {
    dst.unmarshal_attribute(item.get(name))
}

impl MarshalAttribute for i64 {
    fn marshal_attribute(&self) -> AttributeValue {
        AttributeValue::number(self.to_string())
    }
}

impl UnmarshalAttribute for i64 {
    type Error = Error;

    fn unmarshal_attribute(&mut self, av: Option<&AttributeValue>) -> Result<(), Error> {
        let Some(n) = av.and_then(AttributeValue::as_n) else {
            return Ok(());
        };
        *self = n.parse().map_err(|e| Error::number_format(n, e))?;
        Ok(())
    }
}

impl MarshalAttribute for str {
    fn marshal_attribute(&self) -> AttributeValue {
        AttributeValue::string(self)
    }
}

impl MarshalAttribute for String {
    fn marshal_attribute(&self) -> AttributeValue {
        AttributeValue::string(self.as_str())
    }
}

impl UnmarshalAttribute for String {
    type Error = Infallible;

    fn unmarshal_attribute(&mut self, av: Option<&AttributeValue>) -> Result<(), Infallible> {
        if let Some(s) = av.and_then(AttributeValue::as_s) {
            *self = s.to_string();
        }
        Ok(())
    }
}

impl MarshalAttribute for bool {
    fn marshal_attribute(&self) -> AttributeValue {
        AttributeValue::bool(*self)
    }
}

impl UnmarshalAttribute for bool {
    type Error = Infallible;

    fn unmarshal_attribute(&mut self, av: Option<&AttributeValue>) -> Result<(), Infallible> {
        if let Some(v) = av.and_then(|av| av.bool) {
            *self = v;
        }
        Ok(())
    }
}

impl<T: MarshalAttribute> MarshalAttribute for Option<T> {
    fn marshal_attribute(&self) -> AttributeValue {
        match self {
            Some(v) => v.marshal_attribute(),
            None => AttributeValue::null(),
        }
    }
}

impl<T: UnmarshalAttribute + Default> UnmarshalAttribute for Option<T> {
    type Error = T::Error;

    fn unmarshal_attribute(&mut self, av: Option<&AttributeValue>) -> Result<(), T::Error> {
        let Some(av) = av else {
            return Ok(());
        };
        if av.is_null() {
            *self = None;
            return Ok(());
        }
        let mut inner = self.take().unwrap_or_default();
        let res = inner.unmarshal_attribute(Some(av));
        *self = Some(inner);
        res
    }
}
