//! Attribute value encoding for [`Seconds`].

use epoch_attrvalue::{AttributeValue, MarshalAttribute, UnmarshalAttribute};

use crate::error::Error;
use crate::seconds::Seconds;

impl MarshalAttribute for Seconds {
    fn marshal_attribute(&self) -> AttributeValue {
        self.as_i64().marshal_attribute()
    }
}

impl UnmarshalAttribute for Seconds {
    type Error = Error;

    fn unmarshal_attribute(&mut self, av: Option<&AttributeValue>) -> Result<(), Error> {
        let mut secs = self.as_i64();
        secs.unmarshal_attribute(av)?;
        *self = Seconds::new(secs);
        Ok(())
    }
}
