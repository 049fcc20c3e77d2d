use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{rc::Rc, sync::Arc};

/// The name of the discriminator field in the record form of an
/// action.
pub const TYPE_FIELD: &str = "type";

/// A value which can be dispatched to a reducer, identified by its
/// `type` discriminator.
///
/// Every function in this crate which accepts "an action" is bounded
/// by this trait, so any struct or enum can act as an action as long
/// as it can name its kind.
///
/// ```
/// use matchable_action::Action;
///
/// struct Increment {
///     amount: i64,
/// }
///
/// impl Action for Increment {
///     fn action_type(&self) -> &str {
///         "INCREMENT"
///     }
/// }
///
/// assert_eq!("INCREMENT", Increment { amount: 5 }.action_type());
/// ```
pub trait Action {
    /// The discriminator label identifying the kind of this action.
    fn action_type(&self) -> &str;
}

impl<T: Action + ?Sized> Action for &T {
    fn action_type(&self) -> &str {
        (**self).action_type()
    }
}

impl<T: Action + ?Sized> Action for Box<T> {
    fn action_type(&self) -> &str {
        (**self).action_type()
    }
}

impl<T: Action + ?Sized> Action for Rc<T> {
    fn action_type(&self) -> &str {
        (**self).action_type()
    }
}

impl<T: Action + ?Sized> Action for Arc<T> {
    fn action_type(&self) -> &str {
        (**self).action_type()
    }
}

/// An open-ended action record: a `type` label plus any number of
/// named payload fields.
///
/// Serializes to (and from) a flat JSON object, where the label is
/// stored under the `"type"` key alongside the payload fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainAction {
    #[serde(rename = "type")]
    action_type: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl PlainAction {
    /// Create a new [PlainAction] with the given `type` label and no
    /// payload.
    pub fn new<S: Into<String>>(action_type: S) -> Self {
        Self {
            action_type: action_type.into(),
            fields: Map::new(),
        }
    }

    /// Add a payload field to this action, replacing any previous
    /// value stored under `name`.
    ///
    /// The `"type"` key is reserved for the discriminator; attempts to
    /// set it here are logged and ignored. Use
    /// [try_with_field()](PlainAction::try_with_field()) to have them
    /// reported as an error instead.
    pub fn with_field<N: Into<String>, V: Into<Value>>(mut self, name: N, value: V) -> Self {
        let name = name.into();
        if name == TYPE_FIELD {
            log::warn!(
                "ignoring field on action {:?}: {}",
                self.action_type,
                Error::ReservedField(name)
            );
            return self;
        }

        self.fields.insert(name, value.into());
        self
    }

    /// Add a payload field to this action, failing with
    /// [Error::ReservedField] if `name` is the `"type"` key.
    pub fn try_with_field<N: Into<String>, V: Into<Value>>(
        mut self,
        name: N,
        value: V,
    ) -> Result<Self> {
        let name = name.into();
        if name == TYPE_FIELD {
            return Err(Error::ReservedField(name));
        }

        self.fields.insert(name, value.into());
        Ok(self)
    }

    /// Get the payload field stored under `name`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All payload fields on this action (excluding `type`).
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Read an action record out of a JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            _ => return Err(Error::NotAnObject),
        };

        let action_type = match fields.remove(TYPE_FIELD) {
            Some(Value::String(action_type)) => action_type,
            Some(_) => return Err(Error::TypeNotString),
            None => return Err(Error::MissingType),
        };

        Ok(Self {
            action_type,
            fields,
        })
    }

    /// Parse an action record from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Convert this action into a flat JSON object.
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.fields.len() + 1);
        object.insert(
            TYPE_FIELD.to_string(),
            Value::String(self.action_type.clone()),
        );
        for (name, value) in &self.fields {
            object.insert(name.clone(), value.clone());
        }
        Value::Object(object)
    }
}

impl Action for PlainAction {
    fn action_type(&self) -> &str {
        &self.action_type
    }
}

impl TryFrom<Value> for PlainAction {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<PlainAction> for Value {
    fn from(action: PlainAction) -> Self {
        action.to_value()
    }
}
