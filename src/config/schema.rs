//! Schema description and recursive validation
//!
//! A schema is either a leaf type tag or a set of named fields, each with a
//! requirement and a child schema. Validation walks the value tree and the
//! schema tree together and stops at the first mismatch.
//!
//! The schema is closed-world: a key that the schema does not declare is an
//! error rather than something to ignore.

use indexmap::IndexMap;
use std::fmt;

use super::value::Value;
use crate::error::{ScriptError, ScriptResult};

/// Scalar and list types a leaf schema can require
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Bool,
    Int,
    Float,
    /// Integer or float
    Number,
    /// List whose every element is a string
    StrList,
}

impl TypeTag {
    /// Check whether a value has exactly this type.
    ///
    /// Booleans are their own variant, so they never satisfy `Int` or
    /// `Number`.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::String, Value::String(_)) => true,
            (Self::Bool, Value::Bool(_)) => true,
            (Self::Int, Value::Integer(_)) => true,
            (Self::Float, Value::Float(_)) => true,
            (Self::Number, Value::Integer(_) | Value::Float(_)) => true,
            (Self::StrList, Value::List(items)) => {
                items.iter().all(|item| matches!(item, Value::String(_)))
            }
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Number => write!(f, "number"),
            Self::StrList => write!(f, "list of strings"),
        }
    }
}

/// How a field's presence is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Must be present
    Required,
    /// Checked only when present
    Optional,
    /// A table of arbitrary keys whose values each match the child schema
    Keyed,
}

/// A declared field: its requirement plus the schema for its value
#[derive(Debug, Clone)]
pub struct Field {
    pub requirement: Requirement,
    pub schema: Schema,
}

impl Field {
    pub fn required(schema: impl Into<Schema>) -> Self {
        Self {
            requirement: Requirement::Required,
            schema: schema.into(),
        }
    }

    pub fn optional(schema: impl Into<Schema>) -> Self {
        Self {
            requirement: Requirement::Optional,
            schema: schema.into(),
        }
    }

    pub fn keyed(schema: impl Into<Schema>) -> Self {
        Self {
            requirement: Requirement::Keyed,
            schema: schema.into(),
        }
    }
}

/// A node in a schema tree
#[derive(Debug, Clone)]
pub enum Schema {
    Leaf(TypeTag),
    Fields(IndexMap<String, Field>),
}

impl Schema {
    /// Build a mapping schema from `(name, field)` pairs
    pub fn fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Field)>,
        K: Into<String>,
    {
        Self::Fields(
            fields
                .into_iter()
                .map(|(name, field)| (name.into(), field))
                .collect(),
        )
    }

    /// Check a value tree against this schema
    pub fn validate(&self, value: &Value) -> ScriptResult<()> {
        let mut path = Vec::new();
        validate_node(value, self, &mut path)
    }
}

impl From<TypeTag> for Schema {
    fn from(tag: TypeTag) -> Self {
        Self::Leaf(tag)
    }
}

/// Check a value tree against a schema, failing on the first violation
pub fn validate(value: &Value, schema: &Schema) -> ScriptResult<()> {
    schema.validate(value)
}

fn render_path(path: &[String]) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        path.join(".")
    }
}

fn validate_node(value: &Value, schema: &Schema, path: &mut Vec<String>) -> ScriptResult<()> {
    match schema {
        Schema::Leaf(tag) => {
            if tag.matches(value) {
                Ok(())
            } else {
                Err(ScriptError::violation(
                    render_path(path),
                    format!(
                        "read value {} that doesn't match the required type {}",
                        value, tag
                    ),
                ))
            }
        }
        Schema::Fields(fields) => validate_fields(value, fields, path),
    }
}

fn validate_fields(
    value: &Value,
    fields: &IndexMap<String, Field>,
    path: &mut Vec<String>,
) -> ScriptResult<()> {
    let table = value
        .as_table()
        .filter(|_| value.as_datetime().is_none())
        .ok_or_else(|| {
            ScriptError::violation(
                render_path(path),
                format!("expected a table, found {}", value.kind()),
            )
        })?;

    for (key, child) in table {
        let field = fields.get(key).ok_or_else(|| {
            ScriptError::violation(
                render_path(path),
                format!("unknown key `{}` found in object", key),
            )
        })?;

        path.push(key.clone());
        match field.requirement {
            Requirement::Required | Requirement::Optional => {
                validate_node(child, &field.schema, path)?;
            }
            Requirement::Keyed => {
                let entries = child
                    .as_table()
                    .filter(|_| child.as_datetime().is_none())
                    .ok_or_else(|| {
                        ScriptError::violation(
                            render_path(path),
                            format!("expected a table of entries, found {}", child.kind()),
                        )
                    })?;
                for (name, entry) in entries {
                    path.push(name.clone());
                    validate_node(entry, &field.schema, path)?;
                    path.pop();
                }
            }
        }
        path.pop();
    }

    let missing = fields.iter().find(|(key, field)| {
        field.requirement == Requirement::Required && !table.contains_key(key.as_str())
    });
    if let Some((key, _)) = missing {
        return Err(ScriptError::violation(
            render_path(path),
            format!("required key `{}` not in object", key),
        ));
    }

    tracing::trace!(path = %render_path(path), keys = table.len(), "table validated");
    Ok(())
}
