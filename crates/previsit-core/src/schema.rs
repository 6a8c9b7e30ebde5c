//! The clinical summary schema contract.
//!
//! The output shape is declared once, as data, in [`summary_schema`]. The
//! generation backends receive a rendering of it as a machine-enforced
//! output constraint, and [`SchemaNode::validate`] re-checks every response
//! locally against the same declaration.

use std::sync::LazyLock;

use serde_json::{Map, Value, json};

use crate::error::{SchemaViolation, ViolationKind};

/// Field names of the generated summary.
pub mod field {
    pub const SUMMARY: &str = "summary";
    pub const SENTIMENT: &str = "sentiment";
    pub const KEYWORDS: &str = "keywords";
    pub const DOCTOR_QUESTIONS: &str = "doctorQuestions";
    pub const CHART_DATA: &str = "chartData";

    pub const PAIN: &str = "pain";
    pub const BLEEDING: &str = "bleeding";
    pub const URGENCY: &str = "urgency";
    pub const STRESS: &str = "stress";
    pub const SEVERITY: &str = "severity";
}

/// A node in the output shape. Every object property is required.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    String,
    Number,
    Array(Box<SchemaNode>),
    Object(Vec<Property>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: &'static str,
    pub node: SchemaNode,
}

fn property(name: &'static str, node: SchemaNode) -> Property {
    Property { name, node }
}

/// The shape every generated clinical summary must have.
pub fn summary_schema() -> &'static SchemaNode {
    static SCHEMA: LazyLock<SchemaNode> = LazyLock::new(|| {
        let string_list = || SchemaNode::Array(Box::new(SchemaNode::String));

        SchemaNode::Object(vec![
            property(field::SUMMARY, SchemaNode::String),
            property(field::SENTIMENT, SchemaNode::String),
            property(field::KEYWORDS, string_list()),
            property(field::DOCTOR_QUESTIONS, string_list()),
            property(
                field::CHART_DATA,
                SchemaNode::Object(vec![
                    property(field::PAIN, SchemaNode::Number),
                    property(field::BLEEDING, SchemaNode::Number),
                    property(field::URGENCY, SchemaNode::Number),
                    property(field::STRESS, SchemaNode::Number),
                    property(field::SEVERITY, SchemaNode::Number),
                ]),
            ),
        ])
    });
    &SCHEMA
}

#[derive(Clone, Copy)]
enum Dialect {
    JsonSchema,
    Gemini,
}

impl SchemaNode {
    /// JSON Schema rendering, used as a tool input schema.
    pub fn to_json_schema(&self) -> Value {
        self.render(Dialect::JsonSchema)
    }

    /// Gemini `responseSchema` rendering (OpenAPI subset, upper-case types).
    pub fn to_gemini_schema(&self) -> Value {
        self.render(Dialect::Gemini)
    }

    fn render(&self, dialect: Dialect) -> Value {
        let type_name = |name: &str| match dialect {
            Dialect::JsonSchema => name.to_string(),
            Dialect::Gemini => name.to_uppercase(),
        };

        match self {
            SchemaNode::String => json!({ "type": type_name("string") }),
            SchemaNode::Number => json!({ "type": type_name("number") }),
            SchemaNode::Array(items) => json!({
                "type": type_name("array"),
                "items": items.render(dialect),
            }),
            SchemaNode::Object(properties) => {
                let rendered: Map<String, Value> = properties
                    .iter()
                    .map(|p| (p.name.to_string(), p.node.render(dialect)))
                    .collect();
                let names: Vec<&str> = properties.iter().map(|p| p.name).collect();

                let mut object = json!({
                    "type": type_name("object"),
                    "properties": rendered,
                    "required": names,
                });
                // `object` is always a map here.
                if let Some(map) = object.as_object_mut() {
                    match dialect {
                        Dialect::JsonSchema => {
                            map.insert("additionalProperties".to_string(), Value::Bool(false));
                        }
                        Dialect::Gemini => {
                            map.insert("propertyOrdering".to_string(), json!(names));
                        }
                    }
                }
                object
            }
        }
    }

    /// Check `value` against this shape, collecting every violation.
    pub fn validate(&self, value: &Value) -> Result<(), Vec<SchemaViolation>> {
        let mut violations = Vec::new();
        self.check(value, "", &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    fn check(&self, value: &Value, path: &str, violations: &mut Vec<SchemaViolation>) {
        let wrong_type = |expected: &'static str| SchemaViolation {
            path: display_path(path),
            kind: ViolationKind::WrongType {
                expected,
                found: json_type(value),
            },
        };

        match self {
            SchemaNode::String => {
                if !value.is_string() {
                    violations.push(wrong_type("string"));
                }
            }
            SchemaNode::Number => {
                if !value.is_number() {
                    violations.push(wrong_type("number"));
                }
            }
            SchemaNode::Array(items) => match value.as_array() {
                Some(elements) => {
                    for (index, element) in elements.iter().enumerate() {
                        items.check(element, &format!("{path}[{index}]"), violations);
                    }
                }
                None => violations.push(wrong_type("array")),
            },
            SchemaNode::Object(properties) => match value.as_object() {
                Some(object) => {
                    for p in properties {
                        let child = child_path(path, p.name);
                        match object.get(p.name) {
                            Some(v) => p.node.check(v, &child, violations),
                            None => violations.push(SchemaViolation {
                                path: child,
                                kind: ViolationKind::MissingField,
                            }),
                        }
                    }
                    // Mirrors `additionalProperties: false` in the JSON Schema rendering.
                    for key in object.keys() {
                        if !properties.iter().any(|p| p.name == key.as_str()) {
                            violations.push(SchemaViolation {
                                path: child_path(path, key),
                                kind: ViolationKind::UnexpectedField,
                            });
                        }
                    }
                }
                None => violations.push(wrong_type("object")),
            },
        }
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "$".to_string()
    } else {
        path.to_string()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
