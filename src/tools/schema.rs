//! Tool schemas advertised to the model.

use serde::{Deserialize, Serialize};

/// A tool definition in the shape the model API expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    /// JSON Schema object describing the tool's input.
    pub input_schema: serde_json::Value,
}

impl ToolSchema {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Builder for JSON Schema input objects.
///
/// ```
/// use syllabus::tools::InputSchema;
///
/// let schema = InputSchema::object()
///     .string("query", "What to search for in the course content", true)
///     .string("course_name", "Course title (partial matches work)", false)
///     .integer("lesson_number", "Specific lesson number", false)
///     .build();
/// assert_eq!(schema["required"], serde_json::json!(["query"]));
/// ```
pub struct InputSchema {
    properties: serde_json::Map<String, serde_json::Value>,
    required: Vec<String>,
}

impl InputSchema {
    /// Start an object schema.
    pub fn object() -> Self {
        Self {
            properties: serde_json::Map::new(),
            required: Vec::new(),
        }
    }

    /// An object schema without properties.
    pub fn empty() -> serde_json::Value {
        Self::object().build()
    }

    pub fn string(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.property(name, "string", description, required)
    }

    pub fn integer(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.property(name, "integer", description, required)
    }

    pub fn number(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.property(name, "number", description, required)
    }

    pub fn boolean(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.property(name, "boolean", description, required)
    }

    fn property(
        mut self,
        name: impl Into<String>,
        kind: &str,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        let name = name.into();
        self.properties.insert(
            name.clone(),
            serde_json::json!({
                "type": kind,
                "description": description.into(),
            }),
        );
        if required {
            self.required.push(name);
        }
        self
    }

    pub fn build(self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": self.properties,
            "required": self.required,
        })
    }
}
