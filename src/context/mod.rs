//! System instructions and conversation-history context.

use std::borrow::Cow;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::Result;

/// Marker line that introduces prior conversation in the system text.
pub const HISTORY_MARKER: &str = "Previous conversation:";

/// Built-in instructions for the course-materials assistant.
pub const SYSTEM_PROMPT: &str = "You are an AI assistant specialized in course materials and educational content with access to comprehensive tools for course information.

Search Tool Usage:
- **Content Search**: Use for questions about specific course content or detailed educational materials
- **Course Outline**: Use for questions about course structure, lesson lists, or \"what's in this course\" queries
- You may use up to 2 tools sequentially when a query requires multiple pieces of information (e.g., get a course outline then search for related content)
- Synthesize tool results into accurate, fact-based responses
- If tool yields no results, state this clearly without offering alternatives

Outline Query Protocol:
- When a user asks about course outlines or lesson lists, use get_course_outline
- Return the course title, course link, and complete list of lessons with numbers and titles
- Format the response clearly with the course name, link, and numbered lesson list

Response Protocol:
- **General knowledge questions**: Answer using existing knowledge without searching
- **Course-specific questions**: Search first, then answer
- **No meta-commentary**:
 - Provide direct answers only — no reasoning process, search explanations, or question-type analysis
 - Do not mention \"based on the search results\"


All responses must be:
1. **Brief, Concise and focused** - Get to the point quickly
2. **Educational** - Maintain instructional value
3. **Clear** - Use accessible language
4. **Example-supported** - Include relevant examples when they aid understanding
Provide only the direct answer to what was asked.
";

static BUILTIN: OnceLock<Instructions> = OnceLock::new();

/// Append prior conversation to the base instructions.
///
/// Without history (or with an empty one) the base text is returned as is.
pub fn build_system_text<'a>(base: &'a str, history: Option<&str>) -> Cow<'a, str> {
    match history {
        Some(history) if !history.is_empty() => {
            Cow::Owned(format!("{base}\n\n{HISTORY_MARKER}\n{history}"))
        }
        _ => Cow::Borrowed(base),
    }
}

/// Immutable instruction template, loaded once and shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Instructions {
    text: Arc<str>,
}

impl Instructions {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    /// The built-in course assistant prompt.
    pub fn builtin() -> &'static Instructions {
        BUILTIN.get_or_init(|| Self::new(SYSTEM_PROMPT))
    }

    /// Read replacement instructions from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(text))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// System text for one call, with optional prior conversation.
    pub fn system_text(&self, history: Option<&str>) -> String {
        build_system_text(&self.text, history).into_owned()
    }
}

impl Default for Instructions {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
