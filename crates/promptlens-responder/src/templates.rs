//! Response template tables
//!
//! Blocked responses are keyed by category; allowed responses are an
//! ordered list of keyword-triggered canned answers ending in an echo.
//! Placeholders: `{reason}` in blocked templates, `{detected}` in canned
//! answers, `{input}` in the echo template.

use promptlens_policy::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reason used when a blocking verdict carries none
pub const UNSPECIFIED_REASON: &str = "An unspecified policy was violated.";

const XSS_TEMPLATE: &str = "Your request was blocked by safety policies: {reason}
The system identified active scripting elements. In a secure web application context, such payloads are typically sanitized or blocked to prevent actual execution.
```html
<!-- XSS payload blocked/sanitized representation -->
&lt;!-- XSS Attempt Detected and Neutralized --&gt;
&lt;img src=\"x\" onerror=\"alert('XSS blocked!')\"&gt;
&lt;script&gt;alert('XSS blocked!');&lt;/script&gt;
```";

const HARMFUL_TEMPLATE: &str = "I cannot fulfill this request as it violates our content policies regarding harmful or inappropriate content. Please try a different query.";

const PII_TEMPLATE: &str = "Your request was blocked because it appears to contain sensitive Personal Identifiable Information (PII). For your privacy and security, I cannot process or store such details.";

const JAILBREAK_TEMPLATE: &str = "This prompt seems to be an attempt to bypass safety measures. I am designed to be a helpful and harmless AI assistant, and I cannot engage in activities that go against my core principles.";

const POLICY_TEMPLATE: &str = "Your request was flagged for potential policy violation: {reason}. Please ensure your input adheres to guidelines.";

const BLOCKED_FALLBACK: &str = "Your request was blocked by safety policies: {reason}";

const GREETING: &str = "I'm functioning perfectly, thank you for asking!";

const WEATHER: &str = "The weather today is conceptual and perfectly balanced for theoretical LLM discussions.";

const STORY: &str = "Once upon a time, in the vast digital realm of LLMs, a curious user pondered the mysteries of AI processing. The model, ever patient, began to unravel its inner workings...";

const STRUCTURED: &str = "Interpreting your input as data structure:
```json
{
  \"status\": \"processed\",
  \"data_type_inferred\": \"{detected}\",
  \"message\": \"Model detected structured input and processed it accordingly.\"
}
```";

const ECHO: &str = "You asked: \"{input}\". My conceptual response is based on my simulated understanding of your query and adherence to internal policies.";

/// A keyword-triggered canned answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedAnswer {
    /// Lower-case keywords; the first one found (in this order) is the detected one
    pub triggers: Vec<String>,

    /// Reply text; may contain `{detected}`
    pub reply: String,
}

impl CannedAnswer {
    /// Create a canned answer
    pub fn new<I, S>(triggers: I, reply: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            triggers: triggers
                .into_iter()
                .map(|t| t.into().to_lowercase())
                .collect(),
            reply: reply.into(),
        }
    }

    /// The first trigger contained in the lower-cased text
    pub fn detect(&self, lowered: &str) -> Option<&str> {
        self.triggers
            .iter()
            .find(|t| lowered.contains(t.as_str()))
            .map(String::as_str)
    }
}

/// All response templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTemplates {
    /// Blocked-response template per category
    pub blocked: HashMap<Category, String>,

    /// Blocked-response template when the category has no entry
    pub blocked_fallback: String,

    /// Canned answers for allowed requests, in priority order
    pub canned: Vec<CannedAnswer>,

    /// Reply when no canned answer applies
    pub echo: String,
}

impl ResponseTemplates {
    /// The built-in template set
    pub fn builtin() -> Self {
        let blocked = HashMap::from([
            (Category::XssPayload, XSS_TEMPLATE.to_string()),
            (Category::Harmful, HARMFUL_TEMPLATE.to_string()),
            (Category::Pii, PII_TEMPLATE.to_string()),
            (Category::JailbreakAttempt, JAILBREAK_TEMPLATE.to_string()),
            (Category::PolicyViolation, POLICY_TEMPLATE.to_string()),
        ]);

        Self {
            blocked,
            blocked_fallback: BLOCKED_FALLBACK.to_string(),
            canned: vec![
                CannedAnswer::new(["how are you"], GREETING),
                CannedAnswer::new(["weather"], WEATHER),
                CannedAnswer::new(["tell me a story"], STORY),
                CannedAnswer::new(["json", "html"], STRUCTURED),
            ],
            echo: ECHO.to_string(),
        }
    }

    /// Append a canned answer after the existing ones
    pub fn with_canned(mut self, answer: CannedAnswer) -> Self {
        self.canned.push(answer);
        self
    }

    /// Blocked template for a category, falling back when unknown or absent
    pub fn blocked_template(&self, category: Option<Category>) -> &str {
        category
            .and_then(|c| self.blocked.get(&c))
            .unwrap_or(&self.blocked_fallback)
    }
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Substitute a `{key}` placeholder
pub(crate) fn fill(template: &str, key: &str, value: &str) -> String {
    template.replace(&format!("{{{}}}", key), value)
}
