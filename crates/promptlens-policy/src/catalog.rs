//! Built-in rule catalog
//!
//! Order encodes severity: active-content exploitation, operational
//! sabotage, privacy leakage, generic harm, generic jailbreak, then
//! domain-specific allowances.

use crate::{Action, Category, Rule, RuleCatalog, Trigger};

/// Script element open/close pair, any content, across newlines.
pub const SCRIPT_ELEMENT: &str = r"(?is)<script\s*[^>]*>.*?</script>";
/// `on<word>=` event-handler attribute followed by a quoted value.
pub const EVENT_HANDLER_ATTRIBUTE: &str = r#"(?is)on[a-z]+=[\s"]*['"]?[^>]*['"]"#;
/// `img` element whose `src` is a `javascript:` URL.
pub const JAVASCRIPT_IMG_SRC: &str = r#"(?is)<\s*img\s+src\s*=\s*['"]?javascript:"#;
/// `svg` element with an `onload` attribute.
pub const SVG_ONLOAD: &str = r"(?is)<\s*svg\s+onload=";
/// Base64-encoded HTML data URI.
pub const HTML_DATA_URI: &str = r"(?is)data:text/html;base64,";

/// Build the built-in catalog
pub fn builtin_catalog() -> RuleCatalog {
    RuleCatalog {
        name: "builtin".to_string(),
        description: "Default request screening rules".to_string(),
        version: "1.0".to_string(),
        rules: vec![
            Rule::new(
                "xss-payload",
                Trigger::pattern([
                    SCRIPT_ELEMENT,
                    EVENT_HANDLER_ATTRIBUTE,
                    JAVASCRIPT_IMG_SRC,
                    SVG_ONLOAD,
                    HTML_DATA_URI,
                ]),
                Category::XssPayload,
                Action::Blocked,
                "Detected potential Cross-Site Scripting (XSS) payload. Contains active scripting elements or event handlers.",
            )
            .with_description("Script elements, event handlers, javascript: URLs and HTML data URIs"),
            Rule::new(
                "command-injection",
                Trigger::keywords(["delete system files"]),
                Category::JailbreakAttempt,
                Action::Blocked,
                "Detected potential command injection attempt.",
            )
            .with_description("Requests to run destructive system operations"),
            Rule::new(
                "pii",
                Trigger::keywords(["pincode", "social security"]),
                Category::Pii,
                Action::Blocked,
                "Detected potential PII in input.",
            )
            .with_description("Personal identifiers in the request"),
            Rule::new(
                "harmful-content",
                Trigger::keywords(["generate hate speech"]),
                Category::Harmful,
                Action::Blocked,
                "Detected request for harmful content.",
            )
            .with_description("Requests for hateful content"),
            Rule::new(
                "prompt-injection",
                Trigger::keywords(["ignore all previous instructions"]),
                Category::JailbreakAttempt,
                Action::Blocked,
                "Detected prompt injection attempt.",
            )
            .with_description("Instruction override attempts"),
            Rule::new(
                "section-8-fees",
                Trigger::exact(["Tenant owes additional fees not covered by Section 8"]),
                Category::PolicyViolation,
                Action::Allowed,
                "Detected a policy rule context, processing as normal text.",
            )
            .with_description("Housing-fee business context; annotated but allowed"),
        ],
    }
}
