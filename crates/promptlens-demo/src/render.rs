//! Plain-text rendering for the command line

use promptlens_analyzer::AnalysisResult;
use promptlens_policy::Rule;
use std::fmt::Write;

/// Render an analysis as a human-readable report
pub fn render_result(result: &AnalysisResult) -> String {
    let verdict = &result.verdict;
    let mut out = String::new();

    let _ = writeln!(out, "Input:    {}", result.raw_input);
    let _ = writeln!(out, "Tokens:   {}", result.token_tags().join(" "));
    let _ = writeln!(
        out,
        "Verdict:  {} ({})",
        if verdict.passed { "PASSED" } else { "FLAGGED" },
        verdict.action
    );
    if let Some(category) = verdict.category {
        let _ = writeln!(out, "Category: {}", category);
    }
    if let Some(reason) = &verdict.reason {
        let _ = writeln!(out, "Reason:   {}", reason);
    }
    if let Some(rule) = &verdict.matched_rule {
        let _ = writeln!(out, "Rule:     {}", rule);
    }
    let _ = writeln!(out, "Latency:  {}ms", result.latency_ms);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.response_text);

    if let Some(sources) = &result.grounding_sources {
        let _ = writeln!(out);
        let _ = writeln!(out, "Sources:");
        if sources.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for source in sources {
            let _ = writeln!(out, "  - {} <{}>", source.title, source.uri);
        }
    }
    if let Some(error) = &result.error {
        let _ = writeln!(out);
        let _ = writeln!(out, "Grounding error: {}", error);
    }

    out
}

/// Render the active rules as an ordered table
pub fn render_rules<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> String {
    let mut out = String::new();
    for (position, rule) in rules.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<20} {:<8} {:<18} {}",
            position + 1,
            rule.id,
            rule.action.as_str(),
            rule.category.as_str(),
            rule.reason
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptlens_core::{tokenize, GroundingSource};
    use promptlens_policy::{Category, PolicyEngine, Verdict};

    fn result(text: &str, verdict: Verdict) -> AnalysisResult {
        AnalysisResult {
            raw_input: text.to_string(),
            tokens: tokenize(text),
            verdict,
            response_text: "reply".to_string(),
            grounding_sources: None,
            error: None,
            latency_ms: 7,
        }
    }

    #[test]
    fn test_render_blocked() {
        let report = render_result(&result(
            "my ssn",
            Verdict::blocked(Some(Category::Pii), Some("Potential PII detected".to_string())),
        ));
        assert!(report.contains("FLAGGED (blocked)"));
        assert!(report.contains("Category: PII"));
        assert!(report.contains("[T0:my] [T1:ssn]"));
        assert!(report.contains("Latency:  7ms"));
        assert!(!report.contains("Sources:"));
    }

    #[test]
    fn test_render_sources_and_error() {
        let mut grounded = result("weather", Verdict::allowed());
        grounded.grounding_sources = Some(vec![GroundingSource::new(
            "https://example.com",
            "Example",
        )]);
        let report = render_result(&grounded);
        assert!(report.contains("PASSED (allowed)"));
        assert!(report.contains("- Example <https://example.com>"));

        let mut failed = result("weather", Verdict::allowed());
        failed.error = Some("timeout".to_string());
        assert!(render_result(&failed).contains("Grounding error: timeout"));
    }

    #[test]
    fn test_render_rules_in_order() {
        let engine = PolicyEngine::builtin().unwrap();
        let table = render_rules(engine.rules());
        let first = table.lines().next().unwrap();
        assert!(first.starts_with(" 1. xss-payload"));
        assert_eq!(table.lines().count(), engine.rules().count());
    }
}
