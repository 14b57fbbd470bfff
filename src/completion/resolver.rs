/*!
# Completion resolver

Decides from the cursor line which branch applies and builds the candidate list.

Detection is substring based: `buildkit =` on the current line selects the
boolean branch, and `<key> =` anywhere in the document marks an attribute as
already present. Comments and string literals count, other spacing around `=`
does not.
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::candidate::{CompletionCandidate, InsertFormat};
use super::catalog::{AttributeSpec, BOOLEAN_CONTEXT_KEY, BOOLEAN_KEYWORDS, CATALOG};
use crate::core::errors::ConfigError;

/// Whether attributes already assigned in the document are offered again
///
/// Config files, `initializationOptions` and `--policy` all parse through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DuplicatePolicy {
    /// Offer the whole catalog every time
    OfferAll,
    /// Skip attributes whose assignment already appears in the document
    #[default]
    Suppress,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::OfferAll => write!(f, "offer_all"),
            DuplicatePolicy::Suppress => write!(f, "suppress"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "offer_all" | "all" => Ok(DuplicatePolicy::OfferAll),
            "suppress" | "dedup" => Ok(DuplicatePolicy::Suppress),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for DuplicatePolicy {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Cursor position classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorContext {
    /// Right after `buildkit =`
    BooleanValue,
    /// Anywhere else: attribute names are offered
    AttributeName,
}

/// Text the resolver looks at for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentContext<'a> {
    /// Line containing the cursor
    pub line: &'a str,
    /// Whole document
    pub text: &'a str,
}

impl<'a> DocumentContext<'a> {
    pub fn new(line: &'a str, text: &'a str) -> Self {
        Self { line, text }
    }

    /// Context for zero-based `line` of `text`; past the end yields an empty line
    pub fn at_line(text: &'a str, line: usize) -> Self {
        Self {
            line: text.lines().nth(line).unwrap_or(""),
            text,
        }
    }

    pub fn classify(&self) -> CursorContext {
        let marker = format!("{} =", BOOLEAN_CONTEXT_KEY);
        if self.line.contains(&marker) {
            CursorContext::BooleanValue
        } else {
            CursorContext::AttributeName
        }
    }

    /// Whether the document already assigns `spec`
    pub fn assigns(&self, spec: &AttributeSpec) -> bool {
        self.text.contains(&spec.assignment_marker())
    }
}

/// Stateless resolver over the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionResolver {
    policy: DuplicatePolicy,
    snippets: bool,
}

impl Default for CompletionResolver {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default())
    }
}

impl CompletionResolver {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            snippets: true,
        }
    }

    /// Resolver that emits the whole catalog
    pub fn baseline() -> Self {
        Self::new(DuplicatePolicy::OfferAll)
    }

    /// Resolver that hides attributes already present
    pub fn deduplicating() -> Self {
        Self::new(DuplicatePolicy::Suppress)
    }

    /// Use plain-text inserts instead of snippet templates
    pub fn with_snippets(mut self, snippets: bool) -> Self {
        self.snippets = snippets;
        self
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn resolve(&self, current_line: &str, full_text: &str) -> Vec<CompletionCandidate> {
        self.resolve_context(&DocumentContext::new(current_line, full_text))
    }

    pub fn resolve_context(&self, ctx: &DocumentContext<'_>) -> Vec<CompletionCandidate> {
        match ctx.classify() {
            CursorContext::BooleanValue => BOOLEAN_KEYWORDS
                .iter()
                .map(|literal| CompletionCandidate::keyword(literal))
                .collect(),
            CursorContext::AttributeName => CATALOG
                .iter()
                .filter(|spec| self.policy == DuplicatePolicy::OfferAll || !ctx.assigns(spec))
                .map(|spec| {
                    let (insert_text, insert_format) = self.insert_for(spec);
                    CompletionCandidate::from_spec(spec, insert_text, insert_format)
                })
                .collect(),
        }
    }

    /// Insert text for `spec`: choice-list snippets when suppressing, the
    /// `$0` templates when offering everything, literals without snippets
    fn insert_for(&self, spec: &AttributeSpec) -> (&'static str, InsertFormat) {
        match (self.snippets, self.policy) {
            (false, _) => (spec.plain_text, InsertFormat::PlainText),
            (true, DuplicatePolicy::Suppress) => (spec.insert_template, InsertFormat::Snippet),
            (true, DuplicatePolicy::OfferAll) => (spec.baseline_template, spec.baseline_format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CandidateKind;
    use pretty_assertions::assert_eq;

    fn labels(candidates: &[CompletionCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_boolean_branch() {
        let result = CompletionResolver::default().resolve("  buildkit = ", "");
        assert_eq!(labels(&result), vec!["false", "true"]);
        for candidate in &result {
            assert_eq!(candidate.kind, CandidateKind::Keyword);
            assert_eq!(candidate.documentation, None);
            assert_eq!(candidate.insert_text, candidate.label);
            assert_eq!(candidate.insert_format, InsertFormat::PlainText);
        }
    }

    #[test]
    fn test_boolean_branch_ignores_document() {
        let doc = "buildkit = true\ncontext = \".\"\n";
        let result = CompletionResolver::deduplicating().resolve("buildkit = t", doc);
        assert_eq!(labels(&result), vec!["false", "true"]);
    }

    #[test]
    fn test_other_boolean_attributes_use_attribute_branch() {
        // только buildkit переключает контекст
        let result = CompletionResolver::baseline().resolve("no_cache = ", "");
        assert_eq!(result.len(), CATALOG.len());
    }

    #[test]
    fn test_marker_needs_single_space() {
        let ctx = DocumentContext::new("buildkit=", "");
        assert_eq!(ctx.classify(), CursorContext::AttributeName);
    }

    #[test]
    fn test_baseline_ignores_existing_assignments() {
        let doc = "context = \".\"\ntarget = \"prod\"\n";
        let result = CompletionResolver::baseline().resolve("", doc);
        assert_eq!(result.len(), 9);
    }

    #[test]
    fn test_dedup_counts_comments() {
        let doc = "# dockerfile = \"x\"\n";
        let result = CompletionResolver::deduplicating().resolve("", doc);
        assert!(!labels(&result).contains(&"dockerfile"));
        assert_eq!(result.len(), 8);
    }

    #[test]
    fn test_plain_text_mode() {
        let result = CompletionResolver::baseline().with_snippets(false).resolve("", "");
        let context = result.iter().find(|c| c.label == "context").unwrap();
        assert_eq!(context.insert_text, "context = \".\"");
        assert_eq!(context.insert_format, InsertFormat::PlainText);
    }

    #[test]
    fn test_baseline_uses_final_cursor_stop() {
        let result = CompletionResolver::baseline().resolve("", "");
        let find = |key: &str| result.iter().find(|c| c.label == key).unwrap();

        assert_eq!(find("auth").insert_text, "auth = {\n\t$0\n}");
        assert_eq!(find("auth").insert_format, InsertFormat::Snippet);
        assert_eq!(find("target").insert_text, "target = \"$0\"");
        assert_eq!(find("buildkit").insert_text, "buildkit = true");
        assert_eq!(find("buildkit").insert_format, InsertFormat::PlainText);
    }

    #[test]
    fn test_suppress_uses_choice_lists() {
        let result = CompletionResolver::deduplicating().resolve("", "");
        let buildkit = result.iter().find(|c| c.label == "buildkit").unwrap();
        assert_eq!(buildkit.insert_text, "buildkit = ${1|true,false|}");
        assert_eq!(buildkit.insert_format, InsertFormat::Snippet);
    }

    #[test]
    fn test_at_line() {
        let text = "build {\n  use \"docker\" {\n    buildkit = \n  }\n}";
        assert_eq!(DocumentContext::at_line(text, 2).classify(), CursorContext::BooleanValue);
        assert_eq!(DocumentContext::at_line(text, 1).classify(), CursorContext::AttributeName);
        assert_eq!(DocumentContext::at_line(text, 42).line, "");
        assert_eq!(DocumentContext::at_line("a\r\nbuildkit = \r\n", 1).line, "buildkit = ");
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("offer-all".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::OfferAll);
        assert_eq!("Suppress".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Suppress);
        assert!("sometimes".parse::<DuplicatePolicy>().is_err());
    }

    #[test]
    fn test_policy_deserialize_matches_from_str() {
        for (input, expected) in [
            ("\"offer_all\"", DuplicatePolicy::OfferAll),
            ("\"offer-all\"", DuplicatePolicy::OfferAll),
            ("\"all\"", DuplicatePolicy::OfferAll),
            ("\"dedup\"", DuplicatePolicy::Suppress),
        ] {
            let policy: DuplicatePolicy = serde_json::from_str(input).unwrap();
            assert_eq!(policy, expected, "{}", input);
        }
        assert!(serde_json::from_str::<DuplicatePolicy>("\"sometimes\"").is_err());
        assert_eq!(serde_json::to_string(&DuplicatePolicy::OfferAll).unwrap(), "\"offer_all\"");
    }
}
