/*!
# Attribute catalog

Static table of the attributes accepted inside the docker `build` block.
Order of [`CATALOG`] is the order completions are offered in.
*/

use serde::Serialize;

use super::candidate::{CandidateKind, InsertFormat};

/// One configurable attribute of the docker build block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeSpec {
    /// Attribute name as written in HCL
    pub key: &'static str,
    /// Markdown documentation shown next to the completion
    pub documentation: &'static str,
    /// Snippet template with `$1` stops and `${1|a,b|}` choice lists
    pub insert_template: &'static str,
    /// Template offered when duplicates are not suppressed: `$0` final stop or a literal
    pub baseline_template: &'static str,
    pub baseline_format: InsertFormat,
    /// Insert text for clients without snippet support
    pub plain_text: &'static str,
    pub kind: CandidateKind,
}

impl AttributeSpec {
    /// Substring marking an assignment to this attribute, e.g. `context =`
    pub fn assignment_marker(&self) -> String {
        format!("{} =", self.key)
    }

    /// First paragraph of the documentation
    pub fn summary(&self) -> &'static str {
        self.documentation
            .split("\n\n")
            .next()
            .unwrap_or(self.documentation)
    }
}

/// Key whose value position gets the boolean keyword completion
pub const BOOLEAN_CONTEXT_KEY: &str = "buildkit";

/// Boolean keywords in the order they are offered
pub const BOOLEAN_KEYWORDS: [&str; 2] = ["false", "true"];

pub static CATALOG: &[AttributeSpec] = &[
    AttributeSpec {
        key: "auth",
        documentation: "The authentication information to log into the docker repository.",
        insert_template: "auth = {\n\t$1\n}",
        baseline_template: "auth = {\n\t$0\n}",
        baseline_format: InsertFormat::Snippet,
        plain_text: "auth = {\n\t\n}",
        kind: CandidateKind::Property,
    },
    AttributeSpec {
        key: "build_args",
        documentation: "Build args to pass to docker for the build step.\n\n\
            An array of strings of build-time variables passed as build-arg to docker for the build step.",
        insert_template: "build_args = {\n\t\"$1\" = \"$2\"\n}",
        baseline_template: "build_args = {\n\t$0\n}",
        baseline_format: InsertFormat::Snippet,
        plain_text: "build_args = {\n\t\n}",
        kind: CandidateKind::Property,
    },
    AttributeSpec {
        key: "buildkit",
        documentation: "If set, use the buildkit builder from Docker.",
        insert_template: "buildkit = ${1|true,false|}",
        baseline_template: "buildkit = true",
        baseline_format: InsertFormat::PlainText,
        plain_text: "buildkit = true",
        kind: CandidateKind::Property,
    },
    AttributeSpec {
        key: "context",
        documentation: "Build context path.",
        insert_template: "context = \"$1\"",
        baseline_template: "context = \".\"",
        baseline_format: InsertFormat::PlainText,
        plain_text: "context = \".\"",
        kind: CandidateKind::Property,
    },
    AttributeSpec {
        key: "disable_entrypoint",
        documentation: "If set, the entrypoint binary won't be injected into the image.\n\n\
            The entrypoint binary is what provides extended functionality such as logs and exec. \
            If it is not injected at build time the expectation is that the image already contains it.",
        insert_template: "disable_entrypoint = ${1|true,false|}",
        baseline_template: "disable_entrypoint = true",
        baseline_format: InsertFormat::PlainText,
        plain_text: "disable_entrypoint = true",
        kind: CandidateKind::Property,
    },
    AttributeSpec {
        key: "dockerfile",
        documentation: "The path to the Dockerfile.\n\n\
            Set this when the Dockerfile is not APP-PATH/Dockerfile.",
        insert_template: "dockerfile = \"$1\"",
        baseline_template: "dockerfile = \"$0\"",
        baseline_format: InsertFormat::Snippet,
        plain_text: "dockerfile = \"\"",
        kind: CandidateKind::Property,
    },
    AttributeSpec {
        key: "no_cache",
        documentation: "Do not use cache when building the image.\n\nEnsures a clean image build.",
        insert_template: "no_cache = ${1|true,false|}",
        baseline_template: "no_cache = false",
        baseline_format: InsertFormat::PlainText,
        plain_text: "no_cache = false",
        kind: CandidateKind::Property,
    },
    AttributeSpec {
        key: "platform",
        documentation: "Set target platform to build container if server is multi-platform capable.\n\n\
            Must enable Docker buildkit to use the 'platform' flag.",
        insert_template: "platform = \"${1|linux/arm64,linux/amd64|}\"",
        baseline_template: "platform = \"$0\"",
        baseline_format: InsertFormat::Snippet,
        plain_text: "platform = \"\"",
        kind: CandidateKind::Property,
    },
    AttributeSpec {
        key: "target",
        documentation: "The target build stage in a multi-stage Dockerfile.\n\n\
            If buildkit is enabled unused stages will be skipped.",
        insert_template: "target = \"$1\"",
        baseline_template: "target = \"$0\"",
        baseline_format: InsertFormat::Snippet,
        plain_text: "target = \"\"",
        kind: CandidateKind::Property,
    },
];

/// Find a catalog entry by key
pub fn find(key: &str) -> Option<&'static AttributeSpec> {
    CATALOG.iter().find(|spec| spec.key == key)
}
