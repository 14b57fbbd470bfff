/*!
# Waypoint Docker LSP

Completion server for the attributes of the Waypoint docker builder block:

```hcl
build {
  use "docker" {
    buildkit   = true
    dockerfile = "./Dockerfile"
  }
}
```

## Features

- **Attribute completion** with documentation and snippet templates
- **Boolean values** offered after `buildkit =`
- **Duplicate suppression** for attributes already present in the document (configurable)
- **Plain-text fallback** for clients without snippet support
- **LSP server** (STDIO) and an offline `complete` CLI command

## Architecture

```text
Waypoint Docker LSP
├── Completion  - attribute catalog and resolver (no LSP types)
├── Config      - TOML/YAML settings, LSP initialization options
├── Core        - error types
└── LSP         - tower-lsp backend
```

## Usage

```rust
use waypoint_docker_lsp::CompletionResolver;

let resolver = CompletionResolver::deduplicating();
let items = resolver.resolve("", "context = \".\"\n");
assert_eq!(items.len(), 8);
```
*/

pub mod cli_common;
pub mod completion;
pub mod config;
pub mod core;
pub mod lsp;

pub use completion::{
    AttributeSpec, CandidateKind, CompletionCandidate, CompletionResolver, DocumentContext,
    DuplicatePolicy, InsertFormat, CATALOG,
};
pub use config::ServerConfig;
pub use core::ConfigError;
