/*!
# Completion core

Attribute catalog and the resolver that turns a cursor line plus document
text into completion candidates. Nothing here depends on the LSP types.
*/

pub mod candidate;
pub mod catalog;
pub mod resolver;

pub use candidate::{CandidateKind, CompletionCandidate, InsertFormat};
pub use catalog::{AttributeSpec, CATALOG};
pub use resolver::{CompletionResolver, CursorContext, DocumentContext, DuplicatePolicy};
