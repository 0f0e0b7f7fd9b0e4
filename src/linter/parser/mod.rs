//! Parsing for manifest files.

pub mod yaml;

pub use yaml::{
    Document, YamlParseError, declared_resources, document_kind, load_documents,
    load_single_document, object_name, parse_documents, parse_single_document,
};
