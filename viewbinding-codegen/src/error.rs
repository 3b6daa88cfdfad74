//! Error types for scanning `.ui` documents

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Result type for codegen operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Errors raised while scanning a single `.ui` document.
///
/// All of these are per-file: the caller reports them and moves on to the
/// next file.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The markup is not well-formed
    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// An attribute could not be parsed or unescaped
    #[error("malformed attribute at byte {position}: {source}")]
    Attribute {
        position: u64,
        #[source]
        source: AttrError,
    },

    /// An attribute value contains an unknown or broken entity reference
    #[error("bad attribute value at byte {position}: {source}")]
    AttributeValue {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// Text content contains an unknown or broken entity reference
    #[error("bad text content at byte {position}: {source}")]
    Text {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// Non-whitespace text before or after the root element
    #[error("text outside the root element at byte {position}")]
    TextOutsideRoot { position: u64 },

    /// Input ended while an element was still open
    #[error("document ended with element <{name}> still open")]
    UnclosedElement { name: String },

    /// No element at all in the input
    #[error("document was empty or contained only whitespace")]
    EmptyDocument,
}
