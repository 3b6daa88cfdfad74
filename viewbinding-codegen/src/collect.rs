//! Attribute collector
//!
//! Walks a `.ui` document with a [`quick_xml`] pull reader and feeds the
//! attributes of every `<object>` and `<signal>` start tag into a
//! [`FileAccumulator`]. Nesting, text, comments and end tags carry no
//! information for view bindings; text is only checked for well-formedness.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::error::{CodegenError, CodegenResult};
use crate::state::{ClassIdRecord, FileAccumulator, SignalRecord};

// ── Element kinds ────────────────────────────────────────────────────────────

/// The two start tags the collector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `<object class="…" id="…">`
    Object,
    /// `<signal handler="…">`
    Signal,
}

impl ElementKind {
    /// Map a raw tag name to its kind. Anything else is `None`.
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"object" => Some(ElementKind::Object),
            b"signal" => Some(ElementKind::Signal),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Object => "object",
            ElementKind::Signal => "signal",
        }
    }
}

// ── Per-element collectors ───────────────────────────────────────────────────

/// Extract a [`ClassIdRecord`] from the attributes of an `<object>` element.
///
/// Every attribute is visited; when a name repeats, the last value wins.
/// Returns `None` unless both `class` and `id` ended up non-empty.
pub fn collect_object<I, K, V>(attributes: I) -> Option<ClassIdRecord>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut class_name: Option<String> = None;
    let mut id: Option<String> = None;

    for (name, value) in attributes {
        match name.as_ref() {
            "class" => class_name = Some(value.as_ref().to_string()),
            "id" => id = Some(value.as_ref().to_string()),
            _ => {}
        }
    }

    ClassIdRecord::new(class_name?, id?)
}

/// Extract the handler name from the attributes of a `<signal>` element.
///
/// The first `handler` attribute wins and the remaining attributes are not
/// visited. An empty handler yields `None`.
pub fn collect_signal<I, K, V>(attributes: I) -> Option<SignalRecord>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    attributes
        .into_iter()
        .find(|(name, _)| name.as_ref() == "handler")
        .map(|(_, value)| value.as_ref().to_string())
        .filter(|handler| !handler.is_empty())
}

impl FileAccumulator {
    /// Run the collector for `kind` and append whatever it produced.
    pub fn apply<I, K, V>(&mut self, kind: ElementKind, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match kind {
            ElementKind::Object => {
                if let Some(record) = collect_object(attributes) {
                    debug!(tag = kind.tag(), class = %record.class_name, id = %record.id, "binding");
                    self.objects.push(record);
                }
            }
            ElementKind::Signal => {
                if let Some(handler) = collect_signal(attributes) {
                    debug!(tag = kind.tag(), %handler, "binding");
                    self.signals.push(handler);
                }
            }
        }
    }

    /// Dispatch a start tag by name. Unrecognised tags are ignored.
    pub fn collect_element<I, K, V>(&mut self, tag: &str, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if let Some(kind) = ElementKind::from_tag(tag.as_bytes()) {
            self.apply(kind, attributes);
        }
    }
}

// ── Document scan ────────────────────────────────────────────────────────────

/// Scan a complete `.ui` document and return its bindings.
///
/// The document must be well-formed: reader errors, mismatched end tags,
/// broken entities in text, text outside the root element, elements left
/// open at end of input and documents without any element are all reported
/// as [`CodegenError`]s.
pub fn scan_str(xml: &str) -> CodegenResult<FileAccumulator> {
    let mut reader = Reader::from_str(xml);
    let mut acc = FileAccumulator::new();
    let mut open: Vec<String> = Vec::new();
    let mut seen_element = false;

    loop {
        let position = reader.buffer_position() as u64;
        match reader.read_event() {
            Ok(Event::Start(element)) => {
                seen_element = true;
                open.push(String::from_utf8_lossy(element.name().as_ref()).into_owned());
                start_element(&mut acc, &element, position)?;
            }
            Ok(Event::Empty(element)) => {
                seen_element = true;
                start_element(&mut acc, &element, position)?;
            }
            Ok(Event::End(_)) => {
                open.pop();
            }
            Ok(Event::Text(text)) => {
                let content = text
                    .unescape()
                    .map_err(|source| CodegenError::Text { position, source })?;
                if open.is_empty() && !content.trim().is_empty() {
                    return Err(CodegenError::TextOutsideRoot { position });
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(source) => return Err(CodegenError::Xml { position, source }),
        }
    }

    if let Some(name) = open.pop() {
        return Err(CodegenError::UnclosedElement { name });
    }
    if !seen_element {
        return Err(CodegenError::EmptyDocument);
    }

    Ok(acc)
}

fn start_element(
    acc: &mut FileAccumulator,
    element: &BytesStart<'_>,
    position: u64,
) -> CodegenResult<()> {
    // Attributes of every element are decoded so malformed markup is caught
    // regardless of the tag.
    let attributes = read_attributes(element, position)?;

    if let Some(kind) = ElementKind::from_tag(element.name().as_ref()) {
        acc.apply(
            kind,
            attributes
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );
    }
    Ok(())
}

/// Decode all attributes in document order, duplicates included.
fn read_attributes(element: &BytesStart<'_>, position: u64) -> CodegenResult<Vec<(String, String)>> {
    let mut attributes = element.attributes();
    attributes.with_checks(false);

    attributes
        .map(|attr| {
            let attr = attr.map_err(|source| CodegenError::Attribute { position, source })?;
            let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|source| CodegenError::AttributeValue { position, source })?
                .into_owned();
            Ok((name, value))
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
