//! View binding state types
//!
//! The per-file records collected from a `.ui` document. A fresh
//! [`FileAccumulator`] is created for every file and handed to the header
//! renderer once the scan is complete.

// ── Object records ───────────────────────────────────────────────────────────

/// One `<object class="…" id="…">` declaration.
///
/// Both fields are always non-empty; elements lacking either attribute never
/// produce a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassIdRecord {
    /// GType name of the widget, e.g. `GtkButton`. Emitted as the field type.
    pub class_name: String,
    /// Template child id, e.g. `submit_btn`. Emitted as the field name.
    pub id: String,
}

impl ClassIdRecord {
    /// Build a record, or `None` if either part is empty.
    pub fn new(class_name: impl Into<String>, id: impl Into<String>) -> Option<Self> {
        let class_name = class_name.into();
        let id = id.into();
        if class_name.is_empty() || id.is_empty() {
            return None;
        }
        Some(Self { class_name, id })
    }
}

// ── Signal records ───────────────────────────────────────────────────────────

/// The `handler` attribute of one `<signal>` element.
pub type SignalRecord = String;

// ── Accumulator ──────────────────────────────────────────────────────────────

/// Everything collected from a single `.ui` file, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileAccumulator {
    pub objects: Vec<ClassIdRecord>,
    /// Handler names; duplicates are kept.
    pub signals: Vec<SignalRecord>,
}

impl FileAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when neither objects nor signals were found.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.signals.is_empty()
    }
}
