//! View binding codegen — GTK `.ui` files to C binding headers
//!
//! This library scans a GTK UI definition and emits a header that binds the
//! named template children to struct fields:
//!
//! - **Collector** — every `<object class="…" id="…">` becomes a
//!   [`ClassIdRecord`], every `<signal handler="…">` a [`SignalRecord`]
//!   (see [`scan_str`])
//! - **Renderer** — one `<base_name>_viewbinding.h` per `.ui` file with a
//!   binding struct and `gtk_widget_class_bind_template_*` macros
//!   (see [`render_header`])
//!
//! # Usage
//!
//! ```rust
//! use viewbinding_codegen::{render_header, scan_str, validate_application_id};
//!
//! let ui = r#"
//! <interface>
//!   <template class="LoginView" parent="GtkBox">
//!     <child>
//!       <object class="GtkButton" id="submit_btn">
//!         <signal name="clicked" handler="on_submit_clicked"/>
//!       </object>
//!     </child>
//!   </template>
//! </interface>
//! "#;
//!
//! validate_application_id("com_example_Notes").unwrap();
//!
//! let bindings = scan_str(ui).unwrap();
//! let header = render_header("com_example_Notes", "login-view.ui", &bindings);
//!
//! assert_eq!(header.file_name, "login_view_viewbinding.h");
//! assert!(header.contents.contains("\tGtkButton *submit_btn;\n} LoginViewBinding;"));
//! assert!(header.contents.contains("#define login_view_view_binding_callback(widget_class)"));
//! ```

pub mod collect;
pub mod error;
pub mod header;
pub mod state;
pub mod validate;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use collect::{collect_object, collect_signal, scan_str, ElementKind};
pub use error::{CodegenError, CodegenResult};
pub use header::{base_name, output_file_name, render_header, to_pascal_case, HeaderRenderer, RenderedHeader};
pub use state::{ClassIdRecord, FileAccumulator, SignalRecord};
pub use validate::{is_valid_application_id, validate_application_id, ValidationError};
