//! C header renderer
//!
//! Turns a [`FileAccumulator`] into the text of `<base_name>_viewbinding.h`:
//! a `<Name>Binding` struct with one field per bound widget, the
//! `<base_name>_view_binding` / `<base_name>_view_binding_private` macros that
//! register those widgets as template children, and a
//! `<base_name>_view_binding_callback` macro for signal handlers.
//!
//! The two `view_binding_full*` helper macros are identical in every header
//! and sit behind their own guard so several headers can be included together.

use crate::state::{ClassIdRecord, FileAccumulator, SignalRecord};

/// Suffix appended to the base name to form the output file name.
pub const OUTPUT_SUFFIX: &str = "_viewbinding.h";

const BANNER: &str = "/* Generated By View Binding Code Generator, Do Not Edit By Hand */\n\n";

/// Shared helper macros. Existing generated headers depend on this exact text.
const VIEW_BINDING_UTILS: &str = "\
#ifndef VIEW_BINDING_INSIDE_UTILS
#define VIEW_BINDING_INSIDE_UTILS

#define view_binding_full(widget_class, WidgetType, BindingType, binding_name, widget_name) \\
\tgtk_widget_class_bind_template_child_full(GTK_WIDGET_CLASS(widget_class), #widget_name, FALSE, G_STRUCT_OFFSET(WidgetType, binding_name) + G_STRUCT_OFFSET(BindingType, widget_name));

#define view_binding_full_private(widget_class, WidgetType, BindingType, binding_name, widget_name) \\
\tgtk_widget_class_bind_template_child_full(GTK_WIDGET_CLASS(widget_class), #widget_name, FALSE, G_PRIVATE_OFFSET(WidgetType, binding_name) + G_STRUCT_OFFSET(BindingType, widget_name));

#endif /* VIEW_BINDING_INSIDE_UTILS */
";

// ── Public API ────────────────────────────────────────────────────────────────

/// A rendered header, ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHeader {
    /// `<base_name>_viewbinding.h`
    pub file_name: String,
    pub contents: String,
}

/// Render the complete header for one `.ui` file.
///
/// `file_name` is the source file name (e.g. `login-view.ui`); the base name
/// and output file name are derived from it. `application_id` is used
/// verbatim in the include guard.
pub fn render_header(application_id: &str, file_name: &str, acc: &FileAccumulator) -> RenderedHeader {
    let base = base_name(file_name);

    let mut renderer = HeaderRenderer::new(application_id, &base);
    renderer.banner();
    renderer.open_guard();
    renderer.utils();
    renderer.object_bindings(&acc.objects);
    renderer.signal_bindings(&acc.signals);
    renderer.close_guard();

    RenderedHeader {
        file_name: output_file_name(&base),
        contents: renderer.finish(),
    }
}

/// Derive the base name of a `.ui` file.
///
/// Strips the last extension, replaces `-` with `_` and lowercases ASCII
/// letters.
///
/// # Examples
/// ```
/// # use viewbinding_codegen::header::base_name;
/// assert_eq!(base_name("My-Widget.ui"), "my_widget");
/// assert_eq!(base_name("Main.Window.ui"), "main.window");
/// ```
pub fn base_name(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    };
    stem.replace('-', "_").to_ascii_lowercase()
}

/// Output file name for a base name: `<base_name>_viewbinding.h`.
pub fn output_file_name(base_name: &str) -> String {
    format!("{base_name}{OUTPUT_SUFFIX}")
}

/// Convert a snake_case base name to the PascalCase struct prefix.
///
/// Only a leading ASCII lowercase letter of each segment is changed; empty
/// segments vanish.
///
/// # Examples
/// ```
/// # use viewbinding_codegen::header::to_pascal_case;
/// assert_eq!(to_pascal_case("my_widget"), "MyWidget");
/// assert_eq!(to_pascal_case("main__window_2"), "MainWindow2");
/// ```
pub fn to_pascal_case(base_name: &str) -> String {
    base_name
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) if first.is_ascii_lowercase() => {
                    let mut segment = String::with_capacity(part.len());
                    segment.push(first.to_ascii_uppercase());
                    segment.push_str(chars.as_str());
                    segment
                }
                _ => part.to_string(),
            }
        })
        .collect()
}

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Owns the output buffer for one header while it is being built.
///
/// Each method appends one section; [`HeaderRenderer::finish`] hands the text
/// back. A renderer is never shared between files.
#[derive(Debug)]
pub struct HeaderRenderer {
    guard: String,
    base_name: String,
    struct_name: String,
    out: String,
}

impl HeaderRenderer {
    pub fn new(application_id: &str, base_name: &str) -> Self {
        Self {
            guard: format!("{application_id}_{base_name}_VIEW_BINDING_H_"),
            base_name: base_name.to_string(),
            struct_name: format!("{}Binding", to_pascal_case(base_name)),
            out: String::new(),
        }
    }

    pub fn banner(&mut self) {
        self.out.push_str(BANNER);
    }

    pub fn open_guard(&mut self) {
        let guard = &self.guard;
        self.out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
    }

    pub fn utils(&mut self) {
        self.out.push_str(VIEW_BINDING_UTILS);
    }

    /// Struct plus public/private binding macros. Nothing is emitted for an
    /// empty slice.
    pub fn object_bindings(&mut self, objects: &[ClassIdRecord]) {
        if objects.is_empty() {
            return;
        }
        let base = &self.base_name;
        let binding = &self.struct_name;

        self.out.push_str("\n/* Class Bindings */\n");
        self.out.push_str("typedef struct {\n");
        for rec in objects {
            self.out
                .push_str(&format!("\t{} *{};\n", rec.class_name, rec.id));
        }
        self.out.push_str(&format!("}} {binding};\n"));

        for (suffix, helper) in [
            ("view_binding", "view_binding_full"),
            ("view_binding_private", "view_binding_full_private"),
        ] {
            self.out.push('\n');
            self.out.push_str(&format!(
                "#define {base}_{suffix}(widget_class, WidgetType, binding_name) \\\n"
            ));
            self.out.push_str("\tdo { \\\n");
            for rec in objects {
                self.out.push_str(&format!(
                    "\t\t{helper}(widget_class, WidgetType, {binding}, binding_name, {}) \\\n",
                    rec.id
                ));
            }
            self.out.push_str("\t} while(0) \n");
        }
    }

    /// Template callback macro. Nothing is emitted for an empty slice.
    pub fn signal_bindings(&mut self, signals: &[SignalRecord]) {
        if signals.is_empty() {
            return;
        }
        let base = &self.base_name;

        self.out.push_str("\n/* Signal Handlers */\n");
        self.out
            .push_str(&format!("#define {base}_view_binding_callback(widget_class) \\\n"));
        self.out.push_str("\tdo { \\\n");
        for handler in signals {
            self.out.push_str(&format!(
                "\t\tgtk_widget_class_bind_template_callback(GTK_WIDGET_CLASS(widget_class), {handler}); \\\n"
            ));
        }
        self.out.push_str("\t} while(0) \n");
    }

    pub fn close_guard(&mut self) {
        let guard = &self.guard;
        self.out.push_str(&format!("\n#endif /* {guard} */\n"));
    }

    pub fn finish(self) -> String {
        self.out
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const APP_ID: &str = "com_example_Notes";

    fn login_view() -> FileAccumulator {
        FileAccumulator {
            objects: vec![
                ClassIdRecord::new("GtkEntry", "username_entry").unwrap(),
                ClassIdRecord::new("GtkButton", "submit_btn").unwrap(),
            ],
            signals: vec!["on_submit_clicked".to_string()],
        }
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("My-Widget.ui"), "my_widget");
        assert_eq!(base_name("login-view.ui"), "login_view");
        assert_eq!(base_name("Main.Window.ui"), "main.window");
        assert_eq!(base_name("README"), "readme");
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("login_view"), "login_view_viewbinding.h");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("my_widget"), "MyWidget");
        assert_eq!(to_pascal_case("login_view"), "LoginView");
        assert_eq!(to_pascal_case("__a__b_"), "AB");
        assert_eq!(to_pascal_case("page_2fa"), "Page2fa");
        assert_eq!(to_pascal_case("window"), "Window");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn renders_login_view_exactly() {
        let header = render_header(APP_ID, "login-view.ui", &login_view());
        assert_eq!(header.file_name, "login_view_viewbinding.h");

        let expected = "\
/* Generated By View Binding Code Generator, Do Not Edit By Hand */

#ifndef com_example_Notes_login_view_VIEW_BINDING_H_
#define com_example_Notes_login_view_VIEW_BINDING_H_

#ifndef VIEW_BINDING_INSIDE_UTILS
#define VIEW_BINDING_INSIDE_UTILS

#define view_binding_full(widget_class, WidgetType, BindingType, binding_name, widget_name) \\
\tgtk_widget_class_bind_template_child_full(GTK_WIDGET_CLASS(widget_class), #widget_name, FALSE, G_STRUCT_OFFSET(WidgetType, binding_name) + G_STRUCT_OFFSET(BindingType, widget_name));

#define view_binding_full_private(widget_class, WidgetType, BindingType, binding_name, widget_name) \\
\tgtk_widget_class_bind_template_child_full(GTK_WIDGET_CLASS(widget_class), #widget_name, FALSE, G_PRIVATE_OFFSET(WidgetType, binding_name) + G_STRUCT_OFFSET(BindingType, widget_name));

#endif /* VIEW_BINDING_INSIDE_UTILS */

/* Class Bindings */
typedef struct {
\tGtkEntry *username_entry;
\tGtkButton *submit_btn;
} LoginViewBinding;

#define login_view_view_binding(widget_class, WidgetType, binding_name) \\
\tdo { \\
\t\tview_binding_full(widget_class, WidgetType, LoginViewBinding, binding_name, username_entry) \\
\t\tview_binding_full(widget_class, WidgetType, LoginViewBinding, binding_name, submit_btn) \\
\t} while(0)\x20

#define login_view_view_binding_private(widget_class, WidgetType, binding_name) \\
\tdo { \\
\t\tview_binding_full_private(widget_class, WidgetType, LoginViewBinding, binding_name, username_entry) \\
\t\tview_binding_full_private(widget_class, WidgetType, LoginViewBinding, binding_name, submit_btn) \\
\t} while(0)\x20

/* Signal Handlers */
#define login_view_view_binding_callback(widget_class) \\
\tdo { \\
\t\tgtk_widget_class_bind_template_callback(GTK_WIDGET_CLASS(widget_class), on_submit_clicked); \\
\t} while(0)\x20

#endif /* com_example_Notes_login_view_VIEW_BINDING_H_ */
";
        assert_eq!(header.contents, expected);
    }

    #[test]
    fn empty_accumulator_renders_boilerplate_only() {
        let header = render_header(APP_ID, "empty.ui", &FileAccumulator::new());
        let expected = format!(
            "{BANNER}#ifndef com_example_Notes_empty_VIEW_BINDING_H_\n\
             #define com_example_Notes_empty_VIEW_BINDING_H_\n\n\
             {VIEW_BINDING_UTILS}\n\
             #endif /* com_example_Notes_empty_VIEW_BINDING_H_ */\n"
        );
        assert_eq!(header.contents, expected);
        assert!(!header.contents.contains("typedef struct"));
        assert!(!header.contents.contains("_view_binding_callback"));
    }

    #[test]
    fn signals_only_skip_struct() {
        let acc = FileAccumulator {
            objects: Vec::new(),
            signals: vec!["on_a".to_string(), "on_b".to_string(), "on_a".to_string()],
        };
        let header = render_header(APP_ID, "toolbar.ui", &acc);
        assert!(!header.contents.contains("typedef struct"));
        assert!(!header.contents.contains("#define toolbar_view_binding("));

        let callbacks: Vec<&str> = header
            .contents
            .lines()
            .filter(|l| l.contains("gtk_widget_class_bind_template_callback"))
            .collect();
        assert_eq!(callbacks.len(), 3);
        assert!(callbacks[0].contains("on_a)"));
        assert!(callbacks[1].contains("on_b)"));
        assert!(callbacks[2].contains("on_a)"));
    }

    #[test]
    fn objects_only_skip_callback_macro() {
        let acc = FileAccumulator {
            objects: vec![ClassIdRecord::new("AdwHeaderBar", "header").unwrap()],
            signals: Vec::new(),
        };
        let header = render_header(APP_ID, "Main-Window.ui", &acc);
        assert_eq!(header.file_name, "main_window_viewbinding.h");
        assert!(header.contents.contains("\tAdwHeaderBar *header;\n} MainWindowBinding;\n"));
        assert!(header
            .contents
            .contains("#define main_window_view_binding(widget_class, WidgetType, binding_name) \\\n"));
        assert!(header
            .contents
            .contains("#define main_window_view_binding_private(widget_class, WidgetType, binding_name) \\\n"));
        assert!(!header.contents.contains("Signal Handlers"));
    }

    #[test]
    fn struct_name_skips_empty_segments() {
        let mut renderer = HeaderRenderer::new(APP_ID, "prefs__dialog");
        renderer.object_bindings(&[ClassIdRecord::new("GtkSwitch", "dark_mode").unwrap()]);
        let out = renderer.finish();
        assert!(out.contains("} PrefsDialogBinding;\n"));
        assert!(out.contains("#define prefs__dialog_view_binding(widget_class, WidgetType, binding_name)"));
    }
}
