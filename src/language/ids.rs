//! Language id detection from file extensions.
//!
//! Editors hand us a language id with every document. On the command line we
//! only have a path, so the id is derived from the extension using the ids
//! editors conventionally assign.

use std::path::Path;

static EXTENSION_IDS: &[(&str, &str)] = &[
    ("rs", "rust"),
    ("c", "c"),
    ("h", "c"),
    ("cc", "cpp"),
    ("cpp", "cpp"),
    ("cxx", "cpp"),
    ("hpp", "cpp"),
    ("cs", "csharp"),
    ("go", "go"),
    ("java", "java"),
    ("kt", "kotlin"),
    ("scala", "scala"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("jsx", "javascriptreact"),
    ("ts", "typescript"),
    ("tsx", "typescriptreact"),
    ("css", "css"),
    ("scss", "scss"),
    ("less", "less"),
    ("php", "php"),
    ("swift", "swift"),
    ("lua", "lua"),
    ("pl", "perl"),
    ("pm", "perl"),
    ("rb", "ruby"),
    ("vb", "vb"),
    ("clj", "clojure"),
    ("cljs", "clojure"),
    ("cljc", "clojure"),
    ("py", "python"),
    ("pyw", "python"),
    ("xml", "xml"),
    ("xsd", "xml"),
    ("svg", "xml"),
    ("html", "html"),
    ("htm", "html"),
    ("m", "matlab"),
    ("sql", "sql"),
    ("dart", "dart"),
];

/// Derive an editor-style language id from a path's extension.
///
/// Unknown or missing extensions yield `"plaintext"`.
#[must_use]
pub fn language_id_for_path(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    EXTENSION_IDS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map_or_else(|| "plaintext".to_string(), |(_, id)| (*id).to_string())
}
