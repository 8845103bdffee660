//! Table output for the language list

use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::codegen::{languages, Language};
use crate::engine::{NativeEngine, Target};

/// Format the language table: key, label, extension and engine coverage
pub fn format_languages() -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header: Vec<Cell> = ["Key", "Label", "Extension", "Native"]
        .iter()
        .map(|col| Cell::new(col).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(header);

    for language in languages() {
        table.add_row(vec![
            Cell::new(language.key),
            Cell::new(language.label),
            Cell::new(language.extension),
            Cell::new(native_marker(language)),
        ]);
    }

    table.to_string()
}

fn native_marker(language: &Language) -> &'static str {
    if language.key == "curl" {
        return "yes";
    }
    match Target::from_id(language.engine_id) {
        Some(target) if NativeEngine::supports(target) => "yes",
        Some(_) => "no",
        None => "fallback",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_language() {
        let table = format_languages();
        assert!(table.contains("Objective-C"));
        assert!(table.contains("ps1"));
        assert!(table.contains("Native"));
    }

    #[test]
    fn test_native_marker() {
        let marker = |key: &str| native_marker(crate::codegen::language(key).unwrap());
        assert_eq!(marker("python"), "yes");
        assert_eq!(marker("curl"), "yes");
        assert_eq!(marker("ocaml"), "no");
        assert_eq!(marker("typescript"), "fallback");
    }
}
