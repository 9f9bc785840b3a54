//! Escaping helpers for text placed inside tbl data lines.

/// Data-line entries that tbl would read as drawing commands.
const RULE_ENTRIES: [&str; 4] = ["_", "=", "\\_", "\\^"];

/// Prefixes `\&` (zero-width space) to a line troff would otherwise read as
/// a request or control line.
pub(crate) fn protect_control_line(line: &str) -> String {
    if line.starts_with('.') || line.starts_with('\'') {
        format!("\\&{}", line)
    } else {
        line.to_string()
    }
}

/// Prepares rendered cell text for a tbl data line.
///
/// Multi-line text is wrapped in a `T{`/`T}` text block. Single-line text
/// that tbl would treat as a rule, a text-block opener or a troff request is
/// prefixed with `\&`.
pub(crate) fn tbl_entry(text: &str) -> String {
    if text.contains('\n') {
        let body: Vec<String> = text.lines().map(protect_control_line).collect();
        return format!("T{{\n{}\nT}}", body.join("\n"));
    }
    if RULE_ENTRIES.contains(&text) || text.starts_with("T{") {
        return format!("\\&{}", text);
    }
    protect_control_line(text)
}
