//! Pure string helpers used by the artifact renderers.

/// Trim every line of `text`, rejoin with `\n`, then trim the whole result.
///
/// Used to strip the indentation that Rust string literals carry into the
/// markdown and ignore-list templates.
pub fn trim_lines(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Convert an underscore separated name into CamelCase.
///
/// Each segment gets an uppercase first character and a lowercase remainder;
/// empty segments vanish.
///
/// | Input          | Output        |
/// |----------------|---------------|
/// | `test_package` | `TestPackage` |
/// | `a`            | `A`           |
/// | `HTTP_server`  | `HttpServer`  |
/// | ``             | ``            |
pub fn underscore_to_camelcase(name: &str) -> String {
    name.split('_').map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Greedy word wrap.
///
/// Newlines in `text` are treated as spaces. Words are packed onto the
/// current line until the running length (each placed word counts its
/// characters plus one separator) plus the next word would reach `width`,
/// at which point the line is broken. A word wider than `width` is placed
/// alone on its own line, unsplit. Lines carry no trailing whitespace.
pub fn word_wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut running = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if !current.is_empty() && running + len >= width {
            lines.push(std::mem::take(&mut current));
            running = 0;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        running += len + 1;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Escape `value` for embedding inside a single-quoted Python string.
pub fn escape_single_quoted(value: &str) -> String {
    escape_literal(value, '\'')
}

/// Escape `value` for embedding inside a double-quoted Python string.
pub fn escape_double_quoted(value: &str) -> String {
    escape_literal(value, '"')
}

/// Escape `value` for a `"""` docstring. Newlines stay literal there.
pub fn escape_docstring(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// One-line literals cannot hold raw line breaks or tabs.
fn escape_literal(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
