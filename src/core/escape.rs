//! LaTeX escaping for plain-text table cells
//!
//! Aliases and descriptions are ASCII text that must show up literally in
//! the typeset table. Characters LaTeX treats specially are swapped for a
//! fixed substitute in a single left-to-right pass, so a substitute is never
//! itself escaped again.
//!
//! ```rust
//! use opsheet::escape_latex;
//!
//! assert_eq!(escape_latex(r"/\ or \land"), r"/$\backslash$\ or $\backslash$land");
//! assert_eq!(escape_latex("WF_v"), r"WF\_v");
//! ```

/// Characters that never reach the output unescaped
pub const RESERVED: [char; 9] = ['\\', '_', '#', '<', '>', '|', '^', '(', ')'];

/// Substitute for a backslash immediately followed by a space
pub const BACKSLASH_SPACE: &str = r"$\backslash$\ ";

/// Fixed substitute for a reserved character, `None` for everything else.
pub fn substitute(c: char) -> Option<&'static str> {
    match c {
        '\\' => Some(r"$\backslash$"),
        '_' => Some(r"\_"),
        '#' => Some(r"\#"),
        '<' => Some(r"{\textless}"),
        '>' => Some(r"{\textgreater}"),
        '|' => Some(r"{\textbar}"),
        '^' => Some(r"{\textasciicircum}"),
        '(' => Some(r"{\char40}"),
        ')' => Some(r"{\char41}"),
        _ => None,
    }
}

/// Escape `input` for display inside a LaTeX table cell.
///
/// A backslash followed by a space becomes `$\backslash$\ `: the space is
/// emitted as a control space so the gap survives typesetting.
pub fn escape_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&' ') {
            chars.next();
            out.push_str(BACKSLASH_SPACE);
            continue;
        }
        match substitute(c) {
            Some(s) => out.push_str(s),
            None => out.push(c),
        }
    }

    out
}
