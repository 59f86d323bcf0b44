//! Document splitter
//!
//! Locates the first `...` separator line and splits the document into its
//! variable and template sections. Everything after the first separator,
//! including further occurrences of the separator token, belongs to the
//! template verbatim.

/// The section separator: a line containing exactly `...`.
pub const SECTION_SEPARATOR: &str = "\n...\n";

/// A document split into its two sections. Borrows from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    /// Text before the separator, not yet trimmed.
    pub variable_text: &'a str,
    /// Text after the separator, verbatim.
    pub template_text: &'a str,
}

/// Split `text` at the first section separator.
///
/// Returns `None` when no separator occurs anywhere in the text; callers
/// treat that as "render as identity", not as an error. A document whose
/// very first line is `...` has an empty variable section.
pub fn split(text: &str) -> Option<Sections<'_>> {
    // Separator as the very first line: the leading newline is relaxed.
    if let Some(rest) = text.strip_prefix("...\n") {
        return Some(Sections {
            variable_text: "",
            template_text: rest,
        });
    }

    let at = text.find(SECTION_SEPARATOR)?;
    Some(Sections {
        variable_text: &text[..at],
        template_text: &text[at + SECTION_SEPARATOR.len()..],
    })
}
