//! A deferred-edit view over an immutable source text.
//!
//! Every edit is recorded against *original* byte offsets and applied only
//! when the text is rendered. Offsets captured from the parsed AST therefore
//! stay valid for the whole lifetime of the buffer, no matter how many edits
//! have been queued before them.

/// Position-preserving text editor.
///
/// Semantics of overlapping edits: edits are applied left to right, widest
/// first; an edit whose start lies inside an already-applied edit is
/// swallowed. Removing a range that contains earlier edits therefore wins
/// over them, and recording the same removal twice is harmless.
#[derive(Debug, Clone)]
pub struct MagicString {
    source: String,
    edits: Vec<Edit>,
}

#[derive(Debug, Clone)]
struct Edit {
    start: usize,
    end: usize,
    content: String,
}

impl MagicString {
    pub fn new(source: impl Into<String>) -> MagicString {
        MagicString {
            source: source.into(),
            edits: Vec::new(),
        }
    }

    /// Replaces `start..end` of the original text with `content`.
    pub fn overwrite(&mut self, start: usize, end: usize, content: impl Into<String>) {
        debug_assert!(start <= end && end <= self.source.len());
        self.edits.push(Edit {
            start,
            end,
            content: content.into(),
        });
    }

    /// Removes `start..end` of the original text.
    pub fn remove(&mut self, start: usize, end: usize) {
        self.overwrite(start, end, "");
    }

    /// Inserts `content` immediately after the original position `pos`.
    /// Repeated insertions at the same position keep their call order.
    pub fn append_right(&mut self, pos: usize, content: impl Into<String>) {
        self.overwrite(pos, pos, content);
    }

    /// Renders the edited text of the original range `start..end`.
    /// Insertions sitting exactly on `end` belong to the right-hand side
    /// and are not included.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.render(start, end, false)
    }

    /// Renders the whole edited text.
    pub fn render_all(&self) -> String {
        self.render(0, self.source.len(), true)
    }

    fn render(&self, start: usize, end: usize, include_end_insertions: bool) -> String {
        let mut ordered: Vec<&Edit> = self
            .edits
            .iter()
            .filter(|edit| {
                edit.start >= start
                    && (edit.start < end
                        || (include_end_insertions && edit.start == end && edit.end == end))
            })
            .collect();
        // Stable sort: ties keep call order, wider edits apply first.
        ordered.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut out = String::with_capacity(end - start);
        let mut cursor = start;
        for edit in ordered {
            if edit.start < cursor {
                continue; // swallowed by a wider edit
            }
            out.push_str(&self.source[cursor..edit.start]);
            out.push_str(&edit.content);
            cursor = edit.end.min(end).max(edit.start);
        }
        if cursor < end {
            out.push_str(&self.source[cursor..end]);
        }
        out
    }
}

impl std::fmt::Display for MagicString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_unedited_source() {
        let s = MagicString::new("let a = 1");
        assert_eq!(s.to_string(), "let a = 1");
    }

    #[test]
    fn applies_overwrite_and_remove() {
        let mut s = MagicString::new("import a from './a'\nconst b = 1\n");
        s.overwrite(14, 19, "\"./b\"");
        s.remove(20, 32);
        assert_eq!(s.to_string(), "import a from \"./b\"\n");
    }

    #[test]
    fn append_right_inserts_after_position() {
        let mut s = MagicString::new("import { ref } from 'x'");
        s.append_right(12, ", computed");
        assert_eq!(s.to_string(), "import { ref, computed } from 'x'");
    }

    #[test]
    fn duplicate_removal_is_harmless() {
        let mut s = MagicString::new("abcdef");
        s.remove(1, 3);
        s.remove(1, 3);
        assert_eq!(s.to_string(), "adef");
    }

    #[test]
    fn wide_removal_swallows_inner_edits() {
        let mut s = MagicString::new("head body tail");
        s.overwrite(5, 9, "BODY");
        s.remove(0, 10);
        assert_eq!(s.to_string(), "tail");
    }

    #[test]
    fn slice_applies_inner_edits_only() {
        let mut s = MagicString::new("import a\nrest");
        s.append_right(8, " // edited");
        s.overwrite(9, 13, "tail");
        assert_eq!(s.slice(0, 9), "import a // edited\n");
        // An insertion exactly on the end boundary belongs to the right side.
        assert_eq!(s.slice(0, 8), "import a");
    }

    #[test]
    fn end_insertion_is_kept_in_full_render() {
        let mut s = MagicString::new("code");
        s.append_right(4, "\nmore");
        assert_eq!(s.to_string(), "code\nmore");
    }
}
