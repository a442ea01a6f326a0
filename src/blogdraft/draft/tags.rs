//! Free-text tags for a draft.
//!
//! [`TagSet`] is the stored value: an ordered list of unique strings.
//! [`TagInput`] is the editor that sits in front of it and turns discrete key
//! events into additions and removals.
//!
//! ## Key handling
//!
//! - Enter, comma or space commit the trimmed buffer as a new tag, unless the
//!   buffer is blank or the tag already exists. The buffer is cleared only when
//!   a tag was actually added.
//! - Backspace on an empty buffer removes the last tag; on a non-empty buffer
//!   it deletes the last typed character.
//! - Any other character is appended to the buffer.
//!
//! There is no limit on tag count or tag length.

use serde::{Deserialize, Serialize};

/// Ordered set of unique tags, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tag` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, tag: String) -> bool {
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Removes `tag` wherever it sits. Returns whether it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

// Stored lists may contain duplicates if edited by hand; keep the first.
impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        let mut set = TagSet::new();
        for tag in tags {
            set.insert(tag);
        }
        set
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits a whole tag list (`"rust, cli web"`) on commas and whitespace,
/// skipping empty pieces.
pub fn split_tags(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// A discrete key event on the tag input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    Enter,
    Comma,
    Space,
    Backspace,
    Char(char),
}

impl From<char> for TagKey {
    fn from(c: char) -> Self {
        match c {
            '\n' | '\r' => TagKey::Enter,
            ',' => TagKey::Comma,
            ' ' => TagKey::Space,
            '\u{8}' => TagKey::Backspace,
            other => TagKey::Char(other),
        }
    }
}

/// What a key event did to the tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagChange {
    Added(String),
    Removed(String),
}

/// Text buffer of the tag input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInput {
    buffer: String,
}

impl TagInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Applies one key event to `tags`.
    pub fn handle_key(&mut self, tags: &mut TagSet, key: TagKey) -> Option<TagChange> {
        match key {
            TagKey::Enter | TagKey::Comma | TagKey::Space => {
                let candidate = self.buffer.trim();
                if candidate.is_empty() || tags.contains(candidate) {
                    return None;
                }
                let tag = candidate.to_string();
                tags.insert(tag.clone());
                self.buffer.clear();
                Some(TagChange::Added(tag))
            }
            TagKey::Backspace => {
                if self.buffer.is_empty() {
                    tags.pop().map(TagChange::Removed)
                } else {
                    self.buffer.pop();
                    None
                }
            }
            TagKey::Char(c) => {
                self.buffer.push(c);
                None
            }
        }
    }

    /// Feeds every character of `text` as a key event.
    pub fn type_str(&mut self, tags: &mut TagSet, text: &str) -> Vec<TagChange> {
        text.chars()
            .filter_map(|c| self.handle_key(tags, TagKey::from(c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> (TagInput, TagSet) {
        let mut input = TagInput::new();
        let mut tags = TagSet::new();
        input.type_str(&mut tags, text);
        (input, tags)
    }

    #[test]
    fn commit_keys_add_tags_in_order() {
        let (input, tags) = typed("rust,web async\n");
        assert_eq!(tags.as_slice(), ["rust", "web", "async"]);
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn blank_buffer_is_not_committed() {
        let (_, tags) = typed("   ,\n");
        assert!(tags.is_empty());
    }

    #[test]
    fn duplicate_tag_is_ignored_and_buffer_kept() {
        let mut input = TagInput::new();
        let mut tags = TagSet::new();
        input.type_str(&mut tags, "rust\n");
        let changes = input.type_str(&mut tags, "rust\n");

        assert!(changes.is_empty());
        assert_eq!(tags.as_slice(), ["rust"]);
        assert_eq!(input.buffer(), "rust");
    }

    #[test]
    fn backspace_on_empty_buffer_pops_until_empty() {
        let (mut input, mut tags) = typed("a b c ");
        let mut removed = Vec::new();
        for _ in 0..5 {
            if let Some(TagChange::Removed(tag)) = input.handle_key(&mut tags, TagKey::Backspace) {
                removed.push(tag);
            }
        }
        assert_eq!(removed, ["c", "b", "a"]);
        assert!(tags.is_empty());
    }

    #[test]
    fn backspace_with_text_edits_buffer_only() {
        let (mut input, mut tags) = typed("a ab");
        assert_eq!(input.handle_key(&mut tags, TagKey::Backspace), None);
        assert_eq!(input.buffer(), "a");
        assert_eq!(tags.as_slice(), ["a"]);
    }

    #[test]
    fn remove_takes_tag_from_any_position() {
        let (_, mut tags) = typed("one two three ");
        assert!(tags.remove("two"));
        assert!(!tags.remove("two"));
        assert_eq!(tags.as_slice(), ["one", "three"]);
    }

    #[test]
    fn deserializing_drops_duplicates() {
        let tags: TagSet = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        assert_eq!(tags.as_slice(), ["a", "b"]);
        assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn split_tags_on_commas_and_whitespace() {
        let parts: Vec<_> = split_tags(" rust,cli  web,\tasync ,").collect();
        assert_eq!(parts, ["rust", "cli", "web", "async"]);
        assert_eq!(split_tags(" , ").count(), 0);
    }
}
