//! Category choices for a draft.
//!
//! The predefined categories are fixed for the whole process. Categories added
//! while editing live in the session's [`CategoryRegistry`] only; the post keeps
//! just the chosen id.
//!
//! Custom names are not checked against each other or against the predefined
//! set, so two entries may share an id.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

pub const PREDEFINED: [(&str, &str); 8] = [
    ("technology", "Technology"),
    ("lifestyle", "Lifestyle"),
    ("health", "Health & Wellness"),
    ("travel", "Travel"),
    ("food", "Food & Cooking"),
    ("finance", "Finance"),
    ("education", "Education"),
    ("other", "Other"),
];

/// Derives a category id: lowercase, whitespace runs become one hyphen, and
/// anything outside `[a-z0-9-]` is dropped.
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_space = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }
    slug
}

#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    custom: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predefined() -> impl Iterator<Item = Category> {
        PREDEFINED.iter().map(|(id, name)| Category::new(id, name))
    }

    /// Predefined categories followed by the custom ones, in insertion order.
    pub fn all(&self) -> Vec<Category> {
        Self::predefined().chain(self.custom.iter().cloned()).collect()
    }

    pub fn custom(&self) -> &[Category] {
        &self.custom
    }

    pub fn find(&self, id: &str) -> Option<Category> {
        self.all().into_iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Adds a custom category and returns it. Blank names, and names with no
    /// character that survives slugification, are ignored.
    pub fn add_custom(&mut self, name: &str) -> Option<&Category> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = slugify(name);
        if id.is_empty() {
            return None;
        }
        self.custom.push(Category {
            id,
            name: name.to_string(),
        });
        self.custom.last()
    }
}
