//! The user's ingredient list.

/// Ingredients in insertion order. Never holds an empty string or a
/// duplicate (exact, case-sensitive match).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and append. Returns `false` if the trimmed text was empty or
    /// already present.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    /// Remove an exact match. Returns `false` if it was not in the list.
    pub fn remove(&mut self, text: &str) -> bool {
        match self.items.iter().position(|i| i == text) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|i| i == text)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Comma-joined form used in the prompt.
    pub fn joined(&self) -> String {
        self.items.join(", ")
    }
}
