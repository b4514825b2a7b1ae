//! Transient session state - current category, current idea, flags
//!
//! Lives only for one run; nothing here is persisted.

use tracing::debug;

use crate::catalog::Category;
use crate::error::Result;
use crate::idea::Idea;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_category: Category,
    /// Empty until the first generation
    pub current_idea: String,
    pub is_ai_enhanced: bool,
}

impl SessionState {
    pub fn new(category: Category) -> Self {
        Self {
            current_category: category,
            ..Default::default()
        }
    }

    /// Switch category by name. Unknown names leave the state untouched.
    pub fn select_category(&mut self, name: &str) -> Result<Category> {
        let category: Category = name.parse()?;
        self.current_category = category;
        debug!(%category, "category selected");
        Ok(category)
    }

    pub fn record_generated_idea(&mut self, idea: &Idea) {
        self.current_idea = idea.text.clone();
        self.is_ai_enhanced = idea.ai_enhanced;
    }

    pub fn has_idea(&self) -> bool {
        !self.current_idea.is_empty()
    }
}
