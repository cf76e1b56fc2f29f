use crate::config::Categories;
use crate::error::{Result, StoreError};

/// The add-item form: a category choice plus the item text. Saving needs
/// both fields filled in; nothing else is checked.
#[derive(Debug, Default, Clone)]
pub struct CategoryItemForm {
    category: String,
    item: String,
}

impl CategoryItemForm {
    pub fn new(category: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            item: item.into(),
        }
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_item(&mut self, item: impl Into<String>) {
        self.item = item.into();
    }

    pub fn can_save(&self) -> bool {
        !self.category.trim().is_empty() && !self.item.trim().is_empty()
    }

    /// Append the item under its category and clear the form
    pub fn save(&mut self, categories: &mut Categories) -> Result<(String, String)> {
        if !self.can_save() {
            return Err(StoreError::IncompleteCategoryItem);
        }
        let category = self.category.trim().to_string();
        let item = self.item.trim().to_string();
        categories
            .entry(category.clone())
            .or_default()
            .push(item.clone());
        *self = Self::default();
        Ok((category, item))
    }
}
