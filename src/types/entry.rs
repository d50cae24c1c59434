//! Catalog entry types: categories, difficulty levels, and the entry struct.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::error::{LibraryError, LibraryResult};

/// The fixed set of expression categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Animation,
    Position,
    Scale,
    Rotation,
    Color,
    Text,
    Shape,
    Time,
    Math,
    Utility,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 10] = [
        Self::Animation,
        Self::Position,
        Self::Scale,
        Self::Rotation,
        Self::Color,
        Self::Text,
        Self::Shape,
        Self::Time,
        Self::Math,
        Self::Utility,
    ];

    /// Return the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Animation => "Animation",
            Self::Position => "Position",
            Self::Scale => "Scale",
            Self::Rotation => "Rotation",
            Self::Color => "Color",
            Self::Text => "Text",
            Self::Shape => "Shape",
            Self::Time => "Time",
            Self::Math => "Math",
            Self::Utility => "Utility",
        }
    }

    /// Parse a category from its name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = LibraryError;

    fn from_str(s: &str) -> LibraryResult<Self> {
        Self::from_name(s).ok_or_else(|| LibraryError::UnknownCategory(s.to_string()))
    }
}

/// How demanding an expression is to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Return the display name for this difficulty.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Parse a difficulty from its name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = LibraryError;

    fn from_str(s: &str) -> LibraryResult<Self> {
        Self::from_name(s).ok_or_else(|| LibraryError::UnknownDifficulty(s.to_string()))
    }
}

/// Category selection for the derived view: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only entries of this category.
    Only(Category),
}

impl CategoryFilter {
    /// `All` followed by every category, the order a category picker shows them.
    pub fn all_options() -> Vec<CategoryFilter> {
        std::iter::once(Self::All)
            .chain(Category::ALL.iter().copied().map(Self::Only))
            .collect()
    }

    /// Whether an entry of `category` passes this filter.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    /// Return the display name (`All` or the category name).
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.name(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CategoryFilter {
    type Err = LibraryError;

    fn from_str(s: &str) -> LibraryResult<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>().map(Self::Only)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A single catalog item: an expression snippet plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier, stable across sessions.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Which category this expression belongs to.
    pub category: Category,
    /// One-line description.
    pub description: String,
    /// The expression source; this is what gets copied.
    pub code: String,
    /// Free-form tags used by search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Example use cases.
    #[serde(default)]
    pub examples: Vec<String>,
    pub difficulty: Difficulty,
    /// Optional animated preview location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_gif: Option<String>,
    /// Date string, display only.
    pub last_modified: String,
}

impl Entry {
    /// Check the fields a catalog relies on.
    pub fn validate(&self) -> LibraryResult<()> {
        if self.id.trim().is_empty() {
            return Err(LibraryError::InvalidEntry {
                id: self.id.clone(),
                reason: "id is empty".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(LibraryError::InvalidEntry {
                id: self.id.clone(),
                reason: "name is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Case-insensitive substring match against name, description, tags
    /// and category name. `needle` must already be lower-cased.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
            || self.category.name().to_lowercase().contains(needle)
    }

    /// `last_modified` parsed as `YYYY-MM-DD`, if it has that shape.
    pub fn last_modified_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.last_modified.trim(), "%Y-%m-%d").ok()
    }
}

/// Builder for constructing Entry instances ergonomically.
pub struct EntryBuilder {
    id: String,
    name: String,
    category: Category,
    description: String,
    code: String,
    tags: Vec<String>,
    examples: Vec<String>,
    difficulty: Difficulty,
    preview_gif: Option<String>,
    last_modified: String,
}

impl EntryBuilder {
    /// Create a new builder with the required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            code: String::new(),
            tags: Vec::new(),
            examples: Vec::new(),
            difficulty: Difficulty::Beginner,
            preview_gif: None,
            last_modified: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Append a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Append an example use case.
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn preview_gif(mut self, preview_gif: impl Into<String>) -> Self {
        self.preview_gif = Some(preview_gif.into());
        self
    }

    pub fn last_modified(mut self, last_modified: impl Into<String>) -> Self {
        self.last_modified = last_modified.into();
        self
    }

    /// Build the Entry.
    pub fn build(self) -> Entry {
        Entry {
            id: self.id,
            name: self.name,
            category: self.category,
            description: self.description,
            code: self.code,
            tags: self.tags,
            examples: self.examples,
            difficulty: self.difficulty,
            preview_gif: self.preview_gif,
            last_modified: self.last_modified,
        }
    }
}
