use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Civil,
    Business,
    Family,
    RealEstate,
    Health,
    Labor,
    Tax,
    Digital,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 8] = [
        ServiceCategory::Civil,
        ServiceCategory::Business,
        ServiceCategory::Family,
        ServiceCategory::RealEstate,
        ServiceCategory::Health,
        ServiceCategory::Labor,
        ServiceCategory::Tax,
        ServiceCategory::Digital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Civil => "civil",
            ServiceCategory::Business => "business",
            ServiceCategory::Family => "family",
            ServiceCategory::RealEstate => "real-estate",
            ServiceCategory::Health => "health",
            ServiceCategory::Labor => "labor",
            ServiceCategory::Tax => "tax",
            ServiceCategory::Digital => "digital",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown service category: {}", s))
    }
}

/// A single entry of the service catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub category: ServiceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Id,
}

impl SortField {
    pub fn key<'a>(&self, entry: &'a ServiceEntry) -> &'a str {
        match self {
            SortField::Title => &entry.title,
            SortField::Id => &entry.id,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// The caller's current category/search/sort intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub category: Option<ServiceCategory>,
    pub search: String,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            category: None,
            search: String::new(),
            sort_by: Some(SortField::Title),
            sort_order: SortOrder::Asc,
        }
    }
}

impl FilterSpec {
    /// Shallow merge: only the fields present in `update` change.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sort_order) = update.sort_order {
            self.sort_order = sort_order;
        }
    }
}

/// Partial [`FilterSpec`]. `category` and `sort_by` use a nested option so
/// that an update can clear them as well as leave them untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub category: Option<Option<ServiceCategory>>,
    pub search: Option<String>,
    pub sort_by: Option<Option<SortField>>,
    pub sort_order: Option<SortOrder>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Option<ServiceCategory>) -> Self {
        self.category = Some(category);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort_by(mut self, sort_by: Option<SortField>) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    #[serde(rename = "URGENT")]
    Urgent,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "NORMAL")]
    Normal,
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UrgencyLevel::Urgent => "URGENT",
            UrgencyLevel::High => "HIGH",
            UrgencyLevel::Normal => "NORMAL",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeArea {
    Civil,
    Business,
    Family,
    Health,
    Labor,
    Tax,
    GeneralConsultation,
}

impl PracticeArea {
    pub fn label(&self) -> &'static str {
        match self {
            PracticeArea::Civil => "Civil Law",
            PracticeArea::Business => "Business Law",
            PracticeArea::Family => "Family Law",
            PracticeArea::Health => "Health Law",
            PracticeArea::Labor => "Labor Law",
            PracticeArea::Tax => "Tax Law",
            PracticeArea::GeneralConsultation => "General Consultation",
        }
    }
}

impl fmt::Display for PracticeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An outgoing contact-form message. Form validation happens upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }
}
