pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::CatalogConfig;
pub use crate::core::{
    catalog::Catalog,
    classifier::{classify_practice_area, classify_urgency, Classification, Classifier},
    query::{compute_filtered, QueryEngine},
    submission::{compose, OutgoingSubmission, SubmissionSettings},
};
pub use crate::domain::model::{
    ContactMessage, FilterSpec, FilterUpdate, PracticeArea, ServiceCategory, ServiceEntry,
    SortField, SortOrder, UrgencyLevel,
};
pub use crate::utils::error::{LawdeskError, Result};
