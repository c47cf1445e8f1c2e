pub mod catalog;
pub mod classifier;
pub mod query;
pub mod submission;

pub use crate::domain::model::{
    ContactMessage, FilterSpec, FilterUpdate, PracticeArea, ServiceCategory, ServiceEntry,
    SortField, SortOrder, UrgencyLevel,
};
pub use crate::domain::ports::CatalogProvider;
pub use crate::utils::error::Result;
