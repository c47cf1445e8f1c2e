use crate::domain::model::{ServiceCategory, ServiceEntry};

/// The fixed, ordered collection of services. Never mutated after load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    services: Vec<ServiceEntry>,
}

impl Catalog {
    pub fn new(services: Vec<ServiceEntry>) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &[ServiceEntry] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&ServiceEntry> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn by_category(&self, category: ServiceCategory) -> Vec<ServiceEntry> {
        self.services
            .iter()
            .filter(|service| service.category == category)
            .cloned()
            .collect()
    }
}

impl From<Vec<ServiceEntry>> for Catalog {
    fn from(services: Vec<ServiceEntry>) -> Self {
        Self::new(services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, category: ServiceCategory) -> ServiceEntry {
        ServiceEntry {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            features: vec![],
            category,
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new(vec![
            entry("civil-law", ServiceCategory::Civil),
            entry("tax-law", ServiceCategory::Business),
        ]);
        assert_eq!(
            catalog.get_by_id("tax-law").map(|s| s.category),
            Some(ServiceCategory::Business)
        );
        assert!(catalog.get_by_id("criminal-law").is_none());
        assert!(Catalog::default().get_by_id("civil-law").is_none());
    }

    #[test]
    fn test_by_category_keeps_catalog_order() {
        let catalog = Catalog::new(vec![
            entry("c", ServiceCategory::Civil),
            entry("b", ServiceCategory::Business),
            entry("a", ServiceCategory::Civil),
        ]);
        let ids: Vec<_> = catalog
            .by_category(ServiceCategory::Civil)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, ["c", "a"]);
        assert!(catalog.by_category(ServiceCategory::Digital).is_empty());
    }
}
