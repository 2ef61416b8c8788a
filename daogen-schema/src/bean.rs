use daogen_core::to_pascal_case;
use indexmap::IndexMap;

use crate::{PropertyDescriptor, singularize};

/// Everything the generator knows about one table's bean and DAO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanDescriptor {
    /// Backing table.
    pub table_name: String,
    /// Concrete bean class (e.g., "User").
    pub bean_class_name: String,
    /// Generated abstract bean class (e.g., "AbstractUser").
    pub base_bean_class_name: String,
    /// Concrete DAO class (e.g., "UserDao").
    pub dao_class_name: String,
    /// Generated abstract DAO class (e.g., "AbstractUserDao").
    pub base_dao_class_name: String,
    properties: IndexMap<String, PropertyDescriptor>,
}

impl BeanDescriptor {
    /// Derive class names from the table name.
    pub fn for_table(table_name: impl Into<String>) -> Self {
        let table_name = table_name.into();
        let bean = to_pascal_case(&singularize(&table_name));
        Self {
            base_bean_class_name: format!("Abstract{}", bean),
            dao_class_name: format!("{}Dao", bean),
            base_dao_class_name: format!("Abstract{}Dao", bean),
            bean_class_name: bean,
            table_name,
            properties: IndexMap::new(),
        }
    }

    /// Add a property; a property with the same name is replaced in place.
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    /// Properties in column order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.values()
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }
}
