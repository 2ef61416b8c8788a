//! Foreign keys and the relation accessors derived from them.

use daogen_core::to_pascal_case;

use crate::singularize;

/// A foreign key constraint between two tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Constraint name.
    pub name: String,
    /// Table holding the constraint.
    pub local_table: String,
    /// Referencing columns.
    pub local_columns: Vec<String>,
    /// Referenced table.
    pub foreign_table: String,
    /// Referenced columns.
    pub foreign_columns: Vec<String>,
}

impl ForeignKey {
    /// Create a single-column foreign key.
    pub fn new(
        name: impl Into<String>,
        local_table: impl Into<String>,
        local_column: impl Into<String>,
        foreign_table: impl Into<String>,
        foreign_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            local_table: local_table.into(),
            local_columns: vec![local_column.into()],
            foreign_table: foreign_table.into(),
            foreign_columns: vec![foreign_column.into()],
        }
    }
}

/// A foreign key from another table pointing at this bean's table, exposed
/// as a "get many" accessor on the bean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectForeignKeyMethodDescriptor {
    /// The foreign key, as declared on the referencing table.
    pub foreign_key: ForeignKey,
    /// Table of the bean receiving the accessor.
    pub main_table: String,
    method_name: String,
}

impl DirectForeignKeyMethodDescriptor {
    /// Describe the accessor for `foreign_key` on the bean of `main_table`.
    pub fn new(foreign_key: ForeignKey, main_table: impl Into<String>) -> Self {
        let method_name = format!("get{}", to_pascal_case(&foreign_key.local_table));
        Self {
            foreign_key,
            main_table: main_table.into(),
            method_name,
        }
    }

    /// Name of the generated accessor (e.g., "getOrders").
    pub fn method_name(&self) -> &str {
        &self.method_name
    }
}

/// A pivot table linking two beans, exposed as get/has/add/set/remove
/// accessors on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotTableMethodsDescriptor {
    /// The pivot (join) table.
    pub pivot_table: String,
    /// Foreign key from the pivot table to this bean's table.
    pub local_foreign_key: ForeignKey,
    /// Foreign key from the pivot table to the related table.
    pub remote_foreign_key: ForeignKey,
}

impl PivotTableMethodsDescriptor {
    pub fn new(
        pivot_table: impl Into<String>,
        local_foreign_key: ForeignKey,
        remote_foreign_key: ForeignKey,
    ) -> Self {
        Self {
            pivot_table: pivot_table.into(),
            local_foreign_key,
            remote_foreign_key,
        }
    }

    /// Plural accessor stem (e.g., "Roles").
    pub fn plural_name(&self) -> String {
        to_pascal_case(&self.remote_foreign_key.foreign_table)
    }

    /// Singular accessor stem (e.g., "Role").
    pub fn singular_name(&self) -> String {
        to_pascal_case(&singularize(&self.remote_foreign_key.foreign_table))
    }

    pub fn getter_name(&self) -> String {
        format!("get{}", self.plural_name())
    }

    pub fn adder_name(&self) -> String {
        format!("add{}", self.singular_name())
    }

    pub fn remover_name(&self) -> String {
        format!("remove{}", self.singular_name())
    }

    pub fn hasser_name(&self) -> String {
        format!("has{}", self.singular_name())
    }

    pub fn setter_name(&self) -> String {
        format!("set{}", self.plural_name())
    }
}
