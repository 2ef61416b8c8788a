use daogen_core::{TypeHint, getter_name, setter_name, to_camel_case};

use crate::{ForeignKey, singularize};

/// What a bean property is backed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    /// A plain column.
    Scalar {
        /// Type exposed by the accessors.
        type_hint: TypeHint,
    },
    /// A foreign key, exposed as the referenced bean.
    ForeignKey(ForeignKey),
}

/// A bean property turned into a getter/setter pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name (camelCase).
    pub name: String,
    /// Backing column.
    pub column: String,
    /// Whether the column accepts null.
    pub nullable: bool,
    /// What backs the property.
    pub kind: PropertyKind,
}

impl PropertyDescriptor {
    /// Describe a plain column.
    pub fn scalar(column: impl Into<String>, type_hint: TypeHint) -> Self {
        let column = column.into();
        Self {
            name: to_camel_case(&column),
            column,
            nullable: false,
            kind: PropertyKind::Scalar { type_hint },
        }
    }

    /// Describe a single-column foreign key; the property is named after the
    /// referenced table.
    pub fn foreign_key(foreign_key: ForeignKey) -> Self {
        let column = foreign_key.local_columns.join("_");
        Self {
            name: to_camel_case(&singularize(&foreign_key.foreign_table)),
            column,
            nullable: false,
            kind: PropertyKind::ForeignKey(foreign_key),
        }
    }

    /// Mark the property nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Check if this property is backed by a foreign key.
    pub fn is_foreign_key(&self) -> bool {
        matches!(self.kind, PropertyKind::ForeignKey(_))
    }

    /// Name of the generated getter.
    pub fn getter_name(&self) -> String {
        getter_name(&self.name)
    }

    /// Name of the generated setter.
    pub fn setter_name(&self) -> String {
        setter_name(&self.name)
    }
}
