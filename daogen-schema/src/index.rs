use daogen_core::to_pascal_case;

/// A table index that gets a dedicated finder on the DAO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Index name.
    pub name: String,
    /// Indexed columns, in index order.
    pub columns: Vec<String>,
    /// Whether the index is unique.
    pub unique: bool,
}

impl Index {
    pub fn new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
        unique: bool,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            unique,
        }
    }

    /// Name of the finder generated for this index.
    ///
    /// Unique indexes yield a single-result finder (`findOneBy...`).
    pub fn finder_name(&self) -> String {
        let columns: Vec<String> = self.columns.iter().map(|c| to_pascal_case(c)).collect();
        let prefix = if self.unique { "findOneBy" } else { "findBy" };
        format!("{}{}", prefix, columns.join("And"))
    }
}
