use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use super::class::ClassSpec;

/// A generated source file holding a single class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    path: PathBuf,
    namespace: String,
    uses: IndexSet<String>,
    doc: Option<String>,
    class: ClassSpec,
}

impl FileArtifact {
    /// Create a new file at the given path (relative to the output root)
    pub fn new(path: impl Into<PathBuf>, namespace: impl Into<String>, class: ClassSpec) -> Self {
        Self {
            path: path.into(),
            namespace: namespace.into(),
            uses: IndexSet::new(),
            doc: None,
            class,
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file namespace
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the imported names in first-use order
    pub fn uses(&self) -> impl Iterator<Item = &str> {
        self.uses.iter().map(String::as_str)
    }

    /// Get the file-level doc block
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Get the class defined by this file
    pub fn class(&self) -> &ClassSpec {
        &self.class
    }

    /// Get mutable access to the class defined by this file
    pub fn class_mut(&mut self) -> &mut ClassSpec {
        &mut self.class
    }

    /// Add an import; duplicates are ignored
    pub fn with_use(mut self, name: impl Into<String>) -> Self {
        self.uses.insert(name.into());
        self
    }

    /// Set the file-level doc block
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Move the file to another path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Fully qualified name of the class in this file
    pub fn qualified_class_name(&self) -> String {
        if self.namespace.is_empty() {
            self.class.name.clone()
        } else {
            format!("{}\\{}", self.namespace, self.class.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_bean_file() -> FileArtifact {
        FileArtifact::new(
            "Generated/AbstractUserBean.php",
            "App\\Beans\\Generated",
            ClassSpec::new("AbstractUserBean"),
        )
    }

    #[test]
    fn test_uses_are_deduplicated_in_order() {
        let file = user_bean_file()
            .with_use("JsonSerializable")
            .with_use("App\\Beans\\RoleBean")
            .with_use("JsonSerializable");

        let uses: Vec<_> = file.uses().collect();
        assert_eq!(uses, vec!["JsonSerializable", "App\\Beans\\RoleBean"]);
    }

    #[test]
    fn test_qualified_class_name() {
        assert_eq!(
            user_bean_file().qualified_class_name(),
            "App\\Beans\\Generated\\AbstractUserBean"
        );

        let global = FileArtifact::new("Foo.php", "", ClassSpec::new("Foo"));
        assert_eq!(global.qualified_class_name(), "Foo");
    }

    #[test]
    fn test_with_path_and_doc() {
        let file = user_bean_file()
            .with_path("Custom/AbstractUserBean.php")
            .with_doc("This file has been automatically generated.");

        assert_eq!(file.path(), Path::new("Custom/AbstractUserBean.php"));
        assert_eq!(file.doc(), Some("This file has been automatically generated."));
    }

    #[test]
    fn test_class_mut() {
        let mut file = user_bean_file();
        file.class_mut().add_method(crate::MethodSpec::new("getId"));
        assert!(file.class().has_method("getId"));
    }
}
