//! The generation stage contract.

use daogen_core::{ClassSpec, FileArtifact, MethodSpec};
use daogen_schema::{
    BeanDescriptor, Configuration, DirectForeignKeyMethodDescriptor, Index,
    PivotTableMethodsDescriptor, PropertyDescriptor,
};
use eyre::Result;

use crate::slots::{ManyToManyAccessors, PropertyAccessors};

/// A listener notified at every generation stage.
///
/// Each method receives the candidate artifact for its stage together with
/// read-only context, and returns what should take its place: the same
/// artifact, a rewritten one, or `None` to drop it from the output. Accessor
/// stages carry several slots, each of which may be dropped independently.
///
/// Every method defaults to passing its input through unchanged, so a
/// listener only overrides the stages it cares about.
///
/// A listener may put an artifact back into a slot it received empty. This is
/// allowed; listeners that do so should say so in their documentation, since
/// later listeners will see the slot reappear.
///
/// # Example
///
/// ```ignore
/// struct NoClone;
///
/// impl CodeGeneratorListener for NoClone {
///     fn on_base_bean_clone_generated(
///         &self,
///         _method: MethodSpec,
///         _bean: &BeanDescriptor,
///         _config: &Configuration,
///         _class: &ClassSpec,
///     ) -> Result<Option<MethodSpec>> {
///         Ok(None)
///     }
/// }
/// ```
///
/// # Errors
///
/// Any method may return an error to abort generation. Errors are passed
/// back to the generator untouched.
#[allow(unused_variables)]
pub trait CodeGeneratorListener: Send + Sync {
    /// The name of this listener (for logging).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called when the base bean file has been generated.
    fn on_base_bean_generated(
        &self,
        file: FileArtifact,
        bean: &BeanDescriptor,
        config: &Configuration,
    ) -> Result<Option<FileArtifact>> {
        Ok(Some(file))
    }

    fn on_base_bean_constructor_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    /// Called when a column is turned into a getter/setter pair.
    ///
    /// Either accessor may already be absent when this is called, if an
    /// earlier listener dropped it.
    fn on_base_bean_property_generated(
        &self,
        accessors: PropertyAccessors,
        property: &PropertyDescriptor,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<PropertyAccessors> {
        Ok(accessors)
    }

    /// Called when a foreign key from another table is turned into a
    /// "get many objects" method.
    fn on_base_bean_one_to_many_generated(
        &self,
        getter: MethodSpec,
        descriptor: &DirectForeignKeyMethodDescriptor,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(getter))
    }

    /// Called when a pivot table is turned into get/has/add/set/remove
    /// methods.
    fn on_base_bean_many_to_many_generated(
        &self,
        accessors: ManyToManyAccessors,
        pivot: &PivotTableMethodsDescriptor,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<ManyToManyAccessors> {
        Ok(accessors)
    }

    fn on_base_bean_json_serialize_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_bean_clone_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    /// Called when the base DAO file has been generated.
    fn on_base_dao_generated(
        &self,
        file: FileArtifact,
        bean: &BeanDescriptor,
        config: &Configuration,
    ) -> Result<Option<FileArtifact>> {
        Ok(Some(file))
    }

    fn on_base_dao_constructor_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_dao_save_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_dao_find_all_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_dao_get_by_id_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_dao_delete_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_dao_find_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_dao_find_from_sql_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_dao_find_from_raw_sql_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_dao_find_one_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_dao_find_one_from_sql_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_base_dao_set_default_sort_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    /// Called for the finder generated from a table index.
    fn on_base_dao_find_by_index_generated(
        &self,
        method: MethodSpec,
        index: &Index,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    /// Called when the DAO factory file has been generated.
    fn on_dao_factory_generated(
        &self,
        file: FileArtifact,
        beans: &[BeanDescriptor],
        config: &Configuration,
    ) -> Result<Option<FileArtifact>> {
        Ok(Some(file))
    }

    fn on_dao_factory_constructor_generated(
        &self,
        method: MethodSpec,
        beans: &[BeanDescriptor],
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_dao_factory_getter_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }

    fn on_dao_factory_setter_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        Ok(Some(method))
    }
}
