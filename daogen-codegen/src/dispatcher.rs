//! Ordered fan-out of stage calls across listeners.

use std::fmt;

use daogen_core::{ClassSpec, FileArtifact, MethodSpec};
use daogen_schema::{
    BeanDescriptor, Configuration, DirectForeignKeyMethodDescriptor, Index,
    PivotTableMethodsDescriptor, PropertyDescriptor,
};
use eyre::Result;
use tracing::{debug, trace, trace_span};

use crate::{
    listener::CodeGeneratorListener,
    slots::{ManyToManyAccessors, PropertyAccessors, SlotGroup},
    stage::Stage,
};

/// A listener that forwards every stage to an ordered list of listeners.
///
/// For each stage call, the artifact is handed to the first listener, its
/// result to the second, and so on. Once every slot of the stage has been
/// dropped, the remaining listeners are not called. The first listener error
/// ends the call and is returned as is.
///
/// The list is fixed at construction. Since the dispatcher is itself a
/// [`CodeGeneratorListener`], dispatchers can be nested.
///
/// # Example
///
/// ```ignore
/// let dispatcher = EventDispatcher::new(vec![
///     Box::new(TimestampableListener::default()),
///     Box::new(NoCloneListener),
/// ]);
///
/// let method = dispatcher.on_base_bean_clone_generated(clone, &bean, &config, &class)?;
/// if let Some(method) = method {
///     class.add_method(method);
/// }
/// ```
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<Box<dyn CodeGeneratorListener>>,
}

impl EventDispatcher {
    /// Create a dispatcher over the given listeners, called in list order.
    pub fn new(listeners: Vec<Box<dyn CodeGeneratorListener>>) -> Self {
        Self { listeners }
    }

    /// Number of listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if there are no listeners.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Listener names, in call order.
    pub fn listener_names(&self) -> impl Iterator<Item = &str> {
        self.listeners.iter().map(|l| l.name())
    }

    /// Thread `slots` through every listener until the group is vacant.
    fn fan_out<S: SlotGroup>(
        &self,
        stage: Stage,
        mut slots: S,
        mut invoke: impl FnMut(&dyn CodeGeneratorListener, S) -> Result<S>,
    ) -> Result<S> {
        let _span = trace_span!("dispatch", stage = %stage).entered();

        for (position, listener) in self.listeners.iter().enumerate() {
            trace!(
                listener = listener.name(),
                position,
                occupied = slots.occupied(),
                "invoking listener"
            );
            slots = invoke(&**listener, slots)?;

            if slots.is_vacant() {
                debug!(
                    stage = %stage,
                    listener = listener.name(),
                    skipped = self.listeners.len() - position - 1,
                    "all slots vetoed"
                );
                break;
            }
        }

        Ok(slots)
    }

    /// Single-artifact stages start present; the group is vacant once a
    /// listener returns `None`, so later listeners always get a value.
    fn fan_out_one<T>(
        &self,
        stage: Stage,
        artifact: T,
        mut invoke: impl FnMut(&dyn CodeGeneratorListener, T) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        self.fan_out(stage, Some(artifact), |listener, slot| match slot {
            Some(artifact) => invoke(listener, artifact),
            None => Ok(None),
        })
    }
}

impl FromIterator<Box<dyn CodeGeneratorListener>> for EventDispatcher {
    fn from_iter<I: IntoIterator<Item = Box<dyn CodeGeneratorListener>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listener_names().collect::<Vec<_>>())
            .finish()
    }
}

impl CodeGeneratorListener for EventDispatcher {
    fn name(&self) -> &str {
        "event_dispatcher"
    }

    fn on_base_bean_generated(
        &self,
        file: FileArtifact,
        bean: &BeanDescriptor,
        config: &Configuration,
    ) -> Result<Option<FileArtifact>> {
        self.fan_out_one(Stage::BaseBean, file, |listener, file| {
            listener.on_base_bean_generated(file, bean, config)
        })
    }

    fn on_base_bean_constructor_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseBeanConstructor, method, |listener, method| {
            listener.on_base_bean_constructor_generated(method, bean, config, class)
        })
    }

    fn on_base_bean_property_generated(
        &self,
        accessors: PropertyAccessors,
        property: &PropertyDescriptor,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<PropertyAccessors> {
        self.fan_out(Stage::BaseBeanProperty, accessors, |listener, accessors| {
            listener.on_base_bean_property_generated(accessors, property, bean, config, class)
        })
    }

    fn on_base_bean_one_to_many_generated(
        &self,
        getter: MethodSpec,
        descriptor: &DirectForeignKeyMethodDescriptor,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseBeanOneToMany, getter, |listener, getter| {
            listener.on_base_bean_one_to_many_generated(getter, descriptor, bean, config, class)
        })
    }

    fn on_base_bean_many_to_many_generated(
        &self,
        accessors: ManyToManyAccessors,
        pivot: &PivotTableMethodsDescriptor,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<ManyToManyAccessors> {
        self.fan_out(Stage::BaseBeanManyToMany, accessors, |listener, accessors| {
            listener.on_base_bean_many_to_many_generated(accessors, pivot, bean, config, class)
        })
    }

    fn on_base_bean_json_serialize_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseBeanJsonSerialize, method, |listener, method| {
            listener.on_base_bean_json_serialize_generated(method, bean, config, class)
        })
    }

    fn on_base_bean_clone_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseBeanClone, method, |listener, method| {
            listener.on_base_bean_clone_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_generated(
        &self,
        file: FileArtifact,
        bean: &BeanDescriptor,
        config: &Configuration,
    ) -> Result<Option<FileArtifact>> {
        self.fan_out_one(Stage::BaseDao, file, |listener, file| {
            listener.on_base_dao_generated(file, bean, config)
        })
    }

    fn on_base_dao_constructor_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoConstructor, method, |listener, method| {
            listener.on_base_dao_constructor_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_save_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoSave, method, |listener, method| {
            listener.on_base_dao_save_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_find_all_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoFindAll, method, |listener, method| {
            listener.on_base_dao_find_all_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_get_by_id_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoGetById, method, |listener, method| {
            listener.on_base_dao_get_by_id_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_delete_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoDelete, method, |listener, method| {
            listener.on_base_dao_delete_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_find_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoFind, method, |listener, method| {
            listener.on_base_dao_find_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_find_from_sql_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoFindFromSql, method, |listener, method| {
            listener.on_base_dao_find_from_sql_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_find_from_raw_sql_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoFindFromRawSql, method, |listener, method| {
            listener.on_base_dao_find_from_raw_sql_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_find_one_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoFindOne, method, |listener, method| {
            listener.on_base_dao_find_one_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_find_one_from_sql_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoFindOneFromSql, method, |listener, method| {
            listener.on_base_dao_find_one_from_sql_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_set_default_sort_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoSetDefaultSort, method, |listener, method| {
            listener.on_base_dao_set_default_sort_generated(method, bean, config, class)
        })
    }

    fn on_base_dao_find_by_index_generated(
        &self,
        method: MethodSpec,
        index: &Index,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::BaseDaoFindByIndex, method, |listener, method| {
            listener.on_base_dao_find_by_index_generated(method, index, bean, config, class)
        })
    }

    fn on_dao_factory_generated(
        &self,
        file: FileArtifact,
        beans: &[BeanDescriptor],
        config: &Configuration,
    ) -> Result<Option<FileArtifact>> {
        self.fan_out_one(Stage::DaoFactory, file, |listener, file| {
            listener.on_dao_factory_generated(file, beans, config)
        })
    }

    fn on_dao_factory_constructor_generated(
        &self,
        method: MethodSpec,
        beans: &[BeanDescriptor],
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::DaoFactoryConstructor, method, |listener, method| {
            listener.on_dao_factory_constructor_generated(method, beans, config, class)
        })
    }

    fn on_dao_factory_getter_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::DaoFactoryGetter, method, |listener, method| {
            listener.on_dao_factory_getter_generated(method, bean, config, class)
        })
    }

    fn on_dao_factory_setter_generated(
        &self,
        method: MethodSpec,
        bean: &BeanDescriptor,
        config: &Configuration,
        class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.fan_out_one(Stage::DaoFactorySetter, method, |listener, method| {
            listener.on_dao_factory_setter_generated(method, bean, config, class)
        })
    }
}
