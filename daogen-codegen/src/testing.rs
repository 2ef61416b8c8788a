//! Test utilities for listener chains.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.
//!
//! [`ScriptedListener`] routes all stages of a family to one closure, so a
//! test can describe a listener's behaviour in a line or two and record which
//! stages reached it in a shared [`CallLog`].

use std::sync::{Arc, Mutex};

use daogen_core::{ClassSpec, FileArtifact, MethodSpec};
use daogen_schema::{
    BeanDescriptor, Configuration, DirectForeignKeyMethodDescriptor, Index,
    PivotTableMethodsDescriptor, PropertyDescriptor,
};
use eyre::{Result, eyre};

use crate::{
    listener::CodeGeneratorListener,
    slots::{ManyToManyAccessors, PropertyAccessors},
    stage::Stage,
};

/// Shared, ordered record of listener invocations.
///
/// Entries have the form `"<label>:<stage>"`.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, label: &str, stage: Stage) {
        self.0
            .lock()
            .expect("call log poisoned")
            .push(format!("{}:{}", label, stage));
    }

    /// Snapshot of the entries recorded so far.
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().expect("call log poisoned").clone()
    }

    /// Labels of the listeners that were called, in order.
    pub fn labels(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|e| e.split(':').next().unwrap_or_default().to_string())
            .collect()
    }
}

type FileHook = Box<dyn Fn(Stage, FileArtifact) -> Result<Option<FileArtifact>> + Send + Sync>;
type MethodHook = Box<dyn Fn(Stage, MethodSpec) -> Result<Option<MethodSpec>> + Send + Sync>;
type PropertyHook = Box<dyn Fn(PropertyAccessors) -> Result<PropertyAccessors> + Send + Sync>;
type ManyToManyHook =
    Box<dyn Fn(ManyToManyAccessors) -> Result<ManyToManyAccessors> + Send + Sync>;

/// A listener whose behaviour is supplied per stage family.
///
/// Unset hooks pass their input through unchanged.
pub struct ScriptedListener {
    label: String,
    log: Option<CallLog>,
    on_file: FileHook,
    on_method: MethodHook,
    on_property: PropertyHook,
    on_many_to_many: ManyToManyHook,
}

impl ScriptedListener {
    /// A pass-through listener.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            log: None,
            on_file: Box::new(|_, file| Ok(Some(file))),
            on_method: Box::new(|_, method| Ok(Some(method))),
            on_property: Box::new(|pair| Ok(pair)),
            on_many_to_many: Box::new(|group| Ok(group)),
        }
    }

    /// A listener that appends `suffix` to the name of every method it is
    /// given, in every slot that is present.
    pub fn suffix(label: impl Into<String>, suffix: &str) -> Self {
        let rename = {
            let suffix = suffix.to_string();
            move |m: MethodSpec| {
                let name = format!("{}{}", m.name, suffix);
                m.renamed(name)
            }
        };
        let (r1, r2, r3) = (rename.clone(), rename.clone(), rename);

        Self::new(label)
            .on_method(move |_, method| Ok(Some(r1(method))))
            .on_property(move |pair| {
                Ok(PropertyAccessors::new(
                    pair.getter.map(&r2),
                    pair.setter.map(&r2),
                ))
            })
            .on_many_to_many(move |mut group| {
                for slot in group.slots_mut() {
                    *slot = slot.take().map(&r3);
                }
                Ok(group)
            })
    }

    /// A listener that drops every artifact it is given.
    pub fn veto(label: impl Into<String>) -> Self {
        Self::new(label)
            .on_file(|_, _| Ok(None))
            .on_method(|_, _| Ok(None))
            .on_property(|_| Ok(PropertyAccessors::default()))
            .on_many_to_many(|_| Ok(ManyToManyAccessors::default()))
    }

    /// A listener that fails at every stage with `message`.
    pub fn failing(label: impl Into<String>, message: &str) -> Self {
        let message = message.to_string();
        let (m1, m2, m3, m4) = (
            message.clone(),
            message.clone(),
            message.clone(),
            message,
        );
        Self::new(label)
            .on_file(move |_, _| Err(eyre!("{}", m1)))
            .on_method(move |_, _| Err(eyre!("{}", m2)))
            .on_property(move |_| Err(eyre!("{}", m3)))
            .on_many_to_many(move |_| Err(eyre!("{}", m4)))
    }

    /// Record every call into `log`.
    pub fn recording(mut self, log: &CallLog) -> Self {
        self.log = Some(log.clone());
        self
    }

    pub fn on_file(
        mut self,
        hook: impl Fn(Stage, FileArtifact) -> Result<Option<FileArtifact>> + Send + Sync + 'static,
    ) -> Self {
        self.on_file = Box::new(hook);
        self
    }

    pub fn on_method(
        mut self,
        hook: impl Fn(Stage, MethodSpec) -> Result<Option<MethodSpec>> + Send + Sync + 'static,
    ) -> Self {
        self.on_method = Box::new(hook);
        self
    }

    pub fn on_property(
        mut self,
        hook: impl Fn(PropertyAccessors) -> Result<PropertyAccessors> + Send + Sync + 'static,
    ) -> Self {
        self.on_property = Box::new(hook);
        self
    }

    pub fn on_many_to_many(
        mut self,
        hook: impl Fn(ManyToManyAccessors) -> Result<ManyToManyAccessors> + Send + Sync + 'static,
    ) -> Self {
        self.on_many_to_many = Box::new(hook);
        self
    }

    /// Box this listener for use in a dispatcher.
    pub fn boxed(self) -> Box<dyn CodeGeneratorListener> {
        Box::new(self)
    }

    fn record(&self, stage: Stage) {
        if let Some(log) = &self.log {
            log.push(&self.label, stage);
        }
    }

    fn file(&self, stage: Stage, file: FileArtifact) -> Result<Option<FileArtifact>> {
        self.record(stage);
        (self.on_file)(stage, file)
    }

    fn method(&self, stage: Stage, method: MethodSpec) -> Result<Option<MethodSpec>> {
        self.record(stage);
        (self.on_method)(stage, method)
    }
}

impl CodeGeneratorListener for ScriptedListener {
    fn name(&self) -> &str {
        &self.label
    }

    fn on_base_bean_generated(
        &self,
        file: FileArtifact,
        _bean: &BeanDescriptor,
        _config: &Configuration,
    ) -> Result<Option<FileArtifact>> {
        self.file(Stage::BaseBean, file)
    }

    fn on_base_bean_constructor_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseBeanConstructor, method)
    }

    fn on_base_bean_property_generated(
        &self,
        accessors: PropertyAccessors,
        _property: &PropertyDescriptor,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<PropertyAccessors> {
        self.record(Stage::BaseBeanProperty);
        (self.on_property)(accessors)
    }

    fn on_base_bean_one_to_many_generated(
        &self,
        getter: MethodSpec,
        _descriptor: &DirectForeignKeyMethodDescriptor,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseBeanOneToMany, getter)
    }

    fn on_base_bean_many_to_many_generated(
        &self,
        accessors: ManyToManyAccessors,
        _pivot: &PivotTableMethodsDescriptor,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<ManyToManyAccessors> {
        self.record(Stage::BaseBeanManyToMany);
        (self.on_many_to_many)(accessors)
    }

    fn on_base_bean_json_serialize_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseBeanJsonSerialize, method)
    }

    fn on_base_bean_clone_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseBeanClone, method)
    }

    fn on_base_dao_generated(
        &self,
        file: FileArtifact,
        _bean: &BeanDescriptor,
        _config: &Configuration,
    ) -> Result<Option<FileArtifact>> {
        self.file(Stage::BaseDao, file)
    }

    fn on_base_dao_constructor_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoConstructor, method)
    }

    fn on_base_dao_save_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoSave, method)
    }

    fn on_base_dao_find_all_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoFindAll, method)
    }

    fn on_base_dao_get_by_id_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoGetById, method)
    }

    fn on_base_dao_delete_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoDelete, method)
    }

    fn on_base_dao_find_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoFind, method)
    }

    fn on_base_dao_find_from_sql_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoFindFromSql, method)
    }

    fn on_base_dao_find_from_raw_sql_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoFindFromRawSql, method)
    }

    fn on_base_dao_find_one_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoFindOne, method)
    }

    fn on_base_dao_find_one_from_sql_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoFindOneFromSql, method)
    }

    fn on_base_dao_set_default_sort_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoSetDefaultSort, method)
    }

    fn on_base_dao_find_by_index_generated(
        &self,
        method: MethodSpec,
        _index: &Index,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::BaseDaoFindByIndex, method)
    }

    fn on_dao_factory_generated(
        &self,
        file: FileArtifact,
        _beans: &[BeanDescriptor],
        _config: &Configuration,
    ) -> Result<Option<FileArtifact>> {
        self.file(Stage::DaoFactory, file)
    }

    fn on_dao_factory_constructor_generated(
        &self,
        method: MethodSpec,
        _beans: &[BeanDescriptor],
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::DaoFactoryConstructor, method)
    }

    fn on_dao_factory_getter_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::DaoFactoryGetter, method)
    }

    fn on_dao_factory_setter_generated(
        &self,
        method: MethodSpec,
        _bean: &BeanDescriptor,
        _config: &Configuration,
        _class: &ClassSpec,
    ) -> Result<Option<MethodSpec>> {
        self.method(Stage::DaoFactorySetter, method)
    }
}
