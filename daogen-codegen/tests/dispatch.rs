use std::sync::{Arc, Mutex};

use daogen_codegen::{
    CodeGeneratorListener, EventDispatcher, ManyToManyAccessors, PropertyAccessors, Stage,
    testing::{CallLog, ScriptedListener},
};
use daogen_core::{ClassSpec, FileArtifact, MethodSpec, TypeHint};
use daogen_schema::{
    BeanDescriptor, Configuration, DirectForeignKeyMethodDescriptor, ForeignKey, Index,
    PivotTableMethodsDescriptor, PropertyDescriptor,
};

struct Fixture {
    bean: BeanDescriptor,
    config: Configuration,
    class: ClassSpec,
    property: PropertyDescriptor,
    one_to_many: DirectForeignKeyMethodDescriptor,
    pivot: PivotTableMethodsDescriptor,
    index: Index,
}

impl Fixture {
    fn new() -> Self {
        let property = PropertyDescriptor::scalar("login", TypeHint::named("string"));
        Self {
            bean: BeanDescriptor::for_table("users").with_property(property.clone()),
            config: Configuration::default(),
            class: ClassSpec::new("AbstractUser"),
            property,
            one_to_many: DirectForeignKeyMethodDescriptor::new(
                ForeignKey::new("fk_orders_user", "orders", "user_id", "users", "id"),
                "users",
            ),
            pivot: PivotTableMethodsDescriptor::new(
                "users_roles",
                ForeignKey::new("fk_ur_user", "users_roles", "user_id", "users", "id"),
                ForeignKey::new("fk_ur_role", "users_roles", "role_id", "roles", "id"),
            ),
            index: Index::new("uniq_users_login", ["login"], true),
        }
    }

    fn accessors(&self) -> PropertyAccessors {
        PropertyAccessors::both(
            MethodSpec::new(self.property.getter_name()).line("return $this->get('login');"),
            MethodSpec::new(self.property.setter_name()).line("$this->set('login', $login);"),
        )
    }

    fn many_to_many(&self) -> ManyToManyAccessors {
        ManyToManyAccessors::all(
            MethodSpec::new(self.pivot.getter_name()),
            MethodSpec::new(self.pivot.hasser_name()),
            MethodSpec::new(self.pivot.adder_name()),
            MethodSpec::new(self.pivot.setter_name()),
            MethodSpec::new(self.pivot.remover_name()),
        )
    }

    fn bean_file(&self) -> FileArtifact {
        FileArtifact::new(
            "Generated/AbstractUser.php",
            self.config.generated_bean_namespace(),
            self.class.clone(),
        )
    }

    fn run_property(
        &self,
        listener: &dyn CodeGeneratorListener,
        accessors: PropertyAccessors,
    ) -> PropertyAccessors {
        listener
            .on_base_bean_property_generated(
                accessors,
                &self.property,
                &self.bean,
                &self.config,
                &self.class,
            )
            .unwrap()
    }

    fn run_many(
        &self,
        listener: &dyn CodeGeneratorListener,
        accessors: ManyToManyAccessors,
    ) -> ManyToManyAccessors {
        listener
            .on_base_bean_many_to_many_generated(
                accessors,
                &self.pivot,
                &self.bean,
                &self.config,
                &self.class,
            )
            .unwrap()
    }

    fn run_save(&self, listener: &dyn CodeGeneratorListener, method: MethodSpec) -> Option<MethodSpec> {
        listener
            .on_base_dao_save_generated(method, &self.bean, &self.config, &self.class)
            .unwrap()
    }
}

fn recording(labels: &[&str], log: &CallLog) -> EventDispatcher {
    labels
        .iter()
        .map(|label| ScriptedListener::new(*label).recording(log).boxed())
        .collect()
}

#[test]
fn test_pass_through_listeners_preserve_every_stage() {
    let fx = Fixture::new();
    let log = CallLog::new();
    let dispatcher = recording(&["a", "b", "c"], &log);
    let method = MethodSpec::new("m").line("return 1;");
    let beans = std::slice::from_ref(&fx.bean);
    let (bean, config, class) = (&fx.bean, &fx.config, &fx.class);

    let file = fx.bean_file();
    assert_eq!(
        dispatcher.on_base_bean_generated(file.clone(), bean, config).unwrap(),
        Some(file.clone())
    );
    assert_eq!(
        dispatcher.on_base_dao_generated(file.clone(), bean, config).unwrap(),
        Some(file.clone())
    );
    assert_eq!(
        dispatcher.on_dao_factory_generated(file.clone(), beans, config).unwrap(),
        Some(file)
    );
    assert_eq!(fx.run_property(&dispatcher, fx.accessors()), fx.accessors());
    assert_eq!(fx.run_many(&dispatcher, fx.many_to_many()), fx.many_to_many());

    let d = &dispatcher;
    let m = || method.clone();
    let results = vec![
        d.on_base_bean_constructor_generated(m(), bean, config, class),
        d.on_base_bean_one_to_many_generated(m(), &fx.one_to_many, bean, config, class),
        d.on_base_bean_json_serialize_generated(m(), bean, config, class),
        d.on_base_bean_clone_generated(m(), bean, config, class),
        d.on_base_dao_constructor_generated(m(), bean, config, class),
        d.on_base_dao_save_generated(m(), bean, config, class),
        d.on_base_dao_find_all_generated(m(), bean, config, class),
        d.on_base_dao_get_by_id_generated(m(), bean, config, class),
        d.on_base_dao_delete_generated(m(), bean, config, class),
        d.on_base_dao_find_generated(m(), bean, config, class),
        d.on_base_dao_find_from_sql_generated(m(), bean, config, class),
        d.on_base_dao_find_from_raw_sql_generated(m(), bean, config, class),
        d.on_base_dao_find_one_generated(m(), bean, config, class),
        d.on_base_dao_find_one_from_sql_generated(m(), bean, config, class),
        d.on_base_dao_set_default_sort_generated(m(), bean, config, class),
        d.on_base_dao_find_by_index_generated(m(), &fx.index, bean, config, class),
        d.on_dao_factory_constructor_generated(m(), beans, config, class),
        d.on_dao_factory_getter_generated(m(), bean, config, class),
        d.on_dao_factory_setter_generated(m(), bean, config, class),
    ];
    for result in results {
        assert_eq!(result.unwrap(), Some(method.clone()));
    }

    // Every listener saw every stage exactly once.
    let entries = log.entries();
    assert_eq!(entries.len(), Stage::ALL.len() * 3);
    for stage in Stage::ALL {
        for label in ["a", "b", "c"] {
            let entry = format!("{}:{}", label, stage);
            assert_eq!(entries.iter().filter(|e| **e == entry).count(), 1, "{entry}");
        }
    }
}

#[test]
fn test_single_slot_veto_stops_dispatch() {
    let fx = Fixture::new();
    let log = CallLog::new();
    let dispatcher = EventDispatcher::new(vec![
        ScriptedListener::new("p1").recording(&log).boxed(),
        ScriptedListener::veto("p2").recording(&log).boxed(),
        ScriptedListener::suffix("p3", "Resurrected")
            .on_method(|_, _| Ok(Some(MethodSpec::new("fromP3"))))
            .recording(&log)
            .boxed(),
    ]);

    assert_eq!(fx.run_save(&dispatcher, MethodSpec::new("save")), None);
    assert_eq!(log.labels(), vec!["p1", "p2"]);
}

#[test]
fn test_file_veto_stops_dispatch() {
    let fx = Fixture::new();
    let log = CallLog::new();
    let dispatcher = EventDispatcher::new(vec![
        ScriptedListener::veto("drop").recording(&log).boxed(),
        ScriptedListener::new("after").recording(&log).boxed(),
    ]);

    let result = dispatcher
        .on_base_dao_generated(fx.bean_file(), &fx.bean, &fx.config)
        .unwrap();
    assert!(result.is_none());
    assert_eq!(log.entries(), vec!["drop:base_dao"]);
}

#[test]
fn test_partial_veto_keeps_dispatching_property_pair() {
    let fx = Fixture::new();
    let log = CallLog::new();
    let seen = Arc::new(Mutex::new(None));
    let seen_by_p2 = seen.clone();

    let dispatcher = EventDispatcher::new(vec![
        ScriptedListener::new("p1")
            .on_property(|pair| Ok(PropertyAccessors::new(None, pair.setter)))
            .recording(&log)
            .boxed(),
        ScriptedListener::new("p2")
            .on_property(move |pair| {
                *seen_by_p2.lock().unwrap() = Some(pair);
                Ok(PropertyAccessors::default())
            })
            .recording(&log)
            .boxed(),
        ScriptedListener::new("p3").recording(&log).boxed(),
    ]);

    let result = fx.run_property(&dispatcher, fx.accessors());
    assert_eq!(result, PropertyAccessors::default());
    assert_eq!(log.labels(), vec!["p1", "p2"]);

    let seen = seen.lock().unwrap().take().expect("p2 should have been called");
    assert!(seen.getter.is_none());
    assert_eq!(seen.setter.map(|m| m.name).as_deref(), Some("setLogin"));
}

#[test]
fn test_setter_only_veto_leaves_getter_for_later_listeners() {
    let fx = Fixture::new();
    let dispatcher = EventDispatcher::new(vec![
        ScriptedListener::new("no-setter")
            .on_property(|pair| Ok(PropertyAccessors::new(pair.getter, None)))
            .boxed(),
        ScriptedListener::suffix("rename", "Value").boxed(),
    ]);

    let result = fx.run_property(&dispatcher, fx.accessors());
    let names: Vec<_> = result.into_methods().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["getLoginValue"]);
}

#[test]
fn test_many_to_many_with_no_listeners_is_identity() {
    let fx = Fixture::new();
    let dispatcher = EventDispatcher::default();

    assert_eq!(fx.run_many(&dispatcher, fx.many_to_many()), fx.many_to_many());
}

#[test]
fn test_many_to_many_stops_only_when_all_five_are_vetoed() {
    let fx = Fixture::new();
    let log = CallLog::new();
    let dispatcher = EventDispatcher::new(vec![
        ScriptedListener::new("keep-getter")
            .on_many_to_many(|group| {
                Ok(ManyToManyAccessors {
                    getter: group.getter,
                    ..Default::default()
                })
            })
            .recording(&log)
            .boxed(),
        ScriptedListener::new("observer").recording(&log).boxed(),
        ScriptedListener::veto("drop-all").recording(&log).boxed(),
        ScriptedListener::new("unreached").recording(&log).boxed(),
    ]);

    let result = fx.run_many(&dispatcher, fx.many_to_many());
    assert_eq!(result, ManyToManyAccessors::default());
    assert_eq!(log.labels(), vec!["keep-getter", "observer", "drop-all"]);
}

#[test]
fn test_composition_order_is_list_order() {
    let fx = Fixture::new();
    let ab = EventDispatcher::new(vec![
        ScriptedListener::suffix("a", "A").boxed(),
        ScriptedListener::suffix("b", "B").boxed(),
    ]);
    let ba = EventDispatcher::new(vec![
        ScriptedListener::suffix("b", "B").boxed(),
        ScriptedListener::suffix("a", "A").boxed(),
    ]);

    let forward = fx.run_save(&ab, MethodSpec::new("save")).map(|m| m.name);
    let reverse = fx.run_save(&ba, MethodSpec::new("save")).map(|m| m.name);

    assert_eq!(forward.as_deref(), Some("saveAB"));
    assert_eq!(reverse.as_deref(), Some("saveBA"));

    let pair = fx.run_property(&ab, fx.accessors());
    let names: Vec<_> = pair.into_methods().into_iter().map(|m| m.name).collect();
    insta::assert_snapshot!(names.join(","), @"getLoginAB,setLoginAB");
}

#[test]
fn test_listener_error_aborts_and_surfaces_unchanged() {
    let fx = Fixture::new();
    let log = CallLog::new();
    let dispatcher = EventDispatcher::new(vec![
        ScriptedListener::suffix("p1", "X").recording(&log).boxed(),
        ScriptedListener::failing("p2", "column 'login' has no type").recording(&log).boxed(),
        ScriptedListener::new("p3").recording(&log).boxed(),
    ]);

    let err = dispatcher
        .on_base_dao_find_by_index_generated(
            MethodSpec::new(fx.index.finder_name()),
            &fx.index,
            &fx.bean,
            &fx.config,
            &fx.class,
        )
        .unwrap_err();

    assert_eq!(err.to_string(), "column 'login' has no type");
    assert_eq!(err.chain().count(), 1);
    assert_eq!(log.labels(), vec!["p1", "p2"]);
}

#[test]
fn test_composite_error_aborts() {
    let fx = Fixture::new();
    let log = CallLog::new();
    let dispatcher = EventDispatcher::new(vec![
        ScriptedListener::failing("broken", "pivot misconfigured").recording(&log).boxed(),
        ScriptedListener::new("after").recording(&log).boxed(),
    ]);

    let err = dispatcher
        .on_base_bean_many_to_many_generated(
            fx.many_to_many(),
            &fx.pivot,
            &fx.bean,
            &fx.config,
            &fx.class,
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "pivot misconfigured");
    assert_eq!(log.entries(), vec!["broken:base_bean_many_to_many"]);
}

#[test]
fn test_listener_may_resurrect_absent_slot() {
    let fx = Fixture::new();
    let dispatcher = EventDispatcher::new(vec![
        ScriptedListener::new("drop-getter")
            .on_property(|pair| Ok(PropertyAccessors::new(None, pair.setter)))
            .boxed(),
        ScriptedListener::new("restore-getter")
            .on_property(|pair| {
                Ok(PropertyAccessors::new(
                    pair.getter.or_else(|| Some(MethodSpec::new("getLogin"))),
                    pair.setter,
                ))
            })
            .boxed(),
    ]);

    let result = fx.run_property(&dispatcher, fx.accessors());
    assert_eq!(result.getter.map(|m| m.name).as_deref(), Some("getLogin"));
    assert!(result.setter.is_some());
}

#[test]
fn test_composite_starting_vacant_still_reaches_first_listener() {
    let fx = Fixture::new();
    let log = CallLog::new();
    let dispatcher = recording(&["first", "second"], &log);

    let result = fx.run_property(&dispatcher, PropertyAccessors::default());
    assert_eq!(result, PropertyAccessors::default());
    assert_eq!(log.labels(), vec!["first"]);
}

#[test]
fn test_nested_dispatchers_match_flattened_list() {
    let fx = Fixture::new();
    let nested_log = CallLog::new();
    let flat_log = CallLog::new();

    let inner = EventDispatcher::new(vec![
        ScriptedListener::suffix("b", "B").recording(&nested_log).boxed(),
        ScriptedListener::veto("v").recording(&nested_log).boxed(),
    ]);
    let nested = EventDispatcher::new(vec![
        ScriptedListener::suffix("a", "A").recording(&nested_log).boxed(),
        Box::new(inner),
        ScriptedListener::new("c").recording(&nested_log).boxed(),
    ]);
    let flat = EventDispatcher::new(vec![
        ScriptedListener::suffix("a", "A").recording(&flat_log).boxed(),
        ScriptedListener::suffix("b", "B").recording(&flat_log).boxed(),
        ScriptedListener::veto("v").recording(&flat_log).boxed(),
        ScriptedListener::new("c").recording(&flat_log).boxed(),
    ]);

    assert_eq!(fx.run_save(&nested, MethodSpec::new("save")), None);
    assert_eq!(fx.run_save(&flat, MethodSpec::new("save")), None);
    assert_eq!(nested_log.entries(), flat_log.entries());
    assert_eq!(
        nested.listener_names().collect::<Vec<_>>(),
        vec!["a", "event_dispatcher", "c"]
    );
}

#[test]
fn test_context_is_passed_through_unchanged() {
    let fx = Fixture::new();
    let class_before = fx.class.clone();
    let bean_before = fx.bean.clone();

    struct AssertContext {
        expected_class: String,
    }

    impl CodeGeneratorListener for AssertContext {
        fn on_base_bean_clone_generated(
            &self,
            method: MethodSpec,
            bean: &BeanDescriptor,
            _config: &Configuration,
            class: &ClassSpec,
        ) -> eyre::Result<Option<MethodSpec>> {
            eyre::ensure!(class.name == self.expected_class, "unexpected class {}", class.name);
            eyre::ensure!(bean.property("login").is_some(), "login property missing");
            Ok(Some(method))
        }
    }

    let dispatcher = EventDispatcher::new(vec![
        Box::new(AssertContext {
            expected_class: "AbstractUser".to_string(),
        }),
        Box::new(AssertContext {
            expected_class: "AbstractUser".to_string(),
        }),
    ]);

    let result = dispatcher
        .on_base_bean_clone_generated(MethodSpec::new("__clone"), &fx.bean, &fx.config, &fx.class)
        .unwrap();
    assert!(result.is_some());
    assert_eq!(fx.class, class_before);
    assert_eq!(fx.bean, bean_before);
}
