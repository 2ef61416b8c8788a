//! Generation stages.
//!
//! Each stage is one extension point of the generator. Stages are grouped
//! into families by the shape of the artifact they carry.

use std::fmt;

/// The shape of the artifact a stage carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageFamily {
    /// A whole generated file.
    File,
    /// A single method.
    Method,
    /// A getter/setter pair for one property.
    PropertyAccessors,
    /// The get/has/add/set/remove group for a pivot table.
    ManyToManyAccessors,
}

impl StageFamily {
    /// Number of slots a stage of this family carries.
    pub fn slot_count(&self) -> usize {
        match self {
            StageFamily::File | StageFamily::Method => 1,
            StageFamily::PropertyAccessors => 2,
            StageFamily::ManyToManyAccessors => 5,
        }
    }
}

/// A generator extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    BaseBean,
    BaseBeanConstructor,
    BaseBeanProperty,
    BaseBeanOneToMany,
    BaseBeanManyToMany,
    BaseBeanJsonSerialize,
    BaseBeanClone,
    BaseDao,
    BaseDaoConstructor,
    BaseDaoSave,
    BaseDaoFindAll,
    BaseDaoGetById,
    BaseDaoDelete,
    BaseDaoFind,
    BaseDaoFindFromSql,
    BaseDaoFindFromRawSql,
    BaseDaoFindOne,
    BaseDaoFindOneFromSql,
    BaseDaoSetDefaultSort,
    BaseDaoFindByIndex,
    DaoFactory,
    DaoFactoryConstructor,
    DaoFactoryGetter,
    DaoFactorySetter,
}

impl Stage {
    /// Every stage, in the order the generator reaches them.
    pub const ALL: [Stage; 24] = [
        Stage::BaseBean,
        Stage::BaseBeanConstructor,
        Stage::BaseBeanProperty,
        Stage::BaseBeanOneToMany,
        Stage::BaseBeanManyToMany,
        Stage::BaseBeanJsonSerialize,
        Stage::BaseBeanClone,
        Stage::BaseDao,
        Stage::BaseDaoConstructor,
        Stage::BaseDaoSave,
        Stage::BaseDaoFindAll,
        Stage::BaseDaoGetById,
        Stage::BaseDaoDelete,
        Stage::BaseDaoFind,
        Stage::BaseDaoFindFromSql,
        Stage::BaseDaoFindFromRawSql,
        Stage::BaseDaoFindOne,
        Stage::BaseDaoFindOneFromSql,
        Stage::BaseDaoSetDefaultSort,
        Stage::BaseDaoFindByIndex,
        Stage::DaoFactory,
        Stage::DaoFactoryConstructor,
        Stage::DaoFactoryGetter,
        Stage::DaoFactorySetter,
    ];

    /// Stable snake_case identifier, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::BaseBean => "base_bean",
            Stage::BaseBeanConstructor => "base_bean_constructor",
            Stage::BaseBeanProperty => "base_bean_property",
            Stage::BaseBeanOneToMany => "base_bean_one_to_many",
            Stage::BaseBeanManyToMany => "base_bean_many_to_many",
            Stage::BaseBeanJsonSerialize => "base_bean_json_serialize",
            Stage::BaseBeanClone => "base_bean_clone",
            Stage::BaseDao => "base_dao",
            Stage::BaseDaoConstructor => "base_dao_constructor",
            Stage::BaseDaoSave => "base_dao_save",
            Stage::BaseDaoFindAll => "base_dao_find_all",
            Stage::BaseDaoGetById => "base_dao_get_by_id",
            Stage::BaseDaoDelete => "base_dao_delete",
            Stage::BaseDaoFind => "base_dao_find",
            Stage::BaseDaoFindFromSql => "base_dao_find_from_sql",
            Stage::BaseDaoFindFromRawSql => "base_dao_find_from_raw_sql",
            Stage::BaseDaoFindOne => "base_dao_find_one",
            Stage::BaseDaoFindOneFromSql => "base_dao_find_one_from_sql",
            Stage::BaseDaoSetDefaultSort => "base_dao_set_default_sort",
            Stage::BaseDaoFindByIndex => "base_dao_find_by_index",
            Stage::DaoFactory => "dao_factory",
            Stage::DaoFactoryConstructor => "dao_factory_constructor",
            Stage::DaoFactoryGetter => "dao_factory_getter",
            Stage::DaoFactorySetter => "dao_factory_setter",
        }
    }

    /// The artifact shape this stage carries.
    pub fn family(&self) -> StageFamily {
        match self {
            Stage::BaseBean | Stage::BaseDao | Stage::DaoFactory => StageFamily::File,
            Stage::BaseBeanProperty => StageFamily::PropertyAccessors,
            Stage::BaseBeanManyToMany => StageFamily::ManyToManyAccessors,
            _ => StageFamily::Method,
        }
    }

    /// Number of slots this stage carries.
    pub fn slot_count(&self) -> usize {
        self.family().slot_count()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
