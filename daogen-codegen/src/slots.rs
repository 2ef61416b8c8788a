//! Slot groups carried by stages.
//!
//! A slot is one artifact position in a stage's input and output. Every slot
//! may independently be absent (vetoed). Single-artifact stages use
//! `Option<T>` as their group; the accessor stages have a dedicated struct
//! per shape.

use daogen_core::MethodSpec;

/// A fixed-size group of optional artifacts.
///
/// The dispatcher only ever asks a group whether it is [vacant]; it never
/// looks at the artifacts themselves.
///
/// [vacant]: SlotGroup::is_vacant
pub trait SlotGroup {
    /// Number of slots in the group.
    const SLOTS: usize;

    /// Number of slots currently holding an artifact.
    fn occupied(&self) -> usize;

    /// True when every slot is absent.
    fn is_vacant(&self) -> bool {
        self.occupied() == 0
    }
}

impl<T> SlotGroup for Option<T> {
    const SLOTS: usize = 1;

    fn occupied(&self) -> usize {
        usize::from(self.is_some())
    }
}

/// The getter/setter pair generated for one column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyAccessors {
    pub getter: Option<MethodSpec>,
    pub setter: Option<MethodSpec>,
}

impl PropertyAccessors {
    pub fn new(getter: Option<MethodSpec>, setter: Option<MethodSpec>) -> Self {
        Self { getter, setter }
    }

    /// A pair with both accessors present.
    pub fn both(getter: MethodSpec, setter: MethodSpec) -> Self {
        Self::new(Some(getter), Some(setter))
    }

    /// The surviving accessors, getter first.
    pub fn into_methods(self) -> Vec<MethodSpec> {
        [self.getter, self.setter].into_iter().flatten().collect()
    }
}

impl SlotGroup for PropertyAccessors {
    const SLOTS: usize = 2;

    fn occupied(&self) -> usize {
        self.getter.occupied() + self.setter.occupied()
    }
}

/// The accessor group generated for a pivot table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManyToManyAccessors {
    pub getter: Option<MethodSpec>,
    pub hasser: Option<MethodSpec>,
    pub adder: Option<MethodSpec>,
    pub setter: Option<MethodSpec>,
    pub remover: Option<MethodSpec>,
}

impl ManyToManyAccessors {
    /// A group with all five accessors present.
    pub fn all(
        getter: MethodSpec,
        hasser: MethodSpec,
        adder: MethodSpec,
        setter: MethodSpec,
        remover: MethodSpec,
    ) -> Self {
        Self {
            getter: Some(getter),
            hasser: Some(hasser),
            adder: Some(adder),
            setter: Some(setter),
            remover: Some(remover),
        }
    }

    /// Mutable access to every slot, in get/has/add/set/remove order.
    pub fn slots_mut(&mut self) -> [&mut Option<MethodSpec>; 5] {
        [
            &mut self.getter,
            &mut self.hasser,
            &mut self.adder,
            &mut self.setter,
            &mut self.remover,
        ]
    }

    /// The surviving accessors, in get/has/add/set/remove order.
    pub fn into_methods(self) -> Vec<MethodSpec> {
        [self.getter, self.hasser, self.adder, self.setter, self.remover]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl SlotGroup for ManyToManyAccessors {
    const SLOTS: usize = 5;

    fn occupied(&self) -> usize {
        self.getter.occupied()
            + self.hasser.occupied()
            + self.adder.occupied()
            + self.setter.occupied()
            + self.remover.occupied()
    }
}
