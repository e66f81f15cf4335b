// crates/simpleserver-model/src/registry.rs
//! Lookups across all node id tables at once.

use crate::ids::{DataTypeIds, ObjectIds, ObjectTypeIds, VariableIds};
use crate::symbols::NodeIdSet;
use alloc::vec::Vec;
use core::fmt;
use log::debug;

/// Identifies one of the node id tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdSet {
    DataTypeIds,
    ObjectIds,
    ObjectTypeIds,
    VariableIds,
}

impl IdSet {
    /// All node id tables, in the order they are searched by [`resolve`].
    pub const ALL: [IdSet; 4] = [
        IdSet::DataTypeIds,
        IdSet::ObjectIds,
        IdSet::ObjectTypeIds,
        IdSet::VariableIds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IdSet::DataTypeIds => "DataTypeIds",
            IdSet::ObjectIds => "ObjectIds",
            IdSet::ObjectTypeIds => "ObjectTypeIds",
            IdSet::VariableIds => "VariableIds",
        }
    }

    /// Reverse lookup of `value` in this table only.
    pub fn lookup(self, value: &str) -> Option<ModelSymbol> {
        match self {
            IdSet::DataTypeIds => DataTypeIds::from_value(value).map(ModelSymbol::of),
            IdSet::ObjectIds => ObjectIds::from_value(value).map(ModelSymbol::of),
            IdSet::ObjectTypeIds => ObjectTypeIds::from_value(value).map(ModelSymbol::of),
            IdSet::VariableIds => VariableIds::from_value(value).map(ModelSymbol::of),
        }
    }

    /// Looks up the entry of this table with numeric id `id`.
    pub fn lookup_numeric(self, id: u32) -> Option<ModelSymbol> {
        match self {
            IdSet::DataTypeIds => DataTypeIds::from_numeric_id(id).map(ModelSymbol::of),
            IdSet::ObjectIds => ObjectIds::from_numeric_id(id).map(ModelSymbol::of),
            IdSet::ObjectTypeIds => ObjectTypeIds::from_numeric_id(id).map(ModelSymbol::of),
            IdSet::VariableIds => VariableIds::from_numeric_id(id).map(ModelSymbol::of),
        }
    }

    /// Every entry of this table, in declaration order.
    pub fn symbols(self) -> Vec<ModelSymbol> {
        match self {
            IdSet::DataTypeIds => symbols_of::<DataTypeIds>(),
            IdSet::ObjectIds => symbols_of::<ObjectIds>(),
            IdSet::ObjectTypeIds => symbols_of::<ObjectTypeIds>(),
            IdSet::VariableIds => symbols_of::<VariableIds>(),
        }
    }
}

fn symbols_of<S: NodeIdSet>() -> Vec<ModelSymbol> {
    S::ALL.iter().copied().map(ModelSymbol::of).collect()
}

impl fmt::Display for IdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node id entry together with the table it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelSymbol {
    pub set: IdSet,
    pub name: &'static str,
    pub value: &'static str,
    pub numeric_id: u32,
}

impl ModelSymbol {
    /// Builds the symbol describing `member`.
    pub fn of<S: NodeIdSet>(member: S) -> Self {
        Self {
            set: S::ID_SET,
            name: member.name(),
            value: member.value(),
            numeric_id: member.numeric_id(),
        }
    }
}

impl fmt::Display for ModelSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.set, self.name)
    }
}

/// Resolves a node id string against every table of the model.
///
/// Returns `None` when no table holds `value`. Matching is exact.
pub fn resolve(value: &str) -> Option<ModelSymbol> {
    let found = IdSet::ALL.iter().find_map(|set| set.lookup(value));
    if found.is_none() {
        debug!("Node id {:?} is not defined by the model", value);
    }
    found
}

/// Iterates every node id entry of the model, table by table.
pub fn registry_entries() -> impl Iterator<Item = ModelSymbol> {
    IdSet::ALL.into_iter().flat_map(IdSet::symbols)
}
