// crates/simpleserver-model/src/symbols.rs
//! The traits shared by every symbol table, and the macros that generate them.
//!
//! Each table is a fieldless enum whose variants are the symbolic names of
//! the model. The string values are `&'static str` literals assembled at
//! compile time, so there is nothing to initialise and nothing to tear down.

use crate::registry::IdSet;
use log::trace;

/// A closed, fixed set of named string constants.
pub trait SymbolSet: Copy + Eq + core::fmt::Debug + 'static {
    /// Name of the set, e.g. `"VariableIds"`.
    const SET_NAME: &'static str;

    /// Every member of the set, in declaration order.
    const ALL: &'static [Self];

    /// The symbolic name of this member.
    fn name(self) -> &'static str;

    /// The string value associated with this member.
    fn value(self) -> &'static str;

    /// Looks a member up by its symbolic name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.name() == name)
    }

    /// Iterates `(name, value)` pairs in declaration order.
    fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::ALL.iter().map(|member| (member.name(), member.value()))
    }
}

/// A symbol set whose values are node ids of the form `nsu=<uri>;i=<n>`.
pub trait NodeIdSet: SymbolSet {
    /// Which of the node id tables this is.
    const ID_SET: IdSet;

    /// The numeric (`i=`) part of this member's node id.
    fn numeric_id(self) -> u32;

    /// Reverse lookup. The whole string must match exactly.
    fn from_value(value: &str) -> Option<Self> {
        let found = Self::ALL.iter().copied().find(|member| member.value() == value);
        if found.is_none() {
            trace!("{} has no entry for {:?}", Self::SET_NAME, value);
        }
        found
    }

    /// Looks a member up by the numeric part of its node id.
    fn from_numeric_id(id: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.numeric_id() == id)
    }

    /// Returns the symbolic name for `value`, or `value` itself when the set
    /// has no such entry.
    fn display_name<'a>(value: &'a str) -> &'a str {
        match Self::from_value(value) {
            Some(member) => member.name(),
            None => value,
        }
    }
}

/// Expands to the model namespace URI as a string literal, so it can be
/// spliced into other literals with `concat!`.
macro_rules! model_namespace_uri {
    () => {
        "http://samplecompany.com/SimpleServer/Model"
    };
}

/// Generates a [`SymbolSet`] enum from `Name = value` pairs.
macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $set:ident {
            $( $(#[$vmeta:meta])* $name:ident = $value:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $set {
            $( $(#[$vmeta])* $name, )+
        }

        impl $crate::symbols::SymbolSet for $set {
            const SET_NAME: &'static str = stringify!($set);
            const ALL: &'static [Self] = &[ $( Self::$name, )+ ];

            fn name(self) -> &'static str {
                match self {
                    $( Self::$name => stringify!($name), )+
                }
            }

            fn value(self) -> &'static str {
                match self {
                    $( Self::$name => $value, )+
                }
            }
        }
    };
}

/// Generates a [`NodeIdSet`] enum from `Name = numeric_id` pairs. Values are
/// rendered as `nsu=<model uri>;i=<numeric_id>`.
macro_rules! node_id_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $set:ident {
            $( $(#[$vmeta:meta])* $name:ident = $id:literal, )+
        }
    ) => {
        $crate::symbols::symbol_table! {
            $(#[$meta])*
            $vis enum $set {
                $( $(#[$vmeta])* $name = concat!("nsu=", $crate::symbols::model_namespace_uri!(), ";i=", $id), )+
            }
        }

        impl $crate::symbols::NodeIdSet for $set {
            const ID_SET: $crate::registry::IdSet = $crate::registry::IdSet::$set;

            fn numeric_id(self) -> u32 {
                match self {
                    $( Self::$name => $id, )+
                }
            }
        }
    };
}

pub(crate) use model_namespace_uri;
pub(crate) use node_id_table;
pub(crate) use symbol_table;
