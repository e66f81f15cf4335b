#![cfg_attr(not(feature = "std"), no_std)]
//! Symbol tables for the SampleCompany SimpleServer information model.
//!
//! The model defines one namespace, a handful of browse names, and the
//! node ids of its data types, objects, object types and variables. Each of
//! these is a closed enum implementing [`SymbolSet`]; the four node id
//! tables additionally implement [`NodeIdSet`] and offer a reverse lookup
//! from the `nsu=<uri>;i=<n>` string back to the symbolic name.
//!
//! ```
//! use simpleserver_model::{name_for_object_type_ids, Namespaces, SymbolSet};
//!
//! assert_eq!(
//!     Namespaces::Uri.value(),
//!     "http://samplecompany.com/SimpleServer/Model"
//! );
//! assert_eq!(
//!     name_for_object_type_ids("nsu=http://samplecompany.com/SimpleServer/Model;i=14"),
//!     Some("SystemCycleStartedEventType")
//! );
//! ```

// 'alloc' is used for the owned URI in `ExpandedNodeId`
extern crate alloc;

// --- Table Machinery ---
mod symbols;

// --- Tables ---
pub mod browse_names;
pub mod ids;
pub mod namespaces;

// --- Lookups ---
pub mod node_id;
pub mod registry;

// --- Top-level Exports ---
pub use browse_names::BrowseNames;
pub use ids::{
    DataTypeIds, ObjectIds, ObjectTypeIds, VariableIds, name_for_data_type_ids,
    name_for_object_ids, name_for_object_type_ids, name_for_variable_ids,
};
pub use namespaces::{NAMESPACE_URI, Namespaces};
pub use node_id::{ExpandedNodeId, NodeIdError};
pub use registry::{IdSet, ModelSymbol, registry_entries, resolve};
pub use symbols::{NodeIdSet, SymbolSet};
