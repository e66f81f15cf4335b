// crates/simpleserver-model/src/namespaces.rs
//! The namespace table.

use crate::symbols::{model_namespace_uri, symbol_table};

/// The URI of the SimpleServer information model namespace.
pub const NAMESPACE_URI: &str = model_namespace_uri!();

symbol_table! {
    /// The namespaces used in the model.
    pub enum Namespaces {
        Uri = model_namespace_uri!(),
    }
}
