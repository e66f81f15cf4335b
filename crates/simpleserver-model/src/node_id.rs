// crates/simpleserver-model/src/node_id.rs
//! Parsing and formatting of `nsu=<uri>;i=<n>` node id strings.

use crate::namespaces::NAMESPACE_URI;
use crate::registry::{IdSet, ModelSymbol};
use crate::symbols::NodeIdSet;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use log::debug;

const NAMESPACE_URI_PREFIX: &str = "nsu=";
const NUMERIC_PREFIX: &str = "i=";

/// A numeric node id qualified by its namespace URI.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpandedNodeId {
    pub namespace_uri: String,
    pub identifier: u32,
}

impl ExpandedNodeId {
    pub fn new(namespace_uri: impl Into<String>, identifier: u32) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            identifier,
        }
    }

    /// The node id of a member of one of the model tables.
    pub fn of<S: NodeIdSet>(member: S) -> Self {
        Self::new(NAMESPACE_URI, member.numeric_id())
    }

    /// Returns true if this node id belongs to the SimpleServer model namespace.
    pub fn is_model_node(&self) -> bool {
        self.namespace_uri == NAMESPACE_URI
    }

    /// Looks this node id up in the model tables.
    pub fn symbol(&self) -> Option<ModelSymbol> {
        if !self.is_model_node() {
            return None;
        }
        IdSet::ALL
            .iter()
            .find_map(|set| set.lookup_numeric(self.identifier))
    }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{};{}{}",
            NAMESPACE_URI_PREFIX, self.namespace_uri, NUMERIC_PREFIX, self.identifier
        )
    }
}

impl FromStr for ExpandedNodeId {
    type Err = NodeIdError;

    /// Parses `nsu=<uri>;i=<n>`. The identifier follows the last `;`, so the
    /// URI itself may contain semicolons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).inspect_err(|e| debug!("Rejected node id {:?}: {}", s, e))
    }
}

fn parse(s: &str) -> Result<ExpandedNodeId, NodeIdError> {
    if s.is_empty() {
        return Err(NodeIdError::Empty);
    }

    let Some(rest) = s.strip_prefix(NAMESPACE_URI_PREFIX) else {
        return Err(NodeIdError::MissingNamespaceUri);
    };
    let Some((namespace_uri, identifier)) = rest.rsplit_once(';') else {
        return Err(NodeIdError::MissingIdentifier);
    };
    if namespace_uri.is_empty() {
        return Err(NodeIdError::MissingNamespaceUri);
    }

    let Some((kind, digits)) = identifier.split_once('=') else {
        return Err(NodeIdError::MissingIdentifier);
    };
    // Only numeric identifiers appear in this model.
    match kind {
        "i" => {}
        "s" => return Err(NodeIdError::UnsupportedIdentifierType('s')),
        "g" => return Err(NodeIdError::UnsupportedIdentifierType('g')),
        "b" => return Err(NodeIdError::UnsupportedIdentifierType('b')),
        _ => return Err(NodeIdError::MissingIdentifier),
    }

    // `u32::from_str` accepts a leading '+', which is not valid here.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NodeIdError::InvalidIdentifier(digits.to_string()));
    }
    let identifier = digits
        .parse::<u32>()
        .map_err(|_| NodeIdError::InvalidIdentifier(digits.to_string()))?;

    Ok(ExpandedNodeId::new(namespace_uri, identifier))
}

/// Errors that can occur while parsing a node id string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeIdError {
    /// The input string is empty.
    Empty,
    /// The `nsu=` part is missing or empty.
    MissingNamespaceUri,
    /// There is no `;i=<n>` part.
    MissingIdentifier,
    /// The identifier is a string, GUID or opaque identifier.
    UnsupportedIdentifierType(char),
    /// The numeric identifier is not a valid `u32`.
    InvalidIdentifier(String),
}

impl fmt::Display for NodeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeIdError::Empty => write!(f, "Node id cannot be empty"),
            NodeIdError::MissingNamespaceUri => {
                write!(f, "Node id is missing the 'nsu=' namespace URI")
            }
            NodeIdError::MissingIdentifier => write!(f, "Node id is missing the ';i=' identifier"),
            NodeIdError::UnsupportedIdentifierType(kind) => {
                write!(f, "Unsupported identifier type '{}=', only 'i=' is allowed", kind)
            }
            NodeIdError::InvalidIdentifier(value) => {
                write!(f, "Invalid numeric identifier: {:?}", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NodeIdError {}
