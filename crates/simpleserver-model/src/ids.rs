// crates/simpleserver-model/src/ids.rs
//! Well-known node ids for the DataType, Object, ObjectType and Variable
//! nodes of the model, and the reverse lookups over them.

use crate::browse_names::BrowseNames;
use crate::symbols::{NodeIdSet, SymbolSet, node_id_table};

node_id_table! {
    /// The well known identifiers for DataType nodes.
    pub enum DataTypeIds {
        CycleStepDataType = 1,
    }
}

node_id_table! {
    /// The well known identifiers for Object nodes.
    pub enum ObjectIds {
        CycleStepDataType_Encoding_DefaultBinary = 52,
        CycleStepDataType_Encoding_DefaultXml = 60,
        CycleStepDataType_Encoding_DefaultJson = 68,
    }
}

node_id_table! {
    /// The well known identifiers for ObjectType nodes.
    pub enum ObjectTypeIds {
        SystemCycleStatusEventType = 2,
        SystemCycleStartedEventType = 14,
        SystemCycleAbortedEventType = 27,
        SystemCycleFinishedEventType = 40,
    }
}

node_id_table! {
    /// The well known identifiers for Variable nodes.
    pub enum VariableIds {
        SystemCycleStatusEventType_CycleId = 12,
        SystemCycleStatusEventType_CurrentStep = 13,
        SystemCycleStartedEventType_Steps = 26,
        SystemCycleAbortedEventType_Error = 39,
        SimpleServer_BinarySchema = 53,
        SimpleServer_BinarySchema_NamespaceUri = 55,
        SimpleServer_BinarySchema_Deprecated = 56,
        SimpleServer_BinarySchema_CycleStepDataType = 57,
        SimpleServer_XmlSchema = 61,
        SimpleServer_XmlSchema_NamespaceUri = 63,
        SimpleServer_XmlSchema_Deprecated = 64,
        SimpleServer_XmlSchema_CycleStepDataType = 65,
    }
}

impl ObjectTypeIds {
    /// The event type this one derives from, when it is defined in this model.
    ///
    /// `SystemCycleStatusEventType` derives from the base `SystemEventType`,
    /// which lives in the OPC UA core namespace, so it has no supertype here.
    pub fn supertype(self) -> Option<ObjectTypeIds> {
        match self {
            ObjectTypeIds::SystemCycleStatusEventType => None,
            ObjectTypeIds::SystemCycleStartedEventType
            | ObjectTypeIds::SystemCycleAbortedEventType
            | ObjectTypeIds::SystemCycleFinishedEventType => {
                Some(ObjectTypeIds::SystemCycleStatusEventType)
            }
        }
    }

    /// Returns true if `self` is `other` or derives from it.
    pub fn is_subtype_of(self, other: ObjectTypeIds) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty == other {
                return true;
            }
            current = ty.supertype();
        }
        false
    }
}

impl VariableIds {
    /// The model browse name of this variable, if it is one of the model's own.
    /// The `NamespaceUri` and `Deprecated` dictionary properties use standard
    /// OPC UA browse names.
    pub fn browse_name(self) -> Option<BrowseNames> {
        match self {
            VariableIds::SystemCycleStatusEventType_CycleId => Some(BrowseNames::CycleId),
            VariableIds::SystemCycleStatusEventType_CurrentStep => Some(BrowseNames::CurrentStep),
            VariableIds::SystemCycleStartedEventType_Steps => Some(BrowseNames::Steps),
            VariableIds::SystemCycleAbortedEventType_Error => Some(BrowseNames::Error),
            VariableIds::SimpleServer_BinarySchema => Some(BrowseNames::SimpleServer_BinarySchema),
            VariableIds::SimpleServer_XmlSchema => Some(BrowseNames::SimpleServer_XmlSchema),
            VariableIds::SimpleServer_BinarySchema_CycleStepDataType
            | VariableIds::SimpleServer_XmlSchema_CycleStepDataType => {
                Some(BrowseNames::CycleStepDataType)
            }
            VariableIds::SimpleServer_BinarySchema_NamespaceUri
            | VariableIds::SimpleServer_BinarySchema_Deprecated
            | VariableIds::SimpleServer_XmlSchema_NamespaceUri
            | VariableIds::SimpleServer_XmlSchema_Deprecated => None,
        }
    }
}

// --- Reverse lookups ---

/// Returns the symbolic name of the DataType node id `value`.
pub fn name_for_data_type_ids(value: &str) -> Option<&'static str> {
    DataTypeIds::from_value(value).map(DataTypeIds::name)
}

/// Returns the symbolic name of the Object node id `value`.
pub fn name_for_object_ids(value: &str) -> Option<&'static str> {
    ObjectIds::from_value(value).map(ObjectIds::name)
}

/// Returns the symbolic name of the ObjectType node id `value`.
pub fn name_for_object_type_ids(value: &str) -> Option<&'static str> {
    ObjectTypeIds::from_value(value).map(ObjectTypeIds::name)
}

/// Returns the symbolic name of the Variable node id `value`.
pub fn name_for_variable_ids(value: &str) -> Option<&'static str> {
    VariableIds::from_value(value).map(VariableIds::name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn assert_bijective<S: NodeIdSet>() {
        let names: BTreeSet<_> = S::entries().map(|(name, _)| name).collect();
        let values: BTreeSet<_> = S::entries().map(|(_, value)| value).collect();
        let ids: BTreeSet<_> = S::ALL.iter().map(|m| m.numeric_id()).collect();
        assert_eq!(names.len(), S::ALL.len(), "duplicate name in {}", S::SET_NAME);
        assert_eq!(values.len(), S::ALL.len(), "duplicate value in {}", S::SET_NAME);
        assert_eq!(ids.len(), S::ALL.len(), "duplicate id in {}", S::SET_NAME);
    }

    #[test]
    fn test_tables_are_bijective() {
        assert_bijective::<DataTypeIds>();
        assert_bijective::<ObjectIds>();
        assert_bijective::<ObjectTypeIds>();
        assert_bijective::<VariableIds>();
    }

    #[test]
    fn test_values_are_rendered_from_namespace_and_id() {
        assert_eq!(
            DataTypeIds::CycleStepDataType.value(),
            "nsu=http://samplecompany.com/SimpleServer/Model;i=1"
        );
        assert_eq!(
            ObjectIds::CycleStepDataType_Encoding_DefaultJson.value(),
            "nsu=http://samplecompany.com/SimpleServer/Model;i=68"
        );
        assert_eq!(
            VariableIds::SimpleServer_XmlSchema_CycleStepDataType.value(),
            "nsu=http://samplecompany.com/SimpleServer/Model;i=65"
        );
        assert_eq!(VariableIds::SystemCycleAbortedEventType_Error.numeric_id(), 39);
    }

    #[test]
    fn test_name_for_object_type_ids() {
        assert_eq!(
            name_for_object_type_ids("nsu=http://samplecompany.com/SimpleServer/Model;i=14"),
            Some("SystemCycleStartedEventType")
        );
        // Exact match only: no trimming, case folding or partial matching.
        assert_eq!(
            name_for_object_type_ids(" nsu=http://samplecompany.com/SimpleServer/Model;i=14"),
            None
        );
        assert_eq!(
            name_for_object_type_ids("nsu=http://samplecompany.com/simpleserver/model;i=14"),
            None
        );
        assert_eq!(name_for_object_type_ids("i=14"), None);
    }

    #[test]
    fn test_name_for_variable_ids_not_found() {
        assert_eq!(
            name_for_variable_ids("nsu=http://samplecompany.com/SimpleServer/Model;i=99"),
            None
        );
        assert_eq!(name_for_variable_ids(""), None);
    }

    #[test]
    fn test_lookups_do_not_cross_sets() {
        let data_type = DataTypeIds::CycleStepDataType.value();
        assert_eq!(name_for_data_type_ids(data_type), Some("CycleStepDataType"));
        assert_eq!(name_for_object_ids(data_type), None);
        assert_eq!(name_for_object_type_ids(data_type), None);
        assert_eq!(name_for_variable_ids(data_type), None);
    }

    #[test]
    fn test_display_name_echoes_unknown_values() {
        assert_eq!(
            ObjectIds::display_name("nsu=http://samplecompany.com/SimpleServer/Model;i=60"),
            "CycleStepDataType_Encoding_DefaultXml"
        );
        assert_eq!(ObjectIds::display_name("ns=2;i=60"), "ns=2;i=60");
    }

    #[test]
    fn test_from_numeric_id() {
        assert_eq!(
            VariableIds::from_numeric_id(26),
            Some(VariableIds::SystemCycleStartedEventType_Steps)
        );
        assert_eq!(VariableIds::from_numeric_id(54), None);
        assert_eq!(ObjectTypeIds::from_numeric_id(1), None);
    }

    #[test]
    fn test_supertypes() {
        assert_eq!(ObjectTypeIds::SystemCycleStatusEventType.supertype(), None);
        for ty in [
            ObjectTypeIds::SystemCycleStartedEventType,
            ObjectTypeIds::SystemCycleAbortedEventType,
            ObjectTypeIds::SystemCycleFinishedEventType,
        ] {
            assert_eq!(ty.supertype(), Some(ObjectTypeIds::SystemCycleStatusEventType));
            assert!(ty.is_subtype_of(ObjectTypeIds::SystemCycleStatusEventType));
            assert!(ty.is_subtype_of(ty));
        }
        assert!(
            !ObjectTypeIds::SystemCycleStatusEventType
                .is_subtype_of(ObjectTypeIds::SystemCycleFinishedEventType)
        );
        assert!(
            !ObjectTypeIds::SystemCycleAbortedEventType
                .is_subtype_of(ObjectTypeIds::SystemCycleStartedEventType)
        );
    }

    #[test]
    fn test_variable_browse_names() {
        assert_eq!(
            VariableIds::SystemCycleStatusEventType_CycleId.browse_name(),
            Some(BrowseNames::CycleId)
        );
        assert_eq!(
            VariableIds::SimpleServer_XmlSchema.browse_name().map(BrowseNames::value),
            Some("SampleCompany.SimpleServer.Model")
        );
        assert_eq!(VariableIds::SimpleServer_BinarySchema_Deprecated.browse_name(), None);

        // Event fields are named after their browse name.
        for var in VariableIds::ALL {
            if let Some(browse_name) = var.browse_name() {
                if var.name().starts_with("SystemCycle") {
                    assert!(var.name().ends_with(browse_name.value()));
                }
            }
        }
    }
}
