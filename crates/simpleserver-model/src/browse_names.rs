// crates/simpleserver-model/src/browse_names.rs
//! Browse names defined by the model.
//!
//! Browse names are labels, not keys: both schema dictionaries carry the
//! browse name `SampleCompany.SimpleServer.Model`, so this table has no
//! reverse lookup.

use crate::symbols::symbol_table;

symbol_table! {
    /// The browse names defined in the model.
    pub enum BrowseNames {
        CurrentStep = "CurrentStep",
        CycleId = "CycleId",
        CycleStepDataType = "CycleStepDataType",
        Error = "Error",
        SimpleServer_BinarySchema = "SampleCompany.SimpleServer.Model",
        SimpleServer_XmlSchema = "SampleCompany.SimpleServer.Model",
        Steps = "Steps",
        SystemCycleAbortedEventType = "SystemCycleAbortedEventType",
        SystemCycleFinishedEventType = "SystemCycleFinishedEventType",
        SystemCycleStartedEventType = "SystemCycleStartedEventType",
        SystemCycleStatusEventType = "SystemCycleStatusEventType",
    }
}
