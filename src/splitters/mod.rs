pub mod base;
pub mod provenance;
pub mod types;

pub use base::DataSplitter;
pub use provenance::ProvenanceSplitter;
pub use types::DataSplit;
