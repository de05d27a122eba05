//! Relational memory: what happened, how it felt, and what it did to the relationship

pub mod record;
pub mod relational;

pub use record::MemoryRecord;
pub use relational::RelationalMemory;
