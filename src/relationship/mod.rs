//! Relationships: per-entity trust/anxiety dynamics and periodic reflection

pub mod model;
pub mod reflection;
pub mod state;

pub use model::RelationshipModel;
pub use reflection::ReflectionEngine;
pub use state::RelationshipState;
