// Domain types and value objects
mod demand_record;

// Re-export commonly used types to the world
pub use demand_record::DemandRecord;
