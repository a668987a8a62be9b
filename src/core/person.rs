//! The `Person` record every format reads and writes.

use serde::{Deserialize, Serialize};

/// One benchmark record.
///
/// Fields are private so a record cannot change after construction; adapters
/// build new instances through `Person::new` or serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: u32,
    name: String,
    address: String,
    age: f64,
}

impl Person {
    pub fn new(id: u32, name: impl Into<String>, address: impl Into<String>, age: f64) -> Self {
        Person { id, name: name.into(), address: address.into(), age }
    }

    /// Not guaranteed unique.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn age(&self) -> f64 {
        self.age
    }
}
