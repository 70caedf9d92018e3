//! Common repository traits
//!
//! This module defines generic interfaces for the in-memory stores.
//! Stores are built once from seed data, so reads cannot fail: a missing
//! entity is reported as `None`, never as an error.

/// Trait for creating new entities in a store
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the store)
/// * `CreateDTO` - DTO for creation (without ID, will be generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity and returns it
    ///
    /// # Arguments
    /// * `data` - DTO containing the data for creation (without ID)
    fn create(&self, data: &CreateDTO) -> Entity;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `String`)
pub trait Read<Entity, Id: ?Sized> {
    /// Reads an entity by its primary key
    ///
    /// # Returns
    /// * `Some(Entity)` - Entity found
    /// * `None` - No entity with that ID
    fn read(&self, id: &Id) -> Option<Entity>;
}

/// Trait for reading the whole collection
///
/// # Note
/// Entities are returned in insertion order, which is the order the
/// views rely on when filtering.
pub trait ReadAll<Entity> {
    fn read_all(&self) -> Vec<Entity>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id: ?Sized> {
    /// Deletes an entity, returns whether something was removed
    fn delete(&self, id: &Id) -> bool;
}
