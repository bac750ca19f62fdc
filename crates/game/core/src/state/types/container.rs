use crate::error::{ErrorSeverity, GameError};

use super::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    #[error("{entity} weighs {weight} but only {spare} capacity is left")]
    OverCapacity {
        entity: EntityId,
        weight: u32,
        spare: u32,
    },

    #[error("{entity} is already in this container")]
    AlreadyContained { entity: EntityId },

    #[error("{entity} is not in this container")]
    NotFound { entity: EntityId },

    #[error("capacity grants must be positive")]
    InvalidGrant,
}

impl GameError for ContainerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OverCapacity { .. } => ErrorSeverity::Recoverable,
            Self::NotFound { .. } | Self::InvalidGrant => ErrorSeverity::Validation,
            Self::AlreadyContained { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OverCapacity { .. } => "CONTAINER_OVER_CAPACITY",
            Self::AlreadyContained { .. } => "CONTAINER_ALREADY_CONTAINED",
            Self::NotFound { .. } => "CONTAINER_NOT_FOUND",
            Self::InvalidGrant => "CONTAINER_INVALID_GRANT",
        }
    }
}

/// A held entity together with the weight it was added with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerSlot {
    pub entity: EntityId,
    pub weight: u32,
}

/// Ordered, weight-bounded inventory.
///
/// Insertion order is preserved for display. Iteration borrows the container,
/// so it cannot be mutated while a listing is being walked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Container {
    slots: Vec<ContainerSlot>,
    max_capacity: u32,
}

impl Container {
    pub fn new(max_capacity: u32) -> Self {
        Self {
            slots: Vec::new(),
            max_capacity,
        }
    }

    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    pub fn used_capacity(&self) -> u32 {
        self.slots
            .iter()
            .fold(0u32, |total, slot| total.saturating_add(slot.weight))
    }

    /// Remaining room: `max_capacity` minus the summed weight of the contents.
    pub fn spare_capacity(&self) -> u32 {
        self.max_capacity.saturating_sub(self.used_capacity())
    }

    pub fn can_hold(&self, weight: u32) -> bool {
        weight <= self.spare_capacity()
    }

    /// Appends an entity, refusing it when the weight does not fit.
    pub fn add(&mut self, entity: EntityId, weight: u32) -> Result<(), ContainerError> {
        if self.contains(entity) {
            return Err(ContainerError::AlreadyContained { entity });
        }
        let spare = self.spare_capacity();
        if weight > spare {
            return Err(ContainerError::OverCapacity {
                entity,
                weight,
                spare,
            });
        }
        self.slots.push(ContainerSlot { entity, weight });
        Ok(())
    }

    /// Removes an entity by identity, keeping the order of the rest.
    pub fn remove(&mut self, entity: EntityId) -> Result<ContainerSlot, ContainerError> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.entity == entity)
            .ok_or(ContainerError::NotFound { entity })?;
        Ok(self.slots.remove(index))
    }

    /// Grants extra capacity. Capacity never shrinks.
    pub fn increase_capacity(&mut self, amount: u32) -> Result<(), ContainerError> {
        if amount == 0 {
            return Err(ContainerError::InvalidGrant);
        }
        self.max_capacity = self.max_capacity.saturating_add(amount);
        Ok(())
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.slots.iter().any(|slot| slot.entity == entity)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Held entities in insertion order. Restartable: call again for a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots.iter().map(|slot| slot.entity)
    }

    pub fn slots(&self) -> &[ContainerSlot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_items_that_exceed_spare_capacity() {
        let mut container = Container::new(10);
        container.add(EntityId(1), 10).unwrap();

        let error = container.add(EntityId(2), 1).unwrap_err();
        assert_eq!(
            error,
            ContainerError::OverCapacity {
                entity: EntityId(2),
                weight: 1,
                spare: 0
            }
        );
        assert_eq!(container.len(), 1);
        assert!(!container.contains(EntityId(2)));
    }

    #[test]
    fn weightless_items_always_fit() {
        let mut container = Container::new(0);
        container.add(EntityId(1), 0).unwrap();
        assert_eq!(container.spare_capacity(), 0);
    }

    #[test]
    fn remove_missing_entity_reports_not_found() {
        let mut container = Container::new(5);
        let error = container.remove(EntityId(9)).unwrap_err();
        assert_eq!(error, ContainerError::NotFound { entity: EntityId(9) });
        assert_eq!(error.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn iteration_preserves_insertion_order_and_is_restartable() {
        let mut container = Container::new(30);
        for id in [4, 2, 7] {
            container.add(EntityId(id), 1).unwrap();
        }
        container.remove(EntityId(2)).unwrap();

        let first: Vec<_> = container.iter().collect();
        let second: Vec<_> = container.iter().collect();
        assert_eq!(first, vec![EntityId(4), EntityId(7)]);
        assert_eq!(first, second);
    }

    #[test]
    fn spare_capacity_tracks_contents() {
        let mut container = Container::new(30);
        container.add(EntityId(1), 12).unwrap();
        container.add(EntityId(2), 3).unwrap();
        assert_eq!(container.spare_capacity(), 15);
        container.remove(EntityId(1)).unwrap();
        assert_eq!(container.spare_capacity(), 27);
    }

    #[test]
    fn capacity_only_grows_by_positive_grants() {
        let mut container = Container::new(10);
        assert_eq!(
            container.increase_capacity(0),
            Err(ContainerError::InvalidGrant)
        );
        container.increase_capacity(5).unwrap();
        assert_eq!(container.max_capacity(), 15);
    }
}
