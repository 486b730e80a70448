use std::borrow::Borrow;
use std::fmt::{Debug, Display};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record kept in a [`Collection`] must implement.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Apply a partial update in place.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
}

// =============================================================================
// 2. THE ORDERED STORE
// =============================================================================

/// Insertion-ordered store with linear lookup.
///
/// Ids are not checked for uniqueness on insert. When duplicates exist,
/// lookups and removals act on the first match.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn find_by_id<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.iter().find(|item| <T::Id as Borrow<Q>>::borrow(item.id()) == id)
    }

    pub fn find_by_id_mut<Q>(&mut self, id: &Q) -> Option<&mut T>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.iter_mut().find(|item| <T::Id as Borrow<Q>>::borrow(item.id()) == id)
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find_by_id(id).is_some()
    }

    pub fn update<Q>(&mut self, id: &Q, patch: T::Patch) -> Result<T, String>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + Display + ?Sized,
    {
        let item = self
            .find_by_id_mut(id)
            .ok_or_else(|| format!("Item not found: {}", id))?;
        item.on_update(patch)?;
        Ok(item.clone())
    }

    pub fn remove<Q>(&mut self, id: &Q) -> Option<T>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.items.iter().position(|item| <T::Id as Borrow<Q>>::borrow(item.id()) == id)?;
        Some(self.items.remove(index))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Driver {
        id: String,
        team: String,
    }

    #[derive(Debug)]
    struct DriverPatch {
        team: Option<String>,
    }

    impl Entity for Driver {
        type Id = String;
        type Patch = DriverPatch;

        fn id(&self) -> &String { &self.id }

        fn on_update(&mut self, patch: DriverPatch) -> Result<(), String> {
            if let Some(team) = patch.team {
                self.team = team;
            }
            Ok(())
        }
    }

    fn driver(id: &str, team: &str) -> Driver {
        Driver { id: id.into(), team: team.into() }
    }

    #[test]
    fn test_duplicates_resolve_to_first_match() {
        let mut drivers = Collection::default();
        drivers.push(driver("d1", "Red"));
        drivers.push(driver("d1", "Blue"));

        assert_eq!(drivers.as_slice().len(), 2);
        assert_eq!(drivers.find_by_id("d1").unwrap().team, "Red");

        let removed = drivers.remove("d1").unwrap();
        assert_eq!(removed.team, "Red");
        assert_eq!(drivers.find_by_id("d1").unwrap().team, "Blue");
    }

    #[test]
    fn test_update_applies_patch() {
        let mut drivers = Collection::from_items(vec![driver("d1", "Red")]);

        let updated = drivers
            .update("d1", DriverPatch { team: Some("Green".into()) })
            .unwrap();
        assert_eq!(updated.team, "Green");

        let missing = drivers.update("d9", DriverPatch { team: None });
        assert_eq!(missing, Err("Item not found: d9".to_string()));
    }
}
