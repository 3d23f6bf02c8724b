//! In-process adapter for the entity and favourite link stores.
//!
//! [`InMemoryStore`] keeps every table in one mutex-guarded state so the
//! `(user, target)` uniqueness check and the insert happen atomically. It
//! backs the server when no database is configured and the behaviour tests.

mod demo;

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    EntityStore, EntityStoreError, FavoriteLinkStore, FavoriteLinkStoreError,
};
use crate::domain::{
    FavoriteEntry, FavoriteLink, FavoriteTarget, LinkId, Person, PersonId, Planet, PlanetId,
    TargetKind, TargetRef, User, UserId,
};

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    people: Vec<Person>,
    planets: Vec<Planet>,
    person_links: Vec<FavoriteLink>,
    planet_links: Vec<FavoriteLink>,
    next_person_link: i32,
    next_planet_link: i32,
}

impl State {
    fn has_user(&self, id: UserId) -> bool {
        self.users.iter().any(|user| user.id() == id)
    }

    fn has_target(&self, target: TargetRef) -> bool {
        match target {
            TargetRef::Person(id) => self.people.iter().any(|person| person.id == id),
            TargetRef::Planet(id) => self.planets.iter().any(|planet| planet.id == id),
        }
    }

    fn links(&self, kind: TargetKind) -> &Vec<FavoriteLink> {
        match kind {
            TargetKind::Person => &self.person_links,
            TargetKind::Planet => &self.planet_links,
        }
    }

    fn links_mut(&mut self, kind: TargetKind) -> &mut Vec<FavoriteLink> {
        match kind {
            TargetKind::Person => &mut self.person_links,
            TargetKind::Planet => &mut self.planet_links,
        }
    }

    fn next_link_id(&mut self, kind: TargetKind) -> Result<LinkId, FavoriteLinkStoreError> {
        let counter = match kind {
            TargetKind::Person => &mut self.next_person_link,
            TargetKind::Planet => &mut self.next_planet_link,
        };
        let next = counter.checked_add(1).ok_or_else(|| {
            FavoriteLinkStoreError::query(format!("{} link id space exhausted", kind.noun()))
        })?;
        *counter = next;
        Ok(LinkId::new(next))
    }

    fn resolve(&self, target: TargetRef) -> Option<FavoriteTarget> {
        match target {
            TargetRef::Person(id) => self
                .people
                .iter()
                .find(|person| person.id == id)
                .cloned()
                .map(FavoriteTarget::Person),
            TargetRef::Planet(id) => self
                .planets
                .iter()
                .find(|planet| planet.id == id)
                .cloned()
                .map(FavoriteTarget::Planet),
        }
    }
}

/// Shared in-memory store implementing [`EntityStore`] and
/// [`FavoriteLinkStore`].
///
/// # Examples
/// ```
/// use starbase::domain::{Planet, PlanetId, User, UserId};
/// use starbase::outbound::memory::InMemoryStore;
///
/// let store = InMemoryStore::new()
///     .with_user(User::new(UserId::new(1), "luke@rebellion.org", "x", true))
///     .with_planet(Planet::named(PlanetId::new(5), "Tatooine"));
/// # let _ = store;
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user.
    #[must_use]
    pub fn with_user(self, user: User) -> Self {
        self.seed(|state| state.users.push(user));
        self
    }

    /// Seed a person.
    #[must_use]
    pub fn with_person(self, person: Person) -> Self {
        self.seed(|state| state.people.push(person));
        self
    }

    /// Seed a planet.
    #[must_use]
    pub fn with_planet(self, planet: Planet) -> Self {
        self.seed(|state| state.planets.push(planet));
        self
    }

    /// Remove a user and every favourite it owns, as a cascading delete would.
    #[cfg(test)]
    pub(crate) fn remove_user(&self, id: UserId) {
        self.seed(|state| {
            state.users.retain(|user| user.id() != id);
            state.person_links.retain(|link| link.user_id != id);
            state.planet_links.retain(|link| link.user_id != id);
        });
    }

    fn seed(&self, apply: impl FnOnce(&mut State)) {
        let mut guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        apply(&mut guard);
    }

    fn lock<E>(&self, poisoned: impl FnOnce(String) -> E) -> Result<MutexGuard<'_, State>, E> {
        self.state
            .lock()
            .map_err(|err| poisoned(format!("in-memory state poisoned: {err}")))
    }
}

fn sorted_by_id<T: Clone, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(key);
    sorted
}

#[async_trait]
impl EntityStore for InMemoryStore {
    async fn find_user(&self, id: UserId) -> Result<Option<User>, EntityStoreError> {
        let state = self.lock(EntityStoreError::query)?;
        Ok(state.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_person(&self, id: PersonId) -> Result<Option<Person>, EntityStoreError> {
        let state = self.lock(EntityStoreError::query)?;
        Ok(state.people.iter().find(|person| person.id == id).cloned())
    }

    async fn find_planet(&self, id: PlanetId) -> Result<Option<Planet>, EntityStoreError> {
        let state = self.lock(EntityStoreError::query)?;
        Ok(state.planets.iter().find(|planet| planet.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, EntityStoreError> {
        let state = self.lock(EntityStoreError::query)?;
        Ok(sorted_by_id(&state.users, User::id))
    }

    async fn list_people(&self) -> Result<Vec<Person>, EntityStoreError> {
        let state = self.lock(EntityStoreError::query)?;
        Ok(sorted_by_id(&state.people, |person| person.id))
    }

    async fn list_planets(&self) -> Result<Vec<Planet>, EntityStoreError> {
        let state = self.lock(EntityStoreError::query)?;
        Ok(sorted_by_id(&state.planets, |planet| planet.id))
    }
}

#[async_trait]
impl FavoriteLinkStore for InMemoryStore {
    async fn find_link(
        &self,
        user_id: UserId,
        target: TargetRef,
    ) -> Result<Option<FavoriteLink>, FavoriteLinkStoreError> {
        let state = self.lock(FavoriteLinkStoreError::query)?;
        Ok(state
            .links(target.kind())
            .iter()
            .find(|link| link.user_id == user_id && link.target == target)
            .copied())
    }

    async fn list_links(
        &self,
        user_id: UserId,
        kind: TargetKind,
    ) -> Result<Vec<FavoriteEntry>, FavoriteLinkStoreError> {
        let state = self.lock(FavoriteLinkStoreError::query)?;
        let mut entries: Vec<FavoriteEntry> = state
            .links(kind)
            .iter()
            .filter(|link| link.user_id == user_id)
            .filter_map(|link| {
                state.resolve(link.target).map(|target| FavoriteEntry {
                    link: *link,
                    target,
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.link.id);
        Ok(entries)
    }

    async fn insert_link(
        &self,
        user_id: UserId,
        target: TargetRef,
    ) -> Result<FavoriteLink, FavoriteLinkStoreError> {
        let mut state = self.lock(FavoriteLinkStoreError::query)?;
        if !state.has_user(user_id) {
            return Err(FavoriteLinkStoreError::missing_reference("user_id"));
        }
        if !state.has_target(target) {
            let column = match target.kind() {
                TargetKind::Person => "people_id",
                TargetKind::Planet => "planet_id",
            };
            return Err(FavoriteLinkStoreError::missing_reference(column));
        }
        let duplicate = state
            .links(target.kind())
            .iter()
            .any(|link| link.user_id == user_id && link.target == target);
        if duplicate {
            return Err(FavoriteLinkStoreError::constraint_violation(format!(
                "user {user_id} already favourites {target}"
            )));
        }

        let link = FavoriteLink {
            id: state.next_link_id(target.kind())?,
            user_id,
            target,
        };
        state.links_mut(target.kind()).push(link);
        Ok(link)
    }

    async fn delete_link(&self, link: &FavoriteLink) -> Result<bool, FavoriteLinkStoreError> {
        let mut state = self.lock(FavoriteLinkStoreError::query)?;
        let links = state.links_mut(link.target.kind());
        let before = links.len();
        links.retain(|existing| existing.id != link.id);
        Ok(links.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryStore {
        InMemoryStore::new()
            .with_user(User::new(UserId::new(1), "luke@rebellion.org", "x", true))
            .with_person(Person::named(PersonId::new(2), "Leia Organa"))
            .with_planet(Planet::named(PlanetId::new(5), "Tatooine"))
            .with_planet(Planet::named(PlanetId::new(2), "Alderaan"))
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_insert_violates_uniqueness(store: InMemoryStore) {
        let target = TargetRef::Planet(PlanetId::new(5));
        store
            .insert_link(UserId::new(1), target)
            .await
            .expect("first insert");
        let err = store
            .insert_link(UserId::new(1), target)
            .await
            .expect_err("second insert");

        assert!(matches!(
            err,
            FavoriteLinkStoreError::ConstraintViolation { .. }
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn insert_reports_missing_references(store: InMemoryStore) {
        let missing_user = store
            .insert_link(UserId::new(9), TargetRef::Person(PersonId::new(2)))
            .await
            .expect_err("missing user");
        let missing_person = store
            .insert_link(UserId::new(1), TargetRef::Person(PersonId::new(8)))
            .await
            .expect_err("missing person");

        assert_eq!(
            missing_user,
            FavoriteLinkStoreError::missing_reference("user_id")
        );
        assert_eq!(
            missing_person,
            FavoriteLinkStoreError::missing_reference("people_id")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn list_links_follows_insertion_order(store: InMemoryStore) {
        for id in [5, 2] {
            store
                .insert_link(UserId::new(1), TargetRef::Planet(PlanetId::new(id)))
                .await
                .expect("insert");
        }

        let names: Vec<String> = store
            .list_links(UserId::new(1), TargetKind::Planet)
            .await
            .expect("list")
            .into_iter()
            .map(|entry| match entry.target {
                FavoriteTarget::Planet(planet) => planet.name,
                FavoriteTarget::Person(person) => person.name,
            })
            .collect();

        assert_eq!(names, vec!["Tatooine".to_owned(), "Alderaan".to_owned()]);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed(store: InMemoryStore) {
        let link = store
            .insert_link(UserId::new(1), TargetRef::Person(PersonId::new(2)))
            .await
            .expect("insert");

        assert!(store.delete_link(&link).await.expect("first delete"));
        assert!(!store.delete_link(&link).await.expect("second delete"));
    }

    #[rstest]
    #[tokio::test]
    async fn removing_a_user_cascades_to_links(store: InMemoryStore) {
        store
            .insert_link(UserId::new(1), TargetRef::Planet(PlanetId::new(5)))
            .await
            .expect("insert");
        store.remove_user(UserId::new(1));

        let found = store
            .find_link(UserId::new(1), TargetRef::Planet(PlanetId::new(5)))
            .await
            .expect("lookup");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn exhausted_link_ids_report_a_query_error(store: InMemoryStore) {
        store.seed(|state| state.next_planet_link = i32::MAX);

        let err = store
            .insert_link(UserId::new(1), TargetRef::Planet(PlanetId::new(5)))
            .await
            .expect_err("no identifiers left");

        assert!(matches!(err, FavoriteLinkStoreError::Query { .. }));
        let found = store
            .find_link(UserId::new(1), TargetRef::Planet(PlanetId::new(5)))
            .await
            .expect("lookup");
        assert!(found.is_none());
    }
}
