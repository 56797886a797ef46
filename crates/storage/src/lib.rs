use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shared::domain::{Country, CountryId, Person, PersonId};

mod seed;

/// Shared handle to the in-memory country and person lists.
///
/// Clones point at the same lists. Each method takes the single lock for
/// the duration of its read or mutation.
#[derive(Clone, Default)]
pub struct Storage {
    inner: Arc<Mutex<Tables>>,
}

#[derive(Default)]
struct Tables {
    countries: Vec<Country>,
    persons: Vec<Person>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the fixed sample countries and persons.
    pub fn with_sample_data() -> Self {
        let storage = Self::new();
        {
            let mut tables = storage.tables();
            tables.countries.extend(seed::sample_countries());
            tables.persons.extend(seed::sample_persons());
            tracing::debug!(
                countries = tables.countries.len(),
                persons = tables.persons.len(),
                "seeded sample data"
            );
        }
        storage
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        // Mutations are a single push/assign/remove; a poisoned guard still
        // holds consistent lists.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `country` unless a country with the exact same name exists.
    /// Returns whether the country was stored.
    pub fn insert_country(&self, country: Country) -> bool {
        let mut tables = self.tables();
        if tables
            .countries
            .iter()
            .any(|existing| existing.country_name == country.country_name)
        {
            return false;
        }
        tables.countries.push(country);
        true
    }

    pub fn list_countries(&self) -> Vec<Country> {
        self.tables().countries.clone()
    }

    pub fn country_by_id(&self, country_id: CountryId) -> Option<Country> {
        self.tables()
            .countries
            .iter()
            .find(|country| country.country_id == country_id)
            .cloned()
    }

    pub fn insert_person(&self, person: Person) {
        self.tables().persons.push(person);
    }

    pub fn list_persons(&self) -> Vec<Person> {
        self.tables().persons.clone()
    }

    pub fn person_by_id(&self, person_id: PersonId) -> Option<Person> {
        self.tables()
            .persons
            .iter()
            .find(|person| person.person_id == person_id)
            .cloned()
    }

    /// Overwrites the stored record carrying `person.person_id`, keeping its
    /// position in the list. Returns `false` when no such record exists.
    pub fn update_person(&self, person: Person) -> bool {
        let mut tables = self.tables();
        match tables
            .persons
            .iter_mut()
            .find(|stored| stored.person_id == person.person_id)
        {
            Some(stored) => {
                *stored = person;
                true
            }
            None => false,
        }
    }

    pub fn delete_person(&self, person_id: PersonId) -> bool {
        let mut tables = self.tables();
        match tables
            .persons
            .iter()
            .position(|person| person.person_id == person_id)
        {
            Some(index) => {
                tables.persons.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
