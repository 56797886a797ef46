//! Country and person services over the in-memory [`Storage`].

use storage::Storage;

pub mod countries;
pub mod persons;
pub mod query;
pub mod validation;

pub use countries::CountriesService;
pub use persons::PersonsService;

/// Services wired to one shared store.
#[derive(Clone)]
pub struct ApiContext {
    pub countries: CountriesService,
    pub persons: PersonsService,
}

impl ApiContext {
    pub fn new(storage: Storage) -> Self {
        let countries = CountriesService::new(storage.clone());
        let persons = PersonsService::new(storage, countries.clone());
        Self { countries, persons }
    }
}
