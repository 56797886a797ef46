use chrono::{Local, NaiveDate};
use shared::{
    domain::{Person, PersonId, SearchField, SortField, SortOrder},
    error::ServiceError,
    protocol::{PersonAddRequest, PersonResponse, PersonUpdateRequest},
};
use storage::Storage;
use tracing::{debug, info};

use crate::{
    countries::CountriesService,
    query::{filter_persons, sort_persons},
    validation::Validate,
};

#[derive(Clone)]
pub struct PersonsService {
    storage: Storage,
    countries: CountriesService,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl PersonsService {
    pub fn new(storage: Storage, countries: CountriesService) -> Self {
        Self {
            storage,
            countries,
            today: local_today,
        }
    }

    /// Replaces the clock used to compute ages.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn to_response(&self, person: &Person, today: NaiveDate) -> PersonResponse {
        person.to_response(self.countries.country_name(person.country_id), today)
    }

    pub fn add_person(
        &self,
        request: Option<PersonAddRequest>,
    ) -> Result<PersonResponse, ServiceError> {
        let request =
            request.ok_or_else(|| ServiceError::missing("person add request is required"))?;
        request.validate()?;

        let person = request.to_person(PersonId::generate());
        self.storage.insert_person(person.clone());
        info!(person_id = %person.person_id, "person added");

        Ok(self.to_response(&person, (self.today)()))
    }

    pub fn get_person_by_id(&self, person_id: Option<PersonId>) -> Option<PersonResponse> {
        let person = self.storage.person_by_id(person_id?)?;
        Some(self.to_response(&person, (self.today)()))
    }

    pub fn get_all_persons(&self) -> Vec<PersonResponse> {
        let today = (self.today)();
        self.storage
            .list_persons()
            .iter()
            .map(|person| self.to_response(person, today))
            .collect()
    }

    /// Persons whose `search_by` field contains `search_string`.
    ///
    /// An empty `search_by` or `search_string`, or an unknown field key,
    /// returns every person.
    pub fn get_filtered_persons(
        &self,
        search_by: &str,
        search_string: &str,
    ) -> Vec<PersonResponse> {
        let all_persons = self.get_all_persons();
        if search_by.is_empty() || search_string.is_empty() {
            return all_persons;
        }

        let Some(field) = SearchField::parse(search_by) else {
            debug!(search_by, "unknown search field, returning unfiltered list");
            return all_persons;
        };
        filter_persons(all_persons, field, search_string)
    }

    /// Orders `persons` by the `sort_by` field key. Unknown keys leave the
    /// list as given.
    pub fn get_sorted_persons(
        &self,
        persons: Vec<PersonResponse>,
        sort_by: &str,
        order: SortOrder,
    ) -> Vec<PersonResponse> {
        match SortField::parse(sort_by) {
            Some(field) => sort_persons(persons, field, order),
            None => {
                debug!(sort_by, "unknown sort field, leaving order unchanged");
                persons
            }
        }
    }

    pub fn update_person(
        &self,
        request: Option<PersonUpdateRequest>,
    ) -> Result<PersonResponse, ServiceError> {
        let request =
            request.ok_or_else(|| ServiceError::missing("person update request is required"))?;
        if self.storage.person_by_id(request.person_id).is_none() {
            return Err(ServiceError::not_found(format!(
                "Person with ID {} does not exist.",
                request.person_id
            )));
        }
        request.validate()?;

        let person = request.to_person();
        if !self.storage.update_person(person.clone()) {
            // Deleted between the lookup and the write.
            return Err(ServiceError::not_found(format!(
                "Person with ID {} does not exist.",
                request.person_id
            )));
        }
        info!(person_id = %person.person_id, "person updated");

        Ok(self.to_response(&person, (self.today)()))
    }

    pub fn delete_person(&self, person_id: Option<PersonId>) -> Result<bool, ServiceError> {
        let person_id = person_id.ok_or_else(|| ServiceError::missing("person id is required"))?;
        let deleted = self.storage.delete_person(person_id);
        if deleted {
            info!(%person_id, "person deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
#[path = "tests/persons_tests.rs"]
mod tests;
