use shared::{
    domain::CountryId,
    error::ServiceError,
    protocol::{CountryAddRequest, CountryResponse},
};
use storage::Storage;
use tracing::info;

#[derive(Clone)]
pub struct CountriesService {
    storage: Storage,
}

impl CountriesService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn add_country(
        &self,
        request: Option<CountryAddRequest>,
    ) -> Result<CountryResponse, ServiceError> {
        let request =
            request.ok_or_else(|| ServiceError::missing("country add request is required"))?;
        let name = match request.country_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ServiceError::missing("country name is required")),
        };

        let country = request.to_country(CountryId::generate());
        if !self.storage.insert_country(country.clone()) {
            return Err(ServiceError::duplicate(format!(
                "Country name already exists: {name}"
            )));
        }

        info!(country_id = %country.country_id, country_name = name, "country added");
        Ok(CountryResponse::from(&country))
    }

    pub fn get_all_countries(&self) -> Vec<CountryResponse> {
        self.storage
            .list_countries()
            .iter()
            .map(CountryResponse::from)
            .collect()
    }

    pub fn get_country_by_id(&self, country_id: Option<CountryId>) -> Option<CountryResponse> {
        let country = self.storage.country_by_id(country_id?)?;
        Some(CountryResponse::from(&country))
    }

    /// Display name for a country reference; orphaned ids resolve to `None`.
    pub(crate) fn country_name(&self, country_id: Option<CountryId>) -> Option<String> {
        self.get_country_by_id(country_id)
            .and_then(|country| country.country_name)
    }
}

#[cfg(test)]
#[path = "tests/countries_tests.rs"]
mod tests;
