use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Country, CountryId, Gender, Person, PersonId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryAddRequest {
    pub country_name: Option<String>,
}

impl CountryAddRequest {
    pub fn new(country_name: impl Into<String>) -> Self {
        Self {
            country_name: Some(country_name.into()),
        }
    }

    pub fn to_country(&self, country_id: CountryId) -> Country {
        Country {
            country_id,
            country_name: self.country_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
    pub country_id: CountryId,
    pub country_name: Option<String>,
}

impl From<&Country> for CountryResponse {
    fn from(country: &Country) -> Self {
        Self {
            country_id: country.country_id,
            country_name: country.country_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonAddRequest {
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_newsletter: bool,
}

impl PersonAddRequest {
    pub fn to_person(&self, person_id: PersonId) -> Person {
        Person {
            person_id,
            person_name: self.person_name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.map(|gender| gender.to_string()),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_newsletter: self.receive_newsletter,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonUpdateRequest {
    pub person_id: PersonId,
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_newsletter: bool,
}

impl PersonUpdateRequest {
    pub fn to_person(&self) -> Person {
        Person {
            person_id: self.person_id,
            person_name: self.person_name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.map(|gender| gender.to_string()),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_newsletter: self.receive_newsletter,
        }
    }
}

/// Read-only snapshot of a stored person plus the derived `country` name
/// and `age`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonResponse {
    pub person_id: PersonId,
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub country_id: Option<CountryId>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub receive_newsletter: bool,
    pub age: Option<i64>,
}

impl PersonResponse {
    /// Unrecognised gender text becomes `None` rather than an error.
    pub fn to_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            person_id: self.person_id,
            person_name: self.person_name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            gender: self
                .gender
                .as_deref()
                .and_then(|gender| gender.parse().ok()),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_newsletter: self.receive_newsletter,
        }
    }
}

impl Person {
    pub fn to_response(&self, country: Option<String>, today: NaiveDate) -> PersonResponse {
        PersonResponse {
            person_id: self.person_id,
            person_name: self.person_name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.clone(),
            country_id: self.country_id,
            country,
            address: self.address.clone(),
            receive_newsletter: self.receive_newsletter,
            age: self.date_of_birth.map(|dob| age_in_years(dob, today)),
        }
    }
}

/// Whole years between `date_of_birth` and `today`, rounded to nearest
/// using a 365.25-day year.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i64 {
    let days = (today - date_of_birth).num_days() as f64;
    (days / 365.25).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn age_rounds_to_nearest_year() {
        assert_eq!(age_in_years(date(2000, 1, 1), date(2020, 1, 1)), 20);
        // 20.6 years rounds up.
        assert_eq!(age_in_years(date(2000, 1, 1), date(2020, 8, 10)), 21);
        assert_eq!(age_in_years(date(2000, 1, 1), date(2000, 3, 1)), 0);
    }

    #[test]
    fn add_request_stores_gender_as_text() {
        let request = PersonAddRequest {
            person_name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            gender: Some(Gender::Female),
            ..Default::default()
        };
        let id = PersonId::generate();
        let person = request.to_person(id);
        assert_eq!(person.person_id, id);
        assert_eq!(person.gender.as_deref(), Some("Female"));
        assert!(!person.receive_newsletter);
    }

    #[test]
    fn response_converts_back_into_update_request() {
        let person = Person {
            person_id: PersonId::generate(),
            person_name: Some("Cal".into()),
            email: Some("cal@example.com".into()),
            date_of_birth: Some(date(2009, 10, 17)),
            gender: Some("female".into()),
            country_id: Some(CountryId::generate()),
            address: Some("926 Jackson Drive".into()),
            receive_newsletter: true,
        };
        let response = person.to_response(Some("Canada".into()), date(2024, 1, 1));
        assert_eq!(response.country.as_deref(), Some("Canada"));
        assert_eq!(response.age, Some(14));

        let update = response.to_update_request();
        assert_eq!(update.person_id, person.person_id);
        assert_eq!(update.gender, Some(Gender::Female));
        assert_eq!(update.to_person(), Person {
            gender: Some("Female".into()),
            ..person
        });
    }
}
