//! Filtering and ordering of person listings.
//!
//! Field names arrive as query-string keys and are parsed into
//! [`SearchField`] / [`SortField`] at the service boundary; everything here
//! works on the closed enums.

use std::{borrow::Cow, cmp::Ordering};

use shared::{
    domain::{SearchField, SortField, SortOrder},
    protocol::PersonResponse,
};

/// Date format used when searching by date of birth.
pub const DATE_OF_BIRTH_SEARCH_FORMAT: &str = "%m-%d-%Y";

/// Keeps persons whose `field` contains `text`, ignoring case.
///
/// Persons with no value (or an empty one) for `field` are kept regardless
/// of `text`.
pub fn filter_persons(
    persons: Vec<PersonResponse>,
    field: SearchField,
    text: &str,
) -> Vec<PersonResponse> {
    let needle = text.to_lowercase();
    persons
        .into_iter()
        .filter(|person| match search_value(person, field) {
            Some(value) if !value.is_empty() => value.to_lowercase().contains(&needle),
            _ => true,
        })
        .collect()
}

fn search_value(person: &PersonResponse, field: SearchField) -> Option<Cow<'_, str>> {
    match field {
        SearchField::PersonName => person.person_name.as_deref().map(Cow::Borrowed),
        SearchField::Email => person.email.as_deref().map(Cow::Borrowed),
        SearchField::DateOfBirth => person
            .date_of_birth
            .map(|dob| Cow::Owned(dob.format(DATE_OF_BIRTH_SEARCH_FORMAT).to_string())),
        SearchField::Gender => person.gender.as_deref().map(Cow::Borrowed),
        SearchField::Country => person.country.as_deref().map(Cow::Borrowed),
        SearchField::Address => person.address.as_deref().map(Cow::Borrowed),
    }
}

/// Stable sort by `field`. Text compares case-insensitively and missing
/// values order before present ones when ascending.
pub fn sort_persons(
    mut persons: Vec<PersonResponse>,
    field: SortField,
    order: SortOrder,
) -> Vec<PersonResponse> {
    persons.sort_by(|a, b| {
        let ordering = compare_by(field, a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    persons
}

fn compare_by(field: SortField, a: &PersonResponse, b: &PersonResponse) -> Ordering {
    match field {
        SortField::PersonName => {
            compare_text(a.person_name.as_deref(), b.person_name.as_deref())
        }
        SortField::Email => compare_text(a.email.as_deref(), b.email.as_deref()),
        SortField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
        SortField::Age => a.age.cmp(&b.age),
        SortField::Gender => compare_text(a.gender.as_deref(), b.gender.as_deref()),
        SortField::Country => compare_text(a.country.as_deref(), b.country.as_deref()),
        SortField::Address => compare_text(a.address.as_deref(), b.address.as_deref()),
        SortField::ReceiveNewsletter => a.receive_newsletter.cmp(&b.receive_newsletter),
    }
}

fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.to_uppercase().cmp(&b.to_uppercase()),
        _ => a.is_some().cmp(&b.is_some()),
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
