use services::ApiContext;
use shared::{
    domain::{SearchField, SortOrder},
    protocol::{CountryAddRequest, PersonAddRequest},
};
use storage::Storage;

fn person(name: &str, email: &str) -> Option<PersonAddRequest> {
    Some(PersonAddRequest {
        person_name: Some(name.to_string()),
        email: Some(email.to_string()),
        ..Default::default()
    })
}

#[test]
fn services_on_separate_stores_are_isolated() {
    let first = ApiContext::new(Storage::new());
    let second = ApiContext::new(Storage::new());

    first
        .countries
        .add_country(Some(CountryAddRequest::new("USA")))
        .expect("country");
    first
        .persons
        .add_person(person("Jane Doe", "jane@example.com"))
        .expect("person");

    assert!(second.countries.get_all_countries().is_empty());
    assert!(second.persons.get_all_persons().is_empty());
    second
        .countries
        .add_country(Some(CountryAddRequest::new("USA")))
        .expect("same name in another store");
}

#[test]
fn sample_store_filters_then_sorts() {
    let ctx = ApiContext::new(Storage::with_sample_data());
    let all = ctx.persons.get_all_persons();
    assert_eq!(all.len(), 5);
    assert!(all.iter().all(|person| person.country.is_some()));

    let jackson = ctx.persons.get_filtered_persons("Address", "jackson");
    let sorted = ctx
        .persons
        .get_sorted_persons(jackson, "PersonName", SortOrder::Desc);
    let names: Vec<_> = sorted
        .iter()
        .map(|person| person.person_name.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Rodolphe", "Cal"]);

    let females = ctx
        .persons
        .get_filtered_persons(SearchField::Gender.key(), "fem");
    assert_eq!(females.len(), 2);
}

#[test]
fn full_lifecycle_through_one_context() {
    let ctx = ApiContext::new(Storage::new());
    let canada = ctx
        .countries
        .add_country(Some(CountryAddRequest::new("Canada")))
        .expect("country");

    let added = ctx
        .persons
        .add_person(Some(PersonAddRequest {
            country_id: Some(canada.country_id),
            ..person("Cal", "cal@example.com").unwrap_or_default()
        }))
        .expect("add");
    assert_eq!(added.country.as_deref(), Some("Canada"));
    assert_eq!(
        ctx.persons.get_person_by_id(Some(added.person_id)),
        Some(added.clone())
    );

    let mut update = added.to_update_request();
    update.address = Some("926 Jackson Drive".into());
    let updated = ctx.persons.update_person(Some(update)).expect("update");
    assert_eq!(updated.address.as_deref(), Some("926 Jackson Drive"));

    assert!(ctx
        .persons
        .delete_person(Some(added.person_id))
        .expect("delete"));
    assert_eq!(ctx.persons.get_person_by_id(Some(added.person_id)), None);
    assert!(!ctx
        .persons
        .delete_person(Some(added.person_id))
        .expect("delete"));
}
