use chrono::NaiveDate;
use shared::domain::PersonId;

use super::*;

fn person(name: Option<&str>) -> PersonResponse {
    PersonResponse {
        person_id: PersonId::generate(),
        person_name: name.map(str::to_string),
        email: None,
        date_of_birth: None,
        gender: None,
        country_id: None,
        country: None,
        address: None,
        receive_newsletter: false,
        age: None,
    }
}

fn names(persons: &[PersonResponse]) -> Vec<Option<&str>> {
    persons
        .iter()
        .map(|person| person.person_name.as_deref())
        .collect()
}

#[test]
fn name_filter_is_case_insensitive_substring() {
    let persons = vec![
        person(Some("Jane Doe")),
        person(Some("Alice Johnson")),
        person(Some("Bob Smith")),
    ];
    let matched = filter_persons(persons.clone(), SearchField::PersonName, "ja");
    assert_eq!(names(&matched), vec![Some("Jane Doe")]);

    let matched = filter_persons(persons, SearchField::PersonName, "J");
    assert_eq!(names(&matched), vec![Some("Jane Doe"), Some("Alice Johnson")]);
}

#[test]
fn filter_keeps_persons_without_a_value() {
    let persons = vec![person(None), person(Some("")), person(Some("Bob"))];
    let matched = filter_persons(persons, SearchField::PersonName, "zzz");
    assert_eq!(names(&matched), vec![None, Some("")]);
}

#[test]
fn date_of_birth_filter_matches_month_day_year_text() {
    let mut early = person(Some("Early"));
    early.date_of_birth = NaiveDate::from_ymd_opt(2012, 6, 4);
    let mut late = person(Some("Late"));
    late.date_of_birth = NaiveDate::from_ymd_opt(2009, 10, 17);

    let matched = filter_persons(vec![early, late], SearchField::DateOfBirth, "06-04");
    assert_eq!(names(&matched), vec![Some("Early")]);
}

#[test]
fn country_filter_uses_resolved_name() {
    let mut canadian = person(Some("Cal"));
    canadian.country = Some("Canada".into());
    let mut indian = person(Some("Harry"));
    indian.country = Some("India".into());

    let matched = filter_persons(vec![canadian, indian], SearchField::Country, "CAN");
    assert_eq!(names(&matched), vec![Some("Cal")]);
}

#[test]
fn descending_name_sort_is_reverse_alphabetical_and_stable() {
    let first_bob = person(Some("bob"));
    let second_bob = person(Some("Bob"));
    let persons = vec![
        person(Some("alice")),
        first_bob.clone(),
        person(Some("Charlie")),
        second_bob.clone(),
    ];

    let sorted = sort_persons(persons, SortField::PersonName, SortOrder::Desc);
    assert_eq!(
        names(&sorted),
        vec![Some("Charlie"), Some("bob"), Some("Bob"), Some("alice")]
    );
    assert_eq!(sorted[1].person_id, first_bob.person_id);
    assert_eq!(sorted[2].person_id, second_bob.person_id);
}

#[test]
fn missing_values_sort_first_ascending() {
    let persons = vec![person(Some("Zed")), person(None), person(Some("amy"))];
    let sorted = sort_persons(persons, SortField::PersonName, SortOrder::Asc);
    assert_eq!(names(&sorted), vec![None, Some("amy"), Some("Zed")]);
}

#[test]
fn sorts_by_age_and_newsletter_flag() {
    let mut young = person(Some("Young"));
    young.age = Some(12);
    let mut old = person(Some("Old"));
    old.age = Some(26);
    old.receive_newsletter = true;
    let mut middle = person(Some("Middle"));
    middle.age = Some(22);

    let by_age = sort_persons(
        vec![young.clone(), old.clone(), middle.clone()],
        SortField::Age,
        SortOrder::Desc,
    );
    assert_eq!(names(&by_age), vec![Some("Old"), Some("Middle"), Some("Young")]);

    let by_flag = sort_persons(
        vec![old, young, middle],
        SortField::ReceiveNewsletter,
        SortOrder::Asc,
    );
    assert_eq!(
        names(&by_flag),
        vec![Some("Young"), Some("Middle"), Some("Old")]
    );
}
