use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

id_newtype!(CountryId);
id_newtype!(PersonId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    /// Case-insensitive, matching how stored gender text is read back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [Gender::Male, Gender::Female, Gender::Other]
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownGender(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Person fields that can be searched from the list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    PersonName,
    Email,
    DateOfBirth,
    Gender,
    Country,
    Address,
}

impl SearchField {
    pub const ALL: [SearchField; 6] = [
        SearchField::PersonName,
        SearchField::Email,
        SearchField::DateOfBirth,
        SearchField::Gender,
        SearchField::Country,
        SearchField::Address,
    ];

    /// Query-string key, as sent by the `searchBy` parameter.
    pub fn key(&self) -> &'static str {
        match self {
            SearchField::PersonName => "PersonName",
            SearchField::Email => "Email",
            SearchField::DateOfBirth => "DateOfBirth",
            SearchField::Gender => "Gender",
            SearchField::Country => "CountryID",
            SearchField::Address => "Address",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchField::PersonName => "Name",
            SearchField::Email => "Email",
            SearchField::DateOfBirth => "Date of Birth",
            SearchField::Gender => "Gender",
            SearchField::Country => "Country",
            SearchField::Address => "Address",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Person fields the list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    PersonName,
    Email,
    DateOfBirth,
    Age,
    Gender,
    Country,
    Address,
    ReceiveNewsletter,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::PersonName,
        SortField::Email,
        SortField::DateOfBirth,
        SortField::Age,
        SortField::Gender,
        SortField::Country,
        SortField::Address,
        SortField::ReceiveNewsletter,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortField::PersonName => "PersonName",
            SortField::Email => "Email",
            SortField::DateOfBirth => "DateOfBirth",
            SortField::Age => "Age",
            SortField::Gender => "Gender",
            SortField::Country => "Country",
            SortField::Address => "Address",
            SortField::ReceiveNewsletter => "ReceiveNewsletter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::PersonName => "Person Name",
            SortField::Email => "Email",
            SortField::DateOfBirth => "Date of Birth",
            SortField::Age => "Age",
            SortField::Gender => "Gender",
            SortField::Country => "Country",
            SortField::Address => "Address",
            SortField::ReceiveNewsletter => "Receive Newsletter",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub country_id: CountryId,
    pub country_name: Option<String>,
}

/// Stored person record. Gender is kept as text; age and country name are
/// derived when a response is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub person_id: PersonId,
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    pub receive_newsletter: bool,
}
