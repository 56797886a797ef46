use chrono::NaiveDate;
use shared::domain::{Country, CountryId, Person, PersonId};
use uuid::Uuid;

const USA: CountryId = CountryId(Uuid::from_u128(0x4A656578_3623_4A33_977B_62969CBD4056));
const CANADA: CountryId = CountryId(Uuid::from_u128(0xE1230C55_DD31_4385_86CB_AA83A1B091F5));
const UK: CountryId = CountryId(Uuid::from_u128(0x3534980C_3DED_49F7_BE69_F91BDEF89BA1));
const INDIA: CountryId = CountryId(Uuid::from_u128(0xAB33587A_1FC6_4FE2_BBFC_23E18694631B));
const AUSTRALIA: CountryId = CountryId(Uuid::from_u128(0x32A5FD37_80E7_4DDE_AF12_749C20E1E7E6));

pub(crate) fn sample_countries() -> Vec<Country> {
    [
        (USA, "USA"),
        (CANADA, "Canada"),
        (UK, "UK"),
        (INDIA, "India"),
        (AUSTRALIA, "Australia"),
    ]
    .into_iter()
    .map(|(country_id, name)| Country {
        country_id,
        country_name: Some(name.to_string()),
    })
    .collect()
}

pub(crate) fn sample_persons() -> Vec<Person> {
    vec![
        sample_person(
            0x75227058_0432_4844_B037_DB2E422B2C30,
            "Ive",
            "imacswayde0@tamu.edu",
            "79 Dottie Plaza",
            USA,
            NaiveDate::from_ymd_opt(2012, 6, 4),
            "Male",
            true,
        ),
        sample_person(
            0xD6DACD8D_A886_4C26_8596_D086172BB2FF,
            "Cal",
            "cmckomb1@miitbeian.gov",
            "926 Jackson Drive",
            CANADA,
            NaiveDate::from_ymd_opt(2009, 10, 17),
            "Female",
            false,
        ),
        sample_person(
            0xEBBFE40A_2BF4_4EDC_B02C_CEF1E9B3B64D,
            "Rodolphe",
            "rbasil2@weather.com",
            "926 Jackson Drive",
            UK,
            NaiveDate::from_ymd_opt(2000, 3, 7),
            "Other",
            false,
        ),
        sample_person(
            0xFE20B6A0_DC50_4E3A_8FB5_DDDB0CF5EEC5,
            "Harry",
            "hdurtnal3@accuweather.com",
            "45631 Sycamore Place",
            INDIA,
            NaiveDate::from_ymd_opt(2002, 8, 23),
            "Male",
            true,
        ),
        sample_person(
            0x27546559_51AE_4816_899E_FBCB3D76CE89,
            "Sunshine",
            "srude6@cisco.com",
            "5 Ruskin Point",
            AUSTRALIA,
            NaiveDate::from_ymd_opt(1998, 4, 10),
            "Female",
            true,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample_person(
    id: u128,
    name: &str,
    email: &str,
    address: &str,
    country_id: CountryId,
    date_of_birth: Option<NaiveDate>,
    gender: &str,
    receive_newsletter: bool,
) -> Person {
    Person {
        person_id: PersonId(Uuid::from_u128(id)),
        person_name: Some(name.to_string()),
        email: Some(email.to_string()),
        date_of_birth,
        gender: Some(gender.to_string()),
        country_id: Some(country_id),
        address: Some(address.to_string()),
        receive_newsletter,
    }
}
