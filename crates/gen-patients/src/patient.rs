use crate::names;
use jiff::{Timestamp, civil::Date};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn first_names(&self) -> &'static [&'static str] {
        match self {
            Gender::Male => &names::MALE_FIRST_NAMES,
            Gender::Female => &names::FEMALE_FIRST_NAMES,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub patient_number: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "iso::date_at_utc_midnight")]
    pub date_of_birth: Date,
    pub gender: Gender,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub medical_history: MedicalHistory,
    pub documents: Vec<String>,
    #[serde(serialize_with = "iso::timestamp")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "iso::timestamp")]
    pub updated_at: Timestamp,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct MedicalHistory {
    pub conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub notes: String,
}

/// Builds `count` patients numbered from 1, drawing every random choice from `rng`.
pub fn generate<R: Rng>(rng: &mut R, count: u32, now: Timestamp) -> Vec<Patient> {
    (0..count).map(|index| patient(rng, index + 1, now)).collect()
}

fn patient<R: Rng>(rng: &mut R, patient_number: u32, now: Timestamp) -> Patient {
    let gender = if rng.random_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };
    let first_name = pick(rng, gender.first_names());
    let last_name = pick(rng, &names::LAST_NAMES);
    // Days stop at 28 so every month yields a valid date.
    let date_of_birth = jiff::civil::date(
        rng.random_range(1940..=2010),
        rng.random_range(1..=12),
        rng.random_range(1..=28),
    );
    let phone_number = format!("{:08}", rng.random_range(0..100_000_000u32));
    let address = format!(
        "{} {}, {}",
        rng.random_range(1..=150),
        pick(rng, &names::STREETS),
        pick(rng, &names::CITIES)
    );
    Patient {
        patient_number,
        email: email(first_name, last_name),
        medical_history: MedicalHistory {
            conditions: Vec::new(),
            allergies: Vec::new(),
            medications: Vec::new(),
            notes: format!("Dossier de test généré pour {first_name} {last_name}."),
        },
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        date_of_birth,
        gender,
        phone_number,
        address,
        documents: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}

/// `{lastname without spaces}.{firstname}@gmail.com`, lowercased.
fn email(first_name: &str, last_name: &str) -> String {
    let last_name: String = last_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!(
        "{}.{}@gmail.com",
        last_name.to_lowercase(),
        first_name.to_lowercase()
    )
}

mod iso {
    use jiff::{Timestamp, civil::Date};
    use serde::Serializer;

    pub fn date_at_utc_midnight<S: Serializer>(date: &Date, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.strftime("%Y-%m-%dT00:00:00.000Z"))
    }

    pub fn timestamp<S: Serializer>(ts: &Timestamp, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&format_args!(
            "{}.{:03}Z",
            ts.strftime("%Y-%m-%dT%H:%M:%S"),
            ts.subsec_millisecond()
        ))
    }
}
