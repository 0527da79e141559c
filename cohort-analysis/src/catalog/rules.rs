//! The fixed attribute catalog for the student survey dataset.
//!
//! Thresholds are data contracts and reproduced exactly, including the
//! age-bracket gaps at 17, 24, 25, and 40: ages at or below 17, exactly 24,
//! and exactly 25 fall into no bracket. That mirrors the authored rules and
//! is deliberately not "fixed" here.

use cohort_core::errors::CatalogError;
use cohort_core::record::Record;

use super::types::{AttributeRule, Catalog};

/// Column names consumed by the rules.
const GENDER: &str = "Gender";
const AGE: &str = "Age";
const ACADEMIC_PRESSURE: &str = "Academic Pressure";
const STUDY_SATISFACTION: &str = "Study Satisfaction";
const SLEEP_DURATION: &str = "Sleep Duration";

/// Sleep-duration buckets, normalized form.
const GOOD_SLEEP_BUCKETS: [&str; 2] = ["7-8 hours", "more than 8 hours"];
const BAD_SLEEP_BUCKETS: [&str; 2] = ["less than 5 hours", "5-6 hours"];

/// The full catalog in its authored order: sleep, gender, age, academic
/// pressure, study satisfaction.
pub fn default_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(vec![
        good_sleep_rule(),
        bad_sleep_rule(),
        female_rule(),
        male_rule(),
        young_rule(),
        young_adult_rule(),
        adult_rule(),
        low_academic_pressure_rule(),
        medium_academic_pressure_rule(),
        high_academic_pressure_rule(),
        low_study_satisfaction_rule(),
        medium_study_satisfaction_rule(),
        high_study_satisfaction_rule(),
    ])
}

/// Rule over a normalized string field matching one exact token.
fn token_rule(
    name: &'static str,
    description: &'static str,
    column: &'static str,
    token: &'static str,
) -> AttributeRule {
    AttributeRule::new(name, description, move |record: &Record| {
        record.normalized(column).as_deref() == Some(token)
    })
}

/// Rule over a normalized string field matching any of a set of tokens.
fn bucket_rule(
    name: &'static str,
    description: &'static str,
    column: &'static str,
    buckets: &'static [&'static str],
) -> AttributeRule {
    AttributeRule::new(name, description, move |record: &Record| {
        match record.normalized(column) {
            Some(value) => buckets.contains(&value.as_str()),
            None => false,
        }
    })
}

/// Rule over a safely-parsed numeric field. A missing or unparseable field
/// is a non-match, never an error.
fn numeric_rule(
    name: &'static str,
    description: &'static str,
    column: &'static str,
    pred: fn(f64) -> bool,
) -> AttributeRule {
    AttributeRule::new(name, description, move |record: &Record| {
        record.numeric(column).is_some_and(pred)
    })
}

pub fn good_sleep_rule() -> AttributeRule {
    bucket_rule(
        "HasGoodSleep",
        "sleep duration is 7-8 hours or more than 8 hours",
        SLEEP_DURATION,
        &GOOD_SLEEP_BUCKETS,
    )
}

pub fn bad_sleep_rule() -> AttributeRule {
    bucket_rule(
        "HasBadSleep",
        "sleep duration is less than 5 hours or 5-6 hours",
        SLEEP_DURATION,
        &BAD_SLEEP_BUCKETS,
    )
}

pub fn female_rule() -> AttributeRule {
    token_rule("Gender_Female", "gender equals female", GENDER, "female")
}

pub fn male_rule() -> AttributeRule {
    token_rule("Gender_Male", "gender equals male", GENDER, "male")
}

pub fn young_rule() -> AttributeRule {
    numeric_rule("Age_Young", "17 < age < 25", AGE, |age| {
        age > 17.0 && age < 25.0
    })
}

pub fn young_adult_rule() -> AttributeRule {
    numeric_rule("Age_Young_Adult", "24 < age < 40", AGE, |age| {
        age > 24.0 && age < 40.0
    })
}

pub fn adult_rule() -> AttributeRule {
    numeric_rule("Age_Adult", "age >= 40", AGE, |age| age >= 40.0)
}

pub fn low_academic_pressure_rule() -> AttributeRule {
    numeric_rule(
        "Low_Academic_Pressure",
        "academic pressure < 3.0",
        ACADEMIC_PRESSURE,
        |score| score < 3.0,
    )
}

pub fn medium_academic_pressure_rule() -> AttributeRule {
    numeric_rule(
        "Medium_Academic_Pressure",
        "academic pressure == 3.0",
        ACADEMIC_PRESSURE,
        |score| score == 3.0,
    )
}

pub fn high_academic_pressure_rule() -> AttributeRule {
    numeric_rule(
        "High_Academic_Pressure",
        "academic pressure > 3.0",
        ACADEMIC_PRESSURE,
        |score| score > 3.0,
    )
}

pub fn low_study_satisfaction_rule() -> AttributeRule {
    numeric_rule(
        "Low_Study_Satisfaction",
        "study satisfaction < 3.0",
        STUDY_SATISFACTION,
        |score| score < 3.0,
    )
}

pub fn medium_study_satisfaction_rule() -> AttributeRule {
    numeric_rule(
        "Medium_Study_Satisfaction",
        "study satisfaction == 3.0",
        STUDY_SATISFACTION,
        |score| score == 3.0,
    )
}

pub fn high_study_satisfaction_rule() -> AttributeRule {
    numeric_rule(
        "High_Study_Satisfaction",
        "study satisfaction > 3.0",
        STUDY_SATISFACTION,
        |score| score > 3.0,
    )
}
