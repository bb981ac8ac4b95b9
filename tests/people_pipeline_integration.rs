//! Pipelines over the people fixture
//!
//! The people dataset is literal and versioned, so these tests assert
//! exact aggregates: 1000 records, ages summing to 50667 in [1, 91].

mod common;

use seqkit::fixtures::{self, Person};
use seqkit::sequence::{Counting, Sequence, ToSet};

fn people() -> Vec<Person> {
    common::init_tracing();
    fixtures::people().expect("people fixture should load")
}

fn person_aged(age: u32) -> Person {
    Person {
        id: age,
        first_name: "Adam".to_string(),
        last_name: "White".to_string(),
        email: "adam.white@example.com".to_string(),
        gender: "Male".to_string(),
        age,
    }
}

#[test]
fn test_ten_minors_pass_the_filter() {
    let minors = Sequence::from_vec(people())
        .filter(|p| p.age <= 18)
        .limit(10)
        .collect()
        .unwrap();

    assert_eq!(minors.len(), 10);
    for person in &minors {
        assert!(person.age <= 18, "{} is older than 18", person.age);
    }
}

#[test]
fn test_iterated_ages_stay_even() {
    let generations = Sequence::iterate(person_aged(0), |p| person_aged(p.age + 2))
        .limit(10)
        .collect()
        .unwrap();

    assert_eq!(generations.len(), 10);
    for person in &generations {
        assert_eq!(person.age % 2, 0, "{} is odd", person.age);
    }
    assert_eq!(generations.last().unwrap().age, 18);
}

#[test]
fn test_youngest_person_is_one() {
    let youngest = Sequence::from_vec(people())
        .min_by(|a, b| a.age.cmp(&b.age))
        .unwrap();
    assert_eq!(youngest.age, 1);
}

#[test]
fn test_oldest_person_is_ninety_one() {
    let oldest = Sequence::from_vec(people())
        .max_by(|a, b| a.age.cmp(&b.age))
        .unwrap();
    assert_eq!(oldest.age, 91);
}

#[test]
fn test_email_projection_keeps_count() {
    let emails = Sequence::from_vec(people())
        .map(|p| p.email)
        .collect()
        .unwrap();
    assert_eq!(emails.len(), 1000);
}

#[test]
fn test_emails_are_distinct() {
    let unique = Sequence::from_vec(people())
        .map(|p| p.email)
        .collect_with(ToSet::new())
        .unwrap();
    assert_eq!(unique.len(), 1000);
}

#[test]
fn test_first_person_in_age_window_is_six() {
    let found = Sequence::from_vec(people())
        .find_first(|p| p.age > 5 && p.age < 10)
        .expect("someone between 5 and 10 exists");
    assert_eq!(found.age, 6);
}

#[test]
fn test_ages_sum_to_expected_total() {
    let total: u64 = Sequence::from_vec(people())
        .sum_by(|p| p.age as u64)
        .unwrap();
    assert_eq!(total, 50667);
}

#[test]
fn test_average_age_truncates_to_fifty() {
    let average = Sequence::from_vec(people())
        .average_by(|p| p.age as f64)
        .unwrap();
    assert_eq!(average as u64, 50);
}

#[test]
fn test_grouping_minors_by_age_yields_forty_nine_groups() {
    let groups = Sequence::from_vec(people())
        .filter(|p| p.age < 50)
        .group_by(|p| p.age, Counting::new)
        .unwrap();

    assert_eq!(groups.len(), 49);
    for (age, count) in &groups {
        assert!(*age < 50);
        assert!(*count >= 1);
    }
}

#[test]
fn test_distinct_ages_cover_the_full_range() {
    let ages = Sequence::from_vec(people())
        .map(|p| p.age)
        .distinct()
        .collect()
        .unwrap();

    assert!(ages.contains(&1));
    assert!(ages.contains(&91));
    assert!(ages.len() >= 49);
}
