//! In-memory student roster

use std::collections::BTreeMap;

use serde::Serialize;

/// One enrolled student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: &'static str,
    pub major: &'static str,
    pub year: i64,
}

/// The mock roster served by every endpoint
pub const ROSTER: [Student; 3] = [
    Student {
        id: 1,
        name: "Gun",
        major: "วิศวกรรมซอฟต์แวร์",
        year: 3,
    },
    Student {
        id: 2,
        name: "Beam",
        major: "วิทยาการคอมพิวเตอร์",
        year: 2,
    },
    Student {
        id: 3,
        name: "Cart",
        major: "วิศวกรรมคอมพิวเตอร์",
        year: 4,
    },
];

/// Parse a numeric parameter that must hold an integer
///
/// Surrounding whitespace is ignored, an empty value counts as 0 and forms
/// such as `3.0` or `3e0` are accepted.
pub fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0);
    }
    let number: f64 = value.parse().ok()?;
    (number.is_finite() && number.fract() == 0.0).then_some(number as i64)
}

pub fn find(students: &[Student], id: i64) -> Option<Student> {
    students.iter().copied().find(|s| s.id == id)
}

/// Students in `year`, or everyone when `year` is `None`
pub fn in_year(students: &[Student], year: Option<i64>) -> Vec<Student> {
    students
        .iter()
        .copied()
        .filter(|s| year.is_none_or(|year| s.year == year))
        .collect()
}

/// Case-insensitive substring match on the major
pub fn in_major(students: &[Student], query: &str) -> Vec<Student> {
    let query = query.trim().to_lowercase();
    students
        .iter()
        .copied()
        .filter(|s| s.major.to_lowercase().contains(&query))
        .collect()
}

/// Head count per trimmed major
pub fn by_major(students: &[Student]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for student in students {
        *counts.entry(student.major.trim().to_string()).or_insert(0) += 1;
    }
    counts
}
