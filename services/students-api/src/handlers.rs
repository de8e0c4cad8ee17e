//! HTTP handlers

use std::collections::{BTreeMap, HashMap};

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::StudentError;
use crate::roster::{self, Student, ROSTER};

/// `{ count, data }` listing body
#[derive(Debug, Serialize)]
pub struct StudentList {
    pub count: usize,
    pub data: Vec<Student>,
}

impl From<Vec<Student>> for StudentList {
    fn from(data: Vec<Student>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    pub total: usize,
    pub by_major: BTreeMap<String, usize>,
}

/// `GET /`
pub async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Students API",
        "endpoints": [
            "GET /",
            "GET /students",
            "GET /students/{id}",
            "GET /students/major/{major}",
            "GET /stats",
            "GET /health"
        ]
    }))
}

/// `GET /students`, optionally narrowed by `?year=`
pub async fn list_students(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<StudentList>, StudentError> {
    let year = params
        .get("year")
        .map(|year| roster::parse_integer(year).ok_or(StudentError::InvalidYear))
        .transpose()?;

    Ok(Json(roster::in_year(&ROSTER, year).into()))
}

/// `GET /students/{id}`
pub async fn get_student(Path(id): Path<String>) -> Result<Json<Student>, StudentError> {
    let id = roster::parse_integer(&id).ok_or(StudentError::InvalidId)?;
    roster::find(&ROSTER, id)
        .map(Json)
        .ok_or(StudentError::StudentNotFound)
}

/// `GET /students/major/{major}`
pub async fn students_by_major(Path(major): Path<String>) -> Json<StudentList> {
    Json(roster::in_major(&ROSTER, &major).into())
}

/// `GET /stats`
pub async fn stats() -> Json<RosterStats> {
    Json(RosterStats {
        total: ROSTER.len(),
        by_major: roster::by_major(&ROSTER),
    })
}
