//! Search and counts over lists already fetched from the server.
//!
//! Matching is a case-insensitive substring test; an empty or blank query matches
//! everything.

use std::collections::HashMap;

use crate::model::{degree::DegreeDto, department::DepartmentDto, teacher::TeacherDto};

fn matches(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// Degrees whose name, specialization or coefficient contains `query`.
pub fn search_degrees<'a>(degrees: &'a [DegreeDto], query: &str) -> Vec<&'a DegreeDto> {
    degrees
        .iter()
        .filter(|d| {
            let coefficient = d.coefficient.to_string();
            matches(query, &[&d.name, &d.specialization, &coefficient])
        })
        .collect()
}

/// Departments whose full name or abbreviation contains `query`.
pub fn search_departments<'a>(
    departments: &'a [DepartmentDto],
    query: &str,
) -> Vec<&'a DepartmentDto> {
    departments
        .iter()
        .filter(|d| matches(query, &[&d.full_name, &d.abbreviation]))
        .collect()
}

/// Narrowing applied to a teacher list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherFilter {
    /// Substring of full name, staff code, email or phone number.
    pub query: String,
    /// Exact department abbreviation.
    pub department: Option<String>,
    /// Exact degree name.
    pub degree: Option<String>,
}

impl TeacherFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn department(mut self, abbreviation: impl Into<String>) -> Self {
        self.department = Some(abbreviation.into());
        self
    }

    pub fn degree(mut self, name: impl Into<String>) -> Self {
        self.degree = Some(name.into());
        self
    }

    pub fn accepts(&self, teacher: &TeacherDto) -> bool {
        if self
            .department
            .as_deref()
            .is_some_and(|d| d != teacher.department)
        {
            return false;
        }

        if self.degree.as_deref().is_some_and(|d| d != teacher.degree) {
            return false;
        }

        matches(
            &self.query,
            &[
                &teacher.full_name,
                &teacher.teacher_id,
                &teacher.email,
                &teacher.phone_number,
            ],
        )
    }

    pub fn apply<'a>(&self, teachers: &'a [TeacherDto]) -> Vec<&'a TeacherDto> {
        teachers.iter().filter(|t| self.accepts(t)).collect()
    }
}

/// Number of loaded teachers per department abbreviation.
pub fn count_by_department(teachers: &[TeacherDto]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for teacher in teachers {
        *counts.entry(teacher.department.clone()).or_insert(0) += 1;
    }
    counts
}

/// Number of loaded teachers per degree name.
pub fn count_by_degree(teachers: &[TeacherDto]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for teacher in teachers {
        *counts.entry(teacher.degree.clone()).or_insert(0) += 1;
    }
    counts
}
