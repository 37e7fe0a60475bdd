//! Checks run against loaded lists before a form is submitted.
//!
//! These give immediate feedback only. Duplicate detection here is case-insensitive and
//! therefore stricter than the server, which compares exactly; the server's answer is the
//! one that counts.

use crate::model::{
    degree::{CreateDegreeDto, DegreeDto, UpdateDegreeDto},
    department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
    teacher::{CreateTeacherDto, TeacherDto, UpdateTeacherDto},
    validation::{Validate, ValidationErrors},
};

fn same(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn rule_errors(payload: &impl Validate) -> ValidationErrors {
    payload.validate().err().unwrap_or_default()
}

fn degree_name_taken(name: &str, degrees: &[DegreeDto], editing: Option<i32>) -> bool {
    degrees
        .iter()
        .any(|d| Some(d.id) != editing && same(&d.name, name))
}

fn abbreviation_taken(
    abbreviation: &str,
    departments: &[DepartmentDto],
    editing: Option<i32>,
) -> bool {
    departments
        .iter()
        .any(|d| Some(d.id) != editing && same(&d.abbreviation, abbreviation))
}

fn email_taken(email: &str, teachers: &[TeacherDto], editing: Option<i32>) -> bool {
    teachers
        .iter()
        .any(|t| Some(t.id) != editing && same(&t.email, email))
}

/// Adds errors for a department or degree name missing from the loaded lists.
fn check_references(
    errors: &mut ValidationErrors,
    department: &str,
    degree: &str,
    departments: &[DepartmentDto],
    degrees: &[DegreeDto],
) {
    let department = department.trim();
    if !department.is_empty() && !departments.iter().any(|d| d.abbreviation == department) {
        errors.add("department", format!("'{}' does not exist", department));
    }

    let degree = degree.trim();
    if !degree.is_empty() && !degrees.iter().any(|d| d.name == degree) {
        errors.add("degree", format!("'{}' does not exist", degree));
    }
}

pub fn check_new_degree(
    payload: &CreateDegreeDto,
    degrees: &[DegreeDto],
) -> Result<(), ValidationErrors> {
    let mut errors = rule_errors(payload);
    if degree_name_taken(&payload.name, degrees, None) {
        errors.add("name", "already exists");
    }
    errors.into_result()
}

pub fn check_degree_edit(
    id: i32,
    payload: &UpdateDegreeDto,
    degrees: &[DegreeDto],
) -> Result<(), ValidationErrors> {
    let mut errors = rule_errors(payload);
    if degree_name_taken(&payload.name, degrees, Some(id)) {
        errors.add("name", "already exists");
    }
    errors.into_result()
}

pub fn check_new_department(
    payload: &CreateDepartmentDto,
    departments: &[DepartmentDto],
) -> Result<(), ValidationErrors> {
    let mut errors = rule_errors(payload);
    if abbreviation_taken(&payload.abbreviation, departments, None) {
        errors.add("abbreviation", "already exists");
    }
    errors.into_result()
}

pub fn check_department_edit(
    id: i32,
    payload: &UpdateDepartmentDto,
    departments: &[DepartmentDto],
) -> Result<(), ValidationErrors> {
    let mut errors = rule_errors(payload);
    if abbreviation_taken(&payload.abbreviation, departments, Some(id)) {
        errors.add("abbreviation", "already exists");
    }
    errors.into_result()
}

/// Checks a new teacher: field rules, free staff code and email, and references that exist
/// in the loaded department and degree lists.
pub fn check_new_teacher(
    payload: &CreateTeacherDto,
    teachers: &[TeacherDto],
    departments: &[DepartmentDto],
    degrees: &[DegreeDto],
) -> Result<(), ValidationErrors> {
    let mut errors = rule_errors(payload);

    if teachers.iter().any(|t| same(&t.teacher_id, &payload.teacher_id)) {
        errors.add("teacherId", "already exists");
    }
    if email_taken(&payload.email, teachers, None) {
        errors.add("email", "already in use");
    }
    check_references(
        &mut errors,
        &payload.department,
        &payload.degree,
        departments,
        degrees,
    );

    errors.into_result()
}

/// Checks an edit of teacher `id`. Its own email does not count as taken.
pub fn check_teacher_edit(
    id: i32,
    payload: &UpdateTeacherDto,
    teachers: &[TeacherDto],
    departments: &[DepartmentDto],
    degrees: &[DegreeDto],
) -> Result<(), ValidationErrors> {
    let mut errors = rule_errors(payload);

    if email_taken(&payload.email, teachers, Some(id)) {
        errors.add("email", "already in use");
    }
    check_references(
        &mut errors,
        &payload.department,
        &payload.degree,
        departments,
        degrees,
    );

    errors.into_result()
}
