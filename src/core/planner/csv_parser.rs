//! CSV parser for course catalogs
//!
//! Expected header (column order is free, names are case-insensitive):
//!
//! ```text
//! CourseCode,CourseName,Department,Duration,BlockType,Credits,GradeLevels,Prerequisites,IsAdvanced,Description,PeriodsRequired,WorkloadLevel
//! ```

use crate::core::calendar::DurationType;
use crate::core::models::Course;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a course catalog CSV file
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// Courses in row order with ids assigned from 1
///
/// # Errors
/// Returns an error if the file cannot be read or has no header row
pub fn parse_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Course>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_catalog_str(&content)
}

/// Parse course catalog CSV content
///
/// Rows without a course name are skipped. Prerequisite codes are resolved
/// in a second pass against every course sharing that code; codes that
/// match no course are dropped.
///
/// # Errors
/// Returns an error if there is no header row or it lacks a `CourseName` column
pub fn parse_catalog_str(content: &str) -> Result<Vec<Course>, Box<dyn Error>> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let header_line = lines.next().ok_or("Catalog CSV is empty")?;
    let headers = parse_csv_line(header_line.trim_start_matches('\u{feff}'));

    if !headers.iter().any(|h| h.eq_ignore_ascii_case("CourseName")) {
        return Err("Catalog CSV header has no CourseName column".into());
    }

    // First pass: create all courses without prerequisites
    let mut courses: Vec<Course> = Vec::new();
    let mut prereq_codes: Vec<Vec<String>> = Vec::new();

    for line in lines {
        let fields = parse_csv_line(line);
        match parse_course_row(&fields, &headers) {
            Ok(mut course) => {
                course.id = u32::try_from(courses.len() + 1)?;
                prereq_codes.push(split_list(get_field(&fields, "Prerequisites", &headers).unwrap_or_default()));
                courses.push(course);
            }
            Err(e) => crate::warn!("Skipping catalog row: {e}"),
        }
    }

    // Second pass: link prerequisite codes to course ids
    let mut ids_by_code: HashMap<&str, Vec<u32>> = HashMap::new();
    let mut first_row_for_code: HashMap<&str, usize> = HashMap::new();
    for (row, course) in courses.iter().enumerate() {
        if let Some(code) = course.course_code.as_deref() {
            ids_by_code.entry(code).or_default().push(course.id);
            first_row_for_code.entry(code).or_insert(row);
        }
    }

    let links: Vec<Vec<u32>> = courses
        .iter()
        .enumerate()
        .map(|(row, course)| {
            // Courses sharing a code share the first row's prerequisites
            let source_row = course
                .course_code
                .as_deref()
                .and_then(|code| first_row_for_code.get(code).copied())
                .unwrap_or(row);
            prereq_codes[source_row]
                .iter()
                .filter_map(|code| ids_by_code.get(code.as_str()))
                .flatten()
                .copied()
                .collect()
        })
        .collect();

    for (course, prereq_ids) in courses.iter_mut().zip(links) {
        for id in prereq_ids {
            course.add_prerequisite(id);
        }
    }

    crate::debug!("Parsed {} courses from catalog CSV", courses.len());
    Ok(courses)
}

/// Parse a single catalog row
fn parse_course_row(fields: &[String], headers: &[String]) -> Result<Course, Box<dyn Error>> {
    let name = get_field(fields, "CourseName", headers).unwrap_or_default();
    if name.is_empty() {
        return Err("Missing course name".into());
    }

    let department = get_field(fields, "Department", headers).unwrap_or_default();
    let credits = get_field(fields, "Credits", headers)
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(0.0);

    let mut course = Course::new(0, name.to_string(), department.to_string(), credits);

    course.course_code = get_field(fields, "CourseCode", headers)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    course.duration = duration_from_credits(
        credits,
        get_field(fields, "Duration", headers).unwrap_or_default(),
    );
    course.block_type = match get_field(fields, "BlockType", headers) {
        Some(s) if !s.is_empty() => s.parse::<DurationType>().unwrap_or_else(|e| {
            crate::warn!("{name}: {e}, treating as Block");
            DurationType::Block
        }),
        _ => DurationType::Block,
    };
    course.grade_levels = split_list(get_field(fields, "GradeLevels", headers).unwrap_or_default())
        .iter()
        .filter_map(|g| g.parse::<u8>().ok())
        .collect();
    course.is_advanced = get_field(fields, "IsAdvanced", headers).is_some_and(parse_bool);
    course.description = get_field(fields, "Description", headers)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    if let Some(periods) = get_field(fields, "PeriodsRequired", headers).and_then(|s| s.parse().ok()) {
        course.periods_required = periods;
    }
    if let Some(workload) = get_field(fields, "WorkloadLevel", headers).and_then(|s| s.parse().ok()) {
        course.workload_level = workload;
    }

    Ok(course)
}

/// Duration category implied by a credit amount, falling back to the CSV value
///
/// Half a credit is a semester, one credit a full year.
#[must_use]
pub fn duration_from_credits(credits: f32, csv_duration: &str) -> String {
    let label = match credits {
        c if (c - 0.5).abs() < f32::EPSILON => "Semester",
        c if (c - 1.0).abs() < f32::EPSILON => "Full Year",
        c if (c - 1.5).abs() < f32::EPSILON => "3 Semesters",
        c if (c - 2.0).abs() < f32::EPSILON => "2-Year Course",
        _ => csv_duration,
    };
    label.to_string()
}

/// Split a `,` or `;` separated list, dropping empty entries
fn split_list(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

/// Parse a CSV line into fields, honouring double-quoted fields
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Get a field value from a parsed row by header name
fn get_field<'a>(fields: &'a [String], header_name: &str, headers: &[String]) -> Option<&'a str> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(header_name))
        .and_then(|idx| fields.get(idx))
        .map(String::as_str)
}
