//! Load catalogs, plans and offerings from disk

use super::csv_parser::parse_catalog_csv;
use crate::core::graduation::GraduationRequirements;
use crate::core::models::{Catalog, ClassOffering, StudentPlan};
use std::error::Error;
use std::fs;
use std::path::Path;

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Load a course catalog from a `.csv` or `.json` file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or has another extension
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let path = path.as_ref();
    let catalog = match extension(path).as_str() {
        "csv" => Catalog::from(parse_catalog_csv(path)?),
        "json" => serde_json::from_str(&fs::read_to_string(path)?)?,
        other => {
            return Err(format!("Unsupported catalog format '.{other}' (expected .csv or .json)").into())
        }
    };

    for (course, missing) in catalog.dangling_prerequisites() {
        crate::debug!("{course} lists prerequisite id {missing}, which is not in the catalog");
    }
    for course in catalog.courses() {
        for issue in course.integrity_issues() {
            crate::warn!("Catalog integrity: {issue}");
        }
    }
    Ok(catalog)
}

/// Load a student plan from a `.toml` or `.json` file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or has another extension
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<StudentPlan, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    match extension(path).as_str() {
        "toml" => Ok(toml::from_str(&content)?),
        "json" => Ok(serde_json::from_str(&content)?),
        other => Err(format!("Unsupported plan format '.{other}' (expected .toml or .json)").into()),
    }
}

/// Load a list of class offerings from a `.json` file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_offerings<P: AsRef<Path>>(path: P) -> Result<Vec<ClassOffering>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load graduation requirements from a TOML file, or the built-in table
/// when `path` is `None`
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_requirements(path: Option<&Path>) -> Result<GraduationRequirements, Box<dyn Error>> {
    match path {
        Some(path) => Ok(GraduationRequirements::from_toml(&fs::read_to_string(path)?)?),
        None => Ok(GraduationRequirements::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_plan_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.toml");
        fs::write(
            &path,
            "studentName = \"Test Student\"\ngradeLevel = 9\nschoolYear = \"2025-2026\"\nselectedCourseIds = [1, 2]\n",
        )
        .unwrap();

        let plan = load_plan(&path).unwrap();
        assert_eq!(plan.student_name, "Test Student");
        assert_eq!(plan.selected_course_ids, vec![1, 2]);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.yaml");
        fs::write(&path, "studentName: x").unwrap();

        let err = load_plan(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported plan format '.yaml'"));
        assert!(load_catalog(&path).is_err());
    }

    #[test]
    fn test_load_requirements_default() {
        let reqs = load_requirements(None).unwrap();
        assert_eq!(reqs.departments.len(), 8);
    }

    #[test]
    fn test_load_catalog_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"id": 1, "name": "Art 1", "department": "Electives", "duration": "Semester",
                "blockType": "Skinny", "credits": 0.5}]"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().name, "Art 1");
    }

    #[test]
    fn test_catalog_with_integrity_issues_still_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.csv");
        fs::write(
            &path,
            "CourseCode,CourseName,Department,Credits,GradeLevels,PeriodsRequired,WorkloadLevel\n\
             ART9,Studio Art,Electives,1.0,\"8,9\",3,9\n",
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        let issues = catalog.get(1).unwrap().integrity_issues();
        assert_eq!(issues.len(), 3);
    }
}
