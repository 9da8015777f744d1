//! Course catalog model

use super::Course;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The school's course catalog, in import order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Course>", into = "Vec<Course>")]
pub struct Catalog {
    courses: Vec<Course>,
    /// Course id -> index into `courses`
    index: HashMap<u32, usize>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course to the catalog
    ///
    /// # Returns
    /// `true` if the course was added, `false` if a course with that id already exists
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.index.contains_key(&course.id) {
            return false;
        }
        self.index.insert(course.id, self.courses.len());
        self.courses.push(course);
        true
    }

    /// Get a course by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Course> {
        self.index.get(&id).map(|&idx| &self.courses[idx])
    }

    /// Find the first course with a catalog code
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| c.course_code.as_deref() == Some(code))
    }

    /// All courses in import order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses whose id appears in `ids`, in catalog order
    ///
    /// Unknown ids are skipped and an id listed more than once yields the
    /// course once.
    #[must_use]
    pub fn resolve(&self, ids: &[u32]) -> Vec<&Course> {
        resolve_selection(&self.courses, ids)
    }

    /// Names of the catalog courses listed in `ids`, in catalog order
    #[must_use]
    pub fn prerequisite_names(&self, ids: &[u32]) -> Vec<&str> {
        prerequisite_names(&self.courses, ids)
    }

    /// Prerequisite ids that do not match any catalog course
    ///
    /// # Returns
    /// `(course name, missing id)` pairs
    #[must_use]
    pub fn dangling_prerequisites(&self) -> Vec<(&str, u32)> {
        self.courses
            .iter()
            .flat_map(|course| {
                course
                    .prerequisite_ids
                    .iter()
                    .filter(|id| !self.index.contains_key(id))
                    .map(move |id| (course.name.as_str(), *id))
            })
            .collect()
    }
}

impl From<Vec<Course>> for Catalog {
    fn from(courses: Vec<Course>) -> Self {
        let mut catalog = Self::new();
        for course in courses {
            catalog.add_course(course);
        }
        catalog
    }
}

impl From<Catalog> for Vec<Course> {
    fn from(catalog: Catalog) -> Self {
        catalog.courses
    }
}

/// Courses from `catalog` whose id is in `ids`, in catalog order, each at most once
#[must_use]
pub fn resolve_selection<'a>(catalog: &'a [Course], ids: &[u32]) -> Vec<&'a Course> {
    let wanted: HashSet<u32> = ids.iter().copied().collect();
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|c| wanted.contains(&c.id) && seen.insert(c.id))
        .collect()
}

/// Names of catalog courses whose id is in `ids`, in catalog order
#[must_use]
pub fn prerequisite_names<'a>(catalog: &'a [Course], ids: &[u32]) -> Vec<&'a str> {
    catalog
        .iter()
        .filter(|c| ids.contains(&c.id))
        .map(|c| c.name.as_str())
        .collect()
}
