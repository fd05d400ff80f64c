use super::*;
use crate::error::{GradeError, RosterError};
use crate::stats::{ClassStatistics, class_statistics};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Partial modification of a student. Absent fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub grades: Option<BTreeMap<String, f64>>,
}

impl StudentPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn grade(mut self, subject: impl Into<String>, score: f64) -> Self {
        self.grades
            .get_or_insert_with(BTreeMap::new)
            .insert(subject.into(), score);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.class_name.is_none() && self.grades.is_none()
    }
}

/// Students, in registration order, with unique identifiers.
#[derive(Debug)]
pub struct Roster {
    students: Vec<Student>,
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new()
    }
}

impl Roster {
    pub fn new() -> Roster {
        Roster {
            students: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: &StudentId) -> Option<usize> {
        self.students.iter().position(|s| &s.id == id)
    }

    /// Register a new student. Fails without touching the roster if the
    /// identifier is already in use.
    pub fn add(&mut self, student: Student) -> Result<(), RosterError> {
        if self.position(&student.id).is_some() {
            debug!(student = %student, "duplicate identifier refused");
            return Err(RosterError::DuplicateId(student.id));
        }
        debug!(student = %student, "student added");
        self.students.push(student);
        Ok(())
    }

    /// Remove a student, returning whether it was registered.
    pub fn remove(&mut self, id: impl Into<StudentId>) -> bool {
        let id = id.into();
        match self.position(&id) {
            Some(pos) => {
                let student = self.students.remove(pos);
                debug!(student = %student, "student removed");
                true
            }
            None => false,
        }
    }

    pub fn find(&self, id: impl Into<StudentId>) -> Option<&Student> {
        let id = id.into();
        self.students.iter().find(|s| s.id == id)
    }

    pub fn find_mut(&mut self, id: impl Into<StudentId>) -> Option<&mut Student> {
        let id = id.into();
        self.students.iter_mut().find(|s| s.id == id)
    }

    /// Apply `patch` to a student. Returns `None` if the student is not
    /// registered, or the grades that were skipped. Invalid grades in the
    /// patch are skipped one by one, the remaining fields being applied
    /// anyway.
    pub fn update(
        &mut self,
        id: impl Into<StudentId>,
        patch: StudentPatch,
    ) -> Option<Vec<GradeError>> {
        let student = self.find_mut(id)?;
        if let Some(name) = patch.name {
            student.name = name;
        }
        if let Some(class_name) = patch.class_name {
            student.class_name = class_name;
        }
        let mut skipped = Vec::new();
        for (subject, score) in patch.grades.unwrap_or_default() {
            if let Err(e) = student.set_score(&subject, score) {
                warn!(student = %student, "grade skipped: {e}");
                skipped.push(e);
            }
        }
        debug!(student = %student, "student updated");
        Some(skipped)
    }

    /// All students in registration order. The returned vector is
    /// independent from the roster.
    pub fn list_all(&self) -> Vec<&Student> {
        self.students.iter().collect()
    }

    /// The `n` students with the best average, best first. Students with
    /// the same average keep their registration order.
    pub fn top_n(&self, n: usize) -> Vec<&Student> {
        let mut ranked = self.list_all();
        ranked.sort_by(|a, b| b.average().total_cmp(&a.average()));
        ranked.truncate(n);
        ranked
    }

    pub fn by_class(&self, class_name: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.class_name == class_name)
            .collect()
    }

    pub fn class_statistics<'a>(&'a self, class_name: &str) -> ClassStatistics<'a> {
        class_statistics(class_name, &self.by_class(class_name))
    }
}
