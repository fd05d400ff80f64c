use crate::error::GradeError;
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// Minimum average for a student to pass.
pub const PASSING_AVERAGE: f64 = 75.0;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Student identifier, compared by its string form so that `7` and `"7"`
/// designate the same student.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        StudentId(id.to_owned())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        StudentId(id)
    }
}

impl From<&StudentId> for StudentId {
    fn from(id: &StudentId) -> Self {
        id.clone()
    }
}

macro_rules! id_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for StudentId {
                fn from(id: $t) -> Self {
                    StudentId(id.to_string())
                }
            }
        )*
    };
}

id_from_integer!(u32, u64, usize, i32, i64);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn for_average(average: f64) -> Status {
        if average >= PASSING_AVERAGE {
            Status::Pass
        } else {
            Status::Fail
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pass => "Pass",
            Status::Fail => "Fail",
        })
    }
}

#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub class_name: String,
    grades: BTreeMap<String, f64>,
}

/// Read-only snapshot of a student, as shown to users.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentSummary {
    pub id: StudentId,
    pub name: String,
    pub class_name: String,
    pub grades: Vec<(String, f64)>,
    pub average: f64,
    pub status: Status,
}

impl Student {
    pub fn new(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Student {
        Student {
            id: id.into(),
            name: name.into(),
            class_name: class_name.into(),
            grades: BTreeMap::new(),
        }
    }

    /// Set or overwrite the score obtained in `subject`. The grades are
    /// left untouched if the score is rejected.
    pub fn set_score(&mut self, subject: &str, score: f64) -> Result<(), GradeError> {
        if !score.is_finite() {
            return Err(GradeError::NotNumeric {
                subject: subject.to_owned(),
                input: score.to_string(),
            });
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(GradeError::OutOfRange {
                subject: subject.to_owned(),
                score,
            });
        }
        // Turns -0.0 into 0.0.
        let score = score + 0.0;
        trace!(student = %self, subject, score, "score recorded");
        self.grades.insert(subject.to_owned(), score);
        Ok(())
    }

    /// Same as [`Student::set_score`] for a score still in textual form.
    pub fn set_score_str(&mut self, subject: &str, input: &str) -> Result<(), GradeError> {
        let score = input
            .trim()
            .parse::<f64>()
            .map_err(|_| GradeError::NotNumeric {
                subject: subject.to_owned(),
                input: input.to_owned(),
            })?;
        self.set_score(subject, score)
    }

    pub fn score(&self, subject: &str) -> Option<f64> {
        self.grades.get(subject).copied()
    }

    /// Subjects and scores, ordered by subject name.
    pub fn grades(&self) -> impl Iterator<Item = (&str, f64)> {
        self.grades.iter().map(|(s, &v)| (s.as_str(), v))
    }

    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.values().sum::<f64>() / self.grades.len() as f64
    }

    pub fn status(&self) -> Status {
        Status::for_average(self.average())
    }

    pub fn describe(&self) -> StudentSummary {
        StudentSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            class_name: self.class_name.clone(),
            grades: self
                .grades
                .iter()
                .map(|(s, &v)| (s.clone(), v))
                .collect(),
            average: self.average(),
            status: self.status(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
