use crate::model::Student;

/// Aggregates over the students of a class.
#[derive(Clone, Debug)]
pub struct ClassStatistics<'a> {
    pub class_name: String,
    pub count: usize,
    /// Mean of the students' averages, 0 for an empty class.
    pub average: f64,
    pub top_student: Option<&'a Student>,
}

pub fn class_statistics<'a>(class_name: &str, students: &[&'a Student]) -> ClassStatistics<'a> {
    let count = students.len();
    let average = if count == 0 {
        0.0
    } else {
        students.iter().map(|s| s.average()).sum::<f64>() / count as f64
    };
    // The first student wins among equal averages.
    let top_student = students.iter().copied().fold(None, |best: Option<&'a Student>, s| {
        match best {
            Some(b) if b.average() >= s.average() => Some(b),
            _ => Some(s),
        }
    });
    ClassStatistics {
        class_name: class_name.to_owned(),
        count,
        average,
        top_student,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_class() {
        let stats = class_statistics("10A", &[]);
        assert_eq!(stats.class_name, "10A");
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average, 0.0);
        assert!(stats.top_student.is_none());
    }

    #[test]
    fn test_ties_keep_first() {
        let mut a = Student::new("a", "A", "10A");
        a.set_score("math", 85.0).unwrap();
        let mut b = Student::new("b", "B", "10A");
        b.set_score("math", 85.0).unwrap();
        let c = Student::new("c", "C", "10A");
        let stats = class_statistics("10A", &[&c, &a, &b]);
        assert_eq!(stats.count, 3);
        assert!((stats.average - 170.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.top_student.map(|s| s.name.as_str()), Some("A"));
    }
}
