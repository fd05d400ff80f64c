use crate::model::Student;
use crate::stats::ClassStatistics;
use std::io::{self, Write};

const SEPARATOR: &str = "=====================================";

pub fn display_student(out: &mut impl Write, s: &Student, decimals: usize) -> io::Result<()> {
    let summary = s.describe();
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "ID      : {}", summary.id)?;
    writeln!(out, "Name    : {}", summary.name)?;
    writeln!(out, "Class   : {}", summary.class_name)?;
    writeln!(out, "Grades  :")?;
    if summary.grades.is_empty() {
        writeln!(out, "  - no grades yet")?;
    }
    for (subject, score) in &summary.grades {
        writeln!(out, "  - {subject}: {score}")?;
    }
    writeln!(out, "Average : {:.*}", decimals, summary.average)?;
    writeln!(out, "Status  : {}", summary.status)?;
    writeln!(out, "{SEPARATOR}")
}

pub fn display_all(out: &mut impl Write, students: &[&Student], decimals: usize) -> io::Result<()> {
    if students.is_empty() {
        return writeln!(out, "No students registered.");
    }
    for s in students {
        display_student(out, s, decimals)?;
    }
    Ok(())
}

pub fn display_ranking(
    out: &mut impl Write,
    students: &[&Student],
    decimals: usize,
) -> io::Result<()> {
    if students.is_empty() {
        return writeln!(out, "No students registered.");
    }
    for (rank, s) in students.iter().enumerate() {
        writeln!(out, "{}. {} - {:.*}", rank + 1, s, decimals, s.average())?;
    }
    Ok(())
}

pub fn display_class_statistics(
    out: &mut impl Write,
    stats: &ClassStatistics,
    decimals: usize,
) -> io::Result<()> {
    writeln!(out, "Class   : {}", stats.class_name)?;
    writeln!(out, "Students: {}", stats.count)?;
    writeln!(out, "Average : {:.*}", decimals, stats.average)?;
    match stats.top_student {
        Some(s) => writeln!(out, "Top     : {} - {:.*}", s, decimals, s.average()),
        None => writeln!(out, "Top     : -"),
    }
}
