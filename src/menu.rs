use crate::display;
use crate::model::{Roster, Student, StudentId, StudentPatch};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use tracing::info;

const MENU: &str = "\
1. Add student
2. List all students
3. Find student
4. Update student
5. Delete student
6. Add grade
7. Top students
8. Students by class
9. Class statistics
0. Exit";

/// Interactive front end over a roster. Input ends either with the exit
/// entry or at end of input.
pub struct Menu<'a, R, W> {
    roster: &'a mut Roster,
    input: R,
    output: W,
    decimals: usize,
    top: usize,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// `decimals` is used when showing averages, `top` is the number of
    /// students shown by the top students entry.
    pub fn new(roster: &'a mut Roster, input: R, output: W, decimals: usize, top: usize) -> Self {
        Menu {
            roster,
            input,
            output,
            decimals,
            top,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("Choice")? else {
                break;
            };
            let keep_going = match choice.as_str() {
                "1" => self.add_student()?,
                "2" => self.list_students()?,
                "3" => self.find_student()?,
                "4" => self.update_student()?,
                "5" => self.delete_student()?,
                "6" => self.add_grade()?,
                "7" => self.top_students()?,
                "8" => self.students_by_class()?,
                "9" => self.class_statistics()?,
                "0" => false,
                other => {
                    writeln!(self.output, "Unknown choice: {other}")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        info!(students = self.roster.len(), "leaving menu");
        writeln!(self.output, "Goodbye.")
    }

    /// Read a trimmed line, or `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Like [`Menu::prompt`], asking again until the answer is not empty.
    fn prompt_required(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            match self.prompt(label)? {
                Some(answer) if answer.is_empty() => {
                    writeln!(self.output, "{label} cannot be empty.")?;
                }
                answer => return Ok(answer),
            }
        }
    }

    /// Ask for an identifier and show the student it designates.
    fn prompt_known_id(&mut self) -> io::Result<Option<StudentId>> {
        let Some(id) = self.prompt_required("ID")? else {
            return Ok(None);
        };
        let id = StudentId::from(id);
        match self.roster.find(&id) {
            Some(s) => display::display_student(&mut self.output, s, self.decimals)?,
            None => {
                writeln!(self.output, "Student {id} not found.")?;
                return Ok(None);
            }
        }
        Ok(Some(id))
    }

    // Each action returns `false` when input ended while it was running.

    fn add_student(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_required("ID")? else {
            return Ok(false);
        };
        let Some(name) = self.prompt_required("Name")? else {
            return Ok(false);
        };
        let Some(class_name) = self.prompt_required("Class")? else {
            return Ok(false);
        };
        match self.roster.add(Student::new(id, name, class_name)) {
            Ok(()) => writeln!(self.output, "Student added.")?,
            Err(e) => writeln!(self.output, "Cannot add student: {e}.")?,
        }
        Ok(true)
    }

    fn list_students(&mut self) -> io::Result<bool> {
        display::display_all(&mut self.output, &self.roster.list_all(), self.decimals)?;
        Ok(true)
    }

    fn find_student(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_required("ID")? else {
            return Ok(false);
        };
        match self.roster.find(id.as_str()) {
            Some(s) => display::display_student(&mut self.output, s, self.decimals)?,
            None => writeln!(self.output, "Student {id} not found.")?,
        }
        Ok(true)
    }

    fn update_student(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_known_id()? else {
            return Ok(true);
        };
        let mut patch = StudentPatch::default();
        let Some(name) = self.prompt("New name (empty to keep)")? else {
            return Ok(false);
        };
        if !name.is_empty() {
            patch.name = Some(name);
        }
        let Some(class_name) = self.prompt("New class (empty to keep)")? else {
            return Ok(false);
        };
        if !class_name.is_empty() {
            patch.class_name = Some(class_name);
        }
        let mut grades = BTreeMap::new();
        loop {
            let Some(subject) = self.prompt("Subject (empty to finish)")? else {
                return Ok(false);
            };
            if subject.is_empty() {
                break;
            }
            let Some(score) = self.prompt("Score")? else {
                return Ok(false);
            };
            match score.parse::<f64>() {
                Ok(score) => {
                    grades.insert(subject, score);
                }
                Err(_) => writeln!(self.output, "Ignoring non numeric score {score:?}.")?,
            }
        }
        if !grades.is_empty() {
            patch.grades = Some(grades);
        }
        for e in self.roster.update(&id, patch).unwrap_or_default() {
            writeln!(self.output, "Ignoring grade: {e}.")?;
        }
        writeln!(self.output, "Student updated.")?;
        Ok(true)
    }

    fn delete_student(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_known_id()? else {
            return Ok(true);
        };
        let Some(answer) = self.prompt("Delete this student? (y/n)")? else {
            return Ok(false);
        };
        let confirmed = matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes");
        if confirmed && self.roster.remove(&id) {
            writeln!(self.output, "Student deleted.")?;
        } else {
            writeln!(self.output, "Deletion cancelled.")?;
        }
        Ok(true)
    }

    fn add_grade(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_known_id()? else {
            return Ok(true);
        };
        let Some(subject) = self.prompt_required("Subject")? else {
            return Ok(false);
        };
        let Some(score) = self.prompt_required("Score")? else {
            return Ok(false);
        };
        let result = match self.roster.find_mut(&id) {
            Some(s) => s.set_score_str(&subject, &score),
            None => return Ok(true),
        };
        match result {
            Ok(()) => writeln!(self.output, "Grade recorded.")?,
            Err(e) => writeln!(self.output, "Invalid grade: {e}.")?,
        }
        Ok(true)
    }

    fn top_students(&mut self) -> io::Result<bool> {
        writeln!(self.output, "Top {} students:", self.top)?;
        display::display_ranking(&mut self.output, &self.roster.top_n(self.top), self.decimals)?;
        Ok(true)
    }

    fn students_by_class(&mut self) -> io::Result<bool> {
        let Some(class_name) = self.prompt_required("Class")? else {
            return Ok(false);
        };
        let students = self.roster.by_class(&class_name);
        if students.is_empty() {
            writeln!(self.output, "No students in class {class_name}.")?;
        } else {
            display::display_all(&mut self.output, &students, self.decimals)?;
        }
        Ok(true)
    }

    fn class_statistics(&mut self) -> io::Result<bool> {
        let Some(class_name) = self.prompt_required("Class")? else {
            return Ok(false);
        };
        let stats = self.roster.class_statistics(&class_name);
        display::display_class_statistics(&mut self.output, &stats, self.decimals)?;
        Ok(true)
    }
}
