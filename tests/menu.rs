use roster::menu::Menu;
use roster::model::Roster;

fn session(roster: &mut Roster, script: &str) -> String {
    session_with_top(roster, script, 3)
}

fn session_with_top(roster: &mut Roster, script: &str, top: usize) -> String {
    let mut output = Vec::new();
    Menu::new(roster, script.as_bytes(), &mut output, 2, top)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn add_grade_and_list() {
    let mut roster = Roster::new();
    let out = session(
        &mut roster,
        "1\n1\nAda\n10A\n6\n1\nmath\n90\n6\n1\nart\n70\n2\n0\n",
    );
    assert!(out.contains("Student added."));
    assert_eq!(out.matches("Grade recorded.").count(), 2);
    assert!(out.contains("Average : 80.00"));
    assert!(out.contains("Status  : Pass"));
    assert!(out.ends_with("Goodbye.\n"));
    assert_eq!(roster.find("1").unwrap().average(), 80.0);
}

#[test]
fn required_fields_are_asked_again() {
    let mut roster = Roster::new();
    let out = session(&mut roster, "1\n\n2\n  \nBob\n10B\n0\n");
    assert!(out.contains("ID cannot be empty."));
    assert!(out.contains("Name cannot be empty."));
    assert_eq!(roster.find(2).unwrap().name, "Bob");
}

#[test]
fn duplicate_and_invalid_grades_are_reported() {
    let mut roster = Roster::new();
    let out = session(
        &mut roster,
        "1\n1\nAda\n10A\n1\n1\nEve\n10B\n6\n1\nmath\n120\n6\n1\nmath\nabc\n0\n",
    );
    assert!(out.contains("Cannot add student: a student with id 1 is already registered."));
    assert_eq!(out.matches("Invalid grade:").count(), 2);
    let ada = roster.find(1).unwrap();
    assert_eq!(ada.name, "Ada");
    assert!(!ada.has_grades());
    assert_eq!(roster.len(), 1);
}

#[test]
fn update_keeps_blank_fields() {
    let mut roster = Roster::new();
    let out = session(
        &mut roster,
        "1\n1\nAda\n10A\n4\n1\nAda L.\n\nmath\n95\nart\n150\nmusic\nlots\n\n0\n",
    );
    assert!(out.contains("Ignoring non numeric score \"lots\"."));
    assert!(out.contains("Ignoring grade: score for art must be between 0 and 100, got 150."));
    assert!(out.contains("Student updated."));
    let ada = roster.find(1).unwrap();
    assert_eq!(ada.name, "Ada L.");
    assert_eq!(ada.class_name, "10A");
    assert_eq!(ada.score("math"), Some(95.0));
    assert_eq!(ada.score("art"), None);
}

#[test]
fn delete_needs_confirmation() {
    let mut roster = Roster::new();
    let out = session(&mut roster, "1\n1\nAda\n10A\n5\n1\nn\n5\n9\n5\n1\ny\n0\n");
    assert!(out.contains("Deletion cancelled."));
    assert!(out.contains("Student 9 not found."));
    assert!(out.contains("Student deleted."));
    assert!(roster.is_empty());

    let out = session(&mut roster, "1\n2\nBob\n10B\n5\n2\nyes\n0\n");
    assert!(out.contains("Student deleted."));
    assert!(roster.find(2).is_none());
}

#[test]
fn known_student_is_shown_before_changes() {
    let mut roster = Roster::new();
    let out = session(
        &mut roster,
        "1\n1\nAda\n10A\n6\n1\nmath\n90\n4\n1\n\n\n\n5\n1\nn\n0\n",
    );
    // One card for the grade entry, one for the update, one for the deletion.
    assert_eq!(out.matches("ID      : 1\n").count(), 3);
    assert_eq!(out.matches("Average : 90.00\n").count(), 2);
    assert!(out.contains("Average : 90.00\nStatus  : Pass\n=====================================\nDelete this student? (y/n): "));
}

#[test]
fn rankings_and_classes() {
    let mut roster = Roster::new();
    let out = session_with_top(
        &mut roster,
        concat!(
            "1\n1\nAda\n10A\n6\n1\nmath\n90\n",
            "1\n2\nBob\n10A\n6\n2\nmath\n70\n",
            "1\n3\nEve\n10B\n6\n3\nmath\n95\n",
            "7\n8\n10A\n9\n10A\n9\n12C\n8\n12C\n0\n",
        ),
        2,
    );
    assert!(out.contains("Top 2 students:\n1. Eve (3) - 95.00\n2. Ada (1) - 90.00\n"));
    assert!(out.contains("Class   : 10A\nStudents: 2\nAverage : 80.00\nTop     : Ada (1) - 90.00\n"));
    assert!(out.contains("Class   : 12C\nStudents: 0\nAverage : 0.00\nTop     : -\n"));
    assert!(out.contains("No students in class 12C."));
}

#[test]
fn end_of_input_stops_cleanly() {
    let mut roster = Roster::new();
    let out = session(&mut roster, "1\n1\nAda\n");
    assert!(out.ends_with("Goodbye.\n"));
    assert!(roster.is_empty());
}
