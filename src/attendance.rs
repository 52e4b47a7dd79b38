//! Per-week, per-student attendance marks.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{TutorLogError, TutorLogResult};
use crate::student::Student;
use crate::week::Week;

/// Attendance table for one tutorial, keyed by the same week set as its
/// timetable. Every enrolled student has a mark for every active week;
/// roster changes go through [`crate::Tutorial`], which keeps the two in
/// sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    marks: BTreeMap<Week, HashMap<Student, bool>>,
}

impl Attendance {
    /// Builds the table with every (week, student) pair marked absent.
    pub fn new(weeks: &BTreeSet<Week>, students: &[Student]) -> Self {
        let mut marks = BTreeMap::new();
        for &week in weeks {
            let row: HashMap<Student, bool> =
                students.iter().cloned().map(|s| (s, false)).collect();
            marks.insert(week, row);
        }
        Attendance { marks }
    }

    /// Inserts a default-absent mark for this student in every active week.
    /// Callers are responsible for not adding the same student twice.
    pub fn add_student(&mut self, student: &Student) {
        for row in self.marks.values_mut() {
            row.insert(student.clone(), false);
        }
    }

    /// Removes all of this student's marks across all weeks.
    pub fn delete_student(&mut self, student: &Student) {
        for row in self.marks.values_mut() {
            row.remove(student);
        }
    }

    /// Moves `target`'s marks over to the `edited` record.
    pub(crate) fn replace_student(&mut self, target: &Student, edited: &Student) {
        for row in self.marks.values_mut() {
            if let Some(mark) = row.remove(target) {
                row.insert(edited.clone(), mark);
            }
        }
    }

    /// Marks `student` present in `week`. Unknown weeks or students indicate
    /// a data error upstream and are reported rather than ignored.
    pub fn set_attendance(&mut self, week: Week, student: &Student) -> TutorLogResult<()> {
        let row = self
            .marks
            .get_mut(&week)
            .ok_or(TutorLogError::UnknownWeek(week))?;
        let mark = row
            .get_mut(student)
            .ok_or_else(|| TutorLogError::UnknownStudent(student.name.clone()))?;
        *mark = true;
        Ok(())
    }

    pub fn is_present(&self, week: Week, student: &Student) -> bool {
        self.marks
            .get(&week)
            .and_then(|row| row.get(student))
            .copied()
            .unwrap_or(false)
    }

    /// Number of weeks holding a mark for this student.
    pub fn entries_for(&self, student: &Student) -> usize {
        self.marks
            .values()
            .filter(|row| row.contains_key(student))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weeks(values: &[u32]) -> BTreeSet<Week> {
        values.iter().map(|&v| Week(v)).collect()
    }

    fn alice() -> Student {
        Student::new("Alice", "alice@example.com")
    }

    #[test]
    fn test_new_table_is_all_absent() {
        let attendance = Attendance::new(&weeks(&[1, 2, 3]), &[alice()]);
        assert_eq!(attendance.entries_for(&alice()), 3);
        assert!(!attendance.is_present(Week(1), &alice()));
    }

    #[test]
    fn test_delete_then_readd_resets_marks() {
        let mut attendance = Attendance::new(&weeks(&[1, 2]), &[alice()]);
        attendance.set_attendance(Week(1), &alice()).unwrap();

        attendance.delete_student(&alice());
        assert_eq!(attendance.entries_for(&alice()), 0);

        attendance.add_student(&alice());
        assert_eq!(attendance.entries_for(&alice()), 2);
        assert!(!attendance.is_present(Week(1), &alice()));
    }

    #[test]
    fn test_set_attendance_unknown_week_or_student() {
        let mut attendance = Attendance::new(&weeks(&[1]), &[alice()]);

        assert_eq!(
            attendance.set_attendance(Week(9), &alice()),
            Err(TutorLogError::UnknownWeek(Week(9)))
        );

        let bob = Student::new("Bob", "bob@example.com");
        assert_eq!(
            attendance.set_attendance(Week(1), &bob),
            Err(TutorLogError::UnknownStudent("Bob".to_string()))
        );

        // failed calls leave the table untouched
        assert!(!attendance.is_present(Week(1), &alice()));
    }

    #[test]
    fn test_set_attendance_marks_present() {
        let mut attendance = Attendance::new(&weeks(&[1, 2]), &[alice()]);
        attendance.set_attendance(Week(2), &alice()).unwrap();
        assert!(attendance.is_present(Week(2), &alice()));
        assert!(!attendance.is_present(Week(1), &alice()));
    }
}
