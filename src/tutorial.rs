//! Tutorial aggregate: roster, attendance, assignments and the event log.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use chrono::{DateTime, Duration, NaiveTime, Utc, Weekday};

use crate::assignment::{Assignment, NOT_SUBMITTED};
use crate::attendance::Attendance;
use crate::error::{TutorLogError, TutorLogResult};
use crate::event::Event;
use crate::semester::Semester;
use crate::student::Student;
use crate::timetable::TimeTable;
use crate::week::Week;

/// A recurring weekly class session with a fixed roster.
///
/// Owns its timetable and attendance exclusively: they are created together
/// and every roster mutation updates both, so the two cannot drift. The
/// event log holds concrete occurrences, duplicate-free and sorted by start
/// time.
#[derive(Debug, Clone)]
pub struct Tutorial {
    name: String,
    timetable: TimeTable,
    students: Vec<Student>,
    module_code: String,
    attendance: Attendance,
    assignments: BTreeMap<Assignment, HashMap<Student, i32>>,
    event_log: Vec<Event>,
}

impl Tutorial {
    pub fn new(
        name: &str,
        day: Weekday,
        start_time: NaiveTime,
        weeks: BTreeSet<Week>,
        duration: Duration,
        students: Vec<Student>,
        module_code: &str,
    ) -> TutorLogResult<Self> {
        let timetable = TimeTable::new(day, start_time, weeks, duration)?;
        let attendance = Attendance::new(timetable.weeks(), &students);
        Ok(Tutorial {
            name: name.to_string(),
            timetable,
            students,
            module_code: module_code.to_string(),
            attendance,
            assignments: BTreeMap::new(),
            event_log: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timetable(&self) -> &TimeTable {
        &self.timetable
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn module_code(&self) -> &str {
        &self.module_code
    }

    pub fn attendance(&self) -> &Attendance {
        &self.attendance
    }

    // ROSTER:

    /// Enrolls a student, giving them default-absent attendance marks for
    /// every active week. Existing assignments are not extended.
    pub fn add_student(&mut self, student: Student) {
        self.attendance.add_student(&student);
        self.students.push(student);
    }

    /// Removes a student and all their attendance marks.
    pub fn delete_student(&mut self, student: &Student) {
        self.students.retain(|s| s != student);
        self.attendance.delete_student(student);
    }

    /// Replaces `target` (matched by identity) with `edited`, migrating the
    /// attendance marks over to the new record.
    pub fn set_student(&mut self, target: &Student, edited: Student) {
        for slot in self.students.iter_mut() {
            if slot.is_same_student(target) {
                self.attendance.replace_student(slot, &edited);
                *slot = edited.clone();
            }
        }
    }

    pub fn set_attendance(&mut self, week: Week, student: &Student) -> TutorLogResult<()> {
        self.attendance.set_attendance(week, student)
    }

    // ASSIGNMENTS:

    /// Registers an assignment with every enrolled student at NOT_SUBMITTED.
    /// Re-adding an existing assignment resets all markers.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        let markers = self
            .students
            .iter()
            .cloned()
            .map(|s| (s, NOT_SUBMITTED))
            .collect();
        self.assignments.insert(assignment, markers);
    }

    /// Removes an assignment. Returns whether it existed.
    pub fn delete_assignment(&mut self, assignment: &Assignment) -> bool {
        self.assignments.remove(assignment).is_some()
    }

    /// Replaces `target` with `replacement`: the replacement inherits the
    /// target's submission markers and the target is removed. Markers held
    /// for students no longer enrolled carry over as-is.
    pub fn set_assignment(
        &mut self,
        target: &Assignment,
        replacement: Assignment,
    ) -> TutorLogResult<()> {
        let inherited = self
            .assignments
            .remove(target)
            .ok_or_else(|| TutorLogError::UnknownAssignment(target.name.clone()))?;
        self.add_assignment(replacement.clone());
        let row = self
            .assignments
            .get_mut(&replacement)
            .expect("assignment registered above");
        row.extend(inherited);
        Ok(())
    }

    /// Positional lookup in the assignment table's key order.
    pub fn assignment_at(&self, index: usize) -> TutorLogResult<&Assignment> {
        self.assignments
            .keys()
            .nth(index)
            .ok_or(TutorLogError::IndexOutOfRange {
                index,
                len: self.assignments.len(),
            })
    }

    /// Submission markers for an assignment, if it is registered.
    pub fn submissions(&self, assignment: &Assignment) -> Option<&HashMap<Student, i32>> {
        self.assignments.get(assignment)
    }

    /// Records a submission marker for a student on an assignment.
    pub fn set_submission(
        &mut self,
        assignment: &Assignment,
        student: &Student,
        marker: i32,
    ) -> TutorLogResult<()> {
        let row = self
            .assignments
            .get_mut(assignment)
            .ok_or_else(|| TutorLogError::UnknownAssignment(assignment.name.clone()))?;
        let slot = row
            .get_mut(student)
            .ok_or_else(|| TutorLogError::UnknownStudent(student.name.clone()))?;
        *slot = marker;
        Ok(())
    }

    // EVENT LOG:

    /// Adds an event, rejecting structural duplicates. The log stays sorted
    /// by start time; equal start times keep their insertion order.
    pub fn add_event(&mut self, event: Event) -> TutorLogResult<()> {
        if self.event_log.contains(&event) {
            return Err(TutorLogError::DuplicateEvent(event.label.clone()));
        }
        self.event_log.push(event);
        self.event_log.sort_by_key(|e| e.start);
        Ok(())
    }

    /// Removes an event by value. Returns whether it was present.
    pub fn delete_event(&mut self, event: &Event) -> bool {
        match self.event_log.iter().position(|e| e == event) {
            Some(index) => {
                self.event_log.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes an event by position, returning it. Unlike value-based
    /// deletion, a bad index is an error rather than a `false`.
    pub fn delete_event_at(&mut self, index: usize) -> TutorLogResult<Event> {
        if index >= self.event_log.len() {
            return Err(TutorLogError::IndexOutOfRange {
                index,
                len: self.event_log.len(),
            });
        }
        Ok(self.event_log.remove(index))
    }

    /// Total logged hours, truncated to whole hours per event before
    /// summing.
    pub fn hours(&self) -> i64 {
        self.event_log.iter().map(Event::hours).sum()
    }

    /// Derives this tutorial's past-or-present occurrences as events.
    pub fn as_events(&self, semester: &Semester) -> Vec<Event> {
        self.as_events_at(semester, Utc::now())
    }

    /// Testable form of [`Tutorial::as_events`] with an explicit clock.
    ///
    /// Each slot in the ascending week set advances the occurrence by
    /// exactly one calendar week, regardless of numeric gaps between week
    /// values; only weeks at or before the current week materialize. An
    /// unset anchor yields an empty list, not an error.
    pub fn as_events_at(&self, semester: &Semester, now: DateTime<Utc>) -> Vec<Event> {
        let Some(anchor) = semester.start() else {
            return Vec::new();
        };
        let Some(current_week) = self.timetable.current_week_at(semester, now) else {
            return Vec::new();
        };

        let first = self.timetable.first_occurrence(anchor);
        let mut start = first.and_time(self.timetable.start_time()).and_utc();
        let mut end = start + self.timetable.duration();
        let label = format!("{} {}", self.name, self.module_code);

        let mut events = Vec::new();
        for &week in self.timetable.weeks() {
            if week <= current_week {
                events.push(Event::new(&label, start, end));
            }
            start += Duration::days(7);
            end += Duration::days(7);
        }
        events
    }

    /// Returns the event log, first folding in derived occurrences that have
    /// already taken place. Occurrences already present are skipped, so
    /// repeated calls never duplicate entries.
    pub fn event_log(&mut self, semester: &Semester) -> &[Event] {
        self.event_log_at(semester, Utc::now())
    }

    /// Testable form of [`Tutorial::event_log`] with an explicit clock.
    pub fn event_log_at(&mut self, semester: &Semester, now: DateTime<Utc>) -> &[Event] {
        for event in self.as_events_at(semester, now) {
            if !self.event_log.contains(&event) {
                self.event_log.push(event);
            }
        }
        self.event_log.sort_by_key(|e| e.start);
        &self.event_log
    }

    /// Identity check used for duplicate detection: name, timetable and
    /// module code only. Roster and attendance are ignored.
    pub fn is_same_tutorial(&self, other: &Tutorial) -> bool {
        self.name == other.name
            && self.timetable == other.timetable
            && self.module_code == other.module_code
    }
}

/// Structural equality over identity and data fields. The assignment table
/// and event log are excluded.
impl PartialEq for Tutorial {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.students == other.students
            && self.module_code == other.module_code
            && self.timetable == other.timetable
            && self.attendance == other.attendance
    }
}

impl fmt::Display for Tutorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weeks = self
            .timetable
            .weeks()
            .iter()
            .map(Week::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let students = self
            .students
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{} | {} | {} | [{}] | {}min | Students: {} | {}",
            self.name,
            self.timetable.day(),
            self.timetable.start_time().format("%H:%M"),
            weeks,
            self.timetable.duration().num_minutes(),
            students,
            self.module_code
        )
    }
}
