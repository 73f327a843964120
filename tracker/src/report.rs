//! Class-wide statistics folded across every student record

use crate::format;
use crate::student::Student;
use std::io::{self, Write};

pub const REPORT_HEADER: &str = "\n--- Student Grade Summary Report ---";
pub const OVERALL_HEADER: &str = "\n--- Overall Class Statistics ---";
pub const REPORT_FOOTER: &str = "----------------------------------";
pub const NO_STUDENTS: &str = "\nNo students to display. Please add students first.";
pub const NO_GRADES: &str = "No grades entered across all students to calculate overall statistics.";

#[derive(Debug, Clone, PartialEq)]
pub struct ClassStats {
    sum: f64,
    count: usize,
    highest: f64,
    lowest: f64,
}

impl Default for ClassStats {
    fn default() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            highest: 0.0,
            lowest: f64::MAX,
        }
    }
}

impl ClassStats {
    pub fn from_students(students: &[Student]) -> Self {
        students.iter().fold(Self::default(), |mut stats, student| {
            stats.add(student);
            stats
        })
    }

    /// Folds one student in. Ungraded students contribute nothing, so their
    /// 0.0 sentinels never reach `lowest`.
    pub fn add(&mut self, student: &Student) {
        if !student.has_grades() {
            return;
        }
        let count = student.grades().len();
        self.sum += student.average() * count as f64;
        self.count += count;
        if student.highest() > self.highest {
            self.highest = student.highest();
        }
        if student.lowest() < self.lowest {
            self.lowest = student.lowest();
        }
    }

    pub fn grade_count(&self) -> usize {
        self.count
    }

    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    pub fn highest(&self) -> Option<f64> {
        (self.count > 0).then_some(self.highest)
    }

    pub fn lowest(&self) -> Option<f64> {
        (self.count > 0).then_some(self.lowest)
    }

    pub fn write_overall<W: Write>(&self, out: &mut W, precision: usize) -> io::Result<()> {
        writeln!(out, "{OVERALL_HEADER}")?;
        match (self.average(), self.highest(), self.lowest()) {
            (Some(average), Some(highest), Some(lowest)) => {
                writeln!(out, "Overall Average Score: {}", format::score(average, precision))?;
                writeln!(out, "Overall Highest Score: {}", format::score(highest, precision))?;
                writeln!(out, "Overall Lowest Score: {}", format::score(lowest, precision))?;
            }
            _ => writeln!(out, "{NO_GRADES}")?,
        }
        writeln!(out, "{REPORT_FOOTER}")
    }
}

/// Writes every student block followed by the class-wide block.
pub fn write_report<W: Write>(out: &mut W, students: &[Student], precision: usize) -> io::Result<()> {
    if students.is_empty() {
        return writeln!(out, "{NO_STUDENTS}");
    }
    writeln!(out, "{REPORT_HEADER}")?;
    for student in students {
        student.write_summary(out, precision)?;
    }
    ClassStats::from_students(students).write_overall(out, precision)
}
