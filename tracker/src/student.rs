//! Student record: a name plus its append-only grade sequence

use crate::error::GradeError;
use crate::format;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    grades: Vec<f64>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grades in the order they were entered.
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    /// Appends a grade. Negative values are rejected and the record is left as it was.
    pub fn add_grade(&mut self, grade: f64) -> Result<(), GradeError> {
        if grade < 0.0 {
            return Err(GradeError::Negative(grade));
        }
        self.grades.push(grade);
        Ok(())
    }

    /// Arithmetic mean, or 0.0 when no grades exist.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    /// Largest grade, or 0.0 when no grades exist.
    pub fn highest(&self) -> f64 {
        match self.grades.split_first() {
            Some((first, rest)) => rest.iter().fold(*first, |max, &g| if g > max { g } else { max }),
            None => 0.0,
        }
    }

    /// Smallest grade, or 0.0 when no grades exist.
    ///
    /// The 0.0 is a sentinel: check [`Student::has_grades`] before treating it as a score.
    pub fn lowest(&self) -> f64 {
        match self.grades.split_first() {
            Some((first, rest)) => rest.iter().fold(*first, |min, &g| if g < min { g } else { min }),
            None => 0.0,
        }
    }

    pub fn write_summary<W: Write>(&self, out: &mut W, precision: usize) -> io::Result<()> {
        writeln!(out, "  Name: {}", self.name)?;
        if self.grades.is_empty() {
            writeln!(out, "  Grades: No grades entered")?;
        } else {
            writeln!(out, "  Grades: {}", format::grade_list(&self.grades))?;
        }
        writeln!(out, "  Average Score: {}", format::score(self.average(), precision))?;
        writeln!(out, "  Highest Score: {}", format::score(self.highest(), precision))?;
        writeln!(out, "  Lowest Score: {}", format::score(self.lowest(), precision))?;
        writeln!(out, "--------------------")
    }
}
