//! Interactive session controller
//!
//! Owns every student record for one run and drives the menu loop over any
//! line-based reader and writer, so whole sessions can be scripted.

use crate::config::DisplayConfig;
use crate::error::{InputError, SessionError};
use crate::input::{parse_choice, parse_count, parse_grade, read_line};
use crate::menu::{MenuChoice, SessionState, CHOICE_PROMPT, MENU_TEXT};
use crate::report::write_report;
use crate::student::Student;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub struct Tracker<R, W> {
    students: Vec<Student>,
    input: R,
    output: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Tracker<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self {
            students: Vec::new(),
            input,
            output,
            display,
        }
    }

    /// Students in the order they were added.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user picks exit.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Grade tracker session started");
        let mut state = SessionState::Running;
        while state == SessionState::Running {
            state = self.step()?;
        }
        info!(students = self.students.len(), "Grade tracker session finished");
        Ok(())
    }

    /// Shows the menu once and handles a single selection.
    pub fn step(&mut self) -> Result<SessionState, SessionError> {
        writeln!(self.output, "{MENU_TEXT}")?;
        let line = self.prompt(CHOICE_PROMPT)?;
        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(e) => {
                debug!("Rejected menu input {:?}: {:?}", line, e);
                writeln!(self.output, "{e}")?;
                return Ok(SessionState::Running);
            }
        };

        debug!("Menu choice {:?}", choice);
        match choice {
            MenuChoice::AddStudent => self.add_student()?,
            MenuChoice::ShowReport => self.display_summary_report()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting Grade Tracker. Goodbye!")?;
                self.output.flush()?;
                return Ok(SessionState::Exiting);
            }
        }
        Ok(SessionState::Running)
    }

    /// Collects a name and its validated grades, then stores the new record.
    pub fn add_student(&mut self) -> Result<(), SessionError> {
        let name = self.prompt("Enter student name: ")?;
        let mut student = Student::new(name);

        let count_prompt = format!("Enter number of grades for {}: ", student.name());
        let count = self.prompt_until(&count_prompt, parse_count)?;

        for i in 1..=count {
            let grade_prompt = format!("Enter grade {} for {}: ", i, student.name());
            let grade = self.prompt_until(&grade_prompt, parse_grade)?;
            if let Err(e) = student.add_grade(grade) {
                warn!("Grade {} rejected for {}", grade, student.name());
                writeln!(self.output, "{e}")?;
            }
        }

        writeln!(self.output, "Student {} added successfully!", student.name())?;
        info!(name = student.name(), grades = student.grades().len(), "Student added");
        self.students.push(student);
        Ok(())
    }

    pub fn display_summary_report(&mut self) -> Result<(), SessionError> {
        write_report(&mut self.output, &self.students, self.display.precision)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        read_line(&mut self.input)
    }

    /// Repeats `text` until `parse` accepts the answer, echoing each rejection.
    fn prompt_until<T>(
        &mut self,
        text: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, SessionError> {
        loop {
            let line = self.prompt(text)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected input {:?}: {:?}", line, e);
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }
}
