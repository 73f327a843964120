//! Main menu options and session states

pub const MENU_TEXT: &str = "\n--- Grade Tracker Menu ---\n\
1. Add New Student\n\
2. Display Summary Report\n\
0. Exit";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    ShowReport,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::AddStudent),
            2 => Some(MenuChoice::ShowReport),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exiting,
}
