use grade_tracker::error::{InputError, SessionError};
use grade_tracker::input::{parse_choice, parse_count, parse_grade, read_line};
use grade_tracker::menu::MenuChoice;

#[test]
fn test_parse_count() {
    assert_eq!(parse_count("3"), Ok(3));
    assert_eq!(parse_count("  0 "), Ok(0));
    assert_eq!(parse_count("-2"), Err(InputError::NegativeCount(-2)));
    assert_eq!(parse_count("abc"), Err(InputError::CountNotANumber("abc".to_string())));
    assert_eq!(parse_count(""), Err(InputError::CountNotANumber(String::new())));
    assert_eq!(parse_count("2.5"), Err(InputError::CountNotANumber("2.5".to_string())));
}

#[test]
fn test_parse_grade() {
    assert_eq!(parse_grade("88.5"), Ok(88.5));
    assert_eq!(parse_grade("0"), Ok(0.0));
    assert_eq!(parse_grade("120"), Ok(120.0));
    assert_eq!(parse_grade("-1"), Err(InputError::NegativeGrade(-1.0)));
    assert!(matches!(parse_grade("ninety"), Err(InputError::GradeNotANumber(_))));
}

#[test]
fn test_parse_grade_rejects_non_finite_values() {
    for token in ["NaN", "inf", "-inf", "infinity"] {
        assert!(matches!(parse_grade(token), Err(InputError::GradeNotANumber(_))), "{token}");
    }
}

#[test]
fn test_parse_grade_normalizes_negative_zero() {
    let grade = parse_grade("-0").unwrap();
    assert!(grade.is_sign_positive());
}

#[test]
fn test_parse_choice() {
    assert_eq!(parse_choice("1"), Ok(MenuChoice::AddStudent));
    assert_eq!(parse_choice(" 2\t"), Ok(MenuChoice::ShowReport));
    assert_eq!(parse_choice("0"), Ok(MenuChoice::Exit));
    assert_eq!(parse_choice("9"), Err(InputError::UnknownChoice(9)));
    assert_eq!(parse_choice("-1"), Err(InputError::UnknownChoice(-1)));
    assert_eq!(parse_choice("add"), Err(InputError::ChoiceNotANumber("add".to_string())));
}

#[test]
fn test_read_line_strips_terminators_only() {
    let mut input: &[u8] = b" Ada Lovelace \r\nnext\n";
    assert_eq!(read_line(&mut input).unwrap(), " Ada Lovelace ");
    assert_eq!(read_line(&mut input).unwrap(), "next");
    assert!(matches!(read_line(&mut input), Err(SessionError::EndOfInput)));
}

#[test]
fn test_read_line_accepts_unterminated_last_line() {
    let mut input: &[u8] = b"0";
    assert_eq!(read_line(&mut input).unwrap(), "0");
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        InputError::CountNotANumber("x".into()).to_string(),
        "Invalid input. Please enter a number."
    );
    assert_eq!(
        InputError::GradeNotANumber("x".into()).to_string(),
        "Invalid input. Please enter a number for the grade."
    );
    assert_eq!(
        InputError::UnknownChoice(9).to_string(),
        "Invalid choice. Please try again."
    );
}
