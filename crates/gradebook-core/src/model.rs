//! Core data model types for gradebook.
//!
//! A `Record` is one student's identity, marks, and attendance. Records are
//! built once from user input or from the persisted JSON and never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};

/// The fixed set of examined subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    English,
    Maths,
    Science,
}

impl Subject {
    /// All subjects, in report column order.
    pub const ALL: [Subject; 3] = [Subject::English, Subject::Maths, Subject::Science];
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::English => write!(f, "English"),
            Subject::Maths => write!(f, "Maths"),
            Subject::Science => write!(f, "Science"),
        }
    }
}

/// Scores for the three fixed subjects.
///
/// Serialized as an object with exactly the keys `English`, `Maths`, and
/// `Science`; a missing key fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Marks {
    #[serde(rename = "English")]
    pub english: f64,
    #[serde(rename = "Maths")]
    pub maths: f64,
    #[serde(rename = "Science")]
    pub science: f64,
}

impl Marks {
    pub fn new(english: f64, maths: f64, science: f64) -> Self {
        Self {
            english,
            maths,
            science,
        }
    }

    pub fn get(&self, subject: Subject) -> f64 {
        match subject {
            Subject::English => self.english,
            Subject::Maths => self.maths,
            Subject::Science => self.science,
        }
    }

    /// Iterate `(subject, mark)` pairs in `Subject::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Subject, f64)> + '_ {
        Subject::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// One student's exam record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Roll number. Not guaranteed unique unless the store enforces it.
    #[serde(rename = "roll")]
    pub roll_number: i64,
    pub name: String,
    pub marks: Marks,
    /// Whether the student sat the exam.
    pub present: bool,
}

impl Record {
    /// A student who sat the exam.
    pub fn present(roll_number: i64, name: impl Into<String>, marks: Marks) -> Self {
        Self {
            roll_number,
            name: name.into(),
            marks,
            present: true,
        }
    }

    /// A student absent on exam day. All marks are recorded as zero.
    pub fn absent(roll_number: i64, name: impl Into<String>) -> Self {
        Self {
            roll_number,
            name: name.into(),
            marks: Marks::default(),
            present: false,
        }
    }
}

/// Coerce user text into a roll number.
pub fn parse_roll(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| GradebookError::InvalidInput(format!("roll number '{trimmed}'")))
}

/// Coerce user text into a mark. Any finite number is accepted.
pub fn parse_mark(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(mark) if mark.is_finite() => Ok(mark),
        _ => Err(GradebookError::InvalidInput(format!("mark '{trimmed}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_display_matches_json_keys() {
        let keys: Vec<String> = Subject::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(keys, vec!["English", "Maths", "Science"]);
    }

    #[test]
    fn marks_iterate_in_column_order() {
        let marks = Marks::new(90.0, 80.0, 95.0);
        let pairs: Vec<_> = marks.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Subject::English, 90.0),
                (Subject::Maths, 80.0),
                (Subject::Science, 95.0)
            ]
        );
    }

    #[test]
    fn absent_record_has_zero_marks() {
        let record = Record::absent(4, "Dee");
        assert!(!record.present);
        assert_eq!(record.marks, Marks::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn record_json_shape() {
        let record = Record::present(1, "Asha", Marks::new(90.0, 80.5, 95.0));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["roll"], 1);
        assert_eq!(value["name"], "Asha");
        assert_eq!(value["marks"]["English"], 90.0);
        assert_eq!(value["marks"]["Maths"], 80.5);
        assert_eq!(value["marks"]["Science"], 95.0);
        assert_eq!(value["present"], true);
    }

    #[test]
    fn integer_marks_deserialize() {
        let json = r#"{"roll": 3, "name": "Bo", "marks": {"English": 0, "Maths": 0, "Science": 0}, "present": false}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record, Record::absent(3, "Bo"));
    }

    #[test]
    fn missing_subject_fails() {
        let json = r#"{"roll": 3, "name": "Bo", "marks": {"English": 50, "Maths": 60}, "present": true}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn parse_roll_and_mark() {
        assert_eq!(parse_roll(" 42 ").unwrap(), 42);
        assert!(parse_roll("4x").is_err());
        assert!(parse_roll("").is_err());

        assert_eq!(parse_mark("88.5").unwrap(), 88.5);
        assert_eq!(parse_mark("70").unwrap(), 70.0);
        assert!(matches!(
            parse_mark("ninety"),
            Err(GradebookError::InvalidInput(_))
        ));
        assert!(parse_mark("nan").is_err());
        assert!(parse_mark("inf").is_err());
    }
}
