//! Derivation rules: percentage, letter grade, and performance status.
//!
//! All functions are pure and total over well-formed records. Absent
//! students short-circuit every rule regardless of their stored marks.

use std::fmt;

use crate::model::Record;

/// Any single subject below this mark flags the student for improvement.
pub const PASS_MARK: f64 = 35.0;

/// Lower bound (inclusive) of the A band.
pub const GRADE_A_FLOOR: f64 = 85.0;
/// Lower bound (inclusive) of the B band.
pub const GRADE_B_FLOOR: f64 = 70.0;
/// Lower bound (inclusive) of the C band.
pub const GRADE_C_FLOOR: f64 = 50.0;

/// Letter grade derived from the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    F,
    Absent,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::F => write!(f, "F"),
            Grade::Absent => write!(f, "Absent"),
        }
    }
}

/// Performance status derived from the raw per-subject marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    GoodPerformance,
    NeedsImprovement,
    Absent,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::GoodPerformance => write!(f, "Good Performance"),
            Status::NeedsImprovement => write!(f, "Needs Improvement"),
            Status::Absent => write!(f, "Absent on exam day"),
        }
    }
}

/// Mean of the three marks rounded to two decimals, or 0 when absent.
pub fn percentage(record: &Record) -> f64 {
    if !record.present {
        return 0.0;
    }
    let marks = &record.marks;
    let mean = (marks.english + marks.maths + marks.science) / 3.0;
    round2(mean)
}

/// Letter grade for the record's percentage.
pub fn grade(record: &Record) -> Grade {
    if !record.present {
        return Grade::Absent;
    }
    let p = percentage(record);
    if p >= GRADE_A_FLOOR {
        Grade::A
    } else if p >= GRADE_B_FLOOR {
        Grade::B
    } else if p >= GRADE_C_FLOOR {
        Grade::C
    } else {
        Grade::F
    }
}

/// Status from raw marks: one subject under `PASS_MARK` is enough to flag.
pub fn status(record: &Record) -> Status {
    if !record.present {
        return Status::Absent;
    }
    if record.marks.iter().any(|(_, mark)| mark < PASS_MARK) {
        Status::NeedsImprovement
    } else {
        Status::GoodPerformance
    }
}

/// All derived values for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub percentage: f64,
    pub grade: Grade,
    pub status: Status,
}

/// Apply every derivation rule to a record.
pub fn evaluate(record: &Record) -> Evaluation {
    Evaluation {
        percentage: percentage(record),
        grade: grade(record),
        status: status(record),
    }
}

// Exact halves go to the even neighbour.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
