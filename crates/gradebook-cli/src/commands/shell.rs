//! The interactive shell: a login prompt followed by the numbered menu.
//!
//! The credential check is a fixed-literal courtesy gate. It keeps casual
//! users out of the menu and nothing more; the records file itself is
//! unprotected.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use gradebook_core::model::{parse_mark, parse_roll, Marks, Record, Subject};
use gradebook_core::{GradebookError, Store, StoreConfig};

use crate::table::records_table;

const USERNAME: &str = "admin";
const PASSWORD: &str = "admin123";

/// What the menu loop does after handling a choice.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

pub fn execute(config: StoreConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    if !login(&mut input, &mut out)? {
        writeln!(out, "Login Failed!")?;
        anyhow::bail!("login failed");
    }

    let mut store = Store::open(config)?;
    run_menu(&mut store, &mut input, &mut out)
}

/// Prompt for credentials. End of input counts as a failed login.
fn login<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    writeln!(out, "\nLogin Required")?;
    let Some(username) = read_line(input, out, "Username: ")? else {
        return Ok(false);
    };
    let Some(password) = read_line(input, out, "Password: ")? else {
        return Ok(false);
    };
    Ok(username == USERNAME && password == PASSWORD)
}

/// Drive the menu until the user exits or input runs out.
fn run_menu<R: BufRead, W: Write>(store: &mut Store, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        writeln!(out, "\n===== MENU =====")?;
        writeln!(out, "1 Add Student")?;
        writeln!(out, "2 Show Records")?;
        writeln!(out, "3 Export Report (Excel CSV)")?;
        writeln!(out, "4 Exit")?;

        let step = match read_line(input, out, "Choice: ")? {
            None => Step::Quit,
            Some(choice) => match choice.trim() {
                "1" => add_student(store, input, out)?,
                "2" => {
                    show_records(store, out)?;
                    Step::Continue
                }
                "3" => {
                    let path = store.export_report()?;
                    tracing::debug!(path = %path.display(), "report exported from shell");
                    writeln!(out, "Report exported as CSV file.")?;
                    Step::Continue
                }
                "4" => Step::Quit,
                _ => {
                    writeln!(out, "Invalid choice.")?;
                    Step::Continue
                }
            },
        };

        if step == Step::Quit {
            writeln!(out, "Program closed.")?;
            return Ok(());
        }
    }
}

fn add_student<R: BufRead, W: Write>(
    store: &mut Store,
    input: &mut R,
    out: &mut W,
) -> Result<Step> {
    let record = match read_student(input, out) {
        Ok(Some(record)) => record,
        Ok(None) => return Ok(Step::Quit),
        Err(e) => {
            return match e.downcast_ref::<GradebookError>() {
                Some(err) if err.is_recoverable() => {
                    report_recoverable(err, out)?;
                    Ok(Step::Continue)
                }
                _ => Err(e),
            };
        }
    };

    match store.add_record(record) {
        Ok(()) => writeln!(out, "Record added and saved permanently!")?,
        Err(e) if e.is_recoverable() => report_recoverable(&e, out)?,
        Err(e) => return Err(e.into()),
    }
    Ok(Step::Continue)
}

/// Prompt for one student. `Ok(None)` means input ended part way through.
fn read_student<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Record>> {
    let Some(roll) = read_line(input, out, "Roll No: ")? else {
        return Ok(None);
    };
    let roll = parse_roll(&roll)?;

    let Some(name) = read_line(input, out, "Name: ")? else {
        return Ok(None);
    };

    let Some(answer) = read_line(input, out, "Present in exam? (y/n): ")? else {
        return Ok(None);
    };
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(Some(Record::absent(roll, name)));
    }

    let mut marks = [0.0; 3];
    for (slot, subject) in marks.iter_mut().zip(Subject::ALL) {
        let Some(text) = read_line(input, out, &format!("{subject} Marks: "))? else {
            return Ok(None);
        };
        *slot = parse_mark(&text)?;
    }
    let [english, maths, science] = marks;

    Ok(Some(Record::present(
        roll,
        name,
        Marks::new(english, maths, science),
    )))
}

fn show_records<W: Write>(store: &Store, out: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "No records available.")?;
        return Ok(());
    }

    writeln!(out, "\n===== STUDENT PERFORMANCE TABLE =====")?;
    writeln!(out, "{}", records_table(store.list_records()))?;
    Ok(())
}

fn report_recoverable<W: Write>(err: &GradebookError, out: &mut W) -> Result<()> {
    tracing::debug!(error = %err, "rejected student entry");
    match err {
        GradebookError::DuplicateRoll(roll) => {
            writeln!(out, "Roll number {roll} already exists!")?;
        }
        _ => writeln!(out, "Invalid input!")?,
    }
    Ok(())
}

/// Print `prompt`, then read one line without its line ending.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
