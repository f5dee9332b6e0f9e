//! Parsing of console input into [`Command`]s.

use crate::error::{BookError, BookResult};

/// Every command the console understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add { name: String, phones: Vec<String> },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays { window: Option<u32> },
    Remove { name: String },
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// The line is split on whitespace; the verb is case-insensitive and the
    /// arguments are positional. Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// - `BookError::UnknownCommand` for an unrecognized verb
    /// - `BookError::ArgumentCount` when the verb gets the wrong arity
    /// - `BookError::InvalidArgument` when the `birthdays` window is not a number
    pub fn parse(line: &str) -> BookResult<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let verb = verb.to_lowercase();
        let args: Vec<String> = parts.map(str::to_string).collect();

        let command = match verb.as_str() {
            "hello" => {
                expect_args(&verb, &args, 0)?;
                Command::Hello
            }
            "help" => {
                expect_args(&verb, &args, 0)?;
                Command::Help
            }
            "add" => {
                let mut args = args.into_iter();
                let name = args.next().ok_or_else(|| BookError::ArgumentCount {
                    command: verb.clone(),
                    expected: "at least 1",
                    got: 0,
                })?;
                Command::Add {
                    name,
                    phones: args.collect(),
                }
            }
            "change" => {
                let [name, phone] = take_args::<2>(&verb, args)?;
                Command::Change { name, phone }
            }
            "phone" => {
                let [name] = take_args::<1>(&verb, args)?;
                Command::Phone { name }
            }
            "all" => {
                expect_args(&verb, &args, 0)?;
                Command::All
            }
            "add-birthday" => {
                let [name, date] = take_args::<2>(&verb, args)?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = take_args::<1>(&verb, args)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => match args.as_slice() {
                [] => Command::Birthdays { window: None },
                [days] => {
                    let window = days.parse::<u32>().map_err(|_| BookError::InvalidArgument {
                        command: verb.clone(),
                        reason: format!("window must be a number of days, got: {}", days),
                    })?;
                    Command::Birthdays {
                        window: Some(window),
                    }
                }
                _ => {
                    return Err(BookError::ArgumentCount {
                        command: verb,
                        expected: "0 or 1",
                        got: args.len(),
                    })
                }
            },
            "remove" => {
                let [name] = take_args::<1>(&verb, args)?;
                Command::Remove { name }
            }
            "close" | "exit" => {
                expect_args(&verb, &args, 0)?;
                Command::Exit
            }
            _ => return Err(BookError::UnknownCommand(verb)),
        };

        Ok(Some(command))
    }
}

const ARITY: [&str; 3] = ["0", "1", "2"];

fn expect_args(verb: &str, args: &[String], count: usize) -> BookResult<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(BookError::ArgumentCount {
            command: verb.to_string(),
            expected: ARITY[count],
            got: args.len(),
        })
    }
}

fn take_args<const N: usize>(verb: &str, args: Vec<String>) -> BookResult<[String; N]> {
    expect_args(verb, &args, N)?;
    args.try_into().map_err(|args: Vec<String>| BookError::ArgumentCount {
        command: verb.to_string(),
        expected: ARITY[N],
        got: args.len(),
    })
}
