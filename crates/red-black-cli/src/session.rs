//! The interactive menu loop.
//!
//! Input is read as whitespace-separated tokens, so a choice and its key may
//! share a line (`1 42`). When a token fails to parse, the rest of its line
//! is discarded before the menu is shown again.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use red_black_tree::RbTree;
use tracing::{error, info};

use crate::error::CliError;
use crate::options::Options;
use crate::render::render;

const MENU: &str = "\nRed-Black Tree Operations:\n\
1. Insert\n\
2. Delete\n\
3. Search\n\
4. Display\n\
5. Exit\n\
6. Dump\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Insert,
    Delete,
    Search,
    Display,
    Exit,
    Dump,
}

impl Command {
    pub fn from_choice(choice: i64) -> Option<Command> {
        match choice {
            1 => Some(Command::Insert),
            2 => Some(Command::Delete),
            3 => Some(Command::Search),
            4 => Some(Command::Display),
            5 => Some(Command::Exit),
            6 => Some(Command::Dump),
            _ => None,
        }
    }
}

/// Whitespace-separated token reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

enum Parsed {
    Value(i64),
    Invalid,
    Eof,
}

/// One shell session: a tree plus explicit input and output handles.
pub struct Session<R, W> {
    input: Tokens<R>,
    out: W,
    tree: RbTree<i64>,
    show_menu: bool,
    validate: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, opts: &Options) -> Self {
        let tree = opts.preload.iter().copied().collect();
        Self {
            input: Tokens::new(input),
            out,
            tree,
            show_menu: !opts.no_menu,
            validate: opts.validate,
        }
    }

    pub fn tree(&self) -> &RbTree<i64> {
        &self.tree
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until the exit command or end of input.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            if self.show_menu {
                self.out.write_all(MENU.as_bytes())?;
            }
            self.prompt("Enter your choice: ")?;

            let choice = match self.read_number()? {
                Parsed::Value(choice) => choice,
                Parsed::Invalid => {
                    writeln!(self.out, "Invalid input, please enter a number!")?;
                    continue;
                }
                Parsed::Eof => break,
            };

            let Some(command) = Command::from_choice(choice) else {
                writeln!(self.out, "Invalid choice, please try again!")?;
                continue;
            };

            match command {
                Command::Insert => {
                    let Some(key) = self.read_key("Enter data to insert: ")? else {
                        continue;
                    };
                    let inserted = self.tree.insert(key);
                    info!(key, inserted, len = self.tree.len(), "insert");
                    self.check()?;
                }
                Command::Delete => {
                    let Some(key) = self.read_key("Enter data to delete: ")? else {
                        continue;
                    };
                    let removed = self.tree.delete(&key);
                    info!(key, removed, len = self.tree.len(), "delete");
                    self.check()?;
                }
                Command::Search => {
                    let Some(key) = self.read_key("Enter data to search: ")? else {
                        continue;
                    };
                    if self.tree.contains(&key) {
                        writeln!(self.out, "Data found in the tree.")?;
                    } else {
                        writeln!(self.out, "Data not found in the tree.")?;
                    }
                }
                Command::Display => {
                    writeln!(self.out, "Red-Black Tree:")?;
                    self.out.write_all(render(&self.tree).as_bytes())?;
                }
                Command::Dump => {
                    let entries: Vec<_> = self.tree.traverse().collect();
                    serde_json::to_writer(&mut self.out, &entries)?;
                    writeln!(self.out)?;
                }
                Command::Exit => {
                    writeln!(self.out, "Exiting program...")?;
                    break;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), CliError> {
        if self.show_menu {
            self.out.write_all(text.as_bytes())?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn read_number(&mut self) -> Result<Parsed, CliError> {
        let Some(token) = self.input.next()? else {
            return Ok(Parsed::Eof);
        };
        match token.parse::<i64>() {
            Ok(n) => Ok(Parsed::Value(n)),
            Err(_) => {
                self.input.discard_line();
                Ok(Parsed::Invalid)
            }
        }
    }

    /// Prompts for a key. `None` means the caller should return to the menu:
    /// either the input was rejected (and reported) or input ended.
    fn read_key(&mut self, text: &str) -> Result<Option<i64>, CliError> {
        self.prompt(text)?;
        match self.read_number()? {
            Parsed::Value(key) => Ok(Some(key)),
            Parsed::Invalid => {
                writeln!(self.out, "Invalid input, please enter a valid number.")?;
                Ok(None)
            }
            Parsed::Eof => Ok(None),
        }
    }

    fn check(&mut self) -> Result<(), CliError> {
        if !self.validate {
            return Ok(());
        }
        if let Err(err) = self.tree.assert_valid() {
            error!(%err, "red-black invariant violated");
            writeln!(self.out, "Invariant violation: {err}")?;
        }
        Ok(())
    }
}
