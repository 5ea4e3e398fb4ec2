//! Interactive text menu over a [`RosterService`].

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::persistence::{to_pretty_json, PlayerStore};
use crate::player::PlayerId;
use crate::roster::RosterService;

use super::ShellError;

const MENU: &[&str] = &[
    "1. Add Player",
    "2. Display Players",
    "3. Edit Player",
    "4. Delete Player",
    "5. Undo Last Action",
    "6. Search Player",
    "7. Exit",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Display,
    Edit,
    Delete,
    Undo,
    Search,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Display),
            "3" => Ok(MenuChoice::Edit),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Undo),
            "6" => Ok(MenuChoice::Search),
            "7" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// Reads menu choices from `input` and reports results to `output` until the
/// user exits or input ends.
pub struct Shell<S: PlayerStore, R: BufRead, W: Write> {
    roster: RosterService<S>,
    input: R,
    output: W,
}

impl<S: PlayerStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(roster: RosterService<S>, input: R, output: W) -> Self {
        Shell {
            roster,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (RosterService<S>, W) {
        (self.roster, self.output)
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(ShellError::InvalidUtf8) => {
                    writeln!(self.output, "Input was not valid UTF-8. Please try again.")?;
                }
                Err(e) => return Err(e),
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Show the menu and handle one choice. Returns false when the loop
    /// should stop.
    fn step(&mut self) -> Result<bool, ShellError> {
        writeln!(self.output)?;
        for line in MENU {
            writeln!(self.output, "{}", line)?;
        }

        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(false);
        };

        match choice.parse::<MenuChoice>() {
            Ok(choice) => {
                debug!(?choice, "menu choice");
                self.dispatch(choice)
            }
            Err(()) => {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                Ok(true)
            }
        }
    }

    /// Handle one choice. Returns false when the loop should stop.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool, ShellError> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Display => self.display(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Undo => self.undo(),
            MenuChoice::Search => self.search(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                Ok(false)
            }
        }
    }

    fn add(&mut self) -> Result<bool, ShellError> {
        let Some([name, country, role, team]) = self.prompt_fields([
            "Enter player name: ",
            "Enter player country: ",
            "Enter player role: ",
            "Enter player team: ",
        ])?
        else {
            return Ok(false);
        };

        self.roster.add(&name, &country, &role, &team)?;
        writeln!(self.output, "Player added: {}", name)?;
        Ok(true)
    }

    fn display(&mut self) -> Result<bool, ShellError> {
        let json = to_pretty_json(&self.roster.players())?;
        self.output.write_all(&json)?;
        writeln!(self.output)?;
        Ok(true)
    }

    fn edit(&mut self) -> Result<bool, ShellError> {
        let Some(id) = self.prompt_id("Enter player ID to edit: ")? else {
            return Ok(false);
        };
        let Some(id) = id else {
            return Ok(true);
        };
        let Some([name, country, role, team]) = self.prompt_fields([
            "Enter new player name: ",
            "Enter new country: ",
            "Enter new role: ",
            "Enter new team: ",
        ])?
        else {
            return Ok(false);
        };

        if self.roster.edit(id, &name, &country, &role, &team)? {
            writeln!(self.output, "Player {} updated.", id)?;
        } else {
            writeln!(self.output, "Player ID {} not found.", id)?;
        }
        Ok(true)
    }

    fn delete(&mut self) -> Result<bool, ShellError> {
        let Some(id) = self.prompt_id("Enter player ID to delete: ")? else {
            return Ok(false);
        };
        let Some(id) = id else {
            return Ok(true);
        };

        if self.roster.delete(id)?.is_some() {
            writeln!(self.output, "Player {} deleted.", id)?;
        } else {
            writeln!(self.output, "Player ID {} not found.", id)?;
        }
        Ok(true)
    }

    fn undo(&mut self) -> Result<bool, ShellError> {
        match self.roster.undo()? {
            Some(action) => writeln!(
                self.output,
                "Undid {} of player {}.",
                action.kind(),
                action.id()
            )?,
            None => writeln!(self.output, "No actions to undo.")?,
        }
        Ok(true)
    }

    fn search(&mut self) -> Result<bool, ShellError> {
        let Some(keyword) = self.prompt("Enter search keyword: ")? else {
            return Ok(false);
        };

        let hits = self.roster.search(&keyword);
        if hits.is_empty() {
            writeln!(self.output, "No players found with keyword '{}'", keyword)?;
        }
        for (id, name) in hits {
            writeln!(self.output, "Player ID: {}, Name: {}", id, name)?;
        }
        Ok(true)
    }

    /// Print `label` and read one line without its line ending. `None` at end
    /// of input; a line that is not UTF-8 is consumed and reported as
    /// `ShellError::InvalidUtf8`.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8(bytes).map_err(|_| ShellError::InvalidUtf8)?;
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn prompt_fields(&mut self, labels: [&str; 4]) -> Result<Option<[String; 4]>, ShellError> {
        let mut values: [String; 4] = Default::default();
        for (value, label) in values.iter_mut().zip(labels) {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            *value = line;
        }
        Ok(Some(values))
    }

    /// Outer `None` at end of input; inner `None` when the line is not a
    /// valid id (already reported).
    fn prompt_id(&mut self, label: &str) -> Result<Option<Option<PlayerId>>, ShellError> {
        let Some(line) = self.prompt(label)? else {
            return Ok(None);
        };

        match line.trim().parse::<PlayerId>() {
            Ok(id) => Ok(Some(Some(id))),
            Err(_) => {
                writeln!(self.output, "Invalid player ID: '{}'", line.trim())?;
                Ok(Some(None))
            }
        }
    }
}
