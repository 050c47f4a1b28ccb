//! The interactive menu loop.
//!
//! A small state machine: display the profile, read a menu choice, run the
//! matching editor, and repeat until the user saves and exits.

use std::io::{BufRead, Write};

use crate::display::Presenter;
use crate::editor::{edit_contacts, edit_list_field, prompt_line};
use crate::error::Result;
use crate::storage::{ListField, Profile, ProfileSink};
use crate::utils::parsing::parse_menu_choice;

pub const MENU: &str = "\nOptions:\n\
1. Edit Skills\n\
2. Edit Interests\n\
3. Edit Learning\n\
4. Edit Contacts\n\
5. Save and Exit\n";
pub const CHOICE_PROMPT: &str = "Choose an option: ";
pub const INVALID_OPTION: &str = "Invalid option. Press Enter to continue...";

// =============================================================================
// States
// =============================================================================

/// A valid menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditSkills,
    EditInterests,
    EditLearning,
    EditContacts,
    SaveAndExit,
}

impl MenuChoice {
    /// State entered when this choice is made.
    pub fn next_state(self) -> ReplState {
        match self {
            MenuChoice::EditSkills => ReplState::Editing(EditTarget::List(ListField::Skills)),
            MenuChoice::EditInterests => ReplState::Editing(EditTarget::List(ListField::Interests)),
            MenuChoice::EditLearning => ReplState::Editing(EditTarget::List(ListField::Learning)),
            MenuChoice::EditContacts => ReplState::Editing(EditTarget::Contacts),
            MenuChoice::SaveAndExit => ReplState::Saving,
        }
    }
}

/// What an editing state modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    List(ListField),
    Contacts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    Displaying,
    AwaitingChoice,
    Editing(EditTarget),
    Saving,
    Terminated,
}

// =============================================================================
// Loop
// =============================================================================

/// Owns the profile for the session and drives the menu.
pub struct Repl<R, W, S> {
    input: R,
    output: W,
    presenter: Presenter,
    sink: S,
    profile: Profile,
}

impl<R: BufRead, W: Write, S: ProfileSink> Repl<R, W, S> {
    pub fn new(input: R, output: W, presenter: Presenter, sink: S, profile: Profile) -> Self {
        Self {
            input,
            output,
            presenter,
            sink,
            profile,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run from `Displaying` until the user saves and exits.
    pub fn run(&mut self) -> Result<()> {
        let mut state = ReplState::Displaying;
        while state != ReplState::Terminated {
            let next = self.step(state)?;
            log::trace!("{:?} -> {:?}", state, next);
            state = next;
        }
        Ok(())
    }

    /// Perform one transition out of `state`.
    pub fn step(&mut self, state: ReplState) -> Result<ReplState> {
        match state {
            ReplState::Displaying => {
                self.presenter.display(&mut self.output, &self.profile)?;
                Ok(ReplState::AwaitingChoice)
            }
            ReplState::AwaitingChoice => self.await_choice(),
            ReplState::Editing(EditTarget::List(field)) => {
                let items = edit_list_field(
                    &mut self.input,
                    &mut self.output,
                    self.profile.list(field),
                    field.label(),
                )?;
                self.profile.set_list(field, items);
                Ok(ReplState::Displaying)
            }
            ReplState::Editing(EditTarget::Contacts) => {
                let current = self.profile.contacts();
                let contacts = edit_contacts(&mut self.input, &mut self.output, &current)?;
                self.profile.set_contacts(contacts);
                Ok(ReplState::Displaying)
            }
            ReplState::Saving => self.save(),
            ReplState::Terminated => Ok(ReplState::Terminated),
        }
    }

    fn await_choice(&mut self) -> Result<ReplState> {
        write!(self.output, "{}", MENU)?;
        let line = prompt_line(&mut self.input, &mut self.output, CHOICE_PROMPT)?;

        match parse_menu_choice(&line) {
            Some(choice) => Ok(choice.next_state()),
            None => {
                log::debug!("Invalid menu choice {:?}", line);
                self.acknowledge(INVALID_OPTION)?;
                Ok(ReplState::AwaitingChoice)
            }
        }
    }

    fn save(&mut self) -> Result<ReplState> {
        match self.sink.save(&self.profile) {
            Ok(()) => {
                writeln!(self.output, "Data saved!")?;
                self.output.flush()?;
                Ok(ReplState::Terminated)
            }
            Err(e) => {
                log::error!("Save failed: {}", e);
                writeln!(self.output, "Save failed: {}", e)?;
                self.acknowledge("Changes are still in memory. Press Enter to continue...")?;
                Ok(ReplState::Displaying)
            }
        }
    }

    /// Show `message` and wait for the user to press Enter.
    fn acknowledge(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        prompt_line(&mut self.input, &mut self.output, "")?;
        Ok(())
    }
}
