//! # Console Session
//!
//! The interactive front end. A session has two phases:
//!
//! 1. **Authentication**: login, register or exit. Only a successful login
//!    moves on; registration always returns to this menu.
//! 2. **Main menu**: table, add, delete, statistics, sounds, exit. Every
//!    command except exit waits for Enter before the menu is redrawn.
//!
//! Errors from a single command are printed and the menu continues. End of
//! input at any prompt ends the session.

pub mod prompt;

use anyhow::Result;
use shared::{AnimalDetails, AnimalKind};
use std::io::{BufRead, Write};
use tracing::{error, info};

use crate::domain::animal_table::{format_statistics, format_table};
use crate::domain::commands::animals::{AddAnimalCommand, DeleteAnimalCommand};
use crate::domain::commands::users::{LoginCommand, RegisterUserCommand, RegisterUserResult};
use crate::domain::{AnimalValidationError, UserValidationError};
use crate::AppState;
use self::prompt::{parse_number, Prompt};

const AUTH_MENU: &[&str] = &["1. Login", "2. Register", "0. Exit"];

const MAIN_MENU: &[&str] = &[
    "=== MENU ===",
    "1. Table",
    "2. Add",
    "3. Delete",
    "4. Statistics",
    "5. Sounds",
    "0. Exit",
];

const KIND_MENU: &str = "1-Lion, 2-Elephant, 3-Parrot, 4-Giraffe, 5-Penguin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthOutcome {
    Authenticated,
    Exit,
}

/// One interactive session over a reader/writer pair
pub struct ConsoleSession<'a, R, W> {
    state: &'a AppState,
    prompt: Prompt<R, W>,
}

impl<'a, R: BufRead, W: Write> ConsoleSession<'a, R, W> {
    pub fn new(state: &'a AppState, input: R, output: W) -> Self {
        Self {
            state,
            prompt: Prompt::new(input, output),
        }
    }

    /// Run until the user exits or the input ends
    pub fn run(&mut self) -> Result<()> {
        info!("Console session started");

        if self.authentication_phase()? == AuthOutcome::Authenticated {
            self.main_phase()?;
        }

        info!("Console session ended");
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    fn authentication_phase(&mut self) -> Result<AuthOutcome> {
        loop {
            self.draw_menu(AUTH_MENU)?;
            let Some(choice) = self.prompt.ask("> ")? else {
                return Ok(AuthOutcome::Exit);
            };

            match choice.trim() {
                "0" => return Ok(AuthOutcome::Exit),
                "1" => {
                    let Some((login, password)) = self.ask_credentials()? else {
                        return Ok(AuthOutcome::Exit);
                    };
                    match self.state.user_service.login(LoginCommand { login, password }) {
                        Ok(true) => return Ok(AuthOutcome::Authenticated),
                        Ok(false) => self.prompt.say("Invalid login or password.")?,
                        Err(e) => self.report_error(&e)?,
                    }
                }
                "2" => {
                    let Some((login, password)) = self.ask_credentials()? else {
                        return Ok(AuthOutcome::Exit);
                    };
                    match self.state.user_service.register(RegisterUserCommand { login, password }) {
                        Ok(RegisterUserResult::Registered) => {
                            self.prompt.say("Registered. You can log in now.")?
                        }
                        Ok(RegisterUserResult::LoginTaken) => {
                            self.prompt.say("Registration failed: login already exists.")?
                        }
                        Err(e) => self.report_error(&e)?,
                    }
                }
                _ => self.prompt.say("Unknown option.")?,
            }

            if !self.acknowledge()? {
                return Ok(AuthOutcome::Exit);
            }
        }
    }

    fn main_phase(&mut self) -> Result<()> {
        loop {
            self.draw_menu(MAIN_MENU)?;
            let Some(choice) = self.prompt.ask("> ")? else {
                return Ok(());
            };

            let result = match choice.trim() {
                "1" => self.show_table(),
                "2" => self.add_animal(),
                "3" => self.delete_animal(),
                "4" => self.show_statistics(),
                "5" => self.show_sounds(),
                "0" => return Ok(()),
                _ => self.prompt.say("Unknown option."),
            };
            if let Err(e) = result {
                self.report_error(&e)?;
            }

            if !self.acknowledge()? {
                return Ok(());
            }
        }
    }

    fn show_table(&mut self) -> Result<()> {
        let animals = self.state.animal_service.list_animals()?;
        for line in format_table(&animals) {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn add_animal(&mut self) -> Result<()> {
        self.prompt.say(KIND_MENU)?;
        let Some(code) = self.prompt.ask("> ")? else {
            return Ok(());
        };
        let Some(kind) = AnimalKind::from_menu_code(&code) else {
            return self.prompt.say("Unknown animal type.");
        };

        let Some(name) = self.prompt.ask("Name: ")? else {
            return Ok(());
        };
        let Some(weight_input) = self.prompt.ask("Weight: ")? else {
            return Ok(());
        };
        let weight = parse_number(&weight_input).unwrap_or(0.0);

        let details = match kind {
            AnimalKind::Lion => AnimalDetails::Lion,
            AnimalKind::Elephant => match self.ask_numeric_property()? {
                Some(trunk_length) => AnimalDetails::Elephant { trunk_length },
                None => return Ok(()),
            },
            AnimalKind::Giraffe => match self.ask_numeric_property()? {
                Some(neck_length) => AnimalDetails::Giraffe { neck_length },
                None => return Ok(()),
            },
            AnimalKind::Parrot => match self.prompt.ask("Prop: ")? {
                Some(color) => AnimalDetails::Parrot { color },
                None => return Ok(()),
            },
            AnimalKind::Penguin => match self.prompt.ask("Prop: ")? {
                Some(rank) => AnimalDetails::Penguin { rank },
                None => return Ok(()),
            },
        };

        let stored = self.state.animal_service.add_animal(AddAnimalCommand {
            name,
            weight,
            details,
        })?;
        self.prompt.say(format!("Added: {}", stored.describe()))
    }

    fn delete_animal(&mut self) -> Result<()> {
        self.show_table()?;

        let Some(input) = self.prompt.ask("ID: ")? else {
            return Ok(());
        };
        let Ok(animal_id) = input.trim().parse::<u32>() else {
            return self.prompt.say("Invalid ID.");
        };

        let result = self
            .state
            .animal_service
            .delete_animal(DeleteAnimalCommand { animal_id })?;
        if result.deleted {
            self.prompt.say("Deleted.")
        } else {
            self.prompt.say("Not found.")
        }
    }

    fn show_statistics(&mut self) -> Result<()> {
        if let Some(stats) = self.state.animal_service.statistics()? {
            for line in format_statistics(&stats) {
                self.prompt.say(line)?;
            }
        }
        Ok(())
    }

    fn show_sounds(&mut self) -> Result<()> {
        for animal in self.state.animal_service.list_animals()? {
            self.prompt.say(animal.sound_line())?;
        }
        Ok(())
    }

    fn ask_credentials(&mut self) -> Result<Option<(String, String)>> {
        let Some(login) = self.prompt.ask("Email: ")? else {
            return Ok(None);
        };
        let Some(password) = self.prompt.ask("Pass: ")? else {
            return Ok(None);
        };
        Ok(Some((login, password)))
    }

    fn ask_numeric_property(&mut self) -> Result<Option<f64>> {
        self.prompt.ask_number("Prop: ", "Please enter a number.")
    }

    fn draw_menu(&mut self, lines: &[&str]) -> Result<()> {
        if self.state.config.clear_screen {
            self.prompt.clear_screen()?;
        }
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    /// Wait for Enter; false once the input is exhausted
    fn acknowledge(&mut self) -> Result<bool> {
        Ok(self.prompt.ask("\nPress Enter to continue...")?.is_some())
    }

    /// Print a failed command; validation problems are expected, anything else is logged
    fn report_error(&mut self, e: &anyhow::Error) -> Result<()> {
        let is_validation = e.downcast_ref::<AnimalValidationError>().is_some()
            || e.downcast_ref::<UserValidationError>().is_some();
        if !is_validation {
            error!("Command failed: {:#}", e);
        }

        self.prompt.say(format!("Error: {:#}", e))
    }
}
