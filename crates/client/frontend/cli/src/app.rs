//! Read-eval loop binding line commands to the session controller.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use game_core::GameError;
use runtime::{Economy, PurchaseOutcome, RuntimeError, SessionController, SessionStatus};

use crate::input::{Command, HELP, parse_command};
use crate::presentation::TerminalPresenter;

/// Whether the loop should keep reading after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct CliApp<W: Write> {
    session: SessionController<TerminalPresenter<W>>,
    save_dir: PathBuf,
}

impl<W: Write> CliApp<W> {
    /// Starts a session on `game_file` and draws its first frame to `out`.
    pub fn new(
        game_file: PathBuf,
        save_dir: PathBuf,
        economy: Economy,
        out: W,
    ) -> runtime::Result<Self> {
        let session = SessionController::new(game_file, TerminalPresenter::new(out), economy)?;
        Ok(Self { session, save_dir })
    }

    pub fn session(&self) -> &SessionController<TerminalPresenter<W>> {
        &self.session
    }

    /// Processes commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.say(HELP);
        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line) == Flow::Quit {
                break;
            }
        }
        tracing::info!("Leaving session");
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Flow {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                self.say(&format!("! {err}"));
                return Flow::Continue;
            }
        };
        tracing::debug!(?command, "command");

        if let Err(err) = self.execute(command.clone()) {
            self.report(&command, &err);
        }

        if command == Command::Quit {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    fn execute(&mut self, command: Command) -> runtime::Result<()> {
        match command {
            Command::Move(direction) => {
                self.session.move_player(direction)?;
            }
            Command::Use(kind) => {
                self.session.use_item(kind)?;
            }
            Command::Buy(kind) => {
                if let PurchaseOutcome::Purchased(item) = self.session.purchase(kind)? {
                    self.say(&format!("Bought {}.", item.name()));
                }
            }
            Command::Prices => {
                let listing: Vec<String> = self
                    .session
                    .economy()
                    .prices()
                    .iter()
                    .map(|(kind, price)| format!("{kind}: {price}"))
                    .collect();
                self.say(&format!("Shop: {}", listing.join(", ")));
            }
            Command::Restart => {
                self.with_fresh_timer(|session| session.restart())?;
            }
            Command::NewGame(path) => {
                self.with_fresh_timer(|session| session.new_game(&path))?;
            }
            Command::Load(path) => {
                self.with_fresh_timer(|session| session.load_game(&path))?;
            }
            Command::Save(path) => {
                let directory = path.unwrap_or_else(|| self.save_dir.clone());
                let location = self.session.save_game(&directory)?;
                self.say(&format!("Saved to {}.", location.maze.display()));
            }
            Command::Help => self.say(HELP),
            Command::Quit => {}
        }
        Ok(())
    }

    /// Runs a session replacement with the timer zeroed, so the redrawn
    /// frame shows zero. A rejected call keeps the previous timer.
    fn with_fresh_timer(
        &mut self,
        replace: impl FnOnce(
            &mut SessionController<TerminalPresenter<W>>,
        ) -> runtime::Result<SessionStatus>,
    ) -> runtime::Result<SessionStatus> {
        let previous = self.session.presenter_mut().timer_mut().reset();
        match replace(&mut self.session) {
            Ok(status) => Ok(status),
            Err(err) => {
                *self.session.presenter_mut().timer_mut() = previous;
                Err(err)
            }
        }
    }

    fn report(&mut self, command: &Command, err: &RuntimeError) {
        let severity = err.severity();
        if severity.is_recoverable() {
            tracing::warn!(
                ?command,
                code = err.error_code(),
                severity = severity.as_str(),
                "Command failed: {err}"
            );
        } else {
            tracing::error!(
                ?command,
                code = err.error_code(),
                severity = severity.as_str(),
                "Command failed: {err}"
            );
        }
        self.say(&format!("! {err}"));
    }

    fn say(&mut self, text: &str) {
        self.session.presenter_mut().message(text);
    }
}
