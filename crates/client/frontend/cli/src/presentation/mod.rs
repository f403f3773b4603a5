//! Plain-text rendering of session frames and notices.

use std::fmt::Write as _;
use std::io::Write;

use game_core::{ItemKind, PLAYER_GLYPH};
use runtime::{Notice, Presenter, RenderFrame};

use crate::timer::{ElapsedTimer, format_elapsed};

/// Draws the grid, vitals and inventory as text.
pub fn render_frame(frame: &RenderFrame<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Level {}", frame.level);

    for position in frame.maze.positions() {
        let glyph = if position == frame.player {
            PLAYER_GLYPH
        } else if let Some(item) = frame.items.get(&position) {
            item.glyph()
        } else {
            frame
                .maze
                .tile(position)
                .map(|tile| tile.glyph())
                .unwrap_or(' ')
        };
        out.push(glyph);
        if position.col == frame.maze.dimensions().cols as i32 - 1 {
            out.push('\n');
        }
    }

    let stats = frame.stats;
    let _ = writeln!(
        out,
        "Health: {}  Hunger: {}  Thirst: {}  Coins: {}",
        stats.health,
        stats.hunger,
        stats.thirst,
        frame.inventory.coins()
    );

    let held: Vec<String> = frame
        .inventory
        .kinds()
        .filter(|kind| *kind != ItemKind::Coin)
        .filter_map(|kind| match frame.inventory.count(kind) {
            0 => None,
            count => Some(format!("{kind} x{count}")),
        })
        .collect();
    if held.is_empty() {
        out.push_str("Inventory: empty\n");
    } else {
        let _ = writeln!(out, "Inventory: {}", held.join(", "));
    }
    out
}

pub fn describe_notice(notice: &Notice) -> String {
    match notice {
        Notice::LevelUp { level } => format!("You have levelled up! Welcome to level {level}."),
        Notice::Won => "You have won!".to_string(),
        Notice::Lost => "You have lost!".to_string(),
        Notice::InsufficientFunds { kind, coins, price } => {
            format!("Not enough coins for {kind}: it costs {price}, you have {coins}.")
        }
    }
}

/// [`Presenter`] writing to any byte sink, with an elapsed-time footer.
pub struct TerminalPresenter<W: Write> {
    out: W,
    timer: ElapsedTimer,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            timer: ElapsedTimer::start(),
        }
    }

    pub fn timer(&self) -> &ElapsedTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut ElapsedTimer {
        &mut self.timer
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Writes a free-form line (prompts, warnings, command output).
    pub fn message(&mut self, text: &str) {
        self.write(&format!("{text}\n"));
    }

    fn write(&mut self, text: &str) {
        if let Err(err) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::warn!("Failed to write to terminal: {err}");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn draw(&mut self, frame: &RenderFrame<'_>) {
        let mut text = render_frame(frame);
        let _ = writeln!(text, "Time: {}", format_elapsed(self.timer.elapsed()));
        self.write(&text);
    }

    fn notify(&mut self, notice: &Notice) {
        if matches!(notice, Notice::Won | Notice::Lost) {
            self.timer.stop();
        }
        self.message(&describe_notice(notice));
    }
}
