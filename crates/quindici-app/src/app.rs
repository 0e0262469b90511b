//! The interactive game loop.

use std::io::{self, BufRead, Write};

use quindici_game::{GameSession, PlayerKind, save};
use rand::rngs::StdRng;

use crate::{
    command::{self, Command},
    render,
};

/// Runs one game session over the given input/output streams until the game
/// ends or the player quits.
///
/// # Errors
///
/// Returns an error only for I/O failures on the streams themselves; game
/// errors are reported to the player and the loop continues.
pub fn run(
    session: &mut GameSession,
    rng: &mut StdRng,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Welcome to Quindici!")?;
    writeln!(output, "Type 'help' for the rules and commands.")?;
    writeln!(output, "\n{}", render::board(session))?;

    loop {
        if session.is_terminal() {
            writeln!(output, "\n{}", render::result(session))?;
            return Ok(());
        }
        if session.legal_moves(session.current_seat()).is_empty() {
            // Parity exhaustion: the current player is blocked with empty
            // cells remaining. Not a win for anyone.
            writeln!(
                output,
                "\n{} has no legal move left. It's a draw!",
                session.current_player().name()
            )?;
            return Ok(());
        }

        match session.current_player().kind() {
            PlayerKind::Computer => {
                let mv = session
                    .random_move(rng)
                    .expect("legal moves checked above");
                let name = session.current_player().name().to_owned();
                session.apply(mv).map_err(|e| {
                    io::Error::other(format!("generated move rejected: {e}"))
                })?;
                writeln!(
                    output,
                    "{} plays {} at ({}, {})",
                    name,
                    mv.digit(),
                    mv.position().row(),
                    mv.position().col()
                )?;
                writeln!(output, "\n{}", render::board(session))?;
            }
            PlayerKind::Human => {
                write!(
                    output,
                    "{}'s turn (numbers: {}): ",
                    session.current_player().name(),
                    render::available_digits(session)
                )?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    // EOF: treat like quit
                    writeln!(output, "\nGoodbye!")?;
                    return Ok(());
                }
                if handle_line(session, &line, output)? {
                    writeln!(output, "Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }
}

/// Handles one line of human input. Returns `true` when the player quit.
fn handle_line(
    session: &mut GameSession,
    line: &str,
    output: &mut impl Write,
) -> io::Result<bool> {
    let cmd = match command::parse(line) {
        Ok(cmd) => cmd,
        Err(err) => {
            writeln!(output, "{err}")?;
            return Ok(false);
        }
    };

    match cmd {
        Command::Place { position, digit } => {
            let mv = session.candidate(position, digit);
            match session.apply(mv) {
                Ok(_) => writeln!(output, "\n{}", render::board(session))?,
                Err(err) => writeln!(output, "Invalid move: {err}")?,
            }
        }
        Command::Undo => match session.undo() {
            Ok(mv) => {
                writeln!(output, "Move undone: {mv}")?;
                writeln!(output, "\n{}", render::board(session))?;
            }
            Err(err) => writeln!(output, "{err}")?,
        },
        Command::Redo => match session.redo() {
            Ok(mv) => {
                writeln!(output, "Move redone: {mv}")?;
                writeln!(output, "\n{}", render::board(session))?;
            }
            Err(err) => writeln!(output, "{err}")?,
        },
        Command::Save(path) => match save::write_file(session, &path) {
            Ok(written) => writeln!(output, "Game saved to {}", written.display())?,
            Err(err) => {
                log::warn!("save failed: {err}");
                writeln!(output, "Failed to save: {err}")?;
            }
        },
        Command::Load(path) => {
            // A failed load leaves the running session untouched.
            match save::read_file(&path, session.players()) {
                Ok(loaded) => {
                    *session = loaded;
                    writeln!(output, "Game loaded from {}", path.display())?;
                    writeln!(output, "\n{}", render::board(session))?;
                }
                Err(err) => {
                    log::warn!("load failed: {err}");
                    writeln!(output, "Failed to load: {err}")?;
                }
            }
        }
        Command::Hint => writeln!(
            output,
            "Available numbers for {}: {}",
            session.current_player().name(),
            render::available_digits(session)
        )?,
        Command::Board => writeln!(output, "\n{}", render::board(session))?,
        Command::Help => writeln!(output, "{}", render::help())?,
        Command::Quit => return Ok(true),
    }
    Ok(false)
}
