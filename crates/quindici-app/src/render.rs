//! Console rendering of the board and game status.

use quindici_game::{GameSession, Status, rules};

/// Formats the board as a framed grid with coordinate labels.
#[must_use]
pub fn board(session: &GameSession) -> String {
    let grid = session.board().grid();
    let cell = |row: usize, col: usize| match grid[row][col] {
        Some(digit) => digit.to_string(),
        None => ".".to_owned(),
    };

    let mut out = String::from("    0   1   2\n");
    for row in 0..3 {
        out.push_str(&format!(
            "{}   {} | {} | {}\n",
            row,
            cell(row, 0),
            cell(row, 1),
            cell(row, 2)
        ));
        if row < 2 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// Formats the current player's available digits, ascending.
#[must_use]
pub fn available_digits(session: &GameSession) -> String {
    let digits = rules::available_digits(
        session.used_digits(),
        session.current_player().parity(),
    );
    let values: Vec<String> = digits.iter().map(|d| d.to_string()).collect();
    if values.is_empty() {
        "none".to_owned()
    } else {
        values.join(", ")
    }
}

/// Formats the end-of-game banner.
#[must_use]
pub fn result(session: &GameSession) -> String {
    match session.status() {
        Status::Won(_) => {
            let name = session.winner().map_or("?", quindici_game::Player::name);
            format!("{name} wins!")
        }
        Status::Drawn => "It's a draw!".to_owned(),
        Status::InProgress => "Game in progress.".to_owned(),
    }
}

/// The rules and command reference shown by `help`.
#[must_use]
pub fn help() -> String {
    let mut out = String::from(
        "\nGame rules:\n\
         \x20 - The board is a 3x3 grid\n\
         \x20 - Player 1 uses ODD numbers: 1, 3, 5, 7, 9\n\
         \x20 - Player 2 uses EVEN numbers: 2, 4, 6, 8\n\
         \x20 - Each number can be used only once\n\
         \x20 - Win: make any row, column, or diagonal sum to 15\n\
         \x20 - Draw: all positions filled with no winner\n\
         \nHow to play:\n\
         \x20 Enter: row col number (zero-based)\n\
         \x20 Example: '0 0 5' places 5 at the top-left\n\
         \nCommands:\n",
    );
    for (name, what) in [
        ("undo", "revert the last move"),
        ("redo", "re-apply an undone move"),
        ("save <file>", "save the game"),
        ("load <file>", "load a saved game"),
        ("hint", "show your available numbers"),
        ("board", "reprint the board"),
        ("help", "show this text"),
        ("quit", "leave the game"),
    ] {
        out.push_str(&format!("  {name:<12} {what}\n"));
    }
    out
}
