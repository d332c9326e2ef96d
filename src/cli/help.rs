use crate::moves::MoveSet;
use crate::rules::outcome_table;

/// Label in the top-left corner of the help table
pub const CORNER_LABEL: &str = "v PC\\User >";

const LABEL_WIDTH: usize = 15;
const CELL_WIDTH: usize = 10;

/// Numbered move menu followed by the exit and help entries
pub fn render_menu(moves: &MoveSet) -> String {
    let mut output = String::new();

    output.push_str("Available moves:\n");
    for (index, name) in moves.iter() {
        output.push_str(&format!("{} - {}\n", index.menu_number(), name));
    }
    output.push_str("0 - exit\n");
    output.push_str("? - help\n");

    output
}

/// Bordered table of every pairing.
///
/// Rows are the computer's move, columns the player's; each cell holds the
/// verdict the player would see for that pairing.
pub fn render_help_table(moves: &MoveSet) -> String {
    let border = border_line(moves.len());
    let mut output = String::new();

    output.push_str(&border);
    output.push_str(&table_row(CORNER_LABEL, moves.iter().map(|(_, name)| name)));
    output.push_str(&border);

    for ((_, computer), outcomes) in moves.iter().zip(outcome_table(moves)) {
        output.push_str(&table_row(computer, outcomes.iter().map(|o| o.verdict())));
        output.push_str(&border);
    }

    output
}

fn border_line(columns: usize) -> String {
    let mut line = format!("+{}+", "-".repeat(LABEL_WIDTH + 2));
    for _ in 0..columns {
        line.push_str(&"-".repeat(CELL_WIDTH + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn table_row<'a>(label: &str, cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = format!("| {:<width$} |", label, width = LABEL_WIDTH);
    for cell in cells {
        line.push_str(&format!(" {:<width$} |", cell, width = CELL_WIDTH));
    }
    line.push('\n');
    line
}
