#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Restart,
    Help,
    Quit,
}

/// Parses one line typed by the player. Cells are numbered 1-9 on screen and
/// 0-8 on the board.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim().to_ascii_lowercase();

    match trimmed.as_str() {
        "" => Err("Type a cell number from 1 to 9, or h for help.".to_string()),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "r" | "restart" | "new" => Ok(Command::Restart),
        "h" | "help" | "?" => Ok(Command::Help),
        other if other.chars().all(|c| c.is_ascii_digit()) => match other.parse::<usize>() {
            Ok(cell @ 1..=9) => Ok(Command::Place(cell - 1)),
            _ => Err(format!("Cell {} does not exist, use 1 to 9.", other)),
        },
        _ => Err(format!("Unknown command '{}', type h for help.", line.trim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_map_to_indices() {
        assert_eq!(parse_command("1"), Ok(Command::Place(0)));
        assert_eq!(parse_command("9"), Ok(Command::Place(8)));
        assert_eq!(parse_command("  5\n"), Ok(Command::Place(4)));
    }

    #[test]
    fn test_out_of_range_cells_are_rejected() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
    }

    #[test]
    fn test_signed_numbers_are_not_cells() {
        assert_eq!(
            parse_command("+5"),
            Err("Unknown command '+5', type h for help.".to_string())
        );
        assert!(parse_command("-1").is_err());
    }

    #[test]
    fn test_huge_number_is_reported_as_missing_cell() {
        let result = parse_command("99999999999999999999");

        assert_eq!(
            result,
            Err("Cell 99999999999999999999 does not exist, use 1 to 9.".to_string())
        );
    }

    #[test]
    fn test_word_commands() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("r"), Ok(Command::Restart));
        assert_eq!(parse_command("restart"), Ok(Command::Restart));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result = parse_command("center");

        assert_eq!(
            result,
            Err("Unknown command 'center', type h for help.".to_string())
        );
    }

    #[test]
    fn test_blank_line_is_rejected() {
        assert!(parse_command("   ").is_err());
    }
}
