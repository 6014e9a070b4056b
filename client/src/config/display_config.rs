use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub human_symbol: char,
    pub bot_symbol: char,
    pub empty_symbol: char,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        let symbols = [self.human_symbol, self.bot_symbol, self.empty_symbol];
        if symbols.iter().any(|symbol| symbol.is_whitespace()) {
            return Err("board symbols must not be whitespace".to_string());
        }
        if symbols.iter().any(|symbol| symbol.is_ascii_digit()) {
            return Err("board symbols must not be digits".to_string());
        }
        if self.human_symbol == self.bot_symbol
            || self.human_symbol == self.empty_symbol
            || self.bot_symbol == self.empty_symbol
        {
            return Err(format!(
                "board symbols must be distinct, got '{}', '{}' and '{}'",
                self.human_symbol, self.bot_symbol, self.empty_symbol
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            human_symbol: 'X',
            bot_symbol: 'O',
            empty_symbol: '.',
        }
    }
}
