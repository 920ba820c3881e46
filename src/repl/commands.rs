//! REPL command table

use std::str::FromStr;

use crate::error::PokedexError;

/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Cache,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 9] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
        Command::Cache,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
            Command::Cache => "cache",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the names of the next 20 location areas",
            Command::MapBack => "Displays the previous 20 location areas",
            Command::Explore => "Lists the Pokemon found in a location area: explore <area>",
            Command::Catch => "Attempt to catch a Pokemon: catch <pokemon>",
            Command::Inspect => "Show name, height, weight, stats and types of a caught Pokemon",
            Command::Pokedex => "Lists every Pokemon in your Pokedex",
            Command::Cache => "Shows response cache statistics",
        }
    }
}

impl FromStr for Command {
    type Err = PokedexError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == word)
            .ok_or_else(|| PokedexError::UnknownCommand(word.to_string()))
    }
}
