use anyhow::{anyhow, Result};
use indicatif::ProgressBar;
use log::warn;

use std::io::{stdin, stdout, BufRead, Write};

use square4_ai::{
    config::{EngineConfig, GameConfig, DEPTH_ENV_VAR},
    game::{Game, GameState, Turn},
    search::Searcher,
};

fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    stdout().flush().expect("failed to flush to stdout!");
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer)
}

fn choose_depth<R: BufRead>(input: &mut R) -> Result<EngineConfig> {
    if let Ok(value) = std::env::var(DEPTH_ENV_VAR) {
        match EngineConfig::parse(&value) {
            Ok(config) => return Ok(config),
            Err(err) => warn!("ignoring {}: {}", DEPTH_ENV_VAR, err),
        }
    }
    loop {
        let input = read_line(input, "How deep is the search for Minimax? [1-5]: ")?;
        match EngineConfig::parse(&input) {
            Ok(config) => return Ok(config),
            Err(err) => println!("{}", err),
        }
    }
}

fn choose_first_turn<R: BufRead>(input: &mut R, config: &GameConfig) -> Result<Turn> {
    let prompt = format!(
        "Who will go first, (0) {} or (1) {}? ",
        config.player_name, config.ai_name
    );
    loop {
        match read_line(input, &prompt)?.trim() {
            "0" => return Ok(Turn::Player),
            "1" => return Ok(Turn::Ai),
            _ => println!("Please enter either '0' or '1'"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let stdin = stdin();
    let mut input = stdin.lock();

    println!("Welcome to Square 4\n");

    let mut config = GameConfig::default();
    config.engine = choose_depth(&mut input)?;
    config.first_turn = choose_first_turn(&mut input, &config)?;

    let mut searcher = Searcher::new(config.engine);
    let mut game = Game::new(config);

    // game loop
    loop {
        game.display().expect("Failed to draw board!");

        match game.state() {
            GameState::Playing => match game.turn() {
                Turn::Ai => {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message(&format!("{} is thinking...", game.config().ai_name));
                    spinner.enable_steady_tick(100);
                    let result = game.ai_move(&mut searcher);
                    spinner.finish_and_clear();
                    result?;
                }
                Turn::Player => {
                    let input_str = read_line(&mut input, "Move input > ")?;
                    let column = match input_str.trim().parse::<usize>() {
                        Ok(column @ 1..=square4_ai::WIDTH) => column - 1,
                        _ => {
                            println!("Invalid column: {}", input_str.trim());
                            continue;
                        }
                    };
                    if let Err(err) = game.play(column) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            },

            // end states
            GameState::PlayerWin => {
                println!("{} wins!!", game.config().player_name);
                break;
            }
            GameState::AiWin => {
                println!("{} wins!!", game.config().ai_name);
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    println!("{}", game.summary());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closed_input_is_an_error() {
        let mut input: &[u8] = b"";
        assert!(read_line(&mut input, "> ").is_err());
        assert!(choose_first_turn(&mut input, &GameConfig::default()).is_err());
    }

    #[test]
    fn prompts_retry_until_valid() -> Result<()> {
        let mut input: &[u8] = b"2\nx\n1\n";
        assert_eq!(choose_first_turn(&mut input, &GameConfig::default())?, Turn::Ai);
        assert!(read_line(&mut input, "> ").is_err());
        Ok(())
    }
}
