//! End-to-end console transcript
//!
//! Feeds a typed session through `ConsoleInput` and checks the exact text
//! `ConsoleOutput` prints.

use std::io::Cursor;

use lotto_core::{FixedNumberGenerator, TicketMachine};
use lotto_game::{ConsoleInput, ConsoleOutput, GameConfig, GameExit, LottoGame};

#[test]
fn test_second_prize_session_transcript() {
    let typed = "1000\n1,2,3,4,5\n1, 2, 3, 4, 5, 6\n6\n9\nn\n";
    let input = ConsoleInput::new(Cursor::new(typed), Vec::new());
    let output = ConsoleOutput::new(Vec::new(), "KRW");
    let machine = TicketMachine::new(FixedNumberGenerator::new([[9u8, 5, 4, 3, 2, 1]]));

    let mut game = LottoGame::new(input, output, machine, GameConfig::default());
    assert_eq!(game.run().unwrap(), GameExit::Finished { rounds: 1 });

    let (input, output) = game.into_parts();
    let printed = String::from_utf8(output.into_inner()).unwrap();
    let expected = "\n1 tickets purchased.\n\
         [1, 2, 3, 4, 5, 9]\n\
         [ERROR] Invalid winning numbers: expected 6 numbers, got 5\n\
         [ERROR] Invalid bonus number: bonus 6 is already one of the winning numbers\n\
         \n\
         Winning statistics\n\
         --------------------\n\
         3 matches (5,000 KRW) - 0 tickets\n\
         4 matches (50,000 KRW) - 0 tickets\n\
         5 matches (1,500,000 KRW) - 0 tickets\n\
         5 matches, bonus ball matched (30,000,000 KRW) - 1 tickets\n\
         6 matches (2,000,000,000 KRW) - 0 tickets\n\
         Total return rate is 3,000,000%.\n";
    assert_eq!(printed, expected);

    // Winning numbers were prompted twice, purchase only once.
    let (_, prompts) = input.into_inner();
    let prompts = String::from_utf8(prompts).unwrap();
    assert_eq!(prompts.matches("Enter the purchase amount.").count(), 1);
    assert_eq!(prompts.matches("Enter the winning numbers").count(), 2);
    assert_eq!(prompts.matches("Enter the bonus number.").count(), 2);
    assert_eq!(prompts.matches("Play again?").count(), 1);
}

#[test]
fn test_closed_stdin_ends_with_a_fault() {
    let input = ConsoleInput::new(Cursor::new("1000\n"), Vec::new());
    let output = ConsoleOutput::new(Vec::new(), "KRW");
    let machine = TicketMachine::new(FixedNumberGenerator::new([[1u8, 2, 3, 4, 5, 6]]));

    let mut game = LottoGame::new(input, output, machine, GameConfig::default());
    assert!(game.run().is_err());
    assert_eq!(game.state().tickets().len(), 1);
}
