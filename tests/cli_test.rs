#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use mouthbreather::cli::{parse_command, run, Command, LOSS_MESSAGE, WELCOME, WIN_MESSAGE};
    use mouthbreather::coords::format_coordinate;
    use mouthbreather::{Coordinates, Game, GameParameters, GameStatus, InputError, RowOrder};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn new_game(seed: u64) -> Game<SmallRng> {
        let params = GameParameters::new(8, 8, 0.15).unwrap();
        Game::new(params, SmallRng::seed_from_u64(seed)).unwrap()
    }

    fn run_script(game: &mut Game<SmallRng>, script: &str) -> (GameStatus, String) {
        let mut out = Vec::new();
        let status = run(game, RowOrder::Standard, Cursor::new(script.to_owned()), &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_command_forms() {
        let at = Coordinates::new(3, 4);
        assert_eq!(parse_command("3 B", 5, 5), Ok(Command::Reveal(at)));
        assert_eq!(parse_command("  s 3 b\n", 5, 5), Ok(Command::Reveal(at)));
        assert_eq!(parse_command("reveal 3 B", 5, 5), Ok(Command::Reveal(at)));
        assert_eq!(parse_command("f 3 B", 5, 5), Ok(Command::Flag(at)));
        assert_eq!(parse_command("FLAG 3 B", 5, 5), Ok(Command::Flag(at)));
        assert_eq!(parse_command("q", 5, 5), Ok(Command::Quit));
        assert_eq!(parse_command("Quit\n", 5, 5), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_command_errors() {
        assert_eq!(parse_command("", 5, 5), Err(InputError::MissingCoordinate));
        assert_eq!(parse_command("3", 5, 5), Err(InputError::MissingCoordinate));
        assert_eq!(parse_command("1 2 3 4", 5, 5), Err(InputError::MissingCoordinate));
        assert_eq!(
            parse_command("x 3 B", 5, 5),
            Err(InputError::UnknownCommand("x".into()))
        );
        assert_eq!(
            parse_command("9 B", 5, 5),
            Err(InputError::ColumnOutOfRange { column: 9, width: 5 })
        );
    }

    #[test]
    fn test_quit_before_opening() {
        let mut game = new_game(1);
        let (status, out) = run_script(&mut game, "q\n");
        assert_eq!(status, GameStatus::InProgress);
        assert!(!game.is_opened());
        assert!(out.starts_with(WELCOME));
        assert!(out.contains("(x y): "));
    }

    #[test]
    fn test_bad_input_reprompts_without_changing_state() {
        let mut game = new_game(2);
        let (_, out) = run_script(&mut game, "f 1 A\nzz\n0 A\n4 D\n");
        assert!(out.contains("reveal a cell before anything else"));
        assert!(out.contains("expected a coordinate like '3 B'"));
        assert!(out.contains("invalid x coordinate 0 (expected 1-8)"));
        assert!(game.is_opened());
        let opening = Coordinates::new(4, 5);
        assert!(game.grid().cell(opening).unwrap().is_revealed());
    }

    #[test]
    fn test_end_of_input_stops_the_session() {
        let mut game = new_game(3);
        let (status, _) = run_script(&mut game, "4 D\n");
        assert!(game.is_opened());
        assert_ne!(status, GameStatus::Lost);
    }

    #[test]
    fn test_scripted_win() {
        let mut game = new_game(4);
        game.open(Coordinates::new(4, 4)).unwrap();
        let height = game.grid().height();
        let script: String = game
            .grid()
            .coordinates()
            .filter(|&at| !game.grid().cell(at).unwrap().is_mine())
            .map(|at| format!("{}\n", format_coordinate(at, height)))
            .collect();
        let (status, out) = run_script(&mut game, &script);
        assert_eq!(status, GameStatus::Won);
        assert!(out.trim_end().ends_with(WIN_MESSAGE));
    }

    #[test]
    fn test_scripted_loss() {
        let mut game = new_game(5);
        game.open(Coordinates::new(4, 4)).unwrap();
        let height = game.grid().height();
        let mine = game
            .grid()
            .coordinates()
            .find(|&at| game.grid().cell(at).unwrap().is_mine())
            .unwrap();
        let script = format!("f {0}\nf {0}\n{0}\n", format_coordinate(mine, height));
        let (status, out) = run_script(&mut game, &script);
        assert_eq!(status, GameStatus::Lost);
        assert!(out.contains(":O"));
        assert!(out.trim_end().ends_with(LOSS_MESSAGE));
    }
}
