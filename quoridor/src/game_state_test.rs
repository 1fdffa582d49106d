#[cfg(test)]
mod tests {
    use super::super::{
        GameOptions, GameState, Intent, Move, MoveRejection, Player, Position, Wall, WallIntent,
    };
    use engine::game_state::GameState as GameStateTrait;
    use std::collections::HashSet;

    const RACE: &str = "e2 d9 e3 d8 e4 d7 e5 d6 f5 d5 f6 d4 f7 d3 f8 d2 f9";

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    fn game(notation: &str) -> GameState {
        GameState::from_notation(notation, None).unwrap()
    }

    fn set(positions: &[&str]) -> HashSet<Position> {
        positions.iter().map(|p| pos(p)).collect()
    }

    #[test]
    fn test_valid_pawn_moves_white() {
        let game_state = GameState::initial();

        assert_eq!(
            game_state.valid_pawn_moves(),
            vec![pos("e2"), pos("f1"), pos("d1")]
        );
    }

    #[test]
    fn test_valid_pawn_moves_black() {
        let game_state = game("f1");

        assert_eq!(game_state.player_to_move(), Player::Black);
        assert_eq!(
            game_state.valid_pawn_moves(),
            vec![pos("f9"), pos("e8"), pos("d9")]
        );
    }

    #[test]
    fn test_pawn_move_then_wall_by_intent() {
        let mut game_state = GameState::initial();

        assert_eq!(game_state.take_move(&mv("e2")), Ok(Player::Black));
        assert_eq!(
            game_state.apply(Intent::PlaceWall {
                target: pos("e5"),
                intent: WallIntent::Horizontal
            }),
            Ok(Player::White)
        );

        assert_eq!(game_state.pawn(Player::White).position, pos("e2"));
        assert_eq!(game_state.pawn(Player::White).walls_left, 10);
        assert_eq!(game_state.pawn(Player::Black).walls_left, 9);
        assert_eq!(
            game_state.walls().collect::<Vec<_>>(),
            vec![Wall::horizontal(pos("e5"))]
        );
        assert_eq!(game_state.history().tokens(), vec!["e2", "e5h"]);
    }

    #[test]
    fn test_wall_enclosing_pawn_is_rejected() {
        let mut game_state = game("d1v f1v");
        let before = game_state.clone();

        assert_eq!(
            game_state.apply(Intent::PlaceWall {
                target: pos("e1"),
                intent: WallIntent::Horizontal
            }),
            Err(MoveRejection::PathBlocked)
        );
        assert_eq!(
            game_state.take_move(&mv("e1h")),
            Err(MoveRejection::PathBlocked)
        );
        assert_eq!(game_state, before);
        assert_eq!(game_state.pawn(Player::White).walls_left, 9);
    }

    #[test]
    fn test_wall_cutting_off_opponent_is_rejected() {
        // Box Black's pawn in on e9 and f9.
        let mut game_state = game("d8v f8v");

        assert_eq!(game_state.player_to_move(), Player::White);
        assert_eq!(
            game_state.take_move(&mv("e8h")),
            Err(MoveRejection::PathBlocked)
        );
        assert!(!game_state.valid_wall_moves().contains(&Wall::horizontal(pos("e8"))));
    }

    #[test]
    fn test_overlapping_and_crossing_walls_are_rejected() {
        let mut game_state = game("e5h");

        for wall in ["e5h", "d5h", "f5h", "e5v"] {
            assert_eq!(
                game_state.take_move(&mv(wall)),
                Err(MoveRejection::IllegalWallTarget),
                "{}",
                wall
            );
        }

        assert_eq!(game_state.take_move(&mv("e4v")), Ok(Player::White));
    }

    #[test]
    fn test_illegal_pawn_destination() {
        let mut game_state = GameState::initial();

        assert_eq!(
            game_state.take_move(&mv("e3")),
            Err(MoveRejection::IllegalPawnDestination)
        );
        assert_eq!(
            game_state.apply(Intent::MovePawn {
                destination: pos("e1")
            }),
            Err(MoveRejection::IllegalPawnDestination)
        );
        assert_eq!(game_state, GameState::initial());
    }

    #[test]
    fn test_no_walls_left() {
        let options = GameOptions {
            walls_per_player: 1,
        };
        let mut game_state =
            GameState::from_notation_with_options(options, "a3h c3h", None).unwrap();

        assert_eq!(game_state.pawn(Player::White).walls_left, 0);
        assert_eq!(
            game_state.take_move(&mv("e3h")),
            Err(MoveRejection::NoWallsLeft)
        );
        assert!(game_state.valid_wall_moves().is_empty());
        assert_eq!(game_state.take_move(&mv("e2")), Ok(Player::Black));
    }

    #[test]
    fn test_game_over() {
        let mut game_state = game(RACE);

        assert_eq!(game_state.winner(), Some(Player::White));
        assert_eq!(game_state.pawn(Player::White).position, pos("f9"));
        assert_eq!(
            game_state.take_move(&mv("d1")),
            Err(MoveRejection::GameOver)
        );
        assert_eq!(
            game_state.take_move(&mv("a1h")),
            Err(MoveRejection::GameOver)
        );
        assert!(game_state.valid_moves().is_empty());
    }

    #[test]
    fn test_moves_rejected_behind_end_of_history() {
        let mut game_state = game("e2 e8");
        game_state.go_back(1);

        assert_eq!(game_state.player_to_move(), Player::Black);
        assert_eq!(
            game_state.take_move(&mv("d9")),
            Err(MoveRejection::NotAtEndOfHistory)
        );
        assert_eq!(
            game_state.apply(Intent::PlaceWall {
                target: pos("a1"),
                intent: WallIntent::Vertical
            }),
            Err(MoveRejection::NotAtEndOfHistory)
        );
        assert!(game_state.valid_moves().is_empty());
    }

    #[test]
    fn test_out_of_turn_moves_are_rejected() {
        let mut game_state = GameState::initial();

        assert_eq!(
            game_state.apply_as(
                Player::Black,
                Intent::MovePawn {
                    destination: pos("e2")
                }
            ),
            Err(MoveRejection::NotYourTurn)
        );
        assert_eq!(
            game_state.apply_as(
                Player::Black,
                Intent::PlaceWall {
                    target: pos("e5"),
                    intent: WallIntent::Horizontal
                }
            ),
            Err(MoveRejection::NotYourTurn)
        );
        assert_eq!(
            game_state.take_move_as(Player::Black, &mv("e8")),
            Err(MoveRejection::NotYourTurn)
        );
        assert_eq!(game_state, GameState::initial());

        assert_eq!(
            game_state.apply_as(
                Player::White,
                Intent::MovePawn {
                    destination: pos("e2")
                }
            ),
            Ok(Player::Black)
        );
        assert_eq!(
            game_state.take_move_as(Player::White, &mv("e3")),
            Err(MoveRejection::NotYourTurn)
        );
        assert_eq!(
            game_state.take_move_as(Player::Black, &mv("e8")),
            Ok(Player::White)
        );
    }

    #[test]
    fn test_turn_checked_after_history_and_game_over() {
        let mut game_state = game("e2 e8");
        game_state.go_back(1);

        assert_eq!(
            game_state.take_move_as(Player::White, &mv("e3")),
            Err(MoveRejection::NotAtEndOfHistory)
        );

        let mut game_state = game(RACE);

        assert_eq!(
            game_state.take_move_as(Player::White, &mv("f8")),
            Err(MoveRejection::GameOver)
        );
    }

    #[test]
    fn test_turn_checked_before_walls_left() {
        let options = GameOptions {
            walls_per_player: 1,
        };
        let mut game_state =
            GameState::from_notation_with_options(options, "a3h c3h", None).unwrap();

        assert_eq!(
            game_state.take_move_as(Player::Black, &mv("e3h")),
            Err(MoveRejection::NotYourTurn)
        );
        assert_eq!(
            game_state.take_move_as(Player::White, &mv("e3h")),
            Err(MoveRejection::NoWallsLeft)
        );
    }

    #[test]
    fn test_straight_jump() {
        let game_state = game("e2 e8 e3 e7 e4 e6");

        assert_eq!(
            game_state.valid_pawn_moves().into_iter().collect::<HashSet<_>>(),
            set(&["e5", "f4", "d4", "e3"])
        );

        let game_state = game("e2 e8 e3 e7 e4 e6 e5");

        assert_eq!(
            game_state.valid_pawn_moves().into_iter().collect::<HashSet<_>>(),
            set(&["e4", "f6", "d6", "e7"])
        );
    }

    #[test]
    fn test_jump_blocked_by_wall_side_steps() {
        let mut game_state = game("e2 e8 e3 e7 e4 e6 e5 e6h");

        assert_eq!(
            game_state.valid_pawn_moves().into_iter().collect::<HashSet<_>>(),
            set(&["d6", "f6", "f5", "d5", "e4"])
        );
        assert_eq!(
            game_state.take_move(&mv("e7")),
            Err(MoveRejection::IllegalPawnDestination)
        );
        assert_eq!(game_state.take_move(&mv("f6")), Ok(Player::Black));
    }

    #[test]
    fn test_wall_intent_slides_back() {
        let mut game_state = game("f5h");

        assert_eq!(
            game_state.apply(Intent::PlaceWall {
                target: pos("e5"),
                intent: WallIntent::Horizontal
            }),
            Ok(Player::White)
        );
        assert_eq!(game_state.history().notation(), "f5h d5h");
    }

    #[test]
    fn test_intersection_intent_places_horizontal_wall() {
        let mut game_state = GameState::initial();

        game_state
            .apply(Intent::PlaceWall {
                target: pos("i9"),
                intent: WallIntent::Intersection,
            })
            .unwrap();

        assert_eq!(game_state.history().notation(), "h8h");
    }

    #[test]
    fn test_valid_wall_moves() {
        assert_eq!(GameState::initial().valid_wall_moves().len(), 128);
        assert_eq!(game("e5h").valid_wall_moves().len(), 124);
    }

    #[test]
    fn test_go_back_and_forward() {
        let notation = "e2 e8 e5h d8 e3 c5v";
        let mut game_state = game(notation);
        let end = game_state.clone();

        assert!(game_state.go_back(2));

        let prefix = game("e2 e8");
        assert_eq!(game_state.board(), prefix.board());
        assert_eq!(game_state.pawns(), prefix.pawns());
        assert_eq!(game_state.player_to_move(), Player::White);
        assert_eq!(game_state.history().len(), 6);
        assert_eq!(game_state.history().cursor(), 2);

        assert!(game_state.go_forward(6));
        assert_eq!(game_state, end);

        assert!(game_state.go_back(0));
        assert!(game_state.board().is_empty());
        assert_eq!(game_state.pawns(), GameState::initial().pawns());
        assert_eq!(game_state.history().notation(), notation);
    }

    #[test]
    fn test_go_back_restores_pawn_before_walls() {
        let mut game_state = game("e2 e8 a1h d8 e3 c5v g4v");

        assert!(game_state.go_back(3));
        assert_eq!(game_state.pawn(Player::White).position, pos("e2"));
        assert_eq!(game_state.pawn(Player::Black).position, pos("e8"));
        assert_eq!(game_state.pawn(Player::White).walls_left, 9);
        assert_eq!(game_state.pawn(Player::Black).walls_left, 10);
        assert_eq!(
            game_state.walls().collect::<Vec<_>>(),
            vec![Wall::horizontal(pos("a1"))]
        );
        assert_eq!(
            game_state.history().last_pawn_step(),
            None
        );
    }

    #[test]
    fn test_go_back_and_forward_out_of_range() {
        let mut game_state = game("e2 e8");
        let before = game_state.clone();

        assert!(!game_state.go_back(2));
        assert!(!game_state.go_back(5));
        assert!(!game_state.go_forward(2));
        assert!(!game_state.go_forward(3));
        assert_eq!(game_state, before);

        game_state.go_back(0);
        assert!(!game_state.go_forward(0));
        assert!(!game_state.go_forward(3));
        assert!(game_state.go_forward(1));
        assert_eq!(game_state.pawn(Player::White).position, pos("e2"));
        assert_eq!(game_state.pawn(Player::Black).position, pos("e9"));
    }

    #[test]
    fn test_every_prefix_matches_history_position() {
        let moves = RACE.split_whitespace().map(mv).collect::<Vec<_>>();
        let mut game_state = game(RACE);

        for cursor in (0..moves.len()).rev() {
            assert!(game_state.go_back(cursor));

            let prefix = GameState::reconstruct(moves[..cursor].iter().copied(), None).unwrap();
            assert_eq!(game_state.board(), prefix.board(), "cursor {}", cursor);
            assert_eq!(game_state.pawns(), prefix.pawns(), "cursor {}", cursor);
            assert_eq!(game_state.winner(), None);
        }
    }

    #[test]
    fn test_restart_keeps_options() {
        let options = GameOptions {
            walls_per_player: 4,
        };
        let mut game_state =
            GameState::from_notation_with_options(options, "e2 e8 a1h", None).unwrap();

        game_state.restart();

        assert_eq!(game_state, GameState::with_options(options));
        assert_eq!(game_state.options(), &options);
        assert_eq!(game_state.pawn(Player::White).walls_left, 4);
    }

    #[test]
    fn test_reconstruct_checks_turn() {
        assert!(GameState::from_notation("e2", Some(Player::Black)).is_ok());
        assert!(GameState::from_notation("e2", Some(Player::White)).is_err());
        assert!(GameState::from_notation("", Some(Player::White)).is_ok());
        assert!(GameState::from_notation(RACE, Some(Player::White)).is_ok());
        assert!(GameState::from_notation(RACE, Some(Player::Black)).is_ok());
    }

    #[test]
    fn test_reconstruct_reports_illegal_move() {
        let err = GameState::from_notation("e2 e8 e4", None).unwrap_err();

        assert!(format!("{:#}", err).contains("Move 3 'e4'"));
        assert!(GameState::from_notation("e2 z9", None).is_err());
    }

    #[test]
    fn test_move_number() {
        assert_eq!(GameState::initial().move_number(), 1);
        assert_eq!(game("e2").move_number(), 1);
        assert_eq!(game("e2 e8").move_number(), 2);
    }
}
