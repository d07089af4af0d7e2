use tablut_core::{
    parse_move, Board, BoardError, EncodingError, Piece, Side, Square, INITIAL_POSITION,
    NUM_SQUARES,
};

fn sq(text: &str) -> Square {
    Square::parse(text).expect("valid square")
}

fn play(board: &mut Board, moves: &[&str]) {
    for text in moves {
        let mv = parse_move(text).expect("valid notation");
        board
            .apply_move(mv)
            .unwrap_or_else(|err| panic!("{text} should be legal: {err}"));
    }
}

fn position(turn: Side, pieces: &[(&str, Piece)]) -> Board {
    let mut cells = [Piece::Empty.glyph(); NUM_SQUARES];
    for (square, piece) in pieces {
        cells[sq(square).index()] = piece.glyph();
    }
    let mut text = String::new();
    text.push(turn.to_code());
    text.extend(cells);
    Board::from_encoded(&text).expect("valid position")
}

#[test]
fn initial_board_layout() {
    let board = Board::new();

    assert_eq!(board.turn(), Side::Black);
    assert_eq!(board.winner(), None);
    assert!(!board.repeated_position());
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.king_position(), Some(sq("e5")));
    assert_eq!(board.piece_count(Side::Black), 16);
    assert_eq!(board.piece_count(Side::White), 9);
    assert_eq!(board.get(sq("a4")), Piece::BlackAttacker);
    assert_eq!(board.get(sq("e7")), Piece::WhiteDefender);
    assert_eq!(board.get(sq("a1")), Piece::Empty);
    assert_eq!(board.encoded(), INITIAL_POSITION);
}

#[test]
fn render_matches_fixed_width_layout() {
    let board = Board::new();
    let expected = concat!(
        " 9 - - - B B B - - -\n",
        " 8 - - - - B - - - -\n",
        " 7 - - - - W - - - -\n",
        " 6 B - - - W - - - B\n",
        " 5 B B W W K W W B B\n",
        " 4 B - - - W - - - B\n",
        " 3 - - - - W - - - -\n",
        " 2 - - - - B - - - -\n",
        " 1 - - - B B B - - -\n",
        "   a b c d e f g h i\n",
    );
    assert_eq!(board.render(true), expected);
    assert_eq!(board.to_string(), expected);

    let bare = board.render(false);
    assert_eq!(bare.lines().count(), 9);
    assert_eq!(bare.lines().next(), Some("   - - - B B B - - -"));
}

#[test]
fn encoding_round_trip_and_errors() {
    let board = Board::from_encoded(INITIAL_POSITION).expect("initial position parses");
    assert_eq!(board, Board::new());

    assert_eq!(
        Board::from_encoded("B---"),
        Err(EncodingError::Length {
            expected: 82,
            received: 4
        })
    );

    let bad_turn = format!("X{}", &INITIAL_POSITION[1..]);
    assert_eq!(
        Board::from_encoded(&bad_turn),
        Err(EncodingError::InvalidTurn('X'))
    );

    let bad_piece = format!("B?{}", &INITIAL_POSITION[2..]);
    assert_eq!(
        Board::from_encoded(&bad_piece),
        Err(EncodingError::InvalidPiece {
            glyph: '?',
            index: 0
        })
    );

    let no_king = INITIAL_POSITION.replace('K', "-");
    assert_eq!(
        Board::from_encoded(&no_king),
        Err(EncodingError::KingCount(0))
    );
}

#[test]
fn undo_restores_each_step() {
    let mut board = Board::new();

    play(&mut board, &["a4-1"]);
    assert_eq!(board.get(sq("a1")), Piece::BlackAttacker);
    board.undo().unwrap();
    assert_eq!(board.get(sq("a4")), Piece::BlackAttacker);
    assert_eq!(board.get(sq("a1")), Piece::Empty);

    play(&mut board, &["a4-1", "e3-d"]);
    board.undo().unwrap();
    assert_eq!(board.get(sq("e3")), Piece::WhiteDefender);
    assert_eq!(board.turn(), Side::White);
    board.undo().unwrap();
    assert_eq!(board.get(sq("a4")), Piece::BlackAttacker);
    assert_eq!(board.turn(), Side::Black);
    assert_eq!(board.encoded(), INITIAL_POSITION);
}

#[test]
fn undo_on_initial_position_is_a_no_op() {
    let mut board = Board::new();
    assert_eq!(board.undo(), Ok(()));
    assert_eq!(board.undo(), Ok(()));
    assert_eq!(board, Board::new());
}

#[test]
fn nested_apply_and_undo_restore_full_encoding() {
    let mut board = Board::new();
    let mut snapshots = vec![board.encoded()];
    let line = ["a4-3", "e3-c", "d1-3", "g5-7", "a3-b", "e7-f"];

    for text in line {
        play(&mut board, &[text]);
        snapshots.push(board.encoded());
        assert_eq!(board.move_count() as usize, board.history().len());
    }

    for expected in snapshots.iter().rev().skip(1) {
        board.undo().unwrap();
        assert_eq!(&board.encoded(), expected);
    }
    assert_eq!(board.move_count(), 0);
    assert_eq!(board, Board::new());
}

#[test]
fn every_opening_move_round_trips() {
    let mut board = Board::new();
    for mv in board.legal_moves(Side::Black) {
        let before = board.clone();
        board.apply_move(mv).unwrap();
        for reply in board.legal_moves(Side::White).into_iter().take(8) {
            let mid = board.encoded();
            board.apply_move(reply).unwrap();
            board.undo().unwrap();
            assert_eq!(board.encoded(), mid);
        }
        board.undo().unwrap();
        assert_eq!(board, before, "undo of {mv} changed the board");
    }
}

#[test]
fn king_position_follows_the_king() {
    let mut board = Board::new();
    play(
        &mut board,
        &["h5-6", "e4-b", "h6-7", "e5-4", "h7-8", "e4-h"],
    );

    assert_eq!(board.get(sq("h4")), Piece::King);
    assert_eq!(board.king_position(), Some(sq("h4")));
    assert_eq!(board.winner(), None);
}

#[test]
fn contract_violations_are_reported_and_leave_the_board_untouched() {
    let mut board = Board::new();
    let before = board.clone();

    let err = board.apply(sq("e3"), sq("d3")).unwrap_err();
    assert_eq!(err, BoardError::NotYourPiece(sq("e3")));

    let err = board.apply(sq("a5"), sq("a3")).unwrap_err();
    assert_eq!(err, BoardError::Blocked(sq("a5"), sq("a3")));

    let err = board.apply(sq("a4"), sq("b3")).unwrap_err();
    assert_eq!(err, BoardError::NotRookMove(sq("a4"), sq("b3")));

    let err = board.apply(sq("a4"), sq("a4")).unwrap_err();
    assert_eq!(err, BoardError::NotRookMove(sq("a4"), sq("a4")));

    assert_eq!(board, before);
}

#[test]
fn only_the_king_may_enter_the_throne() {
    let mut board = position(
        Side::White,
        &[
            ("e7", Piece::WhiteDefender),
            ("c3", Piece::King),
            ("i9", Piece::BlackAttacker),
        ],
    );

    assert!(!board.is_legal(sq("e7"), sq("e5")));
    assert!(board.is_legal(sq("e7"), sq("e4")));
    assert_eq!(
        board.apply(sq("e7"), sq("e5")),
        Err(BoardError::ThroneReserved)
    );

    let mut board = position(
        Side::White,
        &[("e2", Piece::King), ("i9", Piece::BlackAttacker)],
    );
    assert!(board.is_legal(sq("e2"), sq("e5")));
    board.apply(sq("e2"), sq("e5")).unwrap();
    assert_eq!(board.king_position(), Some(sq("e5")));
}

#[test]
fn legality_queries() {
    let board = Board::new();
    assert!(board.is_legal_from(sq("a4")));
    assert!(!board.is_legal_from(sq("e3")));
    assert!(!board.is_legal_from(sq("a1")));
    assert!(board.is_legal_move(parse_move("f9-i").unwrap()));
    assert!(!board.is_legal_move(parse_move("e8-7").unwrap()));
    assert!(board.is_unblocked_move(sq("a4"), sq("a1")));
    assert!(!board.is_unblocked_move(sq("a4"), sq("a6")));
}

#[test]
fn terminal_board_refuses_moves() {
    let mut board = position(
        Side::White,
        &[("c3", Piece::King), ("i9", Piece::BlackAttacker)],
    );
    board.apply(sq("c3"), sq("c1")).unwrap();
    assert_eq!(board.winner(), Some(Side::White));
    assert_eq!(
        board.apply(sq("c1"), sq("c2")),
        Err(BoardError::GameOver)
    );
}

#[test]
fn clear_history_keeps_position_but_blocks_undo() {
    let mut board = Board::new();
    play(&mut board, &["a4-1", "e3-d"]);
    let encoded = board.encoded();

    board.clear_history();
    assert!(board.history().is_empty());
    assert_eq!(board.encoded(), encoded);
    assert_eq!(board.move_count(), 2);
    assert_eq!(board.undo(), Err(BoardError::HistoryCleared));
    assert_eq!(board.encoded(), encoded);

    play(&mut board, &["a1-b"]);
    board.undo().unwrap();
    assert_eq!(board.encoded(), encoded);
}

#[test]
fn move_limit_forfeits_to_the_waiting_side() {
    let mut board = Board::new();
    board.set_move_limit(1);
    play(&mut board, &["a4-1", "e3-d"]);
    assert_eq!(board.winner(), None);

    board.apply_move(parse_move("a1-b").unwrap()).unwrap();
    assert_eq!(board.winner(), Some(Side::White));
    assert_eq!(board.get(sq("a1")), Piece::BlackAttacker);
    assert_eq!(board.get(sq("b1")), Piece::Empty);
    assert_eq!(board.turn(), Side::Black);

    board.undo().unwrap();
    assert_eq!(board.winner(), None);
    assert_eq!(board.move_count(), 2);
    assert_eq!(board.turn(), Side::Black);
}

#[test]
fn side_without_moves_forfeits() {
    let mut board = position(
        Side::Black,
        &[
            ("a1", Piece::BlackAttacker),
            ("a2", Piece::WhiteDefender),
            ("b1", Piece::WhiteDefender),
            ("e5", Piece::King),
        ],
    );
    assert!(!board.has_move(Side::Black));

    board.apply(sq("a1"), sq("a3")).unwrap();
    assert_eq!(board.winner(), Some(Side::White));
    assert_eq!(board.get(sq("a1")), Piece::BlackAttacker);
}

#[test]
fn repeated_position_is_won_by_the_side_to_move() {
    let mut board = Board::new();
    play(&mut board, &["a4-3", "e7-f", "a3-4"]);
    assert_eq!(board.winner(), None);

    play(&mut board, &["f7-e"]);
    assert_eq!(board.encoded(), INITIAL_POSITION);
    assert!(board.repeated_position());
    assert_eq!(board.turn(), Side::Black);
    assert_eq!(board.winner(), Some(Side::Black));

    board.undo().unwrap();
    assert!(!board.repeated_position());
    assert_eq!(board.winner(), None);
    assert_eq!(board.turn(), Side::White);

    play(&mut board, &["f7-g"]);
    assert!(!board.repeated_position());
    assert_eq!(board.winner(), None);
}

#[test]
fn repetition_is_still_detected_after_undo() {
    let mut board = Board::new();
    play(&mut board, &["a4-3"]);
    board.undo().unwrap();
    play(&mut board, &["a4-3", "e7-f", "a3-4", "f7-e"]);
    assert!(board.repeated_position());
    assert_eq!(board.winner(), Some(Side::Black));
}

#[test]
fn clones_are_independent() {
    let board = Board::new();
    let mut copy = board.clone();
    play(&mut copy, &["a4-1"]);
    assert_eq!(board.get(sq("a4")), Piece::BlackAttacker);
    assert_eq!(board.move_count(), 0);

    let mut target = Board::new();
    target.copy_from(&copy);
    assert_eq!(target, copy);
    target.undo().unwrap();
    assert_eq!(target, board);
    assert_eq!(copy.move_count(), 1);
}
