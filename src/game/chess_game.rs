//! Game orchestrator.
//!
//! `ChessGame` owns the live board and all game-level state: outcome, side to
//! move, castling rights, captured tally, and move history. It is the only
//! thing that mutates them during play and the only source of `GameEvent`s.
//!
//! Every command validates fully before its first mutation. A command that
//! returns `Err` leaves all state untouched and publishes nothing.

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game::captured_pieces::CapturedPieces;
use crate::game::game_config::GameConfig;
use crate::game::game_events::{EventBus, GameEvent, GameObserver, SubscriptionId};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_king_destination, king_home, revoke_rights_for_move};
use crate::game_state::chess_types::{
    CastlingRights, GameState, Piece, PieceType, Side, Square, Wing,
};
use crate::move_generation::legal_move_apply::{
    apply_castle_to_board, apply_move_to_board, castle_squares,
};
use crate::move_generation::legal_move_checks::{in_check, is_checkmate, is_stalemate};
use crate::move_generation::legal_move_generator::{disambiguate, en_passant_moves, legal_moves};
use crate::move_generation::legal_moves_castling::{castle_valid, castling_moves};
use crate::moves::move_descriptions::{
    CandidateMove, CheckKind, ChessMove, EnPassantCapture, MoveKind,
};
use crate::utils::standard_notation::{format_history, format_move};

/// A fully validated command: the record it produces and the state it
/// leaves behind.
#[derive(Debug)]
struct PlannedMove {
    record: ChessMove,
    board: Board,
    rights: CastlingRights,
    taken: Option<(Piece, Square)>,
    changed: Vec<Square>,
}

#[derive(Debug)]
pub struct ChessGame {
    config: GameConfig,
    board: Board,
    game_state: GameState,
    side_to_move: Side,
    castling_rights: CastlingRights,
    captured: CapturedPieces,
    history: Vec<ChessMove>,
    events: EventBus,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// A game in the starting position, not yet started.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new_game(),
            game_state: GameState::NotStarted,
            side_to_move: Side::White,
            castling_rights: CastlingRights::all(),
            captured: CapturedPieces::new(),
            history: Vec::new(),
            events: EventBus::default(),
        }
    }

    /// Back to the starting position with empty history, `NotStarted`.
    pub fn reset(&mut self) {
        debug!("resetting game");
        self.board.reset();
        self.history.clear();
        self.captured.clear();
        self.set_castling_rights(CastlingRights::all());
        self.set_game_state(GameState::NotStarted);
        self.events
            .publish(GameEvent::SquaresChanged(Square::all().collect()));
    }

    /// Begins play: `InProgress`, White to move, all castling rights set.
    pub fn start(&mut self) {
        debug!("starting game");
        self.set_castling_rights(CastlingRights::all());
        self.set_side_to_move(Side::White);
        self.set_game_state(GameState::InProgress);
    }

    /// Moves the piece on `from` to `to`.
    ///
    /// `capture_square` is only needed for en passant, where the captured
    /// pawn does not stand on `to`; when omitted for an en-passant
    /// destination it is inferred.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        capture_square: Option<Square>,
    ) -> Result<ChessMove, ChessErrors> {
        match self.plan_move(from, to, capture_square) {
            Ok(plan) => Ok(self.commit(plan)),
            Err(err) => {
                debug!(%from, %to, error = %err, "move rejected");
                Err(err)
            }
        }
    }

    /// Castles `side` on `wing`.
    pub fn do_castle(&mut self, side: Side, wing: Wing) -> Result<ChessMove, ChessErrors> {
        match self.plan_castle(side, wing) {
            Ok(plan) => Ok(self.commit(plan)),
            Err(err) => {
                debug!(%side, %wing, error = %err, "castle rejected");
                Err(err)
            }
        }
    }

    /// Ends a running game: `Some(side)` wins for that side, `None` is a
    /// draw.
    pub fn end_game(&mut self, winner: Option<Side>) -> Result<(), ChessErrors> {
        self.require_in_progress()?;
        let outcome = match winner {
            Some(Side::White) => GameState::WhiteWin,
            Some(Side::Black) => GameState::BlackWin,
            None => GameState::Draw,
        };
        debug!(?outcome, "game over");
        self.set_game_state(outcome);
        Ok(())
    }

    /// Issues a command previously offered by `legal_commands`.
    pub fn apply(&mut self, command: CandidateMove) -> Result<ChessMove, ChessErrors> {
        match command {
            CandidateMove::Regular {
                from,
                to,
                capture_square,
            } => self.make_move(from, to, capture_square),
            CandidateMove::Castle { side, wing } => self.do_castle(side, wing),
        }
    }

    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: GameObserver + 'static,
    {
        self.events.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Legal destinations for the piece on `square`, en passant and castling
    /// excluded.
    pub fn legal_moves(&self, square: Square) -> Result<Vec<Square>, ChessErrors> {
        self.require_in_progress()?;
        legal_moves(&self.board, square)
    }

    pub fn en_passant_moves(&self, square: Square) -> Result<Vec<EnPassantCapture>, ChessErrors> {
        self.require_in_progress()?;
        if !self.board.is_occupied(square) {
            return Err(ChessErrors::NoPieceAt(square));
        }
        Ok(en_passant_moves(&self.board, square, self.history.last()))
    }

    /// Castles currently available to `side`, queenside first, with the
    /// king's landing square.
    pub fn castling_moves(&self, side: Side) -> Result<Vec<(Wing, Square)>, ChessErrors> {
        self.require_in_progress()?;
        Ok(castling_moves(&self.board, &self.castling_rights, side))
    }

    /// Every command the side to move may issue. Empty unless in progress.
    pub fn legal_commands(&self) -> Vec<CandidateMove> {
        if self.game_state != GameState::InProgress {
            return Vec::new();
        }
        let side = self.side_to_move;
        let last = self.history.last();
        let mut out = Vec::new();

        for (_, from) in self.board.pieces_of(side) {
            if let Ok(moves) = legal_moves(&self.board, from) {
                out.extend(moves.into_iter().map(|to| CandidateMove::Regular {
                    from,
                    to,
                    capture_square: None,
                }));
            }
            out.extend(
                en_passant_moves(&self.board, from, last)
                    .into_iter()
                    .map(|ep| CandidateMove::Regular {
                        from,
                        to: ep.to,
                        capture_square: Some(ep.captured),
                    }),
            );
        }
        out.extend(
            castling_moves(&self.board, &self.castling_rights, side)
                .into_iter()
                .map(|(wing, _)| CandidateMove::Castle { side, wing }),
        );
        out
    }

    /// The record `command` would produce, without playing it.
    pub fn preview(&self, command: CandidateMove) -> Result<ChessMove, ChessErrors> {
        let plan = match command {
            CandidateMove::Regular {
                from,
                to,
                capture_square,
            } => self.plan_move(from, to, capture_square)?,
            CandidateMove::Castle { side, wing } => self.plan_castle(side, wing)?,
        };
        Ok(plan.record)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Glyphs of the pieces `side` has lost, most valuable first.
    pub fn format_captured_pieces(&self, side: Side) -> String {
        self.captured.format(side)
    }

    /// Standard algebraic notation for every half-move so far.
    pub fn move_history_notation(&self) -> Vec<String> {
        format_history(&self.history, self.config.castle_notation)
    }

    #[inline]
    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn move_history(&self) -> &[ChessMove] {
        &self.history
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn captured_pieces(&self) -> &CapturedPieces {
        &self.captured
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_check(&self, side: Side) -> bool {
        in_check(&self.board, side)
    }

    pub fn is_checkmate(&self, side: Side) -> bool {
        is_checkmate(&self.board, side, self.history.last())
    }

    pub fn is_stalemate(&self, side: Side) -> bool {
        is_stalemate(&self.board, side, &self.castling_rights, self.history.last())
    }

    fn plan_move(
        &self,
        from: Square,
        to: Square,
        capture_square: Option<Square>,
    ) -> Result<PlannedMove, ChessErrors> {
        self.require_in_progress()?;
        let piece = self.board.piece_at(from).ok_or(ChessErrors::NoPieceAt(from))?;
        if piece.side != self.side_to_move {
            return Err(ChessErrors::NotSideToMove {
                expected: self.side_to_move,
                found: piece.side,
            });
        }
        if self.board.occupied_by(piece.side, to) {
            return Err(ChessErrors::CannotCaptureOwnPiece(to));
        }

        let capture = self.resolve_capture_square(from, to, capture_square)?;
        let kind = match capture {
            Some(_) => MoveKind::EnPassant,
            None if self.board.is_occupied(to) => MoveKind::Capture,
            None => MoveKind::Normal,
        };
        // Disambiguation reads the position before the move.
        let disambiguation = if piece.piece_type == PieceType::Pawn {
            String::new()
        } else {
            disambiguate(&self.board, from, to)?
        };

        let mut board = self.board.duplicate();
        let taken = apply_move_to_board(&mut board, from, to, capture)?;
        let record = ChessMove::new(piece, from, to, kind).with_disambiguation(disambiguation);
        let check = check_kind(&board, piece.side.opposite(), &record);

        let mut rights = self.castling_rights;
        revoke_rights_for_move(&mut rights, piece, from);

        let mut changed = vec![from, to];
        changed.extend(capture);

        Ok(PlannedMove {
            record: record.with_check(check),
            board,
            rights,
            taken: taken.map(|piece| (piece, capture.unwrap_or(to))),
            changed,
        })
    }

    /// Works out which square, if not `to`, loses its piece.
    fn resolve_capture_square(
        &self,
        from: Square,
        to: Square,
        capture_square: Option<Square>,
    ) -> Result<Option<Square>, ChessErrors> {
        let regular = legal_moves(&self.board, from)?.contains(&to);
        let en_passant = en_passant_moves(&self.board, from, self.history.last())
            .into_iter()
            .find(|ep| ep.to == to);

        match capture_square.filter(|square| *square != to) {
            None if regular => Ok(None),
            None => en_passant
                .map(|ep| Some(ep.captured))
                .ok_or(ChessErrors::IllegalMove { from, to }),
            Some(capture) => match en_passant {
                Some(ep) if ep.captured == capture => Ok(Some(capture)),
                Some(_) => Err(ChessErrors::InvalidCaptureSquare { to, capture }),
                None if regular => Err(ChessErrors::InvalidCaptureSquare { to, capture }),
                None => Err(ChessErrors::IllegalMove { from, to }),
            },
        }
    }

    fn plan_castle(&self, side: Side, wing: Wing) -> Result<PlannedMove, ChessErrors> {
        self.require_in_progress()?;
        if side != self.side_to_move {
            return Err(ChessErrors::NotSideToMove {
                expected: self.side_to_move,
                found: side,
            });
        }
        if !self.castling_rights.allowed(side, wing) {
            return Err(ChessErrors::NoCastlingRights(side, wing));
        }
        if !castle_valid(&self.board, side, wing) {
            return Err(ChessErrors::InvalidCastle(side, wing));
        }

        let mut board = self.board.duplicate();
        apply_castle_to_board(&mut board, side, wing)?;
        let record = ChessMove::new(
            Piece::new(PieceType::King, side),
            king_home(side),
            castle_king_destination(side, wing),
            MoveKind::castle(wing),
        );
        let check = check_kind(&board, side.opposite(), &record);

        let mut rights = self.castling_rights;
        rights.revoke_side(side);

        Ok(PlannedMove {
            record: record.with_check(check),
            board,
            rights,
            taken: None,
            changed: castle_squares(side, wing).to_vec(),
        })
    }

    /// Applies a validated plan. Cannot fail.
    fn commit(&mut self, plan: PlannedMove) -> ChessMove {
        let PlannedMove {
            record,
            board,
            rights,
            taken,
            changed,
        } = plan;

        self.board = board;
        self.set_castling_rights(rights);
        if let Some((piece, square)) = taken {
            self.captured.record(piece);
            self.events.publish(GameEvent::PieceCaptured { piece, square });
        }

        debug!(
            from = %record.from,
            to = %record.to,
            notation = %format_move(&record, self.config.castle_notation),
            "move committed"
        );
        self.history.push(record.clone());
        self.events.publish(GameEvent::SquaresChanged(changed));
        self.set_side_to_move(record.side().opposite());
        self.end_on_checkmate(&record);
        record
    }

    fn set_game_state(&mut self, new: GameState) {
        let old = std::mem::replace(&mut self.game_state, new);
        if old != new {
            self.events.publish(GameEvent::GameStateChanged { old, new });
        }
    }

    fn set_side_to_move(&mut self, new: Side) {
        let old = std::mem::replace(&mut self.side_to_move, new);
        if old != new {
            self.events.publish(GameEvent::SideToMoveChanged { old, new });
        }
    }

    fn set_castling_rights(&mut self, new: CastlingRights) {
        let old = std::mem::replace(&mut self.castling_rights, new);
        for side in [Side::White, Side::Black] {
            let queenside = new.allowed(side, Wing::Queenside);
            let kingside = new.allowed(side, Wing::Kingside);
            if queenside != old.allowed(side, Wing::Queenside)
                || kingside != old.allowed(side, Wing::Kingside)
            {
                self.events.publish(GameEvent::CastlingRightsChanged {
                    side,
                    queenside,
                    kingside,
                });
            }
        }
    }

    fn require_in_progress(&self) -> Result<(), ChessErrors> {
        match self.game_state {
            GameState::InProgress => Ok(()),
            other => Err(ChessErrors::GameNotInProgress(other)),
        }
    }

    fn end_on_checkmate(&mut self, record: &ChessMove) {
        if self.config.auto_end_on_checkmate && record.check == CheckKind::Checkmate {
            let outcome = match record.side() {
                Side::White => GameState::WhiteWin,
                Side::Black => GameState::BlackWin,
            };
            debug!(?outcome, "game over by checkmate");
            self.set_game_state(outcome);
        }
    }
}

/// Check status of `defender` on a board where `record` was just played.
fn check_kind(board: &Board, defender: Side, record: &ChessMove) -> CheckKind {
    if !in_check(board, defender) {
        CheckKind::None
    } else if is_checkmate(board, defender, Some(record)) {
        CheckKind::Checkmate
    } else {
        CheckKind::Check
    }
}
