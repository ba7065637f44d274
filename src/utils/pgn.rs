//! PGN text rendering of a game's move history.
//!
//! An in-memory text view for display and copy-out; nothing here touches
//! the filesystem and no game state is persisted. Writing emits the
//! seven-tag roster and numbered movetext. Replay feeds PGN movetext into a
//! fresh `ChessGame`, matching each token against the notation of the legal
//! commands available.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::chess_errors::ChessErrors;
use crate::game::chess_game::ChessGame;
use crate::game::game_config::{CastleNotation, GameConfig};
use crate::game_state::chess_types::{GameState, Side};
use crate::moves::move_descriptions::{CandidateMove, ChessMove};
use crate::utils::standard_notation::{format_history, format_move};

pub const PGN_DATE_FORMAT: &str = "%Y.%m.%d";

const SEVEN_TAG_ROSTER: [&str; 7] = ["Event", "Site", "Date", "Round", "White", "Black", "Result"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    /// Move tokens in play order, annotations stripped.
    pub moves: Vec<String>,
    pub result: String,
}

/// PGN result token for a game state.
pub fn result_token(state: GameState) -> &'static str {
    match state {
        GameState::WhiteWin => "1-0",
        GameState::BlackWin => "0-1",
        GameState::Draw => "1/2-1/2",
        GameState::NotStarted | GameState::InProgress => "*",
    }
}

/// Seven-tag roster defaults for a game played on `date`.
pub fn default_headers(date: NaiveDate, state: GameState) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Plum Rules Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), date.format(PGN_DATE_FORMAT).to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result_token(state).to_owned());
    headers
}

/// PGN for `history` dated today, with `headers` overriding the defaults.
pub fn write_pgn(
    history: &[ChessMove],
    state: GameState,
    headers: &BTreeMap<String, String>,
) -> String {
    let mut merged = default_headers(Local::now().date_naive(), state);
    merged.extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
    write_pgn_with_headers(history, &merged)
}

/// PGN for `history` with exactly `headers`. The roster tags come first in
/// their customary order, any others follow alphabetically.
pub fn write_pgn_with_headers(history: &[ChessMove], headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    let roster = SEVEN_TAG_ROSTER
        .iter()
        .filter_map(|key| headers.get_key_value(*key));
    let extra = headers
        .iter()
        .filter(|(key, _)| !SEVEN_TAG_ROSTER.contains(&key.as_str()));
    for (key, value) in roster.chain(extra) {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let tokens = format_history(history, CastleNotation::Letters);
    let mut movetext_parts = Vec::<String>::with_capacity(tokens.len() + 1);
    for (ply, token) in tokens.into_iter().enumerate() {
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, token));
        } else {
            movetext_parts.push(token);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// Splits PGN text into headers, move tokens and result.
pub fn read_pgn(pgn: &str) -> Result<PgnGame, ChessErrors> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let mut moves = Vec::<String>::new();
    let mut result = "*".to_owned();

    let movetext = strip_pgn_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        let token = strip_move_number(token);
        if token.is_empty() {
            continue;
        }

        let cleaned = trim_annotation_suffix(token);
        if is_result_token(cleaned) {
            result = cleaned.to_owned();
            break;
        }
        moves.push(cleaned.to_owned());
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PgnGame {
        headers,
        moves,
        result,
    })
}

/// Plays a PGN game from the starting position. A decisive or drawn result
/// ends the returned game accordingly.
pub fn replay_pgn(pgn: &str, config: GameConfig) -> Result<ChessGame, ChessErrors> {
    let parsed = read_pgn(pgn)?;
    let mut game = ChessGame::with_config(config);
    game.start();

    for token in &parsed.moves {
        let command = find_command(&game, token)?;
        game.apply(command)?;
    }

    // A mating move may already have ended the game.
    if game.game_state() == GameState::InProgress {
        match parsed.result.as_str() {
            "1-0" => game.end_game(Some(Side::White))?,
            "0-1" => game.end_game(Some(Side::Black))?,
            "1/2-1/2" => game.end_game(None)?,
            _ => {}
        }
    }
    Ok(game)
}

/// The legal command whose notation is `token`, ignoring check marks and
/// castle spelling.
pub fn find_command(game: &ChessGame, token: &str) -> Result<CandidateMove, ChessErrors> {
    let wanted = normalize_token(token);
    game.legal_commands()
        .into_iter()
        .find(|command| {
            game.preview(*command)
                .map(|record| {
                    normalize_token(&format_move(&record, CastleNotation::Letters)) == wanted
                })
                .unwrap_or(false)
        })
        .ok_or_else(|| ChessErrors::UnknownNotation(token.to_owned()))
}

fn normalize_token(token: &str) -> String {
    trim_annotation_suffix(token).replace('0', "O")
}

fn parse_header_line(line: &str) -> Result<(String, String), ChessErrors> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(ChessErrors::InvalidPgn(format!("header line {line}")));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidPgn(format!("header key {line}")))?
        .trim();
    let value_raw = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidPgn(format!("header value {line}")))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(ChessErrors::InvalidPgn(format!("unquoted header value {line}")));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn strip_pgn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

/// Drops a leading "12." or "12..." from a token; "12.e4" style tokens keep
/// their move.
fn strip_move_number(token: &str) -> &str {
    let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return token;
    }
    let rest = &token[digits..];
    if rest.starts_with('.') {
        rest.trim_start_matches('.')
    } else {
        token
    }
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Square, Wing};

    fn sq(text: &str) -> Square {
        Square::parse(text).expect("test square should parse")
    }

    fn scholars_mate() -> ChessGame {
        let mut game = ChessGame::new();
        game.start();
        for (from, to) in [
            ("E2", "E4"),
            ("E7", "E5"),
            ("F1", "C4"),
            ("B8", "C6"),
            ("D1", "H5"),
            ("G8", "F6"),
            ("H5", "F7"),
        ] {
            game.make_move(sq(from), sq(to), None).expect("move should be legal");
        }
        game
    }

    #[test]
    fn writes_roster_and_numbered_movetext() {
        let mut game = scholars_mate();
        game.end_game(Some(Side::White)).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let headers = default_headers(date, game.game_state());
        let pgn = write_pgn_with_headers(game.move_history(), &headers);

        let expected = "[Event \"Plum Rules Game\"]\n\
                        [Site \"Local\"]\n\
                        [Date \"2024.03.09\"]\n\
                        [Round \"-\"]\n\
                        [White \"White\"]\n\
                        [Black \"Black\"]\n\
                        [Result \"1-0\"]\n\
                        \n\
                        1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7# 1-0\n";
        assert_eq!(pgn, expected);
    }

    #[test]
    fn write_pgn_overrides_defaults() {
        let game = scholars_mate();
        let mut headers = BTreeMap::new();
        headers.insert("White".to_owned(), "Alice".to_owned());
        headers.insert("Annotator".to_owned(), "Bob".to_owned());
        let pgn = write_pgn(game.move_history(), game.game_state(), &headers);

        assert!(pgn.contains("[White \"Alice\"]"));
        assert!(pgn.contains("[Result \"*\"]"));
        assert!(pgn.find("[Result").unwrap() < pgn.find("[Annotator").unwrap());
        assert!(pgn.trim_end().ends_with("4. Qxf7# *"));
    }

    #[test]
    fn reads_tokens_skipping_comments_and_variations() {
        let pgn = "[Event \"Test\"]\n\n1. e4 {best by test} e5 2.Nf3 (2. Nc3) Nc6 3... a6?! *\n";
        let parsed = read_pgn(pgn).unwrap();
        assert_eq!(parsed.headers.get("Event").map(String::as_str), Some("Test"));
        assert_eq!(parsed.moves, vec!["e4", "e5", "Nf3", "Nc6", "a6"]);
        assert_eq!(parsed.result, "*");

        assert!(matches!(
            read_pgn("[Event Test]\n1. e4 *"),
            Err(ChessErrors::InvalidPgn(_))
        ));
    }

    #[test]
    fn replay_round_trips_history() {
        let mut game = ChessGame::new();
        game.start();
        for (from, to) in [
            ("E2", "E4"),
            ("E7", "E5"),
            ("G1", "F3"),
            ("G8", "F6"),
            ("F1", "C4"),
            ("F8", "C5"),
        ] {
            game.make_move(sq(from), sq(to), None).unwrap();
        }
        game.do_castle(Side::White, Wing::Kingside).unwrap();
        game.end_game(None).unwrap();

        let pgn = write_pgn(game.move_history(), game.game_state(), &BTreeMap::new());
        let replayed = replay_pgn(&pgn, GameConfig::default()).unwrap();
        assert_eq!(replayed.move_history(), game.move_history());
        assert_eq!(replayed.board(), game.board());
        assert_eq!(replayed.game_state(), GameState::Draw);
        assert_eq!(replayed.move_history_notation().last().map(String::as_str), Some("0-0"));
    }

    #[test]
    fn replay_handles_disambiguation_and_en_passant() {
        let pgn = "1. e4 d5 2. e5 f5 3. exf6 Nc6 4. Nc3 Nb4 5. Nge2 *";
        let game = replay_pgn(pgn, GameConfig::default()).unwrap();
        assert_eq!(
            game.move_history_notation(),
            vec!["e4", "d5", "e5", "f5", "exf6", "Nc6", "Nc3", "Nb4", "Nge2"]
        );
    }

    #[test]
    fn replay_rejects_unknown_moves() {
        assert_eq!(
            replay_pgn("1. e5 *", GameConfig::default()).unwrap_err(),
            ChessErrors::UnknownNotation("e5".to_owned())
        );
    }
}
