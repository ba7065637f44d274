//! Game configuration.

pub const CASTLE_NOTATION_ENV: &str = "PLUM_RULES_CASTLE_NOTATION";
pub const AUTO_END_ON_CHECKMATE_ENV: &str = "PLUM_RULES_AUTO_END_ON_CHECKMATE";

/// How castles are written in move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CastleNotation {
    /// "0-0" / "0-0-0".
    #[default]
    Zeros,
    /// "O-O" / "O-O-O".
    Letters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub castle_notation: CastleNotation,
    /// When set, a mating move also ends the game in the mover's favour.
    /// Off by default: checkmate then only shows up as "#" in notation and
    /// the caller ends the game explicitly.
    pub auto_end_on_checkmate: bool,
}

impl GameConfig {
    /// Defaults overlaid with `PLUM_RULES_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each known key.
    /// Unrecognized values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match lookup(CASTLE_NOTATION_ENV) {
            Some(value) if value.eq_ignore_ascii_case("letters") => {
                config.castle_notation = CastleNotation::Letters;
            }
            Some(value) if value.eq_ignore_ascii_case("zeros") => {
                config.castle_notation = CastleNotation::Zeros;
            }
            _ => {}
        }

        if let Some(value) = lookup(AUTO_END_ON_CHECKMATE_ENV) {
            let value = value.trim();
            if value == "1" || value.eq_ignore_ascii_case("true") {
                config.auto_end_on_checkmate = true;
            } else if value == "0" || value.eq_ignore_ascii_case("false") {
                config.auto_end_on_checkmate = false;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let config = GameConfig::from_lookup(|_| None);
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.castle_notation, CastleNotation::Zeros);
        assert!(!config.auto_end_on_checkmate);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = GameConfig::from_lookup(|key| match key {
            CASTLE_NOTATION_ENV => Some("LETTERS".to_owned()),
            AUTO_END_ON_CHECKMATE_ENV => Some("1".to_owned()),
            _ => None,
        });
        assert_eq!(config.castle_notation, CastleNotation::Letters);
        assert!(config.auto_end_on_checkmate);
    }

    #[test]
    fn unknown_values_fall_back() {
        let config = GameConfig::from_lookup(|_| Some("sideways".to_owned()));
        assert_eq!(config, GameConfig::default());
    }
}
