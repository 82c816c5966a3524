use std::{fs, path::Path};

use color_eyre::eyre::{WrapErr, eyre};
use rubik_core::{FaceId, Move, MoveKind};
use serde::{Deserialize, Serialize};

/// Everything needed to set up a run, read from a TOML file.
///
/// ```toml
/// size = 3
/// color = true
///
/// [[moves]]
/// kind = "row-right"
/// face = "top"
/// index = 0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    pub size: usize,
    pub color: bool,
    pub moves: Vec<Move>,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 3,
            color: true,
            moves: Vec::new(),
        }
    }
}

impl CubeConfig {
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {path:?}"))?;
        toml::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {path:?}"))
    }
}

/// Parse a move given on the command line as `KIND:FACE:INDEX`.
pub fn parse_move(s: &str) -> color_eyre::Result<Move> {
    let parts = s.split(':').collect::<Vec<_>>();
    let [kind, face, index] = parts[..] else {
        return Err(eyre!("Expected KIND:FACE:INDEX, got `{s}`"));
    };

    let kind = MoveKind::ALL
        .into_iter()
        .find(|k| k.name().eq_ignore_ascii_case(kind.trim()))
        .ok_or_else(|| {
            eyre!(
                "Unknown move kind `{kind}`, expected one of {}",
                MoveKind::ALL.map(MoveKind::name).join(", ")
            )
        })?;
    let face = face.parse::<FaceId>()?;
    let index = index
        .trim()
        .parse()
        .wrap_err_with(|| format!("Invalid index `{index}`"))?;

    Ok(Move::new(kind, face, index))
}
