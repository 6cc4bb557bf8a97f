/* =======================================================================
Scarab is a chess playing engine.

Scarab is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License version 3 as published by
the Free Software Foundation.

Scarab is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License
for more details.

You should have received a copy of the GNU General Public License along
with this program.  If not, see <http://www.gnu.org/licenses/>.
======================================================================= */

//! Engine-level configuration and the small set of fatal/normal error
//! messages used at `.expect()` sites. This engine runs a single
//! synchronous search on the calling thread, so there is no
//! worker-thread/channel plumbing here -- only what a synchronous `Engine`
//! loop needs.

/// Messages for `.expect()` calls on conditions that indicate a bug rather
/// than bad input; the caller has already validated user-facing input by
/// the time these run.
pub struct ErrFatal;
impl ErrFatal {
    pub const READ_IO: &'static str = "Reading from stdin failed.";
}

/// Messages surfaced to the user (over UCI `info string`) rather than
/// panicked on.
pub struct ErrNormal;
impl ErrNormal {
    pub const NOT_LEGAL: &'static str = "not a legal move in this position";
    pub const FEN_FAILED: &'static str = "FEN string could not be parsed";
    pub const INVALID_OPTION_VALUE: &'static str = "not a valid value for this option";
}

/// The options this engine advertises to `uci`. Values are deliberately
/// conservative: no SMP, no NNUE weight file, nothing that implies a
/// feature this crate does not implement.
pub struct EngineOptionDefaults;
impl EngineOptionDefaults {
    pub const HASH_MIN: usize = 1;
    pub const HASH_MAX: usize = 4096;
    pub const HASH_DEFAULT: usize = 64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOptionName {
    Hash,
    ClearHash,
}

pub struct EngineOption {
    pub name: &'static str,
    pub ui_element: UiElement,
    pub default: String,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiElement {
    Spin,
    Button,
}

pub fn engine_options() -> Vec<EngineOption> {
    vec![
        EngineOption {
            name: "Hash",
            ui_element: UiElement::Spin,
            default: EngineOptionDefaults::HASH_DEFAULT.to_string(),
            min: Some(EngineOptionDefaults::HASH_MIN),
            max: Some(EngineOptionDefaults::HASH_MAX),
        },
        EngineOption {
            name: "Clear Hash",
            ui_element: UiElement::Button,
            default: String::new(),
            min: None,
            max: None,
        },
    ]
}

/// Mutable engine-wide settings, read by the search and written by UCI
/// `setoption`/CLI flags. A single struct rather than loose fields so
/// `Engine` can hand out one lock-free snapshot per search.
#[derive(Clone)]
pub struct Settings {
    pub hash_mb: usize,
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hash_mb: EngineOptionDefaults::HASH_DEFAULT,
            quiet: false,
        }
    }
}

/// A structured report coming up from the UCI command parser to the
/// engine's main loop. This is the single-threaded analogue of the
/// channel-based `CommReport` a multi-threaded engine would use: here it's
/// just the return value of parsing one line of standard input.
#[derive(Debug, Clone)]
pub enum CommReport {
    Uci,
    IsReady,
    UciNewGame,
    Position(String),
    Go(GoParameters),
    Stop,
    Quit,
    SetOption(EngineOptionName, String),
    Unknown(String),
}

#[derive(Debug, Clone, Default)]
pub struct GoParameters {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
    pub wtime_ms: Option<u64>,
    pub btime_ms: Option<u64>,
    pub winc_ms: Option<u64>,
    pub binc_ms: Option<u64>,
    pub movestogo: Option<u32>,
    pub infinite: bool,
}

/// What the engine's main loop decided to do in response to a
/// [`CommReport`]; used only for tests and for the `--quiet` CLI flag to
/// suppress normal UCI chatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommControl {
    Continue,
    Quit,
}
