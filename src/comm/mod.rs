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

//! UCI protocol parsing and output formatting. A full multi-threaded
//! engine would run this on its own thread and hand `CommReport`s across a
//! channel to the engine loop; this engine runs one search at a time on
//! the calling thread, so `uci::parse_line` is called directly from
//! `Engine::run` instead.

pub mod uci;
