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

use crate::defs::About;

const LOGO: &str = r#"
   _____                     _
  / ____|                   | |
 | (___   ___ __ _ _ __ __ _| |__
  \___ \ / __/ _` | '__/ _` | '_ \
  ____) | (_| (_| | | | (_| | |_) |
 |_____/ \___\__,_|_|  \__,_|_.__/
"#;

pub fn print_about(settings: &crate::engine::defs::Settings) {
    println!("{LOGO}");
    println!("{} {}", About::ENGINE, About::VERSION);
    println!("Author: {}", About::AUTHOR);
    println!("Hash: {} MB", settings.hash_mb);
    println!();
}
