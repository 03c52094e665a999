//! Teams command implementation

use crate::cli::types::DEFAULT_TEAMS;

/// Handle the teams command
pub fn handle_teams() {
    for code in DEFAULT_TEAMS {
        println!("{}", code);
    }
}
