//! rShiftHours main entrypoint.

use rshifthours::run;
use rshifthours::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
