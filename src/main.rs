//! weeklog main entrypoint.

use weeklog::run;
use weeklog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
