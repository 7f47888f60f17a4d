//! projmgr main entrypoint.

use projmgr::run;
use projmgr::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
