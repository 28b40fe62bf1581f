//! trailmark main entrypoint.

use trailmark::run;
use trailmark::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
