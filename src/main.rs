//! SiteControl main entrypoint.

use sitecontrol::run;
use sitecontrol::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
