//! Session UI components.

use crate::highlight;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Q&A Mode",
        Style::header("qna"),
        Style::version(format!("v{VERSION}"))
    );
    println!("Press Ctrl+C to stop the session.");
    println!();
}

/// One rendered answer block: the highlighted answer behind the `A:` label.
pub fn answer_block(text: &str) -> String {
    format!("{} {}", Style::answer("A:"), highlight::render(text))
}

pub fn print_shutdown() {
    println!();
    println!("{}", Style::error("Stopping session"));
    println!("Session stopped");
}
