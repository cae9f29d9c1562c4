//! Status lines for the CLI.
//! CLI 的状态输出。
//!
//! Everything except the final success line is written to stderr, so `tokens` and
//! `parse` output can be piped.
//! 除最终的成功消息外，所有内容都写入 stderr，以便管道传输 `tokens` 和 `parse` 的输出。

const GREEN: &str = "32";
const YELLOW: &str = "33";
const RED: &str = "31";
const BLUE: &str = "34";

fn paint(color: &str, text: &str) -> String {
    format!("\x1b[{color}m{text}\x1b[0m")
}

/// Print a success message in green on stdout.
/// 在 stdout 上以绿色打印成功消息。
pub fn success(msg: &str) {
    println!("{}", paint(GREEN, msg));
}

pub fn warning(msg: &str) {
    eprintln!("{} {msg}", paint(YELLOW, "warning:"));
}

pub fn error(msg: &str) {
    eprintln!("{} {msg}", paint(RED, "error:"));
}

pub fn info(msg: &str) {
    eprintln!("{} {msg}", paint(BLUE, "info:"));
}
