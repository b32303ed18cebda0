/* src/cli/core/src/ui.rs */

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Build result line: top-level (`depth` 0) or nested under a step (`depth` 1).
fn mark(depth: usize, glyph: char, msg: &str) {
  let indent = 2 + depth * 6;
  println!("{:indent$}{GREEN}{glyph}{RESET} {msg}", "");
}

pub fn ok(msg: &str) {
  mark(0, '\u{2713}', msg);
}

pub fn detail_ok(msg: &str) {
  mark(1, '\u{2713}', msg);
}

pub fn arrow(msg: &str) {
  mark(1, '\u{2192}', msg);
}

pub fn step(n: u32, total: u32, msg: &str) {
  println!("  {BOLD}[{n}/{total}]{RESET} {msg}...");
}

pub fn banner(cmd: &str) {
  println!("\n  {BOLD}sweetspot {cmd}{RESET} {DIM}v{}{RESET}\n", env!("CARGO_PKG_VERSION"));
}

pub fn label(name: &str, value: &str) {
  println!("  {CYAN}{name:<10}{RESET} {value}");
}

pub fn blank() {
  println!();
}

/// Rendered page size, decimal units.
pub fn format_size(bytes: u64) -> String {
  match bytes {
    0..1_000 => format!("{bytes} B"),
    1_000..1_000_000 => format!("{:.1} kB", bytes as f64 / 1e3),
    _ => format!("{:.1} MB", bytes as f64 / 1e6),
  }
}
