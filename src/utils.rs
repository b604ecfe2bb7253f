//! Few tools for diagnostics and user-facing output
//!
//! Debug messages can be switched on and off at run time (`--debug` on the
//! command line) without threading a flag through every module, hence the
//! global atomic switch. User-facing messages go to stderr and, once
//! `init_log_file` has been called, to a timestamped log file as well.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

static DEBUG_FLAG: AtomicBool = AtomicBool::new(false);
static TEST_FLAG: AtomicBool = AtomicBool::new(true);

// Global log file handle (wrapped in Mutex for thread safety)
static LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// Initialize log file with timestamp, returns its name
pub fn init_log_file() -> Option<String> {
	let now = chrono::Local::now();
	let filename = format!("log_set_bot_{}.txt", now.format("%Y-%m-%d_%H-%M-%S"));

	match OpenOptions::new()
		.create(true)
		.write(true)
		.truncate(true)
		.open(&filename)
	{
		Ok(file) => {
			if let Ok(mut log_guard) = LOG_FILE.lock() {
				*log_guard = Some(file);
			}
			eprintln!("Log file created: {}", filename);
			Some(filename)
		},
		Err(e) => {
			eprintln!("Warning: Could not create log file {}: {}", filename, e);
			None
		}
	}
}

/// Write to log file if it's open
fn write_to_log(msg: &str) {
	if let Ok(mut log_guard) = LOG_FILE.lock() {
		if let Some(ref mut file) = *log_guard {
			let _ = writeln!(file, "{}", msg);
		}
	}
}

pub fn debug_print_on() {
	DEBUG_FLAG.store(true, Ordering::Relaxed);
}

pub fn debug_print(msg: &str) {
	if DEBUG_FLAG.load(Ordering::Relaxed) {
		eprintln!("debug: {}", msg);
		write_to_log(&format!("debug: {}", msg));
	}
}

pub fn test_print(msg: &str) {
	if TEST_FLAG.load(Ordering::Relaxed) {
		eprintln!("{}", msg);
	}
	// Always write to log file if it's open
	write_to_log(msg);
}

pub fn banner(msg: &str) {
	// set the banner's width
	const BANNER_WIDTH: usize = 80;
	// truncate the message if needed
	let titre = if msg.len() > BANNER_WIDTH {
		&msg[..BANNER_WIDTH]
	} else {
		msg
	};
	// compute the required spaces before and after the message
	let total_padding = BANNER_WIDTH - titre.len();
	let left_padding = total_padding / 2;
	let right_padding = total_padding - left_padding;
	let line = "=".repeat(BANNER_WIDTH);
	let banner_str = format!("\n{}\n{}{}{}\n{}\n",
		line, " ".repeat(left_padding), titre, " ".repeat(right_padding), line);
	test_print(&banner_str);
}
