//! Post-call error reporting.
//!
//! When a context is created with error checking on, every call that goes
//! through it queries the driver error state afterwards. A non-zero state is
//! reported through the `log` facade at error level: one resolved caller
//! frame per line, outermost first, followed by the error label. Reporting
//! never aborts, retries or alters the call's own effects.

use crate::error::GlError;
use backtrace::Backtrace;
use log::error;

pub(crate) fn report(err: GlError) {
  for frame in caller_frames() {
    error!("{}", frame);
  }

  error!("{}", err);
}

/// Capture the current stack, starting at the frame that issued the checked
/// call.
///
/// Frames belonging to the capture machinery (the backtrace crate, this
/// module, the context's check method) are skipped, as are runtime frames
/// below the program entry point. Frames are returned outermost first.
fn caller_frames() -> Vec<String> {
  let bt = Backtrace::new();
  let mut lines = Vec::new();
  let mut in_capture = true;

  for frame in bt.frames() {
    for symbol in frame.symbols() {
      let name = symbol
        .name()
        .map(|n| n.to_string())
        .unwrap_or_default();

      if in_capture {
        if is_capture_frame(&name) {
          continue;
        }

        in_capture = false;
      }

      if is_runtime_frame(&name) {
        continue;
      }

      match (symbol.filename(), symbol.lineno()) {
        (Some(file), Some(line)) => lines.push(format!("{}:{}", file.display(), line)),
        _ if !name.is_empty() => lines.push(name),
        _ => (),
      }
    }
  }

  lines.reverse();
  lines
}

fn is_capture_frame(name: &str) -> bool {
  name.contains("backtrace::")
    || name.contains("glcore::debug")
    || name.contains("Context::check")
}

// The bare `main` is the C entry shim calling into std::rt; a program's own
// entry point mangles to `crate_name::main` and must stay in the report.
fn is_runtime_frame(name: &str) -> bool {
  name.starts_with("std::rt")
    || name.starts_with("std::sys")
    || name.starts_with("core::ops::function")
    || name.starts_with("std::panicking")
    || name.starts_with("__")
    || name == "_start"
    || name == "main"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn capture_frames_are_filtered_out() {
    let frames = caller_frames();

    for frame in &frames {
      assert!(!frame.contains("glcore::debug::caller_frames"));
      assert!(!frame.contains("backtrace::"));
    }
  }

  #[test]
  fn the_programs_own_entry_frame_is_kept() {
    assert!(is_runtime_frame("main"));
    assert!(is_runtime_frame("_start"));
    assert!(is_runtime_frame("std::rt::lang_start"));
    assert!(is_runtime_frame("__libc_start_main"));

    assert!(!is_runtime_frame("viewer::main"));
    assert!(!is_runtime_frame("main_loop::tick"));
  }

  #[test]
  fn report_is_silent_without_a_logger() {
    // No logger installed here; the call must still be harmless.
    report(GlError::InvalidOperation);
  }
}
