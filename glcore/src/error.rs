//! OpenGL error taxonomy.

use gl::types::*;
use std::{error, fmt};

/// An error reported by the driver.
///
/// Mirrors the eight error codes an OpenGL 3.3 context can leave in its error
/// state. A code outside the taxonomy classifies as [`GlError::Unknown`] with
/// the raw value kept around for reporting.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GlError {
  /// An enumeration argument is not a legal value for the call.
  InvalidEnum,
  /// A numeric argument is out of range.
  InvalidValue,
  /// The call is not allowed in the current state.
  InvalidOperation,
  /// The framebuffer object is not complete.
  InvalidFramebufferOperation,
  /// The driver could not allocate enough memory. The state of the context
  /// is undefined after this one.
  OutOfMemory,
  /// An operation would underflow an internal stack.
  StackUnderflow,
  /// An operation would overflow an internal stack.
  StackOverflow,
  /// A code outside the OpenGL 3.3 taxonomy.
  Unknown(GLenum),
}

impl GlError {
  /// Classify a raw error code.
  ///
  /// `GL_NO_ERROR` yields `None`; every other code yields a variant, falling
  /// back to [`GlError::Unknown`] for unrecognized values.
  pub fn from_raw(raw: GLenum) -> Option<Self> {
    match raw {
      gl::NO_ERROR => None,
      gl::INVALID_ENUM => Some(GlError::InvalidEnum),
      gl::INVALID_VALUE => Some(GlError::InvalidValue),
      gl::INVALID_OPERATION => Some(GlError::InvalidOperation),
      gl::INVALID_FRAMEBUFFER_OPERATION => Some(GlError::InvalidFramebufferOperation),
      gl::OUT_OF_MEMORY => Some(GlError::OutOfMemory),
      gl::STACK_UNDERFLOW => Some(GlError::StackUnderflow),
      gl::STACK_OVERFLOW => Some(GlError::StackOverflow),
      _ => Some(GlError::Unknown(raw)),
    }
  }
}

impl fmt::Display for GlError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      GlError::InvalidEnum => f.write_str("GL_INVALID_ENUM"),
      GlError::InvalidValue => f.write_str("GL_INVALID_VALUE"),
      GlError::InvalidOperation => f.write_str("GL_INVALID_OPERATION"),
      GlError::InvalidFramebufferOperation => f.write_str("GL_INVALID_FRAMEBUFFER_OPERATION"),
      GlError::OutOfMemory => f.write_str("GL_OUT_OF_MEMORY"),
      GlError::StackUnderflow => f.write_str("GL_STACK_UNDERFLOW"),
      GlError::StackOverflow => f.write_str("GL_STACK_OVERFLOW"),
      GlError::Unknown(raw) => write!(f, "unknown error code {}", raw),
    }
  }
}

impl error::Error for GlError {}

/// Query the driver's error state.
///
/// Returns the classified error, or `None` when the state is `GL_NO_ERROR`.
/// Querying resets the driver's error flag, so two back-to-back calls never
/// report the same error twice. Always available, regardless of the
/// context's error-check flag.
pub fn get_error() -> Option<GlError> {
  GlError::from_raw(unsafe { gl::GetError() })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_error_classifies_to_none() {
    assert_eq!(GlError::from_raw(gl::NO_ERROR), None);
  }

  #[test]
  fn taxonomy_codes_classify_to_their_variant() {
    assert_eq!(
      GlError::from_raw(gl::INVALID_ENUM),
      Some(GlError::InvalidEnum)
    );
    assert_eq!(
      GlError::from_raw(gl::INVALID_VALUE),
      Some(GlError::InvalidValue)
    );
    assert_eq!(
      GlError::from_raw(gl::INVALID_OPERATION),
      Some(GlError::InvalidOperation)
    );
    assert_eq!(
      GlError::from_raw(gl::INVALID_FRAMEBUFFER_OPERATION),
      Some(GlError::InvalidFramebufferOperation)
    );
    assert_eq!(
      GlError::from_raw(gl::OUT_OF_MEMORY),
      Some(GlError::OutOfMemory)
    );
    assert_eq!(
      GlError::from_raw(gl::STACK_UNDERFLOW),
      Some(GlError::StackUnderflow)
    );
    assert_eq!(
      GlError::from_raw(gl::STACK_OVERFLOW),
      Some(GlError::StackOverflow)
    );
  }

  #[test]
  fn unrecognized_codes_classify_to_unknown() {
    assert_eq!(GlError::from_raw(0xdead), Some(GlError::Unknown(0xdead)));
    assert_eq!(GlError::from_raw(1), Some(GlError::Unknown(1)));
  }

  #[test]
  fn display_uses_the_native_labels() {
    assert_eq!(GlError::InvalidEnum.to_string(), "GL_INVALID_ENUM");
    assert_eq!(GlError::InvalidValue.to_string(), "GL_INVALID_VALUE");
    assert_eq!(GlError::InvalidOperation.to_string(), "GL_INVALID_OPERATION");
    assert_eq!(
      GlError::InvalidFramebufferOperation.to_string(),
      "GL_INVALID_FRAMEBUFFER_OPERATION"
    );
    assert_eq!(GlError::OutOfMemory.to_string(), "GL_OUT_OF_MEMORY");
    assert_eq!(GlError::StackUnderflow.to_string(), "GL_STACK_UNDERFLOW");
    assert_eq!(GlError::StackOverflow.to_string(), "GL_STACK_OVERFLOW");
    assert_eq!(GlError::Unknown(42).to_string(), "unknown error code 42");
  }
}
