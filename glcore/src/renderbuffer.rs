//! Renderbuffer objects.

use gl::types::*;

/// Backing store attachable to a framebuffer.
///
/// `GL_RENDERBUFFER` is the only legal target on 3.3, so it is filled in
/// everywhere instead of being a parameter.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Renderbuffer(GLuint);

impl Renderbuffer {
  /// Wrap a raw handle. `0` stands for "no renderbuffer".
  pub fn from_raw(handle: GLuint) -> Self {
    Renderbuffer(handle)
  }

  /// The raw handle.
  pub fn handle(self) -> GLuint {
    self.0
  }

  /// Whether this is the zero "no renderbuffer" handle.
  pub fn is_none(self) -> bool {
    self.0 == 0
  }

  /// Bind this renderbuffer. Wraps `glBindRenderbuffer`.
  pub fn bind(self) {
    unsafe { gl::BindRenderbuffer(gl::RENDERBUFFER, self.0) };
  }

  /// Bind the zero handle. Wraps `glBindRenderbuffer(.., 0)`.
  pub fn unbind() {
    unsafe { gl::BindRenderbuffer(gl::RENDERBUFFER, 0) };
  }

  /// Allocate the store of the bound renderbuffer; `internal_format` is a
  /// raw sized format constant such as `GL_DEPTH24_STENCIL8`. Wraps
  /// `glRenderbufferStorage`.
  pub fn storage(internal_format: GLenum, width: GLsizei, height: GLsizei) {
    unsafe { gl::RenderbufferStorage(gl::RENDERBUFFER, internal_format, width, height) };
  }

  /// Release the renderbuffer. The handle must not be used afterwards.
  /// Wraps `glDeleteRenderbuffers(1, ..)`.
  pub fn delete(self) {
    unsafe { gl::DeleteRenderbuffers(1, &self.0) };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn the_zero_handle_means_no_renderbuffer() {
    assert!(Renderbuffer::from_raw(0).is_none());
    assert!(!Renderbuffer::from_raw(9).is_none());
  }
}
