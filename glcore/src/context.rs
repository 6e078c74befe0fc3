//! Context ownership and handle creation.
//!
//! A [`Context`] stands for the OpenGL context the current thread owns. It
//! does not create that context — a windowing layer must have made one
//! current before anything here is valid — it only represents the right to
//! call into it, and owns the error-check flag consulted after every call
//! that goes through it.

use crate::buffer::Buffer;
use crate::debug;
use crate::error::{self, GlError};
use crate::framebuffer::Framebuffer;
use crate::program::Program;
use crate::renderbuffer::Renderbuffer;
use crate::shader::{Shader, ShaderKind};
use crate::texture::{Texture, Texture2D};
use crate::transform_feedback::TransformFeedback;
use crate::vertex_array::VertexArray;
use gl::types::*;
use std::cell::Cell;
use std::error as std_error;
use std::fmt;
use std::marker::PhantomData;

// One context handle per thread; the driver context itself is thread-owned.
thread_local!(static CONTEXT_ACQUIRED: Cell<bool> = Cell::new(false));

/// The thread's OpenGL context.
///
/// At most one lives per thread at a time; [`Context::new`] fails with
/// [`ContextError::AlreadyAcquired`] otherwise, and dropping the context
/// releases the slot. The type is neither `Send` nor `Sync`.
#[derive(Debug)]
pub struct Context {
  check_errors: bool,
  _marker: PhantomData<*const ()>, // !Send and !Sync
}

impl Context {
  /// Acquire the context for the current thread.
  ///
  /// `check_errors` enables the post-call error check: every call that goes
  /// through the context then queries the driver error state afterwards and
  /// reports a caller stack plus error label through the `log` facade. The
  /// check is purely observational and changes nothing about the calls
  /// themselves.
  pub fn new(check_errors: bool) -> Result<Self, ContextError> {
    CONTEXT_ACQUIRED.with(|acquired| {
      if acquired.get() {
        Err(ContextError::AlreadyAcquired)
      } else {
        acquired.set(true);

        Ok(Context {
          check_errors,
          _marker: PhantomData,
        })
      }
    })
  }

  /// Whether the post-call error check is enabled.
  pub fn check_errors(&self) -> bool {
    self.check_errors
  }

  /// Toggle the post-call error check.
  pub fn set_check_errors(&mut self, check_errors: bool) {
    self.check_errors = check_errors;
  }

  /// Query the error state right now, regardless of the check flag.
  ///
  /// Querying resets the driver's error flag.
  pub fn check_now(&self) -> Option<GlError> {
    error::get_error()
  }

  /// Post-call check; a no-op unless the context enables it.
  pub(crate) fn check(&self) {
    if self.check_errors {
      if let Some(err) = error::get_error() {
        debug::report(err);
      }
    }
  }

  /// Allocate one buffer object. Wraps `glGenBuffers(1, ..)`.
  pub fn create_buffer(&self) -> Buffer {
    let mut handle: GLuint = 0;
    unsafe { gl::GenBuffers(1, &mut handle) };
    self.check();

    Buffer::from_raw(handle)
  }

  /// Allocate `n` buffer objects at once. Wraps `glGenBuffers(n, ..)`.
  pub fn create_buffers(&self, n: usize) -> Vec<Buffer> {
    let mut handles: Vec<GLuint> = vec![0; n];

    if n > 0 {
      unsafe { gl::GenBuffers(n as GLsizei, handles.as_mut_ptr()) };
      self.check();
    }

    handles.into_iter().map(Buffer::from_raw).collect()
  }

  /// Allocate one texture object with no fixed target. Wraps
  /// `glGenTextures(1, ..)`.
  pub fn create_texture(&self) -> Texture {
    let mut handle: GLuint = 0;
    unsafe { gl::GenTextures(1, &mut handle) };
    self.check();

    Texture::from_raw(handle)
  }

  /// Allocate `n` texture objects at once. Wraps `glGenTextures(n, ..)`.
  pub fn create_textures(&self, n: usize) -> Vec<Texture> {
    let mut handles: Vec<GLuint> = vec![0; n];

    if n > 0 {
      unsafe { gl::GenTextures(n as GLsizei, handles.as_mut_ptr()) };
      self.check();
    }

    handles.into_iter().map(Texture::from_raw).collect()
  }

  /// Allocate one texture object to be used through the `GL_TEXTURE_2D`
  /// target. Wraps `glGenTextures(1, ..)`.
  pub fn create_texture_2d(&self) -> Texture2D {
    let mut handle: GLuint = 0;
    unsafe { gl::GenTextures(1, &mut handle) };
    self.check();

    Texture2D::from_raw(handle)
  }

  /// Allocate `n` 2D texture objects at once.
  pub fn create_textures_2d(&self, n: usize) -> Vec<Texture2D> {
    let mut handles: Vec<GLuint> = vec![0; n];

    if n > 0 {
      unsafe { gl::GenTextures(n as GLsizei, handles.as_mut_ptr()) };
      self.check();
    }

    handles.into_iter().map(Texture2D::from_raw).collect()
  }

  /// Allocate one framebuffer object. Wraps `glGenFramebuffers(1, ..)`.
  pub fn create_framebuffer(&self) -> Framebuffer {
    let mut handle: GLuint = 0;
    unsafe { gl::GenFramebuffers(1, &mut handle) };
    self.check();

    Framebuffer::from_raw(handle)
  }

  /// Allocate `n` framebuffer objects at once.
  pub fn create_framebuffers(&self, n: usize) -> Vec<Framebuffer> {
    let mut handles: Vec<GLuint> = vec![0; n];

    if n > 0 {
      unsafe { gl::GenFramebuffers(n as GLsizei, handles.as_mut_ptr()) };
      self.check();
    }

    handles.into_iter().map(Framebuffer::from_raw).collect()
  }

  /// Allocate one renderbuffer object. Wraps `glGenRenderbuffers(1, ..)`.
  pub fn create_renderbuffer(&self) -> Renderbuffer {
    let mut handle: GLuint = 0;
    unsafe { gl::GenRenderbuffers(1, &mut handle) };
    self.check();

    Renderbuffer::from_raw(handle)
  }

  /// Allocate `n` renderbuffer objects at once.
  pub fn create_renderbuffers(&self, n: usize) -> Vec<Renderbuffer> {
    let mut handles: Vec<GLuint> = vec![0; n];

    if n > 0 {
      unsafe { gl::GenRenderbuffers(n as GLsizei, handles.as_mut_ptr()) };
      self.check();
    }

    handles.into_iter().map(Renderbuffer::from_raw).collect()
  }

  /// Allocate one vertex array object. Wraps `glGenVertexArrays(1, ..)`.
  pub fn create_vertex_array(&self) -> VertexArray {
    let mut handle: GLuint = 0;
    unsafe { gl::GenVertexArrays(1, &mut handle) };
    self.check();

    VertexArray::from_raw(handle)
  }

  /// Allocate `n` vertex array objects at once.
  pub fn create_vertex_arrays(&self, n: usize) -> Vec<VertexArray> {
    let mut handles: Vec<GLuint> = vec![0; n];

    if n > 0 {
      unsafe { gl::GenVertexArrays(n as GLsizei, handles.as_mut_ptr()) };
      self.check();
    }

    handles.into_iter().map(VertexArray::from_raw).collect()
  }

  /// Allocate one transform feedback object. Wraps
  /// `glGenTransformFeedbacks(1, ..)`.
  pub fn create_transform_feedback(&self) -> TransformFeedback {
    let mut handle: GLuint = 0;
    unsafe { gl::GenTransformFeedbacks(1, &mut handle) };
    self.check();

    TransformFeedback::from_raw(handle)
  }

  /// Allocate `n` transform feedback objects at once.
  pub fn create_transform_feedbacks(&self, n: usize) -> Vec<TransformFeedback> {
    let mut handles: Vec<GLuint> = vec![0; n];

    if n > 0 {
      unsafe { gl::GenTransformFeedbacks(n as GLsizei, handles.as_mut_ptr()) };
      self.check();
    }

    handles.into_iter().map(TransformFeedback::from_raw).collect()
  }

  /// Create a shader object of the given kind. Wraps `glCreateShader`.
  pub fn create_shader(&self, kind: ShaderKind) -> Shader {
    let handle = unsafe { gl::CreateShader(kind.to_glenum()) };
    self.check();

    Shader::from_raw(handle)
  }

  /// Create a program object. Wraps `glCreateProgram`.
  pub fn create_program(&self) -> Program {
    let handle = unsafe { gl::CreateProgram() };
    self.check();

    Program::from_raw(handle)
  }
}

impl Drop for Context {
  fn drop(&mut self) {
    CONTEXT_ACQUIRED.with(|acquired| acquired.set(false));
  }
}

/// An error that might happen when acquiring the context.
#[non_exhaustive]
#[derive(Debug)]
pub enum ContextError {
  /// The current thread already holds a [`Context`].
  AlreadyAcquired,
}

impl fmt::Display for ContextError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ContextError::AlreadyAcquired => f.write_str("context already acquired on this thread"),
    }
  }
}

impl std_error::Error for ContextError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn a_thread_holds_at_most_one_context() {
    let ctx = Context::new(false).unwrap();
    assert!(matches!(
      Context::new(false),
      Err(ContextError::AlreadyAcquired)
    ));

    drop(ctx);
    assert!(Context::new(true).is_ok());
  }

  #[test]
  fn contexts_are_independent_across_threads() {
    let _ctx = Context::new(false).unwrap();

    std::thread::spawn(|| {
      assert!(Context::new(false).is_ok());
    })
    .join()
    .unwrap();
  }

  #[test]
  fn the_check_flag_is_context_owned() {
    let mut ctx = Context::new(false).unwrap();
    assert!(!ctx.check_errors());

    ctx.set_check_errors(true);
    assert!(ctx.check_errors());
  }
}
