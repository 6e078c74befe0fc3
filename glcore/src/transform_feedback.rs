//! Transform feedback objects.

use crate::buffer::Buffer;
use gl::types::*;

/// Primitive mode a capture pass records.
///
/// These three are the only modes `glBeginTransformFeedback` accepts; draw
/// calls issued during the pass must emit the matching primitive.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FeedbackPrimitive {
  Points,
  Lines,
  Triangles,
}

impl FeedbackPrimitive {
  pub fn to_glenum(self) -> GLenum {
    match self {
      FeedbackPrimitive::Points => gl::POINTS,
      FeedbackPrimitive::Lines => gl::LINES,
      FeedbackPrimitive::Triangles => gl::TRIANGLES,
    }
  }
}

/// A capture-stream object.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TransformFeedback(GLuint);

impl TransformFeedback {
  /// Wrap a raw handle. `0` stands for the default object.
  pub fn from_raw(handle: GLuint) -> Self {
    TransformFeedback(handle)
  }

  /// The raw handle.
  pub fn handle(self) -> GLuint {
    self.0
  }

  /// Whether this is the zero handle, i.e. the default object.
  pub fn is_default(self) -> bool {
    self.0 == 0
  }

  /// Bind this object. Wraps `glBindTransformFeedback`.
  pub fn bind(self) {
    unsafe { gl::BindTransformFeedback(gl::TRANSFORM_FEEDBACK, self.0) };
  }

  /// Rebind the default object. Wraps `glBindTransformFeedback(.., 0)`.
  pub fn unbind() {
    unsafe { gl::BindTransformFeedback(gl::TRANSFORM_FEEDBACK, 0) };
  }

  /// Release the object. The handle must not be used afterwards. Wraps
  /// `glDeleteTransformFeedbacks(1, ..)`.
  pub fn delete(self) {
    unsafe { gl::DeleteTransformFeedbacks(1, &self.0) };
  }

  /// Start capturing on the bound object. Wraps
  /// `glBeginTransformFeedback`.
  pub fn begin(primitive: FeedbackPrimitive) {
    unsafe { gl::BeginTransformFeedback(primitive.to_glenum()) };
  }

  /// Stop capturing. Wraps `glEndTransformFeedback`.
  pub fn end() {
    unsafe { gl::EndTransformFeedback() };
  }

  /// Pause capturing on the bound object. Wraps
  /// `glPauseTransformFeedback`.
  pub fn pause() {
    unsafe { gl::PauseTransformFeedback() };
  }

  /// Resume a paused capture. Wraps `glResumeTransformFeedback`.
  pub fn resume() {
    unsafe { gl::ResumeTransformFeedback() };
  }

  /// Route capture stream `index` into a buffer. Wraps `glBindBufferBase`
  /// with the `GL_TRANSFORM_FEEDBACK_BUFFER` target.
  pub fn bind_buffer_base(index: GLuint, buffer: Buffer) {
    unsafe { gl::BindBufferBase(gl::TRANSFORM_FEEDBACK_BUFFER, index, buffer.handle()) };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn feedback_primitives_map_to_their_native_constant() {
    assert_eq!(FeedbackPrimitive::Points.to_glenum(), gl::POINTS);
    assert_eq!(FeedbackPrimitive::Lines.to_glenum(), gl::LINES);
    assert_eq!(FeedbackPrimitive::Triangles.to_glenum(), gl::TRIANGLES);
  }

  #[test]
  fn the_zero_handle_is_the_default_object() {
    assert!(TransformFeedback::from_raw(0).is_default());
    assert!(!TransformFeedback::from_raw(6).is_default());
  }
}
