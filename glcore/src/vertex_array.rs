//! Vertex array objects.

use gl::types::*;
use std::os::raw::c_void;

/// Binding configuration of buffer layouts.
///
/// Attribute calls configure the vertex array currently bound, reading
/// offsets relative to the buffer bound to `GL_ARRAY_BUFFER` at call time;
/// bind both first.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VertexArray(GLuint);

impl VertexArray {
  /// Wrap a raw handle. `0` stands for "no vertex array".
  pub fn from_raw(handle: GLuint) -> Self {
    VertexArray(handle)
  }

  /// The raw handle.
  pub fn handle(self) -> GLuint {
    self.0
  }

  /// Whether this is the zero "no vertex array" handle.
  pub fn is_none(self) -> bool {
    self.0 == 0
  }

  /// Bind this vertex array. Wraps `glBindVertexArray`.
  pub fn bind(self) {
    unsafe { gl::BindVertexArray(self.0) };
  }

  /// Bind the zero handle. Wraps `glBindVertexArray(0)`.
  pub fn unbind() {
    unsafe { gl::BindVertexArray(0) };
  }

  /// Release the vertex array. The handle must not be used afterwards.
  /// Wraps `glDeleteVertexArrays(1, ..)`.
  pub fn delete(self) {
    unsafe { gl::DeleteVertexArrays(1, &self.0) };
  }

  /// Enable an attribute index on the bound vertex array. Wraps
  /// `glEnableVertexAttribArray`.
  pub fn enable_attrib(index: GLuint) {
    unsafe { gl::EnableVertexAttribArray(index) };
  }

  /// Disable an attribute index on the bound vertex array. Wraps
  /// `glDisableVertexAttribArray`.
  pub fn disable_attrib(index: GLuint) {
    unsafe { gl::DisableVertexAttribArray(index) };
  }

  /// Describe a floating-point attribute of the bound vertex array; `ty` is
  /// a raw component type constant such as `GL_FLOAT`. Wraps
  /// `glVertexAttribPointer`.
  ///
  /// # Safety
  ///
  /// `pointer` is a byte offset into the buffer bound to `GL_ARRAY_BUFFER`;
  /// the described layout must stay within that buffer's store.
  pub unsafe fn attrib_pointer(
    index: GLuint,
    size: GLint,
    ty: GLenum,
    normalized: bool,
    stride: GLsizei,
    pointer: *const c_void,
  ) {
    gl::VertexAttribPointer(index, size, ty, normalized as GLboolean, stride, pointer);
  }

  /// Describe an integer attribute (no conversion to float). Wraps
  /// `glVertexAttribIPointer`.
  ///
  /// # Safety
  ///
  /// Same contract as [`VertexArray::attrib_pointer`].
  pub unsafe fn attrib_i_pointer(
    index: GLuint,
    size: GLint,
    ty: GLenum,
    stride: GLsizei,
    pointer: *const c_void,
  ) {
    gl::VertexAttribIPointer(index, size, ty, stride, pointer);
  }

  /// Describe a double-precision attribute. Wraps `glVertexAttribLPointer`.
  ///
  /// # Safety
  ///
  /// Same contract as [`VertexArray::attrib_pointer`].
  pub unsafe fn attrib_l_pointer(
    index: GLuint,
    size: GLint,
    ty: GLenum,
    stride: GLsizei,
    pointer: *const c_void,
  ) {
    gl::VertexAttribLPointer(index, size, ty, stride, pointer);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn the_zero_handle_means_no_vertex_array() {
    assert!(VertexArray::from_raw(0).is_none());
    assert!(!VertexArray::from_raw(5).is_none());
  }
}
