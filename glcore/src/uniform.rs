//! Uniform locations.

use gl::types::*;

/// Index of a uniform inside a program's uniform table.
///
/// Obtained through [`Program::uniform_location`][crate::Program::uniform_location];
/// `-1` denotes an inactive name, and setting through it is silently
/// ignored by the driver. The location goes stale when its program is
/// released or relinked.
///
/// Every setter applies to the program currently in use, exactly like the
/// native `glUniform*` calls. The array (`*v`) variants derive the element
/// count from the slice length.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UniformLocation(GLint);

impl UniformLocation {
  /// Wrap a raw location.
  pub fn from_raw(location: GLint) -> Self {
    UniformLocation(location)
  }

  /// The raw location.
  pub fn location(self) -> GLint {
    self.0
  }

  /// Whether the queried name resolved to an active uniform.
  pub fn is_active(self) -> bool {
    self.0 >= 0
  }

  // scalar and vector floats

  pub fn set_1f(self, v0: GLfloat) {
    unsafe { gl::Uniform1f(self.0, v0) };
  }

  pub fn set_2f(self, v0: GLfloat, v1: GLfloat) {
    unsafe { gl::Uniform2f(self.0, v0, v1) };
  }

  pub fn set_3f(self, v0: GLfloat, v1: GLfloat, v2: GLfloat) {
    unsafe { gl::Uniform3f(self.0, v0, v1, v2) };
  }

  pub fn set_4f(self, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) {
    unsafe { gl::Uniform4f(self.0, v0, v1, v2, v3) };
  }

  // scalar and vector signed integers

  pub fn set_1i(self, v0: GLint) {
    unsafe { gl::Uniform1i(self.0, v0) };
  }

  pub fn set_2i(self, v0: GLint, v1: GLint) {
    unsafe { gl::Uniform2i(self.0, v0, v1) };
  }

  pub fn set_3i(self, v0: GLint, v1: GLint, v2: GLint) {
    unsafe { gl::Uniform3i(self.0, v0, v1, v2) };
  }

  pub fn set_4i(self, v0: GLint, v1: GLint, v2: GLint, v3: GLint) {
    unsafe { gl::Uniform4i(self.0, v0, v1, v2, v3) };
  }

  // scalar and vector unsigned integers

  pub fn set_1ui(self, v0: GLuint) {
    unsafe { gl::Uniform1ui(self.0, v0) };
  }

  pub fn set_2ui(self, v0: GLuint, v1: GLuint) {
    unsafe { gl::Uniform2ui(self.0, v0, v1) };
  }

  pub fn set_3ui(self, v0: GLuint, v1: GLuint, v2: GLuint) {
    unsafe { gl::Uniform3ui(self.0, v0, v1, v2) };
  }

  pub fn set_4ui(self, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint) {
    unsafe { gl::Uniform4ui(self.0, v0, v1, v2, v3) };
  }

  // float arrays

  pub fn set_1fv(self, values: &[GLfloat]) {
    unsafe { gl::Uniform1fv(self.0, values.len() as GLsizei, values.as_ptr()) };
  }

  pub fn set_2fv(self, values: &[[GLfloat; 2]]) {
    unsafe { gl::Uniform2fv(self.0, values.len() as GLsizei, values.as_ptr() as *const GLfloat) };
  }

  pub fn set_3fv(self, values: &[[GLfloat; 3]]) {
    unsafe { gl::Uniform3fv(self.0, values.len() as GLsizei, values.as_ptr() as *const GLfloat) };
  }

  pub fn set_4fv(self, values: &[[GLfloat; 4]]) {
    unsafe { gl::Uniform4fv(self.0, values.len() as GLsizei, values.as_ptr() as *const GLfloat) };
  }

  // signed integer arrays

  pub fn set_1iv(self, values: &[GLint]) {
    unsafe { gl::Uniform1iv(self.0, values.len() as GLsizei, values.as_ptr()) };
  }

  pub fn set_2iv(self, values: &[[GLint; 2]]) {
    unsafe { gl::Uniform2iv(self.0, values.len() as GLsizei, values.as_ptr() as *const GLint) };
  }

  pub fn set_3iv(self, values: &[[GLint; 3]]) {
    unsafe { gl::Uniform3iv(self.0, values.len() as GLsizei, values.as_ptr() as *const GLint) };
  }

  pub fn set_4iv(self, values: &[[GLint; 4]]) {
    unsafe { gl::Uniform4iv(self.0, values.len() as GLsizei, values.as_ptr() as *const GLint) };
  }

  // unsigned integer arrays

  pub fn set_1uiv(self, values: &[GLuint]) {
    unsafe { gl::Uniform1uiv(self.0, values.len() as GLsizei, values.as_ptr()) };
  }

  pub fn set_2uiv(self, values: &[[GLuint; 2]]) {
    unsafe { gl::Uniform2uiv(self.0, values.len() as GLsizei, values.as_ptr() as *const GLuint) };
  }

  pub fn set_3uiv(self, values: &[[GLuint; 3]]) {
    unsafe { gl::Uniform3uiv(self.0, values.len() as GLsizei, values.as_ptr() as *const GLuint) };
  }

  pub fn set_4uiv(self, values: &[[GLuint; 4]]) {
    unsafe { gl::Uniform4uiv(self.0, values.len() as GLsizei, values.as_ptr() as *const GLuint) };
  }

  // square matrices, column-major per element array

  pub fn set_matrix_2fv(self, transpose: bool, values: &[[GLfloat; 4]]) {
    unsafe {
      gl::UniformMatrix2fv(
        self.0,
        values.len() as GLsizei,
        transpose as GLboolean,
        values.as_ptr() as *const GLfloat,
      )
    };
  }

  pub fn set_matrix_3fv(self, transpose: bool, values: &[[GLfloat; 9]]) {
    unsafe {
      gl::UniformMatrix3fv(
        self.0,
        values.len() as GLsizei,
        transpose as GLboolean,
        values.as_ptr() as *const GLfloat,
      )
    };
  }

  pub fn set_matrix_4fv(self, transpose: bool, values: &[[GLfloat; 16]]) {
    unsafe {
      gl::UniformMatrix4fv(
        self.0,
        values.len() as GLsizei,
        transpose as GLboolean,
        values.as_ptr() as *const GLfloat,
      )
    };
  }

  // non-square matrices; NxM is N columns of M rows

  pub fn set_matrix_2x3fv(self, transpose: bool, values: &[[GLfloat; 6]]) {
    unsafe {
      gl::UniformMatrix2x3fv(
        self.0,
        values.len() as GLsizei,
        transpose as GLboolean,
        values.as_ptr() as *const GLfloat,
      )
    };
  }

  pub fn set_matrix_3x2fv(self, transpose: bool, values: &[[GLfloat; 6]]) {
    unsafe {
      gl::UniformMatrix3x2fv(
        self.0,
        values.len() as GLsizei,
        transpose as GLboolean,
        values.as_ptr() as *const GLfloat,
      )
    };
  }

  pub fn set_matrix_2x4fv(self, transpose: bool, values: &[[GLfloat; 8]]) {
    unsafe {
      gl::UniformMatrix2x4fv(
        self.0,
        values.len() as GLsizei,
        transpose as GLboolean,
        values.as_ptr() as *const GLfloat,
      )
    };
  }

  pub fn set_matrix_4x2fv(self, transpose: bool, values: &[[GLfloat; 8]]) {
    unsafe {
      gl::UniformMatrix4x2fv(
        self.0,
        values.len() as GLsizei,
        transpose as GLboolean,
        values.as_ptr() as *const GLfloat,
      )
    };
  }

  pub fn set_matrix_3x4fv(self, transpose: bool, values: &[[GLfloat; 12]]) {
    unsafe {
      gl::UniformMatrix3x4fv(
        self.0,
        values.len() as GLsizei,
        transpose as GLboolean,
        values.as_ptr() as *const GLfloat,
      )
    };
  }

  pub fn set_matrix_4x3fv(self, transpose: bool, values: &[[GLfloat; 12]]) {
    unsafe {
      gl::UniformMatrix4x3fv(
        self.0,
        values.len() as GLsizei,
        transpose as GLboolean,
        values.as_ptr() as *const GLfloat,
      )
    };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn negative_locations_are_inactive() {
    assert!(!UniformLocation::from_raw(-1).is_active());
    assert!(UniformLocation::from_raw(0).is_active());
    assert!(UniformLocation::from_raw(12).is_active());
  }

  #[test]
  fn locations_round_trip_their_raw_value() {
    assert_eq!(UniformLocation::from_raw(7).location(), 7);
    assert_eq!(UniformLocation::from_raw(-1).location(), -1);
  }
}
