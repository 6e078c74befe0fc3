//! Program objects.

use crate::shader::Shader;
use crate::uniform::UniformLocation;
use gl::types::*;
use std::ffi::CString;

/// Linked GPU code.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Program(GLuint);

impl Program {
  /// Wrap a raw handle. `0` stands for "no program".
  pub fn from_raw(handle: GLuint) -> Self {
    Program(handle)
  }

  /// The raw handle.
  pub fn handle(self) -> GLuint {
    self.0
  }

  /// Whether this is the zero "no program" handle.
  pub fn is_none(self) -> bool {
    self.0 == 0
  }

  /// Attach a shader object to the program. Wraps `glAttachShader`.
  pub fn attach_shader(self, shader: Shader) {
    unsafe { gl::AttachShader(self.0, shader.handle()) };
  }

  /// Detach a previously attached shader object. Wraps `glDetachShader`.
  pub fn detach_shader(self, shader: Shader) {
    unsafe { gl::DetachShader(self.0, shader.handle()) };
  }

  /// Link the program. Wraps `glLinkProgram`; check
  /// [`Program::link_status`] and [`Program::info_log`] for the outcome.
  pub fn link(self) {
    unsafe { gl::LinkProgram(self.0) };
  }

  /// Make this program current for rendering. Wraps `glUseProgram`.
  pub fn bind(self) {
    unsafe { gl::UseProgram(self.0) };
  }

  /// Make the zero program current. Wraps `glUseProgram(0)`.
  pub fn unbind() {
    unsafe { gl::UseProgram(0) };
  }

  /// Release the program. The handle must not be used afterwards; uniform
  /// locations obtained from it become stale. Wraps `glDeleteProgram`.
  pub fn delete(self) {
    unsafe { gl::DeleteProgram(self.0) };
  }

  /// Location of a named uniform. Wraps `glGetUniformLocation`; the
  /// location is `-1` when the name is not an active uniform. Interior NUL
  /// bytes in `name` are dropped.
  pub fn uniform_location(self, name: &str) -> UniformLocation {
    let bytes: Vec<u8> = name.bytes().filter(|&b| b != 0).collect();
    // cannot fail: interior NULs were just removed
    let c_name = CString::new(bytes).unwrap();

    let location = unsafe { gl::GetUniformLocation(self.0, c_name.as_ptr() as *const GLchar) };

    UniformLocation::from_raw(location)
  }

  /// Bind a fragment output variable to a color number. Takes effect on the
  /// next link. Wraps `glBindFragDataLocation`.
  pub fn bind_frag_data_location(self, color_number: GLuint, name: &str) {
    let bytes: Vec<u8> = name.bytes().filter(|&b| b != 0).collect();
    // cannot fail: interior NULs were just removed
    let c_name = CString::new(bytes).unwrap();

    unsafe { gl::BindFragDataLocation(self.0, color_number, c_name.as_ptr() as *const GLchar) };
  }

  fn get_iv(self, pname: GLenum) -> GLint {
    let mut v = 0;
    unsafe { gl::GetProgramiv(self.0, pname, &mut v) };
    v
  }

  /// Whether the program is flagged for deletion.
  pub fn delete_status(self) -> bool {
    self.get_iv(gl::DELETE_STATUS) == gl::TRUE as GLint
  }

  /// Whether the last link succeeded.
  pub fn link_status(self) -> bool {
    self.get_iv(gl::LINK_STATUS) == gl::TRUE as GLint
  }

  /// Whether the last validation succeeded.
  pub fn validate_status(self) -> bool {
    self.get_iv(gl::VALIDATE_STATUS) == gl::TRUE as GLint
  }

  /// Validate the program against the current state. Wraps
  /// `glValidateProgram`; the result lands in [`Program::validate_status`].
  pub fn validate(self) {
    unsafe { gl::ValidateProgram(self.0) };
  }

  /// Size in bytes of the information log, including the terminating NUL;
  /// `0` when there is no log.
  pub fn info_log_len(self) -> usize {
    self.get_iv(gl::INFO_LOG_LENGTH) as usize
  }

  /// The information log of the last link or validation.
  pub fn info_log(self) -> String {
    let len = self.info_log_len();

    if len == 0 {
      return String::new();
    }

    let mut log: Vec<u8> = Vec::with_capacity(len);
    let mut written: GLsizei = 0;

    unsafe {
      gl::GetProgramInfoLog(
        self.0,
        len as GLsizei,
        &mut written,
        log.as_mut_ptr() as *mut GLchar,
      );
      log.set_len(written.max(0) as usize);
    }

    String::from_utf8_lossy(&log).into_owned()
  }

  /// Number of shader objects attached.
  pub fn attached_shader_count(self) -> usize {
    self.get_iv(gl::ATTACHED_SHADERS) as usize
  }

  /// The attached shader objects. Wraps `glGetAttachedShaders`.
  pub fn attached_shaders(self) -> Vec<Shader> {
    let count = self.attached_shader_count();

    if count == 0 {
      return Vec::new();
    }

    let mut handles: Vec<GLuint> = vec![0; count];
    let mut written: GLsizei = 0;

    unsafe {
      gl::GetAttachedShaders(
        self.0,
        count as GLsizei,
        &mut written,
        handles.as_mut_ptr(),
      );
    }

    handles.truncate(written.max(0) as usize);
    handles.into_iter().map(Shader::from_raw).collect()
  }

  /// Number of active attribute variables.
  pub fn active_attributes(self) -> usize {
    self.get_iv(gl::ACTIVE_ATTRIBUTES) as usize
  }

  /// Length of the longest active attribute name, including the terminating
  /// NUL; `0` without active attributes.
  pub fn active_attribute_max_len(self) -> usize {
    self.get_iv(gl::ACTIVE_ATTRIBUTE_MAX_LENGTH) as usize
  }

  /// Number of active uniform variables.
  pub fn active_uniforms(self) -> usize {
    self.get_iv(gl::ACTIVE_UNIFORMS) as usize
  }

  /// Length of the longest active uniform name, including the terminating
  /// NUL; `0` without active uniforms.
  pub fn active_uniform_max_len(self) -> usize {
    self.get_iv(gl::ACTIVE_UNIFORM_MAX_LENGTH) as usize
  }

  /// Buffer mode used when transform feedback is active; raw
  /// `GL_SEPARATE_ATTRIBS` or `GL_INTERLEAVED_ATTRIBS`.
  pub fn transform_feedback_buffer_mode(self) -> GLenum {
    self.get_iv(gl::TRANSFORM_FEEDBACK_BUFFER_MODE) as GLenum
  }

  /// Number of varyings captured in transform feedback mode.
  pub fn transform_feedback_varyings(self) -> usize {
    self.get_iv(gl::TRANSFORM_FEEDBACK_VARYINGS) as usize
  }

  /// Length of the longest transform feedback varying name, including the
  /// terminating NUL.
  pub fn transform_feedback_varying_max_len(self) -> usize {
    self.get_iv(gl::TRANSFORM_FEEDBACK_VARYING_MAX_LENGTH) as usize
  }

  /// Maximum number of vertices the geometry shader will emit.
  pub fn geometry_vertices_out(self) -> usize {
    self.get_iv(gl::GEOMETRY_VERTICES_OUT) as usize
  }

  /// Primitive type accepted by the geometry shader, as a raw constant.
  pub fn geometry_input_type(self) -> GLenum {
    self.get_iv(gl::GEOMETRY_INPUT_TYPE) as GLenum
  }

  /// Primitive type emitted by the geometry shader, as a raw constant.
  pub fn geometry_output_type(self) -> GLenum {
    self.get_iv(gl::GEOMETRY_OUTPUT_TYPE) as GLenum
  }

  /// Raw query escape hatch. Wraps `glGetProgramiv`.
  ///
  /// # Safety
  ///
  /// `params` must point to enough writable `GLint`s for `pname`.
  pub unsafe fn get_program_iv(self, pname: GLenum, params: *mut GLint) {
    gl::GetProgramiv(self.0, pname, params);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn the_zero_handle_means_no_program() {
    assert!(Program::from_raw(0).is_none());
    assert!(!Program::from_raw(4).is_none());
  }

  #[test]
  fn handles_stay_distinct() {
    assert_ne!(Program::from_raw(1), Program::from_raw(2));
    assert_eq!(Program::from_raw(3).handle(), 3);
  }
}
