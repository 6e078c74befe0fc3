//! Shader objects.

use gl::types::*;
use std::ffi::CString;
use std::ptr::null;

/// The stage a shader object compiles for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShaderKind {
  Vertex,
  Fragment,
  Geometry,
}

impl ShaderKind {
  pub fn to_glenum(self) -> GLenum {
    match self {
      ShaderKind::Vertex => gl::VERTEX_SHADER,
      ShaderKind::Fragment => gl::FRAGMENT_SHADER,
      ShaderKind::Geometry => gl::GEOMETRY_SHADER,
    }
  }
}

/// A shader object of any stage.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Shader(GLuint);

impl Shader {
  /// Wrap a raw handle. `0` stands for "no shader".
  pub fn from_raw(handle: GLuint) -> Self {
    Shader(handle)
  }

  /// The raw handle.
  pub fn handle(self) -> GLuint {
    self.0
  }

  /// Whether this is the zero "no shader" handle.
  pub fn is_none(self) -> bool {
    self.0 == 0
  }

  /// Replace the source of the shader. Wraps `glShaderSource` with a single
  /// string. Interior NUL bytes in `src` are dropped.
  pub fn source(self, src: &str) {
    let bytes: Vec<u8> = src.bytes().filter(|&b| b != 0).collect();
    // cannot fail: interior NULs were just removed
    let c_src = CString::new(bytes).unwrap();

    unsafe { gl::ShaderSource(self.0, 1, [c_src.as_ptr()].as_ptr(), null()) };
  }

  /// Raw form of [`Shader::source`], with the exact native argument shape.
  ///
  /// # Safety
  ///
  /// `strings` must point to `count` valid string pointers; `lengths` must
  /// either be null (NUL-terminated strings) or point to `count` lengths.
  pub unsafe fn source_raw(self, count: GLsizei, strings: *const *const GLchar, lengths: *const GLint) {
    gl::ShaderSource(self.0, count, strings, lengths);
  }

  /// Compile the shader. Wraps `glCompileShader`; check
  /// [`Shader::compile_status`] and [`Shader::info_log`] for the outcome.
  pub fn compile(self) {
    unsafe { gl::CompileShader(self.0) };
  }

  /// Release the shader. The handle must not be used afterwards. Wraps
  /// `glDeleteShader`.
  pub fn delete(self) {
    unsafe { gl::DeleteShader(self.0) };
  }

  fn get_iv(self, pname: GLenum) -> GLint {
    let mut v = 0;
    unsafe { gl::GetShaderiv(self.0, pname, &mut v) };
    v
  }

  /// The stage this shader compiles for, as a raw `GL_*_SHADER` constant.
  pub fn kind(self) -> GLenum {
    self.get_iv(gl::SHADER_TYPE) as GLenum
  }

  /// Whether the shader is flagged for deletion.
  pub fn delete_status(self) -> bool {
    self.get_iv(gl::DELETE_STATUS) == gl::TRUE as GLint
  }

  /// Whether the last compile succeeded.
  pub fn compile_status(self) -> bool {
    self.get_iv(gl::COMPILE_STATUS) == gl::TRUE as GLint
  }

  /// Size in bytes of the information log, including the terminating NUL;
  /// `0` when there is no log.
  pub fn info_log_len(self) -> usize {
    self.get_iv(gl::INFO_LOG_LENGTH) as usize
  }

  /// The information log of the last compile.
  pub fn info_log(self) -> String {
    let len = self.info_log_len();

    if len == 0 {
      return String::new();
    }

    let mut log: Vec<u8> = Vec::with_capacity(len);
    let mut written: GLsizei = 0;

    unsafe {
      gl::GetShaderInfoLog(
        self.0,
        len as GLsizei,
        &mut written,
        log.as_mut_ptr() as *mut GLchar,
      );
      log.set_len(written.max(0) as usize);
    }

    String::from_utf8_lossy(&log).into_owned()
  }

  /// Size in bytes of the concatenated source, including the terminating
  /// NUL; `0` when no source is attached.
  pub fn source_len(self) -> usize {
    self.get_iv(gl::SHADER_SOURCE_LENGTH) as usize
  }

  /// Read back the source currently attached to the shader. Wraps
  /// `glGetShaderSource`.
  pub fn get_source(self) -> String {
    let len = self.source_len();

    if len == 0 {
      return String::new();
    }

    let mut src: Vec<u8> = Vec::with_capacity(len);
    let mut written: GLsizei = 0;

    unsafe {
      gl::GetShaderSource(
        self.0,
        len as GLsizei,
        &mut written,
        src.as_mut_ptr() as *mut GLchar,
      );
      src.set_len(written.max(0) as usize);
    }

    String::from_utf8_lossy(&src).into_owned()
  }

  /// Raw status query escape hatch. Wraps `glGetShaderiv`.
  ///
  /// # Safety
  ///
  /// `params` must point to enough writable `GLint`s for `pname`.
  pub unsafe fn get_shader_iv(self, pname: GLenum, params: *mut GLint) {
    gl::GetShaderiv(self.0, pname, params);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kinds_map_to_their_native_constant() {
    assert_eq!(ShaderKind::Vertex.to_glenum(), gl::VERTEX_SHADER);
    assert_eq!(ShaderKind::Fragment.to_glenum(), gl::FRAGMENT_SHADER);
    assert_eq!(ShaderKind::Geometry.to_glenum(), gl::GEOMETRY_SHADER);
  }

  #[test]
  fn the_zero_handle_means_no_shader() {
    assert!(Shader::from_raw(0).is_none());
    assert!(!Shader::from_raw(12).is_none());
  }
}
