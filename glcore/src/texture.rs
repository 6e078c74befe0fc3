//! Texture objects.
//!
//! [`Texture`] is an untyped handle usable with any target; [`Texture2D`]
//! fixes the target to `GL_TEXTURE_2D` and narrows the method set
//! accordingly. As in the native API, parameter and image calls apply to the
//! texture currently bound to the target, not to the handle they are
//! invoked through; bind first.

use gl::types::*;
use std::os::raw::c_void;

/// Minification filter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MinFilter {
  Nearest,
  Linear,
  NearestMipmapNearest,
  NearestMipmapLinear,
  LinearMipmapNearest,
  LinearMipmapLinear,
}

impl MinFilter {
  pub fn to_glenum(self) -> GLenum {
    match self {
      MinFilter::Nearest => gl::NEAREST,
      MinFilter::Linear => gl::LINEAR,
      MinFilter::NearestMipmapNearest => gl::NEAREST_MIPMAP_NEAREST,
      MinFilter::NearestMipmapLinear => gl::NEAREST_MIPMAP_LINEAR,
      MinFilter::LinearMipmapNearest => gl::LINEAR_MIPMAP_NEAREST,
      MinFilter::LinearMipmapLinear => gl::LINEAR_MIPMAP_LINEAR,
    }
  }
}

/// Magnification filter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MagFilter {
  Nearest,
  Linear,
}

impl MagFilter {
  pub fn to_glenum(self) -> GLenum {
    match self {
      MagFilter::Nearest => gl::NEAREST,
      MagFilter::Linear => gl::LINEAR,
    }
  }
}

/// Wrapping behavior outside of the `[0, 1]` coordinate range.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Wrap {
  ClampToEdge,
  ClampToBorder,
  MirroredRepeat,
  Repeat,
}

impl Wrap {
  pub fn to_glenum(self) -> GLenum {
    match self {
      Wrap::ClampToEdge => gl::CLAMP_TO_EDGE,
      Wrap::ClampToBorder => gl::CLAMP_TO_BORDER,
      Wrap::MirroredRepeat => gl::MIRRORED_REPEAT,
      Wrap::Repeat => gl::REPEAT,
    }
  }
}

/// A texture handle with no fixed target.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Texture(GLuint);

impl Texture {
  /// Wrap a raw handle. `0` stands for "no texture".
  pub fn from_raw(handle: GLuint) -> Self {
    Texture(handle)
  }

  /// The raw handle.
  pub fn handle(self) -> GLuint {
    self.0
  }

  /// Whether this is the zero "no texture" handle.
  pub fn is_none(self) -> bool {
    self.0 == 0
  }

  /// Bind this texture to a raw target. Wraps `glBindTexture`.
  pub fn bind(self, target: GLenum) {
    unsafe { gl::BindTexture(target, self.0) };
  }

  /// Bind the zero handle to a raw target. Wraps `glBindTexture(target, 0)`.
  pub fn unbind(target: GLenum) {
    unsafe { gl::BindTexture(target, 0) };
  }

  /// Release the texture. The handle must not be used afterwards. Wraps
  /// `glDeleteTextures(1, ..)`.
  pub fn delete(self) {
    unsafe { gl::DeleteTextures(1, &self.0) };
  }
}

/// A texture handle used exclusively through the `GL_TEXTURE_2D` target.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Texture2D(GLuint);

impl Texture2D {
  /// Wrap a raw handle. `0` stands for "no texture".
  pub fn from_raw(handle: GLuint) -> Self {
    Texture2D(handle)
  }

  /// The raw handle.
  pub fn handle(self) -> GLuint {
    self.0
  }

  /// Whether this is the zero "no texture" handle.
  pub fn is_none(self) -> bool {
    self.0 == 0
  }

  /// Forget the fixed target and use this handle with any target.
  pub fn into_texture(self) -> Texture {
    Texture(self.0)
  }

  /// Bind this texture to `GL_TEXTURE_2D`. Wraps `glBindTexture`.
  pub fn bind(self) {
    unsafe { gl::BindTexture(gl::TEXTURE_2D, self.0) };
  }

  /// Bind the zero handle to `GL_TEXTURE_2D`.
  pub fn unbind() {
    unsafe { gl::BindTexture(gl::TEXTURE_2D, 0) };
  }

  /// Release the texture. The handle must not be used afterwards. Wraps
  /// `glDeleteTextures(1, ..)`.
  pub fn delete(self) {
    unsafe { gl::DeleteTextures(1, &self.0) };
  }

  /// Specify the image of mipmap `level` of the bound texture. Wraps
  /// `glTexImage2D` with the `GL_TEXTURE_2D` target.
  ///
  /// # Safety
  ///
  /// `pixels` must either be null (allocation without initialization) or
  /// point to `width * height` texels in the layout described by `format`
  /// and `ty`, honoring the current unpack alignment.
  pub unsafe fn image_2d(
    level: GLint,
    internal_format: GLint,
    width: GLsizei,
    height: GLsizei,
    border: GLint,
    format: GLenum,
    ty: GLenum,
    pixels: *const c_void,
  ) {
    gl::TexImage2D(
      gl::TEXTURE_2D,
      level,
      internal_format,
      width,
      height,
      border,
      format,
      ty,
      pixels,
    );
  }

  /// Read back the image of mipmap `level` of the bound texture. Wraps
  /// `glGetTexImage` with the `GL_TEXTURE_2D` target.
  ///
  /// # Safety
  ///
  /// `pixels` must point to enough writable memory for the whole level in
  /// the requested layout, honoring the current pack alignment.
  pub unsafe fn get_image(level: GLint, format: GLenum, ty: GLenum, pixels: *mut c_void) {
    gl::GetTexImage(gl::TEXTURE_2D, level, format, ty, pixels);
  }

  /// Read a rectangle of the current read framebuffer. Wraps `glReadPixels`.
  ///
  /// # Safety
  ///
  /// `pixels` must point to enough writable memory for `width * height`
  /// texels in the requested layout, honoring the current pack alignment.
  pub unsafe fn read_pixels(
    x: GLint,
    y: GLint,
    width: GLsizei,
    height: GLsizei,
    format: GLenum,
    ty: GLenum,
    pixels: *mut c_void,
  ) {
    gl::ReadPixels(x, y, width, height, format, ty, pixels);
  }

  /// Set an integer parameter on the bound texture. Wraps `glTexParameteri`.
  pub fn parameter_i(pname: GLenum, param: GLint) {
    unsafe { gl::TexParameteri(gl::TEXTURE_2D, pname, param) };
  }

  /// Set a float parameter on the bound texture. Wraps `glTexParameterf`.
  pub fn parameter_f(pname: GLenum, param: GLfloat) {
    unsafe { gl::TexParameterf(gl::TEXTURE_2D, pname, param) };
  }

  /// Get an integer parameter of the bound texture. Wraps
  /// `glGetTexParameteriv` for single-valued parameters.
  pub fn get_parameter_i(pname: GLenum) -> GLint {
    let mut param = 0;
    unsafe { gl::GetTexParameteriv(gl::TEXTURE_2D, pname, &mut param) };
    param
  }

  /// Get a float parameter of the bound texture. Wraps
  /// `glGetTexParameterfv` for single-valued parameters.
  pub fn get_parameter_f(pname: GLenum) -> GLfloat {
    let mut param = 0.;
    unsafe { gl::GetTexParameterfv(gl::TEXTURE_2D, pname, &mut param) };
    param
  }

  /// Get a per-level integer parameter of the bound texture. Wraps
  /// `glGetTexLevelParameteriv` for single-valued parameters.
  pub fn get_level_parameter_i(level: GLint, pname: GLenum) -> GLint {
    let mut param = 0;
    unsafe { gl::GetTexLevelParameteriv(gl::TEXTURE_2D, level, pname, &mut param) };
    param
  }

  /// Width in texels of mipmap `level` of the bound texture.
  pub fn width(level: GLint) -> GLsizei {
    Self::get_level_parameter_i(level, gl::TEXTURE_WIDTH)
  }

  /// Height in texels of mipmap `level` of the bound texture.
  pub fn height(level: GLint) -> GLsizei {
    Self::get_level_parameter_i(level, gl::TEXTURE_HEIGHT)
  }

  /// Internal format of mipmap `level` of the bound texture.
  pub fn internal_format(level: GLint) -> GLenum {
    Self::get_level_parameter_i(level, gl::TEXTURE_INTERNAL_FORMAT) as GLenum
  }

  /// Set the index of the lowest defined mipmap level.
  pub fn set_base_level(level: GLint) {
    Self::parameter_i(gl::TEXTURE_BASE_LEVEL, level);
  }

  pub fn base_level() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_BASE_LEVEL)
  }

  /// Set the index of the highest defined mipmap level.
  pub fn set_max_level(level: GLint) {
    Self::parameter_i(gl::TEXTURE_MAX_LEVEL, level);
  }

  pub fn max_level() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_MAX_LEVEL)
  }

  /// Set the border color used with [`Wrap::ClampToBorder`].
  pub fn set_border_color(color: [GLfloat; 4]) {
    unsafe { gl::TexParameterfv(gl::TEXTURE_2D, gl::TEXTURE_BORDER_COLOR, color.as_ptr()) };
  }

  pub fn border_color() -> [GLfloat; 4] {
    let mut color = [0.; 4];
    unsafe {
      gl::GetTexParameterfv(gl::TEXTURE_2D, gl::TEXTURE_BORDER_COLOR, color.as_mut_ptr())
    };
    color
  }

  /// Set the comparison function used when the compare mode is on. The value
  /// is a raw `GL_*` comparison constant.
  pub fn set_compare_func(func: GLint) {
    Self::parameter_i(gl::TEXTURE_COMPARE_FUNC, func);
  }

  pub fn compare_func() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_COMPARE_FUNC)
  }

  /// Set the compare mode; raw `GL_COMPARE_REF_TO_TEXTURE` or `GL_NONE`.
  pub fn set_compare_mode(mode: GLint) {
    Self::parameter_i(gl::TEXTURE_COMPARE_MODE, mode);
  }

  pub fn compare_mode() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_COMPARE_MODE)
  }

  /// Set the level-of-detail bias.
  pub fn set_lod_bias(bias: GLfloat) {
    Self::parameter_f(gl::TEXTURE_LOD_BIAS, bias);
  }

  pub fn lod_bias() -> GLfloat {
    Self::get_parameter_f(gl::TEXTURE_LOD_BIAS)
  }

  /// Set the minification filter.
  pub fn set_min_filter(filter: MinFilter) {
    Self::parameter_i(gl::TEXTURE_MIN_FILTER, filter.to_glenum() as GLint);
  }

  pub fn min_filter() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_MIN_FILTER)
  }

  /// Set the magnification filter.
  pub fn set_mag_filter(filter: MagFilter) {
    Self::parameter_i(gl::TEXTURE_MAG_FILTER, filter.to_glenum() as GLint);
  }

  pub fn mag_filter() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_MAG_FILTER)
  }

  /// Set the minimum level of detail.
  pub fn set_min_lod(lod: GLfloat) {
    Self::parameter_f(gl::TEXTURE_MIN_LOD, lod);
  }

  pub fn min_lod() -> GLfloat {
    Self::get_parameter_f(gl::TEXTURE_MIN_LOD)
  }

  /// Set the maximum level of detail.
  pub fn set_max_lod(lod: GLfloat) {
    Self::parameter_f(gl::TEXTURE_MAX_LOD, lod);
  }

  pub fn max_lod() -> GLfloat {
    Self::get_parameter_f(gl::TEXTURE_MAX_LOD)
  }

  /// Set the red channel swizzle; raw `GL_RED`/`GL_GREEN`/`GL_BLUE`/
  /// `GL_ALPHA`/`GL_ZERO`/`GL_ONE`.
  pub fn set_swizzle_r(swizzle: GLint) {
    Self::parameter_i(gl::TEXTURE_SWIZZLE_R, swizzle);
  }

  pub fn swizzle_r() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_SWIZZLE_R)
  }

  pub fn set_swizzle_g(swizzle: GLint) {
    Self::parameter_i(gl::TEXTURE_SWIZZLE_G, swizzle);
  }

  pub fn swizzle_g() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_SWIZZLE_G)
  }

  pub fn set_swizzle_b(swizzle: GLint) {
    Self::parameter_i(gl::TEXTURE_SWIZZLE_B, swizzle);
  }

  pub fn swizzle_b() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_SWIZZLE_B)
  }

  pub fn set_swizzle_a(swizzle: GLint) {
    Self::parameter_i(gl::TEXTURE_SWIZZLE_A, swizzle);
  }

  pub fn swizzle_a() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_SWIZZLE_A)
  }

  /// Set all four channel swizzles at once. Wraps `glTexParameteriv` with
  /// `GL_TEXTURE_SWIZZLE_RGBA`.
  pub fn set_swizzle_rgba(swizzle: [GLint; 4]) {
    unsafe { gl::TexParameteriv(gl::TEXTURE_2D, gl::TEXTURE_SWIZZLE_RGBA, swizzle.as_ptr()) };
  }

  pub fn swizzle_rgba() -> [GLint; 4] {
    let mut swizzle = [0; 4];
    unsafe {
      gl::GetTexParameteriv(gl::TEXTURE_2D, gl::TEXTURE_SWIZZLE_RGBA, swizzle.as_mut_ptr())
    };
    swizzle
  }

  /// Set wrapping along the s (horizontal) coordinate.
  pub fn set_wrap_s(wrap: Wrap) {
    Self::parameter_i(gl::TEXTURE_WRAP_S, wrap.to_glenum() as GLint);
  }

  pub fn wrap_s() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_WRAP_S)
  }

  /// Set wrapping along the t (vertical) coordinate.
  pub fn set_wrap_t(wrap: Wrap) {
    Self::parameter_i(gl::TEXTURE_WRAP_T, wrap.to_glenum() as GLint);
  }

  pub fn wrap_t() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_WRAP_T)
  }

  pub fn wrap_r() -> GLint {
    Self::get_parameter_i(gl::TEXTURE_WRAP_R)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn min_filters_map_to_their_native_constant() {
    assert_eq!(MinFilter::Nearest.to_glenum(), gl::NEAREST);
    assert_eq!(MinFilter::Linear.to_glenum(), gl::LINEAR);
    assert_eq!(
      MinFilter::NearestMipmapNearest.to_glenum(),
      gl::NEAREST_MIPMAP_NEAREST
    );
    assert_eq!(
      MinFilter::NearestMipmapLinear.to_glenum(),
      gl::NEAREST_MIPMAP_LINEAR
    );
    assert_eq!(
      MinFilter::LinearMipmapNearest.to_glenum(),
      gl::LINEAR_MIPMAP_NEAREST
    );
    assert_eq!(
      MinFilter::LinearMipmapLinear.to_glenum(),
      gl::LINEAR_MIPMAP_LINEAR
    );
  }

  #[test]
  fn mag_filters_map_to_their_native_constant() {
    assert_eq!(MagFilter::Nearest.to_glenum(), gl::NEAREST);
    assert_eq!(MagFilter::Linear.to_glenum(), gl::LINEAR);
  }

  #[test]
  fn wraps_map_to_their_native_constant() {
    assert_eq!(Wrap::ClampToEdge.to_glenum(), gl::CLAMP_TO_EDGE);
    assert_eq!(Wrap::ClampToBorder.to_glenum(), gl::CLAMP_TO_BORDER);
    assert_eq!(Wrap::MirroredRepeat.to_glenum(), gl::MIRRORED_REPEAT);
    assert_eq!(Wrap::Repeat.to_glenum(), gl::REPEAT);
  }

  #[test]
  fn texture_2d_widens_to_an_untyped_texture() {
    let t2d = Texture2D::from_raw(7);
    assert_eq!(t2d.into_texture().handle(), 7);
  }

  #[test]
  fn the_zero_handle_means_no_texture() {
    assert!(Texture::from_raw(0).is_none());
    assert!(Texture2D::from_raw(0).is_none());
    assert!(!Texture2D::from_raw(3).is_none());
  }
}
