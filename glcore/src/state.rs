//! Global rendering state accessors.
//!
//! Setters and getters over the pieces of context-global state the driver
//! exposes: viewport, clear color, write masks, stencil, face culling and
//! the enable/disable capability switches. All of them are pass-through;
//! nothing is cached or validated on this side.

use crate::context::Context;
use gl::types::*;

/// A capability toggled through `glEnable`/`glDisable`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Capability {
  Blend,
  ColorLogicOp,
  CullFace,
  DepthClamp,
  DepthTest,
  Dither,
  FramebufferSrgb,
  LineSmooth,
  Multisample,
  PolygonOffsetFill,
  PolygonOffsetLine,
  PolygonOffsetPoint,
  PolygonSmooth,
  PrimitiveRestart,
  ProgramPointSize,
  RasterizerDiscard,
  SampleAlphaToCoverage,
  SampleAlphaToOne,
  SampleCoverage,
  ScissorTest,
  StencilTest,
  TextureCubeMapSeamless,
}

impl Capability {
  pub fn to_glenum(self) -> GLenum {
    match self {
      Capability::Blend => gl::BLEND,
      Capability::ColorLogicOp => gl::COLOR_LOGIC_OP,
      Capability::CullFace => gl::CULL_FACE,
      Capability::DepthClamp => gl::DEPTH_CLAMP,
      Capability::DepthTest => gl::DEPTH_TEST,
      Capability::Dither => gl::DITHER,
      Capability::FramebufferSrgb => gl::FRAMEBUFFER_SRGB,
      Capability::LineSmooth => gl::LINE_SMOOTH,
      Capability::Multisample => gl::MULTISAMPLE,
      Capability::PolygonOffsetFill => gl::POLYGON_OFFSET_FILL,
      Capability::PolygonOffsetLine => gl::POLYGON_OFFSET_LINE,
      Capability::PolygonOffsetPoint => gl::POLYGON_OFFSET_POINT,
      Capability::PolygonSmooth => gl::POLYGON_SMOOTH,
      Capability::PrimitiveRestart => gl::PRIMITIVE_RESTART,
      Capability::ProgramPointSize => gl::PROGRAM_POINT_SIZE,
      Capability::RasterizerDiscard => gl::RASTERIZER_DISCARD,
      Capability::SampleAlphaToCoverage => gl::SAMPLE_ALPHA_TO_COVERAGE,
      Capability::SampleAlphaToOne => gl::SAMPLE_ALPHA_TO_ONE,
      Capability::SampleCoverage => gl::SAMPLE_COVERAGE,
      Capability::ScissorTest => gl::SCISSOR_TEST,
      Capability::StencilTest => gl::STENCIL_TEST,
      Capability::TextureCubeMapSeamless => gl::TEXTURE_CUBE_MAP_SEAMLESS,
    }
  }
}

/// Stencil comparison function.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StencilFunc {
  Never,
  Less,
  LessOrEqual,
  Greater,
  GreaterOrEqual,
  Equal,
  NotEqual,
  Always,
}

impl StencilFunc {
  pub fn to_glenum(self) -> GLenum {
    match self {
      StencilFunc::Never => gl::NEVER,
      StencilFunc::Less => gl::LESS,
      StencilFunc::LessOrEqual => gl::LEQUAL,
      StencilFunc::Greater => gl::GREATER,
      StencilFunc::GreaterOrEqual => gl::GEQUAL,
      StencilFunc::Equal => gl::EQUAL,
      StencilFunc::NotEqual => gl::NOTEQUAL,
      StencilFunc::Always => gl::ALWAYS,
    }
  }
}

/// Action applied to a stencil value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StencilOp {
  Keep,
  Zero,
  Replace,
  Increment,
  IncrementWrap,
  Decrement,
  DecrementWrap,
  Invert,
}

impl StencilOp {
  pub fn to_glenum(self) -> GLenum {
    match self {
      StencilOp::Keep => gl::KEEP,
      StencilOp::Zero => gl::ZERO,
      StencilOp::Replace => gl::REPLACE,
      StencilOp::Increment => gl::INCR,
      StencilOp::IncrementWrap => gl::INCR_WRAP,
      StencilOp::Decrement => gl::DECR,
      StencilOp::DecrementWrap => gl::DECR_WRAP,
      StencilOp::Invert => gl::INVERT,
    }
  }
}

/// Which faces get culled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Face {
  Front,
  Back,
  FrontAndBack,
}

impl Face {
  pub fn to_glenum(self) -> GLenum {
    match self {
      Face::Front => gl::FRONT,
      Face::Back => gl::BACK,
      Face::FrontAndBack => gl::FRONT_AND_BACK,
    }
  }
}

/// Winding order that defines the front face.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WindingOrder {
  Clockwise,
  CounterClockwise,
}

impl WindingOrder {
  pub fn to_glenum(self) -> GLenum {
    match self {
      WindingOrder::Clockwise => gl::CW,
      WindingOrder::CounterClockwise => gl::CCW,
    }
  }
}

impl Context {
  /// Enable a capability. Wraps `glEnable`.
  pub fn enable(&self, cap: Capability) {
    unsafe { gl::Enable(cap.to_glenum()) };
    self.check();
  }

  /// Disable a capability. Wraps `glDisable`.
  pub fn disable(&self, cap: Capability) {
    unsafe { gl::Disable(cap.to_glenum()) };
    self.check();
  }

  /// Whether a capability is currently enabled. Wraps `glIsEnabled`.
  pub fn is_enabled(&self, cap: Capability) -> bool {
    let enabled = unsafe { gl::IsEnabled(cap.to_glenum()) };
    self.check();

    enabled == gl::TRUE
  }

  /// Set the viewport rectangle. Wraps `glViewport`.
  pub fn set_viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
    unsafe { gl::Viewport(x, y, width, height) };
    self.check();
  }

  /// The current viewport rectangle as `[x, y, width, height]`.
  pub fn viewport(&self) -> [GLint; 4] {
    let mut data = [0; 4];
    unsafe { gl::GetIntegerv(gl::VIEWPORT, data.as_mut_ptr()) };
    self.check();

    data
  }

  /// The maximum supported viewport dimensions as `[width, height]`.
  pub fn max_viewport_dims(&self) -> [GLint; 2] {
    let mut data = [0; 2];
    unsafe { gl::GetIntegerv(gl::MAX_VIEWPORT_DIMS, data.as_mut_ptr()) };
    self.check();

    data
  }

  /// Set the color buffers' clear value. Wraps `glClearColor`.
  pub fn set_clear_color(&self, color: [GLfloat; 4]) {
    unsafe { gl::ClearColor(color[0], color[1], color[2], color[3]) };
    self.check();
  }

  /// The current clear color as RGBA.
  pub fn clear_color(&self) -> [GLfloat; 4] {
    let mut data = [0.; 4];
    unsafe { gl::GetFloatv(gl::COLOR_CLEAR_VALUE, data.as_mut_ptr()) };
    self.check();

    data
  }

  /// Allow or prevent writes to the depth buffer. Wraps `glDepthMask`.
  pub fn set_depth_mask(&self, write: bool) {
    unsafe { gl::DepthMask(write as GLboolean) };
    self.check();
  }

  /// Whether the depth buffer is writable.
  pub fn depth_mask(&self) -> bool {
    let mut data: GLboolean = gl::FALSE;
    unsafe { gl::GetBooleanv(gl::DEPTH_WRITEMASK, &mut data) };
    self.check();

    data == gl::TRUE
  }

  /// Allow or prevent writes per color channel. Wraps `glColorMask`.
  pub fn set_color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
    unsafe {
      gl::ColorMask(
        red as GLboolean,
        green as GLboolean,
        blue as GLboolean,
        alpha as GLboolean,
      )
    };
    self.check();
  }

  /// The per-channel color write mask as `[r, g, b, a]`.
  pub fn color_mask(&self) -> [bool; 4] {
    let mut data: [GLboolean; 4] = [gl::FALSE; 4];
    unsafe { gl::GetBooleanv(gl::COLOR_WRITEMASK, data.as_mut_ptr()) };
    self.check();

    [
      data[0] == gl::TRUE,
      data[1] == gl::TRUE,
      data[2] == gl::TRUE,
      data[3] == gl::TRUE,
    ]
  }

  /// Set the stencil test function, reference value and read mask. Wraps
  /// `glStencilFunc`.
  pub fn set_stencil_func(&self, func: StencilFunc, reference: GLint, mask: GLuint) {
    unsafe { gl::StencilFunc(func.to_glenum(), reference, mask) };
    self.check();
  }

  /// Set the actions taken on stencil fail, depth fail and pass. Wraps
  /// `glStencilOp`.
  pub fn set_stencil_op(&self, stencil_fail: StencilOp, depth_fail: StencilOp, pass: StencilOp) {
    unsafe {
      gl::StencilOp(
        stencil_fail.to_glenum(),
        depth_fail.to_glenum(),
        pass.to_glenum(),
      )
    };
    self.check();
  }

  /// Set the stencil write mask. Wraps `glStencilMask`.
  pub fn set_stencil_mask(&self, mask: GLuint) {
    unsafe { gl::StencilMask(mask) };
    self.check();
  }

  /// Choose which faces to cull. Wraps `glCullFace`.
  pub fn set_cull_face(&self, face: Face) {
    unsafe { gl::CullFace(face.to_glenum()) };
    self.check();
  }

  /// Choose the winding order of front faces. Wraps `glFrontFace`.
  pub fn set_front_face(&self, order: WindingOrder) {
    unsafe { gl::FrontFace(order.to_glenum()) };
    self.check();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stencil_funcs_map_to_their_native_constant() {
    assert_eq!(StencilFunc::Never.to_glenum(), gl::NEVER);
    assert_eq!(StencilFunc::Less.to_glenum(), gl::LESS);
    assert_eq!(StencilFunc::LessOrEqual.to_glenum(), gl::LEQUAL);
    assert_eq!(StencilFunc::Greater.to_glenum(), gl::GREATER);
    assert_eq!(StencilFunc::GreaterOrEqual.to_glenum(), gl::GEQUAL);
    assert_eq!(StencilFunc::Equal.to_glenum(), gl::EQUAL);
    assert_eq!(StencilFunc::NotEqual.to_glenum(), gl::NOTEQUAL);
    assert_eq!(StencilFunc::Always.to_glenum(), gl::ALWAYS);
  }

  #[test]
  fn stencil_ops_map_to_their_native_constant() {
    assert_eq!(StencilOp::Keep.to_glenum(), gl::KEEP);
    assert_eq!(StencilOp::Zero.to_glenum(), gl::ZERO);
    assert_eq!(StencilOp::Replace.to_glenum(), gl::REPLACE);
    assert_eq!(StencilOp::Increment.to_glenum(), gl::INCR);
    assert_eq!(StencilOp::IncrementWrap.to_glenum(), gl::INCR_WRAP);
    assert_eq!(StencilOp::Decrement.to_glenum(), gl::DECR);
    assert_eq!(StencilOp::DecrementWrap.to_glenum(), gl::DECR_WRAP);
    assert_eq!(StencilOp::Invert.to_glenum(), gl::INVERT);
  }

  #[test]
  fn each_face_culls_its_own_side() {
    // Front and back must not collapse onto the same native constant.
    assert_eq!(Face::Front.to_glenum(), gl::FRONT);
    assert_eq!(Face::Back.to_glenum(), gl::BACK);
    assert_eq!(Face::FrontAndBack.to_glenum(), gl::FRONT_AND_BACK);
    assert_ne!(Face::Front.to_glenum(), Face::Back.to_glenum());
  }

  #[test]
  fn winding_orders_map_to_their_native_constant() {
    assert_eq!(WindingOrder::Clockwise.to_glenum(), gl::CW);
    assert_eq!(WindingOrder::CounterClockwise.to_glenum(), gl::CCW);
  }
}
