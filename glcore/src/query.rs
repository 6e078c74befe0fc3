//! Context state and implementation-limit queries.
//!
//! The `glGet*` surface: strings, current bindings, pixel store settings,
//! stencil state and the `GL_MAX_*` implementation limits, one getter per
//! state name. Enumerated state (comparison functions, hints, provoking
//! vertex and the like) is returned as the raw constant, exactly as the
//! driver reports it.

use crate::buffer::Buffer;
use crate::context::Context;
use crate::framebuffer::Framebuffer;
use crate::program::Program;
use crate::renderbuffer::Renderbuffer;
use crate::texture::Texture;
use crate::transform_feedback::TransformFeedback;
use crate::vertex_array::VertexArray;
use gl::types::*;
use std::ffi::CStr;

impl Context {
  // raw escape hatches

  /// Wraps `glGetBooleanv`.
  ///
  /// # Safety
  ///
  /// `params` must point to enough writable `GLboolean`s for `pname`.
  pub unsafe fn get_booleanv(&self, pname: GLenum, params: *mut GLboolean) {
    gl::GetBooleanv(pname, params);
    self.check();
  }

  /// Wraps `glGetIntegerv`.
  ///
  /// # Safety
  ///
  /// `params` must point to enough writable `GLint`s for `pname`.
  pub unsafe fn get_integerv(&self, pname: GLenum, params: *mut GLint) {
    gl::GetIntegerv(pname, params);
    self.check();
  }

  /// Wraps `glGetInteger64v`.
  ///
  /// # Safety
  ///
  /// `params` must point to enough writable `GLint64`s for `pname`.
  pub unsafe fn get_integer64v(&self, pname: GLenum, params: *mut GLint64) {
    gl::GetInteger64v(pname, params);
    self.check();
  }

  /// Wraps `glGetFloatv`.
  ///
  /// # Safety
  ///
  /// `params` must point to enough writable `GLfloat`s for `pname`.
  pub unsafe fn get_floatv(&self, pname: GLenum, params: *mut GLfloat) {
    gl::GetFloatv(pname, params);
    self.check();
  }

  /// Wraps `glGetDoublev`.
  ///
  /// # Safety
  ///
  /// `params` must point to enough writable `GLdouble`s for `pname`.
  pub unsafe fn get_doublev(&self, pname: GLenum, params: *mut GLdouble) {
    gl::GetDoublev(pname, params);
    self.check();
  }

  /// Wraps `glGetBooleani_v`.
  ///
  /// # Safety
  ///
  /// `data` must point to enough writable `GLboolean`s for `pname`.
  pub unsafe fn get_booleani_v(&self, pname: GLenum, index: GLuint, data: *mut GLboolean) {
    gl::GetBooleani_v(pname, index, data);
    self.check();
  }

  /// Wraps `glGetIntegeri_v`.
  ///
  /// # Safety
  ///
  /// `data` must point to enough writable `GLint`s for `pname`.
  pub unsafe fn get_integeri_v(&self, pname: GLenum, index: GLuint, data: *mut GLint) {
    gl::GetIntegeri_v(pname, index, data);
    self.check();
  }

  /// Wraps `glGetInteger64i_v`.
  ///
  /// # Safety
  ///
  /// `data` must point to enough writable `GLint64`s for `pname`.
  pub unsafe fn get_integer64i_v(&self, pname: GLenum, index: GLuint, data: *mut GLint64) {
    gl::GetInteger64i_v(pname, index, data);
    self.check();
  }

  // single-value helpers used by the named getters below

  fn query_i32(&self, pname: GLenum) -> GLint {
    let mut v: GLint = 0;
    unsafe { gl::GetIntegerv(pname, &mut v) };
    self.check();
    v
  }

  fn query_i64(&self, pname: GLenum) -> GLint64 {
    let mut v: GLint64 = 0;
    unsafe { gl::GetInteger64v(pname, &mut v) };
    self.check();
    v
  }

  fn query_i64_indexed(&self, pname: GLenum, index: GLuint) -> GLint64 {
    let mut v: GLint64 = 0;
    unsafe { gl::GetInteger64i_v(pname, index, &mut v) };
    self.check();
    v
  }

  fn query_f32(&self, pname: GLenum) -> GLfloat {
    let mut v: GLfloat = 0.;
    unsafe { gl::GetFloatv(pname, &mut v) };
    self.check();
    v
  }

  fn query_f32_2(&self, pname: GLenum) -> [GLfloat; 2] {
    let mut v = [0.; 2];
    unsafe { gl::GetFloatv(pname, v.as_mut_ptr()) };
    self.check();
    v
  }

  fn query_f32_4(&self, pname: GLenum) -> [GLfloat; 4] {
    let mut v = [0.; 4];
    unsafe { gl::GetFloatv(pname, v.as_mut_ptr()) };
    self.check();
    v
  }

  fn query_bool(&self, pname: GLenum) -> bool {
    let mut v: GLboolean = gl::FALSE;
    unsafe { gl::GetBooleanv(pname, &mut v) };
    self.check();
    v == gl::TRUE
  }

  fn query_string(&self, name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    self.check();

    if ptr.is_null() {
      return String::new();
    }

    unsafe { CStr::from_ptr(ptr as *const _) }
      .to_string_lossy()
      .into_owned()
  }

  // context strings and extensions

  /// The vendor string. Wraps `glGetString(GL_VENDOR)`.
  pub fn vendor(&self) -> String {
    self.query_string(gl::VENDOR)
  }

  /// The renderer string. Wraps `glGetString(GL_RENDERER)`.
  pub fn renderer(&self) -> String {
    self.query_string(gl::RENDERER)
  }

  /// The version string. Wraps `glGetString(GL_VERSION)`.
  pub fn version(&self) -> String {
    self.query_string(gl::VERSION)
  }

  /// The GLSL version string. Wraps
  /// `glGetString(GL_SHADING_LANGUAGE_VERSION)`.
  pub fn shading_language_version(&self) -> String {
    self.query_string(gl::SHADING_LANGUAGE_VERSION)
  }

  pub fn num_extensions(&self) -> usize {
    self.query_i32(gl::NUM_EXTENSIONS) as usize
  }

  /// All supported extensions. Wraps `glGetStringi(GL_EXTENSIONS, ..)`.
  pub fn extensions(&self) -> Vec<String> {
    let count = self.num_extensions();
    let mut extensions = Vec::with_capacity(count);

    for i in 0..count {
      let ptr = unsafe { gl::GetStringi(gl::EXTENSIONS, i as GLuint) };

      if !ptr.is_null() {
        extensions.push(
          unsafe { CStr::from_ptr(ptr as *const _) }
            .to_string_lossy()
            .into_owned(),
        );
      }
    }

    self.check();
    extensions
  }

  /// Whether a named extension is supported.
  pub fn has_extension(&self, extension: &str) -> bool {
    self.extensions().iter().any(|e| e == extension)
  }

  pub fn major_version(&self) -> GLint {
    self.query_i32(gl::MAJOR_VERSION)
  }

  pub fn minor_version(&self) -> GLint {
    self.query_i32(gl::MINOR_VERSION)
  }

  pub fn context_flags(&self) -> GLint {
    self.query_i32(gl::CONTEXT_FLAGS)
  }

  // current bindings

  pub fn current_program(&self) -> Program {
    Program::from_raw(self.query_i32(gl::CURRENT_PROGRAM) as GLuint)
  }

  pub fn array_buffer_binding(&self) -> Buffer {
    Buffer::from_raw(self.query_i32(gl::ARRAY_BUFFER_BINDING) as GLuint)
  }

  pub fn element_array_buffer_binding(&self) -> Buffer {
    Buffer::from_raw(self.query_i32(gl::ELEMENT_ARRAY_BUFFER_BINDING) as GLuint)
  }

  pub fn pixel_pack_buffer_binding(&self) -> Buffer {
    Buffer::from_raw(self.query_i32(gl::PIXEL_PACK_BUFFER_BINDING) as GLuint)
  }

  pub fn pixel_unpack_buffer_binding(&self) -> Buffer {
    Buffer::from_raw(self.query_i32(gl::PIXEL_UNPACK_BUFFER_BINDING) as GLuint)
  }

  pub fn uniform_buffer_binding(&self) -> Buffer {
    Buffer::from_raw(self.query_i32(gl::UNIFORM_BUFFER_BINDING) as GLuint)
  }

  /// Start offset of the uniform buffer range bound at `index`.
  pub fn uniform_buffer_start(&self, index: GLuint) -> GLint64 {
    self.query_i64_indexed(gl::UNIFORM_BUFFER_START, index)
  }

  /// Size of the uniform buffer range bound at `index`.
  pub fn uniform_buffer_size(&self, index: GLuint) -> GLint64 {
    self.query_i64_indexed(gl::UNIFORM_BUFFER_SIZE, index)
  }

  pub fn draw_framebuffer_binding(&self) -> Framebuffer {
    Framebuffer::from_raw(self.query_i32(gl::DRAW_FRAMEBUFFER_BINDING) as GLuint)
  }

  pub fn read_framebuffer_binding(&self) -> Framebuffer {
    Framebuffer::from_raw(self.query_i32(gl::READ_FRAMEBUFFER_BINDING) as GLuint)
  }

  pub fn renderbuffer_binding(&self) -> Renderbuffer {
    Renderbuffer::from_raw(self.query_i32(gl::RENDERBUFFER_BINDING) as GLuint)
  }

  pub fn vertex_array_binding(&self) -> VertexArray {
    VertexArray::from_raw(self.query_i32(gl::VERTEX_ARRAY_BINDING) as GLuint)
  }

  pub fn transform_feedback_buffer_binding(&self) -> TransformFeedback {
    TransformFeedback::from_raw(self.query_i32(gl::TRANSFORM_FEEDBACK_BUFFER_BINDING) as GLuint)
  }

  /// Start offset of the transform feedback buffer range bound at `index`.
  pub fn transform_feedback_buffer_start(&self, index: GLuint) -> GLint64 {
    self.query_i64_indexed(gl::TRANSFORM_FEEDBACK_BUFFER_START, index)
  }

  /// Size of the transform feedback buffer range bound at `index`.
  pub fn transform_feedback_buffer_size(&self, index: GLuint) -> GLint64 {
    self.query_i64_indexed(gl::TRANSFORM_FEEDBACK_BUFFER_SIZE, index)
  }

  pub fn sampler_binding(&self) -> GLuint {
    self.query_i32(gl::SAMPLER_BINDING) as GLuint
  }

  pub fn texture_binding_1d(&self) -> Texture {
    Texture::from_raw(self.query_i32(gl::TEXTURE_BINDING_1D) as GLuint)
  }

  pub fn texture_binding_1d_array(&self) -> Texture {
    Texture::from_raw(self.query_i32(gl::TEXTURE_BINDING_1D_ARRAY) as GLuint)
  }

  pub fn texture_binding_2d(&self) -> Texture {
    Texture::from_raw(self.query_i32(gl::TEXTURE_BINDING_2D) as GLuint)
  }

  pub fn texture_binding_2d_array(&self) -> Texture {
    Texture::from_raw(self.query_i32(gl::TEXTURE_BINDING_2D_ARRAY) as GLuint)
  }

  pub fn texture_binding_2d_multisample(&self) -> Texture {
    Texture::from_raw(self.query_i32(gl::TEXTURE_BINDING_2D_MULTISAMPLE) as GLuint)
  }

  pub fn texture_binding_2d_multisample_array(&self) -> Texture {
    Texture::from_raw(self.query_i32(gl::TEXTURE_BINDING_2D_MULTISAMPLE_ARRAY) as GLuint)
  }

  pub fn texture_binding_3d(&self) -> Texture {
    Texture::from_raw(self.query_i32(gl::TEXTURE_BINDING_3D) as GLuint)
  }

  pub fn texture_binding_buffer(&self) -> Texture {
    Texture::from_raw(self.query_i32(gl::TEXTURE_BINDING_BUFFER) as GLuint)
  }

  pub fn texture_binding_cube_map(&self) -> Texture {
    Texture::from_raw(self.query_i32(gl::TEXTURE_BINDING_CUBE_MAP) as GLuint)
  }

  pub fn texture_binding_rectangle(&self) -> Texture {
    Texture::from_raw(self.query_i32(gl::TEXTURE_BINDING_RECTANGLE) as GLuint)
  }

  /// The active texture unit, as an offset from `GL_TEXTURE0`.
  pub fn active_texture(&self) -> GLuint {
    (self.query_i32(gl::ACTIVE_TEXTURE) as GLenum - gl::TEXTURE0) as GLuint
  }

  // blending

  pub fn blend(&self) -> bool {
    self.query_bool(gl::BLEND)
  }

  pub fn blend_color(&self) -> [GLfloat; 4] {
    self.query_f32_4(gl::BLEND_COLOR)
  }

  pub fn blend_src_rgb(&self) -> GLenum {
    self.query_i32(gl::BLEND_SRC_RGB) as GLenum
  }

  pub fn blend_src_alpha(&self) -> GLenum {
    self.query_i32(gl::BLEND_SRC_ALPHA) as GLenum
  }

  pub fn blend_dst_rgb(&self) -> GLenum {
    self.query_i32(gl::BLEND_DST_RGB) as GLenum
  }

  pub fn blend_dst_alpha(&self) -> GLenum {
    self.query_i32(gl::BLEND_DST_ALPHA) as GLenum
  }

  pub fn blend_equation_rgb(&self) -> GLenum {
    self.query_i32(gl::BLEND_EQUATION_RGB) as GLenum
  }

  pub fn blend_equation_alpha(&self) -> GLenum {
    self.query_i32(gl::BLEND_EQUATION_ALPHA) as GLenum
  }

  // depth

  pub fn depth_test(&self) -> bool {
    self.query_bool(gl::DEPTH_TEST)
  }

  pub fn depth_func(&self) -> GLenum {
    self.query_i32(gl::DEPTH_FUNC) as GLenum
  }

  pub fn depth_clear_value(&self) -> GLfloat {
    self.query_f32(gl::DEPTH_CLEAR_VALUE)
  }

  pub fn depth_range(&self) -> [GLfloat; 2] {
    self.query_f32_2(gl::DEPTH_RANGE)
  }

  // stencil, front and back faces

  pub fn stencil_test(&self) -> bool {
    self.query_bool(gl::STENCIL_TEST)
  }

  pub fn stencil_clear_value(&self) -> GLint {
    self.query_i32(gl::STENCIL_CLEAR_VALUE)
  }

  pub fn stencil_func(&self) -> GLenum {
    self.query_i32(gl::STENCIL_FUNC) as GLenum
  }

  pub fn stencil_ref(&self) -> GLint {
    self.query_i32(gl::STENCIL_REF)
  }

  pub fn stencil_value_mask(&self) -> GLuint {
    self.query_i32(gl::STENCIL_VALUE_MASK) as GLuint
  }

  pub fn stencil_writemask(&self) -> GLuint {
    self.query_i32(gl::STENCIL_WRITEMASK) as GLuint
  }

  pub fn stencil_fail(&self) -> GLenum {
    self.query_i32(gl::STENCIL_FAIL) as GLenum
  }

  pub fn stencil_pass_depth_fail(&self) -> GLenum {
    self.query_i32(gl::STENCIL_PASS_DEPTH_FAIL) as GLenum
  }

  pub fn stencil_pass_depth_pass(&self) -> GLenum {
    self.query_i32(gl::STENCIL_PASS_DEPTH_PASS) as GLenum
  }

  pub fn stencil_back_func(&self) -> GLenum {
    self.query_i32(gl::STENCIL_BACK_FUNC) as GLenum
  }

  pub fn stencil_back_ref(&self) -> GLint {
    self.query_i32(gl::STENCIL_BACK_REF)
  }

  pub fn stencil_back_value_mask(&self) -> GLuint {
    self.query_i32(gl::STENCIL_BACK_VALUE_MASK) as GLuint
  }

  pub fn stencil_back_writemask(&self) -> GLuint {
    self.query_i32(gl::STENCIL_BACK_WRITEMASK) as GLuint
  }

  pub fn stencil_back_fail(&self) -> GLenum {
    self.query_i32(gl::STENCIL_BACK_FAIL) as GLenum
  }

  pub fn stencil_back_pass_depth_fail(&self) -> GLenum {
    self.query_i32(gl::STENCIL_BACK_PASS_DEPTH_FAIL) as GLenum
  }

  pub fn stencil_back_pass_depth_pass(&self) -> GLenum {
    self.query_i32(gl::STENCIL_BACK_PASS_DEPTH_PASS) as GLenum
  }

  // face culling and rasterization

  pub fn cull_face(&self) -> bool {
    self.query_bool(gl::CULL_FACE)
  }

  pub fn cull_face_mode(&self) -> GLenum {
    self.query_i32(gl::CULL_FACE_MODE) as GLenum
  }

  pub fn front_face(&self) -> GLenum {
    self.query_i32(gl::FRONT_FACE) as GLenum
  }

  pub fn provoking_vertex(&self) -> GLenum {
    self.query_i32(gl::PROVOKING_VERTEX) as GLenum
  }

  pub fn polygon_offset_factor(&self) -> GLfloat {
    self.query_f32(gl::POLYGON_OFFSET_FACTOR)
  }

  pub fn polygon_offset_units(&self) -> GLfloat {
    self.query_f32(gl::POLYGON_OFFSET_UNITS)
  }

  pub fn polygon_offset_fill(&self) -> bool {
    self.query_bool(gl::POLYGON_OFFSET_FILL)
  }

  pub fn polygon_offset_line(&self) -> bool {
    self.query_bool(gl::POLYGON_OFFSET_LINE)
  }

  pub fn polygon_offset_point(&self) -> bool {
    self.query_bool(gl::POLYGON_OFFSET_POINT)
  }

  pub fn polygon_smooth(&self) -> bool {
    self.query_bool(gl::POLYGON_SMOOTH)
  }

  pub fn polygon_smooth_hint(&self) -> GLenum {
    self.query_i32(gl::POLYGON_SMOOTH_HINT) as GLenum
  }

  // points and lines

  pub fn point_size(&self) -> GLfloat {
    self.query_f32(gl::POINT_SIZE)
  }

  pub fn point_size_granularity(&self) -> GLfloat {
    self.query_f32(gl::POINT_SIZE_GRANULARITY)
  }

  pub fn point_size_range(&self) -> [GLfloat; 2] {
    self.query_f32_2(gl::POINT_SIZE_RANGE)
  }

  pub fn point_fade_threshold_size(&self) -> GLfloat {
    self.query_f32(gl::POINT_FADE_THRESHOLD_SIZE)
  }

  pub fn program_point_size(&self) -> bool {
    self.query_bool(gl::PROGRAM_POINT_SIZE)
  }

  pub fn line_width(&self) -> GLfloat {
    self.query_f32(gl::LINE_WIDTH)
  }

  pub fn line_smooth(&self) -> bool {
    self.query_bool(gl::LINE_SMOOTH)
  }

  pub fn line_smooth_hint(&self) -> GLenum {
    self.query_i32(gl::LINE_SMOOTH_HINT) as GLenum
  }

  pub fn aliased_line_width_range(&self) -> [GLfloat; 2] {
    self.query_f32_2(gl::ALIASED_LINE_WIDTH_RANGE)
  }

  pub fn smooth_line_width_range(&self) -> [GLfloat; 2] {
    self.query_f32_2(gl::SMOOTH_LINE_WIDTH_RANGE)
  }

  pub fn smooth_line_width_granularity(&self) -> GLfloat {
    self.query_f32(gl::SMOOTH_LINE_WIDTH_GRANULARITY)
  }

  // scissor, logic op, draw/read buffers, misc toggles

  pub fn scissor_test(&self) -> bool {
    self.query_bool(gl::SCISSOR_TEST)
  }

  pub fn scissor_box(&self) -> [GLint; 4] {
    let mut v = [0; 4];
    unsafe { gl::GetIntegerv(gl::SCISSOR_BOX, v.as_mut_ptr()) };
    self.check();
    v
  }

  pub fn color_logic_op(&self) -> bool {
    self.query_bool(gl::COLOR_LOGIC_OP)
  }

  pub fn logic_op_mode(&self) -> GLenum {
    self.query_i32(gl::LOGIC_OP_MODE) as GLenum
  }

  pub fn draw_buffer(&self) -> GLenum {
    self.query_i32(gl::DRAW_BUFFER) as GLenum
  }

  pub fn read_buffer(&self) -> GLenum {
    self.query_i32(gl::READ_BUFFER) as GLenum
  }

  pub fn dither(&self) -> bool {
    self.query_bool(gl::DITHER)
  }

  pub fn doublebuffer(&self) -> bool {
    self.query_bool(gl::DOUBLEBUFFER)
  }

  pub fn stereo(&self) -> bool {
    self.query_bool(gl::STEREO)
  }

  pub fn subpixel_bits(&self) -> GLint {
    self.query_i32(gl::SUBPIXEL_BITS)
  }

  pub fn primitive_restart_index(&self) -> GLuint {
    self.query_i32(gl::PRIMITIVE_RESTART_INDEX) as GLuint
  }

  pub fn fragment_shader_derivative_hint(&self) -> GLenum {
    self.query_i32(gl::FRAGMENT_SHADER_DERIVATIVE_HINT) as GLenum
  }

  pub fn texture_compression_hint(&self) -> GLenum {
    self.query_i32(gl::TEXTURE_COMPRESSION_HINT) as GLenum
  }

  /// Driver timestamp in nanoseconds. Wraps
  /// `glGetInteger64v(GL_TIMESTAMP, ..)`.
  pub fn timestamp(&self) -> GLint64 {
    self.query_i64(gl::TIMESTAMP)
  }

  // multisampling

  pub fn sample_buffers(&self) -> GLint {
    self.query_i32(gl::SAMPLE_BUFFERS)
  }

  pub fn samples(&self) -> GLint {
    self.query_i32(gl::SAMPLES)
  }

  pub fn sample_coverage_value(&self) -> GLfloat {
    self.query_f32(gl::SAMPLE_COVERAGE_VALUE)
  }

  pub fn sample_coverage_invert(&self) -> bool {
    self.query_bool(gl::SAMPLE_COVERAGE_INVERT)
  }

  // pixel store

  pub fn pack_alignment(&self) -> GLint {
    self.query_i32(gl::PACK_ALIGNMENT)
  }

  pub fn pack_image_height(&self) -> GLint {
    self.query_i32(gl::PACK_IMAGE_HEIGHT)
  }

  pub fn pack_lsb_first(&self) -> bool {
    self.query_bool(gl::PACK_LSB_FIRST)
  }

  pub fn pack_row_length(&self) -> GLint {
    self.query_i32(gl::PACK_ROW_LENGTH)
  }

  pub fn pack_skip_images(&self) -> GLint {
    self.query_i32(gl::PACK_SKIP_IMAGES)
  }

  pub fn pack_skip_pixels(&self) -> GLint {
    self.query_i32(gl::PACK_SKIP_PIXELS)
  }

  pub fn pack_skip_rows(&self) -> GLint {
    self.query_i32(gl::PACK_SKIP_ROWS)
  }

  pub fn pack_swap_bytes(&self) -> bool {
    self.query_bool(gl::PACK_SWAP_BYTES)
  }

  pub fn unpack_alignment(&self) -> GLint {
    self.query_i32(gl::UNPACK_ALIGNMENT)
  }

  pub fn unpack_image_height(&self) -> GLint {
    self.query_i32(gl::UNPACK_IMAGE_HEIGHT)
  }

  pub fn unpack_lsb_first(&self) -> bool {
    self.query_bool(gl::UNPACK_LSB_FIRST)
  }

  pub fn unpack_row_length(&self) -> GLint {
    self.query_i32(gl::UNPACK_ROW_LENGTH)
  }

  pub fn unpack_skip_images(&self) -> GLint {
    self.query_i32(gl::UNPACK_SKIP_IMAGES)
  }

  pub fn unpack_skip_pixels(&self) -> GLint {
    self.query_i32(gl::UNPACK_SKIP_PIXELS)
  }

  pub fn unpack_skip_rows(&self) -> GLint {
    self.query_i32(gl::UNPACK_SKIP_ROWS)
  }

  pub fn unpack_swap_bytes(&self) -> bool {
    self.query_bool(gl::UNPACK_SWAP_BYTES)
  }

  // compressed texture formats

  pub fn num_compressed_texture_formats(&self) -> usize {
    self.query_i32(gl::NUM_COMPRESSED_TEXTURE_FORMATS) as usize
  }

  pub fn compressed_texture_formats(&self) -> Vec<GLint> {
    let count = self.num_compressed_texture_formats();
    let mut formats: Vec<GLint> = vec![0; count];

    if count > 0 {
      unsafe { gl::GetIntegerv(gl::COMPRESSED_TEXTURE_FORMATS, formats.as_mut_ptr()) };
      self.check();
    }

    formats
  }

  // implementation limits

  pub fn max_3d_texture_size(&self) -> GLint {
    self.query_i32(gl::MAX_3D_TEXTURE_SIZE)
  }

  pub fn max_array_texture_layers(&self) -> GLint {
    self.query_i32(gl::MAX_ARRAY_TEXTURE_LAYERS)
  }

  pub fn max_clip_distances(&self) -> GLint {
    self.query_i32(gl::MAX_CLIP_DISTANCES)
  }

  pub fn max_color_attachments(&self) -> GLint {
    self.query_i32(gl::MAX_COLOR_ATTACHMENTS)
  }

  pub fn max_color_texture_samples(&self) -> GLint {
    self.query_i32(gl::MAX_COLOR_TEXTURE_SAMPLES)
  }

  pub fn max_combined_fragment_uniform_components(&self) -> GLint {
    self.query_i32(gl::MAX_COMBINED_FRAGMENT_UNIFORM_COMPONENTS)
  }

  pub fn max_combined_geometry_uniform_components(&self) -> GLint {
    self.query_i32(gl::MAX_COMBINED_GEOMETRY_UNIFORM_COMPONENTS)
  }

  pub fn max_combined_texture_image_units(&self) -> GLint {
    self.query_i32(gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS)
  }

  pub fn max_combined_uniform_blocks(&self) -> GLint {
    self.query_i32(gl::MAX_COMBINED_UNIFORM_BLOCKS)
  }

  pub fn max_combined_vertex_uniform_components(&self) -> GLint {
    self.query_i32(gl::MAX_COMBINED_VERTEX_UNIFORM_COMPONENTS)
  }

  pub fn max_cube_map_texture_size(&self) -> GLint {
    self.query_i32(gl::MAX_CUBE_MAP_TEXTURE_SIZE)
  }

  pub fn max_depth_texture_samples(&self) -> GLint {
    self.query_i32(gl::MAX_DEPTH_TEXTURE_SAMPLES)
  }

  pub fn max_draw_buffers(&self) -> GLint {
    self.query_i32(gl::MAX_DRAW_BUFFERS)
  }

  pub fn max_dual_source_draw_buffers(&self) -> GLint {
    self.query_i32(gl::MAX_DUAL_SOURCE_DRAW_BUFFERS)
  }

  pub fn max_elements_indices(&self) -> GLint {
    self.query_i32(gl::MAX_ELEMENTS_INDICES)
  }

  pub fn max_elements_vertices(&self) -> GLint {
    self.query_i32(gl::MAX_ELEMENTS_VERTICES)
  }

  pub fn max_fragment_input_components(&self) -> GLint {
    self.query_i32(gl::MAX_FRAGMENT_INPUT_COMPONENTS)
  }

  pub fn max_fragment_uniform_blocks(&self) -> GLint {
    self.query_i32(gl::MAX_FRAGMENT_UNIFORM_BLOCKS)
  }

  pub fn max_fragment_uniform_components(&self) -> GLint {
    self.query_i32(gl::MAX_FRAGMENT_UNIFORM_COMPONENTS)
  }

  pub fn max_geometry_input_components(&self) -> GLint {
    self.query_i32(gl::MAX_GEOMETRY_INPUT_COMPONENTS)
  }

  pub fn max_geometry_output_components(&self) -> GLint {
    self.query_i32(gl::MAX_GEOMETRY_OUTPUT_COMPONENTS)
  }

  pub fn max_geometry_texture_image_units(&self) -> GLint {
    self.query_i32(gl::MAX_GEOMETRY_TEXTURE_IMAGE_UNITS)
  }

  pub fn max_geometry_uniform_blocks(&self) -> GLint {
    self.query_i32(gl::MAX_GEOMETRY_UNIFORM_BLOCKS)
  }

  pub fn max_geometry_uniform_components(&self) -> GLint {
    self.query_i32(gl::MAX_GEOMETRY_UNIFORM_COMPONENTS)
  }

  pub fn max_integer_samples(&self) -> GLint {
    self.query_i32(gl::MAX_INTEGER_SAMPLES)
  }

  pub fn min_program_texel_offset(&self) -> GLint {
    self.query_i32(gl::MIN_PROGRAM_TEXEL_OFFSET)
  }

  pub fn max_program_texel_offset(&self) -> GLint {
    self.query_i32(gl::MAX_PROGRAM_TEXEL_OFFSET)
  }

  pub fn max_rectangle_texture_size(&self) -> GLint {
    self.query_i32(gl::MAX_RECTANGLE_TEXTURE_SIZE)
  }

  pub fn max_renderbuffer_size(&self) -> GLint {
    self.query_i32(gl::MAX_RENDERBUFFER_SIZE)
  }

  pub fn max_sample_mask_words(&self) -> GLint {
    self.query_i32(gl::MAX_SAMPLE_MASK_WORDS)
  }

  pub fn max_server_wait_timeout(&self) -> GLint64 {
    self.query_i64(gl::MAX_SERVER_WAIT_TIMEOUT)
  }

  pub fn max_texture_buffer_size(&self) -> GLint {
    self.query_i32(gl::MAX_TEXTURE_BUFFER_SIZE)
  }

  pub fn max_texture_image_units(&self) -> GLint {
    self.query_i32(gl::MAX_TEXTURE_IMAGE_UNITS)
  }

  pub fn max_texture_lod_bias(&self) -> GLfloat {
    self.query_f32(gl::MAX_TEXTURE_LOD_BIAS)
  }

  pub fn max_texture_size(&self) -> GLint {
    self.query_i32(gl::MAX_TEXTURE_SIZE)
  }

  pub fn max_uniform_block_size(&self) -> GLint {
    self.query_i32(gl::MAX_UNIFORM_BLOCK_SIZE)
  }

  pub fn max_uniform_buffer_bindings(&self) -> GLint {
    self.query_i32(gl::MAX_UNIFORM_BUFFER_BINDINGS)
  }

  pub fn uniform_buffer_offset_alignment(&self) -> GLint {
    self.query_i32(gl::UNIFORM_BUFFER_OFFSET_ALIGNMENT)
  }

  pub fn max_varying_components(&self) -> GLint {
    self.query_i32(gl::MAX_VARYING_COMPONENTS)
  }

  pub fn max_varying_floats(&self) -> GLint {
    self.query_i32(gl::MAX_VARYING_FLOATS)
  }

  pub fn max_vertex_attribs(&self) -> GLint {
    self.query_i32(gl::MAX_VERTEX_ATTRIBS)
  }

  pub fn max_vertex_output_components(&self) -> GLint {
    self.query_i32(gl::MAX_VERTEX_OUTPUT_COMPONENTS)
  }

  pub fn max_vertex_texture_image_units(&self) -> GLint {
    self.query_i32(gl::MAX_VERTEX_TEXTURE_IMAGE_UNITS)
  }

  pub fn max_vertex_uniform_blocks(&self) -> GLint {
    self.query_i32(gl::MAX_VERTEX_UNIFORM_BLOCKS)
  }

  pub fn max_vertex_uniform_components(&self) -> GLint {
    self.query_i32(gl::MAX_VERTEX_UNIFORM_COMPONENTS)
  }
}
