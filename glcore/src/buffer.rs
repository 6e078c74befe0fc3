//! Buffer objects.

use gl::types::*;
use std::mem;
use std::os::raw::c_void;

/// Target slot a [`Buffer`] can be bound to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BufferTarget {
  Array,
  CopyRead,
  CopyWrite,
  ElementArray,
  PixelPack,
  PixelUnpack,
  Texture,
  TransformFeedback,
  Uniform,
}

impl BufferTarget {
  pub fn to_glenum(self) -> GLenum {
    match self {
      BufferTarget::Array => gl::ARRAY_BUFFER,
      BufferTarget::CopyRead => gl::COPY_READ_BUFFER,
      BufferTarget::CopyWrite => gl::COPY_WRITE_BUFFER,
      BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
      BufferTarget::PixelPack => gl::PIXEL_PACK_BUFFER,
      BufferTarget::PixelUnpack => gl::PIXEL_UNPACK_BUFFER,
      BufferTarget::Texture => gl::TEXTURE_BUFFER,
      BufferTarget::TransformFeedback => gl::TRANSFORM_FEEDBACK_BUFFER,
      BufferTarget::Uniform => gl::UNIFORM_BUFFER,
    }
  }
}

/// Usage hint handed to the driver on data upload.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BufferUsage {
  StreamDraw,
  StreamRead,
  StreamCopy,
  StaticDraw,
  StaticRead,
  StaticCopy,
  DynamicDraw,
  DynamicRead,
  DynamicCopy,
}

impl BufferUsage {
  pub fn to_glenum(self) -> GLenum {
    match self {
      BufferUsage::StreamDraw => gl::STREAM_DRAW,
      BufferUsage::StreamRead => gl::STREAM_READ,
      BufferUsage::StreamCopy => gl::STREAM_COPY,
      BufferUsage::StaticDraw => gl::STATIC_DRAW,
      BufferUsage::StaticRead => gl::STATIC_READ,
      BufferUsage::StaticCopy => gl::STATIC_COPY,
      BufferUsage::DynamicDraw => gl::DYNAMIC_DRAW,
      BufferUsage::DynamicRead => gl::DYNAMIC_READ,
      BufferUsage::DynamicCopy => gl::DYNAMIC_COPY,
    }
  }
}

/// A GPU memory block for vertex, index or uniform data.
///
/// Data uploads operate on whatever buffer is bound to the target at call
/// time, exactly like the native API; bind first, then upload.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Buffer(GLuint);

impl Buffer {
  /// Wrap a raw handle. `0` stands for "no buffer".
  pub fn from_raw(handle: GLuint) -> Self {
    Buffer(handle)
  }

  /// The raw handle.
  pub fn handle(self) -> GLuint {
    self.0
  }

  /// Whether this is the zero "no buffer" handle.
  pub fn is_none(self) -> bool {
    self.0 == 0
  }

  /// Bind this buffer to a target. Wraps `glBindBuffer`.
  pub fn bind(self, target: BufferTarget) {
    unsafe { gl::BindBuffer(target.to_glenum(), self.0) };
  }

  /// Bind the zero handle to a target, leaving it without a buffer. Wraps
  /// `glBindBuffer(target, 0)`.
  pub fn unbind(target: BufferTarget) {
    unsafe { gl::BindBuffer(target.to_glenum(), 0) };
  }

  /// Upload data to the buffer bound to `target`, reallocating its store.
  /// Wraps `glBufferData`.
  pub fn data<T>(target: BufferTarget, data: &[T], usage: BufferUsage) {
    unsafe {
      Self::data_raw(
        target,
        mem::size_of_val(data) as GLsizeiptr,
        data.as_ptr() as *const c_void,
        usage,
      )
    }
  }

  /// Raw-pointer form of [`Buffer::data`]; `size` is in bytes.
  ///
  /// # Safety
  ///
  /// `data` must either be null (allocation without initialization) or point
  /// to at least `size` readable bytes.
  pub unsafe fn data_raw(
    target: BufferTarget,
    size: GLsizeiptr,
    data: *const c_void,
    usage: BufferUsage,
  ) {
    gl::BufferData(target.to_glenum(), size, data, usage.to_glenum());
  }

  /// Overwrite part of the store of the buffer bound to `target`, starting
  /// at byte `offset`. Wraps `glBufferSubData`.
  pub fn sub_data<T>(target: BufferTarget, offset: GLintptr, data: &[T]) {
    unsafe {
      Self::sub_data_raw(
        target,
        offset,
        mem::size_of_val(data) as GLsizeiptr,
        data.as_ptr() as *const c_void,
      )
    }
  }

  /// Raw-pointer form of [`Buffer::sub_data`]; `size` is in bytes.
  ///
  /// # Safety
  ///
  /// `data` must point to at least `size` readable bytes.
  pub unsafe fn sub_data_raw(
    target: BufferTarget,
    offset: GLintptr,
    size: GLsizeiptr,
    data: *const c_void,
  ) {
    gl::BufferSubData(target.to_glenum(), offset, size, data);
  }

  /// Release the buffer. The handle must not be used afterwards. Wraps
  /// `glDeleteBuffers(1, ..)`.
  pub fn delete(self) {
    unsafe { gl::DeleteBuffers(1, &self.0) };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn targets_map_to_their_native_constant() {
    assert_eq!(BufferTarget::Array.to_glenum(), gl::ARRAY_BUFFER);
    assert_eq!(BufferTarget::CopyRead.to_glenum(), gl::COPY_READ_BUFFER);
    assert_eq!(BufferTarget::CopyWrite.to_glenum(), gl::COPY_WRITE_BUFFER);
    assert_eq!(
      BufferTarget::ElementArray.to_glenum(),
      gl::ELEMENT_ARRAY_BUFFER
    );
    assert_eq!(BufferTarget::PixelPack.to_glenum(), gl::PIXEL_PACK_BUFFER);
    assert_eq!(
      BufferTarget::PixelUnpack.to_glenum(),
      gl::PIXEL_UNPACK_BUFFER
    );
    assert_eq!(BufferTarget::Texture.to_glenum(), gl::TEXTURE_BUFFER);
    assert_eq!(
      BufferTarget::TransformFeedback.to_glenum(),
      gl::TRANSFORM_FEEDBACK_BUFFER
    );
    assert_eq!(BufferTarget::Uniform.to_glenum(), gl::UNIFORM_BUFFER);
  }

  #[test]
  fn usages_map_to_their_native_constant() {
    assert_eq!(BufferUsage::StreamDraw.to_glenum(), gl::STREAM_DRAW);
    assert_eq!(BufferUsage::StreamRead.to_glenum(), gl::STREAM_READ);
    assert_eq!(BufferUsage::StreamCopy.to_glenum(), gl::STREAM_COPY);
    assert_eq!(BufferUsage::StaticDraw.to_glenum(), gl::STATIC_DRAW);
    assert_eq!(BufferUsage::StaticRead.to_glenum(), gl::STATIC_READ);
    assert_eq!(BufferUsage::StaticCopy.to_glenum(), gl::STATIC_COPY);
    assert_eq!(BufferUsage::DynamicDraw.to_glenum(), gl::DYNAMIC_DRAW);
    assert_eq!(BufferUsage::DynamicRead.to_glenum(), gl::DYNAMIC_READ);
    assert_eq!(BufferUsage::DynamicCopy.to_glenum(), gl::DYNAMIC_COPY);
  }

  #[test]
  fn the_zero_handle_means_no_buffer() {
    assert!(Buffer::from_raw(0).is_none());
    assert!(!Buffer::from_raw(1).is_none());
  }

  #[test]
  fn handles_are_value_transparent() {
    let a = Buffer::from_raw(17);
    let b = Buffer::from_raw(42);

    assert_eq!(a.handle(), 17);
    assert_eq!(b.handle(), 42);
    assert_ne!(a, b);
  }
}
