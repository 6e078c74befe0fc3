//! Framebuffer objects.

use crate::renderbuffer::Renderbuffer;
use crate::texture::Texture;
use gl::types::*;

/// Target slot a [`Framebuffer`] can be bound to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FramebufferTarget {
  /// Drawing target only.
  Draw,
  /// Reading target only.
  Read,
  /// Both targets at once (`GL_FRAMEBUFFER`).
  ReadDraw,
}

impl FramebufferTarget {
  pub fn to_glenum(self) -> GLenum {
    match self {
      FramebufferTarget::Draw => gl::DRAW_FRAMEBUFFER,
      FramebufferTarget::Read => gl::READ_FRAMEBUFFER,
      FramebufferTarget::ReadDraw => gl::FRAMEBUFFER,
    }
  }
}

/// An attachment point of a framebuffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Attachment {
  /// `GL_COLOR_ATTACHMENTi`; the index must be below the driver's
  /// `GL_MAX_COLOR_ATTACHMENTS` (at least 8 on 3.3).
  Color(u32),
  Depth,
  Stencil,
  DepthStencil,
  /// `GL_NONE`; only meaningful for draw/read buffer selection.
  None,
}

impl Attachment {
  pub fn to_glenum(self) -> GLenum {
    match self {
      Attachment::Color(i) => gl::COLOR_ATTACHMENT0 + i,
      Attachment::Depth => gl::DEPTH_ATTACHMENT,
      Attachment::Stencil => gl::STENCIL_ATTACHMENT,
      Attachment::DepthStencil => gl::DEPTH_STENCIL_ATTACHMENT,
      Attachment::None => gl::NONE,
    }
  }
}

/// Completeness status of a framebuffer, as reported by
/// `glCheckFramebufferStatus`.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FramebufferStatus {
  Complete,
  Undefined,
  IncompleteAttachment,
  IncompleteMissingAttachment,
  IncompleteDrawBuffer,
  IncompleteReadBuffer,
  Unsupported,
  IncompleteMultisample,
  IncompleteLayerTargets,
  /// A status outside the 3.3 taxonomy, or `0` when the check itself
  /// errored.
  Unknown(GLenum),
}

impl FramebufferStatus {
  pub fn from_raw(raw: GLenum) -> Self {
    match raw {
      gl::FRAMEBUFFER_COMPLETE => FramebufferStatus::Complete,
      gl::FRAMEBUFFER_UNDEFINED => FramebufferStatus::Undefined,
      gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => FramebufferStatus::IncompleteAttachment,
      gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
        FramebufferStatus::IncompleteMissingAttachment
      }
      gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => FramebufferStatus::IncompleteDrawBuffer,
      gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => FramebufferStatus::IncompleteReadBuffer,
      gl::FRAMEBUFFER_UNSUPPORTED => FramebufferStatus::Unsupported,
      gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => FramebufferStatus::IncompleteMultisample,
      gl::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => FramebufferStatus::IncompleteLayerTargets,
      _ => FramebufferStatus::Unknown(raw),
    }
  }
}

/// A render target aggregate.
///
/// Attachment and buffer-selection calls apply to the framebuffer currently
/// bound to the target, exactly like the native API; bind first.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Framebuffer(GLuint);

impl Framebuffer {
  /// Wrap a raw handle. `0` stands for the default framebuffer.
  pub fn from_raw(handle: GLuint) -> Self {
    Framebuffer(handle)
  }

  /// The raw handle.
  pub fn handle(self) -> GLuint {
    self.0
  }

  /// Whether this is the zero handle, i.e. the default framebuffer.
  pub fn is_default(self) -> bool {
    self.0 == 0
  }

  /// Bind this framebuffer to a target. Wraps `glBindFramebuffer`.
  pub fn bind(self, target: FramebufferTarget) {
    unsafe { gl::BindFramebuffer(target.to_glenum(), self.0) };
  }

  /// Rebind the default framebuffer on a target. Wraps
  /// `glBindFramebuffer(target, 0)`.
  pub fn unbind(target: FramebufferTarget) {
    unsafe { gl::BindFramebuffer(target.to_glenum(), 0) };
  }

  /// Attach a renderbuffer to the framebuffer bound to `target`. Wraps
  /// `glFramebufferRenderbuffer`.
  pub fn attach_renderbuffer(
    target: FramebufferTarget,
    attachment: Attachment,
    renderbuffer: Renderbuffer,
  ) {
    unsafe {
      gl::FramebufferRenderbuffer(
        target.to_glenum(),
        attachment.to_glenum(),
        gl::RENDERBUFFER,
        renderbuffer.handle(),
      )
    };
  }

  /// Attach mipmap `level` of a texture to the framebuffer bound to
  /// `target`. Wraps `glFramebufferTexture`.
  pub fn attach_texture(
    target: FramebufferTarget,
    attachment: Attachment,
    texture: Texture,
    level: GLint,
  ) {
    unsafe {
      gl::FramebufferTexture(
        target.to_glenum(),
        attachment.to_glenum(),
        texture.handle(),
        level,
      )
    };
  }

  /// Select the draw buffers of the bound draw framebuffer. Wraps
  /// `glDrawBuffers`.
  pub fn draw_buffers(attachments: &[Attachment]) {
    let raw: Vec<GLenum> = attachments.iter().map(|a| a.to_glenum()).collect();

    unsafe { gl::DrawBuffers(raw.len() as GLsizei, raw.as_ptr()) };
  }

  /// Select a single draw buffer. Wraps `glDrawBuffer`.
  pub fn draw_buffer(attachment: Attachment) {
    unsafe { gl::DrawBuffer(attachment.to_glenum()) };
  }

  /// Select the read buffer of the bound read framebuffer. Wraps
  /// `glReadBuffer`.
  pub fn read_buffer(attachment: Attachment) {
    unsafe { gl::ReadBuffer(attachment.to_glenum()) };
  }

  /// Completeness status of the framebuffer bound to `target`. Wraps
  /// `glCheckFramebufferStatus`.
  pub fn status(target: FramebufferTarget) -> FramebufferStatus {
    let raw = unsafe { gl::CheckFramebufferStatus(target.to_glenum()) };

    FramebufferStatus::from_raw(raw)
  }

  /// Release the framebuffer. The handle must not be used afterwards. Wraps
  /// `glDeleteFramebuffers(1, ..)`.
  pub fn delete(self) {
    unsafe { gl::DeleteFramebuffers(1, &self.0) };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn targets_map_to_their_native_constant() {
    assert_eq!(FramebufferTarget::Draw.to_glenum(), gl::DRAW_FRAMEBUFFER);
    assert_eq!(FramebufferTarget::Read.to_glenum(), gl::READ_FRAMEBUFFER);
    assert_eq!(FramebufferTarget::ReadDraw.to_glenum(), gl::FRAMEBUFFER);
  }

  #[test]
  fn color_attachments_are_indexed_off_attachment_zero() {
    assert_eq!(Attachment::Color(0).to_glenum(), gl::COLOR_ATTACHMENT0);
    assert_eq!(Attachment::Color(1).to_glenum(), gl::COLOR_ATTACHMENT1);
    assert_eq!(Attachment::Color(15).to_glenum(), gl::COLOR_ATTACHMENT15);
  }

  #[test]
  fn fixed_attachments_map_to_their_native_constant() {
    assert_eq!(Attachment::Depth.to_glenum(), gl::DEPTH_ATTACHMENT);
    assert_eq!(Attachment::Stencil.to_glenum(), gl::STENCIL_ATTACHMENT);
    assert_eq!(
      Attachment::DepthStencil.to_glenum(),
      gl::DEPTH_STENCIL_ATTACHMENT
    );
    assert_eq!(Attachment::None.to_glenum(), gl::NONE);
  }

  #[test]
  fn statuses_classify_from_their_native_constant() {
    assert_eq!(
      FramebufferStatus::from_raw(gl::FRAMEBUFFER_COMPLETE),
      FramebufferStatus::Complete
    );
    assert_eq!(
      FramebufferStatus::from_raw(gl::FRAMEBUFFER_UNDEFINED),
      FramebufferStatus::Undefined
    );
    assert_eq!(
      FramebufferStatus::from_raw(gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT),
      FramebufferStatus::IncompleteAttachment
    );
    assert_eq!(
      FramebufferStatus::from_raw(gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT),
      FramebufferStatus::IncompleteMissingAttachment
    );
    assert_eq!(
      FramebufferStatus::from_raw(gl::FRAMEBUFFER_UNSUPPORTED),
      FramebufferStatus::Unsupported
    );
    assert_eq!(
      FramebufferStatus::from_raw(0),
      FramebufferStatus::Unknown(0)
    );
  }

  #[test]
  fn the_zero_handle_is_the_default_framebuffer() {
    assert!(Framebuffer::from_raw(0).is_default());
    assert!(!Framebuffer::from_raw(2).is_default());
  }
}
