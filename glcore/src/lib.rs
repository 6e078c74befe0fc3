//! Typed handles over the OpenGL 3.3 core profile.
//!
//! This crate gives every OpenGL resource category a distinct nominal type —
//! [`Buffer`], [`Texture2D`], [`Framebuffer`], [`Program`] and friends — so a
//! buffer handle can never be passed where a texture handle is expected. Each
//! method is a direct forward to the matching driver entry point: no caching,
//! no validation, no lifecycle tracking beyond what the driver itself does.
//!
//! Handles are created through a [`Context`], which owns the error-check flag.
//! When the flag is on, every call that goes through the context queries the
//! driver error state afterwards and, on error, reports the caller's stack and
//! the error label through the [`log`] facade. The report is observational
//! only; the call's own result is unaffected.
//!
//! # Conventions
//!
//! - A handle value of `0` means "no object"/"default", mirroring the native
//!   convention. [`Buffer::unbind`] and friends bind that zero handle.
//! - `delete` consumes the handle by value. Using a copy of a deleted handle
//!   is undefined behavior on the driver side and is not detected here.
//! - All calls must be made from the thread that owns the driver context.
//!   [`Context`] is neither `Send` nor `Sync`; the raw handle types are plain
//!   integers and carry no such guard.
//! - Entry points taking raw pointers and byte counts are `unsafe fn`s with
//!   the exact argument shape of the native call; safe variants derive counts
//!   from slice lengths where the shape allows it.

pub mod buffer;
pub mod context;
mod debug;
pub mod error;
pub mod framebuffer;
pub mod program;
pub mod query;
pub mod renderbuffer;
pub mod shader;
pub mod state;
pub mod texture;
pub mod transform_feedback;
pub mod uniform;
pub mod vertex_array;

pub use crate::buffer::{Buffer, BufferTarget, BufferUsage};
pub use crate::context::{Context, ContextError};
pub use crate::error::{get_error, GlError};
pub use crate::framebuffer::{Attachment, Framebuffer, FramebufferStatus, FramebufferTarget};
pub use crate::program::Program;
pub use crate::renderbuffer::Renderbuffer;
pub use crate::shader::{Shader, ShaderKind};
pub use crate::state::{Capability, Face, StencilFunc, StencilOp, WindingOrder};
pub use crate::texture::{MagFilter, MinFilter, Texture, Texture2D, Wrap};
pub use crate::transform_feedback::{FeedbackPrimitive, TransformFeedback};
pub use crate::uniform::UniformLocation;
pub use crate::vertex_array::VertexArray;
