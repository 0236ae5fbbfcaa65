//! # A const generator for the project-switch icon
//!
//! This crate rasterizes the project-switch logo (white "PS" block letters on a
//! blue background inside a darker blue border) and encodes it as a single
//! image 32x32 Windows ICO file.
//!
//! This is a safe `#![no_std]` crate that does not require [alloc] and has no dependencies.
//!
//! ## Motivation
//!
//! The icon is a fixed graphic, so there is no reason to check in an opaque
//! binary asset or pull in an image stack to produce it. Every function here is
//! const, which means the whole 4286 byte file evaluates at compile time and
//! the `gen_icon` binary only has to write the finished bytes to disk.
//!
//! ## Usage
//!
//! ```
//! const ICON: [u8; const_ico::FILE_BYTES] = const_ico::encode(const_ico::render());
//! assert_eq!(ICON.len(), 4286);
//! assert_eq!(&ICON[..6], &[0, 0, 1, 0, 1, 0]); // reserved, type=icon, one image
//! ```
//!
//! The output is the simplest valid ICO file: the 6 byte icon directory, one
//! 16 byte directory entry, a 40 byte bitmap info header, 32x32 BGRA pixels
//! stored bottom up and the legacy all zero AND mask.
//!
//! [alloc]: <https://doc.rust-lang.org/alloc/index.html>
#![no_std]
#![forbid(unsafe_code)]

mod canvas;
mod consts;
mod encoder;
mod header;
mod logo;
mod pixel;
mod utils;

pub use crate::canvas::Canvas;
pub use crate::consts::FILE_BYTES;
pub use crate::encoder::encode;
pub use crate::logo::render;
pub use crate::pixel::Pixel;
