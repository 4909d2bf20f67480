/*
 * Copyright (c) Radzivon Bartoshyk, 2/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The destination pixel storage could not be resolved or locked for
    /// exclusive access.
    BufferAccess,
    /// Zero width or height.
    InvalidDimensions,
    /// A chroma plane declared a pixel stride of zero.
    InvalidPixelStride,
    PointerOverflow,
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    MinimumDestinationSizeMismatch(MismatchedSize),
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::BufferAccess => {
                f.write_str("Destination pixel buffer could not be resolved or locked")
            }
            ConvertError::InvalidDimensions => {
                f.write_str("Image width and height must be positive")
            }
            ConvertError::InvalidPixelStride => {
                f.write_str("Chroma pixel stride must be at least 1")
            }
            ConvertError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            ConvertError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane must have size at least {}, but it was {}",
                size.expected, size.received
            )),
            ConvertError::ChromaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane must have size at least {}, but it was {}",
                size.expected, size.received
            )),
            ConvertError::MinimumDestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for ConvertError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), ConvertError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(ConvertError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<(), ConvertError> {
    let (product0, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(ConvertError::PointerOverflow);
    }
    let (_, overflow) = product0.overflowing_mul(v2);
    if overflow {
        return Err(ConvertError::PointerOverflow);
    }
    Ok(())
}

/// Checks that the luma plane covers `height` rows of at least `width`
/// bytes at the declared stride. The row after the last one may be
/// unpadded, Android `ByteBuffer` planes routinely end right after the
/// last used byte.
#[inline]
pub(crate) fn check_luma_plane(
    data: &[u8],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), ConvertError> {
    check_overflow_v2(stride as usize, height as usize)?;
    if (stride as usize) < (width as usize) {
        return Err(ConvertError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    let required = stride as usize * (height as usize - 1) + width as usize;
    if data.len() < required {
        return Err(ConvertError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Checks that a 4:2:0 chroma plane covers its half-resolution grid, with
/// samples spaced `pixel_stride` bytes apart within a row.
#[inline]
pub(crate) fn check_chroma_plane(
    data: &[u8],
    stride: u32,
    pixel_stride: u32,
    image_width: u32,
    image_height: u32,
) -> Result<(), ConvertError> {
    if pixel_stride == 0 {
        return Err(ConvertError::InvalidPixelStride);
    }
    let chroma_width = image_width.div_ceil(2) as usize;
    let chroma_height = image_height.div_ceil(2) as usize;
    check_overflow_v2(stride as usize, chroma_height)?;
    check_overflow_v2(chroma_width, pixel_stride as usize)?;
    let last_row_bytes = (chroma_width - 1) * pixel_stride as usize + 1;
    if (stride as usize) < last_row_bytes {
        return Err(ConvertError::ChromaPlaneMinimumSizeMismatch(
            MismatchedSize {
                expected: last_row_bytes,
                received: stride as usize,
            },
        ));
    }
    let required = stride as usize * (chroma_height - 1) + last_row_bytes;
    if data.len() < required {
        return Err(ConvertError::ChromaPlaneMinimumSizeMismatch(
            MismatchedSize {
                expected: required,
                received: data.len(),
            },
        ));
    }
    Ok(())
}

/// Checks that the packed destination covers `height` rows of
/// `width * channels` bytes at the declared stride.
#[inline]
pub(crate) fn check_packed_destination(
    arr: &[u8],
    rgba_stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), ConvertError> {
    check_overflow_v3(width as usize, height as usize, channels)?;
    check_overflow_v2(rgba_stride as usize, height as usize)?;
    let row_bytes = width as usize * channels;
    if (rgba_stride as usize) < row_bytes {
        return Err(ConvertError::MinimumDestinationSizeMismatch(
            MismatchedSize {
                expected: row_bytes,
                received: rgba_stride as usize,
            },
        ));
    }
    let required = rgba_stride as usize * (height as usize - 1) + row_bytes;
    if arr.len() < required {
        return Err(ConvertError::MinimumDestinationSizeMismatch(
            MismatchedSize {
                expected: required,
                received: arr.len(),
            },
        ));
    }
    Ok(())
}
