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
use crate::error::{check_chroma_plane, check_luma_plane};
use crate::ConvertError;

#[derive(Debug, Clone, Copy)]
/// Read-only view over one image plane.
pub struct PlaneBuffer<'a> {
    pub data: &'a [u8],
    /// Stride always means bytes per row.
    pub stride: u32,
}

#[derive(Debug, Clone, Copy)]
/// Read-only view over a chroma plane of an Android `YUV_420_888` frame.
///
/// `pixel_stride` is the byte distance between two consecutive chroma
/// samples within a row: 1 for fully planar chroma (I420-like), 2 for
/// interleaved chroma (NV12/NV21-like). With interleaved chroma the U and V
/// slices usually alias the same underlying buffer offset by one byte,
/// which is fine since both are immutable borrows.
pub struct ChromaPlaneBuffer<'a> {
    pub data: &'a [u8],
    /// Stride always means bytes per row.
    pub stride: u32,
    pub pixel_stride: u32,
}

#[derive(Debug, Clone, Copy)]
/// Non-mutable representation of an Android `YUV_420_888` frame.
///
/// The layout mirrors what `android.media.Image` hands out for camera
/// frames: one full-resolution luma plane and two half-resolution chroma
/// planes, each with its own row stride, the chroma planes additionally
/// with a pixel stride that distinguishes planar from semi-planar storage.
pub struct Android420Frame<'a> {
    pub y: PlaneBuffer<'a>,
    pub u: ChromaPlaneBuffer<'a>,
    pub v: ChromaPlaneBuffer<'a>,
    pub width: u32,
    pub height: u32,
}

impl Android420Frame<'_> {
    pub fn check_constraints(&self) -> Result<(), ConvertError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::InvalidDimensions);
        }
        check_luma_plane(self.y.data, self.y.stride, self.width, self.height)?;
        check_chroma_plane(
            self.u.data,
            self.u.stride,
            self.u.pixel_stride,
            self.width,
            self.height,
        )?;
        check_chroma_plane(
            self.v.data,
            self.v.stride,
            self.v.pixel_stride,
            self.width,
            self.height,
        )?;
        Ok(())
    }
}
