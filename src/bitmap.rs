/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
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
use crate::ConvertError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn as_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug)]
/// Exclusive view over a bitmap's pixel storage while it is locked.
///
/// The mutable borrow *is* the lock: for as long as a `LockedPixels`
/// exists no other access to the backing storage can be expressed, and
/// dropping it releases the buffer on every exit path.
pub struct LockedPixels<'a> {
    pub data: &'a mut [u8],
    /// Stride always means bytes per row.
    pub stride: u32,
}

/// Destination side of the conversion: anything that can surface its pixel
/// storage as a lockable byte buffer.
///
/// This is the seam where a platform bitmap (an Android `Bitmap` behind
/// `AndroidBitmap_lockPixels`, a mapped GPU staging buffer, ...) plugs in.
/// Implementations return [`ConvertError::BufferAccess`] when the backing
/// storage is gone or cannot be acquired exclusively; conversion entry
/// points forward that error without writing anything.
pub trait PixelBufferLock {
    fn lock_pixels(&mut self) -> Result<LockedPixels<'_>, ConvertError>;
}

#[derive(Debug)]
/// Plain in-memory bitmap with 32-bit B-G-R-A pixels.
///
/// Storage is either owned or borrowed from the caller; the row stride may
/// exceed `width * 4` to model hardware row padding.
pub struct BgraBitmap<'a> {
    data: BufferStoreMut<'a, u8>,
    stride: u32,
    width: u32,
    height: u32,
}

impl BgraBitmap<'_> {
    /// Allocates a zeroed bitmap with tightly packed rows.
    pub fn alloc(width: u32, height: u32) -> Self {
        let stride = width as usize * 4;
        BgraBitmap {
            data: BufferStoreMut::Owned(vec![0u8; stride * height as usize]),
            stride: stride as u32,
            width,
            height,
        }
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        self.data.borrow()
    }
}

impl<'a> BgraBitmap<'a> {
    /// Wraps caller-owned pixel storage. `data` must cover
    /// `stride * height` bytes.
    pub fn borrowed(data: &'a mut [u8], stride: u32, width: u32, height: u32) -> Self {
        BgraBitmap {
            data: BufferStoreMut::Borrowed(data),
            stride,
            width,
            height,
        }
    }
}

impl PixelBufferLock for BgraBitmap<'_> {
    fn lock_pixels(&mut self) -> Result<LockedPixels<'_>, ConvertError> {
        Ok(LockedPixels {
            data: self.data.as_mut(),
            stride: self.stride,
        })
    }
}
