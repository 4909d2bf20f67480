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
use crate::android420_to_rgb::android420_to_rgbx;
use crate::support::DestinationChannels;
use crate::{Android420Frame, ConvertError, PixelBufferLock, YuvRange, YuvStandardMatrix};

/// Convert an Android `YUV_420_888` frame into a lockable bitmap.
///
/// Mirrors the usual camera preview path: lock the bitmap pixels, run the
/// conversion honoring the bitmap's own row stride, release the pixels.
/// The output pixel format is fixed 32-bit B-G-R-A in memory, matching
/// `Bitmap.Config.ARGB_8888` storage on little-endian Android. The lock is
/// released on every exit path, including failed validation.
///
/// Camera frames carry BT.601 limited range unless the device says
/// otherwise, so `YuvRange::Limited` + `YuvStandardMatrix::Bt601`
/// reproduces what `libyuv::Android420ToABGR` bakes in.
///
/// # Arguments
///
/// * `frame` - Source frame planes, strides and dimensions.
/// * `bitmap` - Destination bitmap; must cover `stride * height` bytes once locked.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// [`ConvertError::BufferAccess`] when the bitmap cannot be locked; in that
/// case the conversion routine is never entered. Dimension and extent
/// failures are reported as in [`crate::android420_to_bgra`], with no bytes
/// written to the destination.
///
pub fn android420_to_bitmap(
    frame: &Android420Frame,
    bitmap: &mut impl PixelBufferLock,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    let pixels = bitmap.lock_pixels()?;
    let stride = pixels.stride;
    android420_to_rgbx::<{ DestinationChannels::Bgra as u8 }>(
        frame,
        pixels.data,
        stride,
        range,
        matrix,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        android420_to_bgra, BgraBitmap, ChromaPlaneBuffer, LockedPixels, PlaneBuffer,
    };
    use rand::Rng;

    struct UnlockableBitmap;

    impl PixelBufferLock for UnlockableBitmap {
        fn lock_pixels(&mut self) -> Result<LockedPixels<'_>, ConvertError> {
            Err(ConvertError::BufferAccess)
        }
    }

    fn make_planes(width: u32, height: u32) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let mut rng = rand::thread_rng();
        let chroma_width = width.div_ceil(2) as usize;
        let chroma_height = height.div_ceil(2) as usize;
        (
            (0..width as usize * height as usize).map(|_| rng.gen()).collect(),
            (0..chroma_width * chroma_height).map(|_| rng.gen()).collect(),
            (0..chroma_width * chroma_height).map(|_| rng.gen()).collect(),
        )
    }

    fn make_frame<'a>(
        y_plane: &'a [u8],
        u_plane: &'a [u8],
        v_plane: &'a [u8],
        width: u32,
        height: u32,
    ) -> Android420Frame<'a> {
        Android420Frame {
            y: PlaneBuffer {
                data: y_plane,
                stride: width,
            },
            u: ChromaPlaneBuffer {
                data: u_plane,
                stride: width.div_ceil(2),
                pixel_stride: 1,
            },
            v: ChromaPlaneBuffer {
                data: v_plane,
                stride: width.div_ceil(2),
                pixel_stride: 1,
            },
            width,
            height,
        }
    }

    #[test]
    fn test_bitmap_matches_raw_bgra_path() {
        let width = 64u32;
        let height = 48u32;
        let (y_plane, u_plane, v_plane) = make_planes(width, height);
        let frame = make_frame(&y_plane, &u_plane, &v_plane, width, height);

        let mut bitmap = BgraBitmap::alloc(width, height);
        android420_to_bitmap(
            &frame,
            &mut bitmap,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        )
        .unwrap();

        let mut raw = vec![0u8; width as usize * height as usize * 4];
        android420_to_bgra(
            &frame,
            &mut raw,
            width * 4,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        )
        .unwrap();

        assert_eq!(bitmap.data(), raw.as_slice());
    }

    #[test]
    fn test_lock_failure_reported_before_conversion() {
        let (y_plane, u_plane, v_plane) = make_planes(8, 8);
        let frame = make_frame(&y_plane, &u_plane, &v_plane, 8, 8);
        let result = android420_to_bitmap(
            &frame,
            &mut UnlockableBitmap,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        );
        assert_eq!(result, Err(ConvertError::BufferAccess));
    }

    #[test]
    fn test_lock_failure_wins_over_bad_dimensions() {
        // lock is acquired first, so a dead bitmap reports BufferAccess
        // even when the frame is degenerate too
        let y_plane = [0u8; 1];
        let frame = make_frame(&y_plane, &y_plane, &y_plane, 0, 0);
        let result = android420_to_bitmap(
            &frame,
            &mut UnlockableBitmap,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        );
        assert_eq!(result, Err(ConvertError::BufferAccess));
    }

    #[test]
    fn test_zero_dimensions_leave_bitmap_untouched() {
        let y_plane = [0u8; 4];
        let frame = make_frame(&y_plane, &y_plane, &y_plane, 2, 0);
        let mut backing = vec![0xCDu8; 32];
        let mut bitmap = BgraBitmap::borrowed(&mut backing, 8, 2, 4);
        let result = android420_to_bitmap(
            &frame,
            &mut bitmap,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        );
        assert_eq!(result, Err(ConvertError::InvalidDimensions));
        assert!(backing.iter().all(|&b| b == 0xCD));
    }

    #[test]
    fn test_borrowed_bitmap_with_row_padding() {
        let width = 10u32;
        let height = 6u32;
        let stride = width as usize * 4 + 12;
        let (y_plane, u_plane, v_plane) = make_planes(width, height);
        let frame = make_frame(&y_plane, &u_plane, &v_plane, width, height);

        let mut backing = vec![0xEEu8; stride * height as usize];
        let mut bitmap = BgraBitmap::borrowed(&mut backing, stride as u32, width, height);
        android420_to_bitmap(
            &frame,
            &mut bitmap,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        )
        .unwrap();

        for row in backing.chunks_exact(stride) {
            assert!(row[width as usize * 4..].iter().all(|&b| b == 0xEE));
        }
    }

    #[test]
    fn test_independent_conversions_across_threads() {
        let width = 96u32;
        let height = 72u32;
        let (y_a, u_a, v_a) = make_planes(width, height);
        let (y_b, u_b, v_b) = make_planes(width, height);

        let mut expected_a = BgraBitmap::alloc(width, height);
        let mut expected_b = BgraBitmap::alloc(width, height);
        android420_to_bitmap(
            &make_frame(&y_a, &u_a, &v_a, width, height),
            &mut expected_a,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        )
        .unwrap();
        android420_to_bitmap(
            &make_frame(&y_b, &u_b, &v_b, width, height),
            &mut expected_b,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        )
        .unwrap();

        let run = move |y: Vec<u8>, u: Vec<u8>, v: Vec<u8>| {
            std::thread::spawn(move || {
                let mut bitmap = BgraBitmap::alloc(width, height);
                android420_to_bitmap(
                    &make_frame(&y, &u, &v, width, height),
                    &mut bitmap,
                    YuvRange::Limited,
                    YuvStandardMatrix::Bt601,
                )
                .unwrap();
                bitmap.data().to_vec()
            })
        };
        let handle_a = run(y_a, u_a, v_a);
        let handle_b = run(y_b, u_b, v_b);

        assert_eq!(handle_a.join().unwrap(), expected_a.data());
        assert_eq!(handle_b.join().unwrap(), expected_b.data());
    }
}
