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
use crate::error::check_packed_destination;
use crate::numerics::qrshr;
use crate::support::{get_inverse_transform, get_yuv_range, DestinationChannels};
use crate::{Android420Frame, ConvertError, YuvRange, YuvStandardMatrix};

const PRECISION: i32 = 12;

pub(crate) fn android420_to_rgbx<const DESTINATION_CHANNELS: u8>(
    frame: &Android420Frame,
    rgba: &mut [u8],
    rgba_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    let dst_chans: DestinationChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    frame.check_constraints()?;
    check_packed_destination(rgba, rgba_stride, frame.width, frame.height, channels)?;

    let chroma_range = get_yuv_range(8, range);
    let kr_kb = matrix.get_kr_kb();
    let inverse_transform = get_inverse_transform(
        255,
        chroma_range.range_y,
        chroma_range.range_uv,
        kr_kb.kr,
        kr_kb.kb,
    )
    .to_integers(PRECISION as u32);
    let cr_coef = inverse_transform.cr_coef;
    let cb_coef = inverse_transform.cb_coef;
    let y_coef = inverse_transform.y_coef;
    let g_coef_1 = inverse_transform.g_coeff_1;
    let g_coef_2 = inverse_transform.g_coeff_2;

    let bias_y = chroma_range.bias_y as i32;
    let bias_uv = chroma_range.bias_uv as i32;

    let width = frame.width as usize;
    let u_pixel_stride = frame.u.pixel_stride as usize;
    let v_pixel_stride = frame.v.pixel_stride as usize;

    let rgba_rows = rgba.chunks_mut(rgba_stride as usize);
    let y_rows = frame.y.data.chunks(frame.y.stride as usize);

    for (cy, (rgba_row, y_row)) in rgba_rows
        .zip(y_rows)
        .take(frame.height as usize)
        .enumerate()
    {
        // 4:2:0, one chroma row serves two luma rows
        let u_row = &frame.u.data[(cy >> 1) * frame.u.stride as usize..];
        let v_row = &frame.v.data[(cy >> 1) * frame.v.stride as usize..];

        // clip rows to the visible width
        let rgba_row = &mut rgba_row[..width * channels];
        let y_row = &y_row[..width];

        for (ux, (rgba_pair, y_pair)) in rgba_row
            .chunks_mut(channels * 2)
            .zip(y_row.chunks(2))
            .enumerate()
        {
            let cb_value = u_row[ux * u_pixel_stride] as i32 - bias_uv;
            let cr_value = v_row[ux * v_pixel_stride] as i32 - bias_uv;

            for (rgba, &y_src) in rgba_pair.chunks_exact_mut(channels).zip(y_pair.iter()) {
                let y_value = (y_src as i32 - bias_y) * y_coef;

                let r = qrshr::<PRECISION, 8>(y_value + cr_coef * cr_value);
                let b = qrshr::<PRECISION, 8>(y_value + cb_coef * cb_value);
                let g = qrshr::<PRECISION, 8>(y_value - g_coef_1 * cr_value - g_coef_2 * cb_value);

                rgba[dst_chans.get_r_channel_offset()] = r as u8;
                rgba[dst_chans.get_g_channel_offset()] = g as u8;
                rgba[dst_chans.get_b_channel_offset()] = b as u8;
                if dst_chans.has_alpha() {
                    rgba[dst_chans.get_a_channel_offset()] = 255;
                }
            }
        }
    }

    Ok(())
}

/// Convert an Android `YUV_420_888` frame to RGBA format.
///
/// Chroma layout is driven entirely by the frame's pixel strides: 1 reads
/// fully planar U/V arrays, 2 reads interleaved (semi-planar) chroma, the
/// way `android.media.Image` reports camera frames.
///
/// # Arguments
///
/// * `frame` - Source frame planes, strides and dimensions.
/// * `rgba` - A mutable slice to store the converted RGBA data.
/// * `rgba_stride` - The stride (bytes per row) for the RGBA image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// Fails when width or height is zero, when a chroma pixel stride is zero,
/// or when a plane or the destination does not cover the extent implied by
/// its stride and the frame dimensions. Nothing is written on failure.
///
pub fn android420_to_rgba(
    frame: &Android420Frame,
    rgba: &mut [u8],
    rgba_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    android420_to_rgbx::<{ DestinationChannels::Rgba as u8 }>(
        frame,
        rgba,
        rgba_stride,
        range,
        matrix,
    )
}

/// Convert an Android `YUV_420_888` frame to BGRA format.
///
/// This is the byte order [`android420_to_bitmap`](crate::android420_to_bitmap)
/// writes: B, G, R, A ascending in memory.
///
/// # Arguments
///
/// * `frame` - Source frame planes, strides and dimensions.
/// * `bgra` - A mutable slice to store the converted BGRA data.
/// * `bgra_stride` - The stride (bytes per row) for the BGRA image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// Fails when width or height is zero, when a chroma pixel stride is zero,
/// or when a plane or the destination does not cover the extent implied by
/// its stride and the frame dimensions. Nothing is written on failure.
///
pub fn android420_to_bgra(
    frame: &Android420Frame,
    bgra: &mut [u8],
    bgra_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    android420_to_rgbx::<{ DestinationChannels::Bgra as u8 }>(
        frame,
        bgra,
        bgra_stride,
        range,
        matrix,
    )
}

/// Convert an Android `YUV_420_888` frame to RGB format.
///
/// # Arguments
///
/// * `frame` - Source frame planes, strides and dimensions.
/// * `rgb` - A mutable slice to store the converted RGB data.
/// * `rgb_stride` - The stride (bytes per row) for the RGB image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// Fails when width or height is zero, when a chroma pixel stride is zero,
/// or when a plane or the destination does not cover the extent implied by
/// its stride and the frame dimensions. Nothing is written on failure.
///
pub fn android420_to_rgb(
    frame: &Android420Frame,
    rgb: &mut [u8],
    rgb_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    android420_to_rgbx::<{ DestinationChannels::Rgb as u8 }>(frame, rgb, rgb_stride, range, matrix)
}

/// Convert an Android `YUV_420_888` frame to BGR format.
///
/// # Arguments
///
/// * `frame` - Source frame planes, strides and dimensions.
/// * `bgr` - A mutable slice to store the converted BGR data.
/// * `bgr_stride` - The stride (bytes per row) for the BGR image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// Fails when width or height is zero, when a chroma pixel stride is zero,
/// or when a plane or the destination does not cover the extent implied by
/// its stride and the frame dimensions. Nothing is written on failure.
///
pub fn android420_to_bgr(
    frame: &Android420Frame,
    bgr: &mut [u8],
    bgr_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    android420_to_rgbx::<{ DestinationChannels::Bgr as u8 }>(frame, bgr, bgr_stride, range, matrix)
}
