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
use android420::{
    android420_to_bitmap, android420_to_rgba, Android420Frame, BgraBitmap, ChromaPlaneBuffer,
    PlaneBuffer, YuvRange, YuvStandardMatrix,
};
use std::time::Instant;

/// Synthesizes a camera-like test frame: luma gradient, chroma sweep.
fn make_test_frame(width: u32, height: u32) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let chroma_width = width.div_ceil(2) as usize;
    let chroma_height = height.div_ceil(2) as usize;

    let mut y_plane = vec![0u8; width as usize * height as usize];
    for (row, chunk) in y_plane.chunks_exact_mut(width as usize).enumerate() {
        for (col, y) in chunk.iter_mut().enumerate() {
            *y = (16 + (col * 219 / width as usize + row * 219 / height as usize) / 2) as u8;
        }
    }

    let mut u_plane = vec![0u8; chroma_width * chroma_height];
    let mut v_plane = vec![0u8; chroma_width * chroma_height];
    for row in 0..chroma_height {
        for col in 0..chroma_width {
            u_plane[row * chroma_width + col] = (16 + col * 224 / chroma_width) as u8;
            v_plane[row * chroma_width + col] = (16 + row * 224 / chroma_height) as u8;
        }
    }
    (y_plane, u_plane, v_plane)
}

fn main() {
    let width = 1280u32;
    let height = 720u32;
    let chroma_width = width.div_ceil(2) as usize;
    let chroma_height = height.div_ceil(2) as usize;

    let (y_plane, u_plane, v_plane) = make_test_frame(width, height);

    let mut uv_plane = vec![0u8; chroma_width * chroma_height * 2];
    for i in 0..chroma_width * chroma_height {
        uv_plane[i * 2] = u_plane[i];
        uv_plane[i * 2 + 1] = v_plane[i];
    }

    let y = PlaneBuffer {
        data: &y_plane,
        stride: width,
    };
    let planar = Android420Frame {
        y,
        u: ChromaPlaneBuffer {
            data: &u_plane,
            stride: chroma_width as u32,
            pixel_stride: 1,
        },
        v: ChromaPlaneBuffer {
            data: &v_plane,
            stride: chroma_width as u32,
            pixel_stride: 1,
        },
        width,
        height,
    };
    let interleaved = Android420Frame {
        y,
        u: ChromaPlaneBuffer {
            data: &uv_plane,
            stride: chroma_width as u32 * 2,
            pixel_stride: 2,
        },
        v: ChromaPlaneBuffer {
            data: &uv_plane[1..],
            stride: chroma_width as u32 * 2,
            pixel_stride: 2,
        },
        width,
        height,
    };

    let mut bitmap_planar = BgraBitmap::alloc(width, height);
    let start_time = Instant::now();
    android420_to_bitmap(
        &planar,
        &mut bitmap_planar,
        YuvRange::Limited,
        YuvStandardMatrix::Bt601,
    )
    .unwrap();
    println!("android420_to_bitmap planar time: {:?}", start_time.elapsed());

    let mut bitmap_interleaved = BgraBitmap::alloc(width, height);
    let start_time = Instant::now();
    android420_to_bitmap(
        &interleaved,
        &mut bitmap_interleaved,
        YuvRange::Limited,
        YuvStandardMatrix::Bt601,
    )
    .unwrap();
    println!(
        "android420_to_bitmap interleaved time: {:?}",
        start_time.elapsed()
    );

    assert_eq!(bitmap_planar.data(), bitmap_interleaved.data());

    let mut rgba = vec![0u8; width as usize * height as usize * 4];
    android420_to_rgba(
        &planar,
        &mut rgba,
        width * 4,
        YuvRange::Limited,
        YuvStandardMatrix::Bt601,
    )
    .unwrap();

    image::save_buffer(
        "converted_frame.png",
        &rgba,
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )
    .unwrap();
}
