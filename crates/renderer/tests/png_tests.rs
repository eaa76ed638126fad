//! Tests for PNG encoding.
//!
//! Decodes the produced chunks with flate2 and checks the scanlines against the
//! input pixels.

use std::io::Read;

use renderer::png::{create_png, create_png_auto};

// ============================================================================
// Helper functions
// ============================================================================

/// `(type, data)` for every chunk after the signature.
fn chunks(png: &[u8]) -> Vec<([u8; 4], Vec<u8>)> {
    let mut out = Vec::new();
    let mut pos = 8;
    while pos < png.len() {
        let len = u32::from_be_bytes([png[pos], png[pos + 1], png[pos + 2], png[pos + 3]]) as usize;
        let kind = [png[pos + 4], png[pos + 5], png[pos + 6], png[pos + 7]];
        let data = png[pos + 8..pos + 8 + len].to_vec();

        let crc = u32::from_be_bytes([
            png[pos + 8 + len],
            png[pos + 9 + len],
            png[pos + 10 + len],
            png[pos + 11 + len],
        ]);
        assert_eq!(crc, crc32fast::hash(&png[pos + 4..pos + 8 + len]));

        out.push((kind, data));
        pos += 12 + len;
    }
    out
}

fn inflate(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    flate2::read::ZlibDecoder::new(data)
        .read_to_end(&mut out)
        .unwrap();
    out
}

/// Horizontal gray bands, one color per `band` rows.
fn banded_pixels(width: usize, height: usize, band: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let v = (255 - (y / band * 32).min(255)) as u8;
        for _ in 0..width {
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    pixels
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_indexed_scanlines_decode_to_input() {
    let (width, height) = (7, 5);
    let pixels = banded_pixels(width, height, 2);
    let png = create_png_auto(&pixels, width, height).unwrap();
    let chunks = chunks(&png);

    let kinds: Vec<&[u8; 4]> = chunks.iter().map(|(k, _)| k).collect();
    assert_eq!(kinds, vec![b"IHDR", b"PLTE", b"IDAT", b"IEND"]);

    let plte = &chunks[1].1;
    let raw = inflate(&chunks[2].1);
    assert_eq!(raw.len(), height * (1 + width));

    for (y, line) in raw.chunks_exact(1 + width).enumerate() {
        assert_eq!(line[0], 0, "filter byte");
        for (x, &idx) in line[1..].iter().enumerate() {
            let i = (y * width + x) * 4;
            let rgb = &plte[idx as usize * 3..idx as usize * 3 + 3];
            assert_eq!(rgb, &pixels[i..i + 3]);
        }
    }
}

#[test]
fn test_transparent_palette_has_trns() {
    let pixels = [255, 255, 255, 255, 0, 0, 0, 0];
    let png = create_png_auto(&pixels, 2, 1).unwrap();
    let chunks = chunks(&png);
    let trns = chunks.iter().find(|(k, _)| k == b"tRNS").unwrap();
    assert_eq!(trns.1, vec![255, 0]);
}

#[test]
fn test_rgba_scanlines_decode_to_input() {
    let (width, height) = (20, 20);
    let pixels: Vec<u8> = (0..width * height)
        .flat_map(|i| [(i % 256) as u8, (i / 256) as u8, 7, 255])
        .collect();
    let png = create_png(&pixels, width, height).unwrap();
    let chunks = chunks(&png);
    assert_eq!(chunks[0].1[9], 6);

    let raw = inflate(&chunks[1].1);
    for (y, line) in raw.chunks_exact(1 + width * 4).enumerate() {
        assert_eq!(line[0], 0);
        assert_eq!(&line[1..], &pixels[y * width * 4..(y + 1) * width * 4]);
    }
}

#[test]
fn test_large_banded_image_uses_palette() {
    // Above the parallel extraction threshold.
    let (width, height) = (256, 256);
    let pixels = banded_pixels(width, height, 32);
    let indexed = create_png_auto(&pixels, width, height).unwrap();
    let rgba = create_png(&pixels, width, height).unwrap();

    assert_eq!(indexed[25], 3);
    assert!(indexed.len() < rgba.len());
}
