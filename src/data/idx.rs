//! Reader for the IDX binary format used by MNIST-style digit datasets.
//!
//! # IDX3 image file layout
//! ```text
//! bytes  0-1:   0x00 0x00   (reserved, must be zero)
//! byte   2:     0x08        (dtype = uint8)
//! byte   3:     0x03        (number of dimensions = 3)
//! bytes  4-7:   N           (number of images, big-endian u32)
//! bytes  8-11:  rows        (image height in pixels, big-endian u32)
//! bytes 12-15:  cols        (image width in pixels, big-endian u32)
//! bytes 16..:   N * rows * cols bytes, row-major, uint8
//! ```
//!
//! # IDX1 label file layout
//! ```text
//! bytes  0-1:   0x00 0x00   (reserved, must be zero)
//! byte   2:     0x08        (dtype = uint8)
//! byte   3:     0x01        (number of dimensions = 1)
//! bytes  4-7:   N           (number of labels, big-endian u32)
//! bytes  8..:   N bytes, each a class index in [0, n_classes)
//! ```

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::train::example::TrainingExample;

const IMAGE_HEADER_LEN: usize = 16;
const LABEL_HEADER_LEN: usize = 8;

/// Reads an image file and a label file from disk and parses them with
/// [`parse_idx_pair`].
pub fn load_idx_pair<P: AsRef<Path>, Q: AsRef<Path>>(
    image_path: P,
    label_path: Q,
    n_classes: usize,
) -> Result<Vec<TrainingExample>> {
    let image_bytes = std::fs::read(image_path.as_ref())?;
    let label_bytes = std::fs::read(label_path.as_ref())?;
    let examples = parse_idx_pair(&image_bytes, &label_bytes, n_classes)?;
    info!(
        examples = examples.len(),
        images = %image_path.as_ref().display(),
        labels = %label_path.as_ref().display(),
        "loaded IDX dataset"
    );
    Ok(examples)
}

/// Parses an IDX3 image buffer and an IDX1 label buffer into training
/// examples.
///
/// Each input holds `rows * cols` pixels divided by 255.0, so values lie in
/// `[0.0, 1.0]`. Each target is a one-hot vector of length `n_classes`.
pub fn parse_idx_pair(
    image_bytes: &[u8],
    label_bytes: &[u8],
    n_classes: usize,
) -> Result<Vec<TrainingExample>> {
    if n_classes < 2 {
        return Err(dataset(format!("n_classes must be at least 2, got {}.", n_classes)));
    }

    // ── Image file validation ───────────────────────────────────────────────

    check_header(image_bytes, "image", IMAGE_HEADER_LEN, 3)?;
    let n_items = read_be_u32(image_bytes, 4);
    let rows = read_be_u32(image_bytes, 8);
    let cols = read_be_u32(image_bytes, 12);

    let n_pixels = rows.checked_mul(cols).ok_or_else(|| {
        dataset(format!(
            "IDX image file: rows * cols overflows usize (rows={}, cols={}).",
            rows, cols
        ))
    })?;
    let image_data_len = n_items.checked_mul(n_pixels).ok_or_else(|| {
        dataset(format!(
            "IDX image file: n_items * n_pixels overflows usize (n_items={}, n_pixels={}).",
            n_items, n_pixels
        ))
    })?;
    if image_bytes.len() - IMAGE_HEADER_LEN < image_data_len {
        return Err(dataset(format!(
            "IDX image file too short: header declares {} items of {}×{} pixels \
             ({} data bytes needed after header), but file is only {} bytes total.",
            n_items,
            rows,
            cols,
            image_data_len,
            image_bytes.len()
        )));
    }
    if n_items > 0 && n_pixels == 0 {
        return Err(dataset("IDX image file: images have zero pixels.".to_owned()));
    }

    // ── Label file validation ───────────────────────────────────────────────

    check_header(label_bytes, "label", LABEL_HEADER_LEN, 1)?;
    let label_count = read_be_u32(label_bytes, 4);
    if label_count != n_items {
        return Err(dataset(format!(
            "IDX file mismatch: image file declares {} items but label file declares {}.",
            n_items, label_count
        )));
    }
    if label_bytes.len() - LABEL_HEADER_LEN < n_items {
        return Err(dataset(format!(
            "IDX label file too short: header declares {} labels but file is only {} bytes.",
            n_items,
            label_bytes.len()
        )));
    }

    // ── Build examples ──────────────────────────────────────────────────────

    let image_data = &image_bytes[IMAGE_HEADER_LEN..IMAGE_HEADER_LEN + image_data_len];
    let label_data = &label_bytes[LABEL_HEADER_LEN..LABEL_HEADER_LEN + n_items];

    image_data
        .chunks_exact(n_pixels.max(1))
        .zip(label_data)
        .enumerate()
        .map(|(i, (pixels, &class_idx))| {
            let class = class_idx as usize;
            if class >= n_classes {
                return Err(dataset(format!(
                    "IDX label at index {}: class index {} is out of range for n_classes={}.",
                    i, class, n_classes
                )));
            }
            let input = pixels.iter().map(|&px| px as f64 / 255.0).collect();
            let mut target = vec![0.0f64; n_classes];
            target[class] = 1.0;
            Ok(TrainingExample::new(input, target))
        })
        .collect()
}

/// Validates the 4-byte magic prefix and the minimum header length.
fn check_header(bytes: &[u8], kind: &str, header_len: usize, dims: u8) -> Result<()> {
    if bytes.len() < header_len {
        return Err(dataset(format!(
            "IDX {} file too short: expected at least {} header bytes, got {}.",
            kind,
            header_len,
            bytes.len()
        )));
    }
    if bytes[0] != 0x00 || bytes[1] != 0x00 {
        return Err(dataset(format!(
            "IDX {} file: bytes 0-1 must be 0x00 0x00 (reserved), got 0x{:02X} 0x{:02X}.",
            kind, bytes[0], bytes[1]
        )));
    }
    if bytes[2] != 0x08 {
        return Err(dataset(format!(
            "IDX {} file: byte 2 (dtype) must be 0x08 (uint8), got 0x{:02X}.",
            kind, bytes[2]
        )));
    }
    if bytes[3] != dims {
        return Err(dataset(format!(
            "IDX {} file: byte 3 (dimensions) must be {}, got {}.",
            kind, dims, bytes[3]
        )));
    }
    Ok(())
}

/// Big-endian u32 at `offset`; the caller has already checked the length.
fn read_be_u32(bytes: &[u8], offset: usize) -> usize {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]) as usize
}

fn dataset(msg: String) -> Error {
    Error::Dataset(msg)
}
