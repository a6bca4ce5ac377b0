//! ZPL encoder for the 5 cm × 2.5 cm badge stock.
//!
//! Geometry is fixed for the Zebra GK420t at its standard 203 dpi dot
//! density: 400 dots wide, 200 dots tall. Encoding is deterministic —
//! identical `(record, copies)` inputs always produce byte-identical ZPL.
//! Batch printing and preview regeneration both rely on this.

use crate::record::Record;

/// Label width in dots (5 cm at 203 dpi).
pub const LABEL_WIDTH_DOTS: u32 = 400;
/// Label height in dots (2.5 cm at 203 dpi).
pub const LABEL_HEIGHT_DOTS: u32 = 200;

/// Floor font height for very long manual-label text, in dots.
const TEXT_FONT_FLOOR: u32 = 16;

/// One encoded label: the ZPL payload plus the copy count it embeds.
///
/// `copies` is carried alongside the payload for callers that report on
/// it; the payload itself already contains the `^PQ` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLabel {
    /// Complete ZPL document, `^XA` through `^XZ`.
    pub zpl: String,
    /// Number of physical copies the printer will produce.
    pub copies: u32,
}

/// Encode a badge label for a normalized record.
///
/// `copies` is a pre-validated positive integer (callers pass 1 when the
/// user did not ask for more). The layout is two text lines over a PDF417
/// barcode carrying the record's barcode payload:
///
/// ```text
/// JUAN PEREZ - 35481
/// F-205 803 CARLOS MARTINEZ
/// ▄▄▄▄▄▄▄▄▄▄▄▄▄▄  (PDF417)
/// ```
pub fn encode_badge(record: &Record, copies: u32) -> EncodedLabel {
    let zpl = format!(
        "^XA\n\
         ^PW{width}\n\
         ^LL{height}\n\
         ^PON\n\
         ^PQ{copies}\n\
         ~SD15\n\
         \n\
         ^FO10,10^A0N,20,20^FD{name} - {subject}^FS\n\
         \n\
         ^FO10,40^A0N,18,18^FDF-{front} {contractor} {contractor_name}^FS\n\
         \n\
         ^FO10,70^BY2,3^B7N,8,8,10,3,N\n\
         ^FD{barcode}^FS\n\
         \n\
         ^XZ",
        width = LABEL_WIDTH_DOTS,
        height = LABEL_HEIGHT_DOTS,
        copies = copies,
        name = record.name,
        subject = record.subject_id,
        front = record.front_id,
        contractor = record.contractor_id,
        contractor_name = record.contractor_name,
        barcode = record.barcode_payload,
    );

    EncodedLabel { zpl, copies }
}

/// Encode a manual free-text label: a single centered text field, no
/// barcode, no structured fields.
///
/// The font height steps down as the text grows so that arbitrary-length
/// input stays within the fixed label area; the `^FB` line clamp bounds
/// the text box even past the floor font size.
pub fn encode_text(text: &str, copies: u32) -> EncodedLabel {
    let height = font_height_for(text.chars().count());
    // Leave a 10-dot margin top and bottom for the field block.
    let max_lines = ((LABEL_HEIGHT_DOTS - 20) / height).max(1);

    let zpl = format!(
        "^XA\n\
         ^PW{width}\n\
         ^LL{label_height}\n\
         ^PON\n\
         ^PQ{copies}\n\
         ~SD15\n\
         \n\
         ^FO2,10^A0N,{font},{font}^FB{block},{lines},0,C,0\n\
         ^FD{text}^FS\n\
         \n\
         ^XZ",
        width = LABEL_WIDTH_DOTS,
        label_height = LABEL_HEIGHT_DOTS,
        copies = copies,
        font = height,
        block = LABEL_WIDTH_DOTS - 4,
        lines = max_lines,
        text = text,
    );

    EncodedLabel { zpl, copies }
}

/// Font height in dots for a manual label of `len` characters.
///
/// Monotonically non-increasing in `len`, down to [`TEXT_FONT_FLOOR`].
fn font_height_for(len: usize) -> u32 {
    match len {
        0..=6 => 56,
        7..=15 => 40,
        16..=25 => 32,
        26..=35 => 26,
        36..=50 => 22,
        _ => TEXT_FONT_FLOOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawRecord;

    fn sample_record() -> Record {
        Record::normalize(&RawRecord {
            name: "Juan Perez".into(),
            subject_id: "35481".into(),
            front_id: "205".into(),
            contractor_id: "803".into(),
            contractor_name: "Carlos Martinez".into(),
            barcode_payload: "35481205803".into(),
        })
    }

    #[test]
    fn badge_layout_contains_expected_fields() {
        let label = encode_badge(&sample_record(), 1);
        assert!(label.zpl.starts_with("^XA"));
        assert!(label.zpl.ends_with("^XZ"));
        assert!(label.zpl.contains("^PW400"));
        assert!(label.zpl.contains("^LL200"));
        assert!(label.zpl.contains("JUAN PEREZ - 35481"));
        assert!(label.zpl.contains("F-205 803 CARLOS MARTINEZ"));
        assert!(label.zpl.contains("^B7N,8,8,10,3,N\n^FD35481205803^FS"));
    }

    #[test]
    fn badge_encoding_is_deterministic() {
        let record = sample_record();
        let first = encode_badge(&record, 3);
        let second = encode_badge(&record, 3);
        assert_eq!(first.zpl, second.zpl);
        assert_eq!(first.zpl.as_bytes(), second.zpl.as_bytes());
    }

    #[test]
    fn copy_count_propagates_into_pq_directive() {
        let label = encode_badge(&sample_record(), 5);
        assert!(label.zpl.contains("^PQ5\n"));
        assert_eq!(label.copies, 5);
    }

    #[test]
    fn single_copy_emits_pq_one() {
        let label = encode_badge(&sample_record(), 1);
        assert!(label.zpl.contains("^PQ1\n"));
    }

    #[test]
    fn text_label_has_no_barcode() {
        let label = encode_text("SPARE PARTS", 1);
        assert!(!label.zpl.contains("^B7"));
        assert!(label.zpl.contains("^FDSPARE PARTS^FS"));
        assert!(label.zpl.contains(",C,0\n"));
    }

    #[test]
    fn shorter_text_gets_larger_font() {
        let short = encode_text("BOX", 1);
        let long = encode_text(&"X".repeat(60), 1);
        assert!(short.zpl.contains("^A0N,56,56"));
        assert!(long.zpl.contains("^A0N,16,16"));
        assert_ne!(short.zpl, long.zpl);
    }

    #[test]
    fn font_steps_are_monotonically_non_increasing() {
        let mut previous = u32::MAX;
        for len in 0..200 {
            let height = font_height_for(len);
            assert!(height <= previous, "font grew at length {len}");
            assert!(height >= TEXT_FONT_FLOOR);
            previous = height;
        }
    }

    #[test]
    fn text_block_stays_inside_label_bounds() {
        for len in [1, 6, 7, 15, 16, 25, 26, 35, 36, 50, 51, 300] {
            let label = encode_text(&"A".repeat(len), 1);
            let font = font_height_for(len);
            let lines = ((LABEL_HEIGHT_DOTS - 20) / font).max(1);
            assert!(
                10 + lines * font <= LABEL_HEIGHT_DOTS,
                "text box overflows at length {len}"
            );
            assert!(label.zpl.contains(&format!("^FB396,{lines},0,C,0")));
        }
    }
}
