use tracing::trace;

use super::error::{QRError, QRResult};
use crate::builder::{Module, QR};

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    Checkerboard = 0b000,
    HorizontalLines = 0b001,
    VerticalLines = 0b010,
    DiagonalLines = 0b011,
    LargeCheckerboard = 0b100,
    Fields = 0b101,
    Diamonds = 0b110,
    Meadow = 0b111,
}

impl MaskPattern {
    pub const ALL: [Self; 8] = [
        Self::Checkerboard,
        Self::HorizontalLines,
        Self::VerticalLines,
        Self::DiagonalLines,
        Self::LargeCheckerboard,
        Self::Fields,
        Self::Diamonds,
        Self::Meadow,
    ];

    pub fn new(pattern: u8) -> QRResult<Self> {
        Self::try_from(pattern)
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match self {
            Self::Checkerboard => mask_functions::checkerboard,
            Self::HorizontalLines => mask_functions::horizontal_lines,
            Self::VerticalLines => mask_functions::vertical_lines,
            Self::DiagonalLines => mask_functions::diagonal_lines,
            Self::LargeCheckerboard => mask_functions::large_checkerboard,
            Self::Fields => mask_functions::fields,
            Self::Diamonds => mask_functions::diamonds,
            Self::Meadow => mask_functions::meadow,
        }
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = QRError;
    fn try_from(pattern: u8) -> QRResult<Self> {
        Self::ALL.get(pattern as usize).copied().ok_or(QRError::InvalidMaskingPattern)
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r * c) % 3) + ((r + c) & 1)) & 1 == 0
    }
}


// Penalty & mask selection
//------------------------------------------------------------------------------

pub fn apply_best_mask(qr: &mut QR) -> MaskPattern {
    let best_mask = select_best_mask(qr);
    qr.apply_mask(best_mask);
    best_mask
}

/// Returns the mask with the lowest penalty. On ties the lowest mask id wins.
pub fn select_best_mask(qr: &QR) -> MaskPattern {
    let first = MaskPattern::Checkerboard;
    let init = (first, compute_total_penalty(qr, first));
    let (best_mask, _) = MaskPattern::ALL[1..].iter().fold(init, |best, &m| {
        let pen = compute_total_penalty(qr, m);
        if pen < best.1 {
            (m, pen)
        } else {
            best
        }
    });
    best_mask
}

/// Penalty of `qr` with `mask` applied. Scoring works on its own copy of the
/// grid, so `qr` is left untouched.
pub fn compute_total_penalty(qr: &QR, mask: MaskPattern) -> u32 {
    let mut qr = qr.clone();
    qr.apply_mask(mask);
    let pen = compute_adjacent_penalty(&qr);
    trace!("Mask {mask:?} penalty: {pen}");
    pen
}

fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let w = qr.width() as i16;
    (0..w)
        .map(|i| {
            let row_pen = compute_line_penalty((0..w).map(|j| qr.get(i, j)));
            let col_pen = compute_line_penalty((0..w).map(|j| qr.get(j, i)));
            row_pen + col_pen
        })
        .sum()
}

fn compute_line_penalty(line: impl IntoIterator<Item = Module>) -> u32 {
    let mut line = line.into_iter();
    let Some(mut last) = line.next() else {
        return 0;
    };

    let mut pen = 0;
    let mut run_len = 1;
    for m in line {
        if m == last {
            run_len += 1;
            continue;
        }
        pen += run_penalty(run_len);
        last = m;
        run_len = 1;
    }
    pen + run_penalty(run_len)
}

fn run_penalty(run_len: u32) -> u32 {
    if run_len >= 5 {
        run_len - 2
    } else {
        0
    }
}
