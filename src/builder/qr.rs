use std::ops::Deref;

use crate::common::{Color, ECLevel, MaskPattern, Version};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
        }
    }
}

/// Square module grid of a symbol along with the parameters it was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver, ecl, mask: None }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    /// Returns true if the module at row `r` and column `c` is dark. Empty
    /// modules are never dark.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is not less than [`QR::width`].
    pub fn is_dark(&self, r: usize, c: usize) -> bool {
        assert!(r < self.w && c < self.w, "Coordinate ({r}, {c}) outside {0}x{0} grid", self.w);
        matches!(*self.grid[r * self.w + c], Color::Dark)
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        assert!((0..w).contains(&r), "Row {r} outside 0..{w}");
        assert!((0..w).contains(&c), "Column {c} outside 0..{w}");
        r as usize * self.w + c as usize
    }

    pub(crate) fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub(crate) fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }
}

#[cfg(test)]
mod qr_util_tests {
    use crate::builder::{Module, QR};
    use crate::common::metadata::{Color, ECLevel, Version};

    fn qr_v1() -> QR {
        QR::new(Version::new(1).unwrap(), ECLevel::L)
    }

    #[test]
    fn test_far_corner_index() {
        let mut qr = qr_v1();
        let w = qr.w as i16;
        qr.set(w - 1, w - 1, Module::Func(Color::Dark));
        assert_eq!(qr.get(w - 1, w - 1), Module::Func(Color::Dark));
        assert_eq!(qr.grid()[qr.w * qr.w - 1], Module::Func(Color::Dark));
        assert_eq!(qr.get(0, 0), Module::Empty);
        assert_eq!(qr.count_dark_modules(), 1);
    }

    #[test]
    fn test_is_dark() {
        let mut qr = qr_v1();
        assert!(!qr.is_dark(3, 4));
        qr.set(3, 4, Module::Func(Color::Dark));
        assert!(qr.is_dark(3, 4));
        qr.set(3, 4, Module::Func(Color::Light));
        assert!(!qr.is_dark(3, 4));
        assert_eq!(qr.count_dark_modules(), 0);
    }

    #[test]
    #[should_panic]
    fn test_is_dark_out_of_bound() {
        let qr = qr_v1();
        qr.is_dark(qr.width(), 0);
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bound() {
        let qr = qr_v1();
        let w = qr.w as i16;
        qr.get(w, 0);
    }

    #[test]
    #[should_panic]
    fn test_col_out_of_bound() {
        let qr = qr_v1();
        let w = qr.w as i16;
        qr.get(0, w);
    }

    #[test]
    #[should_panic]
    fn test_negative_row() {
        let qr = qr_v1();
        qr.get(-1, 0);
    }

    #[test]
    #[should_panic]
    fn test_negative_col() {
        let mut qr = qr_v1();
        qr.set(0, -1, Module::Func(Color::Dark));
    }
}

// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        let far = self.w as i16 - 7;
        for (r, c) in [(0, 0), (0, far), (far, 0)] {
            self.draw_finder_pattern_at(r, c);
        }
    }

    // Draws the 7x7 pattern anchored at its top left corner, plus the part of
    // the one module separator ring that falls inside the grid.
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let w = self.w as i16;
        for i in -1..=7 {
            for j in -1..=7 {
                if !(0..w).contains(&(r + i)) || !(0..w).contains(&(c + j)) {
                    continue;
                }
                let is_dark = matches!((i, j), (0 | 6, 0..=6) | (0..=6, 0 | 6) | (2..=4, 2..=4));
                self.set(r + i, c + j, Module::Func(is_dark.into()));
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let last = self.w as i16 - 9;
        self.draw_line(6, 8, 6, last);
        self.draw_line(8, 6, last, 6);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, Module::Func((j & 1 == 0).into()));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, Module::Func((i & 1 == 0).into()));
            }
        }
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
    }
}

#[cfg(test)]
mod all_function_patterns_test {
    use crate::builder::QR;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_all_function_patterns() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::H);
        qr.draw_all_function_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.....Ffffffff\n\
             fFFFFFfF.....FfFFFFFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFFFFFfF.....FfFFFFFf\n\
             fffffffFfFfFfFfffffff\n\
             FFFFFFFF.....FFFFFFFF\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             FFFFFFFF.............\n\
             fffffffF.............\n\
             fFFFFFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFFFFFfF.............\n\
             fffffffF.............\n"
        );
    }

    #[test]
    fn test_function_patterns_are_deterministic() {
        for ver in Version::all() {
            let mut a = QR::new(ver, ECLevel::M);
            let mut b = QR::new(ver, ECLevel::M);
            a.draw_all_function_patterns();
            b.draw_all_function_patterns();
            assert_eq!(a, b);
        }
    }
}

// Masking
//------------------------------------------------------------------------------

impl QR {
    /// Flips every non-empty module selected by `pattern`. Finder and timing
    /// modules are not exempt.
    pub fn apply_mask(&mut self, pattern: MaskPattern) {
        self.mask = Some(pattern);
        let mask_fn = pattern.mask_function();
        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                if let Module::Func(clr) = self.get(r, c) {
                    if mask_fn(r, c) {
                        self.set(r, c, Module::Func(!clr));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod mask_tests {
    use crate::builder::{Module, QR};
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{Color, ECLevel, Version};

    #[test]
    fn test_apply_mask_flips_function_modules() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::H);
        qr.draw_all_function_patterns();
        qr.apply_mask(MaskPattern::Checkerboard);

        assert_eq!(qr.mask(), Some(MaskPattern::Checkerboard));
        assert_eq!(qr.get(0, 0), Module::Func(Color::Light));
        assert_eq!(qr.get(0, 1), Module::Func(Color::Dark));
        assert_eq!(qr.get(6, 8), Module::Func(Color::Light));
        assert_eq!(qr.get(6, 9), Module::Func(Color::Light));
        assert_eq!(qr.get(10, 10), Module::Empty);
    }

    #[test]
    fn test_apply_mask_twice_restores_grid() {
        let mut qr = QR::new(Version::new(3).unwrap(), ECLevel::Q);
        qr.draw_all_function_patterns();
        let grid = qr.grid().to_vec();
        for mask in MaskPattern::ALL {
            qr.apply_mask(mask);
            qr.apply_mask(mask);
            assert_eq!(qr.grid(), grid.as_slice());
        }
    }
}
