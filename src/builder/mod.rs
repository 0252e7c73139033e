mod qr;
mod render;

pub use qr::{Module, QR};
pub use render::{parse_hex_color, RenderOptions};

use tracing::{debug, info};

use crate::common::{apply_best_mask, ECLevel, MaskPattern, QRError, QRResult, Version};

pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, ec_level: ECLevel::H, mask: None }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn metadata(&self) -> String {
        let ver = match self.version {
            Some(v) => v.to_string(),
            None => "None".to_string(),
        };
        format!("{{ Version: {ver}, Ec level: {:?}, Mask: {:?} }}", self.ec_level, self.mask)
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        let data_len = self.data.len();

        debug!("Generating QR {}...", self.metadata());
        let version = match self.version {
            Some(v) if v.capacity(self.ec_level) < data_len => {
                debug!("Data of {data_len} bytes does not fit version {v}");
                return Err(QRError::CapacityExceeded);
            }
            Some(v) => v,
            None => {
                debug!("Finding best version...");
                Version::from_data_len(data_len, self.ec_level)?
            }
        };

        debug!("Constructing QR of version {version}...");
        let mut qr = QR::new(version, self.ec_level);

        debug!("Drawing functional patterns...");
        qr.draw_all_function_patterns();

        let mask = match self.mask {
            Some(m) => {
                debug!("Apply mask {m:?}...");
                qr.apply_mask(m);
                m
            }
            None => {
                debug!("Finding & applying best mask...");
                apply_best_mask(&mut qr)
            }
        };

        let total_modules = qr.width() * qr.width();
        let dark_modules = qr.count_dark_modules();
        info!(
            version = *version,
            ec_level = ?self.ec_level,
            mask = ?mask,
            data_len,
            capacity = version.capacity(self.ec_level),
            dark_modules,
            light_modules = total_modules - dark_modules,
            "QR generated"
        );

        Ok(qr)
    }
}

#[cfg(test)]
mod builder_tests {
    use test_case::test_case;

    use super::QRBuilder;
    use crate::common::{ECLevel, MaskPattern, QRError, Version};

    #[test_case("Hello", ECLevel::H, 1)]
    #[test_case("Hello, world!", ECLevel::H, 2)]
    #[test_case("Hello, world!", ECLevel::L, 1)]
    #[test_case("Hello, world!🌎", ECLevel::L, 1)]
    #[test_case("Hello, world!🌎!", ECLevel::L, 2)]
    #[test_case("", ECLevel::H, 1)]
    fn test_build_selects_smallest_version(data: &str, ecl: ECLevel, exp_ver: u8) {
        let qr = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();
        assert_eq!(*qr.version(), exp_ver);
        assert_eq!(qr.width(), exp_ver as usize * 4 + 17);
        assert_eq!(qr.ec_level(), ecl);
        assert!(qr.mask().is_some());
    }

    #[test]
    fn test_build_is_reproducible() {
        let build = || QRBuilder::new(b"Reproducible").ec_level(ECLevel::Q).build().unwrap();
        let first = build();
        for _ in 0..4 {
            assert_eq!(build(), first);
        }
    }

    #[test]
    fn test_build_with_pinned_version() {
        let ver = Version::new(5).unwrap();
        let qr = QRBuilder::new(b"OK").version(ver).build().unwrap();
        assert_eq!(qr.version(), ver);
        assert_eq!(qr.width(), 37);
    }

    #[test]
    fn test_build_with_pinned_version_too_small() {
        let data = "A".repeat(8);
        let res = QRBuilder::new(data.as_bytes())
            .version(Version::new(1).unwrap())
            .ec_level(ECLevel::H)
            .build();
        assert_eq!(res, Err(QRError::CapacityExceeded));
    }

    #[test]
    fn test_build_with_pinned_mask() {
        for mask in MaskPattern::ALL {
            let qr = QRBuilder::new(b"Masked").mask(mask).build().unwrap();
            assert_eq!(qr.mask(), Some(mask));
        }
    }

    #[test]
    fn test_build_data_overflow() {
        let data = "1234567890".repeat(26);
        let res = QRBuilder::new(data.as_bytes()).ec_level(ECLevel::H).build();
        assert_eq!(res, Err(QRError::CapacityExceeded));
        let qr = QRBuilder::new(data.as_bytes()).ec_level(ECLevel::L).build().unwrap();
        assert_eq!(*qr.version(), 10);
    }
}
