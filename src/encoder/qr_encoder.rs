//! Main QR encoder that orchestrates the encoding pipeline
//!
//! segments -> version selection -> padded data codewords -> ECC blocks ->
//! interleaving -> placement -> mask selection -> format information

use tracing::debug;

use super::bitstream::{BitBuffer, place_codewords};
use super::function_patterns::SymbolGrid;
use super::mask::{apply_mask, penalty_score};
use super::modes::Segment;
use super::reed_solomon::ReedSolomonEncoder;
use super::tables::{ec_block_info, num_data_codewords, num_raw_codewords};
use crate::error::{QrError, Result};
use crate::models::{ECLevel, MaskPattern, QrCode, Version};

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Capability that turns a payload into a QR symbol
pub trait QrEncoder {
    /// Encode `value` into a complete symbol
    fn encode(&self, value: &[u8]) -> Result<QrCode>;
}

/// Encoding parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Minimum error correction level
    pub ec_level: ECLevel,
    /// Smallest version considered
    pub min_version: Version,
    /// Largest version considered
    pub max_version: Version,
    /// Fixed mask, or `None` to pick the lowest-penalty mask
    pub mask: Option<MaskPattern>,
    /// Raise the EC level while the data still fits the chosen version
    pub boost_ec: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::L,
            min_version: Version::MIN,
            max_version: Version::MAX,
            mask: None,
            boost_ec: false,
        }
    }
}

impl EncodeOptions {
    /// Set the minimum error correction level
    pub fn with_ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Restrict version selection to `min..=max`
    pub fn with_version_range(mut self, min: Version, max: Version) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Force a mask pattern instead of scoring all eight
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Enable or disable EC level boosting
    pub fn with_boost_ec(mut self, boost: bool) -> Self {
        self.boost_ec = boost;
        self
    }
}

/// Default QR Model 2 encoder
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Create an encoder with the given options
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Options this encoder was built with
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode pre-built segments into a symbol
    pub fn encode_segments(&self, segments: &[Segment]) -> Result<QrCode> {
        let opts = &self.options;
        if opts.min_version > opts.max_version {
            return Err(QrError::InvalidVersionRange {
                min: opts.min_version.number(),
                max: opts.max_version.number(),
            });
        }

        let (version, used_bits) = select_version(segments, opts)?;

        let mut ec_level = opts.ec_level;
        if opts.boost_ec {
            for level in ECLevel::ALL.into_iter().filter(|&l| l > opts.ec_level) {
                if used_bits <= num_data_codewords(version, level) * 8 {
                    ec_level = level;
                }
            }
            if ec_level != opts.ec_level {
                debug!(from = ?opts.ec_level, to = ?ec_level, "boosted error correction level");
            }
        }

        let data = data_codewords(segments, version, ec_level);
        let codewords = add_ecc_and_interleave(&data, version, ec_level);

        let mut grid = SymbolGrid::new(version);
        place_codewords(&mut grid, &codewords);

        let mask = match opts.mask {
            Some(mask) => mask,
            None => choose_mask(&mut grid, ec_level),
        };
        apply_mask(&mut grid, mask);
        grid.draw_format_bits(ec_level, mask);

        debug!(
            version = version.number(),
            ec_level = ?ec_level,
            mask = mask.bits(),
            data_bits = used_bits,
            "encoded QR symbol"
        );

        Ok(QrCode {
            version,
            error_correction: ec_level,
            mask_pattern: mask,
            modules: grid.into_modules(),
        })
    }
}

impl QrEncoder for Encoder {
    fn encode(&self, value: &[u8]) -> Result<QrCode> {
        self.encode_segments(&[Segment::auto(value)])
    }
}

fn segments_bits(segments: &[Segment], version: Version) -> Option<usize> {
    segments
        .iter()
        .try_fold(0usize, |acc, s| Some(acc + s.total_bits(version)?))
}

/// Smallest version in range whose data capacity holds every segment
fn select_version(segments: &[Segment], opts: &EncodeOptions) -> Result<(Version, usize)> {
    for version in opts.min_version.up_to(opts.max_version) {
        let capacity = num_data_codewords(version, opts.ec_level) * 8;
        if let Some(used) = segments_bits(segments, version) {
            if used <= capacity {
                return Ok((version, used));
            }
        }
    }

    let version = opts.max_version;
    let bits = segments
        .iter()
        .map(|s| 4 + s.mode.char_count_bits(version) + s.data.len())
        .sum();
    Err(QrError::DataTooLong {
        bits,
        capacity: num_data_codewords(version, opts.ec_level) * 8,
        version: version.number(),
    })
}

/// Segment bits followed by terminator, byte alignment and pad codewords
pub(crate) fn data_codewords(segments: &[Segment], version: Version, ec_level: ECLevel) -> Vec<u8> {
    let capacity = num_data_codewords(version, ec_level) * 8;
    let mut bits = BitBuffer::new();
    for segment in segments {
        segment.write_to(version, &mut bits);
    }

    let terminator = (capacity - bits.len()).min(4);
    bits.append_bits(0, terminator);
    let align = (8 - bits.len() % 8) % 8;
    bits.append_bits(0, align);

    let mut bytes = bits.to_bytes();
    for &pad in PAD_BYTES.iter().cycle() {
        if bytes.len() * 8 >= capacity {
            break;
        }
        bytes.push(pad);
    }
    bytes
}

/// Split data into blocks, append each block's ECC, then interleave
pub(crate) fn add_ecc_and_interleave(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<u8> {
    let info = ec_block_info(version, ec_level);
    let raw_codewords = num_raw_codewords(version);
    let num_blocks = info.num_blocks;
    let ecc_len = info.ecc_per_block;
    let num_short_blocks = num_blocks - raw_codewords % num_blocks;
    let short_block_len = raw_codewords / num_blocks;
    let rs = ReedSolomonEncoder::new(ecc_len);

    let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
    let mut k = 0;
    for i in 0..num_blocks {
        let data_len = short_block_len - ecc_len + usize::from(i >= num_short_blocks);
        let dat = &data[k..k + data_len];
        k += data_len;

        let mut block = dat.to_vec();
        // Placeholder so every block has the same length; skipped below
        if i < num_short_blocks {
            block.push(0);
        }
        block.extend(rs.encode(dat));
        blocks.push(block);
    }

    let mut result = Vec::with_capacity(raw_codewords);
    for i in 0..=short_block_len {
        for (j, block) in blocks.iter().enumerate() {
            if i != short_block_len - ecc_len || j >= num_short_blocks {
                result.push(block[i]);
            }
        }
    }
    result
}

/// Try every mask and keep the one with the lowest penalty
fn choose_mask(grid: &mut SymbolGrid, ec_level: ECLevel) -> MaskPattern {
    let mut best = MaskPattern::Pattern0;
    let mut best_score = usize::MAX;
    for mask in MaskPattern::ALL {
        apply_mask(grid, mask);
        grid.draw_format_bits(ec_level, mask);
        let score = penalty_score(grid);
        debug!(mask = mask.bits(), score, "mask penalty");
        if score < best_score {
            best_score = score;
            best = mask;
        }
        apply_mask(grid, mask);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::bch::decode_format_bits;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_default_options_are_fixed() {
        let expected = EncodeOptions {
            ec_level: ECLevel::L,
            min_version: Version::MIN,
            max_version: Version::MAX,
            mask: None,
            boost_ec: false,
        };
        assert_eq!(EncodeOptions::default(), expected);
        assert_eq!(*Encoder::default().options(), expected);
    }

    fn encoder(ec_level: ECLevel) -> Encoder {
        Encoder::new(
            EncodeOptions::default()
                .with_ec_level(ec_level)
                .with_boost_ec(false),
        )
    }

    /// Read the first copy of the format information back out of a symbol
    fn read_format_bits(qr: &QrCode) -> u16 {
        let mut bits = 0u16;
        let mut put = |i: usize, dark: bool| bits |= (dark as u16) << i;
        for i in 0..6 {
            put(i, qr.module(8, i));
        }
        put(6, qr.module(8, 7));
        put(7, qr.module(8, 8));
        put(8, qr.module(7, 8));
        for i in 9..15 {
            put(i, qr.module(14 - i, 8));
        }
        bits
    }

    /// Second copy: top-right row 8 and bottom-left column 8
    fn read_format_bits_second(qr: &QrCode) -> u16 {
        let size = qr.size();
        let mut bits = 0u16;
        for i in 0..8 {
            bits |= (qr.module(size - 1 - i, 8) as u16) << i;
        }
        for i in 8..15 {
            bits |= (qr.module(8, size - 15 + i) as u16) << i;
        }
        bits
    }

    #[test]
    fn test_hello_world_codewords() {
        let segments = [Segment::auto(b"HELLO WORLD")];
        let data = data_codewords(&segments, v(1), ECLevel::M);
        assert_eq!(
            data,
            vec![32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17]
        );

        let all = add_ecc_and_interleave(&data, v(1), ECLevel::M);
        assert_eq!(all.len(), 26);
        assert_eq!(&all[..16], &data[..]);
        assert_eq!(&all[16..], &[196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
    }

    #[test]
    fn test_interleave_length_multi_block() {
        // 5-Q: 2 blocks of 15 + 2 blocks of 16 data codewords
        let data: Vec<u8> = (0..62).collect();
        let all = add_ecc_and_interleave(&data, v(5), ECLevel::Q);
        assert_eq!(all.len(), num_raw_codewords(v(5)));
        // Column-wise interleave of the data part
        assert_eq!(&all[..4], &[0, 15, 30, 46]);
        // Long blocks contribute their final data codeword last
        assert_eq!(&all[60..62], &[45, 61]);
    }

    #[test]
    fn test_version_selection_boundaries() {
        let enc = encoder(ECLevel::L);
        assert_eq!(enc.encode(&[b'a'; 17]).unwrap().version, v(1));
        assert_eq!(enc.encode(&[b'a'; 18]).unwrap().version, v(2));
        assert_eq!(enc.encode(&[b'7'; 41]).unwrap().version, v(1));
        assert_eq!(enc.encode(&[b'7'; 42]).unwrap().version, v(2));
    }

    #[test]
    fn test_largest_payload() {
        let enc = encoder(ECLevel::L);
        let qr = enc.encode(&vec![b'x'; 2953]).unwrap();
        assert_eq!(qr.version, Version::MAX);
        assert_eq!(qr.size(), 177);

        match enc.encode(&vec![b'x'; 2954]) {
            Err(QrError::DataTooLong { version, .. }) => assert_eq!(version, 40),
            other => panic!("expected DataTooLong, got {:?}", other.map(|q| q.version)),
        }
    }

    #[test]
    fn test_format_information_is_readable() {
        for level in ECLevel::ALL {
            let qr = encoder(level).encode(b"https://example.com/notebook").unwrap();
            let expected = Some((level, qr.mask_pattern));
            assert_eq!(decode_format_bits(read_format_bits(&qr)), expected);
            assert_eq!(decode_format_bits(read_format_bits_second(&qr)), expected);
            assert!(qr.module(8, qr.size() - 8));
        }
    }

    #[test]
    fn test_forced_mask() {
        let enc = Encoder::new(EncodeOptions::default().with_mask(MaskPattern::Pattern3));
        let qr = enc.encode(b"mask").unwrap();
        assert_eq!(qr.mask_pattern, MaskPattern::Pattern3);
    }

    #[test]
    fn test_boost_ec() {
        let enc = Encoder::new(
            EncodeOptions::default()
                .with_ec_level(ECLevel::L)
                .with_boost_ec(true),
        );
        // 5 digits fit 1-H easily
        let qr = enc.encode(b"12345").unwrap();
        assert_eq!(qr.version, v(1));
        assert_eq!(qr.error_correction, ECLevel::H);
    }

    #[test]
    fn test_version_range() {
        let enc = Encoder::new(EncodeOptions::default().with_version_range(v(5), v(6)));
        assert_eq!(enc.encode(b"A").unwrap().version, v(5));

        let enc = Encoder::new(EncodeOptions::default().with_version_range(v(6), v(5)));
        assert!(matches!(
            enc.encode(b"A"),
            Err(QrError::InvalidVersionRange { min: 6, max: 5 })
        ));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let enc = Encoder::default();
        let a = enc.encode(b"same input").unwrap();
        let b = enc.encode(b"same input").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_version_info_present_from_v7() {
        let enc = Encoder::new(EncodeOptions::default().with_version_range(v(7), v(7)));
        let qr = enc.encode(b"v7").unwrap();
        let size = qr.size();
        // Top-right block, read in placement order
        let mut bits = 0u32;
        for i in 0..18 {
            bits |= (qr.module(size - 11 + i % 3, i / 3) as u32) << i;
        }
        assert_eq!(bits, 0x07C94);
    }
}
