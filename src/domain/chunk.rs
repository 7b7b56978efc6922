// ============================================================================
// Chunk Segmenter
// Positional digit grouping shared by every language
// ============================================================================

use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// Widest group any language uses (Thai ล้าน cycles).
pub const MAX_GROUP_WIDTH: usize = 6;

/// Chunk list; eight groups cover every input below 10^24 without allocating.
pub type Chunks = SmallVec<[Chunk; 8]>;

/// Digit widths used to split an integer part into groups.
///
/// The lowest group may differ from the rest: Indian numbering reads the
/// last three digits, then pairs (हज़ार, लाख, करोड़).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grouping {
    /// Width of the units group
    pub lowest: usize,
    /// Width of every higher group
    pub rest: usize,
}

impl Grouping {
    /// Same width for every group (3 short scale, 4 myriad, 6 Thai).
    pub const fn uniform(width: usize) -> Self {
        Self {
            lowest: width,
            rest: width,
        }
    }

    /// Three digits, then two at a time.
    pub const fn indian() -> Self {
        Self { lowest: 3, rest: 2 }
    }

    /// Most digits `groups` groups can hold.
    pub const fn capacity(self, groups: usize) -> usize {
        if groups == 0 {
            0
        } else {
            self.lowest + (groups - 1) * self.rest
        }
    }
}

/// One group of digits tied to a scale position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// Numeric value of the group's digits
    pub value: u32,
    /// Scale table index (0 = units group)
    pub position: usize,
    /// Digits actually present; only the leading group may be short
    pub width: usize,
    /// Whether this is the most significant group
    pub leading: bool,
}

impl Chunk {
    /// Check if every digit of the group is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// The group's digits, most significant first, zero-padded to `width`.
    pub fn digits(&self) -> ArrayVec<u8, MAX_GROUP_WIDTH> {
        let mut digits = ArrayVec::new();
        let mut rest = self.value;
        for _ in 0..self.width.min(MAX_GROUP_WIDTH) {
            digits.push((rest % 10) as u8);
            rest /= 10;
        }
        digits.reverse();
        digits
    }
}

/// Split ASCII integer digits into chunks, most significant first.
///
/// Groups are peeled from the least significant end; the highest group keeps
/// whatever digits remain and is not padded. Zero-valued groups are kept so
/// assemblers can decide on connectors.
///
/// `digits` must be ASCII digits, as held by `CanonicalDecimal`.
pub fn segment(digits: &str, grouping: Grouping) -> Chunks {
    let bytes = digits.as_bytes();
    let mut chunks = Chunks::new();
    let mut end = bytes.len();
    let mut position = 0;

    while end > 0 {
        let width = if position == 0 {
            grouping.lowest
        } else {
            grouping.rest
        };
        let start = end.saturating_sub(width.clamp(1, MAX_GROUP_WIDTH));
        let value = bytes[start..end]
            .iter()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b.saturating_sub(b'0')));

        chunks.push(Chunk {
            value,
            position,
            width: end - start,
            leading: start == 0,
        });

        end = start;
        position += 1;
    }

    chunks.reverse();
    chunks
}
