//! External patch numbering.
//!
//! The KMX-8 front panel numbers its patches 1-8, 10-18, 20-28. The store
//! keeps its patches in a dense zero-based sequence, so an external number
//! maps to its position within that numbering, not to `number - 1`.

/// Every patch number the front panel can show, in spinbox order.
pub const VALID_PATCH_NUMBERS: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, //
    10, 11, 12, 13, 14, 15, 16, 17, 18, //
    20, 21, 22, 23, 24, 25, 26, 27, 28,
];

/// A validated external patch number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatchNumber {
    number: u8,
    index: usize,
}

impl PatchNumber {
    /// Validate an external number. Returns `None` for 0, 9, 19, 29 and anything
    /// outside 1-28.
    pub fn new(number: u8) -> Option<Self> {
        VALID_PATCH_NUMBERS
            .iter()
            .position(|&n| n == number)
            .map(|index| Self { number, index })
    }

    /// External number for a store index. Indices past the last external
    /// number have none.
    pub fn from_index(index: usize) -> Option<Self> {
        VALID_PATCH_NUMBERS
            .get(index)
            .map(|&number| Self { number, index })
    }

    /// The number as shown on the front panel.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Position in the dense patch sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// All patch numbers in order.
    pub fn all() -> impl Iterator<Item = PatchNumber> {
        (0..VALID_PATCH_NUMBERS.len()).filter_map(Self::from_index)
    }
}

impl std::fmt::Display for PatchNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}
