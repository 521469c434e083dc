use std::fmt;

/// A set of calendar months, 1 through 12.
///
/// Stored as a bit mask. Iteration starts at a configurable first month and
/// wraps around the year, so a winter set yields `12, 1, 2` rather than
/// `1, 2, 12`.
#[derive(Clone, Copy)]
pub struct MonthSet {
    bits: u16,
    first: u8,
}

const ALL_BITS: u16 = 0b1111_1111_1111;

impl MonthSet {
    /// The empty set.
    pub const EMPTY: MonthSet = MonthSet { bits: 0, first: 1 };

    /// All twelve months.
    pub const ALL: MonthSet = MonthSet {
        bits: ALL_BITS,
        first: 1,
    };

    /// A run of `len` consecutive months starting at `first`, wrapping past
    /// December.
    pub const fn run(first: u8, len: u8) -> MonthSet {
        assert!(first >= 1 && first <= 12);
        assert!(len <= 12);

        let mut bits = 0;
        let mut i = 0;
        while i < len {
            let month = (first - 1 + i) % 12;
            bits |= 1u16 << month;
            i += 1;
        }

        MonthSet { bits, first }
    }

    pub fn contains(self, month: u32) -> bool {
        (1..=12).contains(&month) && self.bits & (1u16 << (month - 1)) != 0
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn is_disjoint(self, other: MonthSet) -> bool {
        self.bits & other.bits == 0
    }

    /// Union of two sets. Iteration order follows `self`.
    pub fn union(self, other: MonthSet) -> MonthSet {
        MonthSet {
            bits: self.bits | other.bits,
            first: if self.is_empty() { other.first } else { self.first },
        }
    }

    /// Months in calendar order beginning at the set's first month.
    pub fn iter(self) -> impl Iterator<Item = u32> {
        (0..12u32)
            .map(move |i| (u32::from(self.first) - 1 + i) % 12 + 1)
            .filter(move |month| self.contains(*month))
    }
}

impl PartialEq for MonthSet {
    fn eq(&self, other: &MonthSet) -> bool {
        self.bits == other.bits
    }
}

impl Eq for MonthSet {}

impl std::hash::Hash for MonthSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

/// Equal when the slice lists exactly the set's months, each once, in any
/// order.
impl PartialEq<[u32]> for MonthSet {
    fn eq(&self, other: &[u32]) -> bool {
        self.len() == other.len() && *self == other.iter().copied().collect::<MonthSet>()
    }
}

impl FromIterator<u32> for MonthSet {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let mut bits = 0;
        let mut first = None;

        for month in iter {
            if (1..=12).contains(&month) {
                bits |= 1u16 << (month - 1);
                first.get_or_insert(month as u8);
            }
        }

        MonthSet {
            bits,
            first: first.unwrap_or(1),
        }
    }
}

impl fmt::Debug for MonthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
