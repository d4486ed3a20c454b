/// A half open range of byte offsets `[low, high)` into a [`Source`](super::Source).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    low: usize,
    high: usize,
}

impl Span {
    pub fn new(low: usize, high: usize) -> Span {
        if high < low {
            panic!("Invalid span: high ({}) is less than low ({})", high, low)
        }

        Span { low, high }
    }

    pub fn zero() -> Span {
        Span { low: 0, high: 0 }
    }

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }

    pub fn len(&self) -> usize {
        self.high - self.low
    }

    pub fn is_empty(&self) -> bool {
        self.low == self.high
    }

    /// Creates the smallest span that covers both `a` and `b`.
    pub fn cover(a: Span, b: Span) -> Span {
        Span::new(a.low.min(b.low), a.high.max(b.high))
    }

    /// Returns true if `self` ends exactly where `next` begins.
    pub fn touches(&self, next: Span) -> bool {
        self.high == next.low
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{}, {}]", self.low, self.high))
    }
}
