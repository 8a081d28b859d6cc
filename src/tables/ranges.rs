// src/tables/ranges.rs
// Coalesces per-codepoint classification over the Unicode code space into
// sorted inclusive ranges, one list per category.

use std::time::Instant;

use super::{classify::Classifier, flags::Category};

/// Surrogates are never valid standalone codepoints.
pub const SURROGATES: (u32, u32) = (0xD800, 0xDFFF);

/// Scan domain for range tables as ordered inclusive segments:
/// `0x100..=0x10FFFF` with the surrogates cut out. Bytes below 0x100 are
/// covered by the byte table.
pub const CODESPACE_DOMAIN: &[(u32, u32)] = &[(0x100, 0xD7FF), (0xE000, 0x10FFFF)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodepointRange {
    pub start: u32,
    pub end: u32,
}

impl CodepointRange {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool {
        self.start <= code && code <= self.end
    }
}

/// Range lists for all three categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSet {
    ranges: [Vec<CodepointRange>; 3],
}

impl RangeSet {
    pub fn new(
        alpha: Vec<CodepointRange>,
        alnum: Vec<CodepointRange>,
        upper: Vec<CodepointRange>,
    ) -> Self {
        Self {
            ranges: [alpha, alnum, upper],
        }
    }

    pub fn get(&self, category: Category) -> &[CodepointRange] {
        &self.ranges[category.idx()]
    }

    /// Categories in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CodepointRange])> {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Flattened `start, end, start, end, ...` list, as emitted.
    pub fn boundaries(&self, category: Category) -> Vec<u32> {
        self.get(category).iter().flat_map(|r| [r.start, r.end]).collect()
    }

    /// Membership by binary search over the boundary list. A hit on any
    /// boundary is inside; otherwise the insertion point is odd exactly when
    /// it falls between a start and its end.
    pub fn contains(&self, category: Category, code: u32) -> bool {
        match self.boundaries(category).binary_search(&code) {
            Ok(_) => true,
            Err(i) => i % 2 == 1,
        }
    }
}

/// Scans `domain` (ordered, inclusive segments) and returns the maximal runs of
/// consecutive codepoints whose classification has `category`'s bit set.
///
/// A run only grows by exactly one codepoint at a time, so any gap between
/// segments closes it. Unrepresentable codepoints never match.
pub fn compress_in<C: Classifier + ?Sized>(
    classifier: &C,
    category: Category,
    domain: &[(u32, u32)],
) -> Vec<CodepointRange> {
    let bit = category.flag();
    let mut out = Vec::new();
    let mut open: Option<CodepointRange> = None;

    for code in domain.iter().flat_map(|&(lo, hi)| lo..=hi) {
        let hit = classifier.classify(code).is_some_and(|f| f.contains(bit));
        if !hit {
            out.extend(open.take());
            continue;
        }
        match &mut open {
            Some(r) if r.end.checked_add(1) == Some(code) => r.end = code,
            _ => out.extend(open.replace(CodepointRange::new(code, code))),
        }
    }
    out.extend(open);
    out
}

/// [`compress_in`] over [`CODESPACE_DOMAIN`].
pub fn compress<C: Classifier + ?Sized>(
    classifier: &C,
    category: Category,
) -> Vec<CodepointRange> {
    compress_in(classifier, category, CODESPACE_DOMAIN)
}

fn timed_compress<C: Classifier + ?Sized>(
    classifier: &C,
    category: Category,
) -> Vec<CodepointRange> {
    let t0 = Instant::now();
    let ranges = compress(classifier, category);
    log::info!(
        "[ranges] {}: {} ranges ({} boundaries) in {} ms",
        category.name(),
        ranges.len(),
        ranges.len() * 2,
        t0.elapsed().as_millis()
    );
    ranges
}

/// Builds all three range lists. With `parallel`, the category scans run as
/// independent rayon tasks; they only read the classifier.
pub fn compress_all<C: Classifier + ?Sized>(classifier: &C, parallel: bool) -> RangeSet {
    let t0 = Instant::now();
    let (alpha, alnum, upper) = if parallel {
        let (alpha, (alnum, upper)) = rayon::join(
            || timed_compress(classifier, Category::Alpha),
            || {
                rayon::join(
                    || timed_compress(classifier, Category::Alnum),
                    || timed_compress(classifier, Category::Upper),
                )
            },
        );
        (alpha, alnum, upper)
    } else {
        (
            timed_compress(classifier, Category::Alpha),
            timed_compress(classifier, Category::Alnum),
            timed_compress(classifier, Category::Upper),
        )
    };
    log::debug!("[ranges] all categories took {} ms", t0.elapsed().as_millis());
    RangeSet::new(alpha, alnum, upper)
}
