//! Byte histogram normalised into a descending frequency list.

/// One distinct symbol and its share of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyEntry {
    pub frequency: f64,
    pub symbol: u8,
}

/// Distinct symbols of an input, most frequent first.
///
/// Entries with equal frequency keep the order in which their symbols were
/// first seen. The code-table builder depends on this tie-break, so the
/// emitted header is reproducible byte for byte.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    counts: [usize; 256],
    total: usize,
}

impl FrequencyTable {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts = [0usize; 256];
        let mut first_seen = Vec::new();
        for &byte in bytes {
            if counts[byte as usize] == 0 {
                first_seen.push(byte);
            }
            counts[byte as usize] += 1;
        }

        let total = bytes.len();
        let mut entries: Vec<FrequencyEntry> = first_seen
            .into_iter()
            .map(|symbol| FrequencyEntry {
                frequency: counts[symbol as usize] as f64 / total as f64,
                symbol,
            })
            .collect();

        // sort_by is stable: equal frequencies stay in encounter order
        entries.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));

        FrequencyTable {
            entries,
            counts,
            total,
        }
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of input bytes the table was built from.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, symbol: u8) -> usize {
        self.counts[symbol as usize]
    }
}
