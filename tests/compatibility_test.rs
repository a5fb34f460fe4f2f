use keyradix::prelude::*;

// Simulate an external columnar string array (like from apache-arrow).
struct MockArrowArray {
    data: Vec<u8>,
    offsets: Vec<usize>,
    // Position of each logical row within `offsets`, permuted by `swap`.
    rows: Vec<usize>,
}

impl MockArrowArray {
    fn new(strings: &[&str]) -> Self {
        let mut data = Vec::new();
        let mut offsets = vec![0];
        for s in strings {
            data.extend_from_slice(s.as_bytes());
            offsets.push(data.len());
        }
        let rows = (0..strings.len()).collect();
        Self {
            data,
            offsets,
            rows,
        }
    }

    fn value(&self, index: usize) -> &[u8] {
        let row = self.rows[index];
        &self.data[self.offsets[row]..self.offsets[row + 1]]
    }
}

// Implementing the traits for the external struct proves they are usable
// from outside the crate.
impl Sequence for MockArrowArray {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.value(i) < self.value(j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }
}

impl BytesAccessor for MockArrowArray {
    fn bytes_at(&self, index: usize) -> &[u8] {
        self.value(index)
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mut mock = MockArrowArray::new(&["foo", "bar", "baz"]);
    sort_bytes(&mut mock);

    // sorted: bar (1), baz (2), foo (0)
    assert_eq!(mock.rows, vec![1, 2, 0]);
    assert!(is_sorted(&mock));
}

#[test]
fn test_external_struct_large() {
    let words: Vec<String> = (0..1000u32)
        .map(|i| format!("key-{:05}", i.wrapping_mul(2_654_435_761) % 100_000))
        .collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();

    let mut mock = MockArrowArray::new(&refs);
    sort_bytes(&mut mock);

    let mut expected = refs.clone();
    expected.sort();
    let actual: Vec<&[u8]> = (0..mock.len()).map(|i| mock.value(i)).collect();
    let expected: Vec<&[u8]> = expected.iter().map(|s| s.as_bytes()).collect();
    assert_eq!(actual, expected);
}
