pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pub offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    pub fn is_finished(&self) -> bool {
        self.number_of_bytes_left() == 0
    }

    /// Returns `None` without advancing when fewer than `size` bytes remain.
    pub fn read_bytes(&mut self, size: usize) -> Option<&'a [u8]> {
        if size > self.number_of_bytes_left() {
            return None;
        }

        let result = &self.bytes[self.offset..self.offset + size];
        self.offset += size;

        Some(result)
    }

    pub fn number_of_bytes_left(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }
}
