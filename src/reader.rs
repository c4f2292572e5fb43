use crate::{FosError, FosErrorKind};

#[inline]
pub(crate) fn take<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut result = [0u8; N];
    result.copy_from_slice(&data[..N]);
    result
}

#[inline]
pub(crate) fn get_split<const N: usize>(data: &[u8]) -> Option<([u8; N], &[u8])> {
    data.get(N..).map(|d| (take::<N>(data), d))
}

/// Little-endian cursor over a save buffer.
///
/// Every read is bounds checked and reports the name of the field that
/// could not be satisfied along with the offset it started at.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    original_length: usize,
}

impl<'a> Reader<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            original_length: data.len(),
        }
    }

    /// Bytes that have not been consumed yet
    #[inline]
    pub fn remainder(&self) -> &'a [u8] {
        self.data
    }

    /// Offset of the cursor from the start of the buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.original_length - self.data.len()
    }

    #[inline]
    fn eof(&self, field: &'static str, needed: u64) -> FosError {
        FosError::new(FosErrorKind::TruncatedBuffer {
            field,
            position: self.position(),
            needed,
            available: self.data.len(),
        })
    }

    #[inline]
    fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], FosError> {
        let (head, rest) = get_split::<N>(self.data).ok_or_else(|| self.eof(field, N as u64))?;
        self.data = rest;
        Ok(head)
    }

    #[inline]
    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, FosError> {
        self.read_array::<1>(field).map(|[x]| x)
    }

    #[inline]
    pub fn read_u16(&mut self, field: &'static str) -> Result<u16, FosError> {
        self.read_array(field).map(u16::from_le_bytes)
    }

    #[inline]
    pub fn read_u32(&mut self, field: &'static str) -> Result<u32, FosError> {
        self.read_array(field).map(u32::from_le_bytes)
    }

    #[inline]
    pub fn read_u64(&mut self, field: &'static str) -> Result<u64, FosError> {
        self.read_array(field).map(u64::from_le_bytes)
    }

    #[inline]
    pub fn read_f32(&mut self, field: &'static str) -> Result<f32, FosError> {
        self.read_array(field).map(f32::from_le_bytes)
    }

    /// Consume exactly `len` bytes.
    ///
    /// The length is a `u64` so that sizes computed from untrusted
    /// dimensions never need to be truncated before the bounds check.
    #[inline]
    pub fn read_bytes(&mut self, field: &'static str, len: u64) -> Result<&'a [u8], FosError> {
        let split = usize::try_from(len)
            .ok()
            .filter(|&n| n <= self.data.len())
            .ok_or_else(|| self.eof(field, len))?;
        let (head, rest) = self.data.split_at(split);
        self.data = rest;
        Ok(head)
    }

    /// Consume a u16 length followed by that many bytes
    #[inline]
    pub fn read_prefixed(&mut self, field: &'static str) -> Result<&'a [u8], FosError> {
        let len = self.read_u16(field)?;
        self.read_bytes(field, u64::from(len))
    }
}
