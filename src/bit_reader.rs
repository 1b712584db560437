use crate::error::DecompressError;

/// Walks bits inside fixed-width alphabet symbols, high bit first.
///
/// `reset_value` is the mask for the highest bit of one symbol, i.e.
/// `2^(bits_per_symbol - 1)`. Symbols are fetched lazily through `value_at`,
/// so a stream that ends exactly on a symbol boundary can be distinguished
/// from one that is cut off mid-read.
pub(crate) struct BitReader<F: FnMut(usize) -> Result<u32, DecompressError>> {
    value_at: F,
    len: usize,
    reset_value: u32,
    val: u32,
    mask: u32,
    index: usize,
}

impl<F: FnMut(usize) -> Result<u32, DecompressError>> BitReader<F> {
    pub(crate) fn new(
        len: usize,
        reset_value: u32,
        value_at: F,
    ) -> Result<Self, DecompressError> {
        if reset_value == 0 || !reset_value.is_power_of_two() {
            return Err(DecompressError::InvalidArgument(format!(
                "reset value {reset_value} is not the high bit of a symbol"
            )));
        }
        Ok(Self {
            value_at,
            len,
            reset_value,
            val: 0,
            mask: 0,
            index: 0,
        })
    }

    /// True once every supplied symbol has been fully consumed.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.mask == 0 && self.index >= self.len
    }

    fn read_bit(&mut self) -> Result<u32, DecompressError> {
        if self.mask == 0 {
            if self.index >= self.len {
                return Err(DecompressError::TruncatedInput {
                    index: self.index,
                    len: self.len,
                });
            }
            self.val = (self.value_at)(self.index)?;
            self.index += 1;
            self.mask = self.reset_value;
        }
        let bit = u32::from(self.val & self.mask != 0);
        self.mask >>= 1;
        Ok(bit)
    }

    /// Reads `count` bits, assembling them least-significant-bit first to
    /// mirror [`BitWriter::push_bits`](crate::bit_writer::BitWriter::push_bits).
    pub(crate) fn read_bits(&mut self, count: u32) -> Result<u32, DecompressError> {
        let mut value = 0;
        for shift in 0..count {
            value |= self.read_bit()? << shift;
        }
        Ok(value)
    }
}
