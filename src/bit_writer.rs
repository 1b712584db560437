/// Accumulates bits and emits fixed-width alphabet symbols.
///
/// Multi-bit values are fed least-significant-bit first, while the
/// accumulator packs each incoming bit below the previous one, so earlier
/// bits land in the high positions of every output symbol. The paired
/// [`BitReader`](crate::bit_reader::BitReader) walks symbols from the high
/// bit down, making the two directions symmetric.
pub(crate) struct BitWriter<S, F: FnMut(u32) -> S> {
    symbols: Vec<S>,
    symbol_of: F,
    bits_per_symbol: u32,
    acc: u32,
    filled: u32,
}

impl<S, F: FnMut(u32) -> S> BitWriter<S, F> {
    pub(crate) fn new(bits_per_symbol: u32, symbol_of: F) -> Self {
        assert!(
            (1..=16).contains(&bits_per_symbol),
            "symbol width must be between 1 and 16 bits"
        );
        Self {
            symbols: Vec::new(),
            symbol_of,
            bits_per_symbol,
            acc: 0,
            filled: 0,
        }
    }

    fn push_bit(&mut self, bit: u32) {
        self.acc = (self.acc << 1) | bit;
        self.filled += 1;
        if self.filled == self.bits_per_symbol {
            self.symbols.push((self.symbol_of)(self.acc));
            self.acc = 0;
            self.filled = 0;
        }
    }

    /// Writes the low `count` bits of `value`, least-significant first.
    pub(crate) fn push_bits(&mut self, mut value: u32, count: u32) {
        for _ in 0..count {
            self.push_bit(value & 1);
            value >>= 1;
        }
    }

    /// Returns the completed symbols without the flush padding. Only useful
    /// for building deliberately unterminated streams in tests.
    #[cfg(test)]
    pub(crate) fn into_symbols(self) -> Vec<S> {
        self.symbols
    }

    /// Pads the accumulator with zero bits until one final symbol has been
    /// emitted, then returns the symbol stream.
    ///
    /// The pad always produces at least one symbol, even when the accumulator
    /// is empty; the decoder relies on that trailing symbol when the last
    /// token ends exactly on a symbol boundary.
    pub(crate) fn finish(mut self) -> Vec<S> {
        loop {
            self.acc <<= 1;
            self.filled += 1;
            if self.filled == self.bits_per_symbol {
                self.symbols.push((self.symbol_of)(self.acc));
                return self.symbols;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbol_packing() {
        // Bits 1,0,1 packed MSB-first into a 4-bit symbol, padded: 1010.
        let mut writer = BitWriter::new(4, |v| v);
        writer.push_bits(0b101, 3);
        assert_eq!(writer.finish(), vec![0b1010]);
    }

    #[test]
    fn test_lsb_first_value_order() {
        // 6 = 110; fed LSB-first the stream sees 0,1,1.
        let mut writer = BitWriter::new(3, |v| v);
        writer.push_bits(6, 3);
        // Packed MSB-first: 011, then the flush emits a zero symbol.
        assert_eq!(writer.finish(), vec![0b011, 0b000]);
    }

    #[test]
    fn test_flush_emits_symbol_on_boundary() {
        let mut writer = BitWriter::new(2, |v| v);
        writer.push_bits(0b11, 2);
        // Accumulator is empty at the boundary; flush still pads a symbol.
        assert_eq!(writer.finish(), vec![0b11, 0b00]);
    }

    #[test]
    #[should_panic(expected = "symbol width must be between 1 and 16 bits")]
    fn test_zero_width_symbols_rejected() {
        BitWriter::new(0, |v| v);
    }

    #[test]
    #[should_panic(expected = "symbol width must be between 1 and 16 bits")]
    fn test_oversized_symbols_rejected() {
        BitWriter::new(17, |v| v);
    }

    #[test]
    fn test_spans_symbols() {
        let mut writer = BitWriter::new(4, |v| v);
        writer.push_bits(0b1111_1111, 8);
        writer.push_bits(0, 2);
        assert_eq!(writer.finish(), vec![0b1111, 0b1111, 0b0000]);
    }
}
