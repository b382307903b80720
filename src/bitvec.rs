use crate::endian::Endianness;
use crate::error::{Error, Result};
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;
use log::{debug, trace};

/// Number of bits in one storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Number of bytes in one storage word. Buffer lengths must be a multiple of
/// this.
pub const WORD_BYTES: usize = size_of::<u64>();

/// Converts between the stored and the logical form of a word.
///
/// Byte reversal is its own inverse, so the same call serves loads and
/// stores.
#[inline]
pub(crate) const fn reorder(word: u64, byte_swap: bool) -> u64 {
    if byte_swap { word.swap_bytes() } else { word }
}

/// A fixed-capacity bit vector viewing a borrowed byte buffer in place.
///
/// The buffer is reinterpreted as `u64` words without copying. If the
/// declared byte order differs from the host's, every word is byte-swapped on
/// the way in and out, so the buffer always stays in its declared layout.
///
/// Bit `i` lives in word `i / 64` at position `i % 64`, counted from the
/// least significant bit of the word in its declared byte order. The
/// capacity is `words * 64` and never changes. Indices past it read as unset
/// and cannot be written.
///
/// # Examples
/// ```
/// use endian_bitvec::{BitVec, Endianness};
///
/// let mut words = [0u64; 2];
/// let mut bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), Endianness::Big).unwrap();
/// assert!(bits.set(9));
/// assert_eq!(bits.find_first_one(0), Some(9));
/// assert_eq!(bits.find_first_zero(9), Some(10));
/// assert_eq!(bits.find_last_one(), Some(9));
/// assert!(!bits.set(128));
/// ```
pub struct BitVec<'a> {
    words: &'a mut [u64],
    endianness: Endianness,
    byte_swap: bool,
}

impl<'a> BitVec<'a> {
    /// Adopts `buffer` as a bit vector whose words were written in
    /// `endianness` byte order.
    ///
    /// # Errors
    /// - [`Error::InvalidLength`] if `buffer.len()` is not a multiple of 8.
    /// - [`Error::UnsupportedArchitecture`] if the host byte order is unknown.
    /// - [`Error::Misaligned`] if `buffer` does not start on an 8-byte
    ///   boundary.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::{BitVec, Endianness, Error};
    ///
    /// let mut words = [0u64; 1];
    /// let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
    /// assert_eq!(
    ///     BitVec::new(&mut bytes[..7], Endianness::Little).unwrap_err(),
    ///     Error::InvalidLength { len: 7 }
    /// );
    /// assert_eq!(BitVec::new(bytes, Endianness::Little).unwrap().len(), 64);
    /// ```
    pub fn new(buffer: &'a mut [u8], endianness: Endianness) -> Result<Self> {
        Self::adopt(buffer, Ok(endianness), Endianness::HOST)
    }

    /// Adopts `buffer` with its byte order given as a raw header tag
    /// (`0` little, `1` big; see [`Endianness::tag`]).
    ///
    /// Checks run in order: buffer length, tag, host byte order, alignment.
    ///
    /// # Errors
    /// As [`new`], plus [`Error::InvalidEndianness`] for an unknown tag.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::{BitVec, Endianness, Error};
    ///
    /// let mut words = [0u64; 1];
    /// let bits = BitVec::with_tag(bytemuck::cast_slice_mut(&mut words), 1).unwrap();
    /// assert_eq!(bits.endianness(), Endianness::Big);
    ///
    /// let err = BitVec::with_tag(bytemuck::cast_slice_mut(&mut words), 7).unwrap_err();
    /// assert_eq!(err, Error::InvalidEndianness { tag: 7 });
    /// ```
    ///
    /// [`new`]: BitVec::new
    pub fn with_tag(buffer: &'a mut [u8], tag: u8) -> Result<Self> {
        Self::adopt(buffer, Endianness::try_from(tag), Endianness::HOST)
    }

    pub(crate) fn adopt(
        buffer: &'a mut [u8],
        declared: Result<Endianness>,
        host: Option<Endianness>,
    ) -> Result<Self> {
        let len = buffer.len();
        if len % WORD_BYTES != 0 {
            debug!("rejecting {len} byte buffer: not a whole number of words");
            return Err(Error::InvalidLength { len });
        }
        let endianness = declared.inspect_err(|err| debug!("rejecting buffer: {err}"))?;
        let Some(host) = host else {
            debug!("rejecting buffer: host byte order unknown");
            return Err(Error::UnsupportedArchitecture);
        };
        let words: &'a mut [u64] = if len == 0 {
            // an empty slice may carry a dangling, unaligned pointer
            &mut []
        } else {
            bytemuck::try_cast_slice_mut(buffer).map_err(|err| {
                debug!("rejecting {len} byte buffer: {err:?}");
                Error::Misaligned
            })?
        };
        let byte_swap = endianness != host;
        trace!(
            "adopted {} words, {endianness} endian on a {host} endian host, byte swap: {byte_swap}",
            words.len()
        );
        Ok(Self {
            words,
            endianness,
            byte_swap,
        })
    }

    /// Returns the capacity in bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns `true` if the buffer holds no words at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of 64-bit words in the buffer.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the byte order the buffer was declared with.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Returns `true` if words are byte-swapped on access, i.e. the declared
    /// byte order is not the host's.
    #[inline]
    pub fn is_byte_swapped(&self) -> bool {
        self.byte_swap
    }

    /// Returns the underlying buffer, laid out in the declared byte order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words[..])
    }

    /// Releases the view and hands the buffer back.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::{BitVec, Endianness};
    ///
    /// let mut words = [0u64; 1];
    /// let mut bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), Endianness::Big).unwrap();
    /// bits.set(0);
    /// assert_eq!(bits.into_bytes(), &[0, 0, 0, 0, 0, 0, 0, 1]);
    /// ```
    #[inline]
    pub fn into_bytes(self) -> &'a mut [u8] {
        bytemuck::cast_slice_mut(self.words)
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / WORD_BITS, idx % WORD_BITS)
    }

    /// Loads word `word_idx` in its logical (host) form.
    #[inline]
    fn load(&self, word_idx: usize) -> Option<u64> {
        self.words
            .get(word_idx)
            .map(|&raw| reorder(raw, self.byte_swap))
    }

    /// Applies `f` to the logical form of the word holding `idx`, passing the
    /// bit's mask, and stores the result back in the declared byte order.
    #[inline]
    fn update(&mut self, idx: usize, f: impl FnOnce(u64, u64) -> u64) -> Option<u64> {
        let (word_idx, bit_idx) = Self::idxs(idx);
        let byte_swap = self.byte_swap;
        let raw = self.words.get_mut(word_idx)?;
        let old = reorder(*raw, byte_swap);
        *raw = reorder(f(old, 1 << bit_idx), byte_swap);
        Some(old & 1 << bit_idx)
    }

    /// Returns `true` if the bit at `idx` is set.
    ///
    /// Indices past the capacity read as unset.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::{BitVec, Endianness};
    ///
    /// let mut words = [1u64.to_be()];
    /// let bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), Endianness::Big).unwrap();
    /// assert!(bits.test(0));
    /// assert!(!bits.test(1));
    /// assert!(!bits.test(1000));
    /// ```
    #[inline]
    pub fn test(&self, idx: usize) -> bool {
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.load(word_idx)
            .is_some_and(|word| word & 1 << bit_idx != 0)
    }

    /// Sets the bit at `idx`.
    ///
    /// Returns `false` and leaves the buffer untouched if `idx` is past the
    /// capacity.
    #[inline]
    pub fn set(&mut self, idx: usize) -> bool {
        self.update(idx, |word, mask| word | mask).is_some()
    }

    /// Clears the bit at `idx`.
    ///
    /// Returns `false` and leaves the buffer untouched if `idx` is past the
    /// capacity.
    #[inline]
    pub fn clear(&mut self, idx: usize) -> bool {
        self.update(idx, |word, mask| word & !mask).is_some()
    }

    /// Flips the bit at `idx` and returns its previous value, or `None` if
    /// `idx` is past the capacity.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::{BitVec, Endianness};
    ///
    /// let mut words = [0u64];
    /// let mut bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), Endianness::Little).unwrap();
    /// assert_eq!(bits.toggle(4), Some(false));
    /// assert_eq!(bits.toggle(4), Some(true));
    /// assert_eq!(bits.toggle(64), None);
    /// ```
    #[inline]
    pub fn toggle(&mut self, idx: usize) -> Option<bool> {
        self.update(idx, |word, mask| word ^ mask)
            .map(|prev| prev != 0)
    }

    /// Sets every bit.
    pub fn set_all(&mut self) {
        self.words.fill(u64::MAX);
    }

    /// Clears every bit.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn count_ones(&self) -> usize {
        // popcount does not depend on byte order
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the number of clear bits.
    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Returns the index of the first set bit at or after `from`, or `None`
    /// if there is none.
    ///
    /// Runs in O(w) where w is the number of words after `from`.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::{BitVec, Endianness};
    ///
    /// let mut words = [0u64; 3];
    /// let mut bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), Endianness::Little).unwrap();
    /// bits.set(5);
    /// bits.set(150);
    /// assert_eq!(bits.find_first_one(0), Some(5));
    /// assert_eq!(bits.find_first_one(6), Some(150));
    /// assert_eq!(bits.find_first_one(151), None);
    /// ```
    pub fn find_first_one(&self, from: usize) -> Option<usize> {
        let (word_idx, bit_idx) = Self::idxs(from);
        let head = self.load(word_idx)? >> bit_idx;
        if head != 0 {
            return Some(from + head.trailing_zeros() as usize);
        }
        // zero is zero in either byte order
        self.words
            .iter()
            .enumerate()
            .skip(word_idx + 1)
            .find(|&(_, &raw)| raw != 0)
            .map(|(idx, &raw)| {
                idx * WORD_BITS + reorder(raw, self.byte_swap).trailing_zeros() as usize
            })
    }

    /// Returns the index of the first clear bit at or after `from`, or `None`
    /// if there is none.
    ///
    /// Only positions inside the buffer are considered: a vector whose bits
    /// from `from` onwards are all set reports `None`, never the capacity.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::{BitVec, Endianness};
    ///
    /// let mut words = [u64::MAX, 0b1011u64.to_be()];
    /// let mut bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), Endianness::Big).unwrap();
    /// assert_eq!(bits.find_first_zero(0), Some(66));
    /// bits.set_all();
    /// assert_eq!(bits.find_first_zero(0), None);
    /// ```
    pub fn find_first_zero(&self, from: usize) -> Option<usize> {
        let (word_idx, bit_idx) = Self::idxs(from);
        let head = self.load(word_idx)? >> bit_idx;
        let trail = (!head).trailing_zeros() as usize;
        if trail < WORD_BITS - bit_idx {
            return Some(from + trail);
        }
        // all ones is all ones in either byte order
        self.words
            .iter()
            .enumerate()
            .skip(word_idx + 1)
            .find(|&(_, &raw)| raw != u64::MAX)
            .map(|(idx, &raw)| {
                idx * WORD_BITS + (!reorder(raw, self.byte_swap)).trailing_zeros() as usize
            })
    }

    /// Returns the index of the last set bit, or `None` if no bit is set.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::{BitVec, Endianness};
    ///
    /// let mut words = [0u64; 2];
    /// let mut bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), Endianness::Big).unwrap();
    /// assert_eq!(bits.find_last_one(), None);
    /// bits.set(3);
    /// bits.set(70);
    /// assert_eq!(bits.find_last_one(), Some(70));
    /// ```
    pub fn find_last_one(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|&(_, &raw)| raw != 0)
            .map(|(idx, &raw)| {
                let word = reorder(raw, self.byte_swap);
                idx * WORD_BITS + (WORD_BITS - 1 - word.leading_zeros() as usize)
            })
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::{BitVec, Endianness};
    ///
    /// let mut words = [0b1010_0001u64.to_be(), 1u64.to_be()];
    /// let bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), Endianness::Big).unwrap();
    /// assert!(bits.iter_ones().eq([0, 5, 7, 64]));
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes {
            bits: self,
            next: Some(0),
        }
    }

    /// Returns an iterator over the indices of all clear bits, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::{BitVec, Endianness};
    ///
    /// let mut words = [(!0b0100_0010u64).to_le()];
    /// let bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), Endianness::Little).unwrap();
    /// assert!(bits.iter_zeros().eq([1, 6]));
    /// ```
    #[inline]
    pub fn iter_zeros(&self) -> IterZeros<'_> {
        IterZeros {
            bits: self,
            next: Some(0),
        }
    }
}

impl Debug for BitVec<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "BitVec({}) LSB -> ", self.endianness)?;
        let len = self.len();
        for idx in 0..len {
            if idx % 8 == 0 {
                write!(f, "{idx}: ")?;
            }
            write!(f, "{}", if self.test(idx) { '1' } else { '0' })?;
            if idx % 8 == 7 && idx < len - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")
    }
}

/// Iterator over the indices of set bits in a [`BitVec`].
///
/// Returned by [`BitVec::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'bits> {
    bits: &'bits BitVec<'bits>,
    next: Option<usize>,
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.bits.find_first_one(self.next?);
        self.next = found.and_then(|idx| idx.checked_add(1));
        found
    }
}

impl FusedIterator for IterOnes<'_> {}

/// Iterator over the indices of clear bits in a [`BitVec`].
///
/// Returned by [`BitVec::iter_zeros()`].
#[derive(Clone, Copy)]
pub struct IterZeros<'bits> {
    bits: &'bits BitVec<'bits>,
    next: Option<usize>,
}

impl Iterator for IterZeros<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.bits.find_first_zero(self.next?);
        self.next = found.and_then(|idx| idx.checked_add(1));
        found
    }
}

impl FusedIterator for IterZeros<'_> {}
