use crate::error::{Error, Result};
use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// Byte order a buffer was written in.
///
/// # Examples
/// ```
/// use endian_bitvec::Endianness;
///
/// assert_eq!("be".parse::<Endianness>().unwrap(), Endianness::Big);
/// assert_eq!(Endianness::try_from(0u8).unwrap(), Endianness::Little);
/// assert!(Endianness::HOST.is_some());
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// The host's native byte order, or `None` on a target that reports
    /// neither.
    #[cfg(target_endian = "little")]
    pub const HOST: Option<Self> = Some(Self::Little);

    /// The host's native byte order, or `None` on a target that reports
    /// neither.
    #[cfg(target_endian = "big")]
    pub const HOST: Option<Self> = Some(Self::Big);

    /// The host's native byte order, or `None` on a target that reports
    /// neither.
    #[cfg(not(any(target_endian = "little", target_endian = "big")))]
    pub const HOST: Option<Self> = None;

    /// The one-byte tag used for this byte order in binary headers.
    ///
    /// # Examples
    /// ```
    /// use endian_bitvec::Endianness;
    ///
    /// assert_eq!(Endianness::Big.tag(), 1);
    /// assert_eq!(Endianness::try_from(Endianness::Big.tag()).unwrap(), Endianness::Big);
    /// ```
    #[inline]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Little => 0,
            Self::Big => 1,
        }
    }

    /// Returns the opposite byte order.
    #[inline]
    pub const fn swapped(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }
}

impl TryFrom<u8> for Endianness {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Little),
            1 => Ok(Self::Big),
            _ => Err(Error::InvalidEndianness { tag }),
        }
    }
}

/// Parses `"little"`/`"le"` and `"big"`/`"be"`, ignoring ASCII case.
///
/// Anything else fails with [`Error::InvalidEndianness`] carrying the tag
/// `u8::MAX`, since a string has no tag of its own.
impl FromStr for Endianness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("little") || s.eq_ignore_ascii_case("le") {
            Ok(Self::Little)
        } else if s.eq_ignore_ascii_case("big") || s.eq_ignore_ascii_case("be") {
            Ok(Self::Big)
        } else {
            Err(Error::InvalidEndianness { tag: u8::MAX })
        }
    }
}

impl Display for Endianness {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Little => write!(f, "little"),
            Self::Big => write!(f, "big"),
        }
    }
}
