use std::fmt;

use byteorder::{BE, ByteOrder as _, LE};

/// The order in which the two bytes of a UTF-16 code unit appear in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// The byte order of the host platform.
    #[cfg(target_endian = "little")]
    pub const fn native() -> ByteOrder {
        ByteOrder::LittleEndian
    }

    /// The byte order of the host platform.
    #[cfg(not(target_endian = "little"))]
    pub const fn native() -> ByteOrder {
        ByteOrder::BigEndian
    }

    /// Composes a code unit from the first two bytes of `buf`.
    ///
    /// Panics when `buf.len() < 2`.
    #[inline]
    pub fn read_u16(self, buf: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => LE::read_u16(buf),
            ByteOrder::BigEndian => BE::read_u16(buf),
        }
    }

    /// Decomposes `n` into the first two bytes of `buf`.
    ///
    /// Panics when `buf.len() < 2`.
    #[inline]
    pub fn write_u16(self, buf: &mut [u8], n: u16) {
        match self {
            ByteOrder::LittleEndian => LE::write_u16(buf, n),
            ByteOrder::BigEndian => BE::write_u16(buf, n),
        }
    }

    /// The UTF-16 byte-order mark announcing this order.
    pub const fn bom(self) -> [u8; 2] {
        match self {
            ByteOrder::LittleEndian => crate::bom::UTF16LE_BOM,
            ByteOrder::BigEndian => crate::bom::UTF16BE_BOM,
        }
    }

    /// Maps a 2-byte marker to the order it announces.
    pub fn from_bom(bytes: [u8; 2]) -> Option<ByteOrder> {
        match bytes {
            crate::bom::UTF16LE_BOM => Some(ByteOrder::LittleEndian),
            crate::bom::UTF16BE_BOM => Some(ByteOrder::BigEndian),
            _ => None,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::LittleEndian => f.write_str("LittleEndian"),
            ByteOrder::BigEndian => f.write_str("BigEndian"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ByteOrder;

    #[test]
    fn test_compose_decompose() {
        let mut buf = [0u8; 2];
        ByteOrder::LittleEndian.write_u16(&mut buf, 0x4E16);
        assert_eq!(buf, [0x16, 0x4E]);
        assert_eq!(ByteOrder::LittleEndian.read_u16(&buf), 0x4E16);
        assert_eq!(ByteOrder::BigEndian.read_u16(&buf), 0x164E);

        ByteOrder::BigEndian.write_u16(&mut buf, 0x4E16);
        assert_eq!(buf, [0x4E, 0x16]);
    }

    #[test]
    fn test_native_matches_platform() {
        let mut buf = [0u8; 2];
        ByteOrder::native().write_u16(&mut buf, 0x1234);
        assert_eq!(buf, 0x1234u16.to_ne_bytes());
    }

    #[test]
    fn test_bom_mapping() {
        for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            assert_eq!(ByteOrder::from_bom(order.bom()), Some(order));
        }
        assert_eq!(ByteOrder::from_bom([0x68, 0x56]), None);
        assert_eq!(ByteOrder::LittleEndian.to_string(), "LittleEndian");
        assert_eq!(ByteOrder::BigEndian.to_string(), "BigEndian");
    }
}
