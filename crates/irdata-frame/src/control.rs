//! Control codes.
//!
//! A control frame carries one byte: the five high bits are always set (the
//! prefix), the three low bits hold the type.

/// High bits every control byte carries.
pub const CONTROL_PREFIX: u8 = 0b1111_1000;

/// Low bits holding the control type.
pub const CONTROL_TYPE_MASK: u8 = !CONTROL_PREFIX;

/// Protocol-level signals exchanged between the two ends of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlCode {
    /// A data transmission is about to start.
    Start = 1,
    /// The data transmission is over.
    End = 2,
    /// The last frame was received.
    Ack = 3,
    /// The last frame was not received correctly.
    Nack = 4,
}

impl ControlCode {
    /// All codes, in type order.
    pub const ALL: [ControlCode; 4] = [Self::Start, Self::End, Self::Ack, Self::Nack];

    /// Map a type value back to its code.
    pub fn from_type(value: u8) -> Option<Self> {
        Some(match value {
            1 => Self::Start,
            2 => Self::End,
            3 => Self::Ack,
            4 => Self::Nack,
            _ => return None,
        })
    }

    /// The 3-bit type value.
    pub fn type_bits(self) -> u8 {
        self as u8
    }

    /// The byte sent on the wire: prefix plus type.
    pub fn wire_byte(self) -> u8 {
        CONTROL_PREFIX | self.type_bits()
    }

    /// Decode a wire byte, `None` if the prefix or the type is wrong.
    pub fn from_wire_byte(byte: u8) -> Option<Self> {
        if byte & CONTROL_PREFIX != CONTROL_PREFIX {
            return None;
        }
        Self::from_type(byte & CONTROL_TYPE_MASK)
    }

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Ack => "ack",
            Self::Nack => "nack",
        }
    }
}

impl std::fmt::Display for ControlCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
