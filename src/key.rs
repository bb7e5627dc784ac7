use {
    std::convert::TryFrom,
    crate::Error,
};

/// Number of interpolation policies, i.e. the first invalid wire code.
pub const POLICY_COUNT: u8 = 5;

/// Interpolation rule used between a key and its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Hold the value until the next key.
    Step,
    /// Blend all 32 bits as one signed quantity.
    Linear,
    /// Blend the top and bottom 16 bits separately.
    Short,
    /// Blend each byte separately.
    Byte,
    /// Blend each nibble separately.
    Nibble,
}

impl Policy {
    /// Width of one independently blended lane, `None` for `Step`.
    pub fn lane_bits(self) -> Option<u32> {
        match self {
            Self::Step => None,
            Self::Linear => Some(32),
            Self::Short => Some(16),
            Self::Byte => Some(8),
            Self::Nibble => Some(4),
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::Step
    }
}

impl From<Policy> for u8 {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Step => 0,
            Policy::Linear => 1,
            Policy::Short => 2,
            Policy::Byte => 3,
            Policy::Nibble => 4,
        }
    }
}

impl TryFrom<u8> for Policy {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Step),
            1 => Ok(Self::Linear),
            2 => Ok(Self::Short),
            3 => Ok(Self::Byte),
            4 => Ok(Self::Nibble),
            _ => Err(Error::InvalidPolicy(code)),
        }
    }
}

/// A control point on a track.
///
/// `value` is a raw 32-bit pattern; how it is blended towards the next key
/// depends on `policy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackKey {
    pub position: i32,
    pub value: i32,
    pub policy: Policy,
}

impl TrackKey {
    pub fn new(position: i32, value: i32, policy: Policy) -> Self {
        Self {
            position,
            value,
            policy,
        }
    }
}
