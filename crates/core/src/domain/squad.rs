use anyhow::Result;

/// Playing position, decoded from the upstream `element_type` code (1..=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            other => anyhow::bail!("unknown element_type code {other}"),
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

/// Upstream prices are fixed-point tenths of a million. Keep arithmetic in
/// tenths; format only at the display boundary.
pub fn format_price(tenths: u32) -> String {
    format!("£{}.{}m", tenths / 10, tenths % 10)
}

/// Signed variant for transfer cost deltas (a negative delta is a refund).
pub fn format_signed_price(delta_tenths: i64) -> String {
    let sign = if delta_tenths < 0 { "-" } else { "+" };
    let abs = delta_tenths.unsigned_abs();
    format!("{sign}£{}.{}m", abs / 10, abs % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_all_known_position_codes() {
        assert_eq!(Position::from_code(1).unwrap(), Position::Goalkeeper);
        assert_eq!(Position::from_code(2).unwrap(), Position::Defender);
        assert_eq!(Position::from_code(3).unwrap(), Position::Midfielder);
        assert_eq!(Position::from_code(4).unwrap(), Position::Forward);
        assert!(Position::from_code(0).is_err());
        assert!(Position::from_code(5).is_err());
    }

    #[test]
    fn formats_prices_from_tenths() {
        assert_eq!(format_price(45), "£4.5m");
        assert_eq!(format_price(130), "£13.0m");
        assert_eq!(format_price(1005), "£100.5m");
    }

    #[test]
    fn formats_signed_deltas() {
        assert_eq!(format_signed_price(5), "+£0.5m");
        assert_eq!(format_signed_price(-12), "-£1.2m");
        assert_eq!(format_signed_price(0), "+£0.0m");
    }
}
