//! Number formatting for sheet text.

/// Signed modifier: `+3`, `+0`, `-1`.
pub fn format_modifier(value: i32) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Bonus that disappears when zero: `+2`, `-1`, ``.
pub fn format_bonus(value: i32) -> String {
    match value {
        v if v > 0 => format!("+{}", v),
        v if v < 0 => v.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_always_carry_a_sign() {
        assert_eq!(format_modifier(3), "+3");
        assert_eq!(format_modifier(0), "+0");
        assert_eq!(format_modifier(-2), "-2");
    }

    #[test]
    fn zero_bonus_is_blank() {
        assert_eq!(format_bonus(4), "+4");
        assert_eq!(format_bonus(0), "");
        assert_eq!(format_bonus(-1), "-1");
    }
}
