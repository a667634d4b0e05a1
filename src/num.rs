//! Small numeric helpers.

/// The smaller of two integers; ties favor `a`.
pub fn minimum_of(a: i32, b: i32) -> i32 {
    if a <= b {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_smaller() {
        assert_eq!(minimum_of(5, 2), 2);
        assert_eq!(minimum_of(2, 5), 2);
    }

    #[test]
    fn ties_favor_first() {
        assert_eq!(minimum_of(3, 3), 3);
    }

    #[test]
    fn handles_negatives() {
        assert_eq!(minimum_of(-1, 1), -1);
        assert_eq!(minimum_of(i32::MIN, 0), i32::MIN);
    }
}
