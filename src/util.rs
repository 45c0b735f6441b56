pub fn mean(data: &[f64]) -> Option<f64> {
    let sum = data.iter().sum::<f64>();
    let count = data.len();

    match count {
        positive if positive > 0 => Some(sum / count as f64),
        _ => None,
    }
}

/// Formats a count with its noun, e.g. "1 solve" or "12 solves".
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10., 20., 30., 15., 22.]), Some(19.4));
        assert_eq!(mean(&[11., 12., 13.]), Some(12.0));
    }

    #[test]
    fn test_mean_single_value() {
        assert_eq!(mean(&[8.25]), Some(8.25));
    }

    #[test]
    fn test_mean_empty_slice() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "solve"), "0 solves");
        assert_eq!(pluralize(1, "solve"), "1 solve");
        assert_eq!(pluralize(12, "average"), "12 averages");
    }
}
