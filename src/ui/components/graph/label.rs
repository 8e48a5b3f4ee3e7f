//! Text for the currently selected sample

use core::fmt::Write;

use super::constants::MAX_LABEL_LENGTH;

/// Label text for the sample at `index`, e.g. `"Current Value: 42.5"`
///
/// Values always carry a decimal point (`42.0`, not `42`); very large or
/// small magnitudes switch to exponent form. Returns `None` when `index`
/// is out of range or the text does not fit.
pub fn current_value_label(
    samples: &[f32],
    index: usize,
) -> Option<heapless::String<MAX_LABEL_LENGTH>> {
    let value = samples.get(index)?;

    let mut label = heapless::String::new();
    // Debug keeps the fractional part of whole numbers
    write!(label, "Current Value: {:?}", value).ok()?;
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_selected_sample() {
        let samples = [1.0, 42.5, 3.0];
        let label = current_value_label(&samples, 1).unwrap();
        assert_eq!(label.as_str(), "Current Value: 42.5");
    }

    #[test]
    fn test_label_keeps_decimal_for_whole_numbers() {
        let samples = [42.0, -3.0, 0.0];
        let expected = ["Current Value: 42.0", "Current Value: -3.0", "Current Value: 0.0"];

        for (index, text) in expected.iter().enumerate() {
            let label = current_value_label(&samples, index).unwrap();
            assert_eq!(label.as_str(), *text);
        }
    }

    #[test]
    fn test_label_extreme_values_fit() {
        let samples = [f32::MAX, f32::MIN_POSITIVE];
        for index in 0..samples.len() {
            let label = current_value_label(&samples, index);
            assert!(label.is_some(), "sample {} did not fit", index);
        }
    }

    #[test]
    fn test_label_out_of_range() {
        assert!(current_value_label(&[1.0], 1).is_none());
        assert!(current_value_label(&[], 0).is_none());
    }
}
