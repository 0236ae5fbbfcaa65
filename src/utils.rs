pub const fn is_identical(first: &[u8], second: &[u8]) -> bool {
    let mut index = 0;
    while index != first.len() {
        if first[index] != second[index] {return false;}
        index += 1;
    }
    true
}

// panics if index + M > output.len()
pub const fn splice<const N: usize, const M: usize>(mut output: [u8; N],
                                                    input: [u8; M],
                                                    mut index: usize) -> ([u8; N], usize) {
    let mut input_index = 0;
    while input_index != M {
        output[index] = input[input_index];
        index += 1;
        input_index += 1;
    }
    (output, index)
}

#[cfg(test)]
mod tests {
    use super::{is_identical, splice};
    #[test]
    const fn infallible_is_identical() {
        assert!(is_identical(&[0, 1, 2, 3], &[0, 1, 2, 3]));
        assert!(!is_identical(&[0, 1, 2, 3], &[0, 1, 2, 4]));
    }
    #[test]
    const fn infallible_splice() {
        let (output, index) = splice([0; 6], [55, 88, 72], 0);
        assert!(is_identical(&output, &[55, 88, 72, 0, 0, 0]));
        assert!(index == 3);
        let (output, index) = splice(output, [89, 11, 60], index);
        assert!(is_identical(&output, &[55, 88, 72, 89, 11, 60]));
        assert!(index == 6);
    }
}
