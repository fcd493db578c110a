/// Largest value of `nums`, found by a single linear scan.
///
/// An empty slice yields `0`, not an error. Callers that need to tell
/// "empty" apart from a real maximum of zero must check `is_empty` first.
pub fn max(nums: &[i64]) -> i64 {
    let Some((&first, rest)) = nums.split_first() else {
        return 0;
    };

    let mut max = first;
    for &num in rest {
        if num > max {
            max = num;
        }
    }
    max
}
