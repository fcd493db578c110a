/// Square of `n`. Overflow wraps instead of panicking.
pub fn square(n: i64) -> i64 {
    n.wrapping_mul(n)
}
