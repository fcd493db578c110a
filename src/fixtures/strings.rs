/// Case-insensitive palindrome check.
///
/// The input is lowercased first, then characters are compared pairwise
/// from both ends toward the middle. Empty and single-character strings
/// are palindromes.
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.to_lowercase().chars().collect();
    let len = chars.len();
    (0..len / 2).all(|i| chars[i] == chars[len - i - 1])
}
