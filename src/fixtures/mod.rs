//! Small pure utilities used as the Go-monorepo sample modules
//!
//! Each submodule mirrors one sample package (`app1/pkg`, `app2/pkg`,
//! `app3/pkg`) whose test results feed the JUnit fixtures under
//! `tests/fixtures/`. They do not depend on each other.

pub mod arrays;
pub mod math;
pub mod strings;

pub use arrays::max;
pub use math::square;
pub use strings::is_palindrome;
