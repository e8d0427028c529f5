//! Stack growth guard for deep recursion.
//!
//! Pseudocode expressions nest arbitrarily (`((a:b):c)<3:0>` chains, long
//! `elsif` ladders), and both the parser and the evaluator recurse on them.
//! Wrapping the recursive entry points in [`ensure_sufficient_stack`] keeps
//! hostile or generated input from overflowing the thread stack.
//!
//! On native targets `stacker` grows the stack on demand; on WASM the guard
//! is a plain call.

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_depth_survives() {
        fn nest(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { nest(n - 1) + 1 })
        }

        assert_eq!(nest(200_000), 200_000);
    }

    #[test]
    fn test_passes_result_through() {
        let result: Result<u8, String> = ensure_sufficient_stack(|| Err("defect".to_string()));
        assert_eq!(result, Err("defect".to_string()));
    }
}
