// Deeper nested input is rejected with Error::DecodeTooDeep instead of risking
// stack exhaustion on adversarial data
pub const MAX_NESTING_DEPTH: usize = 64;
