use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    /// An addition, multiplication, shift or exponentiation left the 256-bit domain
    #[msg("Math overflow")]
    Overflow,
    #[msg("Math underflow")]
    Underflow,
    #[msg("Division by zero")]
    DivideByZero,
    /// Log/exp argument (or precision) outside the range the function is defined for
    #[msg("Argument out of domain")]
    OutOfDomain,
    /// Zero supply or balance, weight outside its range, or amount above supply
    #[msg("Invalid input")]
    InvalidInput,
}
