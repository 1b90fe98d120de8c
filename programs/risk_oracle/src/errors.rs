use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    #[msg("Unauthorized: signer may not perform this action")]
    Unauthorized,

    #[msg("Invalid commitment: hash does not match")]
    InvalidCommitment,

    #[msg("Assessment already revealed")]
    AlreadyRevealed,

    #[msg("Record not found")]
    NotFound,

    #[msg("Score out of range: must be 0-100")]
    OutOfRange,

    #[msg("An assessment already exists at this index")]
    AlreadyExists,

    #[msg("The all-zero key cannot be registered as an assessor")]
    InvalidIdentity,

    #[msg("Oracle is already initialized")]
    AlreadyInitialized,

    #[msg("Arithmetic overflow")]
    Overflow,
}
