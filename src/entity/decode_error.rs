/// Failure modes of swap decoding. Each one is terminal for a single decode
/// call; nothing is retried here. The bot layer decides how to present them.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("transaction is not yet processed")]
    NotYetProcessed,

    #[error("transaction failed: {0}")]
    ExecutionFailed(String),

    #[error("transaction not confirmed yet")]
    Unconfirmed,

    #[error("Raydium instruction not found in the transaction")]
    InstructionNotFound,

    #[error("cannot resolve token pair: wrapped SOL must be on exactly one side")]
    NoWsolSide,

    #[error("{role} account missing at position {position} of the swap instruction")]
    AccountOutOfRange { role: &'static str, position: usize },

    #[error("malformed swap transaction: {0}")]
    Malformed(String),
}
