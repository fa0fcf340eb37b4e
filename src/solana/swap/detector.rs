use solana_transaction_status::{UiInnerInstructions, UiParsedMessage};

use super::config::SwapConfig;
use super::instruction_program_id;
use crate::entity::DecodeError;

/// The two Raydium instruction layouts the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapProtocol {
    /// Swap issued as a top-level AMM v4 instruction; transfers and balances
    /// have to be cross-referenced from metadata.
    AmmV4,
    /// Swap living entirely inside one CP swap inner-instruction group.
    CpSwap,
}

/// Picks the protocol that produced the trade.
///
/// A top-level AMM v4 instruction wins over a CP swap inner match when a
/// transaction would satisfy both scans. An empty inner-instruction set is a
/// non-match here, not an error.
pub fn detect(
    message: &UiParsedMessage,
    inner_instructions: &[UiInnerInstructions],
    config: &SwapConfig,
) -> Result<SwapProtocol, DecodeError> {
    let has_amm_instruction = message
        .instructions
        .iter()
        .any(|instruction| instruction_program_id(instruction) == Some(config.amm_program_id.as_str()));

    if has_amm_instruction {
        return Ok(SwapProtocol::AmmV4);
    }

    let has_cp_swap_instruction = inner_instructions.iter().any(|group| {
        group.instructions.iter().any(|instruction| {
            instruction_program_id(instruction) == Some(config.cp_swap_program_id.as_str())
        })
    });

    if has_cp_swap_instruction {
        Ok(SwapProtocol::CpSwap)
    } else {
        Err(DecodeError::InstructionNotFound)
    }
}
