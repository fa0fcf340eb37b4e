use std::str::FromStr;

use rust_decimal::{prelude::FromPrimitive, Decimal};
use serde_json::Value;
use solana_transaction_status::{EncodedConfirmedTransactionWithStatusMeta, UiInstruction};

use super::config::SwapConfig;
use super::{
    account_at, first_signature, inner_instructions, instruction_program_id, parsed_instruction,
    partially_decoded, transaction_meta,
};
use crate::entity::{DecodeError, Swap, SwapType};

/// One transferChecked leg of a CP swap. Unlike the AMM layout, this program
/// reports amounts already scaled to human units together with their mint and
/// decimals, so no further decimal adjustment is applied.
struct TransferLeg {
    mint: String,
    decimals: u8,
    amount: Decimal,
}

/// Decodes a swap executed through the Raydium CP swap program. The whole
/// trade lives in a single inner-instruction group: the program invocation
/// first, followed by the two transferChecked legs.
pub(super) fn decode(
    tx: &EncodedConfirmedTransactionWithStatusMeta,
    config: &SwapConfig,
) -> Result<Swap, DecodeError> {
    let timestamp = tx.block_time.ok_or(DecodeError::NotYetProcessed)?;
    let signature = first_signature(tx)?;
    let meta = transaction_meta(tx)?;

    let inner = inner_instructions(meta).ok_or(DecodeError::Unconfirmed)?;

    let group = inner
        .iter()
        .find(|group| {
            group.instructions.iter().any(|instruction| {
                instruction_program_id(instruction) == Some(config.cp_swap_program_id.as_str())
            })
        })
        .ok_or(DecodeError::InstructionNotFound)?;

    let head = group
        .instructions
        .first()
        .and_then(partially_decoded)
        .ok_or_else(|| {
            DecodeError::Malformed(
                "CP swap group carries no instruction with an account list".to_string(),
            )
        })?;

    let layout = &config.cp_swap_accounts;
    let signer = account_at(&head.accounts, layout.signer, "signer")?;
    let pool_id = account_at(&head.accounts, layout.pool, "pool")?;

    let leg_in = transfer_leg(group.instructions.get(1), "second")?;
    let leg_out = transfer_leg(group.instructions.get(2), "third")?;

    let (swap_type, token_leg) = match (
        leg_in.mint == config.wsol_mint,
        leg_out.mint == config.wsol_mint,
    ) {
        (true, false) => (SwapType::Buy, &leg_out),
        (false, true) => (SwapType::Sell, &leg_in),
        _ => return Err(DecodeError::NoWsolSide),
    };

    Ok(Swap {
        signature: signature.to_string(),
        timestamp,
        token_mint: token_leg.mint.clone(),
        token_decimals: token_leg.decimals,
        swap_type,
        amount_in: leg_in.amount,
        amount_out: leg_out.amount,
        pool_id: pool_id.to_string(),
        signer: signer.to_string(),
    })
}

fn transfer_leg(
    instruction: Option<&UiInstruction>,
    position: &str,
) -> Result<TransferLeg, DecodeError> {
    let parsed = instruction.and_then(parsed_instruction).ok_or_else(|| {
        DecodeError::Malformed(format!("CP swap group has no parsed {} instruction", position))
    })?;

    let info = parsed.parsed.get("info").ok_or_else(|| {
        DecodeError::Malformed(format!("{} CP swap instruction has no `info` field", position))
    })?;

    let mint = info.get("mint").and_then(Value::as_str).ok_or_else(|| {
        DecodeError::Malformed(format!("{} CP swap instruction has no `mint` field", position))
    })?;

    let token_amount = info.get("tokenAmount").ok_or_else(|| {
        DecodeError::Malformed(format!(
            "{} CP swap instruction has no `tokenAmount` field",
            position
        ))
    })?;

    let decimals = token_amount
        .get("decimals")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            DecodeError::Malformed(format!(
                "{} CP swap instruction reports no decimals",
                position
            ))
        })? as u8;

    // Prefer the exact decimal string; the float report is lossy and only
    // used when the string form is absent.
    let amount = match token_amount.get("uiAmountString").and_then(Value::as_str) {
        Some(value) => Decimal::from_str(value).map_err(|e| {
            DecodeError::Malformed(format!("unparseable unit amount `{}`: {}", value, e))
        })?,
        None => token_amount
            .get("uiAmount")
            .and_then(Value::as_f64)
            .and_then(Decimal::from_f64)
            .ok_or_else(|| {
                DecodeError::Malformed(format!(
                    "{} CP swap instruction reports no unit amount",
                    position
                ))
            })?,
    };

    Ok(TransferLeg {
        mint: mint.to_string(),
        decimals,
        amount,
    })
}
