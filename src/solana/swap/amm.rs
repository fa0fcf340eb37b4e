use serde_json::Value;
use solana_transaction_status::{
    parse_instruction::ParsedInstruction, EncodedConfirmedTransactionWithStatusMeta,
    UiParsedMessage, UiTransactionTokenBalance,
};

use super::amount::{from_decimals, parse_raw_amount};
use super::config::SwapConfig;
use super::{
    account_at, balance_for_account, first_signature, inner_instructions,
    instruction_program_id, parsed_instruction, parsed_message, partially_decoded,
    pre_token_balances, transaction_meta,
};
use crate::entity::{DecodeError, Swap, SwapType, TokenAccountInfo};

/// Decodes a swap executed through the Raydium AMM v4 program.
///
/// The top-level swap instruction only names accounts. The actual token
/// movement is the pair of spl-token transfers it emitted as inner
/// instructions, and mints plus decimals come from the pre-trade token
/// balances of the pool vaults.
pub(super) fn decode(
    tx: &EncodedConfirmedTransactionWithStatusMeta,
    config: &SwapConfig,
) -> Result<Swap, DecodeError> {
    let timestamp = tx.block_time.ok_or(DecodeError::NotYetProcessed)?;
    let signature = first_signature(tx)?;
    let meta = transaction_meta(tx)?;
    let message = parsed_message(tx)?;

    let swap_index = message
        .instructions
        .iter()
        .position(|instruction| {
            instruction_program_id(instruction) == Some(config.amm_program_id.as_str())
        })
        .ok_or(DecodeError::InstructionNotFound)?;

    let inner = inner_instructions(meta).ok_or(DecodeError::Unconfirmed)?;

    // Every transfer the swap instruction emitted, in execution order.
    let transfers: Vec<&ParsedInstruction> = inner
        .iter()
        .filter(|group| group.index as usize == swap_index)
        .flat_map(|group| group.instructions.iter())
        .filter_map(parsed_instruction)
        .collect();

    let (first_leg, second_leg) = match transfers.as_slice() {
        [first, second, ..] => (*first, *second),
        _ => {
            return Err(DecodeError::Malformed(
                "expected two transfer legs under the swap instruction".to_string(),
            ))
        }
    };

    let balances = pre_token_balances(meta).ok_or_else(|| {
        DecodeError::Malformed("pre-trade token balances are missing".to_string())
    })?;

    // The mint receiving the first transfer decides the trade direction:
    // SOL flowing into the pool means the signer is buying the token.
    let first_destination = transfer_field(first_leg, "destination")?;
    let first_leg_to_wsol = balance_for_account(balances, message, first_destination)
        .map(|balance| balance.mint == config.wsol_mint)
        .unwrap_or(false);

    let swap_instruction = partially_decoded(&message.instructions[swap_index]).ok_or_else(|| {
        DecodeError::Malformed("AMM swap instruction carries no account list".to_string())
    })?;

    let layout = &config.amm_accounts;
    let pool_id = account_at(&swap_instruction.accounts, layout.pool, "pool")?;
    let coin_vault = account_at(&swap_instruction.accounts, layout.coin_vault, "coin vault")?;
    let pc_vault = account_at(&swap_instruction.accounts, layout.pc_vault, "pc vault")?;

    let coin_info = vault_token_info(balances, message, coin_vault)?;
    let pc_info = vault_token_info(balances, message, pc_vault)?;

    let token = match (
        coin_info.mint == config.wsol_mint,
        pc_info.mint == config.wsol_mint,
    ) {
        (true, false) => pc_info,
        (false, true) => coin_info,
        _ => return Err(DecodeError::NoWsolSide),
    };

    let first_amount = parse_raw_amount(transfer_field(first_leg, "amount")?)?;
    let second_amount = parse_raw_amount(transfer_field(second_leg, "amount")?)?;

    let (swap_type, amount_in, amount_out) = if first_leg_to_wsol {
        (
            SwapType::Buy,
            from_decimals(first_amount, config.native_decimals)?,
            from_decimals(second_amount, token.decimals)?,
        )
    } else {
        (
            SwapType::Sell,
            from_decimals(first_amount, token.decimals)?,
            from_decimals(second_amount, config.native_decimals)?,
        )
    };

    let signer = message
        .account_keys
        .first()
        .map(|key| key.pubkey.clone())
        .ok_or_else(|| DecodeError::Malformed("transaction has no account keys".to_string()))?;

    Ok(Swap {
        signature: signature.to_string(),
        timestamp,
        token_mint: token.mint,
        token_decimals: token.decimals,
        swap_type,
        amount_in,
        amount_out,
        pool_id: pool_id.to_string(),
        signer,
    })
}

fn transfer_field<'a>(
    instruction: &'a ParsedInstruction,
    field: &str,
) -> Result<&'a str, DecodeError> {
    instruction
        .parsed
        .get("info")
        .and_then(|info| info.get(field))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            DecodeError::Malformed(format!("transfer instruction has no `{}` field", field))
        })
}

fn vault_token_info(
    balances: &[UiTransactionTokenBalance],
    message: &UiParsedMessage,
    vault: &str,
) -> Result<TokenAccountInfo, DecodeError> {
    let balance = balance_for_account(balances, message, vault).ok_or_else(|| {
        DecodeError::Malformed(format!("no pre-trade balance recorded for vault {}", vault))
    })?;

    Ok(TokenAccountInfo {
        mint: balance.mint.clone(),
        decimals: balance.ui_token_amount.decimals,
    })
}
